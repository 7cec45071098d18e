use dioxus::prelude::*;

use crate::icons::FaUser;
use crate::session::{use_session, LogoutButton};
use crate::{Icon, UI_CSS};

/// Top navigation bar. The app passes its route links as children; the
/// current user and a logout button are shown on the right when logged in.
#[component]
pub fn Navbar(children: Element) -> Element {
    let session = use_session();
    let username = session.read().user().map(|u| u.username.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            span { class: "navbar-brand", "智慧旅游" }
            div {
                class: "navbar-links",
                {children}
            }
            if let Some(name) = username {
                div {
                    class: "navbar-user",
                    Icon { icon: FaUser, width: 14, height: 14 }
                    span { class: "navbar-user-name", "{name}" }
                    LogoutButton { class: "navbar-logout" }
                }
            }
        }
    }
}
