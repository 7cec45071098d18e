//! Shared page layout and navigation guard.
//!
//! Every route renders inside [`AppLayout`], so this is where each navigation
//! is checked. The session is re-read from storage on every route change and
//! the route's [`store::RouteAccess`] decides whether the outlet renders. A
//! rejected navigation shows its notice and replaces the route.

use dioxus::prelude::*;
use store::guard::authorize_from_storage;
use store::{Decision, RedirectTarget};
use ui::{make_storage, show_notice, use_config, use_notice, use_session, Navbar, NoticeHost};

use crate::Route;

fn redirect_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Login => Route::Login {},
        RedirectTarget::Home => Route::Home {},
    }
}

#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    let config = use_config();
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notice();

    let decision = authorize_from_storage(route.access(), &make_storage(), &config);
    let allowed = decision.is_allowed();

    use_effect(use_reactive!(|(route, decision)| {
        if let Decision::Redirect { to, notice } = decision {
            tracing::debug!("Guard redirected {route} to {to:?}");
            show_notice(&mut notices, notice);
            nav.replace(redirect_route(to));
        }
    }));

    let logged_in = session.read().is_logged_in();

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "首页" }
            Link { to: Route::Attractions {}, "景点" }
            Link { to: Route::Orders {}, "我的订单" }
            Link { to: Route::UserCenter {}, "个人中心" }
            Link { to: Route::Admin {}, "管理后台" }
            Link { to: Route::About {}, "关于" }
            if !logged_in {
                Link { to: Route::Login {}, "登录" }
            }
        }
        NoticeHost {}
        main {
            class: "page",
            if allowed {
                Outlet::<Route> {}
            }
        }
    }
}
