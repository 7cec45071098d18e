use dioxus::prelude::*;
use ui::{make_repo, use_config, use_session, OrderTable};

/// The current user's orders, newest first.
#[component]
pub fn Orders() -> Element {
    let config = use_config();
    let session = use_session();

    let username = session.read().user().map(|u| u.username.clone());
    let orders = match username {
        Some(ref name) => make_repo(&config).get_user_orders(name),
        None => Vec::new(),
    };

    rsx! {
        h1 { "我的订单" }
        OrderTable { orders }
    }
}
