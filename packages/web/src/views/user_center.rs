use dioxus::prelude::*;
use ui::{format_price, make_repo, use_config, use_session, LogoutButton};

/// Profile page for the logged-in user.
#[component]
pub fn UserCenter() -> Element {
    let config = use_config();
    let session = use_session();

    let Some(user) = session.read().user().cloned() else {
        return rsx! {};
    };

    let orders = make_repo(&config).get_user_orders(&user.username);
    let spent = format_price(orders.iter().map(|o| o.total_price).sum());
    let role = user.role.clone().unwrap_or_else(|| "普通用户".to_string());
    let is_admin = user.is_admin(&config.admin.username, &config.admin.role);

    rsx! {
        h1 { "个人中心" }
        dl {
            class: "profile",
            dt { "用户名" }
            dd { "{user.username}" }
            dt { "角色" }
            dd { "{role}" }
            dt { "订单数" }
            dd { "{orders.len()}" }
            dt { "累计消费" }
            dd { "{spent}" }
        }
        if is_admin {
            p { class: "profile-admin", "您拥有管理员权限" }
        }
        LogoutButton { class: "profile-logout" }
    }
}
