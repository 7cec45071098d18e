//! Login page view with username/password form.

use dioxus::prelude::*;
use store::{Notice, Session};
use ui::{show_notice, use_config, use_notice, use_session};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let config = use_config();
    let mut session = use_session();
    let nav = use_navigator();
    let mut notices = use_notice();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    if let Some(user) = session.read().user() {
        let name = user.username.clone();
        return rsx! {
            div {
                class: "login-container",
                p { "已登录为 {name}" }
                Link { to: Route::Home {}, "返回首页" }
            }
        };
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let name = username().trim().to_string();
        if name.is_empty() || password().is_empty() {
            show_notice(&mut notices, Notice::warning("请输入用户名和密码"));
            return;
        }

        let mut info = Session::new(name.clone());
        if name == config.admin.username {
            info = info.with_role(config.admin.role.clone());
        }
        session.write().set_user(info);
        show_notice(&mut notices, Notice::success(format!("欢迎回来，{name}")));
        nav.push(Route::Home {});
    };

    rsx! {
        div {
            class: "login-container",
            h1 { "用户登录" }
            form {
                class: "login-form",
                onsubmit: handle_login,
                label { r#for: "username", "用户名" }
                input {
                    id: "username",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "password", "密码" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { r#type: "submit", "登录" }
            }
        }
    }
}
