//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{AppConfig, SessionStore};

use crate::notice::NoticeState;
use crate::storage::{make_storage, AppStorage};

/// Get the session store.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionStore<AppStorage>> {
    use_context::<Signal<SessionStore<AppStorage>>>()
}

/// Get the application configuration.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Provider component for the configuration, session and notice contexts.
/// Wrap your app with this component before any view that reads them.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionStore::load(make_storage(), &config)));
    use_context_provider(|| Signal::new(NoticeState::default()));
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Hard reset of the running page.
fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Failed to reload page: {:?}", e);
            }
        }
    }
}

/// Button to log out the current user.
///
/// Clears the session and reloads the page so that no in-memory state from
/// the previous user survives.
#[component]
pub fn LogoutButton(
    #[props(default = "退出登录".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        reload_page();
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
