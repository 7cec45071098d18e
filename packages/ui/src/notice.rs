//! Transient notices (toasts) shown at the top of the page.
//!
//! Views raise a notice with [`show_notice`]; the single [`NoticeHost`]
//! rendered by the layout displays the latest one and hides it again after
//! `notice.display_ms` from the configuration.

use dioxus::prelude::*;
use store::{Notice, NoticeLevel};

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaTriangleExclamation, FaXmark};
use crate::session::use_config;
use crate::Icon;

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    /// Bumped on every new notice so a pending dismissal of an older one is ignored.
    seq: u64,
}

pub fn use_notice() -> Signal<NoticeState> {
    use_context::<Signal<NoticeState>>()
}

pub fn show_notice(state: &mut Signal<NoticeState>, notice: Notice) {
    match notice.level {
        NoticeLevel::Error => tracing::warn!("{}", notice.message),
        _ => tracing::debug!("{}", notice.message),
    }
    let mut state = state.write();
    state.seq += 1;
    state.current = Some(notice);
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Warning => "notice notice--warning",
        NoticeLevel::Error => "notice notice--error",
    }
}

#[cfg(target_arch = "wasm32")]
fn dismiss_later(mut state: Signal<NoticeState>, seq: u64, display_ms: u32) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(display_ms).await;
        if state.peek().seq == seq {
            state.write().current = None;
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn dismiss_later(_state: Signal<NoticeState>, _seq: u64, _display_ms: u32) {}

#[component]
pub fn NoticeHost() -> Element {
    let mut state = use_notice();
    let display_ms = use_config().notice.display_ms;

    use_effect(move || {
        let seq = state.read().seq;
        if display_ms > 0 && state.peek().current.is_some() {
            dismiss_later(state, seq, display_ms);
        }
    });

    let Some(notice) = state.read().current.clone() else {
        return rsx! {};
    };

    let icon = match notice.level {
        NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
        NoticeLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
        NoticeLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
    };

    rsx! {
        div {
            class: level_class(notice.level),
            {icon}
            span { class: "notice-message", "{notice.message}" }
            button {
                class: "notice-close",
                title: "关闭",
                onclick: move |_| state.write().current = None,
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
