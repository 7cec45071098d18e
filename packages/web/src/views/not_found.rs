use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        h1 { "页面不存在" }
        p { "/{path}" }
        Link { to: Route::Home {}, "返回首页" }
    }
}
