use dioxus::prelude::*;
use ui::{make_repo, use_config, AttractionCard};

use crate::Route;

const FEATURED: usize = 6;

/// Landing page with a handful of featured attractions.
#[component]
pub fn Home() -> Element {
    let config = use_config();
    let nav = use_navigator();
    let featured = use_signal(move || {
        let mut attractions = make_repo(&config).get_attractions();
        attractions.truncate(FEATURED);
        attractions
    });

    rsx! {
        section {
            class: "hero",
            h1 { "发现中国之美" }
            p { "自然风光、历史古迹、主题乐园，一站式预订。" }
            Link { class: "hero-cta", to: Route::Attractions {}, "浏览全部景点" }
        }

        h2 { "热门景点" }
        div {
            class: "attraction-grid",
            for attraction in featured() {
                AttractionCard {
                    key: "{attraction.id}",
                    attraction: attraction.clone(),
                    on_select: move |id| {
                        nav.push(Route::AttractionDetail { id });
                    },
                }
            }
        }
    }
}
