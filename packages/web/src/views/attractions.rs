use dioxus::prelude::*;
use ui::{make_repo, use_config, AttractionCard};

use crate::Route;

/// Full attraction listing with a category filter.
#[component]
pub fn Attractions() -> Element {
    let config = use_config();
    let nav = use_navigator();
    let repo = make_repo(&config);
    let all = use_signal(|| repo.get_attractions());
    let categories = use_signal(|| repo.categories());
    let mut selected = use_signal(|| Option::<String>::None);

    let visible: Vec<_> = all()
        .into_iter()
        .filter(|a| selected().map_or(true, |c| a.category == c))
        .collect();

    rsx! {
        h1 { "全部景点" }

        div {
            class: "category-filter",
            button {
                class: if selected().is_none() { "category active" } else { "category" },
                onclick: move |_| selected.set(None),
                "全部"
            }
            for category in categories() {
                button {
                    key: "{category}",
                    class: if selected().as_deref() == Some(category.as_str()) { "category active" } else { "category" },
                    onclick: {
                        let category = category.clone();
                        move |_| selected.set(Some(category.clone()))
                    },
                    "{category}"
                }
            }
        }

        if visible.is_empty() {
            p { class: "empty", "该分类下暂无景点" }
        }

        div {
            class: "attraction-grid",
            for attraction in visible {
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
