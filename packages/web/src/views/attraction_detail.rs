//! Attraction detail page with the booking form.

use dioxus::prelude::*;
use store::{Notice, Order};
use ui::{format_price, make_repo, show_notice, use_config, use_notice, use_session};

use crate::Route;

const MAX_TICKETS: u32 = 99;

#[component]
pub fn AttractionDetail(id: i64) -> Element {
    let config = use_config();
    let session = use_session();
    let nav = use_navigator();
    let mut notices = use_notice();
    let mut count = use_signal(|| 1u32);

    let repo = make_repo(&config);
    let Some(attraction) = repo.attraction(id) else {
        return rsx! {
            div {
                class: "empty",
                p { "景点不存在" }
                Link { to: Route::Attractions {}, "返回景点列表" }
            }
        };
    };

    let total = format_price(attraction.price * f64::from(count()));
    let price = format_price(attraction.price);

    let book = {
        let attraction = attraction.clone();
        move |_| {
            let Some(user) = session.read().user().cloned() else {
                show_notice(&mut notices, Notice::warning(store::guard::LOGIN_REQUIRED));
                nav.push(Route::Login {});
                return;
            };
            let order = Order::placed_now(&user.username, &attraction, count());
            tracing::info!(
                "{} booked {} x{} ({})",
                user.username,
                order.attraction_name,
                order.count,
                order.total_price
            );
            repo.add_order(order);
            show_notice(&mut notices, Notice::success("预订成功，请尽快支付"));
            nav.push(Route::Orders {});
        }
    };

    rsx! {
        article {
            class: "attraction-detail",
            img { class: "attraction-detail-image", src: "{attraction.image}", alt: "{attraction.name}" }
            div {
                class: "attraction-detail-body",
                span { class: "attraction-card-category", "{attraction.category}" }
                h1 { "{attraction.name}" }
                p { "{attraction.description}" }
                p { class: "attraction-card-price", "门票 {price}" }

                div {
                    class: "booking",
                    label { r#for: "ticket-count", "数量" }
                    input {
                        id: "ticket-count",
                        r#type: "number",
                        min: "1",
                        max: "{MAX_TICKETS}",
                        value: "{count}",
                        oninput: move |evt| {
                            if let Ok(n) = evt.value().parse::<u32>() {
                                count.set(n.clamp(1, MAX_TICKETS));
                            }
                        },
                    }
                    span { class: "booking-total", "合计 {total}" }
                    button { class: "booking-submit", onclick: book, "立即预订" }
                }
            }
        }
    }
}
