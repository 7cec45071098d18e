use dioxus::prelude::*;
use store::Attraction;

/// Render a price in yuan, dropping the fraction when it is whole.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("¥{price:.0}")
    } else {
        format!("¥{price:.2}")
    }
}

/// Parse a user-entered price. Only finite, non-negative amounts are accepted,
/// since JSON cannot store `NaN` or infinities.
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

/// Listing card for one attraction.
#[component]
pub fn AttractionCard(attraction: Attraction, on_select: EventHandler<i64>) -> Element {
    let id = attraction.id;
    let price = format_price(attraction.price);

    rsx! {
        div {
            class: "attraction-card",
            onclick: move |_| on_select.call(id),
            img {
                class: "attraction-card-image",
                src: "{attraction.image}",
                alt: "{attraction.name}",
            }
            div {
                class: "attraction-card-body",
                span { class: "attraction-card-category", "{attraction.category}" }
                h3 { class: "attraction-card-name", "{attraction.name}" }
                p { class: "attraction-card-description", "{attraction.description}" }
                span { class: "attraction-card-price", "{price}" }
            }
        }
    }
}
