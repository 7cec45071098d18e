use dioxus::prelude::*;
use store::{Order, OrderStatus};

use crate::attraction_card::format_price;

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "order-status order-status--completed",
        OrderStatus::Pending => "order-status order-status--pending",
        OrderStatus::Cancelled => "order-status order-status--cancelled",
        OrderStatus::Other => "order-status",
    }
}

/// Table of orders, newest first as given.
#[component]
pub fn OrderTable(
    orders: Vec<Order>,
    /// Show the buyer column (admin view).
    #[props(default = false)]
    show_user: bool,
) -> Element {
    if orders.is_empty() {
        return rsx! {
            p { class: "order-empty", "暂无订单" }
        };
    }

    rsx! {
        table {
            class: "order-table",
            thead {
                tr {
                    th { "订单号" }
                    if show_user {
                        th { "用户" }
                    }
                    th { "景点" }
                    th { "单价" }
                    th { "数量" }
                    th { "总价" }
                    th { "状态" }
                    th { "下单时间" }
                }
            }
            tbody {
                // Ids may repeat, so key on position as well
                for (index, order) in orders.into_iter().enumerate() {
                    tr {
                        key: "{index}-{order.id}",
                        td { "{order.id}" }
                        if show_user {
                            td { "{order.user}" }
                        }
                        td { "{order.attraction_name}" }
                        td { {format_price(order.price)} }
                        td { "{order.count}" }
                        td { {format_price(order.total_price)} }
                        td {
                            span { class: status_class(order.status), {order.status.label()} }
                        }
                        td { "{order.create_time}" }
                    }
                }
            }
        }
    }
}
