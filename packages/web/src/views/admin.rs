//! Admin back office: edit the attraction catalogue and review all orders.
//!
//! Every change rewrites the whole `attractions_data` collection.

use dioxus::prelude::*;
use store::{Attraction, Notice};
use ui::{format_price, make_repo, parse_price, show_notice, use_config, use_notice, OrderTable};

#[component]
pub fn Admin() -> Element {
    let config = use_config();
    let mut notices = use_notice();
    let repo = make_repo(&config);
    let mut attractions = use_signal(|| repo.get_attractions());
    let orders = repo.get_all_orders();

    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);

    let save = {
        let repo = repo.clone();
        move |list: Vec<Attraction>| {
            repo.save_attractions(&list);
            attractions.set(list);
        }
    };

    let save_on_delete = save.clone();
    let save_on_price = save.clone();
    let mut save_on_add = save;
    let ids = repo.clone();

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(parsed_price) = parse_price(&price()) else {
            show_notice(&mut notices, Notice::warning("请输入有效的价格"));
            return;
        };
        let trimmed = name().trim().to_string();
        if trimmed.is_empty() {
            show_notice(&mut notices, Notice::warning("请填写景点名称和价格"));
            return;
        }

        let mut list = attractions();
        list.push(Attraction {
            id: ids.next_attraction_id(),
            name: trimmed.clone(),
            price: parsed_price,
            description: description().trim().to_string(),
            image: image().trim().to_string(),
            category: category().trim().to_string(),
        });
        save_on_add(list);

        name.set(String::new());
        price.set(String::new());
        description.set(String::new());
        image.set(String::new());
        show_notice(&mut notices, Notice::success(format!("已添加景点 {trimmed}")));
    };

    rsx! {
        h1 { "管理后台" }

        section {
            class: "admin-section",
            h2 { "景点管理（{attractions.read().len()}）" }
            table {
                class: "order-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "名称" }
                        th { "分类" }
                        th { "价格" }
                        th { "" }
                    }
                }
                tbody {
                    for attraction in attractions() {
                        tr {
                            key: "{attraction.id}",
                            td { "{attraction.id}" }
                            td { "{attraction.name}" }
                            td { "{attraction.category}" }
                            td {
                                input {
                                    class: "admin-price",
                                    r#type: "number",
                                    min: "0",
                                    value: "{attraction.price}",
                                    title: format_price(attraction.price),
                                    onchange: {
                                        let mut save = save_on_price.clone();
                                        let id = attraction.id;
                                        move |evt: FormEvent| {
                                            let Some(new_price) = parse_price(&evt.value()) else {
                                                return;
                                            };
                                            let mut list = attractions();
                                            if let Some(a) = list.iter_mut().find(|a| a.id == id) {
                                                a.price = new_price;
                                            }
                                            save(list);
                                        }
                                    },
                                }
                            }
                            td {
                                button {
                                    class: "admin-delete",
                                    onclick: {
                                        let mut save = save_on_delete.clone();
                                        let id = attraction.id;
                                        let name = attraction.name.clone();
                                        move |_| {
                                            let mut list = attractions();
                                            list.retain(|a| a.id != id);
                                            save(list);
                                            show_notice(&mut notices, Notice::success(format!("已删除景点 {name}")));
                                        }
                                    },
                                    "删除"
                                }
                            }
                        }
                    }
                }
            }

            form {
                class: "admin-form",
                onsubmit: handle_add,
                h3 { "新增景点" }
                input { placeholder: "名称", value: "{name}", oninput: move |evt| name.set(evt.value()) }
                input { placeholder: "价格", r#type: "number", min: "0", value: "{price}", oninput: move |evt| price.set(evt.value()) }
                input { placeholder: "分类", value: "{category}", oninput: move |evt| category.set(evt.value()) }
                input { placeholder: "图片地址", value: "{image}", oninput: move |evt| image.set(evt.value()) }
                textarea { placeholder: "简介", value: "{description}", oninput: move |evt| description.set(evt.value()) }
                button { r#type: "submit", "添加" }
            }
        }

        section {
            class: "admin-section",
            h2 { "全部订单（{orders.len()}）" }
            OrderTable { orders, show_user: true }
        }
    }
}
