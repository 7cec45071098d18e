use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        h1 { "关于我们" }
        p { "智慧旅游为您提供国内热门景点的门票预订服务。" }
        p { "所有数据保存在您的浏览器本地，清除浏览器数据会重置景点和订单。" }
    }
}
