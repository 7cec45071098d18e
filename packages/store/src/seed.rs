//! Built-in data written to storage the first time a collection is read.

use chrono::{DateTime, Duration, Local};

use crate::models::{format_create_time, Attraction, Order, OrderStatus};

const IMAGE_BASE: &str = "https://picsum.photos/600/400";

/// (id, name, price, description, image tag, category)
const ATTRACTIONS: [(i64, &str, f64, &str, &str, &str); 15] = [
    (1, "西湖风景区", 80.0, "杭州西湖，中国首批国家重点风景名胜区，中国十大风景名胜之一。", "西湖", "自然风光"),
    (2, "黄山风景区", 230.0, "黄山位于安徽省南部，是中国著名的山岳风景区，以奇松、怪石、云海、温泉、冬雪五绝著称。", "黄山", "自然风光"),
    (3, "九寨沟", 190.0, "九寨沟位于四川省阿坝藏族羌族自治州九寨沟县，以翠海、叠瀑、彩林、雪峰、藏情、蓝冰六绝著称。", "九寨沟", "自然风光"),
    (4, "张家界", 228.0, "张家界以其独特的石英砂岩峰林地貌而闻名，是电影《阿凡达》的取景地之一。", "张家界", "自然风光"),
    (5, "桂林山水", 150.0, "桂林山水甲天下，以其独特的喀斯特地貌和秀美的山水风光而闻名于世。", "桂林", "自然风光"),
    (6, "天涯海角", 95.0, "天涯海角位于海南省三亚市，是著名的海滨旅游胜地，以其独特的自然景观和文化内涵吸引着众多游客。", "天涯海角", "自然风光"),
    (7, "故宫博物院", 60.0, "北京故宫，旧称紫禁城，是中国明清两代的皇家宫殿，世界上现存规模最大、保存最为完整的木质结构古建筑之一。", "故宫", "历史古迹"),
    (8, "长城", 80.0, "长城是中国古代的军事防御工程，是一道高大、坚固而连绵不断的长垣，用以限隔敌骑的行动。", "长城", "历史古迹"),
    (9, "颐和园", 40.0, "颐和园位于北京市海淀区，是中国清朝时期皇家园林，它是以昆明湖、万寿山为基址，以杭州西湖为蓝本的大型山水园林。", "颐和园", "历史古迹"),
    (10, "兵马俑", 120.0, "秦始皇兵马俑位于陕西省西安市，是中国古代大型雕塑群，被誉为\"世界第八大奇迹\"。", "兵马俑", "历史古迹"),
    (11, "丽江古城", 50.0, "丽江古城是中国保存最完整的古城之一，以其独特的纳西族文化和古朴的建筑风格而闻名。", "丽江", "历史古迹"),
    (12, "布达拉宫", 200.0, "布达拉宫位于西藏自治区拉萨市，是世界上海拔最高、最庞大的古代宫堡式建筑群。", "布达拉宫", "历史古迹"),
    (13, "天坛", 35.0, "天坛位于北京市东城区，是明清两代皇帝祭天、祈求丰年的场所，是中国现存最大的古代祭祀性建筑群。", "天坛", "历史古迹"),
    (14, "上海迪士尼", 399.0, "上海迪士尼度假区是中国内地首座迪士尼主题乐园，拥有七大主题园区，为游客带来神奇、快乐的体验。", "disney", "主题乐园"),
    (15, "环球影城", 418.0, "环球影城是世界著名的主题公园品牌，以好莱坞电影为主题，提供各种精彩的游乐设施和表演。", "环球影城", "主题乐园"),
];

/// The default attraction list, in display order.
pub fn default_attractions() -> Vec<Attraction> {
    ATTRACTIONS
        .iter()
        .map(|&(id, name, price, description, tag, category)| Attraction {
            id,
            name: name.to_string(),
            price,
            description: description.to_string(),
            image: format!("{IMAGE_BASE}?{tag}"),
            category: category.to_string(),
        })
        .collect()
}

/// Two sample orders placed one and two days before `now`, newest first.
pub fn default_orders(now: DateTime<Local>) -> Vec<Order> {
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);

    vec![
        Order {
            id: yesterday.timestamp_millis(),
            user: "user001".to_string(),
            attraction_name: "故宫".to_string(),
            price: 60.0,
            count: 2,
            total_price: 120.0,
            status: OrderStatus::Completed,
            create_time: format_create_time(yesterday),
        },
        Order {
            id: two_days_ago.timestamp_millis(),
            user: "user002".to_string(),
            attraction_name: "长城".to_string(),
            price: 80.0,
            count: 1,
            total_price: 80.0,
            status: OrderStatus::Pending,
            create_time: format_create_time(two_days_ago),
        },
    ]
}
