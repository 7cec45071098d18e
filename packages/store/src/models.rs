//! # Domain models
//!
//! The three records the application persists. All are
//! `Serialize + Deserialize` and use the JSON field names already present in browser
//! storage (`attractionName`, `totalPrice`, `createTime`), so
//! existing `localStorage` contents load unchanged.
//!
//! | Struct | Stored under |
//! |--------|--------------|
//! | [`Session`] | `user_info` (legacy: `user`) |
//! | [`Attraction`] | `attractions_data`, as an ordered list |
//! | [`Order`] | `site_orders`, as a newest-first list |

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Display format of [`Order::create_time`].
pub const CREATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// The currently authenticated browser user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: None,
        }
    }

    /// Builder method to set the role marker.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Whether this session passes the admin check: the account name or the
    /// role marker matches.
    pub fn is_admin(&self, admin_username: &str, admin_role: &str) -> bool {
        self.username == admin_username || self.role.as_deref() == Some(admin_role)
    }
}

/// A bookable attraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Image URL
    pub image: String,
    pub category: String,
}

/// Lifecycle state of an [`Order`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "待支付")]
    Pending,
    #[serde(rename = "已取消")]
    Cancelled,
    /// Any status string this build does not know.
    #[serde(other, rename = "其他")]
    Other,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "已完成",
            OrderStatus::Pending => "待支付",
            OrderStatus::Cancelled => "已取消",
            OrderStatus::Other => "其他",
        }
    }
}

/// A booking made by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Creation time in milliseconds since the epoch. Not unique if two orders
    /// are created within the same millisecond.
    pub id: i64,
    /// Username of the buyer.
    pub user: String,
    pub attraction_name: String,
    pub price: f64,
    pub count: u32,
    pub total_price: f64,
    pub status: OrderStatus,
    pub create_time: String,
}

impl Order {
    /// Create a pending order for `count` tickets to `attraction`, stamped `now`.
    pub fn new(user: &str, attraction: &Attraction, count: u32, now: DateTime<Local>) -> Self {
        Self {
            id: now.timestamp_millis(),
            user: user.to_string(),
            attraction_name: attraction.name.clone(),
            price: attraction.price,
            count,
            total_price: attraction.price * f64::from(count),
            status: OrderStatus::Pending,
            create_time: format_create_time(now),
        }
    }

    /// Create a pending order stamped with the current local time.
    pub fn placed_now(user: &str, attraction: &Attraction, count: u32) -> Self {
        Self::new(user, attraction, count, Local::now())
    }

    /// Builder method to set the status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

/// Render a timestamp the way [`Order::create_time`] stores it.
pub fn format_create_time(at: DateTime<Local>) -> String {
    at.format(CREATE_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_attraction() -> Attraction {
        Attraction {
            id: 8,
            name: "长城".to_string(),
            price: 80.0,
            description: "".to_string(),
            image: "https://picsum.photos/600/400?长城".to_string(),
            category: "历史古迹".to_string(),
        }
    }

    #[test]
    fn test_session_role_is_optional() {
        let session: Session = serde_json::from_str(r#"{"username":"user001"}"#).unwrap();
        assert_eq!(session, Session::new("user001"));
        assert_eq!(serde_json::to_string(&session).unwrap(), r#"{"username":"user001"}"#);

        let admin: Session =
            serde_json::from_str(r#"{"username":"boss","role":"ADMIN","avatar":"x"}"#).unwrap();
        assert_eq!(admin.role.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_is_admin() {
        assert!(Session::new("admin").is_admin("admin", "ADMIN"));
        assert!(Session::new("boss").with_role("ADMIN").is_admin("admin", "ADMIN"));
        assert!(!Session::new("user001").is_admin("admin", "ADMIN"));
        assert!(!Session::new("user001").with_role("USER").is_admin("admin", "ADMIN"));
        // Exact, case-sensitive match
        assert!(!Session::new("Admin").with_role("admin").is_admin("admin", "ADMIN"));
    }

    #[test]
    fn test_order_new() {
        let now = Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap();
        let order = Order::new("user001", &sample_attraction(), 3, now);

        assert_eq!(order.id, now.timestamp_millis());
        assert_eq!(order.user, "user001");
        assert_eq!(order.attraction_name, "长城");
        assert_eq!(order.total_price, 240.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.create_time, "2026/10/16 09:05:03");
    }

    #[test]
    fn test_order_json_field_names() {
        let json = r#"{
            "id": 1700000000000,
            "user": "user002",
            "attractionName": "故宫",
            "price": 60,
            "count": 2,
            "totalPrice": 120,
            "status": "已完成",
            "createTime": "2023/11/14 22:13:20"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.attraction_name, "故宫");
        assert_eq!(order.total_price, 120.0);
        assert_eq!(order.status, OrderStatus::Completed);

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["attractionName"], "故宫");
        assert_eq!(value["createTime"], "2023/11/14 22:13:20");
        assert_eq!(value["status"], "已完成");
    }

    #[test]
    fn test_unknown_status_is_other() {
        let status: OrderStatus = serde_json::from_str(r#""已退款""#).unwrap();
        assert_eq!(status, OrderStatus::Other);
        let pending: OrderStatus = serde_json::from_str(r#""待支付""#).unwrap();
        assert_eq!(pending, OrderStatus::Pending);
    }
}
