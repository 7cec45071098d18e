//! # Application configuration — `tourism.toml`
//!
//! The web binary embeds a `tourism.toml` at build time and parses it with
//! [`AppConfig::from_toml`]. Every field has a production default, so a missing
//! section (or a missing file) is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! session_key = "user_info"
//! legacy_session_key = "user"
//! attractions_key = "attractions_data"
//! orders_key = "site_orders"
//!
//! [admin]
//! username = "admin"
//! role = "ADMIN"
//!
//! [notice]
//! display_ms = 3000
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `tourism.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageKeys,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub notice: NoticeConfig,
}

/// Names of the persisted keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    /// Current session.
    pub session_key: String,
    /// Older session key, only read when `session_key` is absent.
    pub legacy_session_key: String,
    pub attractions_key: String,
    pub orders_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            session_key: "user_info".to_string(),
            legacy_session_key: "user".to_string(),
            attractions_key: "attractions_data".to_string(),
            orders_key: "site_orders".to_string(),
        }
    }
}

/// Which sessions count as administrators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// The literal administrative account name.
    pub username: String,
    /// The administrative role marker.
    pub role: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            role: "ADMIN".to_string(),
        }
    }
}

/// Notice (toast) behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeConfig {
    /// How long a notice stays on screen. 0 keeps it until dismissed.
    #[serde(default = "default_display_ms")]
    pub display_ms: u32,
}

fn default_display_ms() -> u32 {
    3000
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tourism.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to defaults when the text is unusable.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {e}", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage.session_key, "user_info");
        assert_eq!(config.storage.legacy_session_key, "user");
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.role, "ADMIN");
        assert_eq!(config.notice.display_ms, 3000);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [storage]
            orders_key = "orders_v2"

            [admin]
            role = "SUPER"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.orders_key, "orders_v2");
        assert_eq!(config.storage.attractions_key, "attractions_data");
        assert_eq!(config.admin.role, "SUPER");
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = AppConfig::from_toml_or_default("[storage\nsession_key = ");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.notice.display_ms = 0;

        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
