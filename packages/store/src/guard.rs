//! # Navigation guard
//!
//! Decides, for one navigation attempt, whether the target route may render.
//! The decision is a plain value; the UI layer shows the attached [`Notice`]
//! and performs the redirect.
//!
//! Checks run in order and the first match wins:
//!
//! 1. admin routes: no session → login, non-admin → home, otherwise allow
//! 2. authenticated routes: no session → login, otherwise allow
//! 3. everything else is public

use crate::config::{AdminConfig, AppConfig};
use crate::models::Session;
use crate::session::read_persisted;
use crate::storage::KeyValueStore;

/// Access requirements declared by a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteAccess {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteAccess {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
        requires_admin: false,
    };
    pub const AUTH: Self = Self {
        requires_auth: true,
        requires_admin: false,
    };
    pub const ADMIN: Self = Self {
        requires_auth: false,
        requires_admin: true,
    };
}

/// Where a rejected navigation is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Home,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A transient message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub const LOGIN_REQUIRED: &str = "请先登录";
pub const ADMIN_REQUIRED: &str = "权限不足，需要管理员账号";

/// Outcome of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect { to: RedirectTarget, notice: Notice },
}

impl Decision {
    fn to_login() -> Self {
        Decision::Redirect {
            to: RedirectTarget::Login,
            notice: Notice::warning(LOGIN_REQUIRED),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether a route with `access` may render for `session`.
pub fn authorize(access: RouteAccess, session: Option<&Session>, admin: &AdminConfig) -> Decision {
    if access.requires_admin {
        return match session {
            None => Decision::to_login(),
            Some(s) if !s.is_admin(&admin.username, &admin.role) => Decision::Redirect {
                to: RedirectTarget::Home,
                notice: Notice::error(ADMIN_REQUIRED),
            },
            Some(_) => Decision::Allow,
        };
    }
    if access.requires_auth && session.is_none() {
        return Decision::to_login();
    }
    Decision::Allow
}

/// Re-read the session from storage and decide.
pub fn authorize_from_storage<S: KeyValueStore + ?Sized>(
    access: RouteAccess,
    storage: &S,
    config: &AppConfig,
) -> Decision {
    let session = read_persisted(storage, &config.storage);
    let decision = authorize(access, session.as_ref(), &config.admin);
    if let Decision::Redirect { to, .. } = &decision {
        tracing::debug!("Navigation rejected ({access:?}), redirecting to {to:?}");
    }
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn admin() -> AdminConfig {
        AdminConfig::default()
    }

    fn redirect_target(decision: &Decision) -> Option<RedirectTarget> {
        match decision {
            Decision::Allow => None,
            Decision::Redirect { to, .. } => Some(*to),
        }
    }

    #[test]
    fn test_public_route_always_allowed() {
        assert!(authorize(RouteAccess::PUBLIC, None, &admin()).is_allowed());
        let user = Session::new("user001");
        assert!(authorize(RouteAccess::PUBLIC, Some(&user), &admin()).is_allowed());
    }

    #[test]
    fn test_auth_route() {
        let decision = authorize(RouteAccess::AUTH, None, &admin());
        assert_eq!(
            decision,
            Decision::Redirect {
                to: RedirectTarget::Login,
                notice: Notice::warning(LOGIN_REQUIRED),
            }
        );

        let user = Session::new("user001");
        assert!(authorize(RouteAccess::AUTH, Some(&user), &admin()).is_allowed());
    }

    #[test]
    fn test_admin_route_without_session_goes_to_login() {
        let decision = authorize(RouteAccess::ADMIN, None, &admin());
        assert_eq!(redirect_target(&decision), Some(RedirectTarget::Login));

        let both = RouteAccess {
            requires_auth: true,
            requires_admin: true,
        };
        let decision = authorize(both, None, &admin());
        assert_eq!(redirect_target(&decision), Some(RedirectTarget::Login));
    }

    #[test]
    fn test_admin_route_non_admin_goes_home() {
        let user = Session::new("user001").with_role("USER");
        let decision = authorize(RouteAccess::ADMIN, Some(&user), &admin());
        assert_eq!(
            decision,
            Decision::Redirect {
                to: RedirectTarget::Home,
                notice: Notice::error(ADMIN_REQUIRED),
            }
        );
    }

    #[test]
    fn test_admin_route_admin_allowed() {
        let by_name = Session::new("admin");
        assert!(authorize(RouteAccess::ADMIN, Some(&by_name), &admin()).is_allowed());

        let by_role = Session::new("ops").with_role("ADMIN");
        assert!(authorize(RouteAccess::ADMIN, Some(&by_role), &admin()).is_allowed());
    }

    #[test]
    fn test_custom_admin_config() {
        let custom = AdminConfig {
            username: "root".to_string(),
            role: "SUPER".to_string(),
        };
        let plain_admin = Session::new("admin");
        assert_eq!(
            redirect_target(&authorize(RouteAccess::ADMIN, Some(&plain_admin), &custom)),
            Some(RedirectTarget::Home)
        );
        assert!(authorize(RouteAccess::ADMIN, Some(&Session::new("root")), &custom).is_allowed());
    }

    #[test]
    fn test_from_storage_rereads_each_time() {
        let storage = MemoryStorage::new();
        let config = AppConfig::default();

        assert_eq!(
            redirect_target(&authorize_from_storage(RouteAccess::AUTH, &storage, &config)),
            Some(RedirectTarget::Login)
        );

        storage.set_item("user_info", r#"{"username":"user001"}"#);
        assert!(authorize_from_storage(RouteAccess::AUTH, &storage, &config).is_allowed());

        storage.remove_item("user_info");
        assert!(!authorize_from_storage(RouteAccess::AUTH, &storage, &config).is_allowed());
    }

    #[test]
    fn test_from_storage_uses_legacy_key() {
        let storage = MemoryStorage::new();
        storage.set_item("user", r#"{"username":"admin"}"#);
        assert!(authorize_from_storage(RouteAccess::ADMIN, &storage, &AppConfig::default()).is_allowed());
    }

    #[test]
    fn test_from_storage_malformed_is_no_session() {
        let storage = MemoryStorage::new();
        storage.set_item("user_info", "{{{");
        let decision = authorize_from_storage(RouteAccess::ADMIN, &storage, &AppConfig::default());
        assert_eq!(redirect_target(&decision), Some(RedirectTarget::Login));
    }
}
