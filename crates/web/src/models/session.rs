//! Session-stored admin login state.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Longest an admin login stays valid, however active the session is.
pub const ADMIN_LOGIN_MAX_AGE: TimeDelta = TimeDelta::hours(24);

/// Marker that this session passed the admin secret check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdminSession {
    pub logged_in_at: DateTime<Utc>,
}

impl AdminSession {
    #[must_use]
    pub fn now() -> Self {
        Self {
            logged_in_at: Utc::now(),
        }
    }

    /// Whether the login is still within [`ADMIN_LOGIN_MAX_AGE`] at `now`.
    #[must_use]
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.logged_in_at) < ADMIN_LOGIN_MAX_AGE
    }
}

/// Session keys.
pub mod keys {
    /// Key for the admin login marker.
    pub const ADMIN: &str = "admin";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_login_is_current() {
        let login = AdminSession::now();
        assert!(login.is_current(Utc::now()));
    }

    #[test]
    fn test_login_expires_after_max_age() {
        let now = Utc::now();
        let stale = AdminSession {
            logged_in_at: now - ADMIN_LOGIN_MAX_AGE - TimeDelta::seconds(1),
        };
        let recent = AdminSession {
            logged_in_at: now - TimeDelta::hours(23),
        };

        assert!(!stale.is_current(now));
        assert!(recent.is_current(now));
    }
}
