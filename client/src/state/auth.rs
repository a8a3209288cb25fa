//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the navbar, and role-aware dashboards. The session
//! comes from the identity bridge; the role comes from the user record held
//! by the remote API.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, SessionUser, UserRecord};

pub const ADMIN_DASHBOARD_PATH: &str = "/admin-dashboard";
pub const PARTICIPANT_DASHBOARD_PATH: &str = "/dashboard";

/// Authentication state tracking the current account, its profile record,
/// and whether the initial session lookup is still running.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub profile: Option<UserRecord>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the first `/auth/me` answer arrives.
    #[must_use]
    pub fn initial() -> Self {
        Self { user: None, profile: None, loading: true }
    }

    /// Role from the user record; accounts without a record are customers.
    #[must_use]
    pub fn role(&self) -> Role {
        self.profile.as_ref().map(|p| p.role).unwrap_or_default()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.is_some() && self.role() == Role::Admin
    }

    /// Dashboard route for the signed-in account, if any.
    #[must_use]
    pub fn dashboard_path(&self) -> Option<&'static str> {
        self.user.as_ref()?;
        Some(if self.is_admin() { ADMIN_DASHBOARD_PATH } else { PARTICIPANT_DASHBOARD_PATH })
    }

    /// Name shown in the navbar: record name, then provider name, then email.
    #[must_use]
    pub fn display_name(&self) -> String {
        let from_profile = self
            .profile
            .as_ref()
            .map(|p| p.name.trim())
            .filter(|n| !n.is_empty());
        let from_session = self
            .user
            .as_ref()
            .and_then(|u| u.display_name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty());
        from_profile
            .or(from_session)
            .map(str::to_owned)
            .or_else(|| self.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.profile
            .as_ref()
            .map(|p| p.photo_url.trim())
            .filter(|u| !u.is_empty())
            .or_else(|| self.user.as_ref().and_then(|u| u.photo_url.as_deref()))
            .map(str::to_owned)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.uid.as_str())
    }

    /// Drop everything on logout.
    pub fn clear(&mut self) {
        self.user = None;
        self.profile = None;
        self.loading = false;
    }
}
