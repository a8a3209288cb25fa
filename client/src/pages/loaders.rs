//! Fetch-and-store helpers shared by several routes.
//!
//! Each helper flips the relevant `loading` flag, calls the remote API, and
//! reports failures through the toast stack. Under SSR they only mark the
//! state as loading so the first client render matches the server HTML.

use leptos::prelude::*;

use crate::net::types::SessionUser;
use crate::state::auth::AuthState;
use crate::state::camps::CampsState;
use crate::state::registrations::RegistrationsState;
use crate::state::toast::ToastState;

/// Load the camp catalog into shared state.
pub fn load_catalog(camps: RwSignal<CampsState>, toasts: RwSignal<ToastState>, failure: &'static str) {
    camps.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_camps().await {
            Ok(items) => camps.update(|s| {
                s.items = items;
                s.loading = false;
                s.error = None;
            }),
            Err(e) => {
                leptos::logging::warn!("camp list failed: {e}");
                camps.update(|s| {
                    s.loading = false;
                    s.error = Some(e.to_string());
                });
                crate::state::toast::error(toasts, failure);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, failure);
}

/// Load every registration, keeping those `select` accepts.
pub fn load_registrations<F>(
    registrations: RwSignal<RegistrationsState>,
    toasts: RwSignal<ToastState>,
    failure: &'static str,
    select: F,
) where
    F: Fn(Vec<crate::net::types::Registration>) -> Vec<crate::net::types::Registration> + 'static,
{
    registrations.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_registrations().await {
            Ok(items) => registrations.update(|s| {
                s.items = select(items);
                s.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("registration list failed: {e}");
                registrations.update(|s| s.loading = false);
                crate::state::toast::error(toasts, failure);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, failure, select);
}

/// Record a freshly established session and look up its profile record.
/// A missing record leaves the account as a customer.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub async fn establish_session(auth: RwSignal<AuthState>, user: SessionUser) {
    let uid = user.uid.clone();
    auth.update(|a| {
        a.user = Some(user);
        a.profile = None;
        a.loading = true;
    });
    let profile = match crate::net::api::fetch_user(&uid).await {
        Ok(record) => Some(record),
        Err(e) => {
            leptos::logging::log!("no profile record for {uid}: {e}");
            None
        }
    };
    auth.update(|a| {
        a.profile = profile;
        a.loading = false;
    });
}
