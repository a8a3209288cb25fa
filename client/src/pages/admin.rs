//! Organizer dashboard shell: role gate, navigation tiles, and nested routes.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_tiles::{DashboardTiles, Tile};
use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

pub const ADMIN_TILES: [Tile; 4] = [
    Tile { label: "Organizer Profile", href: "/admin-dashboard/profile" },
    Tile { label: "Add A Camp", href: "/admin-dashboard/add-camp" },
    Tile { label: "Manage Camps", href: "/admin-dashboard/manage-camps" },
    Tile { label: "Manage Registered Camps", href: "/admin-dashboard/manage-registrations" },
];

/// Admin-only layout. Signed-out visitors are redirected to `/login`;
/// signed-in customers see an access-denied panel.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, toasts, use_navigate());

    view! {
        <Show when=move || !auth.with(|a| a.loading) fallback=|| view! { <Spinner label="Loading..." /> }>
            <Show when=move || auth.with(AuthState::is_admin) fallback=AccessDenied>
                <div class="dashboard">
                    <h1 class="dashboard__title">
                        {move || format!("Admin Dashboard - {}", auth.with(AuthState::display_name))}
                    </h1>
                    <DashboardTiles tiles=&ADMIN_TILES />
                    <div class="dashboard__content">
                        <Outlet />
                    </div>
                </div>
            </Show>
        </Show>
    }
}

#[component]
pub fn AdminWelcome() -> impl IntoView {
    view! {
        <div class="dashboard__welcome">
            <h2>"Welcome to Admin Dashboard"</h2>
            <p>"Select an option above to get started."</p>
        </div>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="access-denied">
            <h2>"Access Denied"</h2>
            <p>"You must be an admin to access this page."</p>
            <a class="btn btn--primary" href="/">
                "Go to Home"
            </a>
        </div>
    }
}
