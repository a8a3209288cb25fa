//! Participant dashboard shell: navigation tiles and nested routes.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_tiles::{DashboardTiles, Tile};
use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

pub const PARTICIPANT_TILES: [Tile; 4] = [
    Tile { label: "Profile", href: "/dashboard/profile" },
    Tile { label: "Analytics", href: "/dashboard/analytics" },
    Tile { label: "Registered Camps", href: "/dashboard/registered-camps" },
    Tile { label: "Payment History", href: "/dashboard/payment-history" },
];

#[component]
pub fn ParticipantDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, toasts, use_navigate());

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=|| view! { <Spinner label="Loading..." /> }
        >
            <div class="dashboard">
                <h1 class="dashboard__title">
                    {move || format!("Participant Dashboard - {}", auth.with(AuthState::display_name))}
                </h1>
                <DashboardTiles tiles=&PARTICIPANT_TILES />
                <div class="dashboard__content">
                    <Outlet />
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ParticipantWelcome() -> impl IntoView {
    view! {
        <div class="dashboard__welcome">
            <h2>"Welcome to Your Dashboard"</h2>
            <p>"Select an option above to view your camps, payments, and profile."</p>
        </div>
    }
}
