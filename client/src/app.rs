//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, toast_host::ToastHost};
use crate::pages::{
    add_camp::AddCampPage,
    admin::{AdminDashboardPage, AdminWelcome},
    analytics::AnalyticsPage,
    camp_detail::CampDetailPage,
    camps::AvailableCampsPage,
    home::HomePage,
    login::LoginPage,
    manage_camps::ManageCampsPage,
    manage_registrations::ManageRegistrationsPage,
    participant::{ParticipantDashboardPage, ParticipantWelcome},
    payment_history::PaymentHistoryPage,
    profile::ProfilePage,
    register::RegisterPage,
    registered_camps::RegisteredCampsPage,
};
use crate::state::{auth::AuthState, camps::CampsState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the session, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::initial());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let camps = RwSignal::new(CampsState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(ui);
    provide_context(camps);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            ui.update(|u| u.catalog_layout = crate::util::storage::read_catalog_layout());
        });
        leptos::task::spawn_local(async move {
            match crate::net::identity::fetch_session().await {
                Some(user) => crate::pages::loaders::establish_session(auth, user).await,
                None => auth.update(|a| a.loading = false),
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/pulse-portal.css"/>
        <Title text="Pulse Portal"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| view! { <p class="empty-state">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("available-camps") view=AvailableCampsPage/>
                        <Route path=(StaticSegment("available-camps"), ParamSegment("id")) view=CampDetailPage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <ParentRoute path=StaticSegment("admin-dashboard") view=AdminDashboardPage>
                            <Route path=StaticSegment("") view=AdminWelcome/>
                            <Route
                                path=StaticSegment("profile")
                                view=|| view! { <ProfilePage heading="Organizer Profile"/> }
                            />
                            <Route path=StaticSegment("add-camp") view=AddCampPage/>
                            <Route path=StaticSegment("manage-camps") view=ManageCampsPage/>
                            <Route path=StaticSegment("manage-registrations") view=ManageRegistrationsPage/>
                        </ParentRoute>
                        <ParentRoute path=StaticSegment("dashboard") view=ParticipantDashboardPage>
                            <Route path=StaticSegment("") view=ParticipantWelcome/>
                            <Route
                                path=StaticSegment("profile")
                                view=|| view! { <ProfilePage heading="Participant Profile"/> }
                            />
                            <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                            <Route path=StaticSegment("registered-camps") view=RegisteredCampsPage/>
                            <Route path=StaticSegment("payment-history") view=PaymentHistoryPage/>
                        </ParentRoute>
                    </Routes>
                </main>
                <Footer/>
                <ToastHost/>
            </div>
        </Router>
    }
}
