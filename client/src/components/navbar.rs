//! Top navigation bar with camp quick search and the account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. The search box loads the catalog on first use
//! and filters it locally once typing pauses for [`SEARCH_DEBOUNCE_MS`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::camp_card::camp_detail_href;
use crate::net::types::Camp;
use crate::state::auth::AuthState;
use crate::state::camps::quick_search;
#[cfg(feature = "hydrate")]
use crate::state::toast::{self, ToastState};
use crate::util::format::format_fees;

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/40";

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let settled_query = RwSignal::new(String::new());
    let query_seq = RwSignal::new(0_u64);
    let catalog = RwSignal::new(None::<Vec<Camp>>);
    let menu_open = RwSignal::new(false);

    let results = Memo::new(move |_| {
        let q = settled_query.get();
        catalog.with(|c| c.as_deref().map(|camps| quick_search(camps, &q)).unwrap_or_default())
    });

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        query.set(value);
        let seq = query_seq.get_untracked() + 1;
        query_seq.set(seq);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if query_seq.get_untracked() != seq {
                return;
            }
            if catalog.get_untracked().is_none() {
                match crate::net::api::fetch_camps().await {
                    Ok(camps) => catalog.set(Some(camps)),
                    Err(e) => {
                        toast::error(toasts, format!("Failed to fetch camps: {e}"));
                        return;
                    }
                }
            }
            settled_query.set(query.get_untracked());
        });
    };

    let navigate_select = navigate.clone();
    let select_camp = Callback::new(move |camp_id: String| {
        query.set(String::new());
        settled_query.set(String::new());
        navigate_select(&camp_detail_href(&camp_id), NavigateOptions::default());
    });

    let navigate_logout = navigate;
    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate_logout;
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_logout.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::logout().await {
                    Ok(()) => {
                        auth.update(AuthState::clear);
                        toast::success(toasts, "Log Out successful!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("logout failed: {e}");
                        toast::error(toasts, "Log Out error!");
                    }
                }
            });
        }
    });

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                <img class="navbar__logo" src="/logo.svg" alt="Logo" />
                <span class="navbar__name">"Pulse Portal"</span>
            </a>

            <div class="navbar__search">
                <input
                    class="navbar__search-input"
                    type="text"
                    placeholder="Search camps..."
                    prop:value=move || query.get()
                    on:input=on_search_input
                />
                <Show when=move || !results.get().is_empty()>
                    <ul class="navbar__results" role="listbox">
                        <For
                            each=move || results.get()
                            key=|camp| camp.id.clone()
                            children=move |camp| {
                                let id = camp.id.clone();
                                view! {
                                    <li
                                        class="navbar__result"
                                        role="option"
                                        aria-selected="false"
                                        on:click=move |_| select_camp.run(id.clone())
                                    >
                                        <span class="navbar__result-name">{camp.camp_name}</span>
                                        <span>"Price: " {format_fees(camp.camp_fees)}</span>
                                        <span>"Participants: " {camp.participant_count}</span>
                                        <span>"Location: " {camp.location}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>

            <nav class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/available-camps">"Available Camps"</a>
                <Show
                    when=move || auth.with(|a| a.user.is_some())
                    fallback=|| view! { <a class="btn btn--primary" href="/login">"Join Us"</a> }
                >
                    <div class="navbar__account">
                        <button
                            class="navbar__avatar-button"
                            aria-label="Toggle user menu"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            <img
                                class="navbar__avatar"
                                src=move || auth.with(AuthState::avatar_url).unwrap_or_else(|| AVATAR_PLACEHOLDER.to_owned())
                                alt="Profile"
                            />
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="navbar__menu">
                                <div class="navbar__menu-name">
                                    {move || {
                                        let name = auth.with(AuthState::display_name);
                                        if name.is_empty() { "User".to_owned() } else { name }
                                    }}
                                </div>
                                <a
                                    class="navbar__menu-item"
                                    href=move || auth.with(AuthState::dashboard_path).unwrap_or("/")
                                    on:click=move |_| menu_open.set(false)
                                >
                                    "Dashboard"
                                </a>
                                <button class="navbar__menu-item" on:click=move |_| on_logout.run(())>
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </nav>
        </header>
    }
}
