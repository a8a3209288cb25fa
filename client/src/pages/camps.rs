//! Available camps catalog with keyword search, sorting, and a layout toggle.

use leptos::prelude::*;

use crate::components::camp_card::CampCard;
use crate::components::spinner::Spinner;
use crate::state::camps::{CampsState, SortOption, catalog_view};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::storage;

use super::loaders::load_catalog;

#[component]
pub fn AvailableCampsPage() -> impl IntoView {
    let camps = expect_context::<RwSignal<CampsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let search_input = RwSignal::new(String::new());
    let keyword = RwSignal::new(String::new());
    let sort = RwSignal::new(SortOption::Default);

    load_catalog(camps, toasts, "Failed to load camps.");

    let visible = Memo::new(move |_| camps.with(|s| catalog_view(&s.items, &keyword.get(), sort.get())));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        keyword.set(search_input.get_untracked().trim().to_owned());
        search_input.set(String::new());
    };

    let on_toggle_layout = move |_| {
        let next = storage::toggle_catalog_layout(ui.get_untracked().catalog_layout);
        ui.update(|u| u.catalog_layout = next);
    };

    view! {
        <div class="camps-page">
            <h1 class="page-title">"Available Camps"</h1>
            <div class="camps-page__controls">
                <form class="camps-page__search" on:submit=on_search>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Search by name, location, or description"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Search"
                    </button>
                </form>
                <select
                    class="form__input camps-page__sort"
                    on:change=move |ev| sort.set(SortOption::from_value(&event_target_value(&ev)))
                    prop:value=move || sort.get().as_value()
                >
                    {SortOption::ALL
                        .into_iter()
                        .map(|opt| view! { <option value=opt.as_value()>{opt.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn camps-page__layout" on:click=on_toggle_layout>
                    {move || ui.get().catalog_layout.toggle_label()}
                </button>
            </div>
            <Show when=move || !keyword.get().is_empty()>
                <p class="camps-page__filter">
                    "Showing results for \"" {move || keyword.get()} "\" "
                    <button class="btn btn--link" on:click=move |_| keyword.set(String::new())>
                        "Clear"
                    </button>
                </p>
            </Show>
            <Show when=move || !camps.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading camps..." /> }>
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=|| view! { <p class="empty-state">"No camps found."</p> }
                >
                    <div class=move || ui.get().catalog_layout.grid_class()>
                        <For
                            each=move || visible.get()
                            key=|camp| (camp.id.clone(), camp.participant_count)
                            children=|camp| view! { <CampCard camp=camp show_description=true /> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
