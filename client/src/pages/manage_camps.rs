//! Organizer camp table with edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits keep the participant count the API already has, then re-read the
//! camp so the table shows what was actually stored.

use leptos::prelude::*;

use crate::components::camp_form::{CampDraft, CampForm};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::spinner::Spinner;
use crate::net::types::Camp;
use crate::state::camps::CampsState;
#[cfg(feature = "hydrate")]
use crate::state::camps::merge_updated_camp;
#[cfg(feature = "hydrate")]
use crate::state::toast;
use crate::state::toast::ToastState;
use crate::util::format::{format_datetime, now_local, or_na};
use crate::util::validate::FieldErrors;

use super::loaders::load_catalog;

#[component]
pub fn ManageCampsPage() -> impl IntoView {
    let camps = expect_context::<RwSignal<CampsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let editing = RwSignal::new(None::<Camp>);
    let draft = RwSignal::new(CampDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Camp>);
    let deleting = RwSignal::new(false);

    load_catalog(camps, toasts, "Failed to load camps.");

    let start_edit = Callback::new(move |camp: Camp| {
        draft.set(CampDraft::from_camp(&camp));
        errors.set(FieldErrors::new());
        editing.set(Some(camp));
    });
    let cancel_edit = Callback::new(move |()| editing.set(None));

    let save_edit = Callback::new(move |()| {
        let Some(previous) = editing.get_untracked() else {
            return;
        };
        let submitted = match draft.get_untracked().validate(now_local()) {
            Ok(camp) => Camp { id: previous.id.clone(), participant_count: previous.participant_count, ..camp },
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_camp(&previous.id, &submitted).await {
                Ok(()) => {
                    let fetched = match crate::net::api::fetch_camp(&previous.id).await {
                        Ok(camp) => Some(camp),
                        Err(e) => {
                            leptos::logging::warn!("refetch after update failed: {e}");
                            None
                        }
                    };
                    let merged = merge_updated_camp(&previous, &submitted, fetched);
                    camps.update(|s| {
                        s.replace(merged);
                    });
                    editing.set(None);
                    toast::success(toasts, "Camp updated successfully!");
                }
                Err(e) => toast::error(toasts, format!("Failed to update camp: {e}")),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submitted;
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_camp(&target.id).await {
                Ok(()) => {
                    camps.update(|s| s.remove(&target.id));
                    toast::success(toasts, "Camp deleted successfully!");
                }
                Err(e) => {
                    leptos::logging::warn!("delete camp failed: {e}");
                    toast::error(toasts, "Failed to delete camp.");
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = target;
    });

    view! {
        <section class="panel">
            <h2 class="panel__title">"Manage Camps"</h2>
            <Show when=move || !camps.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading camps..." /> }>
                <Show
                    when=move || !camps.with(|s| s.items.is_empty())
                    fallback=|| view! { <p class="empty-state">"No camps found."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Camp Name"</th>
                                <th>"Date & Time"</th>
                                <th>"Location"</th>
                                <th>"Healthcare Professional"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || camps.get().items
                                key=|camp| (camp.id.clone(), camp.camp_name.clone(), camp.date_time.clone(), camp.location.clone())
                                children=move |camp| {
                                    let edit_target = camp.clone();
                                    let delete_target = camp.clone();
                                    view! {
                                        <tr>
                                            <td>{camp.camp_name.clone()}</td>
                                            <td>{format_datetime(&camp.date_time)}</td>
                                            <td>{or_na(&camp.location).to_owned()}</td>
                                            <td>{or_na(&camp.healthcare_professional).to_owned()}</td>
                                            <td class="table__actions">
                                                <button class="btn btn--small" on:click=move |_| start_edit.run(edit_target.clone())>
                                                    "Update"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    on:click=move |_| pending_delete.set(Some(delete_target.clone()))
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || editing.with(Option::is_some)>
                <div class="dialog-backdrop" on:click=move |_| cancel_edit.run(())>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Update Camp"</h2>
                        <CampForm
                            draft=draft
                            errors=errors
                            submit_label="Save Changes"
                            busy=saving
                            on_submit=save_edit
                            on_cancel=cancel_edit
                        />
                    </div>
                </div>
            </Show>

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Camp"
                    message="Are you sure you want to delete this camp?"
                    confirm_label="Delete"
                    danger=true
                    busy=deleting
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </section>
    }
}
