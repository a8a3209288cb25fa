//! "Add A Camp" organizer form.

use leptos::prelude::*;

use crate::components::camp_form::{CampDraft, CampForm};
use crate::state::camps::CampsState;
#[cfg(feature = "hydrate")]
use crate::state::toast;
use crate::state::toast::ToastState;
use crate::util::format::now_local;
use crate::util::validate::FieldErrors;

#[component]
pub fn AddCampPage() -> impl IntoView {
    let camps = expect_context::<RwSignal<CampsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(CampDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        let camp = match draft.get_untracked().validate(now_local()) {
            Ok(camp) => camp,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_camp(&camp).await {
                Ok(inserted_id) => {
                    if let Some(id) = inserted_id {
                        camps.update(|s| s.items.push(crate::net::types::Camp { id, ..camp }));
                    }
                    toast::success(toasts, "Camp added successfully!");
                    draft.set(CampDraft::default());
                }
                Err(e) => {
                    leptos::logging::warn!("add camp failed: {e}");
                    toast::error(toasts, "Failed to add camp. Please try again.");
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (camp, camps, toasts);
    });

    view! {
        <section class="panel">
            <h2 class="panel__title">"Add A Camp"</h2>
            <CampForm draft=draft errors=errors submit_label="Add Camp" busy=busy on_submit=on_submit />
        </section>
    }
}
