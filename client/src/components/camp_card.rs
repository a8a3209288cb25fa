//! Catalog card for a single camp.

use leptos::prelude::*;

use crate::net::types::Camp;
use crate::util::format::{format_datetime, format_fees, or_na};

/// Fallback shown when a camp image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

#[must_use]
pub fn camp_detail_href(camp_id: &str) -> String {
    format!("/available-camps/{camp_id}")
}

/// Card with banner, key facts, and a details link. `show_description`
/// adds the description paragraph used on the catalog page.
#[component]
pub fn CampCard(camp: Camp, #[prop(optional)] show_description: bool) -> impl IntoView {
    let href = camp_detail_href(&camp.id);
    let image = if camp.image.trim().is_empty() { PLACEHOLDER_IMAGE.to_owned() } else { camp.image.clone() };
    let description = show_description.then(|| view! { <p class="camp-card__description">{camp.description.clone()}</p> });

    view! {
        <article class="camp-card">
            <img
                class="camp-card__image"
                src=image
                alt=camp.camp_name.clone()
                on:error=move |ev| {
                    #[cfg(feature = "hydrate")]
                    {
                        use wasm_bindgen::JsCast as _;
                        if let Some(img) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                        {
                            img.set_src(PLACEHOLDER_IMAGE);
                        }
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = ev;
                    }
                }
            />
            <div class="camp-card__body">
                <h3 class="camp-card__title">{camp.camp_name.clone()}</h3>
                <dl class="camp-card__facts">
                    <dt>"Fees:"</dt>
                    <dd>{format_fees(camp.camp_fees)}</dd>
                    <dt>"Date & Time:"</dt>
                    <dd>{format_datetime(&camp.date_time)}</dd>
                    <dt>"Location:"</dt>
                    <dd>{or_na(&camp.location).to_owned()}</dd>
                    <dt>"Professional:"</dt>
                    <dd>{or_na(&camp.healthcare_professional).to_owned()}</dd>
                    <dt>"Participants:"</dt>
                    <dd>{camp.participant_count}</dd>
                </dl>
                {description}
                <a class="btn btn--primary camp-card__link" href=href>
                    "View Details"
                </a>
            </div>
        </article>
    }
}
