//! Landing page: success-story banner, popular camps, testimonials, mission.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::banner_slider::BannerSlider;
use crate::components::camp_card::CampCard;
use crate::components::spinner::Spinner;
use crate::components::star_rating::StarRating;
use crate::net::types::Feedback;
use crate::state::camps::{CampsState, POPULAR_CAMP_COUNT, popular_camps};
use crate::state::toast::ToastState;

use super::loaders::load_catalog;

/// How many testimonials the home page shows.
pub const TESTIMONIAL_COUNT: usize = 6;

const MISSION: [(&str, &str); 4] = [
    ("Accessibility", "Making medical camps available to underserved and remote communities."),
    ("Community", "Fostering strong community bonds through collaborative health initiatives."),
    ("Empowerment", "Educating and training participants and organizers for sustainable impact."),
    ("Health Impact", "Delivering measurable improvements in community health outcomes."),
];

/// `ann@example.com` is attributed as `ann`.
#[must_use]
pub fn testimonial_author(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let camps = expect_context::<RwSignal<CampsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let feedbacks = RwSignal::new(None::<Vec<Feedback>>);

    load_catalog(camps, toasts, "Failed to load data.");

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_feedbacks().await {
            Ok(items) => feedbacks.set(Some(items)),
            Err(e) => {
                leptos::logging::warn!("feedback list failed: {e}");
                feedbacks.set(Some(Vec::new()));
                crate::state::toast::error(toasts, "Failed to load data.");
            }
        }
    });

    let popular = Memo::new(move |_| camps.with(|s| popular_camps(&s.items, POPULAR_CAMP_COUNT)));

    view! {
        <div class="home-page">
            <BannerSlider />

            <section class="home-section">
                <h2 class="home-section__title">"Popular Medical Camps"</h2>
                <Show when=move || !camps.with(|s| s.loading) fallback=|| view! { <Spinner /> }>
                    <Show
                        when=move || !popular.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-state">"No popular camps available."</p> }
                    >
                        <div class="camp-grid camp-grid--three">
                            <For
                                each=move || popular.get()
                                key=|camp| camp.id.clone()
                                children=|camp| view! { <CampCard camp=camp /> }
                            />
                        </div>
                    </Show>
                </Show>
                <div class="home-section__more">
                    <a class="btn btn--primary" href="/available-camps">
                        "See All Camps"
                    </a>
                </div>
            </section>

            <section class="home-section">
                <h2 class="home-section__title">"What Participants Say"</h2>
                {move || match feedbacks.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(items) if items.is_empty() => {
                        view! { <p class="empty-state">"No feedback available."</p> }.into_any()
                    }
                    Some(items) => {
                        view! {
                            <div class="testimonials">
                                {items
                                    .into_iter()
                                    .take(TESTIMONIAL_COUNT)
                                    .map(|f| {
                                        let author = testimonial_author(&f.user_email).to_owned();
                                        view! {
                                            <blockquote class="testimonial">
                                                <StarRating rating=f.rating />
                                                <p class="testimonial__text">{f.feedback}</p>
                                                <footer class="testimonial__author">
                                                    {format!("- {author} (Participant)")}
                                                </footer>
                                            </blockquote>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>

            <section class="home-section home-section--mission">
                <h2 class="home-section__title">"Our Mission"</h2>
                <div class="mission-grid">
                    {MISSION
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class="mission-grid__item">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <a class="btn btn--primary" href="/available-camps">
                    "Join a Camp"
                </a>
            </section>
        </div>
    }
}
