//! Five-star rating display and picker.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

pub const MAX_STARS: u32 = 5;

/// Filled flags for each of the five stars; ratings above five saturate.
#[must_use]
pub fn star_states(rating: u32) -> [bool; MAX_STARS as usize] {
    let mut stars = [false; MAX_STARS as usize];
    for (idx, star) in (1..=MAX_STARS).zip(stars.iter_mut()) {
        *star = idx <= rating;
    }
    stars
}

/// Class list for one star.
#[must_use]
pub fn star_class(filled: bool) -> &'static str {
    if filled { "stars__star stars__star--filled" } else { "stars__star" }
}

/// True for ratings a feedback form may submit.
#[must_use]
pub fn is_valid_rating(rating: u32) -> bool {
    (1..=MAX_STARS).contains(&rating)
}

/// Read-only stars.
#[component]
pub fn StarRating(rating: u32) -> impl IntoView {
    view! {
        <span class="stars" aria-label=format!("{rating} out of {MAX_STARS} stars")>
            {star_states(rating)
                .into_iter()
                .map(|filled| {
                    view! {
                        <span class=star_class(filled)>
                            {if filled { "★" } else { "☆" }}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}

/// Clickable stars writing the chosen rating into `value`.
#[component]
pub fn StarInput(value: RwSignal<u32>) -> impl IntoView {
    view! {
        <span class="stars stars--input" role="radiogroup">
            {(1..=MAX_STARS)
                .map(|n| {
                    view! {
                        <button
                            type="button"
                            class=move || star_class(value.get() >= n)
                            aria-label=format!("{n} stars")
                            on:click=move |_| value.set(n)
                        >
                            {move || if value.get() >= n { "★" } else { "☆" }}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
