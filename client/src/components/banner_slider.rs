//! Auto-advancing success-story banner on the home page.

#[cfg(test)]
#[path = "banner_slider_test.rs"]
mod banner_slider_test;

use leptos::prelude::*;

pub const SLIDE_INTERVAL_MS: u32 = 3_000;

pub struct Story {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const STORIES: [Story; 3] = [
    Story {
        title: "Community Health Triumph",
        description: "Over 500 residents received free screenings at our 2024 camp.",
        image: "https://i.ibb.co/ZpWDHrTM/istockphoto-486596345-612x612.jpg",
    },
    Story {
        title: "Empowering Rural Care",
        description: "Trained 50+ local volunteers to support ongoing health initiatives.",
        image: "https://images.unsplash.com/photo-1580281658626-ee379f3cce93?auto=format&fit=crop&w=1350&q=80",
    },
    Story {
        title: "Life-Saving Interventions",
        description: "Identified critical cases, saving lives through timely referrals.",
        image: "https://images.unsplash.com/photo-1576765607924-3a7bd1c73d84?auto=format&fit=crop&w=1350&q=80",
    },
];

/// Wraps past the last slide.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Wraps before the first slide.
#[must_use]
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        (current - 1).min(len - 1)
    }
}

#[component]
pub fn BannerSlider() -> impl IntoView {
    let current = RwSignal::new(0_usize);
    let len = STORIES.len();

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                current.try_update(|i| *i = next_index(*i, len));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="banner">
            {STORIES
                .iter()
                .enumerate()
                .map(|(idx, story)| {
                    view! {
                        <div class="banner__slide" class:banner__slide--active=move || current.get() == idx>
                            <img class="banner__image" src=story.image alt=story.title />
                            <div class="banner__overlay"></div>
                            <div class="banner__text">
                                <h2>{story.title}</h2>
                                <p>{story.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <button
                class="banner__arrow banner__arrow--prev"
                aria-label="Previous slide"
                on:click=move |_| current.update(|i| *i = prev_index(*i, len))
            >
                "‹"
            </button>
            <button
                class="banner__arrow banner__arrow--next"
                aria-label="Next slide"
                on:click=move |_| current.update(|i| *i = next_index(*i, len))
            >
                "›"
            </button>
            <div class="banner__dots">
                {(0..len)
                    .map(|idx| {
                        view! {
                            <button
                                class="banner__dot"
                                class:banner__dot--active=move || current.get() == idx
                                aria-label=format!("Go to slide {}", idx + 1)
                                on:click=move |_| current.set(idx)
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
