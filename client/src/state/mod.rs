//! Reactive client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is wrapped in an `RwSignal` by `App` and read with
//! `expect_context`. Pure list and gating helpers live beside the state they
//! operate on so they can be tested without a browser.

pub mod auth;
pub mod camps;
pub mod registrations;
pub mod toast;
pub mod ui;
