//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, cards, forms, and dialogs while reading and
//! writing shared state from Leptos context providers.

pub mod banner_slider;
pub mod bar_chart;
pub mod camp_card;
pub mod camp_form;
pub mod confirm_dialog;
pub mod dashboard_tiles;
pub mod field_error;
pub mod footer;
pub mod navbar;
pub mod spinner;
pub mod star_rating;
pub mod toast_host;
