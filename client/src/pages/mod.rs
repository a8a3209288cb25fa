//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Dashboard sub-pages render inside the dashboard shells'
//! `Outlet`.

pub mod add_camp;
pub mod admin;
pub mod analytics;
pub mod camp_detail;
pub mod camps;
pub mod home;
pub(crate) mod loaders;
pub mod login;
pub mod manage_camps;
pub mod manage_registrations;
pub mod participant;
pub mod payment_history;
pub mod profile;
pub mod register;
pub mod registered_camps;
