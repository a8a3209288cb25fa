//! Service layer for the external collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route handlers call these modules to talk to the identity provider, to
//! Google's OAuth endpoints, and to the records API. None keeps local state.

pub mod google;
pub mod identity;
pub mod users;
