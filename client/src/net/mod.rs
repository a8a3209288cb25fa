//! Networking modules for the remote API and the identity bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` covers camp/registration/user/feedback/transaction REST calls,
//! `identity` covers session endpoints, `http` is the shared fetch transport,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub(crate) mod http;
pub mod identity;
pub mod types;
