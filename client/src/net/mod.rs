//! Networking for the chat round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call, `types` defines the wire schema and its
//! decoding rules, and `error` names the ways a round trip can fail.

pub mod api;
pub mod error;
pub mod types;
