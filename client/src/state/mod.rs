//! Client-side state.
//!
//! DESIGN
//! ======
//! State is plain data with explicit mutation methods; components wrap it in
//! signals. Keeping it signal-free lets the lifecycle be tested natively.

pub mod search;
