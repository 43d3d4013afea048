//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own layout and delegate behavior to `components`.

pub mod search;
