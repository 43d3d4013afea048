//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `query_panel` is the only stateful component; it renders one
//! `product_card` per matched product.

pub mod product_card;
pub mod query_panel;
