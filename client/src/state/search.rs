//! Query panel state and its submission lifecycle.
//!
//! DESIGN
//! ======
//! One `SearchState` lives inside one `QueryPanel` instance (held in a local
//! `RwSignal`, never in context). All mutation goes through three operations:
//! `set_query`, `begin_submit`, and `settle`.
//!
//! Every accepted submission gets a sequence number. Only the settlement
//! carrying the latest number is applied; anything older is stale and is
//! dropped untouched, so a slow first request can never overwrite the answer
//! to a faster second one.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::ChatError;
use crate::net::types::{ChatResult, Product};

/// The only failure text a user ever sees.
pub const BACKEND_ERROR_TEXT: &str = "Error connecting to backend.";

/// A request the panel has committed to sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Sequence number to hand back to [`SearchState::settle`].
    pub seq: u64,
    /// Query text to send as the request `message`.
    pub message: String,
}

/// What `settle` did with a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// The result belonged to the latest submission and is now displayed.
    Applied,
    /// A newer submission exists (or nothing was pending); state is unchanged.
    Stale,
}

/// Per-panel query, answer, and loading state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub response: String,
    pub products: Vec<Product>,
    pub loading: bool,
    /// Sequence number of the most recent accepted submission (0 before any).
    latest_seq: u64,
}

impl SearchState {
    /// Replace the current query. No validation.
    pub fn set_query(&mut self, value: String) {
        self.query = value;
    }

    /// Start a submission for the current query.
    ///
    /// Returns `None` and leaves state untouched when the query is empty.
    /// Otherwise clears the previous answer, raises `loading`, and returns the
    /// submission to send.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.query.is_empty() {
            return None;
        }
        self.latest_seq += 1;
        self.loading = true;
        self.response.clear();
        self.products.clear();
        Some(Submission { seq: self.latest_seq, message: self.query.clone() })
    }

    /// Apply the outcome of submission `seq`.
    pub fn settle(&mut self, seq: u64, outcome: Result<ChatResult, ChatError>) -> Settlement {
        if !self.loading || seq != self.latest_seq {
            return Settlement::Stale;
        }
        match outcome {
            Ok(result) => {
                self.response = result.response;
                self.products = result.products;
            }
            Err(_) => {
                BACKEND_ERROR_TEXT.clone_into(&mut self.response);
                self.products.clear();
            }
        }
        self.loading = false;
        Settlement::Applied
    }

    /// Whether the answer block should render.
    pub fn shows_response(&self) -> bool {
        !self.response.is_empty()
    }

    /// Whether the product grid should render inside the answer block.
    pub fn shows_products(&self) -> bool {
        self.shows_response() && !self.products.is_empty()
    }
}
