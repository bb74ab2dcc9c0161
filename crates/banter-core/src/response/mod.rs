//! Candidate reply processing: cleaning, acceptance, and canned fallbacks.

pub mod cleaner;
pub mod fallback;
pub mod validator;

pub use cleaner::clean;
pub use validator::{Rejection, is_valid, validate};
