//! Text generation abstractions for Banter.
//!
//! - `TextGenerator`: RPITIT trait for concrete generation backends
//! - `BoxTextGenerator`: Object-safe wrapper for dynamic dispatch
//! - `OfflineGenerator`: Always-failing backend that forces fallbacks

pub mod box_generator;
pub mod generator;
pub mod offline;

pub use box_generator::BoxTextGenerator;
pub use generator::TextGenerator;
pub use offline::OfflineGenerator;

#[cfg(test)]
pub(crate) mod testing;
