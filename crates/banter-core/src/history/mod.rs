//! In-memory conversation state: rolling windows, reply history, and the
//! inbound dedup set.

pub mod dedup;
pub mod tracker;
pub mod window;

pub use dedup::DedupWindow;
pub use tracker::HistoryTracker;
pub use window::RollingWindow;
