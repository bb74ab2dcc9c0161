//! Group session: the coordinator around the response engine and the
//! ports it needs from the outside world.

pub mod group;
pub mod ports;

pub use group::GroupSession;
pub use ports::{ChatLog, ChatTransport};
