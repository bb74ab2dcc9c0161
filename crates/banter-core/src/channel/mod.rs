//! Chat transports that live inside the process.

pub mod loopback;

pub use loopback::LoopbackChannel;
