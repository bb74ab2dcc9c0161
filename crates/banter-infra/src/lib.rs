//! Infrastructure layer for Banter.
//!
//! Contains implementations of the ports defined in `banter-core`: the HTTP
//! text generator, the JSON-lines chat log, and the config/data-directory
//! plumbing the binary needs at startup.

pub mod chat_log;
pub mod config;
pub mod filesystem;
pub mod llm;
