//! Business logic and port trait definitions for Banter.
//!
//! This crate holds the persona engine (catalog, assignment, classifier,
//! prompt builder, cleaner/validator, fallback table, history) and the
//! "ports" that infrastructure implements (`TextGenerator`, `ChatTransport`,
//! `ChatLog`). It depends only on `banter-types` -- never on
//! `banter-infra` or any network/filesystem crate.

pub mod channel;
pub mod classify;
pub mod engine;
pub mod history;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod random;
pub mod response;
pub mod session;
