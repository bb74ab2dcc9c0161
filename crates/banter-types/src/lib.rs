//! Shared domain types for Banter.
//!
//! This crate contains the types used across the Banter workspace:
//! archetypes, accounts and persona assignments, conversation turns and
//! replies, generation requests, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod account;
pub mod chat;
pub mod config;
pub mod error;
pub mod generation;
pub mod persona;
