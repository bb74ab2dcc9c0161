//! HTTP request handlers for the REST API.

pub mod group;
pub mod history;
pub mod personas;
