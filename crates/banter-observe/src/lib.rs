//! Observability for Banter: tracing subscriber setup and span attribute
//! names for generation calls.

pub mod genai_attrs;
pub mod tracing_setup;
