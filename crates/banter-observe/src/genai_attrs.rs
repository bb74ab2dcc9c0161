//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! Field names recorded on the HTTP generator span. Constants are string
//! slices usable in `tracing::span!` field names and `Span::record`.

/// Length in characters of the raw generated text.
pub const GEN_AI_RESPONSE_CHARS: &str = "gen_ai.response.chars";

/// `gen_ai.operation.name` value for a single reply generation.
pub const OP_GENERATE: &str = "generate";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_attribute_uses_genai_namespace() {
        assert!(GEN_AI_RESPONSE_CHARS.starts_with("gen_ai.response."));
        assert_eq!(OP_GENERATE, "generate");
    }
}
