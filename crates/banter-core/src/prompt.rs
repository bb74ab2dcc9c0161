//! Relationship-aware prompt construction.

use banter_types::account::{AccountId, PersonaAssignment};
use banter_types::config::GenerationConfig;
use banter_types::generation::GenerationRequest;
use banter_types::persona::{ArchetypeId, SenderKind};

use crate::persona::{catalog, persona_for};

/// Situational hint for the acting archetype replying to `sender`.
///
/// Only the couple and mentor/student pairs carry a hint.
pub fn relationship_line(acting: ArchetypeId, sender: SenderKind) -> Option<&'static str> {
    match (acting, sender) {
        (ArchetypeId::Girl, SenderKind::FlirtyBoy) => {
            Some("A boy is flirting with you. Sometimes show interest, sometimes be cold.")
        }
        (ArchetypeId::FlirtyBoy, SenderKind::Girl) => {
            Some("The girl you like replied. Keep flirting but be cool.")
        }
        (ArchetypeId::CuriousTeen, SenderKind::MatureGuy) => {
            Some("The mature guy is sharing wisdom. Ask follow-up questions.")
        }
        (ArchetypeId::MatureGuy, SenderKind::CuriousTeen) => {
            Some("The teen asked something. Give helpful advice.")
        }
        _ => None,
    }
}

/// Builds generation requests for one account's reply.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    settings: GenerationConfig,
}

impl PromptBuilder {
    pub fn new(settings: GenerationConfig) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GenerationConfig {
        &self.settings
    }

    /// Compose the request for `account` replying to `original_message`.
    ///
    /// Unassigned accounts speak as the default archetype.
    pub fn build(
        &self,
        account: &AccountId,
        assignment: &PersonaAssignment,
        sender: SenderKind,
        original_message: &str,
    ) -> GenerationRequest {
        let persona = persona_for(assignment, account);
        let style = catalog::style(persona.id);
        let relationship = relationship_line(persona.id, sender).unwrap_or_default();

        let prompt = format!(
            "Friend group chat. You're a {age} year old.\n\n\
             {relationship}\n\n\
             They said: \"{original_message}\"\n\n\
             Your vibe: {tone}\n\n\
             How you talk:\n\
             {examples}\n\n\
             Reply naturally (3-5 words):",
            age = persona.age,
            tone = style.tone,
            examples = style.examples.join(" | "),
        );

        GenerationRequest {
            prompt,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            top_p: self.settings.top_p,
            frequency_penalty: self.settings.frequency_penalty,
            presence_penalty: self.settings.presence_penalty,
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}
