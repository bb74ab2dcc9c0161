//! Response engine for Banter.
//!
//! `ResponseEngine` runs the per-message pipeline for one account: classify
//! the sender, build the prompt, call the generator up to `max_attempts`
//! times (each bounded by a timeout), clean and validate the output, and
//! fall back to a canned persona reply when every attempt fails. The
//! accepted or fallback text is recorded in the account's reply history.
//!
//! `respond` never fails: generation errors are logged and absorbed.

use std::sync::Arc;
use std::time::Duration;

use tracing::{Instrument, debug, info, info_span, warn};

use banter_types::account::{AccountId, PersonaAssignment};
use banter_types::chat::{Reply, ReplySource};
use banter_types::config::GenerationConfig;
use banter_types::generation::{GenerationError, GenerationRequest};
use banter_types::persona::ArchetypeId;

use crate::classify::classify;
use crate::history::HistoryTracker;
use crate::llm::BoxTextGenerator;
use crate::persona::persona_for;
use crate::prompt::PromptBuilder;
use crate::random::SharedRandomness;
use crate::response::{clean, fallback, validate};

/// Produces one in-character reply per inbound message.
pub struct ResponseEngine {
    generator: BoxTextGenerator,
    prompts: PromptBuilder,
    history: Arc<HistoryTracker>,
    rng: SharedRandomness,
    attempt_timeout: Duration,
    max_attempts: u32,
}

impl ResponseEngine {
    pub fn new(
        generator: BoxTextGenerator,
        settings: GenerationConfig,
        history: Arc<HistoryTracker>,
        rng: SharedRandomness,
    ) -> Self {
        let attempt_timeout = Duration::from_secs(settings.timeout_secs);
        let max_attempts = settings.max_attempts;
        Self {
            generator,
            prompts: PromptBuilder::new(settings),
            history,
            rng,
            attempt_timeout,
            max_attempts,
        }
    }

    /// Override the per-attempt timeout.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    pub fn history(&self) -> &Arc<HistoryTracker> {
        &self.history
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Produce `account`'s reply to `original_message`.
    pub async fn respond(
        &self,
        account: &AccountId,
        assignment: &PersonaAssignment,
        original_message: &str,
    ) -> Reply {
        let sender = classify(original_message);
        let acting = assignment.archetype_for(account);
        let persona = persona_for(assignment, account);

        for attempt in 1..=self.max_attempts {
            let request = self
                .prompts
                .build(account, assignment, sender, original_message);

            let raw = match self.attempt(&request).await {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(
                        account = %account,
                        persona = persona.name,
                        attempt,
                        error = %err,
                        "Generation attempt failed"
                    );
                    continue;
                }
            };

            let candidate = clean(&raw);
            let recent = self.history.responses(account);
            match validate(&candidate, original_message, &recent) {
                Ok(()) => {
                    self.history.record_response(account, &candidate);
                    info!(
                        account = %account,
                        persona = persona.name,
                        sender = %sender,
                        attempt,
                        reply = %candidate,
                        "Generated reply accepted"
                    );
                    return Reply {
                        account: account.clone(),
                        text: candidate,
                        archetype: acting,
                        sender,
                        source: ReplySource::Generated { attempt },
                    };
                }
                Err(reason) => {
                    debug!(
                        account = %account,
                        attempt,
                        reason = %reason,
                        raw = %raw,
                        candidate = %candidate,
                        "Generated reply rejected"
                    );
                }
            }
        }

        let text = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            fallback::select(
                acting.unwrap_or(ArchetypeId::DEFAULT),
                original_message,
                sender,
                rng.as_mut(),
            )
        };
        self.history.record_response(account, text);
        warn!(
            account = %account,
            persona = persona.name,
            sender = %sender,
            attempts = self.max_attempts,
            reply = text,
            "Using fallback reply"
        );

        Reply {
            account: account.clone(),
            text: text.to_string(),
            archetype: acting,
            sender,
            source: ReplySource::Fallback,
        }
    }

    /// One generator call bounded by the attempt timeout.
    async fn attempt(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let span = info_span!(
            "gen_ai.generate",
            gen_ai.system = self.generator.name(),
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = request.temperature,
            gen_ai.request.top_p = request.top_p,
        );

        match tokio::time::timeout(self.attempt_timeout, self.generator.generate(request))
            .instrument(span)
            .await
        {
            Ok(result) => result.map(|r| r.response),
            Err(_) => Err(GenerationError::Timeout(
                self.attempt_timeout.as_millis() as u64,
            )),
        }
    }
}
