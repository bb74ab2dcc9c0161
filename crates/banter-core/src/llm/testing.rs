//! Scripted generator for engine and session tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use banter_types::generation::{GenerationError, GenerationRequest, GenerationResponse};

use super::generator::TextGenerator;

pub enum Step {
    Reply(&'static str),
    Fail,
    Hang,
}

/// Replays queued steps; an exhausted script fails every call.
pub struct ScriptedGenerator {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&'static str]) -> Self {
        Self::new(texts.iter().map(|t| Step::Reply(*t)).collect())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, GenerationError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.prompt.clone());
        let step = self.steps.lock().unwrap().pop_front().unwrap_or(Step::Fail);
        async move {
            match step {
                Step::Reply(text) => Ok(GenerationResponse {
                    response: text.to_string(),
                }),
                Step::Fail => Err(GenerationError::Http {
                    status: 500,
                    body: "scripted failure".to_string(),
                }),
                Step::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Err(GenerationError::Transport("unreachable".to_string()))
                }
            }
        }
    }
}
