use std::sync::Mutex;

use compass_core::errors::{CompassResult, GenerationError};
use compass_core::models::ChatRequest;
use compass_core::traits::IChatProvider;

/// Chat provider returning a canned reply (or a canned failure).
pub struct ScriptedChat {
    reply: Result<String, String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChat {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl IChatProvider for ScriptedChat {
    fn complete(&self, request: &ChatRequest) -> CompassResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(reason) => Err(GenerationError::CompletionFailed {
                reason: reason.clone(),
            }
            .into()),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
