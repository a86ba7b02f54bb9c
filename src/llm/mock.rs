use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ReasoningClient, ReasoningError};

/// In-memory reasoning client that replays queued replies in order
///
/// Every prompt it receives is recorded along with the model it was sent to.
/// Once the queue is exhausted, further calls fail with `ServiceError`.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, ReasoningError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub model: String,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client that answers each call with the next reply
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let client = Self::new();
        for reply in replies {
            client.push_reply(reply);
        }
        client
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.lock_replies().push_back(Ok(reply.into()));
    }

    pub fn push_error(&self, error: ReasoningError) {
        self.lock_replies().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn remaining_replies(&self) -> usize {
        self.lock_replies().len()
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, ReasoningError>>> {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ReasoningClient for ScriptedClient {
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String, ReasoningError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                prompt: prompt.to_string(),
                model: model.to_string(),
            });

        let reply = self.lock_replies().pop_front().unwrap_or_else(|| {
            Err(ReasoningError::ServiceError(
                "ScriptedClient: no more replies in queue".to_string(),
            ))
        })?;

        Ok(reply.trim().to_string())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
