//! In-memory collaborators for handler and engine tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::{AuthError, IdentityResolver};
use crate::errors::AppError;
use crate::history::HistoryStore;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::history::GenerationHistoryRow;
use crate::models::homyo::{NameRequest, NameSuggestion};
use crate::models::user::CallerIdentity;
use crate::state::AppState;

pub const VALID_TOKEN: &str = "valid-token";

/// Replies with a fixed text and records every prompt it receives.
pub struct MockGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Always fails with the error produced by the closure.
pub struct FailingGenerator<F>(pub F);

#[async_trait]
impl<F> TextGenerator for FailingGenerator<F>
where
    F: Fn() -> LlmError + Send + Sync,
{
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err((self.0)())
    }
}

/// Accepts only `VALID_TOKEN`.
pub struct MockIdentity {
    pub caller: CallerIdentity,
}

impl Default for MockIdentity {
    fn default() -> Self {
        Self {
            caller: CallerIdentity {
                id: Uuid::new_v4(),
                email: Some("family@example.jp".to_string()),
            },
        }
    }
}

#[async_trait]
impl IdentityResolver for MockIdentity {
    async fn resolve(&self, bearer: &str) -> Result<CallerIdentity, AuthError> {
        if bearer == VALID_TOKEN {
            Ok(self.caller.clone())
        } else {
            Err(AuthError::Rejected(401))
        }
    }
}

/// Records `(caller, request, suggestions)`; optionally fails every write.
#[derive(Default)]
pub struct MockHistory {
    pub fail: bool,
    pub records: Mutex<Vec<(CallerIdentity, NameRequest, Vec<NameSuggestion>)>>,
}

#[async_trait]
impl HistoryStore for MockHistory {
    async fn record(
        &self,
        caller: &CallerIdentity,
        request: &NameRequest,
        suggestions: &[NameSuggestion],
    ) -> Result<GenerationHistoryRow, AppError> {
        if self.fail {
            return Err(AppError::Internal(anyhow::anyhow!("history store offline")));
        }
        self.records
            .lock()
            .unwrap()
            .push((caller.clone(), request.clone(), suggestions.to_vec()));

        Ok(GenerationHistoryRow {
            id: Uuid::new_v4(),
            user_id: caller.id,
            input_data: serde_json::to_value(request).unwrap(),
            generated_names: serde_json::to_value(suggestions).unwrap(),
            is_favorited: false,
            created_at: Utc::now(),
        })
    }
}

pub fn state_with(
    generator: Arc<dyn TextGenerator>,
    history: Option<Arc<dyn HistoryStore>>,
) -> AppState {
    AppState {
        generator,
        identity: Arc::new(MockIdentity::default()),
        history,
    }
}
