use async_trait::async_trait;
use idea_checker::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Deterministic LLM client for tests: hands out queued responses and
/// records every request it receives.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_response_text(self, content: &str) -> Self {
        self.with_responses(vec![completion_with_text(content)])
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Handle for asserting on requests after the client has been moved
    /// into the router state.
    pub fn requests_handle(&self) -> Arc<Mutex<Vec<ChatCompletionRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

pub fn completion_with_text(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("Stop".to_string()),
        }],
        usage: None,
    }
}
