use super::types::{CheckIdeaResponse, ErrorResponse};
use crate::analysis::{prompt, score};
use crate::config::Config;
use crate::llm::{ChatCompletionRequest, ChatMessage, LlmClient};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Minimum idea length after trimming.
pub const MIN_IDEA_CHARS: usize = 10;

const INVALID_IDEA_MSG: &str = "Please provide a detailed business idea (at least 10 characters)";
const MISSING_KEY_MSG: &str =
    "OpenAI API key not configured. Set OPENAI_API_KEY or add a real key to config.yaml.";
const INVALID_KEY_MSG: &str = "Invalid OpenAI API key";
const UPSTREAM_FAILURE_MSG: &str = "Failed to analyze idea. Please try again.";

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub config: Arc<Config>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn bad_request(msg: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

fn server_error(msg: &str) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

/// `POST /api/check-idea`: validate the idea text, render the prompt, make
/// one completion call, and return the analysis with its extracted score.
///
/// The body is taken as a raw JSON value so a missing or non-string `idea`
/// answers 400 with a readable message instead of the extractor's 422.
pub async fn check_idea(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CheckIdeaResponse>, HandlerError> {
    let idea = match body.get("idea").and_then(Value::as_str) {
        Some(raw) => raw.trim(),
        None => return Err(bad_request(INVALID_IDEA_MSG)),
    };

    if idea.chars().count() < MIN_IDEA_CHARS {
        return Err(bad_request(INVALID_IDEA_MSG));
    }

    // Checked per request, before any outbound call.
    if !state.config.llm.credential_configured() {
        return Err(server_error(MISSING_KEY_MSG));
    }

    info!("Analyzing idea submission ({} chars)", idea.chars().count());

    let request = ChatCompletionRequest {
        model: state.config.llm.model.clone(),
        messages: vec![
            ChatMessage::system(prompt::SYSTEM_PROMPT),
            ChatMessage::user(prompt::build_prompt(idea)),
        ],
        max_tokens: Some(state.config.llm.max_tokens),
        temperature: Some(state.config.llm.temperature),
    };

    match state.llm.create_chat_completion(request).await {
        Ok(response) => {
            let text = response
                .choices
                .first()
                .map(|c| c.message.content.as_str())
                .unwrap_or_default();

            let scored = score::extract_score(text);
            info!("Idea analyzed with score {}", scored.score);

            Ok(Json(CheckIdeaResponse {
                analysis: scored.analysis,
                score: scored.score,
            }))
        }
        Err(e) => {
            error!("Failed to analyze idea: {}", e);

            if e.to_string().contains("API key") {
                Err(server_error(INVALID_KEY_MSG))
            } else {
                Err(server_error(UPSTREAM_FAILURE_MSG))
            }
        }
    }
}
