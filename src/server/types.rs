use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckIdeaResponse {
    pub analysis: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
