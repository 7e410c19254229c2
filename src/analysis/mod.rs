pub mod prompt;
pub mod score;

pub use score::{FALLBACK_SCORE, SCORE_SCALE, ScoreBand, ScoredAnalysis, extract_score};
