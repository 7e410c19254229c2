//! Score extraction from free-form model output.
//!
//! The model is asked to put the same number in a "Rating (0-10)" section
//! and in a final `Score: X/10` line, but nothing upstream enforces that.
//! This module is the pure, unit-testable half of the contract: raw text in,
//! `{score, analysis}` out, no I/O. The heuristic is pattern matching, so a
//! stray `X/10` near the word "Rating" can be misread as the rating; that is
//! a known weakness of the convention, not a tolerance.

use regex::Regex;
use std::sync::LazyLock;

/// Score reported when no pattern matches at all.
pub const FALLBACK_SCORE: f64 = 5.0;
/// Upper bound of the canonical 0-10 scale.
pub const SCORE_SCALE: f64 = 10.0;

/// How far past a "Rating" label we look for an `N/10` value.
const RATING_WINDOW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAnalysis {
    pub score: f64,
    pub analysis: String,
}

/// Presentation band for a 0-10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            Self::Strong
        } else if score >= 4.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

// "Rating: 8/10", "**Rating: 8/10**", "Rating (0-10): **8/10**", ...
static RATING_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Rating(?:\s*\([^)]+\))?[^:]*:\s*\*{0,2}(\d+(?:\.\d+)?)/10\*{0,2}").unwrap()
});

static RATING_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Rating").unwrap());

static VALUE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)/10").unwrap());

static SCORE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Score:\s*(\d+(?:\.\d+)?)/10").unwrap());

// Only strips the score line when it terminates the text.
static TRAILING_SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n?Score:\s*\d+(?:\.\d+)?/10[^\n]*$").unwrap());

/// Extracts a 0-10 score from raw model output and returns the analysis
/// text with the trailing `Score:` line removed.
///
/// Search order: the Rating section first (labelled value, then any `N/10`
/// within a bounded window after the word "Rating"), then a `Score: N/10`
/// line anywhere, then [`FALLBACK_SCORE`]. Values outside the scale are
/// clamped so callers always see a number within 0-10.
pub fn extract_score(text: &str) -> ScoredAnalysis {
    let text = text.trim();

    let score = find_score(text)
        .map(|s| s.clamp(0.0, SCORE_SCALE))
        .unwrap_or(FALLBACK_SCORE);

    let analysis = TRAILING_SCORE_RE.replace(text, "").trim().to_string();

    ScoredAnalysis { score, analysis }
}

fn find_score(text: &str) -> Option<f64> {
    if let Some(caps) = RATING_LABEL_RE.captures(text) {
        return caps[1].parse().ok();
    }

    if let Some(m) = RATING_WORD_RE.find(text) {
        let after = &text[m.start()..];
        let end = after
            .char_indices()
            .nth(RATING_WINDOW_CHARS)
            .map(|(i, _)| i)
            .unwrap_or(after.len());
        if let Some(caps) = VALUE_RE.captures(&after[..end]) {
            return caps[1].parse().ok();
        }
    }

    SCORE_LINE_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("**Rating: 8/10**\n\nGood idea overall.", 8.0)]
    #[case("Rating (0-10): 7/10 based on feasibility.", 7.0)]
    #[case("rating: 6/10", 6.0)]
    #[case("Rating - solid fundamentals, I give it 6.5/10 overall.", 6.5)]
    #[case("No rating section here.\n\nScore: 7/10", 7.0)]
    #[case("score: 8.5/10", 8.5)]
    #[case("The model refused to produce any rating at all.", FALLBACK_SCORE)]
    #[case("", FALLBACK_SCORE)]
    fn extracts_expected_score(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(extract_score(text).score, expected);
    }

    #[test]
    fn rating_section_wins_over_score_line() {
        let text = "Rating (0-10): **9/10**\n\nScore: 3/10";
        assert_eq!(extract_score(text).score, 9.0);
    }

    #[test]
    fn score_line_is_stripped_from_analysis() {
        let text = "Core Idea\nA solid concept.\n\nScore: 7/10";
        let scored = extract_score(text);
        assert_eq!(scored.score, 7.0);
        assert!(!scored.analysis.contains("Score: 7/10"));
        assert!(scored.analysis.ends_with("A solid concept."));
    }

    #[test]
    fn mid_text_score_line_is_not_stripped() {
        // The strip step only targets a terminating score line.
        let text = "Score: 6/10\nMore commentary follows.";
        let scored = extract_score(text);
        assert_eq!(scored.score, 6.0);
        assert!(scored.analysis.contains("Score: 6/10"));
    }

    #[test]
    fn fallback_when_value_uses_wrong_scale() {
        let scored = extract_score("This is a 72/100 idea in my book.");
        assert_eq!(scored.score, FALLBACK_SCORE);
    }

    #[test]
    fn out_of_range_value_is_clamped() {
        assert_eq!(extract_score("Score: 15/10").score, 10.0);
    }

    #[test]
    fn stray_fraction_near_rating_word_is_misread() {
        // Documented weakness: the first N/10 inside the window after
        // "Rating" wins, even when it is unrelated to the verdict.
        let text = "Rating context: competitors average 3/10 in reviews.\n\nScore: 8/10";
        assert_eq!(extract_score(text).score, 3.0);
    }

    #[test]
    fn distant_score_line_is_still_found() {
        let filler = "x".repeat(250);
        let text = format!("Rating pending.\n{}\n\nScore: 4/10", filler);
        assert_eq!(extract_score(&text).score, 4.0);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "Rating (0-10): 7/10\n\nDecent plan.\n\nScore: 7/10";
        let first = extract_score(text);
        let second = extract_score(&first.analysis);
        assert_eq!(first.score, second.score);
        assert_eq!(first.analysis, second.analysis);
    }

    #[rstest]
    #[case(9.0, ScoreBand::Strong)]
    #[case(7.0, ScoreBand::Strong)]
    #[case(6.9, ScoreBand::Moderate)]
    #[case(4.0, ScoreBand::Moderate)]
    #[case(3.9, ScoreBand::Weak)]
    #[case(0.0, ScoreBand::Weak)]
    fn score_bands(#[case] score: f64, #[case] expected: ScoreBand) {
        assert_eq!(ScoreBand::from_score(score), expected);
    }
}
