//! Judge score value object

use crate::council::evaluation::ParsedEvaluation;
use serde::{Deserialize, Serialize};

/// Confidence substituted when a judge's evaluation cannot be parsed.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Neutral midpoint on the 0-10 criterion scale, substituted on parse failure.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Score from a single judge role
///
/// Immutable once created. Numeric fields carry whatever the judge
/// returned: confidence is nominally 0-1 and sub-scores nominally 0-10,
/// but none of them are clamped or validated at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgeScore {
    /// Role identifier of the judge that produced this score
    pub judge_id: String,
    /// Agent role id the judge selected as the best answer
    pub winner: String,
    /// Judge's confidence in its selection (nominally 0-1, unclamped)
    pub confidence: f64,
    /// Judge's reasoning text
    pub reasoning: String,
    /// Winner's accuracy sub-score (nominally 0-10, unclamped)
    pub accuracy_score: f64,
    /// Winner's safety sub-score (nominally 0-10, unclamped)
    pub safety_score: f64,
    /// Winner's completeness sub-score (nominally 0-10, unclamped)
    pub completeness_score: f64,
}

impl JudgeScore {
    /// Build a score from a successfully parsed evaluation payload.
    pub fn from_evaluation(judge_id: impl Into<String>, evaluation: ParsedEvaluation) -> Self {
        Self {
            judge_id: judge_id.into(),
            winner: evaluation.winner,
            confidence: evaluation.confidence,
            reasoning: evaluation.reasoning,
            accuracy_score: evaluation.accuracy,
            safety_score: evaluation.safety,
            completeness_score: evaluation.completeness,
        }
    }

    /// The fixed neutral score substituted when a judge's output cannot be
    /// parsed: the first agent in roster order wins, confidence is 0.5, and
    /// every sub-score sits at the 5.0 midpoint. The reasoning field keeps
    /// the parse-failure detail for the audit trail.
    pub fn fallback(
        judge_id: impl Into<String>,
        fallback_winner: impl Into<String>,
        detail: impl std::fmt::Display,
    ) -> Self {
        Self {
            judge_id: judge_id.into(),
            winner: fallback_winner.into(),
            confidence: FALLBACK_CONFIDENCE,
            reasoning: format!("Parse error: {}", detail),
            accuracy_score: NEUTRAL_SCORE,
            safety_score: NEUTRAL_SCORE,
            completeness_score: NEUTRAL_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_evaluation() {
        let evaluation = ParsedEvaluation {
            winner: "agent_practical".to_string(),
            confidence: 0.85,
            reasoning: "Most actionable answer".to_string(),
            accuracy: 9.0,
            safety: 9.0,
            completeness: 6.0,
        };
        let score = JudgeScore::from_evaluation("judge_primary", evaluation);

        assert_eq!(score.judge_id, "judge_primary");
        assert_eq!(score.winner, "agent_practical");
        assert_eq!(score.confidence, 0.85);
        assert_eq!(score.accuracy_score, 9.0);
        assert_eq!(score.completeness_score, 6.0);
    }

    #[test]
    fn test_fallback_is_neutral() {
        let score = JudgeScore::fallback("judge_secondary", "agent_analytical", "not JSON");

        assert_eq!(score.winner, "agent_analytical");
        assert_eq!(score.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(score.accuracy_score, NEUTRAL_SCORE);
        assert_eq!(score.safety_score, NEUTRAL_SCORE);
        assert_eq!(score.completeness_score, NEUTRAL_SCORE);
        assert!(score.reasoning.contains("not JSON"));
    }
}
