//! Judge evaluation payload parsing
//!
//! Judges are asked for a fixed-shape JSON payload but reply with free
//! text, so parsing is modeled as a tagged result: [`parse_evaluation`]
//! returns either the structured fields or a reason the payload was
//! malformed. Callers branch explicitly on the two outcomes; a parse
//! failure never escapes this boundary as a panic.
//!
//! The expected payload shape:
//!
//! ```json
//! {
//!     "winner": "agent_practical",
//!     "confidence": 0.85,
//!     "reasoning": "brief explanation",
//!     "scores": {
//!         "agent_practical": {"accuracy": 9, "safety": 9, "completeness": 6}
//!     }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Why a judge's reply could not be treated as a structured evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationParseError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("missing or invalid field `{0}`")]
    MissingField(&'static str),

    #[error("no scores for declared winner `{0}`")]
    MissingWinnerScores(String),
}

/// The structured fields extracted from a well-formed judge reply
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEvaluation {
    pub winner: String,
    pub confidence: f64,
    pub reasoning: String,
    /// Winner's own sub-scores, looked up from the payload's scores map
    pub accuracy: f64,
    pub safety: f64,
    pub completeness: f64,
}

/// Parse a judge reply into its structured evaluation fields.
///
/// Tolerates prose and markdown fences around the payload by scanning the
/// window from the first `{` to the last `}`. Numeric fields are taken as
/// returned, without range validation; a wrong type counts as a missing
/// field so the caller's fallback path stays reachable for any
/// non-conforming payload.
pub fn parse_evaluation(response: &str) -> Result<ParsedEvaluation, EvaluationParseError> {
    let json_str = extract_json_object(response).ok_or(EvaluationParseError::NoJsonObject)?;

    let payload: Value = serde_json::from_str(json_str)
        .map_err(|e| EvaluationParseError::MalformedJson(e.to_string()))?;

    let winner = payload
        .get("winner")
        .and_then(Value::as_str)
        .ok_or(EvaluationParseError::MissingField("winner"))?
        .to_string();

    let confidence = payload
        .get("confidence")
        .and_then(Value::as_f64)
        .ok_or(EvaluationParseError::MissingField("confidence"))?;

    let reasoning = payload
        .get("reasoning")
        .and_then(Value::as_str)
        .ok_or(EvaluationParseError::MissingField("reasoning"))?
        .to_string();

    let winner_scores = payload
        .get("scores")
        .and_then(|s| s.get(&winner))
        .ok_or_else(|| EvaluationParseError::MissingWinnerScores(winner.clone()))?;

    let criterion = |key: &'static str| {
        winner_scores
            .get(key)
            .and_then(Value::as_f64)
            .ok_or(EvaluationParseError::MissingField(key))
    };

    Ok(ParsedEvaluation {
        accuracy: criterion("accuracy")?,
        safety: criterion("safety")?,
        completeness: criterion("completeness")?,
        winner,
        confidence,
        reasoning,
    })
}

/// Extract the outermost `{...}` window from a free-text reply.
fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    Some(&response[start..start + end + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "winner": "agent_creative",
        "confidence": 0.72,
        "reasoning": "Most original framing",
        "scores": {
            "agent_analytical": {"accuracy": 8, "safety": 9, "completeness": 7},
            "agent_creative": {"accuracy": 7, "safety": 8, "completeness": 8}
        }
    }"#;

    #[test]
    fn test_parse_well_formed() {
        let parsed = parse_evaluation(WELL_FORMED).unwrap();
        assert_eq!(parsed.winner, "agent_creative");
        assert_eq!(parsed.confidence, 0.72);
        assert_eq!(parsed.reasoning, "Most original framing");
        // Winner's own sub-scores, not the first entry's
        assert_eq!(parsed.accuracy, 7.0);
        assert_eq!(parsed.safety, 8.0);
        assert_eq!(parsed.completeness, 8.0);
    }

    #[test]
    fn test_parse_with_markdown_fence() {
        let response = format!("Here is my evaluation:\n```json\n{}\n```\n", WELL_FORMED);
        let parsed = parse_evaluation(&response).unwrap();
        assert_eq!(parsed.winner, "agent_creative");
    }

    #[test]
    fn test_parse_no_json() {
        assert_eq!(
            parse_evaluation("I think the analytical response was best."),
            Err(EvaluationParseError::NoJsonObject)
        );
        assert_eq!(parse_evaluation(""), Err(EvaluationParseError::NoJsonObject));
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_evaluation(r#"{"winner": "agent_a", "#);
        assert!(matches!(result, Err(EvaluationParseError::NoJsonObject)));

        let result = parse_evaluation(r#"{"winner": }"#);
        assert!(matches!(result, Err(EvaluationParseError::MalformedJson(_))));
    }

    #[test]
    fn test_parse_missing_winner() {
        let result = parse_evaluation(r#"{"confidence": 0.8, "reasoning": "x", "scores": {}}"#);
        assert_eq!(result, Err(EvaluationParseError::MissingField("winner")));
    }

    #[test]
    fn test_parse_missing_confidence() {
        let result = parse_evaluation(r#"{"winner": "a", "reasoning": "x", "scores": {}}"#);
        assert_eq!(result, Err(EvaluationParseError::MissingField("confidence")));
    }

    #[test]
    fn test_parse_winner_absent_from_scores() {
        let result = parse_evaluation(
            r#"{"winner": "agent_b", "confidence": 0.9, "reasoning": "x",
                "scores": {"agent_a": {"accuracy": 8, "safety": 9, "completeness": 7}}}"#,
        );
        assert_eq!(
            result,
            Err(EvaluationParseError::MissingWinnerScores("agent_b".to_string()))
        );
    }

    #[test]
    fn test_parse_non_numeric_criterion() {
        let result = parse_evaluation(
            r#"{"winner": "agent_a", "confidence": 0.9, "reasoning": "x",
                "scores": {"agent_a": {"accuracy": "high", "safety": 9, "completeness": 7}}}"#,
        );
        assert_eq!(result, Err(EvaluationParseError::MissingField("accuracy")));
    }

    #[test]
    fn test_out_of_range_values_pass_through_unclamped() {
        let parsed = parse_evaluation(
            r#"{"winner": "agent_a", "confidence": 1.7, "reasoning": "x",
                "scores": {"agent_a": {"accuracy": 14, "safety": -2, "completeness": 7}}}"#,
        )
        .unwrap();
        assert_eq!(parsed.confidence, 1.7);
        assert_eq!(parsed.accuracy, 14.0);
        assert_eq!(parsed.safety, -2.0);
    }
}
