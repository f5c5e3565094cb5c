//! Decision aggregation
//!
//! Folds the judge scores of one run into a single verdict: a winner by
//! vote count, an averaged confidence, and a derived risk list. These are
//! pure functions over [`JudgeScore`] slices — no I/O, no state.

use crate::core::error::DomainError;
use crate::council::score::JudgeScore;
use serde::{Deserialize, Serialize};

/// Sub-score below which a judge's safety opinion is flagged as a risk.
pub const LOW_SAFETY_THRESHOLD: f64 = 7.0;

/// Confidence below which a judge's opinion is flagged as a risk.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Aggregate of all judge scores in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedVerdict {
    /// Agent role id with the most judge votes
    pub winner: String,
    /// Arithmetic mean of judge confidences, unclamped
    pub confidence: f64,
    /// Risk strings in judge order, safety risk before confidence risk
    pub risks: Vec<String>,
}

/// Aggregate judge scores into a verdict.
///
/// The winner is the most-voted agent id; ties resolve to whichever tied
/// candidate was voted for first in judge order. The tally is kept as an
/// insertion-ordered list and scanned with a strictly-greater comparison,
/// so the tie-break never depends on map iteration order.
///
/// Errors with [`DomainError::NoJudgeScores`] on an empty slice — running
/// a council without judges is a caller contract violation.
pub fn aggregate_scores(scores: &[JudgeScore]) -> Result<AggregatedVerdict, DomainError> {
    if scores.is_empty() {
        return Err(DomainError::NoJudgeScores);
    }

    let mut tally: Vec<(&str, usize)> = Vec::new();
    let mut confidence_sum = 0.0;
    let mut risks = Vec::new();

    for score in scores {
        match tally.iter().position(|(id, _)| *id == score.winner) {
            Some(i) => tally[i].1 += 1,
            None => tally.push((&score.winner, 1)),
        }
        confidence_sum += score.confidence;

        if score.safety_score < LOW_SAFETY_THRESHOLD {
            risks.push(format!(
                "Low safety score ({}) from {}",
                score.safety_score, score.judge_id
            ));
        }
        if score.confidence < LOW_CONFIDENCE_THRESHOLD {
            risks.push(format!(
                "Low confidence ({}) from {}",
                score.confidence, score.judge_id
            ));
        }
    }

    let mut winner = tally[0];
    for candidate in &tally[1..] {
        if candidate.1 > winner.1 {
            winner = *candidate;
        }
    }

    Ok(AggregatedVerdict {
        winner: winner.0.to_string(),
        confidence: confidence_sum / scores.len() as f64,
        risks,
    })
}

/// Unweighted mean of all judges' safety sub-scores.
///
/// # Panics
/// Panics on an empty slice — same contract as [`aggregate_scores`].
pub fn average_safety(scores: &[JudgeScore]) -> f64 {
    assert!(!scores.is_empty(), "average_safety requires at least one judge score");
    scores.iter().map(|s| s.safety_score).sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(judge_id: &str, winner: &str, confidence: f64, safety: f64) -> JudgeScore {
        JudgeScore {
            judge_id: judge_id.to_string(),
            winner: winner.to_string(),
            confidence,
            reasoning: String::new(),
            accuracy_score: 8.0,
            safety_score: safety,
            completeness_score: 8.0,
        }
    }

    #[test]
    fn test_majority_winner() {
        let scores = vec![
            score("judge_1", "agent_a", 0.9, 9.0),
            score("judge_2", "agent_b", 0.8, 9.0),
            score("judge_3", "agent_a", 0.7, 9.0),
        ];
        let verdict = aggregate_scores(&scores).unwrap();
        assert_eq!(verdict.winner, "agent_a");
    }

    #[test]
    fn test_tie_breaks_to_first_seen() {
        let scores = vec![
            score("judge_1", "agent_a", 0.9, 9.0),
            score("judge_2", "agent_b", 0.9, 9.0),
        ];
        // One vote each: agent_a was seen first in judge order.
        for _ in 0..10 {
            let verdict = aggregate_scores(&scores).unwrap();
            assert_eq!(verdict.winner, "agent_a");
        }
    }

    #[test]
    fn test_confidence_is_arithmetic_mean() {
        let scores = vec![
            score("judge_1", "agent_a", 0.9, 9.0),
            score("judge_2", "agent_a", 0.6, 9.0),
        ];
        let verdict = aggregate_scores(&scores).unwrap();
        assert!((verdict.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_mean_is_unclamped() {
        let scores = vec![
            score("judge_1", "agent_a", 1.8, 9.0),
            score("judge_2", "agent_a", 1.2, 9.0),
        ];
        let verdict = aggregate_scores(&scores).unwrap();
        assert!((verdict.confidence - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_winner_drawn_from_votes() {
        let scores = vec![
            score("judge_1", "agent_c", 0.9, 9.0),
            score("judge_2", "agent_b", 0.8, 9.0),
        ];
        let verdict = aggregate_scores(&scores).unwrap();
        assert!(["agent_c", "agent_b"].contains(&verdict.winner.as_str()));
    }

    #[test]
    fn test_risk_flags_per_judge() {
        let scores = vec![
            // Both risks: low safety and low confidence
            score("judge_1", "agent_a", 0.4, 5.0),
            // No risks
            score("judge_2", "agent_a", 0.9, 9.0),
            // Safety risk only
            score("judge_3", "agent_a", 0.8, 6.5),
        ];
        let verdict = aggregate_scores(&scores).unwrap();
        assert_eq!(
            verdict.risks,
            vec![
                "Low safety score (5) from judge_1",
                "Low confidence (0.4) from judge_1",
                "Low safety score (6.5) from judge_3",
            ]
        );
    }

    #[test]
    fn test_threshold_boundaries_are_exclusive() {
        let scores = vec![score("judge_1", "agent_a", 0.6, 7.0)];
        let verdict = aggregate_scores(&scores).unwrap();
        assert!(verdict.risks.is_empty());
    }

    #[test]
    fn test_empty_scores_is_contract_violation() {
        let result = aggregate_scores(&[]);
        assert!(matches!(result, Err(DomainError::NoJudgeScores)));
    }

    #[test]
    fn test_average_safety() {
        let scores = vec![
            score("judge_1", "agent_a", 0.9, 9.0),
            score("judge_2", "agent_a", 0.9, 5.0),
        ];
        assert!((average_safety(&scores) - 7.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn test_average_safety_empty_panics() {
        average_safety(&[]);
    }
}
