//! Citation extraction
//!
//! A lightweight textual heuristic — no URL parsing, just substring
//! markers that agents typically emit when they cite sources.

use crate::council::response::AgentResponse;

/// Returned as the sole entry when no response carries citation markers.
pub const NO_CITATIONS_SENTINEL: &str = "No explicit citations found";

/// Substrings whose presence (case-insensitive) flags a response.
const CITATION_MARKERS: [&str; 3] = ["http", "source:", "reference:"];

/// Scan agent responses for citation-like markers.
///
/// Returns one `"<agent>: Contains citations"` entry per flagged response
/// in roster order, or the single-element sentinel list — never an empty
/// list.
pub fn extract_citations(responses: &[AgentResponse]) -> Vec<String> {
    let citations: Vec<String> = responses
        .iter()
        .filter(|r| {
            let text = r.response.to_lowercase();
            CITATION_MARKERS.iter().any(|marker| text.contains(marker))
        })
        .map(|r| format!("{}: Contains citations", r.agent_id))
        .collect();

    if citations.is_empty() {
        vec![NO_CITATIONS_SENTINEL.to_string()]
    } else {
        citations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(agent_id: &str, text: &str) -> AgentResponse {
        AgentResponse::new(agent_id, text)
    }

    #[test]
    fn test_no_markers_returns_sentinel() {
        let responses = vec![
            response("agent_analytical", "Plain reasoning, no links."),
            response("agent_creative", "An unusual angle on the problem."),
        ];
        assert_eq!(
            extract_citations(&responses),
            vec![NO_CITATIONS_SENTINEL.to_string()]
        );
    }

    #[test]
    fn test_single_flagged_response() {
        let responses = vec![
            response("agent_analytical", "See source: OWASP guidelines."),
            response("agent_creative", "No references here."),
        ];
        // "reference" alone does not match "reference:"
        assert_eq!(
            extract_citations(&responses),
            vec!["agent_analytical: Contains citations".to_string()]
        );
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let responses = vec![
            response("agent_a", "Source: RFC 9110"),
            response("agent_b", "REFERENCE: the manual"),
            response("agent_c", "see HTTPS://example.com"),
        ];
        assert_eq!(extract_citations(&responses).len(), 3);
    }

    #[test]
    fn test_flagged_in_roster_order() {
        let responses = vec![
            response("agent_a", "http://example.com"),
            response("agent_b", "nothing"),
            response("agent_c", "reference: docs"),
        ];
        assert_eq!(
            extract_citations(&responses),
            vec![
                "agent_a: Contains citations".to_string(),
                "agent_c: Contains citations".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_input_returns_sentinel() {
        assert_eq!(
            extract_citations(&[]),
            vec![NO_CITATIONS_SENTINEL.to_string()]
        );
    }
}
