//! Output formatter trait

use council_domain::Decision;

/// Trait for formatting council decisions
pub trait OutputFormatter {
    /// Format the complete decision with every response and score
    fn format(&self, decision: &Decision) -> String;

    /// Format as JSON
    fn format_json(&self, decision: &Decision) -> String;

    /// Format the decision summary only (concise output)
    fn format_summary(&self, decision: &Decision) -> String;
}
