//! Console output formatter for council decisions

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use council_domain::{Decision, SafetyGateStatus};

/// Formats council decisions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete decision
    pub fn format(decision: &Decision) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("LLM Council Decision"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Winner:".cyan().bold(),
            decision.winner.yellow().bold()
        ));
        output.push_str(&format!(
            "{} {:.2}\n",
            "Confidence:".cyan().bold(),
            decision.confidence
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Safety Gate:".cyan().bold(),
            Self::gate_colored(decision.safety_gate_status)
        ));

        // Risks
        if !decision.risks.is_empty() {
            output.push_str(&format!("\n{}\n", "Risks:".yellow().bold()));
            for risk in &decision.risks {
                output.push_str(&format!("  * {}\n", risk));
            }
        }

        // Citations
        output.push_str(&format!("\n{}\n", "Citations:".cyan().bold()));
        for citation in &decision.citations {
            output.push_str(&format!("  * {}\n", citation));
        }

        // Phase 1: Agent responses
        output.push_str(&Self::section_header("Phase 1: Agent Responses"));
        for response in &decision.agent_responses {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", response.agent_id).yellow().bold(),
                response.response
            ));
        }

        // Phase 2: Judge scores
        output.push_str(&Self::section_header("Phase 2: Judge Scores"));
        for score in &decision.judge_scores {
            output.push_str(&format!(
                "\n{}\n",
                format!("── {} ──", score.judge_id).yellow().bold()
            ));
            output.push_str(&format!(
                "Winner: {}  Confidence: {:.2}\n",
                score.winner, score.confidence
            ));
            output.push_str(&format!(
                "Accuracy: {}  Safety: {}  Completeness: {}\n",
                score.accuracy_score, score.safety_score, score.completeness_score
            ));
            output.push_str(&format!("Reasoning: {}\n", score.reasoning));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(decision: &Decision) -> String {
        serde_json::to_string_pretty(decision).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the decision summary only (concise output)
    pub fn format_summary(decision: &Decision) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("DECISION SUMMARY"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Winner:".bold(), decision.winner));
        output.push_str(&format!(
            "{} {:.2}%\n",
            "Confidence:".bold(),
            decision.confidence * 100.0
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Safety Gate:".bold(),
            Self::gate_colored(decision.safety_gate_status)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Risks:".bold(),
            if decision.risks.is_empty() {
                "None identified".to_string()
            } else {
                decision.risks.join(", ")
            }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Citations:".bold(),
            decision.citations.len()
        ));

        output.push_str(&Self::footer());

        output
    }

    fn gate_colored(status: SafetyGateStatus) -> ColoredString {
        match status {
            SafetyGateStatus::Approved => status.as_str().green().bold(),
            SafetyGateStatus::RequiresApproval => status.as_str().yellow().bold(),
            SafetyGateStatus::Blocked => status.as_str().red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, decision: &Decision) -> String {
        Self::format(decision)
    }

    fn format_json(&self, decision: &Decision) -> String {
        Self::format_json(decision)
    }

    fn format_summary(&self, decision: &Decision) -> String {
        Self::format_summary(decision)
    }
}
