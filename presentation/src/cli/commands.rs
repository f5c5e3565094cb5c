//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for council decisions
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every response and score
    Full,
    /// Only the decision summary
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for llm-council
#[derive(Parser, Debug)]
#[command(name = "llm-council")]
#[command(author, version, about = "LLM Council - Multi-agent decisions with safety gating")]
#[command(long_about = r#"
llm-council puts a query before a council of differently-instructed agents,
has independent judges score their answers, and gates the aggregated
decision for safety.

The process has three phases:
1. Agent Responses: every agent role answers the query
2. Judge Evaluation: every judge role scores the answers and names a winner
3. Decision: votes are tallied, risks derived, and the safety gate applied

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/llm-council/config.toml   Global config

Example:
  llm-council "What are best practices for secure web authentication?"
  llm-council --output full "Should we roll our own crypto?"
  llm-council --no-save -vv "Compare async runtimes"
"#)]
pub struct Cli {
    /// The query to put before the council
    pub query: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Model to use for all completion calls
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Token cap per completion call
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Where to write the decision snapshot
    #[arg(long, value_name = "PATH")]
    pub decision_out: Option<PathBuf>,

    /// Where to write the audit log snapshot
    #[arg(long, value_name = "PATH")]
    pub audit_out: Option<PathBuf>,

    /// Skip writing decision and audit snapshots
    #[arg(long)]
    pub no_save: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
