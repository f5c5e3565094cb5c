//! Run Council use case
//!
//! Orchestrates the full council pipeline: agent panel, judge panel,
//! aggregation, safety gate, citation extraction, and decision assembly,
//! recording every artifact in the audit log as it is produced.
//!
//! Panel calls run strictly sequentially in roster order; audit append
//! order is an observable contract (agent responses, then judge scores,
//! then the final decision).

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use council_domain::{
    AgentResponse, AuditEntry, AuditLog, CouncilPromptTemplate, CouncilRoster, Decision,
    DomainError, JudgeScore, Phase, Query, SafetyGateStatus, aggregate_scores, average_safety,
    extract_citations, parse_evaluation,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during council execution
#[derive(Error, Debug)]
pub enum RunCouncilError {
    #[error("No agent roles configured")]
    EmptyAgentRoster,

    #[error("No judge roles configured")]
    EmptyJudgeRoster,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunCouncil use case
#[derive(Debug, Clone)]
pub struct RunCouncilInput {
    /// The query every agent answers
    pub query: Query,
    /// Agent and judge rosters for this run
    pub roster: CouncilRoster,
}

impl RunCouncilInput {
    pub fn new(query: impl Into<Query>, roster: CouncilRoster) -> Self {
        Self {
            query: query.into(),
            roster,
        }
    }

    /// Input with the standard 3-agent / 2-judge roster.
    pub fn with_standard_roster(query: impl Into<Query>) -> Self {
        Self::new(query, CouncilRoster::standard())
    }
}

/// Use case for running a full council deliberation
///
/// Holds the audit log for its own lifetime: entries accumulate across
/// runs if the instance is reused, and [`reset_audit`](Self::reset_audit)
/// is the explicit flush.
pub struct RunCouncilUseCase<G: CompletionGateway + 'static> {
    gateway: Arc<G>,
    audit: Mutex<AuditLog>,
}

impl<G: CompletionGateway + 'static> RunCouncilUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            audit: Mutex::new(AuditLog::new()),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCouncilInput) -> Result<Decision, RunCouncilError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunCouncilInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Decision, RunCouncilError> {
        if input.roster.agents.is_empty() {
            return Err(RunCouncilError::EmptyAgentRoster);
        }
        if input.roster.judges.is_empty() {
            return Err(RunCouncilError::EmptyJudgeRoster);
        }

        info!(
            "Running council with {} agents and {} judges",
            input.roster.agents.len(),
            input.roster.judges.len()
        );

        // Phase 1: every agent answers the query
        let responses = self.agent_panel(&input, progress).await;

        // Phase 2: every judge scores the full answer set
        let scores = self.judge_panel(&input, &responses, progress).await;

        // Phase 3: aggregate, gate, extract citations, assemble
        progress.on_phase_start(&Phase::Decision, 1);

        let verdict = aggregate_scores(&scores)?;
        let avg_safety = average_safety(&scores);
        let gate_status = SafetyGateStatus::evaluate(verdict.confidence, &verdict.risks, avg_safety);
        let citations = extract_citations(&responses);

        info!(
            winner = %verdict.winner,
            confidence = verdict.confidence,
            gate = %gate_status,
            "Council decision reached"
        );

        let decision = Decision::new(verdict, citations, responses, scores, gate_status);
        self.record(AuditEntry::FinalDecision(decision.clone()));

        progress.on_task_complete(&Phase::Decision, &decision.winner, true);
        progress.on_phase_complete(&Phase::Decision);

        Ok(decision)
    }

    /// Snapshot of the audit log as recorded so far.
    pub fn audit_snapshot(&self) -> AuditLog {
        self.audit.lock().unwrap().clone()
    }

    /// Discard all accumulated audit entries.
    pub fn reset_audit(&self) {
        self.audit.lock().unwrap().clear();
    }

    /// Phase 1: one gateway call per agent role, roster order, no retries.
    ///
    /// A gateway failure becomes the stored response text for that role —
    /// the pipeline always proceeds with exactly one response per agent.
    async fn agent_panel(
        &self,
        input: &RunCouncilInput,
        progress: &dyn ProgressNotifier,
    ) -> Vec<AgentResponse> {
        info!("Phase 1: Agent Responses");
        progress.on_phase_start(&Phase::Agents, input.roster.agents.len());

        let mut responses = Vec::with_capacity(input.roster.agents.len());

        for agent in &input.roster.agents {
            let text = match self
                .gateway
                .generate(&agent.instruction, input.query.content())
                .await
            {
                Ok(text) => {
                    debug!("Agent {} responded ({} bytes)", agent.id, text.len());
                    progress.on_task_complete(&Phase::Agents, &agent.id, true);
                    text
                }
                Err(e) => {
                    warn!("Agent {} gateway call failed: {}", agent.id, e);
                    progress.on_task_complete(&Phase::Agents, &agent.id, false);
                    format!("Error: {}", e)
                }
            };

            let response = AgentResponse::new(&agent.id, text);
            self.record(AuditEntry::AgentResponse(response.clone()));
            responses.push(response);
        }

        progress.on_phase_complete(&Phase::Agents);
        responses
    }

    /// Phase 2: one evaluation call per judge role, roster order.
    ///
    /// Every judge yields exactly one score: a reply that cannot be parsed
    /// (including gateway error text) becomes the neutral fallback score,
    /// with the parse failure preserved in the reasoning field. No retries.
    async fn judge_panel(
        &self,
        input: &RunCouncilInput,
        responses: &[AgentResponse],
        progress: &dyn ProgressNotifier,
    ) -> Vec<JudgeScore> {
        info!("Phase 2: Judge Evaluation");
        progress.on_phase_start(&Phase::Judges, input.roster.judges.len());

        let prompt = CouncilPromptTemplate::evaluation_prompt(input.query.content(), responses);
        // Rosters are checked non-empty before the panels run
        let fallback_winner = input.roster.first_agent_id().unwrap_or_default();

        let mut scores = Vec::with_capacity(input.roster.judges.len());

        for judge in &input.roster.judges {
            let reply = match self.gateway.generate(&judge.instruction, &prompt).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Judge {} gateway call failed: {}", judge.id, e);
                    format!("Error: {}", e)
                }
            };

            let score = match parse_evaluation(&reply) {
                Ok(evaluation) => {
                    debug!("Judge {} selected {}", judge.id, evaluation.winner);
                    progress.on_task_complete(&Phase::Judges, &judge.id, true);
                    JudgeScore::from_evaluation(&judge.id, evaluation)
                }
                Err(e) => {
                    warn!("Judge {} returned an unparseable evaluation: {}", judge.id, e);
                    progress.on_task_complete(&Phase::Judges, &judge.id, false);
                    JudgeScore::fallback(&judge.id, fallback_winner, e)
                }
            };

            self.record(AuditEntry::JudgeScore(score.clone()));
            scores.push(score);
        }

        progress.on_phase_complete(&Phase::Judges);
        scores
    }

    fn record(&self, entry: AuditEntry) {
        self.audit.lock().unwrap().push(entry);
    }
}
