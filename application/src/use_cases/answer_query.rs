//! Answer Query use case
//!
//! Orchestrates the full tribunal consensus flow: up to three draft-audit
//! rounds, then an unconditional best-effort synthesis if every round was
//! rejected.
//!
//! Per round:
//! 1. Scholar (pro tier) and Sceptic (flash tier) draft in parallel; the
//!    round blocks on the slower of the two.
//! 2. The Auditor (pro tier) cross-references both drafts and replies with a
//!    literal `VERIFIED:` or `REJECTED:` prefix.
//! 3. `VERIFIED:` ends the loop; `REJECTED:` feedback is threaded into the
//!    next round's Scholar prompt.
//!
//! Any gateway failure at any step is terminal for the query. Termination is
//! bounded: at most `max_rounds` draft pairs, `max_rounds` audits, and one
//! synthesis call.

use crate::config::ConsensusParams;
use crate::ports::log_sink::LogSink;
use crate::ports::model_gateway::{GatewayError, ModelGateway};
use rulemaster_domain::{
    AgentRole, Deliberation, LogEvent, ModelTier, PromptTemplate, Query, Resolution, RoundRecord,
    Rulebook, Verdict,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while answering a query
#[derive(Error, Debug)]
pub enum AnswerQueryError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Query cancelled")]
    Cancelled,
}

/// Input for the [`AnswerQueryUseCase`]
#[derive(Debug, Clone)]
pub struct AnswerQueryInput {
    /// The rules question
    pub query: Query,
    /// Optional rulebook PDF, passed verbatim to every gateway call
    pub rulebook: Option<Rulebook>,
    /// Loop parameters
    pub params: ConsensusParams,
}

impl AnswerQueryInput {
    pub fn new(query: impl Into<Query>, params: ConsensusParams) -> Self {
        Self {
            query: query.into(),
            rulebook: None,
            params,
        }
    }

    pub fn with_rulebook(mut self, rulebook: Rulebook) -> Self {
        self.rulebook = Some(rulebook);
        self
    }
}

/// Use case for running the tribunal consensus loop
///
/// Holds no per-query state: everything lives in the locals of one
/// `execute` call, so the caller owns the one-run-at-a-time invariant.
pub struct AnswerQueryUseCase {
    gateway: Arc<dyn ModelGateway>,
}

impl AnswerQueryUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the consensus loop to completion
    pub async fn execute(
        &self,
        input: AnswerQueryInput,
        sink: &dyn LogSink,
    ) -> Result<Deliberation, AnswerQueryError> {
        self.run(input, sink).await
    }

    /// Execute with a cancellation token.
    ///
    /// Cancellation aborts at the next await point; in-flight gateway calls
    /// are dropped and any late results are discarded with them.
    pub async fn execute_cancellable(
        &self,
        input: AnswerQueryInput,
        sink: &dyn LogSink,
        cancel: &CancellationToken,
    ) -> Result<Deliberation, AnswerQueryError> {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("Query cancelled by caller");
                Err(AnswerQueryError::Cancelled)
            }
            result = self.run(input, sink) => result,
        }
    }

    async fn run(
        &self,
        input: AnswerQueryInput,
        sink: &dyn LogSink,
    ) -> Result<Deliberation, AnswerQueryError> {
        let query = input.query.content();
        let rulebook = input.rulebook.as_ref();
        let has_rulebook = rulebook.is_some();
        let source = PromptTemplate::audit_source(has_rulebook);
        let max_rounds = input.params.max_rounds;

        info!(max_rounds, has_rulebook, "Starting tribunal for query");

        let mut feedback = String::new();
        let mut last_draft = String::new();
        let mut rounds: Vec<RoundRecord> = Vec::new();

        for round in 1..=max_rounds {
            sink.append(LogEvent::from_role(
                AgentRole::System,
                format!("Iteration {}: Parallel Analysis Initiated...", round),
            ));

            // Draft phase: Scholar and Sceptic run concurrently, the round
            // waits for both.
            sink.append(LogEvent::from_role(
                AgentRole::Scholar,
                "Drafting targeted answer...",
            ));
            sink.append(LogEvent::from_role(
                AgentRole::Sceptic,
                "Stress-testing for exceptions...",
            ));

            let scholar_prompt = PromptTemplate::scholar(
                query,
                (!feedback.is_empty()).then_some(feedback.as_str()),
                has_rulebook,
            );
            let sceptic_prompt = PromptTemplate::sceptic(query, has_rulebook);

            let (draft, critique) = tokio::try_join!(
                self.gateway.generate(&scholar_prompt, ModelTier::Pro, rulebook),
                self.gateway
                    .generate(&sceptic_prompt, ModelTier::Flash, rulebook),
            )?;

            debug!(round, draft_len = draft.len(), critique_len = critique.len(), "Drafts complete");

            // Audit phase: sequential, depends on both drafts.
            sink.append(LogEvent::from_role(
                AgentRole::Auditor,
                format!("Cross-referencing {} for precision...", source),
            ));

            let auditor_prompt = PromptTemplate::auditor(query, &draft, &critique, has_rulebook);
            let raw_verdict = self
                .gateway
                .generate(&auditor_prompt, ModelTier::Pro, rulebook)
                .await?;

            let verdict = Verdict::parse(&raw_verdict);
            match &verdict {
                Verdict::Verified { answer } => {
                    info!(round, "Draft verified");
                    sink.append(LogEvent::from_role(
                        AgentRole::Auditor,
                        format!("Response verified against {}. Success.", source),
                    ));

                    let answer = answer.clone();
                    rounds.push(RoundRecord::new(round, draft, critique, verdict));
                    return Ok(Deliberation::new(
                        query,
                        rounds,
                        Resolution::Verified { round },
                        answer,
                    ));
                }
                Verdict::Rejected {
                    reason,
                    feedback: full,
                } => {
                    warn!(round, %reason, "Draft rejected");
                    sink.append(LogEvent::from_role(
                        AgentRole::Auditor,
                        format!("REJECTED - {}", reason),
                    ));

                    feedback = full.clone();
                    last_draft = draft.clone();
                    rounds.push(RoundRecord::new(round, draft, critique, verdict));
                }
            }
        }

        // Every round was rejected: one unconditional synthesis call.
        info!("Convergence failed after {} rounds, synthesizing", max_rounds);
        sink.append(LogEvent::from_role(
            AgentRole::System,
            "Convergence failed. Synthesizing best effort...",
        ));

        let synthesis_prompt = PromptTemplate::synthesis(query, &last_draft, &feedback);
        let answer = self
            .gateway
            .generate(&synthesis_prompt, ModelTier::Pro, rulebook)
            .await?;

        Ok(Deliberation::new(query, rounds, Resolution::Synthesis, answer))
    }
}
