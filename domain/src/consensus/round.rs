//! Round and deliberation records - immutable result types for a tribunal run.
//!
//! These types represent the outputs of the consensus loop:
//! - [`RoundRecord`] - One draft-audit cycle's inputs and verdict
//! - [`Resolution`] - How the final answer was produced
//! - [`Deliberation`] - Complete record of all rounds plus the final answer

use super::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// One completed draft-audit cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-indexed)
    pub round: usize,
    /// Scholar's draft answer
    pub draft: String,
    /// Sceptic's edge-case analysis
    pub critique: String,
    /// The Auditor's verdict on this round
    pub verdict: Verdict,
}

impl RoundRecord {
    pub fn new(
        round: usize,
        draft: impl Into<String>,
        critique: impl Into<String>,
        verdict: Verdict,
    ) -> Self {
        Self {
            round,
            draft: draft.into(),
            critique: critique.into(),
            verdict,
        }
    }
}

/// How the final answer was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The Auditor confirmed the draft in the given round
    Verified { round: usize },
    /// All rounds were rejected; the answer is a best-effort synthesis
    Synthesis,
}

impl Resolution {
    pub fn is_verified(&self) -> bool {
        matches!(self, Resolution::Verified { .. })
    }

    pub fn is_synthesis(&self) -> bool {
        matches!(self, Resolution::Synthesis)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Verified { round } => write!(f, "Verified in round {}", round),
            Resolution::Synthesis => write!(f, "Best-effort synthesis"),
        }
    }
}

/// Complete record of a tribunal run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deliberation {
    /// The original question
    pub query: String,
    /// Every completed round, in order
    pub rounds: Vec<RoundRecord>,
    /// How the final answer was reached
    pub resolution: Resolution,
    /// The final answer presented to the user
    pub answer: String,
}

impl Deliberation {
    pub fn new(
        query: impl Into<String>,
        rounds: Vec<RoundRecord>,
        resolution: Resolution,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            rounds,
            resolution,
            answer: answer.into(),
        }
    }

    /// Number of completed rounds
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The final answer text
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_deliberation() {
        let rounds = vec![RoundRecord::new(
            1,
            "2",
            "No exceptions found.",
            Verdict::Verified {
                answer: "Each player draws 2 cards.".to_string(),
            },
        )];
        let d = Deliberation::new(
            "How many cards does each player draw?",
            rounds,
            Resolution::Verified { round: 1 },
            "Each player draws 2 cards.",
        );

        assert_eq!(d.round_count(), 1);
        assert!(d.resolution.is_verified());
        assert_eq!(d.answer(), "Each player draws 2 cards.");
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(
            Resolution::Verified { round: 2 }.to_string(),
            "Verified in round 2"
        );
        assert_eq!(Resolution::Synthesis.to_string(), "Best-effort synthesis");
    }
}
