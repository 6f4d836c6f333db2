//! Verdict parsing for the Auditor's reply.
//!
//! The Auditor is instructed to answer with a literal `VERIFIED:` or
//! `REJECTED:` prefix. Parsing is a case-sensitive prefix match anchored
//! at the start of the text.

use serde::{Deserialize, Serialize};

/// Literal prefix the Auditor uses to confirm the draft
pub const VERIFIED_PREFIX: &str = "VERIFIED:";

/// Literal prefix the Auditor uses to reject the draft
pub const REJECTED_PREFIX: &str = "REJECTED:";

/// Outcome of an audit, parsed from the Auditor's raw reply
///
/// A reply matching neither prefix is treated as a rejection with the raw
/// text as feedback: the Auditor failed to follow the contract, so the
/// conservative reading is that the draft was not confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Draft confirmed; the text after the prefix is the final answer
    Verified { answer: String },
    /// Draft rejected; `reason` is the first line (for display), `feedback`
    /// the full text carried into the next round
    Rejected { reason: String, feedback: String },
}

impl Verdict {
    /// Parse the Auditor's raw reply.
    ///
    /// Prefix matching is case-sensitive and anchored: `"verified:"` or a
    /// reply with leading whitespace before the marker is malformed and
    /// falls through to the rejection path.
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(VERIFIED_PREFIX) {
            return Verdict::Verified {
                answer: rest.trim().to_string(),
            };
        }

        let feedback = raw
            .strip_prefix(REJECTED_PREFIX)
            .unwrap_or(raw)
            .trim()
            .to_string();
        let reason = feedback.lines().next().unwrap_or("").trim().to_string();

        Verdict::Rejected { reason, feedback }
    }

    /// Check if the draft was confirmed
    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified { .. })
    }

    /// Check if the draft was rejected
    pub fn is_rejected(&self) -> bool {
        matches!(self, Verdict::Rejected { .. })
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Verified { .. } => write!(f, "Verified"),
            Verdict::Rejected { reason, .. } => write!(f, "Rejected: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verified_trims_answer() {
        let verdict = Verdict::parse("VERIFIED:  Each player draws 2 cards.  ");
        assert_eq!(
            verdict,
            Verdict::Verified {
                answer: "Each player draws 2 cards.".to_string()
            }
        );
    }

    #[test]
    fn test_rejected_reason_is_first_line() {
        let verdict = Verdict::parse("REJECTED: Missing the mulligan rule.\nAlso cite page 4.");
        match verdict {
            Verdict::Rejected { reason, feedback } => {
                assert_eq!(reason, "Missing the mulligan rule.");
                assert!(feedback.contains("Also cite page 4."));
            }
            _ => panic!("Expected Rejected"),
        }
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let verdict = Verdict::parse("verified: looks fine");
        assert!(verdict.is_rejected());
    }

    #[test]
    fn test_prefix_must_be_anchored() {
        let verdict = Verdict::parse("  VERIFIED: looks fine");
        assert!(verdict.is_rejected());
    }

    #[test]
    fn test_malformed_reply_becomes_rejection_with_raw_feedback() {
        let raw = "I am not sure this is right.";
        let verdict = Verdict::parse(raw);
        match verdict {
            Verdict::Rejected { reason, feedback } => {
                assert_eq!(feedback, raw);
                assert_eq!(reason, raw);
            }
            _ => panic!("Expected Rejected"),
        }
    }

    #[test]
    fn test_verified_wins_over_embedded_rejected() {
        // Only the leading marker counts
        let verdict = Verdict::parse("VERIFIED: The REJECTED card is discarded.");
        assert!(verdict.is_verified());
    }
}
