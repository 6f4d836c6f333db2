//! Application configuration

use serde::{Deserialize, Serialize};

/// Default number of draft-audit rounds before synthesis
pub const DEFAULT_MAX_ROUNDS: usize = 3;

/// Tunable parameters for the consensus loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsensusParams {
    /// Maximum number of draft-audit rounds before giving up and
    /// synthesizing a best-effort answer
    pub max_rounds: usize,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl ConsensusParams {
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_rounds() {
        assert_eq!(ConsensusParams::default().max_rounds, 3);
    }

    #[test]
    fn test_with_max_rounds() {
        let params = ConsensusParams::default().with_max_rounds(1);
        assert_eq!(params.max_rounds, 1);
    }
}
