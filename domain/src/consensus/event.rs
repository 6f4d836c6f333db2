//! Structured progress events emitted by the consensus loop

use serde::{Deserialize, Serialize};

/// The three tribunal roles plus the loop itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentRole {
    Scholar,
    Sceptic,
    Auditor,
    System,
}

impl AgentRole {
    /// Display label used as the event source
    pub fn label(&self) -> &'static str {
        match self {
            AgentRole::Scholar => "Agent A (Scholar)",
            AgentRole::Sceptic => "Agent B (Sceptic)",
            AgentRole::Auditor => "Agent C (Auditor)",
            AgentRole::System => "System",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One line of the user-facing agent log
///
/// Append-only: the loop is the sole producer within one query's lifetime,
/// and ordering is the only guarantee a sink gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Who is acting (agent label or "System")
    pub source: String,
    /// What they are doing
    pub text: String,
}

impl LogEvent {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Convenience constructor from an agent role
    pub fn from_role(role: AgentRole, text: impl Into<String>) -> Self {
        Self::new(role.label(), text)
    }
}

impl std::fmt::Display for LogEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.text)
    }
}
