//! Model Gateway port
//!
//! Defines the interface for communicating with the hosted generation API.

use async_trait::async_trait;
use rulemaster_domain::{ModelTier, Rulebook};
use thiserror::Error;

/// Fixed text returned when the remote response contains no usable text.
///
/// The gateway substitutes this instead of failing, so an empty candidate
/// list is not a transport error.
pub const EMPTY_RESPONSE_FALLBACK: &str = "I'm sorry, I couldn't generate a response.";

/// Errors that can occur during gateway operations
///
/// Every variant is terminal for the query: the loop never retries the
/// transport.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the hosted generation API
///
/// This port defines how the application layer issues a single opaque
/// generation call. Implementations (adapters) live in the infrastructure
/// layer. The tier is selected per call by the consensus loop; the rulebook,
/// when present, is passed verbatim with every call.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate text for a prompt at the given quality tier
    async fn generate(
        &self,
        prompt: &str,
        tier: ModelTier,
        rulebook: Option<&Rulebook>,
    ) -> Result<String, GatewayError>;
}
