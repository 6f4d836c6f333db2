//! Gemini gateway implementation
//!
//! Implements the [`ModelGateway`] port over the hosted
//! `generateContent` HTTPS endpoint. The transport is never retried here:
//! any failure maps to a [`GatewayError`] and propagates to the caller.

use crate::config::FileConfig;
use crate::gemini::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use rulemaster_application::{GatewayError, ModelGateway, EMPTY_RESPONSE_FALLBACK};
use rulemaster_domain::{ModelTier, Rulebook};
use tracing::{debug, warn};

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model id for the pro tier
pub const DEFAULT_PRO_MODEL: &str = "gemini-3-pro-preview";

/// Default model id for the flash tier
pub const DEFAULT_FLASH_MODEL: &str = "gemini-3-flash-preview";

/// Gateway to the Gemini `generateContent` API
pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    pro_model: String,
    flash_model: String,
}

impl GeminiGateway {
    /// Create a gateway with default endpoint and model ids
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            pro_model: DEFAULT_PRO_MODEL.to_string(),
            flash_model: DEFAULT_FLASH_MODEL.to_string(),
        }
    }

    /// Create a gateway from file configuration, resolving the API key from
    /// the configured environment variable
    pub fn from_config(config: &FileConfig) -> Result<Self, GatewayError> {
        let api_key = std::env::var(&config.api.key_env).map_err(|_| {
            GatewayError::AuthFailed(format!(
                "API key environment variable {} is not set",
                config.api.key_env
            ))
        })?;

        Ok(Self::new(api_key)
            .with_endpoint(&config.api.endpoint)
            .with_models(&config.models.pro, &config.models.flash))
    }

    /// Override the API endpoint (used by tests and proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the per-tier model ids
    pub fn with_models(mut self, pro: impl Into<String>, flash: impl Into<String>) -> Self {
        self.pro_model = pro.into();
        self.flash_model = flash.into();
        self
    }

    /// The concrete model id for a tier
    pub fn model_id(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Pro => &self.pro_model,
            ModelTier::Flash => &self.flash_model,
        }
    }

    fn request_url(&self, tier: ModelTier) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint,
            self.model_id(tier)
        )
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

fn map_status_error(status: reqwest::StatusCode, body: &str) -> GatewayError {
    let detail = format!("HTTP {}: {}", status.as_u16(), body.chars().take(200).collect::<String>());
    match status.as_u16() {
        401 | 403 => GatewayError::AuthFailed(detail),
        429 => GatewayError::QuotaExceeded(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(
        &self,
        prompt: &str,
        tier: ModelTier,
        rulebook: Option<&Rulebook>,
    ) -> Result<String, GatewayError> {
        let url = self.request_url(tier);
        let request = GenerateContentRequest::new(prompt, rulebook);

        debug!(%tier, model = self.model_id(tier), prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "generateContent request failed");
            return Err(map_status_error(status, &body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Malformed response body: {}", e)))?;

        // An empty candidate list is not a transport failure: substitute the
        // fixed fallback text instead.
        Ok(body
            .text()
            .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_per_tier() {
        let gateway = GeminiGateway::new("key");
        assert_eq!(gateway.model_id(ModelTier::Pro), DEFAULT_PRO_MODEL);
        assert_eq!(gateway.model_id(ModelTier::Flash), DEFAULT_FLASH_MODEL);
    }

    #[test]
    fn test_request_url_embeds_model() {
        let gateway = GeminiGateway::new("key")
            .with_endpoint("http://localhost:8080")
            .with_models("pro-model", "flash-model");
        assert_eq!(
            gateway.request_url(ModelTier::Flash),
            "http://localhost:8080/v1beta/models/flash-model:generateContent"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        use reqwest::StatusCode;
        assert!(matches!(
            map_status_error(StatusCode::FORBIDDEN, "denied"),
            GatewayError::AuthFailed(_)
        ));
        assert!(matches!(
            map_status_error(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::QuotaExceeded(_)
        ));
        assert!(matches!(
            map_status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GatewayError::RequestFailed(_)
        ));
    }
}
