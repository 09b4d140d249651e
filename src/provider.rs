//! Generation client for the plan provider.
//!
//! Wraps exactly one OpenAI-style chat completion call per submission plus a
//! lightweight connectivity probe. No retries at any layer: the outcome of the
//! single attempt is surfaced to the workflow as-is. The network round trip
//! sits behind [`ChatTransport`] so tests can substitute recording stubs.
use crate::prompt::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Instant;
use thiserror::Error;

/// Environment variable holding the provider credential.
pub const PROVIDER_API_KEY_ENV: &str = "PROVIDER_API_KEY";

/// Default base URL for the OpenAI-style API.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Chat completions endpoint under the base URL.
const CHAT_COMPLETIONS_ENDPOINT: &str = "chat/completions";
/// Model used for generation and probe requests.
const MODEL: &str = "gpt-3.5-turbo";
/// Output cap for plan generation.
const PLAN_MAX_TOKENS: u32 = 2000;
/// Sampling temperature for plan generation.
const PLAN_TEMPERATURE: f32 = 0.7;
/// Output cap for the connectivity probe.
const PROBE_MAX_TOKENS: u32 = 5;
/// Longest error-body snippet carried into a failure message.
const ERROR_BODY_SNIPPET_BYTES: usize = 300;

/// Generation failure surfaced to the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No credential in process configuration; raised before any network I/O.
    #[error("provider API key not found (set {})", PROVIDER_API_KEY_ENV)]
    MissingCredential,
    /// The single provider attempt failed; the reason passes through verbatim.
    #[error("{0}")]
    Provider(String),
}

/// Provider connection settings resolved once at process start.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Credential for the provider; `None` when unset or blank.
    pub api_key: Option<String>,
    /// Base URL for the OpenAI-style API.
    pub base_url: String,
}

impl ProviderConfig {
    /// Resolve the credential from the process environment. Absence is not an
    /// error here; generation-dependent operations fail later with
    /// [`GenerationError::MissingCredential`].
    pub fn from_env() -> Self {
        let api_key = env::var(PROVIDER_API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// OpenAI-style chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Single message in a chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    fn system(content: &str) -> Self {
        Self {
            role: "system",
            content: content.to_string(),
        }
    }

    fn user(content: &str) -> Self {
        Self {
            role: "user",
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// One chat-completion round trip, returning the assistant message text.
pub trait ChatTransport {
    fn send(&self, api_key: &str, request: &ChatRequest) -> Result<String, GenerationError>;
}

/// Blocking HTTP transport for the chat completions endpoint.
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport for `base_url`. HTTP error statuses come back as
    /// responses rather than transport errors so provider error bodies stay
    /// readable.
    pub fn new(base_url: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.new_agent(),
            endpoint: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                CHAT_COMPLETIONS_ENDPOINT
            ),
        }
    }
}

impl ChatTransport for HttpTransport {
    fn send(&self, api_key: &str, request: &ChatRequest) -> Result<String, GenerationError> {
        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .send_json(request)
            .map_err(|err| GenerationError::Provider(err.to_string()))?;
        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| GenerationError::Provider(format!("read provider response: {err}")))?;
        if !status.is_success() {
            return Err(GenerationError::Provider(provider_reason(
                status.as_u16(),
                &body,
            )));
        }
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|err| GenerationError::Provider(format!("parse provider response: {err}")))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::Provider("provider response contained no text".to_string()))
    }
}

/// Turn an HTTP error status and body into the reason surfaced to the user.
/// Prefers the provider's own error message; falls back to a body snippet.
fn provider_reason(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => format!("provider request failed (status {status}): {}", parsed.error.message),
        Err(_) => format!(
            "provider request failed (status {status}): {}",
            snippet(body.trim(), ERROR_BODY_SNIPPET_BYTES)
        ),
    }
}

/// Truncate `text` on a char boundary for inclusion in an error message.
fn snippet(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...(truncated)", &text[..end])
}

/// Result of the connectivity probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeOutcome {
    /// True when the credential and endpoint answered the probe.
    pub ok: bool,
    /// Human-readable status line.
    pub status: String,
}

/// Client wrapping the provider behind the transport seam.
pub struct GenerationClient {
    config: ProviderConfig,
    transport: Box<dyn ChatTransport>,
}

impl GenerationClient {
    /// Build the production client with the blocking HTTP transport.
    pub fn new(config: ProviderConfig) -> Self {
        let transport = Box::new(HttpTransport::new(&config.base_url));
        Self { config, transport }
    }

    /// Build a client over a custom transport.
    #[cfg(test)]
    pub fn with_transport(config: ProviderConfig, transport: Box<dyn ChatTransport>) -> Self {
        Self { config, transport }
    }

    /// True when a credential was present at startup.
    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Issue the single generation request for a rendered prompt.
    ///
    /// Fails with [`GenerationError::MissingCredential`] before any network
    /// I/O when no credential is configured. One attempt, no retries.
    pub fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.require_key()?;
        let request = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
            max_tokens: PLAN_MAX_TOKENS,
            temperature: Some(PLAN_TEMPERATURE),
        };
        let start = Instant::now();
        let plan = self.transport.send(api_key, &request)?;
        let elapsed_ms = start.elapsed().as_millis();
        tracing::info!(
            elapsed_ms,
            prompt_bytes = prompt.len(),
            plan_bytes = plan.len(),
            "plan generation complete"
        );
        Ok(plan)
    }

    /// Confirm the credential and endpoint with a minimal low-cost request.
    /// Same failure taxonomy as [`GenerationClient::generate`].
    pub fn probe(&self) -> ProbeOutcome {
        let outcome = match self.probe_request() {
            Ok(()) => ProbeOutcome {
                ok: true,
                status: "provider connection successful".to_string(),
            },
            Err(err) => ProbeOutcome {
                ok: false,
                status: err.to_string(),
            },
        };
        tracing::debug!(ok = outcome.ok, status = %outcome.status, "provider probe complete");
        outcome
    }

    fn probe_request(&self) -> Result<(), GenerationError> {
        let api_key = self.require_key()?;
        let request = ChatRequest {
            model: MODEL,
            messages: vec![ChatMessage::user("Hello")],
            max_tokens: PROBE_MAX_TOKENS,
            temperature: None,
        };
        self.transport.send(api_key, &request).map(|_| ())
    }

    fn require_key(&self) -> Result<&str, GenerationError> {
        self.config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)
    }
}


#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
