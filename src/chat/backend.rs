//! Completion Service Backend
//!
//! The chat panel talks to an external text-completion endpoint through
//! the [`CompletionBackend`] trait so tests can substitute a mock and a
//! different provider only needs a new implementation. The HTTP
//! implementation posts an OpenAI-style chat body and extracts the
//! first choice's message content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::config::ChatConfig;
use crate::error::{Error, Result};
use crate::models::{ChatMessage, ChatRole};

/// One role-tagged message on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl WireMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        let role = match msg.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: msg.text.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Boundary to the external completion service
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the ordered message list and return the reply text
    async fn complete(&self, messages: &[WireMessage]) -> Result<String>;
}

/// Production backend: HTTP POST to a configurable endpoint
pub struct HttpCompletionBackend {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    /// Bearer token; wiped from memory on drop
    api_key: Option<Zeroizing<String>>,
}

impl HttpCompletionBackend {
    /// Build a backend from the chat configuration
    ///
    /// The API key is read from the environment variable named by
    /// `api_key_env`. A missing key does not fail construction; every
    /// request then reports [`Error::ChatBackendMissing`], which the
    /// panel surfaces as an offline notice.
    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(Zeroizing::new);

        if api_key.is_none() {
            warn!(
                "no API key in ${}; the study assistant will be offline",
                config.api_key_env
            );
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Whether a key is present and requests can be attempted
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionBackend {
    async fn complete(&self, messages: &[WireMessage]) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(Error::ChatBackendMissing);
        };

        debug!(
            "posting {} messages to completion endpoint {}",
            messages.len(),
            self.endpoint
        );

        let request = CompletionRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key.as_str())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: CompletionResponse = response.json().await?;
        let reply = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        let reply = reply.trim();
        if reply.is_empty() {
            return Err(Error::EmptyCompletion);
        }
        Ok(reply.to_string())
    }
}
