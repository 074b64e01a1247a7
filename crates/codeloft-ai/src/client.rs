//! Anthropic streaming client and the owned completion session handle

use std::collections::VecDeque;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};

use crate::error::AiError;
use crate::model::{ChatMode, StreamEvent};
use crate::sse;

/// Default Anthropic API base URL
const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Messages API protocol version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default completion model
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Default completion token ceiling
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Client configuration
#[derive(Clone, Debug)]
pub struct AiConfig {
    /// API credential; a session cannot be opened without it
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    /// Override for tests and proxies
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: ANTHROPIC_BASE_URL.to_string(),
        }
    }
}

/// Source of completion stream events
///
/// The seam between the gateway relay and the upstream session; test doubles
/// implement this to drive the relay without a network.
#[async_trait]
pub trait CompletionSource: Send {
    /// Next event, or `None` once a terminal event has been delivered
    async fn next_event(&mut self) -> Option<Result<StreamEvent, AiError>>;

    /// Cancel the upstream session; no further events will be produced
    fn cancel(self)
    where
        Self: Sized;
}

/// Anthropic Messages API client
pub struct AnthropicClient {
    http: reqwest::Client,
    config: AiConfig,
    /// Full messages API URL (base + /v1/messages), computed once at construction.
    messages_url: String,
}

impl AnthropicClient {
    /// Create a new client with the given configuration
    pub fn new(config: AiConfig) -> Self {
        let messages_url = format!("{}/v1/messages", config.base_url.trim_end_matches('/'));
        Self {
            http: reqwest::Client::new(),
            config,
            messages_url,
        }
    }

    /// Whether a credential is configured
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Open a token-streaming completion session
    ///
    /// The user message is the sole turn; the system prompt comes from the
    /// selected mode. Non-200 upstream responses are reported as
    /// [`AiError::Api`] without constructing a session.
    pub async fn stream_chat(
        &self,
        mode: ChatMode,
        message: &str,
    ) -> Result<CompletionSession, AiError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(AiError::MissingApiKey);
        };

        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "stream": true,
            "system": mode.system_prompt(),
            "messages": [{
                "role": "user",
                "content": message,
            }],
        });

        tracing::debug!(mode = %mode, "anthropic stream POST {}", self.messages_url);

        let response = self
            .http
            .post(&self.messages_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let body_text = response
                .text()
                .await
                .map_err(|e| AiError::Network(e.to_string()))?;
            tracing::warn!(
                "anthropic api error: HTTP {} from {} - {}",
                status,
                self.messages_url,
                body_text
            );
            return Err(AiError::Api {
                status,
                message: api_error_message(&body_text),
            });
        }

        Ok(CompletionSession::new(response.bytes_stream()))
    }
}

/// Extract the error message from an Anthropic error body, falling back to
/// the raw text when the shape is unexpected.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

/// Owned handle over one upstream completion session
///
/// Yields events in upstream order and delivers exactly one terminal event
/// (`Completed` or `Failed`), after which `next_event` returns `None`.
/// Dropping the handle aborts the underlying HTTP stream, so the session is
/// released on every exit path.
pub struct CompletionSession {
    stream: Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>,
    buffer: String,
    pending: VecDeque<StreamEvent>,
    finished: bool,
}

impl CompletionSession {
    fn new(stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static) -> Self {
        Self {
            stream: Box::pin(stream),
            buffer: String::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    fn pop_pending(&mut self) -> Option<StreamEvent> {
        let event = self.pending.pop_front()?;
        if matches!(event, StreamEvent::Completed | StreamEvent::Failed { .. }) {
            self.finished = true;
        }
        Some(event)
    }

    /// Next event from the upstream session
    ///
    /// Bytes are consumed lazily: nothing is polled from upstream between
    /// calls, so a caller that stops calling stops paying for generation.
    pub async fn next_event(&mut self) -> Option<Result<StreamEvent, AiError>> {
        loop {
            if self.finished {
                return None;
            }
            if let Some(event) = self.pop_pending() {
                return Some(Ok(event));
            }

            match self.stream.next().await {
                Some(Ok(chunk)) => {
                    self.buffer.push_str(&String::from_utf8_lossy(&chunk));

                    // Process complete lines
                    while let Some(line_end) = self.buffer.find('\n') {
                        let line: String = self.buffer.drain(..=line_end).collect();
                        match sse::parse_line(&line) {
                            Ok(Some(event)) => self.pending.push_back(event),
                            Ok(None) => {}
                            Err(e) => {
                                self.finished = true;
                                return Some(Err(e));
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(AiError::Network(e.to_string())));
                }
                // Upstream closed without message_stop; still end-of-stream
                None => {
                    self.finished = true;
                    return Some(Ok(StreamEvent::Completed));
                }
            }
        }
    }

    /// Abort the upstream session
    ///
    /// Dropping the handle has the same effect; the named method keeps the
    /// cancellation point visible at the call site.
    pub fn cancel(self) {
        tracing::debug!("completion session cancelled");
        drop(self);
    }
}

#[async_trait]
impl CompletionSource for CompletionSession {
    async fn next_event(&mut self) -> Option<Result<StreamEvent, AiError>> {
        CompletionSession::next_event(self).await
    }

    fn cancel(self) {
        CompletionSession::cancel(self);
    }
}
