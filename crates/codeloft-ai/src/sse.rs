//! Anthropic SSE wire-event parsing
//!
//! Handles the SSE format from the Anthropic Messages API with
//! content_block_delta parsing. The full wire vocabulary is decoded but only
//! text deltas, stream termination, and errors are surfaced; everything else
//! (pings, block boundaries, usage) is dropped.

use serde::Deserialize;

use crate::error::AiError;
use crate::model::StreamEvent;

/// Internal event types from the Anthropic SSE format
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireEvent {
    MessageStart,
    ContentBlockStart,
    ContentBlockDelta { delta: Delta },
    ContentBlockStop,
    MessageDelta,
    MessageStop,
    Ping,
    Error { error: WireError },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Delta {
    TextDelta { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct WireError {
    message: String,
}

/// Parse one SSE line into at most one stream event
///
/// SSE streams may include `event:`, `id:`, `retry:`, and comment lines;
/// those yield `None`, as do wire events with no gateway-visible meaning.
pub fn parse_line(line: &str) -> Result<Option<StreamEvent>, AiError> {
    let trimmed = line.trim();

    // Handle SSE format: "data: {...}"
    let json_str = if let Some(rest) = trimmed.strip_prefix("data: ") {
        rest
    } else if trimmed.starts_with('{') {
        // Raw JSON without SSE prefix
        trimmed
    } else {
        return Ok(None);
    };

    if json_str.is_empty() || json_str == "[DONE]" {
        return Ok(None);
    }

    let event: WireEvent =
        serde_json::from_str(json_str).map_err(|e| AiError::Parse(e.to_string()))?;

    Ok(match event {
        WireEvent::ContentBlockDelta {
            delta: Delta::TextDelta { text },
        } => Some(StreamEvent::TextDelta { content: text }),
        WireEvent::MessageStop => Some(StreamEvent::Completed),
        WireEvent::Error { error } => Some(StreamEvent::Failed {
            message: error.message,
        }),
        _ => None,
    })
}
