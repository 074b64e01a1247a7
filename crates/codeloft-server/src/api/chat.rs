//! Streaming chat gateway
//!
//! Relays an upstream completion session to the client as Server-Sent
//! Events. Frames are `data: <JSON>\n\n` where the JSON is one of
//! `{"content": ...}`, `{"done": true}`, or `{"error": ...}`; exactly one
//! terminal frame is written per request.
//!
//! The relay task owns the session handle. When the client hangs up, the
//! response stream drops the channel receiver, the next send fails, and the
//! relay cancels the session - the only place cancellation happens. Every
//! other exit path releases the handle by dropping it.

use actix_web::{HttpResponse, Responder, http::header, post, web};
use bytes::Bytes;
use tokio::sync::mpsc;
use tokio_stream::{StreamExt, wrappers::ReceiverStream};

use codeloft_ai::{ChatMode, CompletionSource, StreamEvent};
use codeloft_api::model::ChatParam;

use crate::model::{app_state::AppState, response};

/// Frames buffered towards a slow client before the relay awaits
const FRAME_CHANNEL_CAPACITY: usize = 32;

/// POST /api/claude-stream
#[post("/claude-stream")]
pub async fn stream_chat(
    data: web::Data<AppState>,
    param: web::Json<ChatParam>,
) -> impl Responder {
    let message = param.message.trim().to_string();
    if message.is_empty() {
        return response::bad_request("Message is required");
    }
    let mode = ChatMode::parse(param.mode.as_deref());

    let client = data.ai_client.clone();
    let (tx, rx) = mpsc::channel::<Bytes>(FRAME_CHANNEL_CAPACITY);

    tokio::spawn(async move {
        match client.stream_chat(mode, &message).await {
            Ok(session) => relay_session(session, tx).await,
            Err(e) => {
                tracing::error!("failed to open completion session: {}", e);
                let _ = tx.send(error_frame()).await;
            }
        }
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .insert_header((header::CONNECTION, "keep-alive"))
        .streaming(ReceiverStream::new(rx).map(Ok::<_, actix_web::Error>))
}

/// Pump session events into the client channel.
///
/// Ordering and granularity mirror upstream exactly; no batching. A failed
/// send means the client hung up: the session is cancelled and nothing more
/// is written.
async fn relay_session<S: CompletionSource>(mut session: S, tx: mpsc::Sender<Bytes>) {
    loop {
        match session.next_event().await {
            Some(Ok(StreamEvent::TextDelta { content })) => {
                let frame = data_frame(&serde_json::json!({ "content": content }));
                if tx.send(frame).await.is_err() {
                    tracing::debug!("client disconnected, cancelling completion session");
                    session.cancel();
                    return;
                }
            }
            Some(Ok(StreamEvent::Completed)) | None => {
                let _ = tx.send(data_frame(&serde_json::json!({ "done": true }))).await;
                return;
            }
            Some(Ok(StreamEvent::Failed { message })) => {
                tracing::error!("upstream stream error: {}", message);
                let _ = tx.send(error_frame()).await;
                return;
            }
            Some(Err(e)) => {
                tracing::error!("completion session error: {}", e);
                let _ = tx.send(error_frame()).await;
                return;
            }
        }
    }
}

fn data_frame(value: &serde_json::Value) -> Bytes {
    Bytes::from(format!("data: {}\n\n", value))
}

fn error_frame() -> Bytes {
    data_frame(&serde_json::json!({ "error": "Stream error occurred" }))
}
