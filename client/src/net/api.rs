//! HTTP call to the external chat endpoint.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Server-side (SSR): a stub returning [`ChatError::Unavailable`], since
//! submissions only ever originate from a browser event handler.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are all returned as `ChatError`;
//! nothing here panics, so a dead backend can never take down hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ChatError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatRequest;
use super::types::ChatResult;
#[cfg(feature = "hydrate")]
use super::types::decode_chat_result;

/// Default chat endpoint served by the local backend.
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:8000/chat";

/// Chat endpoint baked in at build time.
///
/// Set `SHOPSEARCH_CHAT_ENDPOINT` when compiling to point the client elsewhere.
pub fn chat_endpoint() -> &'static str {
    option_env!("SHOPSEARCH_CHAT_ENDPOINT").unwrap_or(DEFAULT_CHAT_ENDPOINT)
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_body(message: &str) -> ChatRequest {
    ChatRequest { message: message.to_owned() }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ChatError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ChatError::Status(status)) }
}

/// Send `message` to the chat endpoint and decode the reply.
///
/// # Errors
///
/// Returns [`ChatError::Transport`] if the request cannot be sent or the body
/// cannot be read, [`ChatError::Status`] on a non-2xx reply, and
/// [`ChatError::Decode`] if the body is not a valid chat result.
pub async fn post_chat(message: &str) -> Result<ChatResult, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = chat_request_body(message);
        let resp = gloo_net::http::Request::post(chat_endpoint())
            .json(&payload)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| ChatError::Transport(e.to_string()))?;
        decode_chat_result(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(ChatError::Unavailable)
    }
}
