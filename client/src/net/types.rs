//! Wire DTOs for the chat endpoint.
//!
//! DESIGN
//! ======
//! The backend payload is loosely shaped: ids arrive as numbers or strings,
//! prices as formatted strings or bare numbers, and any field may be missing
//! or of the wrong type. Only a body that is not JSON at all is an error;
//! every other oddity degrades to an empty value here, so rendering code only
//! ever sees plain strings and vectors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::ChatError;

/// Request body sent to the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's free-text query.
    pub message: String,
}

/// Parsed reply from the chat endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Natural-language answer; empty when the backend sent none.
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub response: String,
    /// Matched products in backend order.
    #[serde(default, deserialize_with = "deserialize_products")]
    pub products: Vec<Product>,
}

/// One matched product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, normalized to a string (`1` and `"1"` are equal).
    /// Empty when the backend sent no usable id.
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub name: String,
    /// Display price, e.g. `"$25"`.
    #[serde(default, deserialize_with = "deserialize_display_text")]
    pub price: String,
    /// Image URL supplied by the backend, if any.
    #[serde(default, deserialize_with = "deserialize_optional_url")]
    pub url: Option<String>,
}

/// Decode a raw response body into a [`ChatResult`].
///
/// A JSON body of any shape decodes; missing or mistyped fields come back
/// empty, and a body that is not an object yields an empty result.
///
/// # Errors
///
/// Returns [`ChatError::Decode`] if the body is not JSON.
pub fn decode_chat_result(body: &str) -> Result<ChatResult, ChatError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    if !value.is_object() {
        return Ok(ChatResult::default());
    }
    serde_json::from_value(value).map_err(|e| ChatError::Decode(e.to_string()))
}

/// Strings pass through, numbers are formatted, anything else is empty.
fn deserialize_display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Arrays keep their object entries in order; any other value is empty.
fn deserialize_products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn deserialize_optional_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(url) if !url.trim().is_empty() => Some(url),
        _ => None,
    })
}
