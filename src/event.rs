//! The host's invocation event.
//!
//! Netlify and raw Lambda function URLs hand us a record whose `body` field
//! holds the request text. When the gateway considers the payload binary it
//! sets `isBase64Encoded` and base64-encodes the body, so we have to undo
//! that before we can parse anything.

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvocationEvent {
    body: String,
    is_base64_encoded: bool,
}

impl InvocationEvent {
    /// Pick the fields we care about out of a raw event. Everything else in
    /// the record is ignored.
    pub fn from_value(event: &Value) -> Result<Self> {
        let body = event
            .get("body")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("invocation event has no body"))?;

        let is_base64_encoded = event
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Ok(InvocationEvent {
            body: body.to_owned(),
            is_base64_encoded,
        })
    }

    pub fn decoded_body(&self) -> Result<String> {
        if !self.is_base64_encoded {
            return Ok(self.body.clone());
        }

        let bytes = STANDARD
            .decode(self.body.trim())
            .context("invalid base64 in request body")?;
        body_text(&bytes)
    }
}

/// Interpret raw request bytes as the body text.
pub fn body_text(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).context("request body is not valid UTF-8")?;
    Ok(text.to_owned())
}
