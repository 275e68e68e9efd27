//! Backend probe
//!
//! A probe performs the panel's single outbound read and reduces the reply to
//! the text the panel should display. The HTTP implementation mirrors how
//! browsers treat a `fetch` + `json()` chain: the status code is never
//! inspected, only whether the body decodes as JSON.

use crate::error::{ProbeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Default probe endpoint of the local backend
pub const DEFAULT_PROBE_URL: &str = "http://127.0.0.1:8000/api/test/";

/// A one-shot read against the backend.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Perform the read and return the text to display.
    async fn fetch(&self) -> std::result::Result<String, ProbeError>;
}

/// Probe that issues a plain `GET` against the configured URL
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    url: String,
}

impl HttpProbe {
    /// Build a probe for `url`. No request is made until [`Probe::fetch`].
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn fetch(&self) -> std::result::Result<String, ProbeError> {
        debug!("Probing {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "Probe response received");

        decode_body(&body)
    }
}

/// Decode a raw response body into display text.
///
/// Decoding is lenient the way a browser's `Response.json()` is: invalid
/// UTF-8 sequences become U+FFFD and a leading byte-order mark is skipped.
pub fn decode_body(body: &[u8]) -> std::result::Result<String, ProbeError> {
    let text = String::from_utf8_lossy(body);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let payload: Value = serde_json::from_str(text)?;
    message_text(&payload)
}

/// Extract the display text from a decoded probe payload.
///
/// A missing `message` yields an empty string rather than an error. Values
/// render the way a DOM text child does: numbers in their shortest form
/// (`1.0` shows as `1`), arrays flattened and concatenated, and `null`,
/// booleans and objects as nothing. A `null` payload has no fields to read at
/// all and counts as a failure.
pub fn message_text(payload: &Value) -> std::result::Result<String, ProbeError> {
    if payload.is_null() {
        return Err(ProbeError::ProbeFailed("null payload".to_string()));
    }

    let mut text = String::new();
    if let Some(message) = payload.get("message") {
        render_child(message, &mut text);
    }
    Ok(text)
}

fn render_child(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Number(n) => out.push_str(&render_number(n)),
        Value::Array(items) => {
            for item in items {
                render_child(item, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Object(_) => {}
    }
}

fn render_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{:.0}", f);
            }
            return f.to_string();
        }
    }
    n.to_string()
}
