//! Blocking JSON transport for the CraftShop backend.
//!
//! Wraps a lazily-built `reqwest` blocking client and applies the backend's
//! response conventions: a failed request carries its message in an `error`
//! JSON field (or a plain-text body), and a 2xx response must decode as JSON
//! to count as success.

use std::cell::RefCell;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CraftshopError, Result};

/// Blocking HTTP transport bound to a single backend base URL.
///
/// The underlying `reqwest` client is created on first use and reused for
/// all subsequent requests.
pub struct HttpClient {
    base_url: String,
    timeout: Duration,
    client: RefCell<Option<Client>>,
}

impl HttpClient {
    /// Create a transport for the given base URL and request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: RefCell::new(None),
        }
    }

    /// The backend base URL this transport talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Client {
        let mut slot = self.client.borrow_mut();
        if slot.is_none() {
            *slot = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        slot.as_ref().expect("client just initialized").clone()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a resource and decode the JSON response into `T`.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(Method::GET, path, None)
    }

    /// POST a JSON body and decode the JSON response into `T`.
    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::POST, path, Some(body))
    }

    /// PUT a JSON body and decode the JSON response into `T`.
    pub fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(Method::PUT, path, Some(body))
    }

    /// DELETE a resource. The backend may answer with an empty body, which
    /// decodes as `Value::Null`.
    pub fn delete(&self, path: &str) -> Result<serde_json::Value> {
        self.request::<(), serde_json::Value>(Method::DELETE, path, None)
    }

    fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.url(path);
        let client = self.client();

        let mut req = client.request(method, &url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let text = resp.text()?;

        let value = decode_response(status, &text)?;
        Ok(serde_json::from_value(value)?)
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

/// Apply the backend's response contract to a `(status, body)` pair.
///
/// * non-2xx: the body's `error` JSON field is surfaced when present,
///   otherwise the raw body text (or `HTTP <status>` when the body is empty).
/// * 2xx with an empty body: `Value::Null`.
/// * 2xx with a non-JSON body: [`CraftshopError::NonJson`], carrying the body
///   to help debugging.
pub fn decode_response(status: u16, body: &str) -> Result<serde_json::Value> {
    if !(200..300).contains(&status) {
        return Err(CraftshopError::Api {
            status,
            message: error_message(status, body),
        });
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(serde_json::Value::Null);
    }

    serde_json::from_str(trimmed).map_err(|_| CraftshopError::NonJson {
        body: body.to_string(),
    })
}

/// Extract the most useful error message from a failed response body.
fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP {}", status);
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
            return msg.to_string();
        }
        return value.to_string();
    }
    trimmed.to_string()
}
