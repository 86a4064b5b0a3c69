//! HTTP client plumbing shared by the student endpoints.

use std::time::Duration;

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use roster_core::{ApiResponse, TransportError};

/// Transport settings for [`HttpStudentApi`](crate::HttpStudentApi).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Per-request timeout; `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("roster/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    let message = err.to_string();
    if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Other { message }
    }
}

/// Thin JSON-over-HTTP client.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub(crate) fn new(config: &HttpConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(transport_error)?;
        Ok(Self { client })
    }

    /// Send a request, decoding a 2xx body as `R`.
    pub(crate) async fn send<B, R>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<R>, TransportError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%method, url, "student API request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(transport_error)?;

        Self::handle_response(response).await
    }

    /// Send a request whose reply carries no body.
    pub(crate) async fn send_no_content(
        &self,
        method: Method,
        url: &str,
    ) -> Result<ApiResponse<()>, TransportError> {
        debug!(%method, url, "student API request (no content)");

        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            Ok(ApiResponse::success(status.as_u16(), None))
        } else {
            let text = Self::error_text(response).await;
            Ok(ApiResponse::failure(status.as_u16(), text))
        }
    }

    async fn handle_response<R: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<R>, TransportError> {
        let status = response.status();
        trace!(status = %status, "student API response");

        if !status.is_success() {
            let text = Self::error_text(response).await;
            return Ok(ApiResponse::failure(status.as_u16(), text));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        let body = decode_body(&bytes)?;
        Ok(ApiResponse::success(status.as_u16(), body))
    }

    /// Read the body of an error reply as text, if there is any.
    async fn error_text(response: reqwest::Response) -> Option<String> {
        let text = response.text().await.ok()?;
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Decode a 2xx body. A zero-length body or a JSON `null` is absent.
fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Result<Option<R>, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<R>>(bytes).map_err(|e| TransportError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let config = HttpConfig {
            timeout: Some(Duration::from_secs(3)),
            ..HttpConfig::default()
        };
        assert!(HttpClient::new(&config).is_ok());
        assert!(HttpConfig::default().user_agent.starts_with("roster/"));
    }

    #[test]
    fn empty_and_null_bodies_are_absent() {
        assert_eq!(decode_body::<Vec<u32>>(b"").unwrap(), None);
        assert_eq!(decode_body::<Vec<u32>>(b"  \n").unwrap(), None);
        assert_eq!(decode_body::<Vec<u32>>(b"null").unwrap(), None);
        assert_eq!(decode_body::<Vec<u32>>(b"[1,2]").unwrap(), Some(vec![1, 2]));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_body::<Vec<u32>>(b"{not json").unwrap_err();
        assert!(matches!(err, TransportError::Decode { .. }));
    }
}
