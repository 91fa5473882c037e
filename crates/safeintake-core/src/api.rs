// SPDX-License-Identifier: Apache-2.0

//! Authenticated HTTPS client for the remote data API.
//!
//! Every request carries a bearer token, TLS is mandatory outside loopback
//! testing, redirects may never downgrade to plain HTTP, and the response body
//! is capped while it is read rather than after.

use std::time::Duration;

use reqwest::header::{ACCEPT, LOCATION};
use reqwest::redirect::Policy;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::Result;
use crate::config::ApiConfig;
use crate::error::IntakeError;
use crate::utils::excerpt;
use crate::validate::validate_api_url;

/// Maximum number of redirects followed.
const MAX_REDIRECTS: usize = 5;

/// Bytes read from an error response for the message excerpt.
const ERROR_EXCERPT_BYTES: usize = 4096;

/// Characters kept in an error message excerpt.
const ERROR_EXCERPT_CHARS: usize = 200;

/// Data returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct FetchedData {
    /// Response body as UTF-8 text.
    pub body: String,
    /// Size of the body in bytes.
    pub bytes: usize,
    /// `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
}

/// Client for the configured API endpoint.
///
/// Holds the HTTP client and token for the lifetime of one run.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    url: Url,
    token: SecretString,
    max_response_bytes: usize,
}

impl ApiClient {
    /// Creates a client for `config.url` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL fails validation or the HTTP client cannot
    /// be built.
    pub fn new(config: &ApiConfig, token: SecretString) -> Result<Self> {
        let url = validate_api_url(&config.url, config.allow_loopback_http)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .https_only(url.scheme() == "https")
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .redirect(redirect_policy())
            .build()?;

        Ok(Self {
            http,
            url,
            token,
            max_response_bytes: config.max_response_bytes,
        })
    }

    /// Endpoint this client fetches from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches the data with an authenticated `GET`.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` for HTTP 401/403
    /// - `Api` for any other non-success status, refused redirects or a
    ///   non-UTF-8 body
    /// - `ResponseTooLarge` when the body exceeds `max_response_bytes`
    /// - `Network` for transport failures and timeouts
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<FetchedData> {
        let response = self
            .http
            .get(self.url.clone())
            .bearer_auth(self.token.expose_secret())
            .header(ACCEPT, "application/json, text/plain")
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "API responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = status.as_u16(), "API rejected credentials");
            return Err(IntakeError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if status.is_redirection() {
            let message = match response.headers().get(LOCATION) {
                Some(_) => "redirect to a non-HTTPS location was refused",
                None => "redirect without a location was not followed",
            };
            return Err(IntakeError::Api {
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {message}", status.as_u16()),
            });
        }

        if !status.is_success() {
            let message = error_excerpt(response).await;
            return Err(IntakeError::Api {
                status: Some(status.as_u16()),
                message: format!("HTTP {}: {message}", status.as_u16()),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let raw = read_capped(response, self.max_response_bytes).await?;
        let bytes = raw.len();
        let body = String::from_utf8(raw).map_err(|_| IntakeError::Api {
            status: Some(status.as_u16()),
            message: "response body is not valid UTF-8".to_string(),
        })?;

        debug!(bytes, "Fetched API data");
        Ok(FetchedData {
            body,
            bytes,
            content_type,
        })
    }
}

/// Follows at most [`MAX_REDIRECTS`] redirects and never to a non-HTTPS target.
fn redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            attempt.error("too many redirects")
        } else if attempt.url().scheme() == "https" {
            attempt.follow()
        } else {
            attempt.stop()
        }
    })
}

/// Reads the body, failing as soon as it grows past `limit` bytes.
async fn read_capped(mut response: Response, limit: usize) -> Result<Vec<u8>> {
    if let Some(declared) = response.content_length()
        && declared > u64::try_from(limit).unwrap_or(u64::MAX)
    {
        warn!(declared, limit, "Declared response size exceeds cap");
        return Err(IntakeError::ResponseTooLarge { limit });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            warn!(limit, "Response body exceeded cap while streaming");
            return Err(IntakeError::ResponseTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Reads the start of an error body as a short printable excerpt.
async fn error_excerpt(mut response: Response) -> String {
    let mut body = Vec::new();
    while body.len() < ERROR_EXCERPT_BYTES {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            _ => break,
        }
    }
    body.truncate(ERROR_EXCERPT_BYTES);
    excerpt(&String::from_utf8_lossy(&body), ERROR_EXCERPT_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> SecretString {
        SecretString::from("sk-test-0123456789")
    }

    #[test]
    fn test_new_rejects_plain_http() {
        let config = ApiConfig {
            url: "http://insecure-api.com/get-data".to_string(),
            ..ApiConfig::default()
        };
        let err = ApiClient::new(&config, token()).unwrap_err();
        assert!(matches!(err, IntakeError::InsecureUrl { .. }));
    }

    #[test]
    fn test_new_accepts_default_endpoint() {
        let client = ApiClient::new(&ApiConfig::default(), token()).unwrap();
        assert_eq!(client.url().as_str(), "https://insecure-api.com/get-data");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = ApiClient::new(&ApiConfig::default(), token()).unwrap();
        assert!(!format!("{client:?}").contains("sk-test"));
    }
}
