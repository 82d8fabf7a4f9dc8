//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `StoryApi` port. It owns the one
//! `reqwest::Client` for the whole run; dropping the adapter at the end of
//! the suite releases the connection pool.

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Url};
use saga_application::{ApiClientError, StoryApi};
use saga_domain::{ApiCall, ApiResponse, HttpMethod};
use tracing::debug;

use crate::config::SuiteConfig;

const USER_AGENT: &str = "Saga/0.1.0";

/// `StoryApi` implementation backed by reqwest.
pub struct ReqwestStoryApi {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestStoryApi {
    /// Creates the transport for the configured service.
    ///
    /// The base URL is normalized to end with a slash so relative paths
    /// append instead of replacing the last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new(config: &SuiteConfig) -> Result<Self, ApiClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ApiClientError::Other(e.to_string()))?;

        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    /// Resolves a relative call path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiClientError::InvalidUrl(format!("{e}: {path}")))
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to port-level `ApiClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> ApiClientError {
        if error.is_timeout() {
            return ApiClientError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return ApiClientError::ConnectionFailed(error.to_string());
        }
        ApiClientError::Other(error.to_string())
    }
}

impl StoryApi for ReqwestStoryApi {
    fn send<'a>(
        &'a self,
        call: &'a ApiCall,
        token: Option<&'a str>,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApiClientError>> + Send + 'a>> {
        #[allow(clippy::cast_possible_truncation)]
        let timeout_ms = self.timeout.as_millis() as u64;

        Box::pin(async move {
            let url = self.endpoint(&call.path)?;
            debug!(method = %call.method, %url, "sending request");

            let start = Instant::now();
            let mut builder = self
                .client
                .request(Self::to_reqwest_method(call.method), url)
                .timeout(self.timeout);

            if call.authenticated {
                if let Some(token) = token {
                    builder = builder.bearer_auth(token);
                }
            }

            if let Some(body) = &call.body {
                builder = builder.json(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiClientError::Other(format!("failed to read body: {e}")))?;

            let response = ApiResponse::new(status, body, start.elapsed());
            debug!(status, elapsed = %response.duration_display(), "response received");
            Ok(response)
        })
    }
}
