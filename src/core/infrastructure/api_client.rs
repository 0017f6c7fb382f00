//! Internal HTTP session bound to one Prism Element cluster.

use crate::core::domain::{
    error::{PrismError, PrismResult, ValidationError},
    model::{
        client_config::{ClientConfig, RateLimitConfig},
        prism_connection::PrismConnection,
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::debug;

/// Internal HTTP client that authenticates every call with basic auth.
///
/// The session is stateless on the client side: credentials travel with each
/// request, so a bad password only shows up as a `401` on the first call.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: PrismConnection,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`. No request is sent.
    ///
    /// # Errors
    /// Returns `PrismError::Validation` for a zero rate limit and
    /// `PrismError::Connection` if the HTTP client cannot be built.
    pub fn new(connection: PrismConnection, config: &ClientConfig) -> PrismResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accepts_invalid_certs())
            .default_headers(default_headers)
            .build()
            .map_err(|e| PrismError::Connection(e.to_string()))?;

        let rate_limiter = config
            .rate_limit
            .map(build_rate_limiter)
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            http_client,
            connection,
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &PrismConnection {
        &self.connection
    }

    /// Performs an authenticated GET request.
    ///
    /// # Errors
    /// Returns `PrismError` if the request fails, is rejected,
    /// or the response cannot be parsed.
    pub async fn get<T>(&self, path: &str) -> PrismResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::GET, path, None::<&()>).await
    }

    /// Performs an authenticated POST request with a JSON body.
    ///
    /// # Errors
    /// Returns `PrismError` if the request fails, is rejected,
    /// or the response cannot be parsed.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> PrismResult<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        self.execute_request(Method::POST, path, Some(body)).await
    }

    async fn execute_request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> PrismResult<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.connection.prism_url().join(path);
        debug!(%method, %url, "sending request");

        let mut req_builder = self.http_client.request(method, &url).basic_auth(
            self.connection.prism_username().as_str(),
            Some(self.connection.prism_password().as_str()),
        );

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| PrismError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PrismError::Authentication(format!(
                "Request rejected ({}): check username and password",
                status
            )));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            return Err(PrismError::Connection(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PrismError::Connection(format!("Failed to parse response: {}", e)))
    }
}

fn build_rate_limiter(rl: RateLimitConfig) -> PrismResult<DefaultDirectRateLimiter> {
    let non_zero = |value: u32, field: &str| {
        NonZeroU32::new(value).ok_or_else(|| ValidationError::Field {
            field: field.to_string(),
            message: "must be greater than 0".to_string(),
        })
    };
    let per_second = non_zero(rl.requests_per_second, "requests_per_second")?;
    let burst = non_zero(rl.burst_size, "burst_size")?;
    let quota = Quota::per_second(per_second).allow_burst(burst);
    Ok(DefaultDirectRateLimiter::direct(quota))
}
