//
//  nifty-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Nifty API
//!
//! This module provides the core HTTP client for interacting with the Nifty
//! REST API. Every resource action and option resolver ends up in
//! [`NiftyClient::send`], which:
//!
//! - Builds the URL from the configured base URL and the request path
//! - Applies the caller's bearer credential
//! - Attaches query pairs and the JSON body
//! - Returns the parsed JSON body, or the raw error response on failure
//!
//! Requests are never retried. Transport errors and non-success responses
//! are handed back to the caller as they are.

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::auth::Credential;
use crate::config::ClientConfig;

use super::common::ApiError;
use super::request::Request;

/// The HTTP client for the Nifty API.
///
/// The client holds no per-user state. The credential is passed to every
/// call, so one client can be shared between concurrent callers and
/// different accounts.
///
/// # Example
///
/// ```rust,no_run
/// use nifty_cli::api::{NiftyClient, RequestOptions};
/// use nifty_cli::auth::Credential;
///
/// # async fn example() -> Result<(), nifty_cli::api::ApiError> {
/// let client = NiftyClient::new()?;
/// let credential = Credential::bearer("oauth-access-token")?;
///
/// let projects = client
///     .list_projects(&credential, RequestOptions::new().param("limit", 10))
///     .await?;
/// println!("{}", projects);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NiftyClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL, page size and user agent
    config: ClientConfig,
}

impl NiftyClient {
    /// Creates a client for the public Nifty API with default settings.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// No request timeout is set. Cancellation is left to the caller.
    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: Client::builder().user_agent(config.user_agent()).build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &Url {
        self.config.base_url()
    }

    /// Resolves the full URL of a request.
    ///
    /// Path segments are appended to the base URL path and percent-encoded
    /// individually, so an identifier can never introduce extra segments.
    ///
    /// ```rust
    /// use nifty_cli::api::{NiftyClient, Request};
    ///
    /// let client = NiftyClient::new()?;
    /// let url = client.endpoint(&Request::delete(["webhooks", "h/1"]))?;
    /// assert_eq!(url.as_str(), "https://openapi.niftypm.com/api/v1.0/webhooks/h%2F1");
    /// # Ok::<(), nifty_cli::api::ApiError>(())
    /// ```
    pub fn endpoint(&self, request: &Request) -> Result<Url, ApiError> {
        let base = self.config.base_url();
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidConfig(format!("'{}' cannot be a base URL", base)))?
            .pop_if_empty()
            .extend(request.segments());
        Ok(url)
    }

    /// Sends a request and returns the parsed JSON response body.
    ///
    /// An empty success body (e.g. `204 No Content`) is returned as
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the request could not be sent
    /// - [`ApiError::Status`] for any non-2xx response, with the raw body
    /// - [`ApiError::Decode`] if a success body is not valid JSON
    pub async fn send(
        &self,
        credential: &Credential,
        request: Request,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(&request)?;
        let method = request.method();

        let mut builder =
            credential.apply_to_request(self.http.request(method.into(), url.clone()));
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        tracing::debug!(%method, %url, "sending request");

        let response = builder.send().await?;
        let status = response.status();

        tracing::debug!(%method, %url, %status, "received response");

        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status { status, body: text });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
