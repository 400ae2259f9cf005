//
//  nifty-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client configuration for the Nifty API. Configuration lives in memory only:
//! it is built in code (or from command-line flags) and handed to
//! [`NiftyClient::with_config`](crate::api::NiftyClient::with_config). Nothing
//! is read from or written to disk.
//!
//! | Setting | Default |
//! |---------|---------|
//! | `base_url` | `https://openapi.niftypm.com/api/v1.0` |
//! | `page_size` | `100` |
//! | `user_agent` | `nifty/<version>` |
//!
//! ## Usage
//!
//! ```rust
//! use nifty_cli::config::ClientConfig;
//!
//! let config = ClientConfig::default().with_page_size(50)?;
//! assert_eq!(config.page_size(), 50);
//! assert_eq!(config.base_url().as_str(), "https://openapi.niftypm.com/api/v1.0");
//! # Ok::<(), nifty_cli::api::ApiError>(())
//! ```

use url::Url;

use crate::api::ApiError;

/// Base URL of the versioned Nifty REST API.
pub const DEFAULT_BASE_URL: &str = "https://openapi.niftypm.com/api/v1.0";

/// Number of records requested per option page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Settings shared by every request a client sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    page_size: u32,
    user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration targeting `base_url`.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidConfig(format!(
                "base URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: format!("{}/{}", crate::APP_NAME, crate::VERSION),
        })
    }

    /// Sets the page size used by option resolvers. Must be at least 1.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ApiError> {
        if page_size == 0 {
            return Err(ApiError::InvalidConfig(
                "page size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Overrides the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the number of records requested per option page.
    ///
    /// # Returns
    ///
    /// The `limit` sent by every option resolver. The page offset is this
    /// value times the page index.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nifty_cli::config::{ClientConfig, DEFAULT_PAGE_SIZE};
    ///
    /// assert_eq!(ClientConfig::default().page_size(), DEFAULT_PAGE_SIZE);
    /// let config = ClientConfig::default().with_page_size(25)?;
    /// assert_eq!(config.page_size(), 25);
    /// # Ok::<(), nifty_cli::api::ApiError>(())
    /// ```
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the `User-Agent` header value, `nifty/<version>` by default.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: format!("{}/{}", crate::APP_NAME, crate::VERSION),
        }
    }
}
