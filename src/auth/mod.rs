//
//  nifty-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Nifty uses OAuth 2.0 bearer tokens. Obtaining and refreshing the token is
//! the job of the hosting automation platform, which runs the
//! authorization-code flow against a redirect URL registered in the Nifty App
//! Center. This crate only receives the resulting access token.
//!
//! The token is never stored. Each request takes a [`Credential`] argument,
//! so the authentication scope of every call is visible at the call site.
//!
//! ## Example
//!
//! ```rust
//! use nifty_cli::auth::Credential;
//!
//! let credential = Credential::bearer("oauth-access-token")?;
//! assert_eq!(credential.authorization_header(), "Bearer oauth-access-token");
//! # Ok::<(), nifty_cli::api::ApiError>(())
//! ```

mod token;

pub use token::*;

use std::fmt;

use reqwest::RequestBuilder;

use crate::api::ApiError;

/// An OAuth access token for the Nifty API.
///
/// The `Debug` implementation never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
}

impl Credential {
    /// Wraps an access token, rejecting empty tokens and tokens that
    /// contain whitespace.
    pub fn bearer(access_token: impl Into<String>) -> Result<Self, ApiError> {
        let access_token = access_token.into();
        if !validate_token(&access_token) {
            return Err(ApiError::InvalidToken(
                "token must be non-empty and contain no whitespace".to_string(),
            ));
        }
        Ok(Self { access_token })
    }

    /// Returns the value sent in the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Applies the credential to an HTTP request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.access_token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_rejects_malformed_tokens() {
        assert!(matches!(Credential::bearer(""), Err(ApiError::InvalidToken(_))));
        assert!(Credential::bearer("two words").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let credential = Credential::bearer("s3cret").unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_authorization_header() {
        let credential = Credential::bearer("tok").unwrap();
        assert_eq!(credential.authorization_header(), "Bearer tok");
    }
}
