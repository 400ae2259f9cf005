//
//  nifty-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Nifty API
//!
//! This module provides the types shared by the request layer, the resource
//! action methods and the option resolvers.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`NamedResource`] - A remote record reduced to its `id` and `name`
//! - [`PropOption`] - A `{label, value}` pair rendered in a dropdown
//! - [`PropDefinition`] - Metadata describing a selectable property
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use nifty_cli::api::common::{ApiError, PropOption};
//!
//! fn handle_result(result: Result<Vec<PropOption>, ApiError>) {
//!     match result {
//!         Ok(options) => println!("{} options", options.len()),
//!         Err(e) if e.is_auth_error() => println!("Token rejected: {}", e),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all Nifty API operations.
///
/// Remote failures are carried as-is: transport errors keep the underlying
/// `reqwest::Error` and non-success responses keep their status and raw body.
/// Nothing is retried or reclassified. The remaining variants are raised
/// locally, before any request is sent.
///
/// # Variants
///
/// | Variant | Raised by | Description |
/// |---------|-----------|-------------|
/// | `Network` | transport | Connection, DNS or TLS failure |
/// | `Status` | remote | Any non-2xx response (401/403/4xx/5xx) |
/// | `Decode` | local | Response body is not the expected JSON |
/// | `InvalidUrl` | local | Base URL could not be parsed |
/// | `InvalidConfig` | local | Client configuration rejected |
/// | `InvalidMethod` | local | Unknown HTTP method name |
/// | `InvalidToken` | local | Bearer token is malformed |
/// | `MissingParent` | local | Resolver needs a project id |
/// | `MissingField` | local | Input lacks a path identifier |
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    ///
    /// `body` is the raw response body, unmodified.
    #[error("API error ({status}): {}", api_message(.body))]
    Status {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The client configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An HTTP method name did not match a supported method.
    #[error("Unsupported HTTP method: {0}")]
    InvalidMethod(String),

    /// The bearer token failed format validation.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// An option resolver scoped to a project was called without one.
    #[error("{resource} options require a project id")]
    MissingParent {
        /// Label of the resolver that needs the parent
        resource: &'static str,
    },

    /// A required field was missing from the action input.
    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl ApiError {
    /// Returns the HTTP status for errors that came from the API.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` when the API rejected the credential (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Returns `true` when the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Extracts a readable message from an error body for display.
///
/// Nifty reports errors as `{"message": "..."}`, sometimes with an `error`
/// field alongside. Anything else is shown verbatim.
fn api_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error", "detail"] {
            if let Some(message) = json.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }

    if body.trim().is_empty() {
        "<empty body>".to_string()
    } else {
        body.to_string()
    }
}

/// A remote record reduced to its identifier and display name.
///
/// Every list endpoint used by the option resolvers returns records carrying
/// these two fields. Other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Opaque identifier owned by Nifty.
    pub id: String,
    /// Human readable name.
    pub name: String,
}

/// A single selectable option, as rendered by the automation host.
///
/// # Example
///
/// ```rust
/// use nifty_cli::api::common::{NamedResource, PropOption};
///
/// let option = PropOption::from(NamedResource {
///     id: "p1".to_string(),
///     name: "Website".to_string(),
/// });
/// assert_eq!(option.value, "p1");
/// assert_eq!(option.label, "Website");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropOption {
    /// Text shown to the user.
    pub label: String,
    /// Identifier submitted when the option is picked.
    pub value: String,
}

impl NamedResource {
    /// Reads a record leniently.
    ///
    /// The id may be a string or a number. A missing, `null` or non-string
    /// name falls back to the id. Records without a usable id yield `None`.
    ///
    /// ```rust
    /// use nifty_cli::api::common::NamedResource;
    /// use serde_json::json;
    ///
    /// let record = NamedResource::from_record(&json!({"id": 42, "name": null})).unwrap();
    /// assert_eq!(record.id, "42");
    /// assert_eq!(record.name, "42");
    /// assert!(NamedResource::from_record(&json!({"name": "orphan"})).is_none());
    /// ```
    pub fn from_record(record: &serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        let id = match record.get("id")? {
            Value::String(id) if !id.is_empty() => id.clone(),
            Value::Number(id) => id.to_string(),
            _ => return None,
        };
        let name = match record.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => id.clone(),
        };

        Some(Self { id, name })
    }
}

impl From<NamedResource> for PropOption {
    fn from(resource: NamedResource) -> Self {
        Self {
            label: resource.name,
            value: resource.id,
        }
    }
}

/// The value type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropKind {
    /// A single identifier.
    #[serde(rename = "string")]
    String,
    /// A list of identifiers.
    #[serde(rename = "string[]")]
    StringArray,
}

impl std::fmt::Display for PropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::StringArray => write!(f, "string[]"),
        }
    }
}

/// Metadata for a selectable property backed by an option resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropDefinition {
    /// Property key as used by the host (e.g. `projectId`).
    pub key: &'static str,
    /// Short label (e.g. `Project ID`).
    pub label: &'static str,
    /// Longer help text.
    pub description: &'static str,
    /// Value type.
    #[serde(rename = "type")]
    pub kind: PropKind,
    /// Whether the host may leave the property unset.
    pub optional: bool,
}
