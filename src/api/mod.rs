//
//  nifty-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Nifty REST API
//! (`https://openapi.niftypm.com/api/v1.0`).
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`request`]: Request descriptors, HTTP methods and caller options
//! - `resources`: One method per endpoint (list, create, delete, assign, send)
//! - [`options`]: Option resolvers that turn a list page into `{label, value}` pairs
//! - [`types`]: Typed request bodies
//! - [`common`]: Shared types (errors, pagination, prop metadata)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nifty_cli::api::types::AssignTaskRequest;
//! use nifty_cli::api::{NiftyClient, RequestOptions};
//! use nifty_cli::auth::Credential;
//!
//! # async fn example() -> Result<(), nifty_cli::api::ApiError> {
//! let client = NiftyClient::new()?;
//! let credential = Credential::bearer("oauth-access-token")?;
//!
//! let payload = AssignTaskRequest {
//!     assignees: vec!["m1".to_string()],
//! };
//! client
//!     .assign_task(&credential, "task-1", RequestOptions::new().json(&payload)?)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures come back as [`ApiError`]. Transport errors and non-success
//! responses are passed through unchanged; nothing is retried.

/// Core HTTP client wrapper for the Nifty API.
pub mod client;

/// Common types shared by every part of the API layer.
pub mod common;

/// Option resolvers for selectable properties.
pub mod options;

/// Request descriptors and caller options.
pub mod request;

/// Typed request bodies.
pub mod types;

mod resources;

pub use client::NiftyClient;
pub use common::{ApiError, NamedResource, PageWindow, PropDefinition, PropKind, PropOption};
pub use options::ListResource;
pub use request::{take_path_param, HttpMethod, Request, RequestOptions};
