//
//  nifty-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Nifty CLI Library
//!
//! A typed client for the Nifty project management REST API, built for
//! workflow-automation hosts.
//!
//! ## Overview
//!
//! The library does two things:
//!
//! - **Option resolvers** fetch one page of a list endpoint and turn it into
//!   `{label, value}` pairs for a dropdown (apps, members, projects, tasks,
//!   templates, milestones, task groups, labels).
//! - **Resource actions** wrap one endpoint each: list apps, chats, docs,
//!   files, members, messages, projects, tasks, milestones, task groups,
//!   templates and labels; create webhooks, projects and tasks; delete
//!   webhooks; assign tasks; send messages.
//!
//! Every request carries the caller's bearer token. Responses are returned as
//! parsed JSON and failures are surfaced unchanged. There is no retry,
//! caching or persistence.
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, resource actions and option resolvers
//! - [`auth`]: Bearer credential handling
//! - [`config`]: Client configuration
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nifty_cli::api::options::{ListResource, Projects};
//! use nifty_cli::api::NiftyClient;
//! use nifty_cli::auth::Credential;
//!
//! # async fn example() -> Result<(), nifty_cli::api::ApiError> {
//! let client = NiftyClient::new()?;
//! let credential = Credential::bearer("oauth-access-token")?;
//!
//! let first_page = Projects.options(&client, &credential, 0, None).await?;
//! for option in first_page {
//!     println!("{} ({})", option.label, option.value);
//! }
//! # Ok(())
//! # }
//! ```

/// API client for the Nifty REST API.
///
/// Builds authenticated requests, exposes one method per endpoint and the
/// option resolvers used to populate selectable properties.
pub mod api;

/// Bearer credential handling.
///
/// The access token is supplied by the host on every call and never stored.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Client configuration: base URL, page size, user agent.
pub mod config;

/// Output formatting for the command-line interface.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the API client.
pub use api::NiftyClient;

/// Application name constant.
///
/// The name of the CLI binary, also used in the `User-Agent` header.
pub const APP_NAME: &str = "nifty";

/// Application version constant, taken from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The access token is missing or was rejected (401/403).
    pub const AUTH_ERROR: i32 = 4;

    /// The API answered 404.
    pub const NOT_FOUND: i32 = 8;

    /// Picks the exit code for an error returned by a command.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        match err.downcast_ref::<crate::api::ApiError>() {
            Some(e) if e.is_auth_error() => AUTH_ERROR,
            Some(crate::api::ApiError::InvalidToken(_)) => AUTH_ERROR,
            Some(e) if e.is_not_found() => NOT_FOUND,
            Some(crate::api::ApiError::MissingParent { .. })
            | Some(crate::api::ApiError::MissingField(_))
            | Some(crate::api::ApiError::InvalidConfig(_)) => USAGE,
            _ => ERROR,
        }
    }

}
