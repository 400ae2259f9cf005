//
//  nifty-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod call;
mod options;
mod props;

pub use call::{Action, CallCommand};
pub use options::{OptionsCommand, PropKey};
pub use props::PropsCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::NiftyClient;
use crate::auth::{read_token_from_stdin, Credential};
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::output::OutputFormat;

/// Nifty CLI - Drive the Nifty API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "nifty",
    version,
    about = "Drive the Nifty project management API from the command line",
    long_about = "nifty resolves selectable options and runs single API actions against\n\
                  Nifty, the way an automation host would.",
    propagate_version = true,
    after_help = "Use 'nifty <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone)]
pub struct GlobalOptions {
    /// OAuth access token ('-' reads it from stdin)
    #[arg(long, global = true, env = "NIFTY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Records per option page
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            json: false,
        }
    }
}

impl GlobalOptions {
    /// Builds a client from `--base-url` and `--page-size`.
    pub fn client(&self) -> Result<NiftyClient> {
        let config = ClientConfig::new(&self.base_url)?.with_page_size(self.page_size)?;
        Ok(NiftyClient::with_config(config)?)
    }

    /// Resolves the access token from `--token` or `NIFTY_ACCESS_TOKEN`.
    pub fn credential(&self) -> Result<Credential> {
        let token = self.token.as_deref().context(
            "No access token. Pass --token or set NIFTY_ACCESS_TOKEN.",
        )?;

        let token = if token == "-" {
            read_token_from_stdin().context("Failed to read token from stdin")?
        } else {
            token.to_string()
        };

        Ok(Credential::bearer(token)?)
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the selectable properties and their metadata
    Props(PropsCommand),

    /// Resolve one page of options for a property
    #[command(visible_alias = "opts")]
    Options(OptionsCommand),

    /// Run a single API action
    Call(CallCommand),

    /// Print version information
    Version,
}
