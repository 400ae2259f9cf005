//
//  nifty-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `nifty` command:
//!
//! - table-style output for interactive terminal use
//! - JSON-style output for scripting and automation
//!
//! Status messages go to stderr so stdout stays machine-readable.

mod json;
mod table;

pub use json::*;
pub use table::*;

use console::style;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Prints a success message to stderr.
pub fn write_success(msg: &str) {
    eprintln!("{} {}", style("✓").green().bold(), msg);
}

/// Prints an error message to stderr.
pub fn write_error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}
