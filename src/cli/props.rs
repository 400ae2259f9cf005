//
//  nifty-cli
//  cli/props.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Property listing command
//!
//! ```bash
//! nifty props
//! nifty props --json
//! ```

use anyhow::Result;
use clap::Args;

use crate::api::options;
use crate::api::PropDefinition;
use crate::output::{definitions_table, write_json, OutputFormat};

use super::GlobalOptions;

/// List the selectable properties
#[derive(Args, Debug)]
pub struct PropsCommand {}

impl PropsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let definitions: Vec<&PropDefinition> =
            options::all().iter().map(|r| r.definition()).collect();

        match global.output_format() {
            OutputFormat::Json => write_json(&definitions),
            OutputFormat::Table => {
                definitions_table(definitions, console::colors_enabled()).print();
                Ok(())
            }
        }
    }
}
