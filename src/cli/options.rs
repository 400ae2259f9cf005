//
//  nifty-cli
//  cli/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Option resolution command
//!
//! Runs one option resolver for one page, the same call an automation host
//! makes when it fills a dropdown.
//!
//! ## Examples
//!
//! ```bash
//! # First page of projects
//! nifty options project-id
//!
//! # Third page of task groups in a project
//! nifty options task-group-id --project-id abc123 --page 2
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::api::options::{self, ListResource};
use crate::output::{options_table, write_json, OutputFormat};

use super::GlobalOptions;

/// Properties that have an option resolver
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKey {
    AppId,
    MemberId,
    ProjectId,
    TaskId,
    TemplateId,
    MilestoneId,
    TaskGroupId,
    LabelIds,
}

impl PropKey {
    pub fn resolver(self) -> &'static dyn ListResource {
        match self {
            Self::AppId => &options::Apps,
            Self::MemberId => &options::Members,
            Self::ProjectId => &options::Projects,
            Self::TaskId => &options::Tasks,
            Self::TemplateId => &options::Templates,
            Self::MilestoneId => &options::Milestones,
            Self::TaskGroupId => &options::TaskGroups,
            Self::LabelIds => &options::Labels,
        }
    }
}

/// Resolve one page of options for a property
#[derive(Args, Debug)]
pub struct OptionsCommand {
    /// Property to resolve
    #[arg(value_enum)]
    pub prop: PropKey,

    /// Zero-based page index
    #[arg(long, short = 'p', default_value_t = 0)]
    pub page: u32,

    /// Project to scope tasks, milestones and task groups to
    #[arg(long)]
    pub project_id: Option<String>,
}

impl OptionsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let credential = global.credential()?;

        let options = self
            .prop
            .resolver()
            .options(&client, &credential, self.page, self.project_id.as_deref())
            .await?;

        match global.output_format() {
            OutputFormat::Json => write_json(&options),
            OutputFormat::Table => {
                if options.is_empty() {
                    eprintln!("No options on page {}", self.page);
                } else {
                    options_table(&options, console::colors_enabled()).print();
                }
                Ok(())
            }
        }
    }
}
