//
//  nifty-cli
//  cli/call.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Single action command
//!
//! Runs exactly one resource action and prints the raw response body.
//!
//! ## Examples
//!
//! ```bash
//! # List tasks of a project
//! nifty call list-tasks --param project_id=abc123 --param limit=50
//!
//! # Create a task
//! nifty call create-task --input '{"name": "Write docs", "task_group_id": "tg1"}'
//!
//! # Assign a task; taskId goes into the path, the rest is the body
//! nifty call assign-task --input '{"taskId": "t1", "assignees": ["m1"]}'
//!
//! # Delete a webhook
//! nifty call delete-hook --input '{"hookId": "h1"}'
//!
//! # Read the body from a file or stdin
//! nifty call send-message --input @message.json
//! ```

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde_json::{Map, Value};

use crate::api::{take_path_param, HttpMethod, NiftyClient, RequestOptions};
use crate::auth::Credential;
use crate::output::{write_json, write_success};

use super::GlobalOptions;

/// Resource actions exposed by the API client
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListApps,
    ListChats,
    ListDocs,
    ListFiles,
    ListMembers,
    ListMessages,
    ListProjects,
    ListTasks,
    ListMilestones,
    ListTaskGroups,
    ListTemplates,
    ListLabels,
    CreateHook,
    DeleteHook,
    CreateProject,
    AssignTask,
    SendMessage,
    CreateTask,
}

impl Action {
    pub fn method(self) -> HttpMethod {
        match self {
            Self::CreateHook | Self::CreateProject | Self::SendMessage | Self::CreateTask => {
                HttpMethod::Post
            }
            Self::DeleteHook => HttpMethod::Delete,
            Self::AssignTask => HttpMethod::Put,
            _ => HttpMethod::Get,
        }
    }

    /// Input field that supplies the path identifier, if any.
    pub fn path_param(self) -> Option<&'static str> {
        match self {
            Self::DeleteHook => Some(HOOK_ID),
            Self::AssignTask => Some(TASK_ID),
            _ => None,
        }
    }

    /// Runs the action.
    ///
    /// For path-parameterised actions the identifier is removed from `input`
    /// and whatever remains becomes the body. Other actions forward `input`
    /// unchanged as the body when it is non-empty.
    pub async fn execute(
        self,
        client: &NiftyClient,
        credential: &Credential,
        mut input: Map<String, Value>,
        query: Vec<(String, String)>,
    ) -> Result<Value> {
        let response = match self {
            Self::ListApps => client.list_apps(credential, request_options(input, query)).await,
            Self::ListChats => client.list_chats(credential, request_options(input, query)).await,
            Self::ListDocs => client.list_docs(credential, request_options(input, query)).await,
            Self::ListFiles => client.list_files(credential, request_options(input, query)).await,
            Self::ListMembers => {
                client.list_members(credential, request_options(input, query)).await
            }
            Self::ListMessages => {
                client.list_messages(credential, request_options(input, query)).await
            }
            Self::ListProjects => {
                client.list_projects(credential, request_options(input, query)).await
            }
            Self::ListTasks => client.list_tasks(credential, request_options(input, query)).await,
            Self::ListMilestones => {
                client.list_milestones(credential, request_options(input, query)).await
            }
            Self::ListTaskGroups => {
                client.list_task_groups(credential, request_options(input, query)).await
            }
            Self::ListTemplates => {
                client.list_templates(credential, request_options(input, query)).await
            }
            Self::ListLabels => client.list_labels(credential, request_options(input, query)).await,
            Self::CreateHook => client.create_hook(credential, request_options(input, query)).await,
            Self::DeleteHook => {
                let hook_id = take_path_param(&mut input, HOOK_ID)?;
                if !input.is_empty() || !query.is_empty() {
                    tracing::warn!("delete-hook sends no body or query; extra input ignored");
                }
                client.delete_hook(credential, &hook_id).await
            }
            Self::CreateProject => {
                client.create_project(credential, request_options(input, query)).await
            }
            Self::AssignTask => {
                let task_id = take_path_param(&mut input, TASK_ID)?;
                client
                    .assign_task(credential, &task_id, request_options(input, query))
                    .await
            }
            Self::SendMessage => {
                client.send_message(credential, request_options(input, query)).await
            }
            Self::CreateTask => client.create_task(credential, request_options(input, query)).await,
        };

        Ok(response?)
    }
}

const HOOK_ID: &str = "hookId";
const TASK_ID: &str = "taskId";

/// Turns the remaining input and query pairs into request options.
fn request_options(input: Map<String, Value>, query: Vec<(String, String)>) -> RequestOptions {
    let opts = RequestOptions { query, body: None };
    if input.is_empty() {
        opts
    } else {
        opts.body(Value::Object(input))
    }
}

/// Run a single API action
#[derive(Args, Debug)]
pub struct CallCommand {
    /// Action to run
    #[arg(value_enum)]
    pub action: Action,

    /// Input object as JSON, '@path' to read a file, or '-' for stdin
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Query parameter as key=value (can be specified multiple times)
    #[arg(long = "param", short = 'q', action = clap::ArgAction::Append)]
    pub params: Vec<String>,
}

impl CallCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let input = self.read_input()?;
        let query = parse_params(&self.params)?;

        let client = global.client()?;
        let credential = global.credential()?;

        tracing::debug!(action = ?self.action, method = %self.action.method(), "running action");
        let response = self.action.execute(&client, &credential, input, query).await?;
        if response.is_null() {
            write_success("Request completed with an empty response");
            return Ok(());
        }
        write_json(&response)
    }

    fn read_input(&self) -> Result<Map<String, Value>> {
        let raw = match self.input.as_deref() {
            None => return Ok(Map::new()),
            Some("-") => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read input from stdin")?;
                buf
            }
            Some(path) if path.starts_with('@') => fs::read_to_string(&path[1..])
                .with_context(|| format!("Failed to read input file {}", &path[1..]))?,
            Some(json) => json.to_string(),
        };

        parse_input(&raw)
    }
}

/// Parses an input document, which must be a JSON object.
pub fn parse_input(raw: &str) -> Result<Map<String, Value>> {
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_json::from_str::<Value>(raw).context("Input is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("Input must be a JSON object, got: {}", other),
    }
}

/// Parses `key=value` pairs, keeping their order.
pub fn parse_params(params: &[String]) -> Result<Vec<(String, String)>> {
    params
        .iter()
        .map(|param| match param.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => bail!("Invalid parameter '{}', expected key=value", param),
        })
        .collect()
}
