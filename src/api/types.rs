//
//  nifty-cli
//  api/types.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request payloads for the mutating Nifty endpoints.
//!
//! The resource actions forward whatever body they are given, so these types
//! are a convenience for building that body. Unset optional fields are left
//! out of the JSON entirely.
//!
//! # Example
//!
//! ```rust
//! use nifty_cli::api::types::CreateTaskRequest;
//! use nifty_cli::api::RequestOptions;
//!
//! let payload = CreateTaskRequest {
//!     name: "Draft release notes".to_string(),
//!     task_group_id: "tg-1".to_string(),
//!     ..Default::default()
//! };
//! let opts = RequestOptions::new().json(&payload)?;
//!
//! assert_eq!(
//!     opts.body.unwrap(),
//!     serde_json::json!({"name": "Draft release notes", "task_group_id": "tg-1"})
//! );
//! # Ok::<(), nifty_cli::api::ApiError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title.
    pub name: String,

    /// Task group (status column) the task is created in.
    pub task_group_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<String>,

    /// Label ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// Member ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,

    /// ISO 8601 date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Body of `POST /projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Template to create the project from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Body of `POST /messages`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Message text.
    pub message: String,

    /// Project chat to post into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Direct-message recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

/// Body of `POST /webhooks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateWebhookRequest {
    /// URL that receives event deliveries.
    pub endpoint: String,

    /// Event names to subscribe to.
    pub events: Vec<String>,

    /// App the webhook belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

/// Body of `PUT /tasks/{task_id}/assignees`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignTaskRequest {
    /// Member ids. Replaces the current assignees.
    pub assignees: Vec<String>,
}
