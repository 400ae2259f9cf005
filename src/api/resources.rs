//
//  nifty-cli
//  api/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource action methods.
//!
//! One method per Nifty endpoint. Each builds a [`Request`] with the fixed
//! verb and path of its action, merges the caller's [`RequestOptions`] and
//! sends it. The response body is returned untouched.
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | `list_apps` ... `list_labels` | GET | `/apps`, `/chats`, ... |
//! | [`create_hook`](NiftyClient::create_hook) | POST | `/webhooks` |
//! | [`delete_hook`](NiftyClient::delete_hook) | DELETE | `/webhooks/{hook_id}` |
//! | [`create_project`](NiftyClient::create_project) | POST | `/projects` |
//! | [`assign_task`](NiftyClient::assign_task) | PUT | `/tasks/{task_id}/assignees` |
//! | [`send_message`](NiftyClient::send_message) | POST | `/messages` |
//! | [`create_task`](NiftyClient::create_task) | POST | `/tasks` |

use serde_json::Value;

use crate::auth::Credential;

use super::client::NiftyClient;
use super::common::ApiError;
use super::request::{Request, RequestOptions};

type Result<T> = std::result::Result<T, ApiError>;

impl NiftyClient {
    /// Lists the apps registered in the Nifty App Center.
    pub async fn list_apps(&self, credential: &Credential, opts: RequestOptions) -> Result<Value> {
        self.send(credential, Request::get(["apps"]).with_options(opts))
            .await
    }

    /// Lists the chats visible to the token's user.
    ///
    /// # Returns
    ///
    /// The raw response body. Query pairs in `opts` are passed through.
    pub async fn list_chats(&self, credential: &Credential, opts: RequestOptions) -> Result<Value> {
        self.send(credential, Request::get(["chats"]).with_options(opts))
            .await
    }

    /// Lists docs.
    pub async fn list_docs(&self, credential: &Credential, opts: RequestOptions) -> Result<Value> {
        self.send(credential, Request::get(["docs"]).with_options(opts))
            .await
    }

    /// Lists uploaded files.
    pub async fn list_files(&self, credential: &Credential, opts: RequestOptions) -> Result<Value> {
        self.send(credential, Request::get(["files"]).with_options(opts))
            .await
    }

    /// Lists workspace members. The response body is a bare array.
    pub async fn list_members(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["members"]).with_options(opts))
            .await
    }

    /// Lists chat messages. Filters such as `chat_id` go in `opts`.
    pub async fn list_messages(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["messages"]).with_options(opts))
            .await
    }

    /// Lists projects.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nifty_cli::api::{NiftyClient, PageWindow, RequestOptions};
    /// use nifty_cli::auth::Credential;
    ///
    /// # async fn example() -> Result<(), nifty_cli::api::ApiError> {
    /// let client = NiftyClient::new()?;
    /// let credential = Credential::bearer("oauth-access-token")?;
    ///
    /// let page = client
    ///     .list_projects(&credential, RequestOptions::new().page(PageWindow::new(50, 1)))
    ///     .await?;
    /// println!("{}", page["projects"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_projects(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["projects"]).with_options(opts))
            .await
    }

    /// Lists tasks, optionally narrowed with `project_id` in `opts`.
    pub async fn list_tasks(&self, credential: &Credential, opts: RequestOptions) -> Result<Value> {
        self.send(credential, Request::get(["tasks"]).with_options(opts))
            .await
    }

    /// Lists milestones of the project given as `project_id` in `opts`.
    pub async fn list_milestones(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["milestones"]).with_options(opts))
            .await
    }

    /// Lists task groups (`GET /taskgroups`). Records are under `items`.
    pub async fn list_task_groups(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["taskgroups"]).with_options(opts))
            .await
    }

    /// Lists templates. Pass `type=project` to get project templates only.
    pub async fn list_templates(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["templates"]).with_options(opts))
            .await
    }

    /// Lists labels. Records are under `items`.
    pub async fn list_labels(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::get(["labels"]).with_options(opts))
            .await
    }

    /// Registers a webhook.
    pub async fn create_hook(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::post(["webhooks"]).with_options(opts))
            .await
    }

    /// Removes a webhook. No body is sent.
    pub async fn delete_hook(&self, credential: &Credential, hook_id: &str) -> Result<Value> {
        self.send(credential, Request::delete(["webhooks", hook_id]))
            .await
    }

    /// Creates a project.
    ///
    /// # Returns
    ///
    /// The created project as returned by Nifty.
    pub async fn create_project(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::post(["projects"]).with_options(opts))
            .await
    }

    /// Replaces the assignees of a task.
    ///
    /// `task_id` only goes into the path; the body comes from `opts`.
    pub async fn assign_task(
        &self,
        credential: &Credential,
        task_id: &str,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(
            credential,
            Request::put(["tasks", task_id, "assignees"]).with_options(opts),
        )
        .await
    }

    /// Posts a message to a project chat or a member.
    pub async fn send_message(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::post(["messages"]).with_options(opts))
            .await
    }

    /// Creates a task. The body is forwarded as-is.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nifty_cli::api::types::CreateTaskRequest;
    /// use nifty_cli::api::{NiftyClient, RequestOptions};
    /// use nifty_cli::auth::Credential;
    ///
    /// # async fn example() -> Result<(), nifty_cli::api::ApiError> {
    /// let client = NiftyClient::new()?;
    /// let credential = Credential::bearer("oauth-access-token")?;
    ///
    /// let payload = CreateTaskRequest {
    ///     name: "Write docs".to_string(),
    ///     task_group_id: "tg-1".to_string(),
    ///     ..Default::default()
    /// };
    /// let task = client
    ///     .create_task(&credential, RequestOptions::new().json(&payload)?)
    ///     .await?;
    /// println!("created {}", task["id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_task(
        &self,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value> {
        self.send(credential, Request::post(["tasks"]).with_options(opts))
            .await
    }
}
