//
//  nifty-cli
//  api/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Option Resolvers
//!
//! An option resolver fills a dropdown on the automation host. It fetches one
//! page of a list endpoint and turns each `{id, name}` record into a
//! `{label, value}` pair.
//!
//! Every resolver implements [`ListResource`]. The page size comes from the
//! client configuration and is the same for all resolvers; the page index
//! comes from the host.
//!
//! | Resolver | Prop | Endpoint | Items field | Filters | Project |
//! |----------|------|----------|-------------|---------|---------|
//! | [`Apps`] | `appId` | `/apps` | `apps` | | |
//! | [`Members`] | `memberId` | `/members` | array body | | |
//! | [`Projects`] | `projectId` | `/projects` | `projects` | | |
//! | [`Tasks`] | `taskId` | `/tasks` | `tasks` | | optional |
//! | [`Templates`] | `templateId` | `/templates` | `items` | `type=project` | |
//! | [`Milestones`] | `milestoneId` | `/milestones` | `items` | | required |
//! | [`TaskGroups`] | `taskGroupId` | `/taskgroups` | `items` | `archived=false` | required |
//! | [`Labels`] | `labelIds` | `/labels` | `items` | `type=others` | |
//!
//! ## Example
//!
//! ```rust,no_run
//! use nifty_cli::api::options::{ListResource, TaskGroups};
//! use nifty_cli::api::NiftyClient;
//! use nifty_cli::auth::Credential;
//!
//! # async fn example() -> Result<(), nifty_cli::api::ApiError> {
//! let client = NiftyClient::new()?;
//! let credential = Credential::bearer("oauth-access-token")?;
//!
//! for option in TaskGroups.options(&client, &credential, 0, Some("project-1")).await? {
//!     println!("{} => {}", option.label, option.value);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::auth::Credential;

use super::client::NiftyClient;
use super::common::{ApiError, ListField, PageWindow, PropDefinition, PropKind, PropOption};
use super::request::RequestOptions;

/// How a resolver relates to a parent project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentScope {
    /// The listing is workspace-wide; a parent id is ignored.
    None,
    /// A parent id narrows the listing when given.
    Optional,
    /// The listing only makes sense inside a project.
    Required,
}

/// Query key used to forward the parent project id.
pub const PROJECT_FILTER: &str = "project_id";

/// A list endpoint that can populate a selectable property.
#[async_trait]
pub trait ListResource: Send + Sync {
    /// Metadata of the property this resolver backs.
    fn definition(&self) -> &'static PropDefinition;

    /// Where the records live in the list response.
    fn list_field(&self) -> ListField;

    fn parent_scope(&self) -> ParentScope {
        ParentScope::None
    }

    /// Fixed filters sent with every page request.
    fn filters(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Calls the list endpoint backing this resolver.
    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError>;

    /// Builds the query for one page.
    ///
    /// The pairs are `limit`, `offset`, then `project_id` when in scope,
    /// then the fixed filters.
    fn page_options(
        &self,
        window: PageWindow,
        parent: Option<&str>,
    ) -> Result<RequestOptions, ApiError> {
        let mut opts = RequestOptions::new().page(window);

        match (self.parent_scope(), parent) {
            (ParentScope::None, _) => {}
            (ParentScope::Optional, parent) => opts = opts.param_opt(PROJECT_FILTER, parent),
            (ParentScope::Required, Some(parent)) => opts = opts.param(PROJECT_FILTER, parent),
            (ParentScope::Required, None) => {
                return Err(ApiError::MissingParent {
                    resource: self.definition().label,
                })
            }
        }

        for (key, value) in self.filters() {
            opts = opts.param(*key, value);
        }

        Ok(opts)
    }

    /// Fetches page `page` (zero-based) and maps it to options.
    ///
    /// Records keep their response order. A missing or `null` items field
    /// yields an empty list; request failures are returned unchanged.
    async fn options(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        page: u32,
        parent: Option<&str>,
    ) -> Result<Vec<PropOption>, ApiError> {
        let window = PageWindow::new(client.config().page_size(), page);
        let opts = self.page_options(window, parent)?;
        let body = self.fetch(client, credential, opts).await?;

        let records = self.list_field().extract(&body)?;
        tracing::debug!(
            prop = self.definition().key,
            page,
            count = records.len(),
            "resolved options"
        );

        Ok(records.into_iter().map(PropOption::from).collect())
    }
}

/// Apps from the Nifty App Center.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apps;

/// Workspace members.
#[derive(Debug, Clone, Copy, Default)]
pub struct Members;

/// Projects.
#[derive(Debug, Clone, Copy, Default)]
pub struct Projects;

/// Tasks, optionally narrowed to a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tasks;

/// Project templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Templates;

/// Milestones of a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct Milestones;

/// Non-archived task groups of a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskGroups;

/// Task labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct Labels;

static APP_ID: PropDefinition = PropDefinition {
    key: "appId",
    label: "App ID",
    description: "The unique identifier for the App. Create one under Profile Settings > \
                  App Center > Integrate with API, register the host's OAuth redirect URL \
                  and enable the scopes the integration needs.",
    kind: PropKind::String,
    optional: false,
};

static MEMBER_ID: PropDefinition = PropDefinition {
    key: "memberId",
    label: "Member ID",
    description: "The unique identifier for the member that the task will be assigned",
    kind: PropKind::String,
    optional: false,
};

static PROJECT_ID: PropDefinition = PropDefinition {
    key: "projectId",
    label: "Project ID",
    description: "The unique identifier for the project",
    kind: PropKind::String,
    optional: false,
};

static TASK_ID: PropDefinition = PropDefinition {
    key: "taskId",
    label: "Task ID",
    description: "The unique identifier for the task",
    kind: PropKind::String,
    optional: false,
};

static TEMPLATE_ID: PropDefinition = PropDefinition {
    key: "templateId",
    label: "Template ID",
    description: "The unique identifier for the template",
    kind: PropKind::String,
    optional: false,
};

static MILESTONE_ID: PropDefinition = PropDefinition {
    key: "milestoneId",
    label: "Milestone ID",
    description: "The unique identifier of a milestone",
    kind: PropKind::String,
    optional: true,
};

static TASK_GROUP_ID: PropDefinition = PropDefinition {
    key: "taskGroupId",
    label: "Task Group ID",
    description: "The unique identifier of a task group",
    kind: PropKind::String,
    optional: false,
};

static LABEL_IDS: PropDefinition = PropDefinition {
    key: "labelIds",
    label: "Label IDs",
    description: "An array of unique identifiers for the labels",
    kind: PropKind::StringArray,
    optional: true,
};

#[async_trait]
impl ListResource for Apps {
    fn definition(&self) -> &'static PropDefinition {
        &APP_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Key("apps")
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_apps(credential, opts).await
    }
}

#[async_trait]
impl ListResource for Members {
    fn definition(&self) -> &'static PropDefinition {
        &MEMBER_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Root
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_members(credential, opts).await
    }
}

#[async_trait]
impl ListResource for Projects {
    fn definition(&self) -> &'static PropDefinition {
        &PROJECT_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Key("projects")
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_projects(credential, opts).await
    }
}

#[async_trait]
impl ListResource for Tasks {
    fn definition(&self) -> &'static PropDefinition {
        &TASK_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Key("tasks")
    }

    fn parent_scope(&self) -> ParentScope {
        ParentScope::Optional
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_tasks(credential, opts).await
    }
}

#[async_trait]
impl ListResource for Templates {
    fn definition(&self) -> &'static PropDefinition {
        &TEMPLATE_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Key("items")
    }

    fn filters(&self) -> &'static [(&'static str, &'static str)] {
        &[("type", "project")]
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_templates(credential, opts).await
    }
}

#[async_trait]
impl ListResource for Milestones {
    fn definition(&self) -> &'static PropDefinition {
        &MILESTONE_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Key("items")
    }

    fn parent_scope(&self) -> ParentScope {
        ParentScope::Required
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_milestones(credential, opts).await
    }
}

#[async_trait]
impl ListResource for TaskGroups {
    fn definition(&self) -> &'static PropDefinition {
        &TASK_GROUP_ID
    }

    fn list_field(&self) -> ListField {
        ListField::Key("items")
    }

    fn parent_scope(&self) -> ParentScope {
        ParentScope::Required
    }

    fn filters(&self) -> &'static [(&'static str, &'static str)] {
        &[("archived", "false")]
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_task_groups(credential, opts).await
    }
}

#[async_trait]
impl ListResource for Labels {
    fn definition(&self) -> &'static PropDefinition {
        &LABEL_IDS
    }

    fn list_field(&self) -> ListField {
        ListField::Key("items")
    }

    fn filters(&self) -> &'static [(&'static str, &'static str)] {
        &[("type", "others")]
    }

    async fn fetch(
        &self,
        client: &NiftyClient,
        credential: &Credential,
        opts: RequestOptions,
    ) -> Result<Value, ApiError> {
        client.list_labels(credential, opts).await
    }
}

/// Every resolver, in the order the host lists the properties.
pub fn all() -> [&'static dyn ListResource; 8] {
    [
        &Apps,
        &Members,
        &Projects,
        &Tasks,
        &Templates,
        &Milestones,
        &TaskGroups,
        &Labels,
    ]
}

/// Looks up a resolver by property key (e.g. `taskGroupId`).
pub fn by_key(key: &str) -> Option<&'static dyn ListResource> {
    all().into_iter().find(|r| r.definition().key == key)
}
