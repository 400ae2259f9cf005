//
//  nifty-cli
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request descriptors and caller-supplied request options.
//!
//! A [`Request`] describes exactly one outbound call: the HTTP method, the
//! path below the base URL, query pairs and an optional JSON body. It is
//! built, sent and dropped within a single method call.
//!
//! [`RequestOptions`] is the options bag a caller hands to a resource action.
//! Its query pairs and body are merged into the action's descriptor.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use super::common::{ApiError, PageWindow};

/// HTTP methods used by the Nifty API.
///
/// Parsing is case-insensitive and rejects anything outside this set, so a
/// mistyped method fails before a request is built.
///
/// ```rust
/// use nifty_cli::api::HttpMethod;
///
/// assert_eq!("put".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
/// assert!("FETCH".parse::<HttpMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Read a resource or a list page.
    Get,
    /// Create a resource (webhooks, projects, tasks, messages).
    Post,
    /// Replace part of a resource, e.g. the assignees of a task.
    Put,
    Patch,
    /// Remove a resource (webhooks).
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ApiError::InvalidMethod(s.to_string())),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query parameters and body supplied by the caller of a resource action.
///
/// # Example
///
/// ```rust
/// use nifty_cli::api::RequestOptions;
/// use serde_json::json;
///
/// let opts = RequestOptions::new()
///     .param("project_id", "p1")
///     .body(json!({"name": "Write docs"}));
///
/// assert_eq!(opts.query.len(), 1);
/// assert!(opts.body.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Query pairs, sent in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query pair.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query pair when `value` is present.
    pub fn param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Appends the `limit` and `offset` pairs of a page window.
    pub fn page(mut self, window: PageWindow) -> Self {
        self.query.extend(window.query_pairs());
        self
    }

    /// Sets the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `payload` and uses it as the JSON body.
    pub fn json<T: Serialize>(self, payload: &T) -> Result<Self, ApiError> {
        Ok(self.body(serde_json::to_value(payload)?))
    }
}

/// A fully described outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: HttpMethod,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl Request {
    /// Creates a request for the path made of `segments`.
    ///
    /// Each segment becomes exactly one path segment of the final URL and is
    /// percent-encoded when the URL is built.
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a `GET` request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nifty_cli::api::{HttpMethod, Request};
    ///
    /// let request = Request::get(["taskgroups"]);
    /// assert_eq!(request.method(), HttpMethod::Get);
    /// assert_eq!(request.path(), "/taskgroups");
    /// ```
    pub fn get<I: IntoIterator<Item = S>, S: Into<String>>(segments: I) -> Self {
        Self::new(HttpMethod::Get, segments)
    }

    /// Creates a `POST` request.
    pub fn post<I: IntoIterator<Item = S>, S: Into<String>>(segments: I) -> Self {
        Self::new(HttpMethod::Post, segments)
    }

    /// Creates a `PUT` request.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nifty_cli::api::Request;
    ///
    /// let request = Request::put(["tasks", "t1", "assignees"]);
    /// assert_eq!(request.path(), "/tasks/t1/assignees");
    /// assert!(request.body().is_none());
    /// ```
    pub fn put<I: IntoIterator<Item = S>, S: Into<String>>(segments: I) -> Self {
        Self::new(HttpMethod::Put, segments)
    }

    /// Creates a `DELETE` request. Nothing adds a body unless options do.
    pub fn delete<I: IntoIterator<Item = S>, S: Into<String>>(segments: I) -> Self {
        Self::new(HttpMethod::Delete, segments)
    }

    /// Merges caller options into the request.
    ///
    /// Query pairs are appended after any already present. A body in `opts`
    /// replaces the current one.
    pub fn with_options(mut self, opts: RequestOptions) -> Self {
        self.query.extend(opts.query);
        if opts.body.is_some() {
            self.body = opts.body;
        }
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the raw, unencoded path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the query pairs in the order they will be sent.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns the unencoded path, e.g. `/tasks/t1/assignees`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Removes a string identifier from an action input object.
///
/// Used for path-parameterised actions: the identifier goes into the URL and
/// the rest of the object is forwarded as the body.
///
/// ```rust
/// use nifty_cli::api::take_path_param;
/// use serde_json::json;
///
/// let mut input = json!({"taskId": "t1", "assignees": ["m1"]})
///     .as_object()
///     .cloned()
///     .unwrap();
/// let task_id = take_path_param(&mut input, "taskId").unwrap();
///
/// assert_eq!(task_id, "t1");
/// assert!(!input.contains_key("taskId"));
/// ```
pub fn take_path_param(input: &mut Map<String, Value>, key: &str) -> Result<String, ApiError> {
    match input.remove(key) {
        Some(Value::String(id)) if !id.is_empty() => Ok(id),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(ApiError::MissingField(key.to_string())),
    }
}
