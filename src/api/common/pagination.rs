//
//  nifty-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Nifty API Responses
//!
//! Nifty list endpoints use offset-based pagination with explicit `limit` and
//! `offset` query parameters. The caller supplies a zero-based page index and
//! the window is derived from a fixed page size:
//!
//! ```text
//! offset = limit × page
//! ```
//!
//! There is no "last page" marker. A page past the end simply comes back empty.
//!
//! List responses are not uniform either. Most wrap the records in a named
//! field (`apps`, `projects`, `tasks` or the generic `items`), while `/members`
//! returns a bare array. [`ListField`] describes where the records live.
//!
//! # Example
//!
//! ```rust
//! use nifty_cli::api::common::{ListField, PageWindow};
//!
//! let window = PageWindow::new(100, 3);
//! assert_eq!(window.offset, 300);
//!
//! let body = serde_json::json!({"items": [{"id": "a", "name": "Alpha"}]});
//! let records = ListField::Key("items").extract(&body).unwrap();
//! assert_eq!(records[0].name, "Alpha");
//! ```

use serde::Deserialize;
use serde_json::Value;

use super::{ApiError, NamedResource};

/// One page of an offset/limit listing.
///
/// `offset` is always a non-negative multiple of `limit`. It is held as `u64`
/// so `limit × page` cannot overflow for any `u32` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Maximum number of records requested.
    pub limit: u32,
    /// Index of the first record requested.
    pub offset: u64,
}

impl PageWindow {
    /// Builds the window for a zero-based page index.
    pub fn new(limit: u32, page: u32) -> Self {
        Self {
            limit,
            offset: u64::from(limit) * u64::from(page),
        }
    }

    /// Returns the window as `limit`/`offset` query pairs.
    pub fn query_pairs(&self) -> [(String, String); 2] {
        [
            ("limit".to_string(), self.limit.to_string()),
            ("offset".to_string(), self.offset.to_string()),
        ]
    }
}

/// Location of the record array inside a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    /// The response body itself is the array.
    Root,
    /// The array is stored under the given top-level key.
    Key(&'static str),
}

impl ListField {
    /// Pulls the records out of a list response.
    ///
    /// A missing or `null` field yields an empty list. Records are read with
    /// [`NamedResource::from_record`]; one without a usable id is skipped so
    /// the rest of the page survives. A field that is not an array is a
    /// decode error.
    pub fn extract(&self, body: &Value) -> Result<Vec<NamedResource>, ApiError> {
        let list = match self {
            Self::Root => Some(body),
            Self::Key(key) => body.get(key),
        };

        let records = match list {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(list) => Vec::<Value>::deserialize(list)?,
        };

        let total = records.len();
        let resources: Vec<NamedResource> =
            records.iter().filter_map(NamedResource::from_record).collect();
        if resources.len() < total {
            tracing::warn!(
                skipped = total - resources.len(),
                "list records without an id were skipped"
            );
        }

        Ok(resources)
    }
}
