//
//  nifty-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders option lists and prop definitions as terminal tables using the
//! `comfy_table` crate.
//!
//! ## Example
//!
//! ```rust
//! use nifty_cli::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .color(false)
//!     .headers(["Label", "Value"])
//!     .row(["Website", "p1"])
//!     .build();
//! assert!(table.to_string().contains("Website"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::{PropDefinition, PropOption};

/// Creates a new table with UTF-8 borders and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers are shown in cyan when color is enabled. Color support is
/// detected from the terminal and can be overridden with
/// [`color`](TableBuilder::color).
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the `Label | Value` table for a page of options.
pub fn options_table(options: &[PropOption], color: bool) -> TableBuilder {
    options.iter().fold(
        TableBuilder::new().color(color).headers(["Label", "Value"]),
        |table, option| table.row([option.label.as_str(), option.value.as_str()]),
    )
}

/// Builds the table listing prop definitions.
pub fn definitions_table<'a, I>(definitions: I, color: bool) -> TableBuilder
where
    I: IntoIterator<Item = &'a PropDefinition>,
{
    definitions.into_iter().fold(
        TableBuilder::new()
            .color(color)
            .headers(["Key", "Label", "Type", "Optional", "Description"]),
        |table, def| {
            table.row([
                def.key.to_string(),
                def.label.to_string(),
                def.kind.to_string(),
                format_bool(def.optional),
                truncate(def.description, 60),
            ])
        },
    )
}

/// Formats a boolean as `Yes` / `No`.
pub fn format_bool(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Truncates a string to `max_len` characters, ending with `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PropKind;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_options_table_lists_every_option() {
        let options = vec![
            PropOption {
                label: "Alpha".to_string(),
                value: "a1".to_string(),
            },
            PropOption {
                label: "Beta".to_string(),
                value: "b2".to_string(),
            },
        ];
        let rendered = options_table(&options, false).build().to_string();
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains("b2"));
    }

    #[test]
    fn test_definitions_table() {
        let def = PropDefinition {
            key: "labelIds",
            label: "Label IDs",
            description: "labels",
            kind: PropKind::StringArray,
            optional: true,
        };
        let rendered = definitions_table([&def], false).build().to_string();
        assert!(rendered.contains("string[]"));
        assert!(rendered.contains("Yes"));
    }
}
