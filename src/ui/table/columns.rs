use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::entities::visibility::ColumnVisibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Start => "left",
            Align::Center => "center",
            Align::End => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    /// Placeholder for a missing value.
    Muted(String),
    Badge { text: String, tone: BadgeTone },
    Link { text: String, href: String },
    Date(String),
}

impl CellContent {
    pub fn text(value: impl Into<String>) -> Self {
        CellContent::Text(value.into())
    }

    pub fn missing() -> Self {
        CellContent::Muted("—".to_string())
    }

    pub fn optional(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => CellContent::text(value),
            None => CellContent::missing(),
        }
    }

    pub fn badge(value: impl Into<String>, tone: BadgeTone) -> Self {
        CellContent::Badge {
            text: value.into(),
            tone,
        }
    }

    /// Formats a server timestamp as `16 Oct 2026`; unparsable input is shown as is.
    pub fn date(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => CellContent::Date(format_date(raw)),
            None => CellContent::missing(),
        }
    }
}

pub fn format_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d %b %Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%d %b %Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%d %b %Y").to_string();
    }
    raw.to_string()
}

/// One column of a table. `render` must be pure: format, badge or link,
/// never mutate filters or perform I/O.
pub struct ColumnDefinition<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub align: Align,
    pub render: fn(&T) -> CellContent,
}

impl<T> Clone for ColumnDefinition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnDefinition<T> {}

impl<T> PartialEq for ColumnDefinition<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && self.align == other.align
    }
}

impl<T> fmt::Debug for ColumnDefinition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDefinition")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("column key must not be empty (label `{0}`)")]
    EmptyKey(&'static str),
    #[error("duplicate column key `{0}`")]
    DuplicateKey(&'static str),
}

/// Validated, ordered column set of one table.
pub struct ColumnRegistry<T: 'static> {
    columns: &'static [ColumnDefinition<T>],
}

impl<T: 'static> Clone for ColumnRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ColumnRegistry<T> {}

impl<T: 'static> PartialEq for ColumnRegistry<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.columns, other.columns)
    }
}

impl<T: 'static> fmt::Debug for ColumnRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<T: 'static> ColumnRegistry<T> {
    pub fn new(columns: &'static [ColumnDefinition<T>]) -> Result<Self, ColumnError> {
        let mut seen = BTreeSet::new();
        for column in columns {
            if column.key.is_empty() {
                return Err(ColumnError::EmptyKey(column.label));
            }
            if !seen.insert(column.key) {
                return Err(ColumnError::DuplicateKey(column.key));
            }
        }
        Ok(Self { columns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ColumnDefinition<T>> {
        self.columns.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|column| column.key)
    }

    /// Visible columns in registry order.
    pub fn visible(&self, visibility: &ColumnVisibility) -> Vec<&'static ColumnDefinition<T>> {
        self.columns
            .iter()
            .filter(|column| visibility.is_visible(column.key))
            .collect()
    }

    pub fn hidden_count(&self, visibility: &ColumnVisibility) -> usize {
        visibility.hidden_count(self.keys())
    }
}
