use serde::{Deserialize, Serialize};

/// One page of rows as produced by the server's paginator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
}

impl<T> PaginatedEnvelope<T> {
    /// Clamps `current_page` into `[1, last_page]` and drops display bounds
    /// on an empty result.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.last_page = self.last_page.max(1);
        self.current_page = self.current_page.clamp(1, self.last_page);
        self.total = self.total.max(0);
        if self.total == 0 {
            self.from = None;
            self.to = None;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn on_last_page(&self) -> bool {
        self.current_page >= self.last_page
    }

    /// `"11–20 of 42"`, or `None` when there is nothing to show.
    pub fn range_label(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(format!("{from}–{to} of {}", self.total)),
            _ => None,
        }
    }
}
