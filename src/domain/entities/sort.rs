#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_desc(desc: bool) -> Self {
        if desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortState {
    Unsorted,
    Sorted { key: String, order: SortOrder },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    Neutral,
}

impl SortState {
    /// Reads `sort_by` / `sort_to`. An empty `sort_by` is unsorted; any
    /// direction other than `desc` reads as ascending.
    pub fn from_fields(sort_by: &str, sort_to: &str) -> Self {
        if sort_by.is_empty() {
            return SortState::Unsorted;
        }
        let order = if sort_to.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        SortState::Sorted {
            key: sort_by.to_string(),
            order,
        }
    }

    pub fn indicator_for(&self, column_key: &str) -> SortIndicator {
        match self {
            SortState::Sorted { key, order } if key == column_key => match order {
                SortOrder::Asc => SortIndicator::Ascending,
                SortOrder::Desc => SortIndicator::Descending,
            },
            _ => SortIndicator::Neutral,
        }
    }

    /// Argument for the tri-state header callback when `column_key` is
    /// clicked: asc, then desc, then clear.
    pub fn next_click(&self, column_key: &str) -> Option<bool> {
        match self.indicator_for(column_key) {
            SortIndicator::Neutral => Some(false),
            SortIndicator::Ascending => Some(true),
            SortIndicator::Descending => None,
        }
    }
}
