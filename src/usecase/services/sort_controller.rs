use crate::domain::entities::filter::{FilterState, FilterValue, PAGE, SORT_BY, SORT_TO};
use crate::domain::entities::resource::Resource;
use crate::domain::entities::sort::{SortIndicator, SortOrder, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortProps {
    pub indicator: SortIndicator,
    /// Argument for `on_header_sort` when this header is clicked.
    pub next: Option<bool>,
}

pub fn sort_state<R: Resource>(filters: &FilterState<R>) -> SortState {
    SortState::from_fields(&filters.sort_by(), &filters.sort_to())
}

pub fn sort_props(state: &SortState, column_key: &str) -> SortProps {
    SortProps {
        indicator: state.indicator_for(column_key),
        next: state.next_click(column_key),
    }
}

/// Sorts by `key` only; any other sort key is dropped.
#[must_use]
pub fn set_sort<R: Resource>(filters: &FilterState<R>, key: &str, order: SortOrder) -> FilterState<R> {
    filters
        .with_raw(SORT_BY, key)
        .with_raw(SORT_TO, order.as_str())
        .with_raw(PAGE, 1_i64)
}

#[must_use]
pub fn clear_sort<R: Resource>(filters: &FilterState<R>) -> FilterState<R> {
    filters
        .with_raw(SORT_BY, FilterValue::empty())
        .with_raw(SORT_TO, FilterValue::empty())
        .with_raw(PAGE, 1_i64)
}

/// Tri-state header callback: `Some(false)` ascending, `Some(true)`
/// descending, `None` clears.
#[must_use]
pub fn on_header_sort<R: Resource>(
    filters: &FilterState<R>,
    key: &str,
    desc: Option<bool>,
) -> FilterState<R> {
    match desc {
        Some(desc) => set_sort(filters, key, SortOrder::from_desc(desc)),
        None => clear_sort(filters),
    }
}
