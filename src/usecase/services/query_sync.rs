use crate::domain::entities::filter::{is_blank, FilterState};
use crate::domain::entities::resource::Resource;

/// Query parameters for a filter state: defined, non-empty, non-sentinel
/// entries only, in key order.
pub fn query_pairs<R: Resource>(filters: &FilterState<R>) -> Vec<(String, String)> {
    filters
        .entries()
        .filter(|(_, value)| !is_blank(Some(value)))
        .map(|(key, value)| (key.clone(), value.as_query_value()))
        .collect()
}
