use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer};

use crate::domain::entities::resource::Resource;

/// Reserved "no selection" value for dropdowns that cannot hold an empty option.
pub const ALL_SENTINEL: &str = "__all__";
pub const DEFAULT_PER_PAGE: i64 = 10;

pub const SEARCH: &str = "search";
pub const FROM: &str = "from";
pub const TO: &str = "to";
pub const PER_PAGE: &str = "per_page";
pub const PAGE: &str = "page";
pub const SORT_BY: &str = "sort_by";
pub const SORT_TO: &str = "sort_to";

pub const UNIVERSAL_FIELDS: [&str; 7] = [SEARCH, FROM, TO, PER_PAGE, PAGE, SORT_BY, SORT_TO];

const NUMERIC_FIELDS: [&str; 2] = [PAGE, PER_PAGE];
const NAVIGATION_FIELDS: [&str; 4] = [PAGE, PER_PAGE, SORT_BY, SORT_TO];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Number(i64),
    Text(String),
}

impl FilterValue {
    pub fn empty() -> Self {
        FilterValue::Text(String::new())
    }

    pub fn as_query_value(&self) -> String {
        match self {
            FilterValue::Number(value) => value.to_string(),
            FilterValue::Text(value) => value.clone(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FilterValue::Number(value) => Some(*value),
            FilterValue::Text(value) => value.trim().parse().ok(),
        }
    }

    fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(FilterValue::Text(text.clone())),
            serde_json::Value::Number(number) => Some(
                number
                    .as_i64()
                    .map(FilterValue::Number)
                    .unwrap_or_else(|| FilterValue::Text(number.to_string())),
            ),
            serde_json::Value::Bool(flag) => {
                Some(FilterValue::Text(if *flag { "1" } else { "0" }.to_string()))
            }
            serde_json::Value::Array(items) => Some(FilterValue::Text(
                items
                    .iter()
                    .filter_map(FilterValue::from_json)
                    .map(|item| item.as_query_value())
                    .collect::<Vec<_>>()
                    .join(","),
            )),
            serde_json::Value::Object(_) => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

/// Single emptiness rule shared by sync, reset and the toolbar:
/// undefined, `""` and the `__all__` sentinel are all "no value".
pub fn is_blank(value: Option<&FilterValue>) -> bool {
    match value {
        None => true,
        Some(FilterValue::Number(_)) => false,
        Some(FilterValue::Text(text)) => text.is_empty() || text == ALL_SENTINEL,
    }
}

/// Filters as delivered by the server or parsed from a query string.
/// Only defined values are kept; `null` entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialFilters(BTreeMap<String, FilterValue>);

impl PartialFilters {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }

    /// Non-blank entries as query parameters, in key order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, value)| !is_blank(Some(value)))
            .map(|(key, value)| (key.clone(), value.as_query_value()))
            .collect()
    }

    pub fn from_json(value: &serde_json::Value) -> Self {
        let mut entries = BTreeMap::new();
        if let serde_json::Value::Object(map) = value {
            for (key, item) in map {
                if let Some(parsed) = FilterValue::from_json(item) {
                    entries.insert(key.clone(), parsed);
                }
            }
        }
        PartialFilters(entries)
    }

    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut entries = BTreeMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            // Only canonical integers become numbers, so `02` stays `02`.
            let parsed = match value.parse::<i64>() {
                Ok(number)
                    if NUMERIC_FIELDS.contains(&key.as_ref()) && number.to_string() == value =>
                {
                    FilterValue::Number(number)
                }
                _ => FilterValue::Text(value.to_string()),
            };
            entries.insert(key.to_string(), parsed);
        }
        PartialFilters(entries)
    }
}

impl<'de> Deserialize<'de> for PartialFilters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Laravel serialises an empty filter array as `[]`, which from_json maps to nothing.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(PartialFilters::from_json(&value))
    }
}

/// Current filter values of one resource list. Replaced as a whole on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<R: Resource> {
    fields: BTreeMap<String, FilterValue>,
    resource: PhantomData<R>,
}

impl<R: Resource> Default for FilterState<R> {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<R: Resource> FilterState<R> {
    pub fn defaults() -> Self {
        let mut fields = BTreeMap::new();
        for key in UNIVERSAL_FIELDS.iter().chain(R::EXTRA_FIELDS.iter()) {
            fields.insert((*key).to_string(), FilterValue::empty());
        }
        fields.insert(PAGE.to_string(), FilterValue::Number(1));
        Self {
            fields,
            resource: PhantomData,
        }
    }

    pub fn from_partial(incoming: &PartialFilters) -> Self {
        let mut state = Self::defaults();
        for (key, value) in incoming.iter() {
            state.fields.insert(key.clone(), value.clone());
        }
        state
    }

    pub fn text(&self, key: &str) -> String {
        self.fields
            .get(key)
            .map(FilterValue::as_query_value)
            .unwrap_or_default()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.fields.iter()
    }

    pub fn page(&self) -> i64 {
        self.fields
            .get(PAGE)
            .and_then(FilterValue::as_i64)
            .filter(|page| *page >= 1)
            .unwrap_or(1)
    }

    pub fn per_page(&self) -> i64 {
        self.fields
            .get(PER_PAGE)
            .and_then(FilterValue::as_i64)
            .filter(|per_page| *per_page >= 1)
            .unwrap_or(DEFAULT_PER_PAGE)
    }

    pub fn sort_by(&self) -> String {
        self.text(SORT_BY)
    }

    pub fn sort_to(&self) -> String {
        self.text(SORT_TO)
    }

    /// Sets one field without touching any other. Used by the sort and
    /// pagination controllers, which decide about `page` themselves.
    #[must_use]
    pub fn with_raw(&self, key: &str, value: impl Into<FilterValue>) -> Self {
        let mut next = self.clone();
        next.fields.insert(key.to_string(), value.into());
        next
    }

    /// Returns the merged object for a filter edit. Every field other than
    /// `page` and `per_page` sends the list back to page 1.
    #[must_use]
    pub fn with_field(&self, key: &str, value: impl Into<FilterValue>) -> Self {
        let next = self.with_raw(key, value);
        if key == PAGE || key == PER_PAGE {
            next
        } else {
            next.with_raw(PAGE, 1_i64)
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.fields
            .iter()
            .filter(|(key, _)| !NAVIGATION_FIELDS.contains(&key.as_str()))
            .any(|(_, value)| !is_blank(Some(value)))
    }

    /// Clears the filter fields back to their defaults while keeping the
    /// page size and the active sort.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let mut next = Self::defaults();
        for key in [PER_PAGE, SORT_BY, SORT_TO] {
            if let Some(value) = self.fields.get(key) {
                next.fields.insert(key.to_string(), value.clone());
            }
        }
        next.fields.insert(PAGE.to_string(), FilterValue::Number(1));
        next
    }
}
