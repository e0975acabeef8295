use crate::domain::entities::envelope::PaginatedEnvelope;
use crate::domain::entities::filter::{FilterState, PAGE, PER_PAGE};
use crate::domain::entities::resource::Resource;

pub const PER_PAGE_CHOICES: [i64; 5] = [10, 20, 30, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerPageChoice {
    Fixed(i64),
    /// Snapshot of the envelope's total at the time of selection.
    All,
}

impl PerPageChoice {
    pub fn value(self) -> String {
        match self {
            PerPageChoice::Fixed(size) => size.to_string(),
            PerPageChoice::All => "all".to_string(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(PerPageChoice::All);
        }
        value
            .parse::<i64>()
            .ok()
            .filter(|size| *size > 0)
            .map(PerPageChoice::Fixed)
    }
}

/// Everything the pagination bar needs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: i64,
    pub last_page: i64,
    pub total: i64,
    pub per_page: PerPageChoice,
    pub can_previous: bool,
    pub can_next: bool,
    pub range_label: Option<String>,
}

impl PaginationState {
    pub fn from_envelope<R: Resource, T>(
        filters: &FilterState<R>,
        envelope: &PaginatedEnvelope<T>,
    ) -> Self {
        Self {
            current_page: envelope.current_page,
            last_page: envelope.last_page,
            total: envelope.total,
            per_page: per_page_choice(filters, envelope),
            can_previous: !envelope.on_first_page(),
            can_next: !envelope.on_last_page(),
            range_label: envelope.range_label(),
        }
    }
}

/// Which option the per-page select shows. A size equal to the total that
/// is not one of the fixed choices is the earlier "All" selection.
pub fn per_page_choice<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
) -> PerPageChoice {
    let per_page = filters.per_page();
    if !PER_PAGE_CHOICES.contains(&per_page) && envelope.total > 0 && per_page == envelope.total {
        PerPageChoice::All
    } else {
        PerPageChoice::Fixed(per_page)
    }
}

/// Moves to `page`. Out-of-range targets and the current page are no-ops.
pub fn set_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
    page: i64,
) -> Option<FilterState<R>> {
    if page < 1 || page > envelope.last_page || page == envelope.current_page {
        return None;
    }
    Some(filters.with_raw(PAGE, page))
}

pub fn first_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
) -> Option<FilterState<R>> {
    set_page(filters, envelope, 1)
}

pub fn previous_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
) -> Option<FilterState<R>> {
    if envelope.on_first_page() {
        return None;
    }
    set_page(filters, envelope, envelope.current_page - 1)
}

pub fn next_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
) -> Option<FilterState<R>> {
    if envelope.on_last_page() {
        return None;
    }
    set_page(filters, envelope, envelope.current_page + 1)
}

pub fn last_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
) -> Option<FilterState<R>> {
    set_page(filters, envelope, envelope.last_page)
}

/// Changes the page size and returns to page 1. "All" on an empty result
/// keeps the current size.
pub fn set_per_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
    choice: PerPageChoice,
) -> Option<FilterState<R>> {
    let size = match choice {
        PerPageChoice::Fixed(size) => size,
        PerPageChoice::All if envelope.total > 0 => envelope.total,
        PerPageChoice::All => return None,
    };
    if size < 1 || size == filters.per_page() {
        return None;
    }
    Some(filters.with_raw(PER_PAGE, size).with_raw(PAGE, 1_i64))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    First,
    Previous,
    Next,
    Last,
    To(i64),
}

pub fn move_page<R: Resource, T>(
    filters: &FilterState<R>,
    envelope: &PaginatedEnvelope<T>,
    target: PageMove,
) -> Option<FilterState<R>> {
    match target {
        PageMove::First => first_page(filters, envelope),
        PageMove::Previous => previous_page(filters, envelope),
        PageMove::Next => next_page(filters, envelope),
        PageMove::Last => last_page(filters, envelope),
        PageMove::To(page) => set_page(filters, envelope, page),
    }
}
