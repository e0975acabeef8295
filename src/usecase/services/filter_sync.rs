use std::time::Duration;

use tracing::debug;

use crate::domain::entities::filter::FilterState;
use crate::domain::entities::resource::Resource;
use crate::usecase::ports::navigator::{RouteError, RouteResolver, VisitOptions, VisitRequest};
use crate::usecase::services::query_sync::query_pairs;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// Handle for one scheduled debounce. Only the newest ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Debounce bookkeeping between a resource's filter state and its index
/// route. The host owns the timer: it calls `observe` on every change,
/// waits the debounce window, then calls `fire` with the ticket it got.
#[derive(Debug)]
pub struct FilterSync<R: Resource> {
    route_name: &'static str,
    last_seen: Option<FilterState<R>>,
    pending: Option<(Ticket, FilterState<R>)>,
    next_ticket: u64,
    issued: u64,
    disposed: bool,
}

impl<R: Resource> FilterSync<R> {
    pub fn new() -> Self {
        Self::for_route(R::INDEX_ROUTE)
    }

    pub fn for_route(route_name: &'static str) -> Self {
        Self {
            route_name,
            last_seen: None,
            pending: None,
            next_ticket: 0,
            issued: 0,
            disposed: false,
        }
    }

    /// Records the current filters. The first call only remembers the
    /// mount-time state; unchanged values are ignored.
    pub fn observe(&mut self, filters: &FilterState<R>) -> Option<Ticket> {
        if self.disposed {
            return None;
        }
        match &self.last_seen {
            None => {
                self.last_seen = Some(filters.clone());
                return None;
            }
            Some(previous) if previous == filters => return None,
            Some(_) => {}
        }

        self.last_seen = Some(filters.clone());
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some((ticket, filters.clone()));
        Some(ticket)
    }

    /// Builds the navigation for `ticket` once its window elapsed. Returns
    /// `None` when a newer change superseded it or the sync was cancelled.
    pub fn fire(
        &mut self,
        ticket: Ticket,
        routes: &dyn RouteResolver,
    ) -> Result<Option<VisitRequest>, RouteError> {
        if self.disposed {
            return Ok(None);
        }
        let is_latest = matches!(&self.pending, Some((pending, _)) if *pending == ticket);
        if !is_latest {
            debug!(route = self.route_name, ?ticket, "debounce superseded");
            return Ok(None);
        }
        let Some((_, filters)) = self.pending.take() else {
            return Ok(None);
        };

        let path = routes.resolve(self.route_name, &[])?;
        self.issued += 1;
        Ok(Some(VisitRequest {
            route_name: self.route_name.to_string(),
            path,
            query: query_pairs(&filters),
            options: VisitOptions::FILTER_SYNC,
            sequence: self.issued,
        }))
    }

    /// Whether a response to `sequence` may still be applied.
    pub fn is_current(&self, sequence: u64) -> bool {
        !self.disposed && sequence == self.issued
    }

    /// Drops the staged change; nothing fires afterwards.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.disposed = true;
    }
}

impl<R: Resource> Default for FilterSync<R> {
    fn default() -> Self {
        Self::new()
    }
}
