use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::entities::envelope::PaginatedEnvelope;
use crate::domain::entities::filter::{FilterState, FilterValue};
use crate::domain::entities::page::PageProps;
use crate::domain::entities::resource::Resource;
use crate::platform::sleep;
use crate::ui::state::app_state::AppServices;
use crate::usecase::ports::navigator::NavigationError;
use crate::usecase::services::filter_sync::{FilterSync, Ticket};
use crate::usecase::services::pagination::{move_page, set_per_page, PageMove, PerPageChoice};
use crate::usecase::services::sort_controller::on_header_sort;

/// Filter state of one mounted resource list plus the envelope it shows.
pub struct FilterHandle<R: Resource> {
    pub filters: Signal<FilterState<R>>,
    pub envelope: Signal<PaginatedEnvelope<R::Record>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl<R: Resource> Clone for FilterHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for FilterHandle<R> {}

impl<R: Resource> FilterHandle<R> {
    /// The only way filters change: the whole next state replaces the old one.
    pub fn set_filters(&self, next: FilterState<R>) {
        let mut filters = self.filters;
        filters.set(next);
    }

    pub fn set_field(&self, key: &str, value: impl Into<FilterValue>) {
        let next = self.filters.read().with_field(key, value);
        self.set_filters(next);
    }

    pub fn sort(&self, key: &str, desc: Option<bool>) {
        let next = on_header_sort(&self.filters.read(), key, desc);
        self.set_filters(next);
    }

    pub fn go_to(&self, target: PageMove) {
        let next = move_page(&self.filters.read(), &self.envelope.read(), target);
        if let Some(next) = next {
            self.set_filters(next);
        }
    }

    pub fn set_per_page(&self, choice: PerPageChoice) {
        let next = set_per_page(&self.filters.read(), &self.envelope.read(), choice);
        if let Some(next) = next {
            self.set_filters(next);
        }
    }

    pub fn reset(&self) {
        let next = self.filters.read().cleared();
        self.set_filters(next);
    }
}

/// Mounts the filter state of `R` from server props and keeps it in sync
/// with the index route: debounced, mount-guarded, newest response wins.
pub fn use_resource_filters<R: Resource>(initial: PageProps<R>) -> FilterHandle<R> {
    let services = use_context::<AppServices>();
    let filters = use_signal(|| FilterState::<R>::from_partial(&initial.filters));
    let envelope = use_signal(|| initial.envelope.clone());
    let loading = use_signal(|| false);
    let error = use_signal(|| None::<String>);
    let handle = FilterHandle {
        filters,
        envelope,
        loading,
        error,
    };

    let sync = use_hook(|| Rc::new(RefCell::new(FilterSync::<R>::new())));
    let pending = use_hook(|| Rc::new(RefCell::new(None::<Task>)));

    use_effect({
        let sync = sync.clone();
        let pending = pending.clone();
        move || {
            let current = filters();
            let Some(ticket) = sync.borrow_mut().observe(&current) else {
                return;
            };
            if let Some(task) = pending.borrow_mut().take() {
                task.cancel();
            }
            let visit = DebouncedVisit {
                handle,
                services: services.clone(),
                sync: sync.clone(),
                pending: pending.clone(),
            };
            let task = spawn(visit.run(ticket));
            *pending.borrow_mut() = Some(task);
        }
    });

    use_drop(move || {
        sync.borrow_mut().cancel();
        if let Some(task) = pending.borrow_mut().take() {
            task.cancel();
        }
    });

    handle
}

struct DebouncedVisit<R: Resource> {
    handle: FilterHandle<R>,
    services: AppServices,
    sync: Rc<RefCell<FilterSync<R>>>,
    pending: Rc<RefCell<Option<Task>>>,
}

impl<R: Resource> DebouncedVisit<R> {
    async fn run(self, ticket: Ticket) {
        sleep(self.services.config.debounce).await;
        // Past the window a newer edit no longer cancels this visit; its
        // response is dropped by sequence instead.
        self.pending.borrow_mut().take();

        let fired = self
            .sync
            .borrow_mut()
            .fire(ticket, self.services.routes.as_ref());
        let request = match fired {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(err) => {
                warn!(resource = R::NAME, error = %err, "cannot resolve index route");
                let mut error = self.handle.error;
                error.set(Some(err.to_string()));
                return;
            }
        };

        let sequence = request.sequence;
        info!(resource = R::NAME, url = %request.url(), sequence, "syncing filters");
        self.services.history.borrow_mut().record(&request);

        let mut loading = self.handle.loading;
        loading.set(true);
        let result = self.services.navigator.visit(request).await;
        if !self.sync.borrow().is_current(sequence) {
            debug!(resource = R::NAME, sequence, "discarding stale response");
            return;
        }
        loading.set(false);

        let mut envelope = self.handle.envelope;
        let mut error = self.handle.error;
        match result.and_then(|page| PageProps::<R>::from_page(&page).map_err(NavigationError::from)) {
            Ok(props) => {
                envelope.set(props.envelope);
                error.set(None);
            }
            Err(err) => {
                warn!(resource = R::NAME, sequence, error = %err, "filter visit failed");
                error.set(Some(err.to_string()));
            }
        }
    }
}
