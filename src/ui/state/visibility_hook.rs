use dioxus::prelude::*;

use crate::domain::entities::visibility::ColumnVisibility;
use crate::ui::state::app_state::AppServices;
use crate::usecase::services::visibility_service::VisibilityService;

#[derive(Clone)]
pub struct VisibilityHandle {
    pub visibility: Signal<ColumnVisibility>,
    storage_key: &'static str,
    service: VisibilityService,
}

impl VisibilityHandle {
    pub fn toggle(&self, column_key: &str, show: bool) {
        let next = self
            .service
            .toggle(self.storage_key, &self.visibility.read(), column_key, show);
        let mut visibility = self.visibility;
        visibility.set(next);
    }

    pub fn show_all<'a>(&self, column_keys: impl IntoIterator<Item = &'a str>) {
        let next = self
            .service
            .show_all(self.storage_key, &self.visibility.read(), column_keys);
        let mut visibility = self.visibility;
        visibility.set(next);
    }
}

/// Column visibility of the table identified by `storage_key`, loaded once
/// on mount and written through on every change.
pub fn use_column_visibility(storage_key: &'static str) -> VisibilityHandle {
    let services = use_context::<AppServices>();
    let service = services.visibility.clone();
    let visibility = use_signal(|| service.load(storage_key));
    VisibilityHandle {
        visibility,
        storage_key,
        service,
    }
}
