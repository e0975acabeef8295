pub mod blogs;
pub mod courses;
pub mod leads;
pub mod universities;
pub mod users;

use dioxus::prelude::*;

use crate::domain::entities::filter::{FilterState, FROM, SEARCH, TO};
use crate::domain::entities::page::PageProps;
use crate::domain::entities::resource::Resource;
use crate::ui::components::data_table::DataTable;
use crate::ui::components::filters::{DateRange, SearchInput, SelectFilter, SelectOption};
use crate::ui::components::pagination::PaginationBar;
use crate::ui::components::toolbar::Toolbar;
use crate::ui::components::view_options::{ColumnOption, ViewOptions};
use crate::ui::state::app_state::AppServices;
use crate::ui::state::filter_hook::{use_resource_filters, FilterHandle};
use crate::ui::state::visibility_hook::{use_column_visibility, VisibilityHandle};
use crate::ui::table::columns::ColumnError;
use crate::ui::table::view_model::{TableConfig, TableInput, TableView, Viewport};
use crate::usecase::services::pagination::PaginationState;
use crate::usecase::services::sort_controller::sort_state;

/// Hooks behind one admin list page.
pub struct ResourceList<R: Resource> {
    pub filters: FilterHandle<R>,
    pub visibility: VisibilityHandle,
    width: Signal<f64>,
    services: AppServices,
}

pub fn use_resource_list<R: Resource>(initial: PageProps<R>) -> ResourceList<R> {
    let services = use_context::<AppServices>();
    let filters = use_resource_filters::<R>(initial);
    let visibility = use_column_visibility(R::STORAGE_KEY);
    let width = use_signal(|| 0.0_f64);
    ResourceList {
        filters,
        visibility,
        width,
        services,
    }
}

impl<R: Resource> ResourceList<R> {
    pub fn state(&self) -> FilterState<R> {
        self.filters.filters.read().clone()
    }

    pub fn search_input(&self) -> Element {
        let handle = self.filters;
        let value = self.state().text(SEARCH);
        rsx! {
            SearchInput {
                value,
                placeholder: format!("Search {}", R::TITLE.to_lowercase()),
                on_input: move |value: String| handle.set_field(SEARCH, value),
            }
        }
    }

    pub fn select(&self, key: &'static str, label: &str, options: &[(&str, &str)]) -> Element {
        let handle = self.filters;
        let value = self.state().text(key);
        let options = options
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .collect::<Vec<_>>();
        rsx! {
            SelectFilter {
                label: label.to_string(),
                value,
                options,
                on_change: move |value: String| handle.set_field(key, value),
            }
        }
    }

    pub fn date_range(&self) -> Element {
        let handle = self.filters;
        let state = self.state();
        rsx! {
            DateRange {
                from: state.text(FROM),
                to: state.text(TO),
                on_from: move |value: String| handle.set_field(FROM, value),
                on_to: move |value: String| handle.set_field(TO, value),
            }
        }
    }

    pub fn render(
        &self,
        config: Result<TableConfig<R::Record>, ColumnError>,
        controls: Element,
    ) -> Element {
        let title = R::TITLE;
        let config = match config {
            Ok(config) => config,
            Err(err) => {
                return rsx! {
                    section {
                        h2 { "{title}" }
                        p { style: "color: #b91c1c;", "Table configuration error: {err}" }
                    }
                };
            }
        };

        let filters = self.state();
        let envelope = self.filters.envelope.read().clone();
        let visibility = self.visibility.visibility.read().clone();
        let viewport = Viewport::from_width(
            *self.width.read(),
            self.services.config.mobile_breakpoint,
        );
        let view = TableView::build(
            &config,
            TableInput {
                envelope: &envelope,
                sort: &sort_state(&filters),
                visibility: &visibility,
                viewport,
                filtered: filters.has_active_filters(),
                routes: self.services.routes.as_ref(),
            },
        );
        let pagination = PaginationState::from_envelope(&filters, &envelope);
        let hidden_count = view.hidden_count;
        let column_options = config
            .columns
            .iter()
            .map(|column| ColumnOption {
                key: column.key,
                label: column.label,
            })
            .collect::<Vec<_>>();
        let all_keys = config.columns.keys().collect::<Vec<_>>();
        let link_base = self.services.link_base();
        let loading = *self.filters.loading.read();
        let error = self.filters.error.read().clone();

        let handle = self.filters;
        let toggle_handle = self.visibility.clone();
        let show_all_handle = self.visibility.clone();
        let mut width = self.width;

        rsx! {
            section { style: "display: flex; flex-direction: column; min-height: 0; flex: 1;",
                h2 { style: "margin: 0;", "{title}" }
                Toolbar {
                    show_reset: filters.has_active_filters(),
                    loading,
                    on_reset: move |_| handle.reset(),
                    view_options: rsx! {
                        ViewOptions {
                            columns: column_options,
                            visibility,
                            hidden_count,
                            on_toggle: move |(key, show): (&'static str, bool)| toggle_handle.toggle(key, show),
                            on_show_all: move |_| show_all_handle.show_all(all_keys.iter().copied()),
                        }
                    },
                    {controls}
                }
                if let Some(error) = error {
                    div { style: "color: #b91c1c; margin-bottom: 8px;", "{error}" }
                }
                DataTable {
                    view,
                    link_base,
                    on_sort: move |(key, desc): (&'static str, Option<bool>)| handle.sort(key, desc),
                    on_width: move |next: f64| {
                        if *width.peek() != next {
                            width.set(next);
                        }
                    },
                }
                PaginationBar {
                    state: pagination,
                    on_page: move |target| handle.go_to(target),
                    on_per_page: move |choice| handle.set_per_page(choice),
                }
            }
        }
    }
}
