use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::entities::filter::PartialFilters;
use crate::domain::entities::page::{InertiaPage, PageProps, PropsError};
use crate::domain::entities::resource::{Blogs, Courses, Leads, Universities, Users};
use crate::infra::inertia::client::InertiaClient;
use crate::infra::inertia::routes::RouteTable;
use crate::ui::pages::blogs::BlogsPage;
use crate::ui::pages::courses::CoursesPage;
use crate::ui::pages::leads::LeadsPage;
use crate::ui::pages::universities::UniversitiesPage;
use crate::ui::pages::users::UsersPage;
use crate::ui::state::app_state::{AdminSection, AppServices, AppState};
use crate::ui::styles::{button_style, BUTTON};
use crate::usecase::ports::navigator::{NavigationError, VisitOptions, VisitRequest};
use crate::usecase::ports::visibility_store::VisibilityStore;
use crate::usecase::services::history::SessionHistory;
use crate::usecase::services::visibility_service::VisibilityService;

/// Props of the list page currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadedPage {
    Universities(PageProps<Universities>),
    Courses(PageProps<Courses>),
    Blogs(PageProps<Blogs>),
    Leads(PageProps<Leads>),
    Users(PageProps<Users>),
}

impl LoadedPage {
    pub fn from_page(section: AdminSection, page: &InertiaPage) -> Result<Self, PropsError> {
        Ok(match section {
            AdminSection::Universities => LoadedPage::Universities(PageProps::from_page(page)?),
            AdminSection::Courses => LoadedPage::Courses(PageProps::from_page(page)?),
            AdminSection::Blogs => LoadedPage::Blogs(PageProps::from_page(page)?),
            AdminSection::Leads => LoadedPage::Leads(PageProps::from_page(page)?),
            AdminSection::Users => LoadedPage::Users(PageProps::from_page(page)?),
        })
    }
}

/// A visit of a section's index route made by the shell itself.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionVisit {
    pub section: AdminSection,
    pub query: Vec<(String, String)>,
    pub options: VisitOptions,
}

impl SectionVisit {
    pub fn index(section: AdminSection) -> Self {
        Self {
            section,
            query: Vec::new(),
            options: VisitOptions::PAGE_VISIT,
        }
    }
}

pub fn build_services(config: AppConfig) -> AppServices {
    let store = open_visibility_store(&config);
    AppServices {
        navigator: Rc::new(InertiaClient::new(config.base_url.clone())),
        routes: Rc::new(RouteTable::admin()),
        visibility: VisibilityService::new(store),
        config,
        history: Rc::new(RefCell::new(SessionHistory::new())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_visibility_store(config: &AppConfig) -> Arc<dyn VisibilityStore> {
    use crate::infra::memory::MemoryVisibilityStore;
    use crate::infra::sqlite::repo::SqliteVisibilityStore;

    let Some(db_path) = config.db_path.clone() else {
        warn!("no data directory, column visibility is kept in memory");
        return Arc::new(MemoryVisibilityStore::new());
    };
    match SqliteVisibilityStore::open(db_path.clone()) {
        Ok(store) => {
            info!(db_path = %db_path.display(), "column visibility store ready");
            Arc::new(store)
        }
        Err(err) => {
            warn!(db_path = %db_path.display(), error = %err, "falling back to in-memory column visibility");
            Arc::new(MemoryVisibilityStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_visibility_store(_config: &AppConfig) -> Arc<dyn VisibilityStore> {
    Arc::new(crate::infra::web::local_storage::LocalStorageVisibilityStore)
}

/// Splits `/admin/blogs?search=visa` into path and parsed filters.
pub fn split_url(url: &str) -> (&str, PartialFilters) {
    match url.split_once('?') {
        Some((path, query)) => (path, PartialFilters::from_query(query)),
        None => (url, PartialFilters::default()),
    }
}

fn section_button_style(active: bool) -> String {
    if active {
        format!("{BUTTON} background: #1d4ed8; color: #fff; border-color: #1d4ed8;")
    } else {
        BUTTON.to_string()
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let services = use_hook(|| build_services(config));
    use_context_provider(|| services.clone());

    let AppState {
        mut section,
        mut status,
        mut busy,
    } = AppState::new();
    let mut page = use_signal(|| None::<LoadedPage>);
    let mut generation = use_signal(|| 0_u64);
    let mut latest = use_signal(|| 0_u64);

    let open = use_callback({
        let services = services.clone();
        move |visit: SectionVisit| {
            let route_name = visit.section.index_route();
            let path = match services.routes.resolve(route_name, &[]) {
                Ok(path) => path,
                Err(err) => {
                    warn!(route = route_name, error = %err, "cannot open section");
                    status.set(err.to_string());
                    return;
                }
            };
            let sequence = *latest.peek() + 1;
            latest.set(sequence);
            let request = VisitRequest {
                route_name: route_name.to_string(),
                path,
                query: visit.query,
                options: visit.options,
                sequence,
            };
            services.history.borrow_mut().record(&request);
            section.set(visit.section);
            busy.set(true);

            let target = visit.section;
            let navigator = Rc::clone(&services.navigator);
            spawn(async move {
                info!(url = %request.url(), sequence, "page visit");
                let result = navigator.visit(request).await;
                if *latest.peek() != sequence {
                    return;
                }
                busy.set(false);
                match result.and_then(|loaded| {
                    LoadedPage::from_page(target, &loaded).map_err(NavigationError::from)
                }) {
                    Ok(loaded) => {
                        page.set(Some(loaded));
                        generation += 1;
                        status.set(format!("{} loaded", target.title()));
                    }
                    Err(err) => {
                        warn!(section = target.title(), error = %err, "page visit failed");
                        page.set(None);
                        status.set(format!("Could not load {}: {err}", target.title()));
                    }
                }
            });
        }
    });

    // Runs after the first render; the visit writes signals this component reads.
    use_effect(move || open.call(SectionVisit::index(AdminSection::default())));

    let go_back = {
        let services = services.clone();
        move |_: Event<MouseData>| {
            let previous = services.history.borrow_mut().back();
            let Some(url) = previous else {
                return;
            };
            let (path, filters) = split_url(&url);
            let target = services
                .routes
                .route_for_path(path)
                .and_then(|route| AdminSection::from_route(&route));
            match target {
                Some(target) => open.call(SectionVisit {
                    section: target,
                    query: filters.query_pairs(),
                    options: VisitOptions::HISTORY,
                }),
                None => status.set(format!("No list page for {url}")),
            }
        }
    };

    let can_go_back = services.history.borrow().can_go_back();
    let active = section();
    let key = generation();

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; box-sizing: border-box; padding: 16px; gap: 8px; font-family: system-ui, sans-serif;",
            nav { style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
                button {
                    style: button_style(can_go_back),
                    disabled: !can_go_back,
                    onclick: go_back,
                    "← Back"
                }
                for item in AdminSection::ALL {
                    button {
                        key: "{item.title()}",
                        style: section_button_style(item == active),
                        onclick: move |_| open.call(SectionVisit::index(item)),
                        "{item.title()}"
                    }
                }
            }
            {match page() {
                Some(LoadedPage::Universities(props)) => rsx! {
                    UniversitiesPage { key: "{key}", initial: props }
                },
                Some(LoadedPage::Courses(props)) => rsx! {
                    CoursesPage { key: "{key}", initial: props }
                },
                Some(LoadedPage::Blogs(props)) => rsx! {
                    BlogsPage { key: "{key}", initial: props }
                },
                Some(LoadedPage::Leads(props)) => rsx! {
                    LeadsPage { key: "{key}", initial: props }
                },
                Some(LoadedPage::Users(props)) => rsx! {
                    UsersPage { key: "{key}", initial: props }
                },
                None => rsx! {
                    p { style: "color: #777;", if busy() { "Loading…" } else { "Nothing to show." } }
                },
            }}
            footer { style: "color: #555; font-size: 13px;", "{status}" }
        }
    }
}
