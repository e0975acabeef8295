use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::domain::entities::resource::{Blogs, Courses, Leads, Resource, Universities, Users};
use crate::usecase::ports::navigator::{Navigator, RouteResolver};
use crate::usecase::services::history::SessionHistory;
use crate::usecase::services::visibility_service::VisibilityService;

/// Collaborators shared with every page through the Dioxus context.
#[derive(Clone)]
pub struct AppServices {
    pub navigator: Rc<dyn Navigator>,
    pub routes: Rc<dyn RouteResolver>,
    pub visibility: VisibilityService,
    pub config: AppConfig,
    pub history: Rc<RefCell<SessionHistory>>,
}

impl AppServices {
    /// Origin used for row action links.
    pub fn link_base(&self) -> String {
        self.config
            .base_url
            .as_str()
            .trim_end_matches('/')
            .to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Universities,
    Courses,
    Blogs,
    Leads,
    Users,
}

impl AdminSection {
    pub const ALL: [AdminSection; 5] = [
        AdminSection::Universities,
        AdminSection::Courses,
        AdminSection::Blogs,
        AdminSection::Leads,
        AdminSection::Users,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AdminSection::Universities => Universities::TITLE,
            AdminSection::Courses => Courses::TITLE,
            AdminSection::Blogs => Blogs::TITLE,
            AdminSection::Leads => Leads::TITLE,
            AdminSection::Users => Users::TITLE,
        }
    }

    pub fn index_route(self) -> &'static str {
        match self {
            AdminSection::Universities => Universities::INDEX_ROUTE,
            AdminSection::Courses => Courses::INDEX_ROUTE,
            AdminSection::Blogs => Blogs::INDEX_ROUTE,
            AdminSection::Leads => Leads::INDEX_ROUTE,
            AdminSection::Users => Users::INDEX_ROUTE,
        }
    }

    pub fn from_route(route_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.index_route() == route_name)
    }
}

pub struct AppState {
    pub section: Signal<AdminSection>,
    pub status: Signal<String>,
    pub busy: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            section: use_signal(AdminSection::default),
            status: use_signal(|| "Ready".to_string()),
            busy: use_signal(|| false),
        }
    }
}
