use futures::future::LocalBoxFuture;
use thiserror::Error;

use crate::domain::entities::page::{InertiaPage, PropsError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route `{0}` is not defined")]
    Unknown(String),
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam { route: String, param: String },
}

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("invalid visit url `{url}`: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("asset version changed, full reload required at {location}")]
    VersionConflict { location: String },
    #[error(transparent)]
    Props(#[from] PropsError),
}

/// Resolves a symbolic route name to a path. Extra parameters that are not
/// placeholders of the route end up in the query string.
pub trait RouteResolver {
    fn resolve(&self, route_name: &str, params: &[(&str, String)]) -> Result<String, RouteError>;

    /// Name of the route whose path is exactly `path`, ignoring any query.
    fn route_for_path(&self, path: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOptions {
    pub preserve_state: bool,
    pub preserve_scroll: bool,
    pub replace: bool,
}

impl VisitOptions {
    /// Filter, sort and pagination changes.
    pub const FILTER_SYNC: Self = Self {
        preserve_state: true,
        preserve_scroll: true,
        replace: true,
    };

    /// Switching to another page.
    pub const PAGE_VISIT: Self = Self {
        preserve_state: false,
        preserve_scroll: false,
        replace: false,
    };

    /// Going back to an entry that is already in the history.
    pub const HISTORY: Self = Self {
        preserve_state: false,
        preserve_scroll: false,
        replace: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRequest {
    pub route_name: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub options: VisitOptions,
    pub sequence: u64,
}

impl VisitRequest {
    /// Path plus encoded query, e.g. `/admin/blogs?page=2&search=visa`.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{separator}{encoded}", self.path)
    }
}

/// Performs GET visits against the server that renders the admin pages.
pub trait Navigator {
    fn visit(&self, request: VisitRequest)
        -> LocalBoxFuture<'static, Result<InertiaPage, NavigationError>>;
}
