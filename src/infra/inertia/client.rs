use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use tracing::{debug, info};
use url::Url;

use crate::domain::entities::page::InertiaPage;
use crate::usecase::ports::navigator::{NavigationError, Navigator, VisitRequest};

pub const INERTIA_HEADER: &str = "X-Inertia";
pub const VERSION_HEADER: &str = "X-Inertia-Version";
pub const LOCATION_HEADER: &str = "X-Inertia-Location";

/// GET visits using the Inertia JSON protocol. The asset version announced
/// by the server is echoed on every following request.
#[derive(Clone)]
pub struct InertiaClient {
    http: reqwest::Client,
    base_url: Url,
    version: Arc<Mutex<Option<String>>>,
}

impl InertiaClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            version: Arc::new(Mutex::new(None)),
        }
    }

    /// Appends the visit path to the base URL's own path, so a base such as
    /// `http://host/app/` keeps its `/app` prefix.
    pub fn endpoint(&self, request: &VisitRequest) -> Result<Url, NavigationError> {
        let url = request.url();
        let mut origin = self.base_url.clone();
        origin.set_query(None);
        origin.set_fragment(None);
        let joined = format!("{}{url}", origin.as_str().trim_end_matches('/'));
        Url::parse(&joined).map_err(|source| NavigationError::Url { url, source })
    }

    pub fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(INERTIA_HEADER, HeaderValue::from_static("true"));
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html, application/xhtml+xml"),
        );
        let version = self.version.lock().ok().and_then(|guard| guard.clone());
        if let Some(value) = version.and_then(|v| HeaderValue::from_str(&v).ok()) {
            headers.insert(VERSION_HEADER, value);
        }
        headers
    }
}

impl Navigator for InertiaClient {
    fn visit(
        &self,
        request: VisitRequest,
    ) -> LocalBoxFuture<'static, Result<InertiaPage, NavigationError>> {
        let endpoint = self.endpoint(&request);
        let headers = self.request_headers();
        let http = self.http.clone();
        let version = Arc::clone(&self.version);

        Box::pin(async move {
            let endpoint = endpoint?;
            debug!(url = %endpoint, sequence = request.sequence, "inertia visit");
            let response = http.get(endpoint).headers(headers).send().await?;

            let status = response.status();
            if status == StatusCode::CONFLICT {
                let location = response
                    .headers()
                    .get(LOCATION_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                info!(%location, "inertia asset version conflict");
                return Err(NavigationError::VersionConflict { location });
            }
            if !status.is_success() {
                return Err(NavigationError::Status(status.as_u16()));
            }

            let page: InertiaPage = response.json().await?;
            if let Ok(mut current) = version.lock() {
                if page.version.is_some() {
                    current.clone_from(&page.version);
                }
            }
            Ok(page)
        })
    }
}
