use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::envelope::PaginatedEnvelope;
use crate::domain::entities::filter::PartialFilters;
use crate::domain::entities::resource::Resource;

/// Page object returned by an Inertia visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InertiaPage {
    pub component: String,
    pub props: serde_json::Value,
    pub url: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Error)]
pub enum PropsError {
    #[error("page props are missing `{0}`")]
    Missing(&'static str),
    #[error("page props `{key}` are malformed: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Props of one admin list page: the envelope under the resource name plus
/// the filters the server echoed back.
#[derive(Debug, Clone, PartialEq)]
pub struct PageProps<R: Resource> {
    pub envelope: PaginatedEnvelope<R::Record>,
    pub filters: PartialFilters,
}

impl<R: Resource> PageProps<R> {
    pub fn from_page(page: &InertiaPage) -> Result<Self, PropsError> {
        Self::from_props(&page.props)
    }

    pub fn from_props(props: &serde_json::Value) -> Result<Self, PropsError> {
        let raw_envelope = props.get(R::NAME).ok_or(PropsError::Missing(R::NAME))?;
        let envelope = PaginatedEnvelope::<R::Record>::deserialize(raw_envelope)
            .map_err(|source| PropsError::Malformed {
                key: R::NAME,
                source,
            })?
            .normalized();
        let filters = props
            .get("filters")
            .map(PartialFilters::from_json)
            .unwrap_or_default();
        Ok(Self { envelope, filters })
    }
}
