use crate::locator::{ResourceType, INFORMATION_RESOURCE_PREFIX};

pub const DEFAULT_HOMEPAGE: &str = "http://version1.europeana.eu/web/lod/";
pub const DEFAULT_DOCUMENT_BASE: &str = "http://www.europeana.eu/portal/record/";
pub const DEFAULT_RESOURCE_PREFIX: &str = "http://data.europeana.eu";

/// The URLs the dispatcher derives its redirect targets from.
///
/// Built once at startup and only read afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Where document requests on the root are redirected to.
    pub homepage: String,
    /// The base of the human readable record pages. A record page is `{document_base}{id}.html`.
    pub document_base: String,
    /// The scheme and authority of the published resource URIs, without a trailing slash.
    pub resource_prefix: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            homepage: DEFAULT_HOMEPAGE.to_owned(),
            document_base: DEFAULT_DOCUMENT_BASE.to_owned(),
            resource_prefix: DEFAULT_RESOURCE_PREFIX.to_owned(),
        }
    }
}

impl DispatchConfig {
    /// The human readable page describing the resource `id`.
    pub fn document_url(&self, id: &str) -> String {
        format!("{}{id}.html", self.document_base)
    }

    /// The information resource (data document) of a resource.
    pub fn information_resource_url(&self, resource_type: ResourceType, id: &str) -> String {
        format!(
            "{}{INFORMATION_RESOURCE_PREFIX}{}/{id}",
            self.resource_prefix.trim_end_matches('/'),
            resource_type.path_prefix()
        )
    }

    /// The URI of the resource itself, as used in the triple store.
    pub fn resource_uri(&self, resource_type: ResourceType, id: &str) -> String {
        format!(
            "{}{}/{id}",
            self.resource_prefix.trim_end_matches('/'),
            resource_type.path_prefix()
        )
    }
}
