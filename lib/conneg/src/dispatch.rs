use crate::config::DispatchConfig;
use crate::locator::{LocatorError, ResourceLocator};
use crate::preference::PreferenceTable;
use crate::representation::RepresentationClass;

/// What the transport layer has to do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationOutcome {
    /// Redirect (303) to a human readable document.
    DeliverDocument { target: String },
    /// Redirect (303) from a resource to its information resource.
    RedirectToDataEndpoint {
        target: String,
        class: RepresentationClass,
    },
    /// Describe `resource_uri` from the triple store and serialize it as `class`.
    DeliverData {
        resource_uri: String,
        class: RepresentationClass,
    },
    /// RDF was requested for the root, for which no description exists yet.
    RootDataNotSupported { class: RepresentationClass },
    /// The client accepts none of the supported representations.
    NotAcceptable,
    /// The path does not denote a published resource.
    NotFound { reason: LocatorError },
}

/// Combines the structure of a request path and the negotiated representation into an outcome.
#[derive(Debug, Clone, Default)]
pub struct NegotiationDispatcher {
    config: DispatchConfig,
}

impl NegotiationDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Resolves `path`, negotiates `accept`, and dispatches the result.
    pub fn negotiate(&self, path: &str, accept: Option<&str>) -> NegotiationOutcome {
        let class = PreferenceTable::parse(accept).preferred_class();
        self.dispatch(ResourceLocator::resolve(path), class)
    }

    pub fn dispatch(
        &self,
        locator: Result<ResourceLocator, LocatorError>,
        class: Option<RepresentationClass>,
    ) -> NegotiationOutcome {
        let locator = match locator {
            Ok(locator) => locator,
            Err(reason) => return NegotiationOutcome::NotFound { reason },
        };
        let Some(class) = class else {
            return NegotiationOutcome::NotAcceptable;
        };

        match locator {
            ResourceLocator::Root if class.is_data() => {
                NegotiationOutcome::RootDataNotSupported { class }
            }
            ResourceLocator::Root => NegotiationOutcome::DeliverDocument {
                target: self.config.homepage.clone(),
            },
            ResourceLocator::Resource { id, .. } if !class.is_data() => {
                NegotiationOutcome::DeliverDocument {
                    target: self.config.document_url(&id),
                }
            }
            ResourceLocator::Resource {
                information_resource: false,
                resource_type,
                id,
            } => NegotiationOutcome::RedirectToDataEndpoint {
                target: self.config.information_resource_url(resource_type, &id),
                class,
            },
            ResourceLocator::Resource {
                information_resource: true,
                resource_type,
                id,
            } => NegotiationOutcome::DeliverData {
                resource_uri: self.config.resource_uri(resource_type, &id),
                class,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negotiate(path: &str, accept: Option<&str>) -> NegotiationOutcome {
        NegotiationDispatcher::default().negotiate(path, accept)
    }

    #[test]
    fn root_document_redirects_to_homepage() {
        assert_eq!(
            negotiate("/", Some("text/html")),
            NegotiationOutcome::DeliverDocument {
                target: "http://version1.europeana.eu/web/lod/".to_owned()
            }
        );
        assert_eq!(
            negotiate("/", None),
            NegotiationOutcome::DeliverDocument {
                target: "http://version1.europeana.eu/web/lod/".to_owned()
            }
        );
    }

    #[test]
    fn root_data_is_not_supported() {
        assert_eq!(
            negotiate("/", Some("application/rdf+xml")),
            NegotiationOutcome::RootDataNotSupported {
                class: RepresentationClass::RdfXml
            }
        );
        assert_eq!(
            negotiate("/", Some("text/turtle")),
            NegotiationOutcome::RootDataNotSupported {
                class: RepresentationClass::Turtle
            }
        );
        assert_eq!(negotiate("/", Some("image/png")), NegotiationOutcome::NotAcceptable);
    }

    #[test]
    fn document_request_redirects_to_record_page() {
        assert_eq!(
            negotiate("/rm/europeana/00000/ABC", Some("text/html")),
            NegotiationOutcome::DeliverDocument {
                target: "http://www.europeana.eu/portal/record/00000/ABC.html".to_owned()
            }
        );
        // Also for information resources.
        assert_eq!(
            negotiate("/data/item/00000/ABC", Some("text/html")),
            NegotiationOutcome::DeliverDocument {
                target: "http://www.europeana.eu/portal/record/00000/ABC.html".to_owned()
            }
        );
    }

    #[test]
    fn data_request_on_resource_redirects_to_information_resource() {
        assert_eq!(
            negotiate("/rm/europeana/00000/ABC", Some("application/rdf+xml")),
            NegotiationOutcome::RedirectToDataEndpoint {
                target: "http://data.europeana.eu/data/rm/europeana/00000/ABC".to_owned(),
                class: RepresentationClass::RdfXml,
            }
        );
    }

    #[test]
    fn data_request_on_information_resource_delivers_data() {
        assert_eq!(
            negotiate("/data/rm/europeana/00000/ABC", Some("text/n3")),
            NegotiationOutcome::DeliverData {
                resource_uri: "http://data.europeana.eu/rm/europeana/00000/ABC".to_owned(),
                class: RepresentationClass::N3,
            }
        );
    }

    #[test]
    fn unsupported_accept_is_not_acceptable() {
        assert_eq!(
            negotiate("/rm/europeana/00000/ABC", Some("image/png")),
            NegotiationOutcome::NotAcceptable
        );
        assert_eq!(
            negotiate("/data/rm/europeana/00000/ABC", Some("image/png")),
            NegotiationOutcome::NotAcceptable
        );
    }

    #[test]
    fn invalid_path_is_not_found_regardless_of_accept() {
        for accept in [Some("text/html"), Some("image/png"), None] {
            assert_eq!(
                negotiate("/unknown/prefix/x", accept),
                NegotiationOutcome::NotFound {
                    reason: LocatorError::UnknownResourceType {
                        path: "/unknown/prefix/x".to_owned()
                    }
                }
            );
        }
    }

    #[test]
    fn uses_configured_urls() {
        let dispatcher = NegotiationDispatcher::new(DispatchConfig {
            homepage: "https://example.org/".to_owned(),
            document_base: "https://example.org/record/".to_owned(),
            resource_prefix: "https://data.example.org".to_owned(),
        });
        assert_eq!(
            dispatcher.negotiate("/", Some("text/html")),
            NegotiationOutcome::DeliverDocument {
                target: "https://example.org/".to_owned()
            }
        );
        assert_eq!(
            dispatcher.negotiate("/item/1", Some("text/turtle")),
            NegotiationOutcome::RedirectToDataEndpoint {
                target: "https://data.example.org/data/item/1".to_owned(),
                class: RepresentationClass::Turtle,
            }
        );
    }
}
