use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use std::convert::Infallible;
use lod_conneg::{PreferenceTable, RepresentationClass};

/// The representation a request prefers, negotiated from its `Accept` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedRepresentation {
    accept: Option<String>,
    class: Option<RepresentationClass>,
}

impl AcceptedRepresentation {
    pub fn negotiate(accept: Option<String>) -> Self {
        let class = PreferenceTable::parse(accept.as_deref()).preferred_class();
        Self { accept, class }
    }

    /// The raw `Accept` header, if the request had one.
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// The preferred supported representation, `None` if nothing supported is acceptable.
    pub fn class(&self) -> Option<RepresentationClass> {
        self.class
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AcceptedRepresentation {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Repeated header lines are one comma separated list. Opaque bytes never match a
        // supported media range, so they are decoded lossily instead of rejected.
        let values = parts
            .headers
            .get_all(ACCEPT)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()))
            .collect::<Vec<_>>();

        let accept = (!values.is_empty()).then(|| values.join(","));
        Ok(Self::negotiate(accept))
    }
}
