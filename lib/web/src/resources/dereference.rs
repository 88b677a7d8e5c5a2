use crate::error::LodServerError;
use crate::resources::AcceptedRepresentation;
use crate::serialize::serialize_graph;
use crate::AppState;
use anyhow::Context;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, LOCATION, VARY};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use lod_conneg::{NegotiationOutcome, RepresentationClass, ResourceLocator};

const ROOT_DATA_NOT_SUPPORTED: &str = "Data requests on root URI are not supported yet.";

/// Dereferences a resource URI according to the 303 URI-forwarding pattern.
pub async fn handle_dereference(
    State(state): State<AppState>,
    uri: Uri,
    accepted: AcceptedRepresentation,
) -> Result<Response, LodServerError> {
    let path = uri.path();
    let outcome = state
        .dispatcher
        .dispatch(ResourceLocator::resolve(path), accepted.class());
    tracing::debug!(path, accept = accepted.accept(), ?outcome, "Negotiated request");

    match outcome {
        NegotiationOutcome::DeliverDocument { target } => {
            see_other(&target, RepresentationClass::Html)
        }
        NegotiationOutcome::RedirectToDataEndpoint { target, class } => see_other(&target, class),
        NegotiationOutcome::DeliverData {
            resource_uri,
            class,
        } => deliver_data(&state, &resource_uri, class).await,
        NegotiationOutcome::RootDataNotSupported { .. } => Ok((
            StatusCode::NOT_ACCEPTABLE,
            [(CONTENT_TYPE, "text/plain")],
            ROOT_DATA_NOT_SUPPORTED,
        )
            .into_response()),
        NegotiationOutcome::NotAcceptable => Err(LodServerError::NotAcceptable(format!(
            "Accept header '{}' not supported.",
            accepted.accept().unwrap_or_default()
        ))),
        NegotiationOutcome::NotFound { reason } => Err(reason.into()),
    }
}

fn see_other(target: &str, class: RepresentationClass) -> Result<Response, LodServerError> {
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(LOCATION, target)
        .header(CONTENT_TYPE, class.media_type())
        .body(Body::empty())
        .with_context(|| format!("Could not build redirect to '{target}'"))
        .map_err(LodServerError::Internal)
}

async fn deliver_data(
    state: &AppState,
    resource_uri: &str,
    class: RepresentationClass,
) -> Result<Response, LodServerError> {
    let description = state
        .describe
        .describe(resource_uri)
        .await
        .inspect_err(|error| tracing::warn!(resource_uri, %error, "Could not describe resource"))?;

    if description.is_empty() {
        return Err(LodServerError::NoData(resource_uri.to_owned()));
    }

    let body = serialize_graph(&description, class).map_err(LodServerError::Internal)?;
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, class.media_type())
        .header(VARY, "Accept")
        .body(Body::from(body))
        .context("Could not build response")
        .map_err(LodServerError::Internal)
}
