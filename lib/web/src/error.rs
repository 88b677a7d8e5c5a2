use crate::describe::DescribeError;
use crate::resources::render_error_page;
use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use lod_conneg::LocatorError;

#[derive(thiserror::Error, Debug)]
pub enum LodServerError {
    #[error("Not found: {0}")]
    NotFound(#[from] LocatorError),
    #[error("No data about {0}")]
    NoData(String),
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),
    #[error("Triple store failure: {0}")]
    Upstream(#[from] DescribeError),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for LodServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            LodServerError::NotFound(error) => {
                return render_error_page(
                    StatusCode::NOT_FOUND,
                    "The requested resource does not exist on this server.",
                    Some(error.path()),
                )
                .into_response();
            }
            LodServerError::NoData(uri) => {
                return render_error_page(
                    StatusCode::NOT_FOUND,
                    "No information about the requested resource is available.",
                    Some(&uri),
                )
                .into_response();
            }
            LodServerError::NotAcceptable(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            LodServerError::Upstream(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            LodServerError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        (status, [(CONTENT_TYPE, "text/plain")], message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;

    fn status(error: LodServerError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn maps_errors_to_status_codes() {
        let path = "/foo/1".to_owned();
        assert_eq!(
            status(LocatorError::UnknownResourceType { path }.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(LodServerError::NoData("http://data.europeana.eu/item/1".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(LodServerError::NotAcceptable("image/png".to_owned())),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            status(
                DescribeError::Status {
                    endpoint: Url::parse("http://localhost:8890/sparql").unwrap(),
                    status: StatusCode::SERVICE_UNAVAILABLE,
                }
                .into()
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status(LodServerError::Internal(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
