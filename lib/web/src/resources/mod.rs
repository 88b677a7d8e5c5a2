use crate::resources::dereference::handle_dereference;
use crate::AppState;
use axum::routing::get;
use axum::Router;

mod content_negotiation;
mod dereference;
mod error_page;

pub use content_negotiation::AcceptedRepresentation;
pub use error_page::render_error_page;

/// Every path is dereferenced, unknown ones are answered by the resolver with a 404.
pub fn create_resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handle_dereference))
        .route("/{*path}", get(handle_dereference))
}
