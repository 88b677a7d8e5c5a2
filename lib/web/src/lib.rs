use anyhow::Context;
use axum::Router;
use lod_conneg::NegotiationDispatcher;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod describe;
mod error;
mod resources;
mod serialize;
mod state;

pub use config::{ServerConfig, DEFAULT_SPARQL_ENDPOINT};
pub use describe::{
    describe_query, parse_description, DescribeError, DescribeSource, SparqlDescribeClient,
};
pub use error::LodServerError;
pub use resources::AcceptedRepresentation;
pub use serialize::{rdf_format, serialize_graph};
pub use state::AppState;

use crate::resources::create_resource_routes;

/// Builds the router that dereferences resource URIs.
pub fn create_router(state: AppState) -> Router {
    create_resource_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(
        sparql_endpoint = %config.sparql_endpoint,
        resource_prefix = %config.dispatch.resource_prefix,
        "Starting Linked Data server"
    );

    let app_state = AppState {
        dispatcher: Arc::new(NegotiationDispatcher::new(config.dispatch)),
        describe: Arc::new(SparqlDescribeClient::new(config.sparql_endpoint)),
    };

    let app = create_router(app_state);
    let app = if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Could not bind to {}", config.bind))?;
    tracing::info!(address = %listener.local_addr()?, "Listening");

    Ok(axum::serve(listener, app).await?)
}
