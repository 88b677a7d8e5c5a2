#![allow(clippy::print_stdout)]
use crate::cli::{Args, Command};
use clap::Parser;
use lod_conneg::{NegotiationDispatcher, NegotiationOutcome};
use lod_web::{describe_query, ServerConfig};
use tracing_subscriber::EnvFilter;

mod cli;

/// Used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "lod_web=info,lod_server=info,tower_http=info";

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Args::parse();
    match matches.command {
        Command::Serve {
            bind,
            cors,
            sparql_endpoint,
            site,
        } => {
            lod_web::serve(ServerConfig {
                bind,
                cors,
                sparql_endpoint,
                dispatch: site.into(),
            })
            .await
        }
        Command::Negotiate { path, accept, site } => {
            let dispatcher = NegotiationDispatcher::new(site.into());
            let outcome = dispatcher.negotiate(&path, accept.as_deref());
            println!("{}", format_outcome(&outcome));
            Ok(())
        }
    }
}

/// Renders an outcome as the status line and headers of the response it produces.
fn format_outcome(outcome: &NegotiationOutcome) -> String {
    match outcome {
        NegotiationOutcome::DeliverDocument { target } => {
            format!("303 See Other\nLocation: {target}\nContent-Type: text/html")
        }
        NegotiationOutcome::RedirectToDataEndpoint { target, class } => format!(
            "303 See Other\nLocation: {target}\nContent-Type: {}",
            class.media_type()
        ),
        NegotiationOutcome::DeliverData {
            resource_uri,
            class,
        } => format!(
            "200 OK\nContent-Type: {}\nVary: Accept\n\n{}",
            class.media_type(),
            describe_query(resource_uri)
        ),
        NegotiationOutcome::RootDataNotSupported { .. } => {
            "406 Not Acceptable\nContent-Type: text/plain".to_owned()
        }
        NegotiationOutcome::NotAcceptable => "406 Not Acceptable".to_owned(),
        NegotiationOutcome::NotFound { reason } => format!("404 Not Found\n\n{reason}"),
    }
}
