use lod_conneg::DispatchConfig;
use reqwest::Url;

pub const DEFAULT_SPARQL_ENDPOINT: &str = "http://data.mminf.univie.ac.at/sparql";

/// Holds the configuration for a Linked Data web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// Whether CORS is enabled.
    pub cors: bool,
    /// The SPARQL endpoint that resources are described from.
    pub sparql_endpoint: Url,
    /// The URLs redirects are derived from.
    pub dispatch: DispatchConfig,
}
