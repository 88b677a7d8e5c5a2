use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use lod_conneg::{DispatchConfig, DEFAULT_DOCUMENT_BASE, DEFAULT_HOMEPAGE, DEFAULT_RESOURCE_PREFIX};
use lod_web::DEFAULT_SPARQL_ENDPOINT;
use reqwest::Url;

#[derive(Parser)]
#[command(about, version, name = "lod-server")]
/// Linked Data front end that dereferences resource URIs by 303 redirects
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = "localhost:7878", value_hint = ValueHint::Hostname)]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
        /// SPARQL endpoint that resource descriptions are fetched from with DESCRIBE queries
        #[arg(long, default_value = DEFAULT_SPARQL_ENDPOINT, value_hint = ValueHint::Url)]
        sparql_endpoint: Url,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Print how a request would be answered, without contacting the triple store
    Negotiate {
        /// Request path, e.g. /rm/europeana/00000/ABC
        path: String,
        /// Value of the Accept header
        ///
        /// If omitted, the request is treated as having no Accept header.
        #[arg(short, long)]
        accept: Option<String>,
        #[command(flatten)]
        site: SiteArgs,
    },
}

/// The URI space this server publishes.
#[derive(ClapArgs)]
pub struct SiteArgs {
    /// Project homepage that document requests on the root are redirected to
    #[arg(long, default_value = DEFAULT_HOMEPAGE, value_hint = ValueHint::Url)]
    pub homepage: Url,
    /// Base URL of the human readable record pages
    ///
    /// Document requests are redirected to `<DOCUMENT_BASE><ID>.html`.
    #[arg(long, default_value = DEFAULT_DOCUMENT_BASE, value_hint = ValueHint::Url)]
    pub document_base: Url,
    /// Scheme and authority of the published resource URIs
    #[arg(long, default_value = DEFAULT_RESOURCE_PREFIX, value_hint = ValueHint::Url)]
    pub resource_prefix: Url,
}

impl From<SiteArgs> for DispatchConfig {
    fn from(site: SiteArgs) -> Self {
        Self {
            homepage: site.homepage.into(),
            document_base: site.document_base.into(),
            resource_prefix: site.resource_prefix.as_str().trim_end_matches('/').to_owned(),
        }
    }
}
