use async_trait::async_trait;
use oxrdf::{Graph, Triple};
use oxrdfio::{RdfFormat, RdfParseError, RdfParser};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};

/// The formats requested from the SPARQL endpoint, most preferred first.
const DESCRIBE_ACCEPT: &str = "application/n-triples, text/turtle;q=0.9, application/rdf+xml;q=0.8";
/// ASCII characters that may not appear in an IRI reference. Non-ASCII bytes are always encoded.
const IRI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

#[derive(thiserror::Error, Debug)]
pub enum DescribeError {
    #[error("Could not query SPARQL endpoint {endpoint}: {source}")]
    Request {
        endpoint: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("SPARQL endpoint {endpoint} answered with status {status}")]
    Status { endpoint: Url, status: StatusCode },
    #[error("SPARQL endpoint answered with unsupported format '{0}'")]
    UnsupportedFormat(String),
    #[error("Could not parse resource description: {0}")]
    Parse(#[from] RdfParseError),
}

/// A source of resource descriptions, usually a remote triple store.
///
/// An empty graph means that nothing is known about the resource. Implementations must not retry
/// failed requests.
#[async_trait]
pub trait DescribeSource: Send + Sync {
    async fn describe(&self, resource_uri: &str) -> Result<Graph, DescribeError>;
}

/// Describes resources with `DESCRIBE` queries against a SPARQL endpoint.
#[derive(Debug, Clone)]
pub struct SparqlDescribeClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SparqlDescribeClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DescribeSource for SparqlDescribeClient {
    async fn describe(&self, resource_uri: &str) -> Result<Graph, DescribeError> {
        let query = describe_query(resource_uri);
        tracing::debug!(endpoint = %self.endpoint, %query, "Describing resource");

        let request_error = |source| DescribeError::Request {
            endpoint: self.endpoint.clone(),
            source,
        };
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query.as_str())])
            .header(ACCEPT, DESCRIBE_ACCEPT)
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(DescribeError::Status {
                endpoint: self.endpoint.clone(),
                status: response.status(),
            });
        }

        let format = match response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            Some(content_type) => RdfFormat::from_media_type(content_type)
                .ok_or_else(|| DescribeError::UnsupportedFormat(content_type.to_owned()))?,
            None => RdfFormat::NTriples,
        };
        let body = response.bytes().await.map_err(request_error)?;

        parse_description(format, &body)
    }
}

/// Builds the `DESCRIBE` query for a resource.
///
/// Characters that may not appear in an IRI reference, and all non-ASCII characters, are
/// percent-encoded, so the identifier can never leave the IRI.
pub fn describe_query(resource_uri: &str) -> String {
    format!("DESCRIBE <{}>", utf8_percent_encode(resource_uri, IRI_UNSAFE))
}

/// Parses a description. IRIs are not validated, descriptions with invalid IRIs are still served.
pub fn parse_description(format: RdfFormat, body: &[u8]) -> Result<Graph, DescribeError> {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(format).unchecked().for_reader(body) {
        graph.insert(&Triple::from(quad?));
    }
    Ok(graph)
}
