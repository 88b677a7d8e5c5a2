use anyhow::{bail, Context};
use lod_conneg::RepresentationClass;
use oxrdf::Graph;
use oxrdfio::{RdfFormat, RdfSerializer};

/// The serialization used for a representation class, `None` for documents.
pub fn rdf_format(class: RepresentationClass) -> Option<RdfFormat> {
    match class {
        RepresentationClass::Html => None,
        RepresentationClass::RdfXml => Some(RdfFormat::RdfXml),
        RepresentationClass::Turtle => Some(RdfFormat::Turtle),
        // N-Triples is valid N3.
        RepresentationClass::N3 => Some(RdfFormat::NTriples),
    }
}

/// Serializes a resource description.
///
/// RDF/XML output starts with an XML declaration and uses no property attributes.
pub fn serialize_graph(graph: &Graph, class: RepresentationClass) -> anyhow::Result<Vec<u8>> {
    let Some(format) = rdf_format(class) else {
        bail!("{class} is not an RDF serialization");
    };

    let mut serializer = RdfSerializer::from_format(format).for_writer(Vec::new());
    for triple in graph.iter() {
        serializer
            .serialize_triple(triple)
            .with_context(|| format!("Could not serialize triple as {class}"))?;
    }
    serializer
        .finish()
        .context("Could not finalize serializer")
}
