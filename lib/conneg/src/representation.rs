use std::fmt;

/// The representations this front end can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationClass {
    /// A human readable document, delivered by redirecting to a web page.
    Html,
    RdfXml,
    Turtle,
    /// Served as N-Triples, which every N3 consumer reads.
    N3,
}

impl RepresentationClass {
    /// The canonical `Content-Type` of responses in this representation.
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::RdfXml => "application/rdf+xml; charset=UTF-8",
            Self::Turtle => "text/turtle; charset=UTF-8",
            Self::N3 => "text/n3; charset=UTF-8",
        }
    }

    /// Whether this representation is RDF data rather than a document.
    pub fn is_data(self) -> bool {
        !matches!(self, Self::Html)
    }

    /// Whether `media_range` (lower-case) falls into this representation class.
    pub fn matches(self, media_range: &str) -> bool {
        CLASSIFICATION_RULES
            .iter()
            .find(|(class, _)| *class == self)
            .is_some_and(|(_, patterns)| patterns.iter().any(|p| p.matches(media_range)))
    }
}

impl fmt::Display for RepresentationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "HTML",
            Self::RdfXml => "RDF/XML",
            Self::Turtle => "Turtle",
            Self::N3 => "N3",
        })
    }
}

/// A string rule that a media range is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRangePattern {
    /// The media range contains the text anywhere.
    Infix(&'static str),
    /// The media range is exactly the text.
    Exact(&'static str),
}

impl MediaRangePattern {
    pub fn matches(self, media_range: &str) -> bool {
        match self {
            Self::Infix(text) => media_range.contains(text),
            Self::Exact(text) => media_range == text,
        }
    }
}

/// The classification rules in precedence order. A media range belongs to the first class with a
/// matching pattern, so e.g. `text/rdf+n3` is RDF/XML and `*/*` is HTML.
pub const CLASSIFICATION_RULES: [(RepresentationClass, &[MediaRangePattern]); 4] = {
    use MediaRangePattern::{Exact, Infix};
    [
        (
            RepresentationClass::RdfXml,
            &[
                Infix("rdf"),
                Infix("rdf/xml"),
                Infix("application/rdf+xml"),
            ],
        ),
        (
            RepresentationClass::Html,
            &[
                Infix("application/xml"),
                Infix("text/html"),
                Infix("application/xhtml+xml"),
                Exact("*/*"),
            ],
        ),
        (
            RepresentationClass::Turtle,
            &[
                Infix("ttl"),
                Infix("text/turtle"),
                Infix("application/x-turtle"),
                Infix("application/turtle"),
                Infix("text/rdf+turtle"),
            ],
        ),
        (
            RepresentationClass::N3,
            &[Infix("n3"), Infix("text/n3"), Infix("text/rdf+n3")],
        ),
    ]
};

/// Returns the representation class of a single media range, if it is supported.
pub fn classify_media_range(media_range: &str) -> Option<RepresentationClass> {
    let media_range = media_range.to_ascii_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.matches(&media_range)))
        .map(|(class, _)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::PreferenceTable;

    fn preferred(accept: Option<&str>) -> Option<RepresentationClass> {
        PreferenceTable::parse(accept).preferred_class()
    }

    #[test]
    fn classifies_canonical_media_types() {
        assert_eq!(
            classify_media_range("application/rdf+xml"),
            Some(RepresentationClass::RdfXml)
        );
        assert_eq!(classify_media_range("rdf/xml"), Some(RepresentationClass::RdfXml));
        assert_eq!(classify_media_range("text/html"), Some(RepresentationClass::Html));
        assert_eq!(
            classify_media_range("application/xhtml+xml"),
            Some(RepresentationClass::Html)
        );
        assert_eq!(
            classify_media_range("application/xml"),
            Some(RepresentationClass::Html)
        );
        assert_eq!(classify_media_range("text/turtle"), Some(RepresentationClass::Turtle));
        assert_eq!(
            classify_media_range("application/x-turtle"),
            Some(RepresentationClass::Turtle)
        );
        assert_eq!(classify_media_range("text/n3"), Some(RepresentationClass::N3));
        assert_eq!(classify_media_range("image/png"), None);
        assert_eq!(classify_media_range("text/plain"), None);
    }

    #[test]
    fn precedence_aliases_are_kept() {
        // Both contain "rdf", which is checked first.
        assert_eq!(
            classify_media_range("text/rdf+turtle"),
            Some(RepresentationClass::RdfXml)
        );
        assert_eq!(
            classify_media_range("text/rdf+n3"),
            Some(RepresentationClass::RdfXml)
        );
        // Any "n3" infix is N3.
        assert_eq!(
            classify_media_range("application/x-foon3bar"),
            Some(RepresentationClass::N3)
        );
        // The wildcard must match exactly.
        assert_eq!(classify_media_range("*/*"), Some(RepresentationClass::Html));
        assert_eq!(classify_media_range("text/*"), None);
    }

    #[test]
    fn class_membership_follows_rule_table() {
        assert!(RepresentationClass::N3.matches("text/rdf+n3"));
        assert!(RepresentationClass::RdfXml.matches("text/rdf+n3"));
        assert!(!RepresentationClass::Html.matches("text/n3"));
    }

    #[test]
    fn empty_header_prefers_html() {
        assert_eq!(preferred(None), Some(RepresentationClass::Html));
        assert_eq!(preferred(Some("")), Some(RepresentationClass::Html));
    }

    #[test]
    fn earliest_media_range_wins_ties() {
        assert_eq!(
            preferred(Some("application/rdf+xml;q=0.5, text/html;q=0.5")),
            Some(RepresentationClass::RdfXml)
        );
        assert_eq!(
            preferred(Some("text/html;level=1, application/rdf+xml; q=1, text/html, */*")),
            Some(RepresentationClass::Html)
        );
    }

    #[test]
    fn higher_quality_wins() {
        assert_eq!(
            preferred(Some("application/rdf+xml; q=0.8, text/html; q=0.2")),
            Some(RepresentationClass::RdfXml)
        );
        assert_eq!(
            preferred(Some("application/rdf+xml; q=0.2, text/html; q=0.7")),
            Some(RepresentationClass::Html)
        );
    }

    #[test]
    fn unsupported_media_ranges_fall_through() {
        assert_eq!(
            preferred(Some("image/png;q=0.8, text/html;q=0.2")),
            Some(RepresentationClass::Html)
        );
    }

    #[test]
    fn browser_headers_prefer_html() {
        assert_eq!(
            preferred(Some(
                "application/xml,application/xhtml+xml,text/html;q=0.9,text/plain;q=0.8,image/png,*/*;q=0.5"
            )),
            Some(RepresentationClass::Html)
        );
        assert_eq!(
            preferred(Some(
                "image/gif, image/jpeg, image/pjpeg, image/pjpeg, application/x-shockwave-flash, \
                 application/xaml+xml, application/vnd.ms-xpsdocument, application/x-ms-xbap, \
                 application/x-ms-application, application/vnd.ms-excel, \
                 application/vnd.ms-powerpoint, application/msword, */*"
            )),
            Some(RepresentationClass::Html)
        );
    }

    #[test]
    fn wildcard_alone_is_html() {
        assert_eq!(preferred(Some("*/*")), Some(RepresentationClass::Html));
    }

    #[test]
    fn quality_above_one_outranks_default() {
        assert_eq!(
            preferred(Some("text/turtle, text/html;q=7")),
            Some(RepresentationClass::Html)
        );
    }

    #[test]
    fn nothing_supported_yields_none() {
        assert_eq!(preferred(Some("image/png")), None);
        assert_eq!(preferred(Some("image/png, text/plain;q=0.1")), None);
        assert_eq!(preferred(Some(",,")), None);
    }

    #[test]
    fn canonical_media_types() {
        assert_eq!(RepresentationClass::Html.media_type(), "text/html");
        assert_eq!(
            RepresentationClass::RdfXml.media_type(),
            "application/rdf+xml; charset=UTF-8"
        );
        assert!(!RepresentationClass::Html.is_data());
        assert!(RepresentationClass::Turtle.is_data());
    }
}
