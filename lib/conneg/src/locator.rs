use std::fmt;

/// The path prefix that turns a resource URI into its information resource (the data document).
pub const INFORMATION_RESOURCE_PREFIX: &str = "/data";

/// The categories of resources published under this URI space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    ProxyProvider,
    ProxyEuropeana,
    AggregationProvider,
    AggregationEuropeana,
    ResourceMap,
    Item,
}

impl ResourceType {
    /// All resource types in the order their prefixes are matched.
    pub const ALL: [Self; 6] = [
        Self::ProxyProvider,
        Self::ProxyEuropeana,
        Self::AggregationProvider,
        Self::AggregationEuropeana,
        Self::ResourceMap,
        Self::Item,
    ];

    /// The path segments that introduce a resource of this type.
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::ProxyProvider => "/proxy/provider",
            Self::ProxyEuropeana => "/proxy/europeana",
            Self::AggregationProvider => "/aggregation/provider",
            Self::AggregationEuropeana => "/aggregation/europeana",
            Self::ResourceMap => "/rm/europeana",
            Self::Item => "/item",
        }
    }

    /// Splits `path` into this type's prefix and the remainder, if the prefix covers whole
    /// segments of `path`.
    fn strip_from(self, path: &str) -> Option<&str> {
        let rest = path.strip_prefix(self.path_prefix())?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_prefix())
    }
}

/// The structure of a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    /// The root of the URI space.
    Root,
    /// A single published resource.
    Resource {
        /// Whether the path carried the [`INFORMATION_RESOURCE_PREFIX`].
        information_resource: bool,
        resource_type: ResourceType,
        /// The identifier following the type prefix. Never empty, may contain `/`.
        id: String,
    },
}

impl ResourceLocator {
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    pub fn is_information_resource_request(&self) -> bool {
        matches!(
            self,
            Self::Resource {
                information_resource: true,
                ..
            }
        )
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        match self {
            Self::Root => None,
            Self::Resource { resource_type, .. } => Some(*resource_type),
        }
    }

    pub fn opaque_id(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Resource { id, .. } => Some(id),
        }
    }

    /// Resolves a request path (starting with `/`) into a locator.
    pub fn resolve(path: &str) -> Result<Self, LocatorError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        if trimmed.is_empty() || trimmed == "/" {
            return Ok(Self::Root);
        }

        let (information_resource, rest) = match trimmed.strip_prefix(INFORMATION_RESOURCE_PREFIX)
        {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (resource_type, rest) = ResourceType::ALL
            .into_iter()
            .find_map(|resource_type| {
                resource_type
                    .strip_from(rest)
                    .map(|rest| (resource_type, rest))
            })
            .ok_or_else(|| LocatorError::UnknownResourceType {
                path: path.to_owned(),
            })?;

        let id = rest.strip_prefix('/').unwrap_or(rest);
        if id.is_empty() {
            return Err(LocatorError::MissingIdentifier {
                path: path.to_owned(),
            });
        }

        Ok(Self::Resource {
            information_resource,
            resource_type,
            id: id.to_owned(),
        })
    }
}

/// Why a request path does not denote a published resource.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Invalid resource type in request URI {path}")]
    UnknownResourceType { path: String },
    #[error("Missing identifier in request URI {path}")]
    MissingIdentifier { path: String },
}

impl LocatorError {
    /// The request path that failed to resolve.
    pub fn path(&self) -> &str {
        match self {
            Self::UnknownResourceType { path } | Self::MissingIdentifier { path } => path,
        }
    }
}
