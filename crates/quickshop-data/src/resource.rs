//! Resource locations: remote URLs or local files.

use crate::FetchError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use url::Url;

/// Where a resource lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// An `http://` or `https://` URL.
    Remote(Url),
    /// A file on disk. Relative paths resolve against the working directory.
    Local(PathBuf),
}

impl Resource {
    /// Parse a location string.
    ///
    /// `http(s)://` strings become [`Resource::Remote`], `file://` URLs and
    /// anything else become [`Resource::Local`].
    pub fn parse(location: &str) -> Result<Self, FetchError> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidUrl("empty resource location".to_string()));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Resource::Remote(Url::parse(trimmed)?));
        }

        if trimmed.starts_with("file://") {
            let url = Url::parse(trimmed)?;
            let path = url
                .to_file_path()
                .map_err(|_| FetchError::InvalidUrl(trimmed.to_string()))?;
            return Ok(Resource::Local(path));
        }

        Ok(Resource::Local(PathBuf::from(trimmed)))
    }

    /// Resolve a relative local path against `base`. Remote resources and
    /// absolute paths are returned unchanged.
    pub fn resolve_against(self, base: &Path) -> Self {
        match self {
            Resource::Local(path) if path.is_relative() => Resource::Local(base.join(path)),
            other => other,
        }
    }

    /// Check if this resource is fetched over the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, Resource::Remote(_))
    }
}

impl FromStr for Resource {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::parse(s)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Remote(url) => write!(f, "{}", url),
            Resource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote() {
        let res = Resource::parse("https://shop.example.com/data/products.json").unwrap();
        assert!(res.is_remote());
        assert_eq!(res.to_string(), "https://shop.example.com/data/products.json");
    }

    #[test]
    fn test_parse_relative_path() {
        let res = Resource::parse("./data/products.json").unwrap();
        assert_eq!(res, Resource::Local(PathBuf::from("./data/products.json")));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(Resource::parse("  "), Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_bad_url() {
        assert!(Resource::parse("http://").is_err());
    }

    #[test]
    fn test_resolve_against() {
        let res = Resource::parse("data/products.json")
            .unwrap()
            .resolve_against(Path::new("/srv/shop"));
        assert_eq!(res, Resource::Local(PathBuf::from("/srv/shop/data/products.json")));

        let remote = Resource::parse("http://localhost/p.json").unwrap();
        assert_eq!(remote.clone().resolve_against(Path::new("/srv")), remote);
    }
}
