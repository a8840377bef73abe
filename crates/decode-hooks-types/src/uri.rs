//! URI references
//!
//! `UriRef` holds either an absolute URL or a relative reference (a path such
//! as `/var/data/file.json` or `google.fr`, optionally with query and
//! fragment). Relative references have no base to resolve against, so they
//! are validated and kept verbatim.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use url::{ParseError, Url};

// Only used to check that a relative reference resolves
const VALIDATION_BASE: &str = "http://relative.invalid/";

/// An absolute URL or a relative reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UriRef {
    Absolute(Url),
    Relative(String),
}

impl UriRef {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        match Url::parse(input) {
            Ok(url) => Ok(Self::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => Self::parse_relative(input),
            Err(err) => Err(err),
        }
    }

    fn parse_relative(input: &str) -> Result<Self, ParseError> {
        // A colon in the first segment would read as a scheme
        let first_segment = input.split(['/', '?', '#']).next().unwrap_or_default();
        if first_segment.contains(':') {
            return Err(ParseError::RelativeUrlWithoutBase);
        }
        Url::parse(VALIDATION_BASE)?.join(input)?;
        Ok(Self::Relative(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Absolute(url) => url.as_str(),
            Self::Relative(reference) => reference,
        }
    }

    /// The absolute URL, `None` for a relative reference
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Absolute(url) => Some(url),
            Self::Relative(_) => None,
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        Self::Absolute(url)
    }
}

impl FromStr for UriRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UriRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UriRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absolute() {
        let uri = UriRef::parse("s3://my-bucket/deep/nested/file.json").unwrap();
        assert!(!uri.is_relative());
        assert_eq!(uri.as_url().map(Url::scheme), Some("s3"));
    }

    #[test]
    fn test_relative_kept_verbatim() {
        for input in ["/var/data/file.json", "foo/bar", "google.fr", "../up?x=1#top", ""] {
            let uri = UriRef::parse(input).unwrap();
            assert!(uri.is_relative(), "{input} should be relative");
            assert_eq!(uri.as_str(), input);
            assert_eq!(uri.as_url(), None);
        }
    }

    #[test]
    fn test_malformed() {
        assert!(UriRef::parse(":8080/path").is_err());
        assert!(UriRef::parse("http://[::1").is_err());
        assert!(UriRef::parse("http://exa mple.com/").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let uri: UriRef = serde_json::from_value(serde_json::json!("/tmp/x.json")).unwrap();
        assert_eq!(uri, UriRef::Relative("/tmp/x.json".to_string()));
        assert_eq!(serde_json::to_value(&uri).unwrap(), serde_json::json!("/tmp/x.json"));
    }
}
