//! Base URL type for the student REST API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use super::StudentId;
use crate::error::{Error, InvalidInputError};

/// Path of the student collection, relative to the server root.
pub const STUDENT_COLLECTION_PATH: &str = "/api/student";

/// A validated server base URL.
///
/// Must be an absolute `http` or `https` URL with a host. A trailing slash is
/// accepted and ignored when building endpoint URLs.
///
/// # Example
///
/// ```
/// use roster_core::{BaseUrl, StudentId};
///
/// let base = BaseUrl::new("http://10.0.2.2:8080/").unwrap();
/// assert_eq!(base.collection_url(), "http://10.0.2.2:8080/api/student");
/// assert_eq!(
///     base.item_url(StudentId::new(3).unwrap()),
///     "http://10.0.2.2:8080/api/student/3"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not http(s), or has no host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of the student collection.
    pub fn collection_url(&self) -> String {
        // Url always renders a root path as "/", so strip it before joining
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, STUDENT_COLLECTION_PATH)
    }

    /// Returns the URL of a single student.
    pub fn item_url(&self, id: StudentId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}', expected http or https", scheme),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_http_url() {
        let base = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(base.host(), Some("localhost"));
        assert_eq!(base.collection_url(), "http://localhost:8080/api/student");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let base = BaseUrl::new("https://school.example/").unwrap();
        assert_eq!(base.collection_url(), "https://school.example/api/student");
    }

    #[test]
    fn keeps_path_prefix() {
        let base = BaseUrl::new("https://school.example/registry").unwrap();
        assert_eq!(
            base.item_url(StudentId::new(9).unwrap()),
            "https://school.example/registry/api/student/9"
        );
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(BaseUrl::new("ftp://school.example").is_err());
        assert!(BaseUrl::new("file:///tmp/students").is_err());
    }

    #[test]
    fn rejects_relative_and_query() {
        assert!(BaseUrl::new("/api/student").is_err());
        assert!(BaseUrl::new("http://localhost:8080?x=1").is_err());
    }
}
