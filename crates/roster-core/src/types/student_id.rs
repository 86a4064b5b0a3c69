//! Student identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A server-assigned student identifier.
///
/// Identifiers are always positive; the server uses `0` to mean "not yet
/// persisted", which is modelled as an absent id on [`Student`](crate::Student).
///
/// # Example
///
/// ```
/// use roster_core::StudentId;
///
/// let id: StudentId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(StudentId::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct StudentId(NonZeroU64);

impl StudentId {
    /// Create a new student id, rejecting zero.
    pub fn new(value: u64) -> Result<Self, Error> {
        NonZeroU64::new(value).map(Self).ok_or_else(|| {
            InvalidInputError::StudentId {
                value: value.to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into()
        })
    }

    /// Returns the numeric value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| InvalidInputError::StudentId {
                value: s.to_string(),
                reason: e.to_string(),
            })?;
        Self::new(value)
    }
}

impl TryFrom<u64> for StudentId {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonZeroU64> for StudentId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl From<StudentId> for u64 {
    fn from(id: StudentId) -> Self {
        id.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_id() {
        let id: StudentId = "7".parse().unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!("0".parse::<StudentId>().is_err());
        assert!("-3".parse::<StudentId>().is_err());
        assert!("abc".parse::<StudentId>().is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let id = StudentId::new(12).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        let back: StudentId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<StudentId>("0").is_err());
    }
}
