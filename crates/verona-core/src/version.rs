//! Version values and their total order

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VersionError};
use crate::{VersionParser, VersionQualifier};

/// A semantic version number: `major.minor.patch` with an optional qualifier.
///
/// Versions are ordered by major, minor, and patch, then by qualifier. A
/// version without a qualifier is greater than any version with one and the
/// same numeric components, so `1.0.0-alpha < 1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    qualifier: Option<VersionQualifier>,
}

impl Version {
    /// Create a version from already validated components
    pub fn new(major: u32, minor: u32, patch: u32, qualifier: Option<VersionQualifier>) -> Self {
        Version {
            major,
            minor,
            patch,
            qualifier,
        }
    }

    /// Create a version without a qualifier
    pub fn of(major: u32, minor: u32, patch: u32) -> Self {
        Self::new(major, minor, patch, None)
    }

    /// Create a version with a qualifier given as text
    pub fn with_qualifier(major: u32, minor: u32, patch: u32, qualifier: &str) -> Result<Self> {
        Ok(Self::new(major, minor, patch, Some(VersionQualifier::new(qualifier)?)))
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn qualifier(&self) -> Option<&VersionQualifier> {
        self.qualifier.as_ref()
    }

    /// Check if this is a snapshot version
    pub fn is_snapshot(&self) -> bool {
        self.qualifier.as_ref().is_some_and(VersionQualifier::is_snapshot)
    }

    /// Check if this version carries any qualifier
    pub fn is_prerelease(&self) -> bool {
        self.qualifier.is_some()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_qualifier(self.qualifier.as_ref(), other.qualifier.as_ref()))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A missing qualifier (a release) outranks any present qualifier
fn compare_qualifier(a: Option<&VersionQualifier>, b: Option<&VersionQualifier>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, "-{}", qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        VersionParser::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        VersionParser::parse(&s).map_err(serde::de::Error::custom)
    }
}
