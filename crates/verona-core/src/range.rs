//! Version ranges with inclusive or exclusive bounds

use std::fmt;

use crate::error::{Result, VersionError};
use crate::Version;

/// An interval of versions such as `[1.0.0, 2.0.0)`.
///
/// The lower bound never orders after the upper bound. Equal bounds with an
/// exclusive side are allowed and describe an empty range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    lower: Version,
    lower_inclusive: bool,
    upper: Version,
    upper_inclusive: bool,
}

impl VersionRange {
    /// Create a range, failing if `lower` orders after `upper`
    pub fn new(lower: Version, lower_inclusive: bool, upper: Version, upper_inclusive: bool) -> Result<Self> {
        if lower > upper {
            return Err(VersionError::MalformedRange {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        Ok(VersionRange {
            lower,
            lower_inclusive,
            upper,
            upper_inclusive,
        })
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn is_lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    pub fn upper(&self) -> &Version {
        &self.upper
    }

    pub fn is_upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// Check if the range contains the given version
    pub fn contains(&self, version: &Version) -> bool {
        let lower_ok = if self.lower_inclusive {
            *version >= self.lower
        } else {
            *version > self.lower
        };
        let upper_ok = if self.upper_inclusive {
            *version <= self.upper
        } else {
            *version < self.upper
        };

        lower_ok && upper_ok
    }

    /// Check if no version can fall inside this range
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper && !(self.lower_inclusive && self.upper_inclusive)
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.lower_inclusive { '[' } else { '(' },
            self.lower,
            self.upper,
            if self.upper_inclusive { ']' } else { ')' }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lower: Version, lower_inclusive: bool, upper: Version, upper_inclusive: bool) -> VersionRange {
        VersionRange::new(lower, lower_inclusive, upper, upper_inclusive).unwrap()
    }

    #[test]
    fn test_malformed_range() {
        for (lower_inclusive, upper_inclusive) in [(true, true), (true, false), (false, true), (false, false)] {
            let err = VersionRange::new(Version::of(1, 0, 0), lower_inclusive, Version::of(0, 0, 0), upper_inclusive)
                .unwrap_err();
            assert_eq!(
                err,
                VersionError::MalformedRange {
                    lower: "1.0.0".to_string(),
                    upper: "0.0.0".to_string(),
                }
            );
            assert!(!err.is_parse_error());
            assert_eq!(err.text(), None);
        }
    }

    #[test]
    fn test_release_after_prerelease_is_malformed() {
        let err = VersionRange::new(
            Version::of(1, 0, 0),
            true,
            Version::with_qualifier(1, 0, 0, "SNAPSHOT").unwrap(),
            true,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_contains_major_range() {
        let major = range(Version::of(1, 0, 0), true, Version::of(2, 0, 0), false);
        for (minor, patch) in [(0, 0), (0, 1), (7, 3), (u32::MAX, u32::MAX), (2_147_483_648, 0)] {
            assert!(major.contains(&Version::of(1, minor, patch)));
        }
        assert!(!major.contains(&Version::of(2, 0, 0)));
        assert!(major.contains(&Version::with_qualifier(2, 0, 0, "SNAPSHOT").unwrap()));
        assert!(!major.contains(&Version::with_qualifier(1, 0, 0, "SNAPSHOT").unwrap()));
        assert!(!major.contains(&Version::of(0, 99, 99)));
    }

    #[test]
    fn test_contains_exclusive_range() {
        let exclusive = range(Version::of(1, 0, 0), false, Version::of(100, 0, 0), false);
        for major in 2..=99 {
            assert!(exclusive.contains(&Version::of(major, major * 7, u32::MAX - major)));
        }
        assert!(!exclusive.contains(&Version::of(1, 0, 0)));
        assert!(exclusive.contains(&Version::of(1, 0, 1)));
        assert!(!exclusive.contains(&Version::of(100, 0, 0)));
    }

    #[test]
    fn test_contains_inclusive_range() {
        let inclusive = range(Version::of(1, 0, 0), true, Version::of(100, 0, 0), true);
        for major in 1..=100 {
            assert!(inclusive.contains(&Version::of(major, 0, 0)));
        }
        assert!(!inclusive.contains(&Version::of(100, 0, 1)));
    }

    #[test]
    fn test_empty_range() {
        let point = Version::of(1, 0, 0);
        let empty = range(point.clone(), false, point.clone(), false);
        assert!(empty.is_empty());
        assert!(!empty.contains(&point));
        assert!(!empty.contains(&Version::of(0, 0, 0)));
        assert!(!empty.contains(&Version::of(2, 0, 0)));

        let half_open = range(point.clone(), true, point.clone(), false);
        assert!(half_open.is_empty());
        assert!(!half_open.contains(&point));

        let single = range(point.clone(), true, point.clone(), true);
        assert!(!single.is_empty());
        assert!(single.contains(&point));
    }

    #[test]
    fn test_display() {
        let one = Version::of(1, 0, 0);
        let two = Version::of(2, 0, 0);
        assert_eq!(range(one.clone(), true, two.clone(), true).to_string(), "[1.0.0, 2.0.0]");
        assert_eq!(range(one.clone(), false, two.clone(), true).to_string(), "(1.0.0, 2.0.0]");
        assert_eq!(range(one.clone(), true, two.clone(), false).to_string(), "[1.0.0, 2.0.0)");
        assert_eq!(range(one, false, two, false).to_string(), "(1.0.0, 2.0.0)");

        let snapshots = range(
            Version::with_qualifier(1, 0, 0, "SNAPSHOT").unwrap(),
            true,
            Version::with_qualifier(2, 0, 0, "SNAPSHOT").unwrap(),
            true,
        );
        assert_eq!(snapshots.to_string(), "[1.0.0-SNAPSHOT, 2.0.0-SNAPSHOT]");
    }

    #[test]
    fn test_accessors() {
        let r = range(Version::of(1, 0, 0), true, Version::of(2, 0, 0), false);
        assert_eq!(r.lower(), &Version::of(1, 0, 0));
        assert_eq!(r.upper(), &Version::of(2, 0, 0));
        assert!(r.is_lower_inclusive());
        assert!(!r.is_upper_inclusive());
    }
}
