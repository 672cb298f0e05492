//! Version qualifiers (pre-release labels) and their precedence rules

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, VersionError};

/// Human readable form of the qualifier grammar, quoted in error messages
const QUALIFIER_PATTERN: &str = r"[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*";

lazy_static! {
    static ref QUALIFIER_RE: Regex = Regex::new(&format!("^{}$", QUALIFIER_PATTERN)).unwrap();
}

/// A version number qualifier such as `alpha.1` or `SNAPSHOT`.
///
/// The text is one or more dot-separated identifiers made of ASCII letters,
/// digits, and hyphens. Ordering follows SemVer precedence for pre-release
/// identifiers:
///
/// 1. Identifiers consisting of only digits are compared numerically.
/// 2. Identifiers with letters or hyphens are compared lexically in ASCII order.
/// 3. Numeric identifiers always have lower precedence than non-numeric ones.
/// 4. A longer list of identifiers has higher precedence than a shorter one,
///    if all the preceding identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionQualifier {
    text: String,
}

impl VersionQualifier {
    /// Create a qualifier, validating the text against the qualifier grammar
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !QUALIFIER_RE.is_match(&text) {
            return Err(VersionError::InvalidQualifier {
                text,
                pattern: QUALIFIER_PATTERN,
            });
        }
        Ok(VersionQualifier { text })
    }

    /// Get the qualifier text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterate over the dot-separated identifiers
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.text.split('.')
    }

    /// Check if this qualifier denotes a snapshot version
    pub fn is_snapshot(&self) -> bool {
        self.text == "SNAPSHOT"
    }
}

impl Ord for VersionQualifier {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.text == other.text {
            return Ordering::Equal;
        }

        let mut left = self.identifiers();
        let mut right = other.identifiers();

        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => match compare_identifier(a, b) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                // Only reachable when numeric identifiers differ in leading
                // zeros, e.g. "01" and "1"
                (None, None) => return self.text.cmp(&other.text),
            }
        }
    }
}

impl PartialOrd for VersionQualifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn is_numeric(identifier: &str) -> bool {
    identifier.bytes().all(|b| b.is_ascii_digit())
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

/// Compare two digit strings by value without parsing, so identifiers of any
/// length are ordered correctly.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl fmt::Display for VersionQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for VersionQualifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        VersionQualifier::new(s)
    }
}

impl AsRef<str> for VersionQualifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VersionQualifier {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VersionQualifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        VersionQualifier::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> VersionQualifier {
        VersionQualifier::new(text).unwrap()
    }

    #[test]
    fn test_valid_qualifiers() {
        for text in ["SNAPSHOT", "alpha", "alpha.1", "0.3.7", "x.7.z.92", "x-y-z.-", "-"] {
            assert_eq!(q(text).as_str(), text);
        }
    }

    #[test]
    fn test_invalid_qualifiers() {
        for text in ["", ".", "a..b", ".a", "a.", "β", "a b", "a+b", "a_b", "alpha\n"] {
            let err = VersionQualifier::new(text).unwrap_err();
            assert!(matches!(err, VersionError::InvalidQualifier { .. }), "{}", text);
            assert_eq!(err.text(), Some(text));
        }
    }

    #[test]
    fn test_is_snapshot() {
        assert!(q("SNAPSHOT").is_snapshot());
        assert!(!q("snapshot").is_snapshot());
        assert!(!q("SNAPSHOT.1").is_snapshot());
        assert!(!q("alpha").is_snapshot());
    }

    #[test]
    fn test_numeric_identifiers_compare_by_value() {
        assert!(q("2") < q("11"));
        assert!(q("beta.2") < q("beta.11"));
        assert!(q("99999999999999999999") > q("4294967295"));
        assert_eq!(q("7").cmp(&q("7")), Ordering::Equal);
    }

    #[test]
    fn test_alphanumeric_identifiers_compare_in_ascii_order() {
        assert!(q("A") < q("B"));
        assert!(q("Z") < q("a"));
        assert!(q("alpha") < q("beta"));
        assert!(q("-") < q("0a"));
    }

    #[test]
    fn test_numeric_lower_than_alphanumeric() {
        assert!(q("1") < q("a"));
        assert!(q("999") < q("-"));
        assert!(q("alpha.1") < q("alpha.beta"));
        assert!(q("alpha.beta") > q("alpha.1"));
    }

    #[test]
    fn test_shorter_prefix_is_lower() {
        assert!(q("alpha") < q("alpha.1"));
        assert!(q("alpha.1") < q("alpha.1.0"));
        assert!(q("alpha.1.0") > q("alpha.1"));
    }

    #[test]
    fn test_first_difference_wins() {
        // The numeric identifier in position two decides, regardless of what follows
        assert!(q("rc.1.zzz") < q("rc.2.aaa"));
        assert!(q("a.b.1") > q("a.a.99.x"));
    }

    #[test]
    fn test_leading_zeros_are_ordered_consistently_with_equality() {
        let a = q("01");
        let b = q("1");
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn test_self_comparison_is_equal() {
        let snapshot = q("SNAPSHOT");
        assert_eq!(snapshot.cmp(&snapshot), Ordering::Equal);
    }

    #[test]
    fn test_semver_precedence_example() {
        let expected = vec![
            q("SNAPSHOT"),
            q("alpha"),
            q("alpha.1"),
            q("alpha.beta"),
            q("beta"),
            q("beta.2"),
            q("beta.11"),
            q("rc.1"),
        ];
        let mut shuffled = expected.clone();
        shuffled.reverse();
        shuffled.swap(1, 5);
        shuffled.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_from_str_and_display() {
        let parsed: VersionQualifier = "beta.11".parse().unwrap();
        assert_eq!(parsed.to_string(), "beta.11");
        assert_eq!(parsed.identifiers().collect::<Vec<_>>(), vec!["beta", "11"]);
        assert!("beta..11".parse::<VersionQualifier>().is_err());
    }
}
