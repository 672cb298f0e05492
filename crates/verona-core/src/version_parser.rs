//! Version parsing for the strict, OSGi, and lax dialects

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::{Result, VersionError};
use crate::{Version, VersionQualifier};

/// Version text dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// `major.minor.patch[-qualifier]`
    #[default]
    Strict,
    /// `major.minor.patch[.qualifier]`
    Osgi,
    /// Strict, then OSGi, then `major.minor[-qualifier]`, then `major[-qualifier]`
    Lax,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Strict => "strict",
            Dialect::Osgi => "osgi",
            Dialect::Lax => "lax",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Dialect::Strict),
            "osgi" => Ok(Dialect::Osgi),
            "lax" => Ok(Dialect::Lax),
            _ => Err(format!("Invalid dialect \"{}\" (expected strict, osgi, or lax)", s)),
        }
    }
}

/// Shape of one accepted version grammar: how many numeric components are
/// required, and which character introduces the qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Full,
    FullOsgi,
    MajorMinor,
    Major,
}

/// Order in which lax parsing tries each grammar
const LAX_CASCADE: [Grammar; 4] = [Grammar::Full, Grammar::FullOsgi, Grammar::MajorMinor, Grammar::Major];

lazy_static! {
    static ref FULL_PATTERN: String = Grammar::Full.body();
    static ref FULL_OSGI_PATTERN: String = Grammar::FullOsgi.body();
    static ref MAJOR_MINOR_PATTERN: String = Grammar::MajorMinor.body();
    static ref MAJOR_PATTERN: String = Grammar::Major.body();

    static ref FULL_RE: Regex = Grammar::Full.compile();
    static ref FULL_OSGI_RE: Regex = Grammar::FullOsgi.compile();
    static ref MAJOR_MINOR_RE: Regex = Grammar::MajorMinor.compile();
    static ref MAJOR_RE: Regex = Grammar::Major.compile();
}

impl Grammar {
    fn components(self) -> usize {
        match self {
            Grammar::Full | Grammar::FullOsgi => 3,
            Grammar::MajorMinor => 2,
            Grammar::Major => 1,
        }
    }

    /// Regex fragment for the character that introduces the qualifier
    fn separator(self) -> &'static str {
        match self {
            Grammar::FullOsgi => r"\.",
            _ => "-",
        }
    }

    /// Unanchored pattern text generated from the descriptor
    fn body(self) -> String {
        let numbers = vec!["([0-9]+)"; self.components()].join(r"\.");
        format!("{}(?:{}(.+))?", numbers, self.separator())
    }

    /// Pattern quoted in mismatch errors; the compiled regex is this text anchored
    fn pattern(self) -> &'static str {
        match self {
            Grammar::Full => FULL_PATTERN.as_str(),
            Grammar::FullOsgi => FULL_OSGI_PATTERN.as_str(),
            Grammar::MajorMinor => MAJOR_MINOR_PATTERN.as_str(),
            Grammar::Major => MAJOR_PATTERN.as_str(),
        }
    }

    fn compile(self) -> Regex {
        Regex::new(&format!("^{}$", self.pattern())).unwrap()
    }

    fn regex(self) -> &'static Regex {
        match self {
            Grammar::Full => &FULL_RE,
            Grammar::FullOsgi => &FULL_OSGI_RE,
            Grammar::MajorMinor => &MAJOR_MINOR_RE,
            Grammar::Major => &MAJOR_RE,
        }
    }

    fn captures(self, text: &str) -> Option<Captures<'_>> {
        self.regex().captures(text)
    }

    /// Build a version from a successful match of this grammar
    fn build(self, text: &str, caps: &Captures<'_>) -> Result<Version> {
        let count = self.components();
        let mut numbers = [0u32; 3];
        for (index, slot) in numbers.iter_mut().enumerate().take(count) {
            *slot = parse_component(text, &caps[index + 1])?;
        }

        let qualifier = match caps.get(count + 1) {
            Some(m) => Some(VersionQualifier::new(m.as_str()).map_err(|e| {
                VersionError::InvalidVersionQualifier {
                    text: text.to_string(),
                    source: Box::new(e),
                }
            })?),
            None => None,
        };

        Ok(Version::new(numbers[0], numbers[1], numbers[2], qualifier))
    }
}

fn parse_component(text: &str, digits: &str) -> Result<u32> {
    // The grammar admits only ASCII digits, so overflow is the only failure
    digits.parse::<u32>().map_err(|_| VersionError::NumericOverflow {
        text: text.to_string(),
        component: digits.to_string(),
    })
}

fn mismatch(text: &str, grammar: Grammar) -> VersionError {
    VersionError::GrammarMismatch {
        text: text.to_string(),
        pattern: grammar.pattern(),
    }
}

/// Parser for version text.
///
/// All entry points require the whole input to match; nothing is trimmed and
/// no `v` prefix is accepted.
pub struct VersionParser;

impl VersionParser {
    /// Parse a strict `major.minor.patch[-qualifier]` version
    pub fn parse(text: &str) -> Result<Version> {
        Self::parse_grammar(Grammar::Full, text)
    }

    /// Parse an OSGi style `major.minor.patch[.qualifier]` version
    pub fn parse_osgi(text: &str) -> Result<Version> {
        Self::parse_grammar(Grammar::FullOsgi, text)
    }

    /// Parse a version, allowing for missing minor and patch components.
    ///
    /// Grammars are tried in a fixed order and the first one that matches
    /// decides the result, including any overflow or qualifier error.
    pub fn parse_lax(text: &str) -> Result<Version> {
        for grammar in LAX_CASCADE {
            if let Some(caps) = grammar.captures(text) {
                log::trace!("Version text '{}' matched {:?} grammar", text, grammar);
                return grammar.build(text, &caps);
            }
        }
        log::debug!("Version text '{}' matched no lax grammar", text);
        Err(mismatch(text, Grammar::Full))
    }

    /// Parse a version using the given dialect
    pub fn parse_with(dialect: Dialect, text: &str) -> Result<Version> {
        match dialect {
            Dialect::Strict => Self::parse(text),
            Dialect::Osgi => Self::parse_osgi(text),
            Dialect::Lax => Self::parse_lax(text),
        }
    }

    fn parse_grammar(grammar: Grammar, text: &str) -> Result<Version> {
        match grammar.captures(text) {
            Some(caps) => grammar.build(text, &caps),
            None => Err(mismatch(text, grammar)),
        }
    }
}
