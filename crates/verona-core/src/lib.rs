//! Semantic version values, ranges, and parsing
//!
//! This crate provides immutable version numbers with SemVer precedence
//! ordering, version ranges with inclusive or exclusive bounds, and parsers
//! for strict (`1.2.3-beta`), OSGi (`1.2.3.beta`), and lax (`1.2`) version text.
//!
//! The `serde` feature adds string (de)serialization for [`Version`] and
//! [`VersionQualifier`]; its tests run with `cargo test --features serde`.

mod error;
mod qualifier;
mod range;
mod version;
mod version_parser;

pub use error::{Result, VersionError};
pub use qualifier::VersionQualifier;
pub use range::VersionRange;
pub use version::Version;
pub use version_parser::{Dialect, VersionParser};
