//! # semverish
//!
//! A comparable software version modeled after [SemVer](https://semver.org/), with conversions to
//! and from text and JSON.
//!
//! ## Examples
//!
//! Parse, inspect and render a version:
//!
//! ```
//! use semverish::prelude::*;
//!
//! let version = Version::parse("1.2.3-alpha.1").unwrap();
//! assert_eq!((1, 2, 3), (version.major, version.minor, version.patch));
//! assert_eq!(version.prerelease, ["alpha", "1"]);
//! assert_eq!("1.2.3-alpha.1", version.to_string());
//! ```
//!
//! Compare versions:
//!
//! ```
//! use semverish::prelude::*;
//!
//! assert!(Version::new(1, 0, 0) < Version::new(2, 0, 0));
//! assert!(Version::parse("1.2.3-alpha").unwrap() < Version::parse("1.2.3-beta").unwrap());
//!
//! // build identifiers are ignored
//! let a = Version::with_identifiers(1, 2, 3, [""; 0], ["001"]).unwrap();
//! let b = Version::with_identifiers(1, 2, 3, [""; 0], ["002"]).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! Convert to and from JSON:
//!
//! ```
//! use semverish::prelude::*;
//! use serde_json::json;
//!
//! let version = Version::from_json(&json!({
//!     "major": 1,
//!     "minor": 2,
//!     "patch": 3,
//!     "build": ["exp", "sha"],
//! }))
//! .unwrap();
//! assert_eq!("1.2.3+exp.sha", version.to_string());
//! assert_eq!(Version::from_json(&version.to_json()).unwrap().build, ["exp", "sha"]);
//! ```
//!
//! ## Text Format
//!
//! `MAJOR.MINOR.PATCH[-ID[.ID...]]`, where `MAJOR`, `MINOR` and `PATCH` are unsigned decimal
//! integers and each `ID` is a run of ASCII letters and digits.
//!
//! The text parser reads the prerelease identifiers but **not** a `+BUILD` suffix: anything after
//! the prerelease is left unparsed (see [`Version::parse_prefix`]). Build identifiers can only be
//! set with [`Version::with_identifiers`], [`Version::from_json`] or by assigning the field.
//!
//! ## Ordering
//!
//! Versions compare by `major`, `minor` and `patch`, then by their prerelease identifiers as a
//! plain lexicographic sequence of strings. This is simpler than SemVer's precedence rules:
//!
//! - a version without prerelease identifiers sorts *before* one with them (`1.0.0 < 1.0.0-rc`);
//! - identifiers are compared as text, so `"10" < "9"`.
//!
//! ```
//! use semverish::prelude::*;
//!
//! assert!(Version::parse("1.0.0").unwrap() < Version::parse("1.0.0-rc").unwrap());
//! assert!(Version::parse("1.0.0-10").unwrap() < Version::parse("1.0.0-9").unwrap());
//! ```
//!
//! ## Prelude
//!
//! semverish provides a prelude module for convenience. Use it with:
//!
//! ```
//! use semverish::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod json;
mod parse;
mod version;

pub use crate::error::{IdentifierField, InvalidArgumentError, ParseError, VersionError};
pub use crate::version::Version;

/// A convenience module appropriate for glob imports (`use semverish::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::IdentifierField;
    #[doc(no_inline)]
    pub use crate::InvalidArgumentError;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}
