use core::num::ParseIntError;

/// Which identifier list of a [`Version`](crate::Version) a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierField {
    /// The dot-separated identifiers after `-`.
    Prerelease,
    /// The dot-separated identifiers after `+`.
    Build,
}

impl IdentifierField {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            IdentifierField::Prerelease => "prerelease",
            IdentifierField::Build => "build",
        }
    }
}

impl core::fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from constructing a [`Version`](crate::Version) out of explicit fields or a JSON value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// A prerelease or build identifier was the empty string.
    #[error("semver {field} element may not be empty")]
    EmptyIdentifier {
        /// The list containing the empty identifier.
        field: IdentifierField,
    },

    /// The JSON value was not an object.
    #[error("semver json is not an object")]
    NotAnObject,

    /// A numeric field was missing, not an unsigned integer, or too large.
    #[error("semver json does not contain a `{field}` non-negative integer")]
    InvalidField {
        /// The numeric field name: `major`, `minor` or `patch`.
        field: &'static str,
    },

    /// An identifier list was present but not an array.
    #[error("semver json `{field}` is not an array")]
    NotAnArray {
        /// The offending list.
        field: IdentifierField,
    },

    /// An identifier list contained something other than a string.
    #[error("semver json `{field}` contains a non-string element at index {index}")]
    NonStringElement {
        /// The offending list.
        field: IdentifierField,
        /// Position of the element within the array.
        index: usize,
    },
}

/// Errors from parsing a version string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `.` separator was expected but something else (or nothing) was found.
    #[error("unexpected character in version string: expected `{expected}`, found {found} at offset {offset}")]
    UnexpectedCharacter {
        /// The separator that should have been there.
        expected: char,
        /// Description of what was there instead.
        found: String,
        /// Byte offset into the input.
        offset: usize,
    },

    /// A numeric field had no digits.
    #[error("expected digits for `{field}` at offset {offset}")]
    MissingNumber {
        /// The numeric field name.
        field: &'static str,
        /// Byte offset into the input.
        offset: usize,
    },

    /// A numeric field's digits could not be held in the field.
    #[error("invalid `{field}` number: {source}")]
    InvalidNumber {
        /// The numeric field name.
        field: &'static str,
        /// The underlying integer parse failure.
        source: ParseIntError,
    },

    /// The prerelease segment contained an empty identifier (e.g. `1.2.3-` or `1.2.3-a..b`).
    #[error("empty prerelease identifier at offset {offset}")]
    EmptyPrerelease {
        /// Byte offset of the position where the empty identifier ends.
        offset: usize,
    },
}

/// Any error this crate can produce, for callers that mix construction paths.
#[derive(thiserror::Error, Debug)]
pub enum VersionError {
    /// See [`InvalidArgumentError`].
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON text could not be read as JSON at all.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
