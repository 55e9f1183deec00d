use crate::{
    error::{IdentifierField, InvalidArgumentError, ParseError},
    parse,
};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

/// A comparable software version, modeled after [SemVer](https://semver.org/):
/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Versions are ordered by `major`, `minor` and `patch`, then by their prerelease identifiers
/// compared as a plain sequence of strings. Build identifiers never take part in equality,
/// hashing or ordering.
///
/// # Examples
///
/// ```
/// use semverish::Version;
///
/// let version: Version = "1.2.3-alpha.1".parse().unwrap();
/// assert_eq!(version.prerelease, ["alpha", "1"]);
/// assert_eq!(version.to_string(), "1.2.3-alpha.1");
/// assert!(version < Version::new(1, 2, 4));
/// ```
///
/// Build identifiers only come from explicit fields or JSON:
///
/// ```
/// use semverish::Version;
///
/// let a = Version::with_identifiers(1, 2, 3, ["rc"], ["001"]).unwrap();
/// let b = Version::with_identifiers(1, 2, 3, ["rc"], ["002"]).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "1.2.3-rc+001");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// Incremented for incompatible API changes.
    pub major: u32,

    /// Incremented when functionality is added in a backwards-compatible manner.
    pub minor: u32,

    /// Incremented for backwards-compatible bug fixes.
    pub patch: u32,

    /// Prerelease identifiers. Compared lexicographically when `major`, `minor` and `patch` are
    /// equal.
    pub prerelease: Vec<String>,

    /// Build identifiers. These do not feature in comparisons.
    pub build: Vec<String>,
}

impl Version {
    /// Returns a version with the given numeric parts and no identifiers.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Returns a version built from all of its parts.
    ///
    /// # Errors
    ///
    /// - Returns [`InvalidArgumentError::EmptyIdentifier`] if any prerelease or build identifier
    ///   is the empty string.
    pub fn with_identifiers<P, B>(
        major: u32,
        minor: u32,
        patch: u32,
        prerelease: P,
        build: B,
    ) -> Result<Self, InvalidArgumentError>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Ok(Self {
            major,
            minor,
            patch,
            prerelease: collect_identifiers(prerelease, IdentifierField::Prerelease)?,
            build: collect_identifiers(build, IdentifierField::Build)?,
        })
    }

    /// Parses a version string of the form `MAJOR.MINOR.PATCH[-PRERELEASE]`.
    ///
    /// Anything after the recognized prefix is ignored, including a `+BUILD` suffix, so the
    /// returned version never has build identifiers. Use [`Version::parse_prefix`] to inspect the
    /// unparsed remainder.
    ///
    /// # Errors
    ///
    /// - [`ParseError::UnexpectedCharacter`] if a `.` separator is missing after `MAJOR` or
    ///   `MINOR`.
    /// - [`ParseError::MissingNumber`] or [`ParseError::InvalidNumber`] if a numeric part has no
    ///   digits or does not fit in a `u32`.
    /// - [`ParseError::EmptyPrerelease`] if a prerelease identifier is empty.
    pub fn parse(version_str: &str) -> Result<Self, ParseError> {
        Self::parse_prefix(version_str).map(|(version, _)| version)
    }

    /// Like [`Version::parse`], but also returns the part of `input` that was not consumed.
    ///
    /// ```
    /// use semverish::Version;
    ///
    /// let (version, rest) = Version::parse_prefix("1.2.3-rc.1+exp.sha").unwrap();
    /// assert_eq!(version.to_string(), "1.2.3-rc.1");
    /// assert_eq!(rest, "+exp.sha");
    /// ```
    pub fn parse_prefix(input: &str) -> Result<(Self, &str), ParseError> {
        let parsed = parse::parse_prefix(input)?;
        let version = Self {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            prerelease: parsed.prerelease,
            build: Vec::new(),
        };
        Ok((version, &input[parsed.consumed..]))
    }

    /// Returns true if this version has any prerelease identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    fn precedence_key(&self) -> (u32, u32, u32, &[String]) {
        (self.major, self.minor, self.patch, self.prerelease.as_slice())
    }
}

pub(crate) fn collect_identifiers<I>(
    identifiers: I,
    field: IdentifierField,
) -> Result<Vec<String>, InvalidArgumentError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    identifiers
        .into_iter()
        .map(|identifier| {
            let identifier = identifier.into();
            if identifier.is_empty() {
                Err(InvalidArgumentError::EmptyIdentifier { field })
            } else {
                Ok(identifier)
            }
        })
        .collect()
}

fn write_identifiers(f: &mut fmt::Formatter<'_>, lead: char, identifiers: &[String]) -> fmt::Result {
    let Some((first, rest)) = identifiers.split_first() else {
        return Ok(());
    };
    write!(f, "{lead}{first}")?;
    for identifier in rest {
        write!(f, ".{identifier}")?;
    }
    Ok(())
}

impl Display for Version {
    /// Renders `MAJOR.MINOR.PATCH`, then `-PRERELEASE` and `+BUILD` when non-empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        write_identifiers(f, '-', &self.prerelease)?;
        write_identifiers(f, '+', &self.build)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// build identifiers are ignored by all of the comparison impls below

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence_key() == other.precedence_key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precedence_key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// Compares `major`, `minor`, `patch` numerically, then `prerelease` lexicographically as a
    /// sequence of strings. Note that this is not numeric-aware: `"10" < "9"`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_key().cmp(&other.precedence_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rstest::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_zero() {
        let version = Version::default();
        assert_eq!(version, Version::new(0, 0, 0));
        assert!(version.prerelease.is_empty());
        assert!(version.build.is_empty());
        assert_eq!("0.0.0", version.to_string());
    }

    #[rstest]
    #[case("1.2.3", 1, 2, 3, &[])]
    #[case("1.2.3-alpha.1", 1, 2, 3, &["alpha", "1"])]
    #[case("0.0.0", 0, 0, 0, &[])]
    #[case("10.20.30-rc", 10, 20, 30, &["rc"])]
    #[case("4294967295.0.1", u32::MAX, 0, 1, &[])]
    fn test_parse_fields(
        #[case] version_str: &str,
        #[case] major: u32,
        #[case] minor: u32,
        #[case] patch: u32,
        #[case] prerelease: &[&str],
    ) {
        let version = Version::parse(version_str).unwrap();
        assert_eq!(major, version.major);
        assert_eq!(minor, version.minor);
        assert_eq!(patch, version.patch);
        assert_eq!(prerelease, version.prerelease.as_slice());
        assert!(version.build.is_empty());
        assert_eq!(version_str, version.to_string());
    }

    #[test]
    fn test_parse_ignores_build() {
        let version: Version = "1.2.3-beta+exp.sha.5114f85".parse().unwrap();
        assert_eq!(Version::with_identifiers(1, 2, 3, ["beta"], [""; 0]).unwrap(), version);
        assert!(version.build.is_empty());
        assert_eq!("1.2.3-beta", version.to_string());
    }

    #[test]
    fn test_parse_missing_patch_separator() {
        assert!(matches!(
            Version::parse("1.2"),
            Err(ParseError::UnexpectedCharacter { expected: '.', .. })
        ));
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Ok(Version::new(3, 1, 4)), Version::try_from("3.1.4"));
    }

    #[test]
    fn test_with_identifiers_ok() {
        let version = Version::with_identifiers(1, 2, 3, ["alpha", "1"], ["build", "5"]).unwrap();
        assert_eq!(["alpha", "1"], version.prerelease.as_slice());
        assert_eq!(["build", "5"], version.build.as_slice());
        assert_eq!("1.2.3-alpha.1+build.5", version.to_string());
    }

    #[rstest]
    #[case(&[""], &[], IdentifierField::Prerelease)]
    #[case(&["alpha", ""], &[], IdentifierField::Prerelease)]
    #[case(&[], &[""], IdentifierField::Build)]
    #[case(&[], &["001", ""], IdentifierField::Build)]
    fn test_with_identifiers_empty(
        #[case] prerelease: &[&str],
        #[case] build: &[&str],
        #[case] field: IdentifierField,
    ) {
        let result = Version::with_identifiers(1, 0, 0, prerelease.iter().copied(), build.iter().copied());
        assert_eq!(Err(InvalidArgumentError::EmptyIdentifier { field }), result);
    }

    #[test]
    fn test_display_build_only() {
        let version = Version::with_identifiers(1, 0, 0, [""; 0], ["001"]).unwrap();
        assert_eq!("1.0.0+001", version.to_string());
        assert_eq!("1.0.0+001", format!("{version}"));
    }

    #[rstest]
    #[case("1.0.0", "2.0.0")]
    #[case("1.2.0", "1.10.0")]
    #[case("1.2.3", "1.2.4")]
    #[case("1.2.3-alpha", "1.2.3-beta")]
    #[case("1.2.3", "1.2.3-alpha")] // no prerelease is a prefix of any prerelease
    #[case("1.2.3-alpha", "1.2.3-alpha.1")]
    #[case("1.2.3-10", "1.2.3-9")] // not numeric-aware
    #[case("1.2.3-rc", "1.2.4-alpha")]
    fn test_ordering(#[case] lesser: &str, #[case] greater: &str) {
        let lesser = Version::parse(lesser).unwrap();
        let greater = Version::parse(greater).unwrap();
        assert!(lesser < greater);
        assert!(lesser <= greater);
        assert!(greater > lesser);
        assert!(greater >= lesser);
        assert!(lesser != greater);
    }

    #[test]
    fn test_build_excluded_from_comparison() {
        let a = Version::with_identifiers(1, 2, 3, [""; 0], ["001"]).unwrap();
        let b = Version::with_identifiers(1, 2, 3, [""; 0], ["002"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(Ordering::Equal, a.cmp(&b));
        assert!(!(a < b) && !(b < a));
        assert!(a <= b && a >= b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[fixture]
    fn versions() -> Vec<Version> {
        vec![
            Version::default(),
            Version::new(0, 0, 1),
            Version::new(1, 0, 0),
            Version::parse("1.0.0-alpha").unwrap(),
            Version::parse("1.0.0-alpha.1").unwrap(),
            Version::parse("1.0.0-beta").unwrap(),
            Version::with_identifiers(1, 0, 0, ["beta"], ["x"]).unwrap(),
            Version::with_identifiers(1, 0, 0, [""; 0], ["001"]).unwrap(),
            Version::new(2, 1, 0),
        ]
    }

    #[rstest]
    fn test_ordering_total(versions: Vec<Version>) {
        for (a, b) in versions.iter().cartesian_product(versions.iter()) {
            let holds = [a < b, a == b, b < a];
            assert_eq!(1, holds.iter().filter(|h| **h).count(), "{a} vs {b}");
        }
    }

    #[rstest]
    fn test_ordering_transitive(versions: Vec<Version>) {
        for (a, b, c) in versions.iter().tuple_combinations() {
            if a <= b && b <= c {
                assert!(a <= c, "{a} <= {b} <= {c}");
            }
        }
    }

    #[rstest]
    fn test_text_round_trip(versions: Vec<Version>) {
        for version in versions.iter().filter(|v| v.build.is_empty()) {
            let reparsed = Version::parse(&version.to_string()).unwrap();
            assert_eq!(version, &reparsed);
            assert_eq!(version.prerelease, reparsed.prerelease);
        }
    }

    #[test]
    fn test_sort() {
        let mut versions = ["1.10.0", "1.2.0-rc.1", "1.2.0", "0.9.9", "1.2.0-beta"]
            .iter()
            .map(|s| Version::parse(s).unwrap())
            .collect_vec();
        versions.sort();
        let sorted = versions.iter().map(Version::to_string).collect_vec();
        assert_eq!(
            vec!["0.9.9", "1.2.0", "1.2.0-beta", "1.2.0-rc.1", "1.10.0"],
            sorted
        );
    }

    #[test]
    fn test_is_prerelease() {
        assert!(Version::parse("1.0.0-rc").unwrap().is_prerelease());
        assert!(!Version::new(1, 0, 0).is_prerelease());
    }

    #[test]
    fn test_fields_settable() {
        let mut version = Version::new(1, 2, 3);
        version.patch = 4;
        version.prerelease.push("rc".to_owned());
        assert_eq!("1.2.4-rc", version.to_string());
    }
}
