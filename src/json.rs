use crate::{
    error::{IdentifierField, InvalidArgumentError, VersionError},
    version::{collect_identifiers, Version},
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

const MAJOR: &str = "major";
const MINOR: &str = "minor";
const PATCH: &str = "patch";

impl Version {
    /// Builds a version from a JSON object of the form
    ///
    /// ```json
    /// { "major": 1, "minor": 2, "patch": 3, "prerelease": ["alpha"], "build": ["001"] }
    /// ```
    ///
    /// `prerelease` and `build` are optional. Other keys are ignored.
    ///
    /// # Errors
    ///
    /// - [`InvalidArgumentError::NotAnObject`] if `json` is not an object.
    /// - [`InvalidArgumentError::InvalidField`] if `major`, `minor` or `patch` is missing, is not
    ///   a non-negative integer, or does not fit in a `u32`.
    /// - [`InvalidArgumentError::NotAnArray`], [`InvalidArgumentError::NonStringElement`] or
    ///   [`InvalidArgumentError::EmptyIdentifier`] if `prerelease` or `build` is malformed.
    pub fn from_json(json: &Value) -> Result<Self, InvalidArgumentError> {
        let object = json.as_object().ok_or(InvalidArgumentError::NotAnObject)?;

        Ok(Self {
            major: numeric_field(object, MAJOR)?,
            minor: numeric_field(object, MINOR)?,
            patch: numeric_field(object, PATCH)?,
            prerelease: identifier_field(object, IdentifierField::Prerelease)?,
            build: identifier_field(object, IdentifierField::Build)?,
        })
    }

    /// Parses `json_str` as JSON and then builds a version with [`Version::from_json`].
    pub fn from_json_str(json_str: &str) -> Result<Self, VersionError> {
        let json: Value = serde_json::from_str(json_str)?;
        Ok(Self::from_json(&json)?)
    }

    /// Returns this version as a JSON object. `prerelease` and `build` are only present when they
    /// are non-empty.
    ///
    /// ```
    /// use semverish::Version;
    /// use serde_json::json;
    ///
    /// let version = Version::with_identifiers(1, 2, 3, [""; 0], ["001"]).unwrap();
    /// assert_eq!(
    ///     json!({ "major": 1, "minor": 2, "patch": 3, "build": ["001"] }),
    ///     version.to_json()
    /// );
    /// ```
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(MAJOR.to_owned(), self.major.into());
        object.insert(MINOR.to_owned(), self.minor.into());
        object.insert(PATCH.to_owned(), self.patch.into());

        for (field, identifiers) in [
            (IdentifierField::Prerelease, &self.prerelease),
            (IdentifierField::Build, &self.build),
        ] {
            if !identifiers.is_empty() {
                object.insert(field.name().to_owned(), identifiers.clone().into());
            }
        }

        Value::Object(object)
    }
}

fn numeric_field(object: &Map<String, Value>, field: &'static str) -> Result<u32, InvalidArgumentError> {
    object
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|value| u32::try_from(value).ok())
        .ok_or(InvalidArgumentError::InvalidField { field })
}

fn identifier_field(
    object: &Map<String, Value>,
    field: IdentifierField,
) -> Result<Vec<String>, InvalidArgumentError> {
    let Some(value) = object.get(field.name()) else {
        return Ok(Vec::new());
    };
    let elements = value
        .as_array()
        .ok_or(InvalidArgumentError::NotAnArray { field })?;

    let strings = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_str()
                .ok_or(InvalidArgumentError::NonStringElement { field, index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    collect_identifiers(strings, field)
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Value::deserialize(deserializer)?;
        Self::from_json(&json).map_err(D::Error::custom)
    }
}
