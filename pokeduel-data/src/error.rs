use std::fmt::{
    self,
    Display,
};

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use thiserror::Error;

/// An error produced while coercing or validating a single raw value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// The value does not parse as a number at all.
    #[error("{0} is not a number")]
    NotANumber(String),
    /// The value has the wrong kind and cannot be converted without loss.
    #[error("{0}")]
    BadConversion(String),
    /// The value is empty or missing.
    #[error("{0}")]
    DataMissing(String),
    /// The value is well-formed but outside of its allowed range.
    #[error("{0}")]
    InvalidRange(String),
    /// A record has the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    WrongFieldCount { expected: usize, found: usize },
    /// A record has a field outside of its schema.
    #[error("unknown field \"{0}\"")]
    UnknownField(String),
}

impl DataError {
    /// The category of the error, as reported by the catalog loader.
    pub fn cause(&self) -> MalformedCause {
        match self {
            Self::NotANumber(_) => MalformedCause::NotANumber,
            Self::BadConversion(_) => MalformedCause::NonConvertible,
            Self::DataMissing(_) => MalformedCause::MissingValue,
            Self::InvalidRange(_) => MalformedCause::InvalidRange,
            Self::WrongFieldCount { .. } => MalformedCause::WrongFieldCount,
            Self::UnknownField(_) => MalformedCause::UnknownField,
        }
    }
}

/// The cause of a malformed catalog entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MalformedCause {
    #[string = "non-convertible"]
    NonConvertible,
    #[string = "missing value"]
    MissingValue,
    #[string = "not a number"]
    NotANumber,
    #[string = "invalid range"]
    InvalidRange,
    #[string = "wrong field count"]
    WrongFieldCount,
    #[string = "unknown field"]
    UnknownField,
}

/// A [`DataError`] located at a dotted field path inside of a record.
///
/// An empty path refers to the record itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct FieldError {
    pub field: String,
    #[source]
    pub error: DataError,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "record: {}", self.error)
        } else {
            write!(f, "{}: {}", self.field, self.error)
        }
    }
}

impl FieldError {
    /// Constructs a new field error.
    pub fn new<F>(field: F, error: DataError) -> Self
    where
        F: Display,
    {
        Self {
            field: field.to_string(),
            error,
        }
    }

    /// Moves the error underneath the given parent field.
    pub fn within<P>(self, parent: P) -> Self
    where
        P: Display,
    {
        let field = if self.field.is_empty() {
            parent.to_string()
        } else {
            format!("{parent}.{}", self.field)
        };
        Self {
            field,
            error: self.error,
        }
    }
}

/// Attaches a field path to a [`DataError`] result.
pub trait WrapFieldError<T> {
    /// Reports the error at the given field.
    fn at_field<F>(self, field: F) -> Result<T, FieldError>
    where
        F: Display;
}

impl<T> WrapFieldError<T> for Result<T, DataError> {
    fn at_field<F>(self, field: F) -> Result<T, FieldError>
    where
        F: Display,
    {
        self.map_err(|error| FieldError::new(field, error))
    }
}

/// Moves a [`FieldError`] result underneath a parent field.
pub trait WrapNestedFieldError<T> {
    /// Reports the error underneath the given parent field.
    fn within<P>(self, parent: P) -> Result<T, FieldError>
    where
        P: Display;
}

impl<T> WrapNestedFieldError<T> for Result<T, FieldError> {
    fn within<P>(self, parent: P) -> Result<T, FieldError>
    where
        P: Display,
    {
        self.map_err(|error| error.within(parent))
    }
}

/// An error produced while loading a catalog.
///
/// Loading is all-or-nothing, so a single error describes the whole load.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog")]
    Parse(#[from] serde_json::Error),
    #[error("catalog must be a JSON array of records")]
    NotAnArray,
    #[error("malformed catalog entry at index {index} in field \"{field}\" ({cause}): {source}")]
    MalformedEntry {
        index: usize,
        field: String,
        cause: MalformedCause,
        source: DataError,
    },
}

impl CatalogError {
    pub(crate) fn malformed_entry(index: usize, error: FieldError) -> Self {
        Self::MalformedEntry {
            index,
            field: error.field,
            cause: error.error.cause(),
            source: error.error,
        }
    }
}

/// An error produced while looking up catalog data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("unknown type \"{0}\"")]
    UnknownType(String),
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] DataError),
}

#[cfg(test)]
mod error_test {
    use pretty_assertions::assert_eq;

    use crate::{
        DataError,
        FieldError,
        MalformedCause,
        WrapFieldError,
        WrapNestedFieldError,
    };

    #[test]
    fn maps_data_errors_to_causes() {
        assert_eq!(
            DataError::NotANumber("x".to_owned()).cause(),
            MalformedCause::NotANumber
        );
        assert_eq!(
            DataError::BadConversion("x".to_owned()).cause(),
            MalformedCause::NonConvertible
        );
        assert_eq!(
            DataError::DataMissing("x".to_owned()).cause(),
            MalformedCause::MissingValue
        );
        assert_eq!(
            DataError::WrongFieldCount {
                expected: 8,
                found: 9
            }
            .cause(),
            MalformedCause::WrongFieldCount
        );
    }

    #[test]
    fn builds_nested_field_paths() {
        let result: Result<(), DataError> = Err(DataError::InvalidRange("-1".to_owned()));
        let error = result.at_field("hp").within("stats").unwrap_err();
        assert_eq!(error.field, "stats.hp");

        let error = FieldError::new("", DataError::UnknownField("foo".to_owned())).within("other");
        assert_eq!(error.field, "other");
    }

    #[test]
    fn formats_field_errors() {
        let error = FieldError::new("stats.hp", DataError::NotANumber("\"abc\"".to_owned()));
        assert_eq!(error.to_string(), "stats.hp: \"abc\" is not a number");
        let error = FieldError::new(
            "",
            DataError::WrongFieldCount {
                expected: 4,
                found: 3,
            },
        );
        assert_eq!(error.to_string(), "record: expected 4 fields, found 3");
    }
}
