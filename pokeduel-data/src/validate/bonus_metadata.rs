use serde::Serialize;
use serde_json::Value;

use crate::{
    DataError,
    FieldError,
    WrapFieldError,
    coerce::{
        coerce_float,
        is_blank,
        require_nonnegative,
        require_positive,
    },
    validate::{
        positive_u32,
        schema::RecordSchema,
    },
};

const SCHEMA: RecordSchema = RecordSchema::new(
    &["percentage_male", "height_m", "weight_kg", "generation"],
    &[],
);

/// Descriptive metadata of a species, used only for display and stat jitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusMetadata {
    /// Percentage of the species that is male. Genderless species have none.
    pub percentage_male: Option<f64>,
    /// Height in meters (m).
    pub height_m: Option<f64>,
    /// Weight in kilograms (kg).
    pub weight_kg: Option<f64>,
    pub generation: u32,
}

/// Validates the `other` record of a catalog entry.
pub fn validate_bonus_metadata(value: &Value) -> Result<BonusMetadata, FieldError> {
    let record = SCHEMA.check(value)?;
    let percentage_male = nullable(SCHEMA.get(record, "percentage_male")?, |value| {
        require_nonnegative(coerce_float(value)?)
    })
    .at_field("percentage_male")?;
    let height_m = nullable(SCHEMA.get(record, "height_m")?, |value| {
        require_positive(coerce_float(value)?)
    })
    .at_field("height_m")?;
    let weight_kg = nullable(SCHEMA.get(record, "weight_kg")?, |value| {
        require_positive(coerce_float(value)?)
    })
    .at_field("weight_kg")?;
    let generation = positive_u32(SCHEMA.get(record, "generation")?).at_field("generation")?;
    Ok(BonusMetadata {
        percentage_male,
        height_m,
        weight_kg,
        generation,
    })
}

fn nullable<T, F>(value: &Value, validate: F) -> Result<Option<T>, DataError>
where
    F: FnOnce(&Value) -> Result<T, DataError>,
{
    if is_blank(value) {
        Ok(None)
    } else {
        validate(value).map(Some)
    }
}

#[cfg(test)]
mod bonus_metadata_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::{
        Value,
        json,
    };

    use crate::{
        BonusMetadata,
        DataError,
        FieldError,
        validate::validate_bonus_metadata,
    };

    fn other() -> Value {
        json!({
            "percentage_male": "88.1",
            "height_m": "0.7",
            "weight_kg": 6.9,
            "generation": "1",
        })
    }

    #[test]
    fn validates_metadata() {
        assert_eq!(
            validate_bonus_metadata(&other()),
            Ok(BonusMetadata {
                percentage_male: Some(88.1),
                height_m: Some(0.7),
                weight_kg: Some(6.9),
                generation: 1,
            })
        );
    }

    #[test]
    fn maps_blank_optional_values_to_none() {
        let record = json!({
            "percentage_male": "",
            "height_m": null,
            "weight_kg": "",
            "generation": 7,
        });
        assert_eq!(
            validate_bonus_metadata(&record),
            Ok(BonusMetadata {
                percentage_male: None,
                height_m: None,
                weight_kg: None,
                generation: 7,
            })
        );
    }

    #[test]
    fn accepts_zero_percentage_male() {
        let mut record = other();
        record["percentage_male"] = json!(0);
        assert_matches!(validate_bonus_metadata(&record), Ok(metadata) => {
            assert_eq!(metadata.percentage_male, Some(0.0));
        });
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut record = other();
        record["percentage_male"] = json!(-1);
        assert_matches!(validate_bonus_metadata(&record), Err(FieldError { field, error: DataError::InvalidRange(_) }) => {
            assert_eq!(field, "percentage_male");
        });

        let mut record = other();
        record["height_m"] = json!("0");
        assert_matches!(validate_bonus_metadata(&record), Err(FieldError { field, error: DataError::InvalidRange(_) }) => {
            assert_eq!(field, "height_m");
        });
    }

    #[test]
    fn requires_generation() {
        let mut record = other();
        record["generation"] = json!("");
        assert_matches!(validate_bonus_metadata(&record), Err(FieldError { field, error: DataError::NotANumber(_) }) => {
            assert_eq!(field, "generation");
        });
    }

    #[test]
    fn rejects_wrong_field_count() {
        let mut record = other();
        record["is_legendary"] = json!(0);
        assert_matches!(
            validate_bonus_metadata(&record),
            Err(FieldError {
                error: DataError::WrongFieldCount {
                    expected: 4,
                    found: 5
                },
                ..
            })
        );
    }
}
