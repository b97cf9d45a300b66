use serde::Serialize;
use serde_json::Value;

use crate::{
    DataError,
    FieldError,
    WrapFieldError,
    coerce::{
        coerce_string,
        is_blank,
    },
    validate::{
        positive_u32,
        schema::RecordSchema,
    },
};

const SCHEMA: RecordSchema = RecordSchema::new(
    &[
        "hp",
        "defense",
        "attack",
        "speed",
        "type1",
        "type2",
        "classification",
        "experience_growth",
    ],
    &[("classfication", "classification")],
);

/// Core battle stats, types, and descriptive data of a species.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub classification: String,
    pub experience_growth: u32,
}

/// Validates the `stats` record of a catalog entry.
pub fn validate_core_stats(value: &Value) -> Result<CoreStats, FieldError> {
    let record = SCHEMA.check(value)?;
    let stat = |key: &'static str| -> Result<u32, FieldError> {
        positive_u32(SCHEMA.get(record, key)?).at_field(key)
    };
    let hp = stat("hp")?;
    let defense = stat("defense")?;
    let attack = stat("attack")?;
    let speed = stat("speed")?;
    let primary_type = coerce_string(SCHEMA.get(record, "type1")?).at_field("type1")?;
    let secondary_type = secondary_type(SCHEMA.get(record, "type2")?).at_field("type2")?;
    let classification =
        coerce_string(SCHEMA.get(record, "classification")?).at_field("classification")?;
    let experience_growth = stat("experience_growth")?;
    Ok(CoreStats {
        hp,
        attack,
        defense,
        speed,
        primary_type,
        secondary_type,
        classification,
        experience_growth,
    })
}

fn secondary_type(value: &Value) -> Result<Option<String>, DataError> {
    if is_blank(value) {
        return Ok(None);
    }
    match value {
        Value::String(string) => Ok(Some(string.clone())),
        _ => Err(DataError::BadConversion(format!("{value} is not a string"))),
    }
}

#[cfg(test)]
mod core_stats_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::{
        Value,
        json,
    };

    use crate::{
        CoreStats,
        DataError,
        FieldError,
        validate::validate_core_stats,
    };

    fn stats() -> Value {
        json!({
            "hp": "45",
            "defense": 49,
            "attack": "49",
            "speed": 45,
            "type1": "grass",
            "type2": "poison",
            "classfication": "Seed Pokémon",
            "experience_growth": "1059860",
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut record = stats();
        record[key] = value;
        record
    }

    #[track_caller]
    fn assert_field_error(value: Value, field: &str, check: fn(&DataError) -> bool) {
        let error = validate_core_stats(&value).unwrap_err();
        assert_eq!(error.field, field);
        assert!(check(&error.error), "unexpected error: {error}");
    }

    #[test]
    fn validates_core_stats() {
        assert_eq!(
            validate_core_stats(&stats()),
            Ok(CoreStats {
                hp: 45,
                attack: 49,
                defense: 49,
                speed: 45,
                primary_type: "grass".to_owned(),
                secondary_type: Some("poison".to_owned()),
                classification: "Seed Pokémon".to_owned(),
                experience_growth: 1059860,
            })
        );
    }

    #[test]
    fn accepts_corrected_classification_key() {
        let mut record = stats();
        let object = record.as_object_mut().unwrap();
        let classification = object.remove("classfication").unwrap();
        object.insert("classification".to_owned(), classification);
        assert_matches!(validate_core_stats(&record), Ok(stats) => {
            assert_eq!(stats.classification, "Seed Pokémon");
        });
    }

    #[test]
    fn maps_blank_secondary_type_to_none() {
        for blank in [json!(null), json!("")] {
            assert_matches!(validate_core_stats(&with("type2", blank)), Ok(stats) => {
                assert_eq!(stats.secondary_type, None);
            });
        }
        assert_field_error(with("type2", json!(3)), "type2", |error| {
            matches!(error, DataError::BadConversion(_))
        });
    }

    #[test]
    fn rejects_bad_primary_type() {
        assert_field_error(with("type1", json!("")), "type1", |error| {
            matches!(error, DataError::DataMissing(_))
        });
        assert_field_error(with("type1", json!(22)), "type1", |error| {
            matches!(error, DataError::BadConversion(_))
        });
    }

    #[test]
    fn rejects_bad_stats() {
        assert_field_error(with("hp", json!("abc")), "hp", |error| {
            matches!(error, DataError::NotANumber(_))
        });
        assert_field_error(with("hp", json!("")), "hp", |error| {
            matches!(error, DataError::NotANumber(_))
        });
        assert_field_error(with("attack", json!(2.5)), "attack", |error| {
            matches!(error, DataError::BadConversion(_))
        });
        assert_field_error(with("defense", json!(-1)), "defense", |error| {
            matches!(error, DataError::InvalidRange(_))
        });
        assert_field_error(with("speed", json!(0)), "speed", |error| {
            matches!(error, DataError::InvalidRange(_))
        });
        assert_field_error(
            with("experience_growth", json!(null)),
            "experience_growth",
            |error| matches!(error, DataError::NotANumber(_)),
        );
    }

    #[test]
    fn reports_first_bad_field_in_order() {
        let mut record = with("hp", json!("abc"));
        record["speed"] = json!(0);
        assert_matches!(validate_core_stats(&record), Err(FieldError { field, .. }) => {
            assert_eq!(field, "hp");
        });
    }

    #[test]
    fn rejects_wrong_field_count() {
        let mut record = stats();
        record["weight"] = json!(1);
        assert_matches!(
            validate_core_stats(&record),
            Err(FieldError {
                error: DataError::WrongFieldCount {
                    expected: 8,
                    found: 9
                },
                ..
            })
        );

        let mut record = stats();
        record.as_object_mut().unwrap().remove("speed");
        assert_matches!(
            validate_core_stats(&record),
            Err(FieldError {
                error: DataError::WrongFieldCount {
                    expected: 8,
                    found: 7
                },
                ..
            })
        );
    }

    #[test]
    fn rejects_unknown_field() {
        let mut record = stats();
        let object = record.as_object_mut().unwrap();
        object.remove("speed");
        object.insert("sped".to_owned(), json!(45));
        assert_matches!(validate_core_stats(&record), Err(FieldError { field, error: DataError::UnknownField(key) }) => {
            assert_eq!(field, "sped");
            assert_eq!(key, "sped");
        });
    }
}
