use serde_json::{
    Map,
    Value,
};

use crate::{
    DataError,
    FieldError,
    WrapFieldError,
};

/// The fixed set of keys a nested record must hold.
///
/// Aliases map a historical spelling of a key to its canonical name.
pub(crate) struct RecordSchema {
    keys: &'static [&'static str],
    aliases: &'static [(&'static str, &'static str)],
}

impl RecordSchema {
    pub const fn new(
        keys: &'static [&'static str],
        aliases: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { keys, aliases }
    }

    fn canonical(&self, key: &str) -> Option<&'static str> {
        self.keys
            .iter()
            .copied()
            .find(|known| *known == key)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, canonical)| *canonical)
            })
    }

    /// Views the value as a record of this schema.
    ///
    /// The field count is checked before any key, so a record with an extra field reports
    /// [`DataError::WrongFieldCount`] rather than [`DataError::UnknownField`].
    pub fn check<'r>(&self, value: &'r Value) -> Result<&'r Map<String, Value>, FieldError> {
        let record = value
            .as_object()
            .ok_or_else(|| DataError::BadConversion(format!("{value} is not a record")))
            .at_field("")?;
        if record.len() != self.keys.len() {
            return Err(DataError::WrongFieldCount {
                expected: self.keys.len(),
                found: record.len(),
            })
            .at_field("");
        }
        if let Some(unknown) = record.keys().find(|key| self.canonical(key).is_none()) {
            return Err(DataError::UnknownField(unknown.clone())).at_field(unknown);
        }
        Ok(record)
    }

    /// Reads a field of a checked record by its canonical name.
    ///
    /// A key that is absent (because an alias and its canonical name were both given) is
    /// [`DataError::DataMissing`].
    pub fn get<'r>(
        &self,
        record: &'r Map<String, Value>,
        key: &'static str,
    ) -> Result<&'r Value, FieldError> {
        record
            .get(key)
            .or_else(|| {
                self.aliases
                    .iter()
                    .filter(|(_, canonical)| *canonical == key)
                    .find_map(|(alias, _)| record.get(*alias))
            })
            .ok_or_else(|| DataError::DataMissing(format!("missing field \"{key}\"")))
            .at_field(key)
    }
}

#[cfg(test)]
mod schema_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{
        DataError,
        FieldError,
        validate::schema::RecordSchema,
    };

    const SCHEMA: RecordSchema = RecordSchema::new(&["a", "b"], &[("bee", "b")]);

    #[test]
    fn reads_fields_by_canonical_name() {
        let value = json!({ "a": 1, "bee": 2 });
        let record = SCHEMA.check(&value).unwrap();
        assert_eq!(SCHEMA.get(record, "a"), Ok(&json!(1)));
        assert_eq!(SCHEMA.get(record, "b"), Ok(&json!(2)));
    }

    #[test]
    fn reports_field_count_before_unknown_fields() {
        let value = json!({ "a": 1, "b": 2, "c": 3 });
        assert_matches!(SCHEMA.check(&value), Err(FieldError { field, error: DataError::WrongFieldCount { expected: 2, found: 3 } }) => {
            assert_eq!(field, "");
        });
        let value = json!({ "a": 1, "c": 3 });
        assert_matches!(SCHEMA.check(&value), Err(FieldError { field, error: DataError::UnknownField(_) }) => {
            assert_eq!(field, "c");
        });
    }

    #[test]
    fn reports_duplicated_alias_as_missing() {
        let value = json!({ "b": 1, "bee": 2 });
        let record = SCHEMA.check(&value).unwrap();
        assert_matches!(
            SCHEMA.get(record, "a"),
            Err(FieldError {
                error: DataError::DataMissing(_),
                ..
            })
        );
    }

    #[test]
    fn rejects_non_records() {
        assert_matches!(
            SCHEMA.check(&json!([1, 2])),
            Err(FieldError {
                error: DataError::BadConversion(_),
                ..
            })
        );
    }
}
