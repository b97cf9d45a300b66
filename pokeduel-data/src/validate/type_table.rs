use serde_json::Value;

use crate::{
    DataError,
    FieldError,
    Type,
    TypeTable,
    WrapFieldError,
    coerce::{
        coerce_float,
        require_nonnegative,
    },
};

/// Validates the `special_strength` record of a catalog entry.
///
/// The record must hold an `against_<type>` multiplier for every [`Type`].
pub fn validate_type_table(value: &Value) -> Result<TypeTable, FieldError> {
    let record = value
        .as_object()
        .ok_or_else(|| DataError::BadConversion(format!("{value} is not a record")))
        .at_field("")?;
    if record.len() != Type::ALL.len() {
        return Err(DataError::WrongFieldCount {
            expected: Type::ALL.len(),
            found: record.len(),
        })
        .at_field("");
    }
    let typed = record
        .iter()
        .map(|(key, value)| {
            Type::from_table_key(key)
                .map(|typ| (typ, key, value))
                .ok_or_else(|| DataError::UnknownField(key.clone()))
                .at_field(key)
        })
        .collect::<Result<Vec<_>, _>>()?;
    typed
        .into_iter()
        .map(|(typ, key, value)| -> Result<(Type, f64), FieldError> {
            let multiplier = coerce_float(value)
                .and_then(require_nonnegative)
                .at_field(key)?;
            Ok((typ, multiplier))
        })
        .collect::<Result<_, _>>()
        .map(TypeTable::new)
}
