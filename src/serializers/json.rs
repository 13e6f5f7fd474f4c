//! JSON codec.

use super::{ensure_input, ensure_records, Serializer};
use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;
use serde_json::Value;

/// A serializer for converting records to and from JSON format.
///
/// Output is a compact array of objects keyed `name`, `address`,
/// `phone_number`, no pretty-printing.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, records: &[Record]) -> SerializeResult<String> {
        ensure_records(records)?;
        Ok(serde_json::to_string(records)?)
    }

    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>> {
        ensure_input(input)?;

        let values: Vec<Value> = serde_json::from_str(input)?;
        values.iter().map(record_from_value).collect()
    }
}

fn record_from_value(value: &Value) -> SerializeResult<Record> {
    let name = required_field(value, "name")?;
    let address = required_field(value, "address")?;
    let phone_number = required_field(value, "phone_number")?;
    Ok(Record::new(name, address, phone_number)?)
}

fn required_field<'a>(value: &'a Value, field: &'static str) -> SerializeResult<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or(SerializeError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alice() -> Record {
        Record::new("Alice", "123 Main St", "555-123-4567").unwrap()
    }

    #[test]
    fn test_serialize_layout() {
        let serialized = JsonSerializer.serialize(&[alice()]).unwrap();
        assert_eq!(
            serialized,
            r#"[{"name":"Alice","address":"123 Main St","phone_number":"555-123-4567"}]"#
        );
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            Record::new("John Doe", "123 Main St", "555-908-1234").unwrap(),
            Record::new("Jane Smith", "456 Second St", "555-908-5678").unwrap(),
        ];
        let serialized = JsonSerializer.serialize(&records).unwrap();
        let deserialized = JsonSerializer.deserialize(&serialized).unwrap();
        assert_eq!(deserialized, records);
    }

    #[test]
    fn test_empty_input_errors() {
        assert!(matches!(
            JsonSerializer.serialize(&[]),
            Err(SerializeError::NoRecords)
        ));
        assert!(matches!(
            JsonSerializer.deserialize(""),
            Err(SerializeError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_field_names_itself() {
        let input = r#"[{"name":"Alice","address":"123 Main St"}]"#;
        let err = JsonSerializer.deserialize(input).unwrap_err();
        assert!(matches!(err, SerializeError::MissingField("phone_number")));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            JsonSerializer.deserialize("{not json"),
            Err(SerializeError::Json(_))
        ));
    }
}
