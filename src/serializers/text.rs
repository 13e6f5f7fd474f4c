//! Plain-text codec.

use super::{ensure_input, ensure_records, Serializer};
use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;
use std::fmt::Write;

/// A serializer for converting records to and from a plain-text format.
///
/// One line per record, fields joined by commas, no header. Fields must
/// not themselves contain commas; that fragility is acknowledged rather
/// than guarded against.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSerializer;

impl Serializer for TextSerializer {
    fn serialize(&self, records: &[Record]) -> SerializeResult<String> {
        ensure_records(records)?;

        let mut output = String::new();
        for record in records {
            let _ = writeln!(
                output,
                "{},{},{}",
                record.name(),
                record.address(),
                record.phone_number()
            );
        }

        Ok(output)
    }

    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>> {
        ensure_input(input)?;

        let mut records = Vec::new();
        for line in input.trim().lines() {
            let components: Vec<&str> = line.trim().split(',').collect();
            if components.len() != 3 {
                return Err(SerializeError::Malformed(
                    "expected three comma-separated fields per line".to_string(),
                ));
            }
            records.push(Record::new(components[0], components[1], components[2])?);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_layout() {
        let records = vec![
            Record::new("John Doe", "123 Main St", "555-908-1234").unwrap(),
            Record::new("Jane Smith", "456 Second St", "555-908-5678").unwrap(),
        ];
        let serialized = TextSerializer.serialize(&records).unwrap();
        assert_eq!(
            serialized,
            "John Doe,123 Main St,555-908-1234\nJane Smith,456 Second St,555-908-5678\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            Record::new("John Doe", "123 Main St", "555-908-1234").unwrap(),
            Record::new("Jane Smith", "456 Second St", "555-908-5678").unwrap(),
        ];
        let serialized = TextSerializer.serialize(&records).unwrap();
        let deserialized = TextSerializer.deserialize(&serialized).unwrap();
        assert_eq!(deserialized, records);
    }

    #[test]
    fn test_empty_input_errors() {
        assert!(matches!(
            TextSerializer.serialize(&[]),
            Err(SerializeError::NoRecords)
        ));
        assert!(matches!(
            TextSerializer.deserialize("\n\n"),
            Err(SerializeError::EmptyInput)
        ));
    }

    #[test]
    fn test_wrong_component_count_is_malformed() {
        assert!(matches!(
            TextSerializer.deserialize("John Doe,123 Main St\n"),
            Err(SerializeError::Malformed(_))
        ));
        assert!(matches!(
            TextSerializer.deserialize("a,b,c,d\n"),
            Err(SerializeError::Malformed(_))
        ));
    }
}
