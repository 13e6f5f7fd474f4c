//! CSV codec.

use super::{ensure_input, ensure_records, Serializer};
use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;
use csv::{Reader, StringRecord, Writer};

/// A serializer for converting records to and from CSV format.
///
/// Output carries a `name,address,phone_number` header row followed by one
/// data row per record, with standard CSV quoting applied by the `csv`
/// crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSerializer;

impl Serializer for CsvSerializer {
    fn serialize(&self, records: &[Record]) -> SerializeResult<String> {
        ensure_records(records)?;

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(["name", "address", "phone_number"])?;
        for record in records {
            writer.write_record([record.name(), record.address(), record.phone_number()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SerializeError::Malformed(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| SerializeError::Malformed(e.to_string()))
    }

    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>> {
        ensure_input(input)?;

        let mut reader = Reader::from_reader(input.as_bytes());
        let headers = reader.headers()?.clone();
        let name_idx = column(&headers, "name")?;
        let address_idx = column(&headers, "address")?;
        let phone_idx = column(&headers, "phone_number")?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let name = cell(&row, name_idx, "name")?;
            let address = cell(&row, address_idx, "address")?;
            let phone_number = cell(&row, phone_idx, "phone_number")?;
            records.push(Record::new(name, address, phone_number)?);
        }

        Ok(records)
    }
}

fn column(headers: &StringRecord, field: &'static str) -> SerializeResult<usize> {
    headers
        .iter()
        .position(|header| header == field)
        .ok_or(SerializeError::MissingField(field))
}

fn cell<'a>(row: &'a StringRecord, index: usize, field: &'static str) -> SerializeResult<&'a str> {
    row.get(index).ok_or(SerializeError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_layout() {
        let records = vec![Record::new("Alice", "123 Main St", "555-123-4567").unwrap()];
        let serialized = CsvSerializer.serialize(&records).unwrap();
        assert_eq!(
            serialized,
            "name,address,phone_number\nAlice,123 Main St,555-123-4567\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            Record::new("John Doe", "123 Main St", "555-908-1234").unwrap(),
            Record::new("Jane Smith", "456 Second St", "555-908-5678").unwrap(),
        ];
        let serialized = CsvSerializer.serialize(&records).unwrap();
        let deserialized = CsvSerializer.deserialize(&serialized).unwrap();
        assert_eq!(deserialized, records);
    }

    #[test]
    fn test_quotes_fields_containing_commas() {
        let records = vec![Record::new("Doe, John", "123 Main St", "555-908-1234").unwrap()];
        let serialized = CsvSerializer.serialize(&records).unwrap();
        assert!(serialized.contains("\"Doe, John\""));

        let deserialized = CsvSerializer.deserialize(&serialized).unwrap();
        assert_eq!(deserialized[0].name(), "Doe, John");
    }

    #[test]
    fn test_empty_input_errors() {
        assert!(matches!(
            CsvSerializer.serialize(&[]),
            Err(SerializeError::NoRecords)
        ));
        assert!(matches!(
            CsvSerializer.deserialize(""),
            Err(SerializeError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_header_names_itself() {
        let input = "name,address\nAlice,123 Main St\n";
        let err = CsvSerializer.deserialize(input).unwrap_err();
        assert!(matches!(err, SerializeError::MissingField("phone_number")));
    }
}
