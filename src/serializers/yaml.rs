//! YAML codec.

use super::{ensure_input, ensure_records, Serializer};
use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;
use std::collections::BTreeMap;

/// A serializer for converting records to and from YAML format.
///
/// Output is a block sequence of mappings. Keys come from the record's
/// `BTreeMap` view, so they appear in alphabetical order: `address`,
/// `name`, `phone_number`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSerializer;

impl Serializer for YamlSerializer {
    fn serialize(&self, records: &[Record]) -> SerializeResult<String> {
        ensure_records(records)?;

        let entries: Vec<BTreeMap<&str, &str>> = records.iter().map(Record::to_map).collect();
        Ok(serde_yaml::to_string(&entries)?)
    }

    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>> {
        ensure_input(input)?;

        let entries: Vec<BTreeMap<String, String>> = serde_yaml::from_str(input)?;
        entries
            .iter()
            .map(|entry| {
                let name = required_field(entry, "name")?;
                let address = required_field(entry, "address")?;
                let phone_number = required_field(entry, "phone_number")?;
                Ok(Record::new(name, address, phone_number)?)
            })
            .collect()
    }
}

fn required_field<'a>(
    entry: &'a BTreeMap<String, String>,
    field: &'static str,
) -> SerializeResult<&'a str> {
    entry
        .get(field)
        .map(String::as_str)
        .ok_or(SerializeError::MissingField(field))
}
