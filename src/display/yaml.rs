//! YAML display formatter.

use super::DisplayFormatter;
use crate::error::SerializeResult;
use crate::models::Record;
use serde::Serialize;

#[derive(Serialize)]
struct RecordFields<'a> {
    name: &'a str,
    address: &'a str,
    phone_number: &'a str,
}

#[derive(Serialize)]
struct PersonalDataDoc<'a> {
    personal_data: Vec<RecordFields<'a>>,
}

/// Renders records as a `personal_data` mapping over a sequence of
/// `{name, address, phone_number}` entries, preserving declared key
/// order (not alphabetized, unlike the YAML serializer).
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDisplayFormatter;

impl DisplayFormatter for YamlDisplayFormatter {
    fn display_format(&self, records: &[Record]) -> SerializeResult<String> {
        let doc = PersonalDataDoc {
            personal_data: records
                .iter()
                .map(|record| RecordFields {
                    name: record.name(),
                    address: record.address(),
                    phone_number: record.phone_number(),
                })
                .collect(),
        };
        Ok(serde_yaml::to_string(&doc)?)
    }
}
