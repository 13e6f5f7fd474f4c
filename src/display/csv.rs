//! CSV display formatter.

use super::DisplayFormatter;
use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;
use csv::Writer;

/// Renders records as CSV with a `name,address,phone number` header.
///
/// Note the space in `phone number`: the display header deliberately
/// differs from the CSV serializer's `phone_number`, and tests pin both
/// literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDisplayFormatter;

impl DisplayFormatter for CsvDisplayFormatter {
    fn display_format(&self, records: &[Record]) -> SerializeResult<String> {
        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(["name", "address", "phone number"])?;
        for record in records {
            writer.write_record([record.name(), record.address(), record.phone_number()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| SerializeError::Malformed(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| SerializeError::Malformed(e.to_string()))
    }
}
