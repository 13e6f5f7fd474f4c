//! Text display formatter.

use super::DisplayFormatter;
use crate::error::SerializeResult;
use crate::models::Record;
use std::fmt::Write;

/// Renders each record as three lines (name, address, phone number)
/// followed by a blank line. An empty record list yields an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDisplayFormatter;

impl DisplayFormatter for TextDisplayFormatter {
    fn display_format(&self, records: &[Record]) -> SerializeResult<String> {
        let mut output = String::new();
        for record in records {
            let _ = write!(
                output,
                "{}\n{}\n{}\n\n",
                record.name(),
                record.address(),
                record.phone_number()
            );
        }
        Ok(output)
    }
}
