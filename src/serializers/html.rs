//! HTML codec.

use super::{ensure_input, ensure_records, Serializer};
use crate::error::SerializeResult;
use crate::models::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

static TABLE_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<tr>(.*?)</tr>").expect("row pattern is valid"));
static TABLE_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<td>(.*?)</td>").expect("cell pattern is valid"));

/// A serializer for converting records to and from a minimal HTML table.
///
/// Output is `<html><body><table>` with one `<tr>` per record and three
/// `<td>` cells, no header row (unlike the HTML display formatter).
/// Deserialization accepts exactly-3-cell rows and silently skips rows
/// with any other cell count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer;

impl Serializer for HtmlSerializer {
    fn serialize(&self, records: &[Record]) -> SerializeResult<String> {
        ensure_records(records)?;

        let mut output = String::from("<html>\n<body>\n<table>\n");
        for record in records {
            let _ = writeln!(
                output,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                record.name(),
                record.address(),
                record.phone_number()
            );
        }
        output.push_str("</table>\n</body>\n</html>");

        Ok(output)
    }

    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>> {
        ensure_input(input)?;

        let mut records = Vec::new();
        for row in TABLE_ROW.captures_iter(input) {
            let cells: Vec<&str> = TABLE_CELL
                .captures_iter(&row[1])
                .filter_map(|captures| captures.get(1))
                .map(|cell| cell.as_str())
                .collect();

            // Rows without exactly three cells are not record rows
            if let [name, address, phone_number] = cells[..] {
                records.push(Record::new(
                    name.trim(),
                    address.trim(),
                    phone_number.trim(),
                )?);
            }
        }

        Ok(records)
    }
}
