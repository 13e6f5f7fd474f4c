//! HTML display formatter.

use super::DisplayFormatter;
use crate::error::SerializeResult;
use crate::models::Record;
use std::fmt::Write;

/// Renders records as a full HTML document with a titled head and a table
/// carrying a `Name`/`Address`/`Phone Number` header row. The scaffolding
/// is rendered even with zero data rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlDisplayFormatter;

impl DisplayFormatter for HtmlDisplayFormatter {
    fn display_format(&self, records: &[Record]) -> SerializeResult<String> {
        let mut output =
            String::from("<html>\n<head>\n<title>Personal Data</title>\n</head>\n<body>\n<table>\n");
        output.push_str("<tr><th>Name</th><th>Address</th><th>Phone Number</th></tr>\n");

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
}
