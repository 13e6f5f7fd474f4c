//! Display formatters: one-way, human-facing renderers for records.
//!
//! Unlike the codecs in [`crate::serializers`], these only render; their
//! output is not meant to round-trip.

pub mod csv;
pub mod factory;
pub mod html;
pub mod text;
pub mod yaml;

pub use self::csv::CsvDisplayFormatter;
pub use self::factory::{create_formatter, formatter_for, DisplayFormat, DISPLAY_FORMATS};
pub use self::html::HtmlDisplayFormatter;
pub use self::text::TextDisplayFormatter;
pub use self::yaml::YamlDisplayFormatter;

use crate::error::SerializeResult;
use crate::models::Record;

/// A one-way renderer turning records into human-readable text.
pub trait DisplayFormatter: std::fmt::Debug {
    /// Render the records for display.
    ///
    /// Formatters with fixed scaffolding (headers, table tags) render it
    /// even for an empty slice; the text formatter yields an empty string.
    fn display_format(&self, records: &[Record]) -> SerializeResult<String>;
}
