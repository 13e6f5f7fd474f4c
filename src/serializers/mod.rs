//! Serialization codecs for personal data records.
//!
//! Six codecs (JSON, YAML, XML, CSV, plain text, HTML) each implement the
//! [`Serializer`] trait: `serialize` turns an ordered slice of records into
//! text and `deserialize` turns that text back into records. Every codec
//! shares the same preconditions, expressed here as [`ensure_records`] and
//! [`ensure_input`] rather than as inherited method stubs.

pub mod csv;
pub mod factory;
pub mod html;
pub mod json;
pub mod text;
pub mod xml;
pub mod yaml;

pub use self::csv::CsvSerializer;
pub use self::factory::{create_serializer, serializer_for, Format, SUPPORTED_FORMATS};
pub use self::html::HtmlSerializer;
pub use self::json::JsonSerializer;
pub use self::text::TextSerializer;
pub use self::xml::XmlSerializer;
pub use self::yaml::YamlSerializer;

use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;

/// A two-way codec between records and one textual format.
///
/// Implementations must uphold the round-trip law: for any non-empty slice
/// of valid records whose fields avoid the format's own delimiter,
/// `deserialize(serialize(records))` yields records with the same display
/// strings, in the same order.
pub trait Serializer: std::fmt::Debug {
    /// Serialize an ordered sequence of records.
    ///
    /// # Errors
    ///
    /// Fails with [`SerializeError::NoRecords`] when `records` is empty.
    fn serialize(&self, records: &[Record]) -> SerializeResult<String>;

    /// Deserialize records from their textual representation.
    ///
    /// # Errors
    ///
    /// Fails with [`SerializeError::EmptyInput`] when `input` is empty or
    /// blank, and with a malformed-data or missing-field error when the
    /// structure cannot be parsed.
    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>>;
}

/// Shared precondition: serializing requires at least one record.
pub(crate) fn ensure_records(records: &[Record]) -> SerializeResult<()> {
    if records.is_empty() {
        return Err(SerializeError::NoRecords);
    }
    Ok(())
}

/// Shared precondition: deserializing requires non-blank input.
pub(crate) fn ensure_input(input: &str) -> SerializeResult<()> {
    if input.trim().is_empty() {
        return Err(SerializeError::EmptyInput);
    }
    Ok(())
}
