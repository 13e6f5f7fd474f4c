//! Serializer selector: maps a format name to a codec instance.

use super::{
    CsvSerializer, HtmlSerializer, JsonSerializer, Serializer, TextSerializer, XmlSerializer,
    YamlSerializer,
};
use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// The recognized serialization formats, in selector order.
pub const SUPPORTED_FORMATS: &[&str] = &["json", "yaml", "xml", "csv", "text", "html"];

/// The closed set of serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
    Csv,
    Text,
    Html,
}

impl Format {
    /// The canonical lowercase name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
            Format::Csv => "csv",
            Format::Text => "text",
            Format::Html => "html",
        }
    }

    /// Build the codec for this format.
    pub fn serializer(self) -> Box<dyn Serializer> {
        match self {
            Format::Json => Box::new(JsonSerializer),
            Format::Yaml => Box::new(YamlSerializer),
            Format::Xml => Box::new(XmlSerializer),
            Format::Csv => Box::new(CsvSerializer),
            Format::Text => Box::new(TextSerializer),
            Format::Html => Box::new(HtmlSerializer),
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "xml" => Ok(Format::Xml),
            "csv" => Ok(Format::Csv),
            "text" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            _ => Err(FormatError::Unsupported {
                name: s.to_string(),
                supported: SUPPORTED_FORMATS,
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the codec for `name`.
///
/// # Errors
///
/// Returns [`FormatError::Unsupported`], listing the recognized set, when
/// `name` is not one of [`SUPPORTED_FORMATS`].
pub fn create_serializer(name: &str) -> Result<Box<dyn Serializer>, FormatError> {
    name.parse::<Format>().map(Format::serializer)
}

/// Look up the codec for `name`, returning `None` instead of failing.
///
/// For callers that want to probe support without raising.
pub fn serializer_for(name: &str) -> Option<Box<dyn Serializer>> {
    create_serializer(name).ok()
}
