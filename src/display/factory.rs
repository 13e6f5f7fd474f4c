//! Display formatter selector: maps a format name to a formatter instance.

use super::{
    CsvDisplayFormatter, DisplayFormatter, HtmlDisplayFormatter, TextDisplayFormatter,
    YamlDisplayFormatter,
};
use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// The recognized display formats, in selector order.
pub const DISPLAY_FORMATS: &[&str] = &["text", "html", "csv", "yaml"];

/// The closed set of display formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    Text,
    Html,
    Csv,
    Yaml,
}

impl DisplayFormat {
    /// The canonical lowercase name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayFormat::Text => "text",
            DisplayFormat::Html => "html",
            DisplayFormat::Csv => "csv",
            DisplayFormat::Yaml => "yaml",
        }
    }

    /// Build the formatter for this format.
    pub fn formatter(self) -> Box<dyn DisplayFormatter> {
        match self {
            DisplayFormat::Text => Box::new(TextDisplayFormatter),
            DisplayFormat::Html => Box::new(HtmlDisplayFormatter),
            DisplayFormat::Csv => Box::new(CsvDisplayFormatter),
            DisplayFormat::Yaml => Box::new(YamlDisplayFormatter),
        }
    }
}

impl FromStr for DisplayFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(DisplayFormat::Text),
            "html" => Ok(DisplayFormat::Html),
            "csv" => Ok(DisplayFormat::Csv),
            "yaml" => Ok(DisplayFormat::Yaml),
            _ => Err(FormatError::Unsupported {
                name: s.to_string(),
                supported: DISPLAY_FORMATS,
            }),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the display formatter for `name`.
///
/// # Errors
///
/// Returns [`FormatError::Unsupported`], listing the recognized set, when
/// `name` is not one of [`DISPLAY_FORMATS`].
pub fn create_formatter(name: &str) -> Result<Box<dyn DisplayFormatter>, FormatError> {
    name.parse::<DisplayFormat>().map(DisplayFormat::formatter)
}

/// Look up the formatter for `name`, returning `None` instead of failing.
pub fn formatter_for(name: &str) -> Option<Box<dyn DisplayFormatter>> {
    create_formatter(name).ok()
}
