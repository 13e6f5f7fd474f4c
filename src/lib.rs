//! Personal Data Manager - a local address book with multi-format conversion.
//!
//! Records (name, address, phone number) live in a local SQLite database and
//! can be filtered, displayed, and converted across six textual formats.
//!
//! # Architecture
//!
//! - **models**: the validated [`models::Record`] entity
//! - **domain**: value objects and validation rules (phone numbers)
//! - **error**: custom error types for precise error handling
//! - **serializers**: six two-way codecs (JSON, YAML, XML, CSV, text, HTML)
//!   and their format selector
//! - **display**: four one-way display formatters and their selector
//! - **store**: the SQLite record store access layer
//! - **convert**: conversion output file naming and writing
//! - **config**: configuration from environment variables
//! - **cli**: command-line argument definitions

pub mod cli;
pub mod config;
pub mod convert;
pub mod display;
pub mod domain;
pub mod error;
pub mod models;
pub mod serializers;
pub mod store;

pub use config::Config;
pub use display::{create_formatter, DisplayFormat, DisplayFormatter, DISPLAY_FORMATS};
pub use domain::{PhoneNumber, ValidationError};
pub use error::{ConvertError, FormatError, SerializeError, StorageError};
pub use models::Record;
pub use serializers::{create_serializer, serializer_for, Format, Serializer, SUPPORTED_FORMATS};
pub use store::{AddressBookStore, FilterField, MatchKind};
