//! Record model representing one person in the address book.

use crate::domain::{PhoneNumber, ValidationError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A validated personal data record.
///
/// A `Record` can never exist with an empty field or a malformed phone
/// number: all validation happens in [`Record::new`], and there are no
/// mutation methods afterwards.
///
/// # Example
///
/// ```
/// use personal_data_manager::models::Record;
///
/// let record = Record::new("John Doe", "123 Main St", "555-908-1234").unwrap();
/// assert_eq!(record.name(), "John Doe");
/// assert_eq!(record.to_string(), "John Doe, 123 Main St, 555-908-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    address: String,
    phone_number: PhoneNumber,
}

impl Record {
    /// Create a new record, validating every field.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `name` or `address` is empty, or
    /// when `phone_number` is empty or does not match `###-###-####`.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let address = address.into();
        if address.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }

        let phone_number = PhoneNumber::new(phone_number)?;

        Ok(Self {
            name,
            address,
            phone_number,
        })
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The person's phone number in `###-###-####` form.
    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// A field-name-to-value view for structured codecs.
    ///
    /// The map is keyed `address`, `name`, `phone_number` in iteration
    /// order (BTreeMap sorts its keys), which is what gives the YAML
    /// serializer its alphabetical key layout.
    pub fn to_map(&self) -> BTreeMap<&'static str, &str> {
        BTreeMap::from([
            ("name", self.name.as_str()),
            ("address", self.address.as_str()),
            ("phone_number", self.phone_number.as_str()),
        ])
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.address, self.phone_number)
    }
}
