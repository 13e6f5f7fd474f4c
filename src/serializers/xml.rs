//! XML codec.

use super::{ensure_input, ensure_records, Serializer};
use crate::error::{SerializeError, SerializeResult};
use crate::models::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

static RECORD_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<record>(.*?)</record>").expect("record pattern is valid"));
static NAME_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<name>(.*?)</name>").expect("name pattern is valid"));
static ADDRESS_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<address>(.*?)</address>").expect("address pattern is valid"));
static PHONE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<phone_number>(.*?)</phone_number>").expect("phone pattern is valid")
});

/// A serializer for converting records to and from XML format.
///
/// Output carries an XML declaration, a `<records>` root, one `<record>`
/// child per record with `<name>`, `<address>`, `<phone_number>` field
/// children, pretty-printed with 2-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerializer;

impl Serializer for XmlSerializer {
    fn serialize(&self, records: &[Record]) -> SerializeResult<String> {
        ensure_records(records)?;

        let mut output = String::from("<?xml version=\"1.0\" ?>\n<records>\n");
        for record in records {
            output.push_str("  <record>\n");
            let _ = writeln!(output, "    <name>{}</name>", escape(record.name()));
            let _ = writeln!(output, "    <address>{}</address>", escape(record.address()));
            let _ = writeln!(
                output,
                "    <phone_number>{}</phone_number>",
                escape(record.phone_number())
            );
            output.push_str("  </record>\n");
        }
        output.push_str("</records>\n");

        Ok(output)
    }

    fn deserialize(&self, input: &str) -> SerializeResult<Vec<Record>> {
        ensure_input(input)?;

        if !input.contains("<records") {
            return Err(SerializeError::Malformed(
                "missing <records> root element".to_string(),
            ));
        }

        let mut records = Vec::new();
        for block in RECORD_BLOCK.captures_iter(input) {
            let body = &block[1];
            let name = field(&NAME_TAG, body, "name")?;
            let address = field(&ADDRESS_TAG, body, "address")?;
            let phone_number = field(&PHONE_TAG, body, "phone_number")?;
            records.push(Record::new(
                unescape(name.trim()),
                unescape(address.trim()),
                unescape(phone_number.trim()),
            )?);
        }

        Ok(records)
    }
}

fn field<'a>(pattern: &Regex, body: &'a str, field: &'static str) -> SerializeResult<&'a str> {
    pattern
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .ok_or(SerializeError::MissingField(field))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_layout() {
        let records = vec![Record::new("Alice", "123 Main St", "555-123-4567").unwrap()];
        let serialized = XmlSerializer.serialize(&records).unwrap();
        assert_eq!(
            serialized,
            "<?xml version=\"1.0\" ?>\n\
             <records>\n\
             \x20 <record>\n\
             \x20   <name>Alice</name>\n\
             \x20   <address>123 Main St</address>\n\
             \x20   <phone_number>555-123-4567</phone_number>\n\
             \x20 </record>\n\
             </records>\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let records = vec![
            Record::new("John Doe", "123 Main St", "555-908-1234").unwrap(),
            Record::new("Jane Smith", "456 Second St", "555-908-5678").unwrap(),
        ];
        let serialized = XmlSerializer.serialize(&records).unwrap();
        let deserialized = XmlSerializer.deserialize(&serialized).unwrap();
        assert_eq!(deserialized, records);
    }

    #[test]
    fn test_escapes_markup_in_fields() {
        let records = vec![Record::new("A & B <Co>", "123 Main St", "555-123-4567").unwrap()];
        let serialized = XmlSerializer.serialize(&records).unwrap();
        assert!(serialized.contains("<name>A &amp; B &lt;Co&gt;</name>"));

        let deserialized = XmlSerializer.deserialize(&serialized).unwrap();
        assert_eq!(deserialized[0].name(), "A & B <Co>");
    }

    #[test]
    fn test_empty_input_errors() {
        assert!(matches!(
            XmlSerializer.serialize(&[]),
            Err(SerializeError::NoRecords)
        ));
        assert!(matches!(
            XmlSerializer.deserialize(""),
            Err(SerializeError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_root_is_malformed() {
        assert!(matches!(
            XmlSerializer.deserialize("<record></record>"),
            Err(SerializeError::Malformed(_))
        ));
    }

    #[test]
    fn test_missing_field_names_itself() {
        let input = "<records><record><name>Alice</name>\
                     <address>123 Main St</address></record></records>";
        let err = XmlSerializer.deserialize(input).unwrap_err();
        assert!(matches!(err, SerializeError::MissingField("phone_number")));
    }
}
