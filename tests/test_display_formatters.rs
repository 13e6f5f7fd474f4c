//! Integration tests for the display formatter family and its selector.

use personal_data_manager::display::{create_formatter, DISPLAY_FORMATS};
use personal_data_manager::models::Record;
use pretty_assertions::assert_eq;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("John Doe", "123 Main St", "555-908-1234").unwrap(),
        Record::new("Jane Smith", "456 Second St", "555-908-5678").unwrap(),
    ]
}

#[test]
fn test_output_formatting_all_formats() {
    let records = sample_records();
    for format in DISPLAY_FORMATS {
        let formatter = create_formatter(format).unwrap();
        let output = formatter.display_format(&records).unwrap();
        assert!(
            output.contains("John Doe"),
            "{format}: record missing from output"
        );
    }
}

#[test]
fn test_format_empty_list_yields_empty_text() {
    let formatter = create_formatter("text").unwrap();
    assert_eq!(formatter.display_format(&[]).unwrap(), "");
}

#[test]
fn test_format_text_output() {
    let formatter = create_formatter("text").unwrap();
    let output = formatter.display_format(&sample_records()).unwrap();
    assert_eq!(
        output,
        "John Doe\n123 Main St\n555-908-1234\n\nJane Smith\n456 Second St\n555-908-5678\n\n"
    );
}

#[test]
fn test_format_csv_output_header_uses_a_space() {
    let formatter = create_formatter("csv").unwrap();
    let output = formatter.display_format(&sample_records()).unwrap();
    assert_eq!(
        output,
        "name,address,phone number\n\
         John Doe,123 Main St,555-908-1234\n\
         Jane Smith,456 Second St,555-908-5678\n"
    );
}

#[test]
fn test_format_html_output() {
    let formatter = create_formatter("html").unwrap();
    let output = formatter.display_format(&sample_records()).unwrap();
    assert_eq!(
        output,
        "<html>\n\
         <head>\n\
         <title>Personal Data</title>\n\
         </head>\n\
         <body>\n\
         <table>\n\
         <tr><th>Name</th><th>Address</th><th>Phone Number</th></tr>\n\
         <tr><td>John Doe</td><td>123 Main St</td><td>555-908-1234</td></tr>\n\
         <tr><td>Jane Smith</td><td>456 Second St</td><td>555-908-5678</td></tr>\n\
         </table>\n\
         </body>\n\
         </html>"
    );
}

#[test]
fn test_format_yaml_output_keeps_declared_key_order() {
    let formatter = create_formatter("yaml").unwrap();
    let output = formatter.display_format(&sample_records()).unwrap();
    assert_eq!(
        output,
        "personal_data:\n\
         - name: John Doe\n\
         \x20 address: 123 Main St\n\
         \x20 phone_number: 555-908-1234\n\
         - name: Jane Smith\n\
         \x20 address: 456 Second St\n\
         \x20 phone_number: 555-908-5678\n"
    );
}

#[test]
fn test_create_formatter_with_unsupported_format() {
    let err = create_formatter("invalid_format").unwrap_err();
    assert!(err.to_string().contains("text, html, csv, yaml"));
}
