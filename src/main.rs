//! Personal Data Manager - main entry point
//!
//! Parses the command line, opens the record store, and dispatches to the
//! add/display/convert/filter operations. Storage and filesystem failures
//! on the convert and add paths are reported and abort the operation;
//! record validation errors always propagate.

use anyhow::Result;
use clap::Parser;
use personal_data_manager::cli::{Cli, Command};
use personal_data_manager::config::Config;
use personal_data_manager::models::Record;
use personal_data_manager::store::{AddressBookStore, FilterField, MatchKind};
use personal_data_manager::{convert, display, serializers};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logging goes to stderr; stdout is reserved for command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = AddressBookStore::open(&config.database_path)?;
    info!(path = %config.database_path.display(), "record store opened");

    match cli.command {
        Command::Add {
            name,
            address,
            phone_number,
        } => add_record(&store, name, address, phone_number),
        Command::Display { format } => display_records(&store, &format),
        Command::Convert {
            format,
            output,
            preview,
        } => convert_dataset(&store, &format, output, preview),
        Command::Filter { field, pattern } => {
            filter_records(&store, &field, &pattern.unwrap_or_default())
        }
    }
}

fn add_record(
    store: &AddressBookStore,
    name: String,
    address: String,
    phone_number: String,
) -> Result<()> {
    // Validation errors propagate; a record never reaches the store half-formed
    let record = Record::new(name, address, phone_number)?;

    if let Err(e) = store.insert(&record) {
        error!("error adding record: {e}");
        eprintln!("Error adding record: {e}");
        return Ok(());
    }

    println!("Record added: {record}");
    Ok(())
}

fn display_records(store: &AddressBookStore, format: &str) -> Result<()> {
    let records = store.all_records()?;
    if records.is_empty() {
        println!("No records found in the database.");
        return Ok(());
    }

    let formatter = match display::create_formatter(format) {
        Ok(formatter) => formatter,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(());
        }
    };

    println!("{}", formatter.display_format(&records)?);
    Ok(())
}

fn convert_dataset(
    store: &AddressBookStore,
    format: &str,
    output: Option<PathBuf>,
    preview: bool,
) -> Result<()> {
    let serializer = match serializers::create_serializer(format) {
        Ok(serializer) => serializer,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(());
        }
    };

    let records = match store.all_records() {
        Ok(records) => records,
        Err(e) => {
            error!("error reading records: {e}");
            eprintln!("Error reading records: {e}");
            return Ok(());
        }
    };

    let serialized = match serializer.serialize(&records) {
        Ok(serialized) => serialized,
        Err(e) => {
            eprintln!("Error: {e}");
            return Ok(());
        }
    };

    if preview {
        println!("{serialized}");
        return Ok(());
    }

    // clap guarantees --output is present when --preview is not
    let Some(directory) = output else {
        eprintln!("Error: either --preview or --output must be specified.");
        return Ok(());
    };

    match convert::save_serialized(&directory, format, &serialized) {
        Ok(path) => println!("Serialized data saved to {}.", path.display()),
        Err(e) => {
            error!("error saving serialized data: {e}");
            eprintln!("Error: {e}");
        }
    }
    Ok(())
}

fn filter_records(store: &AddressBookStore, field: &str, pattern: &str) -> Result<()> {
    // An unknown field is a caller mistake and propagates
    let field: FilterField = field.parse()?;
    let kind = MatchKind::for_pattern(pattern);

    let records = store.filter(field, pattern, kind)?;
    if records.is_empty() {
        println!(
            "No records found with field '{}' matching pattern '{pattern}'",
            field.column()
        );
        return Ok(());
    }

    for record in records {
        println!("{record}");
    }
    Ok(())
}
