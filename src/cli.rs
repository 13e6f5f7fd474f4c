//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the Personal Data Manager.
#[derive(Parser, Debug)]
#[command(name = "personal-data-manager")]
#[command(about = "Manage personal contact records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands of the Personal Data Manager.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new record to the dataset
    Add {
        /// Name of the person
        #[arg(short, long)]
        name: String,

        /// Address of the person
        #[arg(short, long)]
        address: String,

        /// Phone number of the person (###-###-####)
        #[arg(short, long)]
        phone_number: String,
    },

    /// Display records in the dataset
    Display {
        /// Output format: text, html, csv, or yaml
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Convert the dataset to another format and save it to a file
    #[command(group(ArgGroup::new("destination").required(true).multiple(true).args(["output", "preview"])))]
    Convert {
        /// Output format: json, yaml, xml, csv, text, or html
        #[arg(short, long)]
        format: String,

        /// Directory to save the serialized data to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Display output without saving to a file, even if --output is set
        #[arg(short, long)]
        preview: bool,
    },

    /// Filter records by field and pattern and display the results
    Filter {
        /// Field to filter by: name, address, or phone_number
        #[arg(short, long)]
        field: String,

        /// Pattern to match (SQL LIKE, or glob when it contains * or ?)
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "personal-data-manager",
            "add",
            "--name",
            "John",
            "--address",
            "123 Main St",
            "--phone-number",
            "555-908-1234",
        ])
        .unwrap();
        match cli.command {
            Command::Add {
                name,
                address,
                phone_number,
            } => {
                assert_eq!(name, "John");
                assert_eq!(address, "123 Main St");
                assert_eq!(phone_number, "555-908-1234");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_display_defaults_to_text() {
        let cli = Cli::try_parse_from(["personal-data-manager", "display"]).unwrap();
        match cli.command {
            Command::Display { format } => assert_eq!(format, "text"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_convert_preview() {
        let cli = Cli::try_parse_from([
            "personal-data-manager",
            "convert",
            "--format",
            "json",
            "--preview",
        ])
        .unwrap();
        match cli.command {
            Command::Convert {
                format,
                output,
                preview,
            } => {
                assert_eq!(format, "json");
                assert!(output.is_none());
                assert!(preview);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_convert_requires_output_or_preview() {
        assert!(Cli::try_parse_from(["personal-data-manager", "convert", "--format", "json"])
            .is_err());
        assert!(Cli::try_parse_from([
            "personal-data-manager",
            "convert",
            "--format",
            "json",
            "--output",
            "out",
            "--preview",
        ])
        .is_ok());
    }

    #[test]
    fn test_missing_subcommand_is_a_usage_error() {
        assert!(Cli::try_parse_from(["personal-data-manager"]).is_err());
    }
}
