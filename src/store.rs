//! Record store access layer.
//!
//! A thin, single-connection wrapper around parameterized SQL against a
//! local SQLite database. One `personal_data` table, three text columns,
//! no primary key; the table is created on first use. The store handle is
//! passed explicitly to whichever operation needs it and the connection is
//! released when the handle drops.

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

static TEN_DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3})(\d{3})(\d{4})").expect("digit pattern is valid"));

/// The columns a filter may target. A closed enum so user input is never
/// interpolated into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Address,
    PhoneNumber,
}

impl FilterField {
    /// The column name in the `personal_data` table.
    pub fn column(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Address => "address",
            FilterField::PhoneNumber => "phone_number",
        }
    }
}

impl FromStr for FilterField {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FilterField::Name),
            "address" => Ok(FilterField::Address),
            "phone_number" => Ok(FilterField::PhoneNumber),
            _ => Err(StorageError::InvalidField(s.to_string())),
        }
    }
}

/// How a filter pattern is matched against the selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Match any row where the column is present (`IS NOT NULL`)
    Presence,
    /// SQL `LIKE` matching
    Like,
    /// SQLite `GLOB` matching
    Glob,
}

impl MatchKind {
    /// Pick the match kind the way the command surface does: glob when the
    /// pattern carries `*` or `?` wildcards, LIKE for other non-empty
    /// patterns, presence otherwise.
    pub fn for_pattern(pattern: &str) -> Self {
        if pattern.is_empty() {
            MatchKind::Presence
        } else if pattern.contains(['*', '?']) {
            MatchKind::Glob
        } else {
            MatchKind::Like
        }
    }
}

/// Single-connection access to the personal data table.
pub struct AddressBookStore {
    conn: Connection,
}

impl AddressBookStore {
    /// Open (or create) the database at `path` and ensure the schema
    /// exists. Missing parent directories are created.
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory database. Used by tests.
    pub fn open_in_memory() -> StorageResult<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Idempotent table creation.
    fn ensure_schema(&self) -> StorageResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS personal_data (
                name TEXT,
                address TEXT,
                phone_number TEXT
            )",
            [],
        )?;
        Ok(())
    }

    /// Insert a record. Each insert commits individually.
    pub fn insert(&self, record: &Record) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO personal_data (name, address, phone_number) VALUES (?1, ?2, ?3)",
            params![record.name(), record.address(), record.phone_number()],
        )?;
        debug!(name = record.name(), "record inserted");
        Ok(())
    }

    /// All records, in insertion order.
    pub fn all_records(&self) -> StorageResult<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, address, phone_number FROM personal_data")?;
        let rows = stmt.query_map([], row_fields)?;

        let mut records = Vec::new();
        for row in rows {
            let (name, address, phone_number) = row?;
            records.push(Record::new(name, address, phone_number)?);
        }
        Ok(records)
    }

    /// Filter records by `field` and `pattern`, normalizing each result
    /// row for presentation before wrapping it in a [`Record`].
    pub fn filter(
        &self,
        field: FilterField,
        pattern: &str,
        kind: MatchKind,
    ) -> StorageResult<Vec<Record>> {
        let predicate = match kind {
            MatchKind::Presence => format!("{} IS NOT NULL", field.column()),
            MatchKind::Like => format!("{} LIKE ?1", field.column()),
            MatchKind::Glob => format!("{} GLOB ?1", field.column()),
        };
        let sql = format!("SELECT name, address, phone_number FROM personal_data WHERE {predicate}");
        let mut stmt = self.conn.prepare(&sql)?;

        let rows: Vec<(String, String, String)> = match kind {
            MatchKind::Presence => stmt.query_map([], row_fields)?.collect::<Result<_, _>>()?,
            MatchKind::Like | MatchKind::Glob => stmt
                .query_map(params![pattern], row_fields)?
                .collect::<Result<_, _>>()?,
        };
        debug!(field = field.column(), rows = rows.len(), "filter query done");

        rows.into_iter()
            .map(|(name, address, phone_number)| normalize(&name, &address, &phone_number))
            .collect()
    }
}

fn row_fields(row: &Row<'_>) -> rusqlite::Result<(String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

/// Presentation normalization, not a storage guarantee: any run of ten
/// consecutive digits in the phone column is hyphenated into
/// `###-###-####`, and name/address are trimmed and title-cased.
fn normalize(name: &str, address: &str, phone_number: &str) -> StorageResult<Record> {
    let phone = TEN_DIGIT_RUN.replace_all(phone_number, "${1}-${2}-${3}");
    Ok(Record::new(
        title_case(name.trim()),
        title_case(address.trim()),
        phone.trim(),
    )?)
}

/// Title-case every alphabetic run: first letter uppercased, the rest
/// lowered. `123 main st` becomes `123 Main St`, `o'brien` becomes
/// `O'Brien`.
fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(ch);
            in_word = false;
        }
    }
    output
}
