//! Loading one numeric column from delimited text
//!
//! The first row is the header. Every field of the selected column must parse
//! as a number; a malformed field is reported with its line number and is
//! never skipped or replaced.

use crate::error::{Error, Result};
use std::convert::Infallible;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Which column to extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Zero-based column position
    Index(usize),
    /// Header name
    Name(String),
}

impl FromStr for ColumnSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(s.trim().to_string()),
        })
    }
}

/// A column extracted from a file
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedColumn {
    /// Header of the column
    pub name: String,
    /// Parsed values in file order
    pub values: Vec<f64>,
}

/// Read the selected column from any reader
pub fn load_column<R: io::Read>(reader: R, selector: &ColumnSelector) -> Result<LoadedColumn> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = match selector {
        ColumnSelector::Index(index) if *index < headers.len() => *index,
        ColumnSelector::Index(index) => {
            return Err(Error::MissingColumn(format!(
                "index {index} is out of range for {} columns",
                headers.len()
            )))
        }
        ColumnSelector::Name(name) => headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(format!("no header named '{name}'")))?,
    };
    let name = headers.get(index).unwrap_or_default().to_string();

    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = record.get(index).ok_or_else(|| {
            Error::MissingColumn(format!("line {line} has no field at index {index}"))
        })?;
        let value = field
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::Parse {
                line,
                column: name.clone(),
                value: field.to_string(),
            })?;
        values.push(value);
    }

    debug!("Loaded {} values from column '{}'", values.len(), name);
    Ok(LoadedColumn { name, values })
}

/// Read the selected column from a file
pub fn load_column_from_path<P: AsRef<Path>>(
    path: P,
    selector: &ColumnSelector,
) -> Result<LoadedColumn> {
    let file = File::open(path.as_ref())?;
    load_column(io::BufReader::new(file), selector)
}
