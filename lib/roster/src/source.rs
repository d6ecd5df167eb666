//! Sources of guest rows.

use crate::config::{ColumnMapping, RosterConfig};
use crate::error::RosterError;
use csv::{ReaderBuilder, StringRecord, Trim};
use rootcause::prelude::Report;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use table_finder_core::{Guest, TableLabel};
use tracing::{debug, instrument};

/// Something that can produce the raw guest rows of a seating list.
///
/// Rows are returned in source order and may contain duplicates; the
/// [`GuestStore`](crate::GuestStore) removes them.
pub trait GuestSource: Send + Sync {
    /// Reads every guest row.
    fn load(&self) -> Result<Vec<Guest>, Report<RosterError>>;

    /// Short description used in log output.
    fn describe(&self) -> String;
}

/// A seating list stored as a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    columns: ColumnMapping,
}

/// Header positions of the three guest fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndexes {
    first_name: usize,
    last_name: usize,
    table: usize,
}

impl CsvSource {
    /// Creates a CSV source.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, columns: ColumnMapping) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }

    /// Creates a CSV source from roster configuration.
    #[must_use]
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(config.path.clone(), config.columns.clone())
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_from<R: Read>(&self, input: R) -> Result<Vec<Guest>, Report<RosterError>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| self.unparsable(&e))?
            .clone();
        let columns = self.locate_columns(&headers)?;
        debug!(?columns, "located seating list columns");

        let mut guests = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| self.unparsable(&e))?;
            let cell = |idx: usize| record.get(idx).unwrap_or_default();
            guests.push(Guest::new(
                cell(columns.first_name),
                cell(columns.last_name),
                TableLabel::from_cell(cell(columns.table)),
            ));
        }

        Ok(guests)
    }

    fn locate_columns(&self, headers: &StringRecord) -> Result<ColumnIndexes, RosterError> {
        let first_name = self.require(
            headers,
            find_header(headers, &self.columns.first_name),
            &self.columns.first_name,
        )?;
        let last_name = self.require(
            headers,
            find_header(headers, &self.columns.last_name),
            &self.columns.last_name,
        )?;
        let table = self.require(
            headers,
            find_header(headers, &self.columns.table).or_else(|| find_table_header(headers)),
            &self.columns.table,
        )?;

        Ok(ColumnIndexes {
            first_name,
            last_name,
            table,
        })
    }

    fn require(
        &self,
        headers: &StringRecord,
        position: Option<usize>,
        column: &str,
    ) -> Result<usize, RosterError> {
        position.ok_or_else(|| RosterError::MissingColumn {
            path: self.path.clone(),
            column: column.to_string(),
            headers: headers.iter().map(str::to_string).collect(),
        })
    }

    fn unparsable(&self, err: &csv::Error) -> RosterError {
        RosterError::Unparsable {
            path: self.path.clone(),
            line: err.position().map(csv::Position::line),
            reason: err.to_string(),
        }
    }
}

impl GuestSource for CsvSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<Guest>, Report<RosterError>> {
        let file = File::open(&self.path).map_err(|e| RosterError::Missing {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        self.read_from(file)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

fn find_header(headers: &StringRecord, wanted: &str) -> Option<usize> {
    let wanted = wanted.trim();
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(wanted))
}

fn find_table_header(headers: &StringRecord) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.to_lowercase().contains("table"))
}

/// A fixed, in-memory list of guests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    guests: Vec<Guest>,
}

impl StaticSource {
    /// Creates a source that always yields the given guests.
    #[must_use]
    pub fn new(guests: Vec<Guest>) -> Self {
        Self { guests }
    }
}

impl GuestSource for StaticSource {
    fn load(&self) -> Result<Vec<Guest>, Report<RosterError>> {
        Ok(self.guests.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} rows", self.guests.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_csv(
            "first_name,last_name,table_number\nJed,Lee,T1\nClarisa,Lee,T1\nAnna,Soliman,T2\n",
        );
        let source = CsvSource::new(file.path(), ColumnMapping::default());

        let guests = source.load().expect("load");

        assert_eq!(
            guests,
            vec![
                Guest::new("Jed", "Lee", "T1"),
                Guest::new("Clarisa", "Lee", "T1"),
                Guest::new("Anna", "Soliman", "T2"),
            ]
        );
    }

    #[test]
    fn trims_headers_and_cells() {
        let file = write_csv(" first_name , last_name ,table_number \n  Jed , Lee , T1 \n");
        let source = CsvSource::new(file.path(), ColumnMapping::default());

        let guests = source.load().expect("load");

        assert_eq!(guests, vec![Guest::new("Jed", "Lee", "T1")]);
    }

    #[test]
    fn falls_back_to_any_table_column() {
        let file = write_csv("first_name,last_name,Assigned Table\nJed,Lee,Table 1\n");
        let source = CsvSource::new(file.path(), ColumnMapping::default());

        let guests = source.load().expect("load");

        assert_eq!(guests[0].table, TableLabel::from("Table 1"));
    }

    #[test]
    fn compact_mapping_reads_alternate_headers() {
        let file = write_csv("firstname,lastname,table\nAnna,Soliman,2\n");
        let source = CsvSource::new(file.path(), ColumnMapping::compact());

        let guests = source.load().expect("load");

        assert_eq!(guests, vec![Guest::new("Anna", "Soliman", "2")]);
    }

    #[test]
    fn blank_table_cell_keeps_guest() {
        let file = write_csv("first_name,last_name,table_number\nJed,Lee,\nAnna,Soliman\n");
        let source = CsvSource::new(file.path(), ColumnMapping::default());

        let guests = source.load().expect("load");

        assert_eq!(guests.len(), 2);
        assert!(guests.iter().all(|g| g.table.is_unassigned()));
    }

    #[test]
    fn missing_file_is_reported() {
        let source = CsvSource::new("/nonexistent/seating.csv", ColumnMapping::default());

        let err = source.load().expect_err("should fail");

        assert!(matches!(
            err.current_context(),
            RosterError::Missing { .. }
        ));
    }

    #[test]
    fn missing_name_column_is_reported() {
        let file = write_csv("name,table_number\nJed Lee,T1\n");
        let source = CsvSource::new(file.path(), ColumnMapping::default());

        let err = source.load().expect_err("should fail");

        match err.current_context() {
            RosterError::MissingColumn { column, .. } => assert_eq!(column, "first_name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_unparsable() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"first_name,last_name,table_number\nJ\xffed,Lee,T1\n")
            .expect("write csv");
        let source = CsvSource::new(file.path(), ColumnMapping::default());

        let err = source.load().expect_err("should fail");

        assert!(matches!(
            err.current_context(),
            RosterError::Unparsable { .. }
        ));
    }

    #[test]
    fn static_source_returns_rows() {
        let source = StaticSource::new(vec![Guest::new("Jed", "Lee", "T1")]);
        assert_eq!(source.load().expect("load").len(), 1);
        assert_eq!(source.describe(), "static:1 rows");
    }
}
