//! Spreadsheet loader for the record store
//!
//! Parses an uploaded `.xlsx`/`.xls` workbook into a [`RecordStore`],
//! validating the required header names and normalizing the national-id
//! column to digits only.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto_from_rs};
use tracing::{info, warn};

use crate::types::LoadOptions;
use shared::{
    COLUMN_NAME, COLUMN_NATIONAL_ID, COLUMN_TEAM, LoadError, PersonRecord, RecordStore,
    REQUIRED_COLUMNS,
};

/// Load a record store from raw workbook bytes with default options
pub fn load_from_bytes(bytes: &[u8]) -> Result<RecordStore, LoadError> {
    load_with_options(bytes, &LoadOptions::default())
}

/// Load a record store from a workbook file on disk
///
/// An unreadable file is a parse failure, the same as an unreadable upload.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RecordStore, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| LoadError::ParseFailure {
        message: format!("{}: {e}", path.display()),
    })?;
    load_from_bytes(&bytes)
}

/// Load a record store, honouring the worksheet selection in `options`
pub fn load_with_options(bytes: &[u8], options: &LoadOptions) -> Result<RecordStore, LoadError> {
    let result = parse_workbook(bytes, options);

    match &result {
        Ok(store) => info!(
            rows = store.len(),
            extra_columns = store.extra_columns().len(),
            "loaded roster spreadsheet"
        ),
        Err(err) => warn!(error = %err, "rejected roster spreadsheet"),
    }

    result
}

fn parse_workbook(bytes: &[u8], options: &LoadOptions) -> Result<RecordStore, LoadError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|e| LoadError::ParseFailure {
            message: e.to_string(),
        })?;

    let range = select_range(&mut workbook, options)?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        // A sheet without a header row has none of the required columns.
        return Err(LoadError::SchemaMismatch {
            missing: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(cell_text).collect();

    let name_idx = headers.iter().position(|h| h == COLUMN_NAME);
    let id_idx = headers.iter().position(|h| h == COLUMN_NATIONAL_ID);
    let team_idx = headers.iter().position(|h| h == COLUMN_TEAM);

    let (Some(name_idx), Some(id_idx), Some(team_idx)) = (name_idx, id_idx, team_idx) else {
        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !headers.iter().any(|h| h == *c))
            .map(|c| c.to_string())
            .collect();
        return Err(LoadError::SchemaMismatch { missing });
    };

    // Extra columns are tolerated and carried through for display only.
    let extra_indices: Vec<usize> = (0..headers.len())
        .filter(|&i| i != name_idx && i != id_idx && i != team_idx)
        .collect();
    let extra_columns: Vec<String> = extra_indices.iter().map(|&i| headers[i].clone()).collect();

    let mut records = Vec::new();
    for row in rows {
        let name = cell_at(row, name_idx);
        let raw_id = cell_at(row, id_idx);
        let team = cell_at(row, team_idx);

        // Rows with all three required cells empty are formatting noise.
        if name.is_empty() && raw_id.is_empty() && team.is_empty() {
            continue;
        }

        let extras = extra_indices.iter().map(|&i| cell_at(row, i)).collect();
        records.push(PersonRecord {
            name,
            national_id: digits_only(&raw_id),
            team,
            extras,
        });
    }

    Ok(RecordStore::new(records, extra_columns))
}

fn select_range(
    workbook: &mut Sheets<Cursor<&[u8]>>,
    options: &LoadOptions,
) -> Result<Range<Data>, LoadError> {
    match &options.sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| LoadError::ParseFailure {
                message: format!("worksheet '{name}': {e}"),
            }),
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LoadError::ParseFailure {
                message: "workbook contains no worksheets".to_string(),
            })?
            .map_err(|e| LoadError::ParseFailure {
                message: e.to_string(),
            }),
    }
}

fn cell_at(row: &[Data], idx: usize) -> String {
    row.get(idx).map(cell_text).unwrap_or_default()
}

/// Render any cell as text; an integral float renders without the decimal
/// point so a numeric id cell does not become `"12345678900.0"`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
