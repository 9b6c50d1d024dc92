//! Downloadable model spreadsheet
//!
//! The dashboard offers an empty-state download so users start from a
//! sheet whose headers already match what the loader expects.

use rust_xlsxwriter::{Workbook, XlsxError};
use shared::REQUIRED_COLUMNS;

/// Build the model workbook as xlsx bytes
///
/// One header row with the required columns plus a single example row
/// showing the expected shape of each field.
pub fn model_workbook() -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Modelo")?;

    for (col, header) in REQUIRED_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    worksheet.write_string(1, 0, "Maria da Silva")?;
    worksheet.write_string(1, 1, "00000000000")?;
    worksheet.write_string(1, 2, "Exemplo")?;

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load_from_bytes;

    #[test]
    fn model_workbook_loads_back_cleanly() {
        let bytes = model_workbook().unwrap();
        let store = load_from_bytes(&bytes).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.extra_columns().is_empty());

        let example = &store.records()[0];
        assert_eq!(example.name, "Maria da Silva");
        assert_eq!(example.national_id, "00000000000");
        assert_eq!(example.team, "Exemplo");
    }
}
