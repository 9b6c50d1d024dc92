//! Test fixture data for roster integration tests

use rust_xlsxwriter::Workbook;

/// Three-person roster used across the end-to-end scenarios
///
/// Two sales people (one female, one male by given name) and one woman
/// in IT, with national ids in the standard punctuated form.
pub const SAMPLE_ROWS: [(&str, &str, &str); 3] = [
    ("Maria Silva", "123.456.789-00", "Vendas"),
    ("João Souza", "987.654.321-00", "Vendas"),
    ("Ana Costa", "111.222.333-44", "TI"),
];

/// Build an xlsx workbook with the given header row and data rows
pub fn workbook_bytes(headers: &[&str], rows: &[Vec<&str>]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32 + 1, col as u16, *value)
                .unwrap();
        }
    }

    workbook.save_to_buffer().unwrap()
}

/// Sample roster as xlsx bytes with the required headers
pub fn sample_workbook() -> Vec<u8> {
    let rows: Vec<Vec<&str>> = SAMPLE_ROWS
        .iter()
        .map(|(name, id, team)| vec![*name, *id, *team])
        .collect();
    workbook_bytes(&["NOME", "CPF", "EQUIPE"], &rows)
}
