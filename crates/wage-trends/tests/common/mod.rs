//! Shared fixtures for wage-trends integration tests

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const CONTENT_TYPES: &str = r#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;
const WORKBOOK: &str = r#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Data" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
const WORKBOOK_RELS: &str = r#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// A fixture cell: numbers are written as numeric cells, text as inline
/// strings, `None` leaves the cell out
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    None,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Write a one-sheet workbook; the first row is the header
pub fn write_xlsx(path: &Path, rows: &[Vec<Cell<'_>>]) {
    let mut sheet_data = String::new();
    for (r, row) in rows.iter().enumerate() {
        sheet_data.push_str(&format!("<row r=\"{}\">", r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", (b'A' + c as u8) as char, r + 1);
            match cell {
                Cell::Text(text) => sheet_data.push_str(&format!(
                    "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                    reference,
                    escape(text)
                )),
                Cell::Number(n) => {
                    sheet_data.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", reference, n))
                }
                Cell::None => {}
            }
        }
        sheet_data.push_str("</row>");
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    let options = zip::write::SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();
    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(WORKBOOK.as_bytes()).unwrap();
    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(WORKBOOK_RELS.as_bytes()).unwrap();
    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    write!(
        zip,
        r#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
        sheet_data
    )
    .unwrap();
    zip.finish().unwrap();
}

/// Survey header in the shape of a state file
pub fn survey_header() -> Vec<Cell<'static>> {
    ["STATE", "OCC_TITLE", "O_GROUP", "TOT_EMP", "A_MEAN"]
        .into_iter()
        .map(Cell::Text)
        .collect()
}

/// One survey row; a `None` wage is written as the suppressed marker `*`
pub fn survey_row<'a>(
    state: &'a str,
    occupation: &'a str,
    group: &'a str,
    wage: Option<f64>,
) -> Vec<Cell<'a>> {
    vec![
        Cell::Text(state),
        Cell::Text(occupation),
        Cell::Text(group),
        Cell::Number(1000.0),
        wage.map_or(Cell::Text("*"), Cell::Number),
    ]
}
