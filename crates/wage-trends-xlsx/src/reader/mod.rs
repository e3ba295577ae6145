//! XLSX reader

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use wage_trends_core::{CellAddress, CellValue, Table};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode special characters in XML:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            result.push(c);
            continue;
        }

        let mut hex_chars = String::new();
        let mut saw_x = false;
        let mut is_escape = false;

        if chars.peek() == Some(&'x') {
            chars.next();
            saw_x = true;

            for _ in 0..4 {
                match chars.peek() {
                    Some(&ch) if ch.is_ascii_hexdigit() => {
                        hex_chars.push(ch);
                        chars.next();
                    }
                    _ => break,
                }
            }

            if hex_chars.len() == 4 && chars.peek() == Some(&'_') {
                chars.next();
                if let Some(decoded) = u32::from_str_radix(&hex_chars, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    result.push(decoded);
                    is_escape = true;
                }
            }
        }

        if !is_escape {
            // Not a valid escape sequence, output what we consumed
            result.push('_');
            if saw_x {
                result.push('x');
                result.push_str(&hex_chars);
            }
        }
    }

    result
}

/// Unescaped value of an attribute
fn attribute(element: &BytesStart, key: &[u8]) -> Option<String> {
    element
        .try_get_attribute(key)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

/// Zero-based row index from a `<row r="..">` element
fn row_index(row: &BytesStart) -> Option<u32> {
    attribute(row, b"r")?
        .parse::<u32>()
        .ok()
        .map(|r| r.saturating_sub(1))
}

/// Position of a cell: its `r` reference, or the slot after the previous cell
fn cell_address(cell_ref: Option<&str>, row: u32, next_col: u32) -> XlsxResult<CellAddress> {
    match cell_ref {
        Some(cell_ref) => CellAddress::parse(cell_ref).map_err(|e| {
            XlsxError::Parse(format!("Invalid cell reference '{}': {}", cell_ref, e))
        }),
        None => Ok(CellAddress::new(row, next_col)),
    }
}

/// Archive path of a workbook relationship target.
///
/// Absolute targets are rooted at the package, relative ones at `xl/`.
fn part_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

/// Call `visit` for every `<tag>` element in an archive part
fn scan_elements<R, F>(
    archive: &mut zip::ZipArchive<R>,
    part: &str,
    tag: &[u8],
    mut visit: F,
) -> XlsxResult<()>
where
    R: Read + Seek,
    F: FnMut(&BytesStart),
{
    let file = archive
        .by_name(part)
        .map_err(|_| XlsxError::MissingPart(part.to_string()))?;
    let mut xml_reader = Reader::from_reader(BufReader::new(file));
    let mut buf = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == tag => visit(&e),
            Ok(Event::Eof) => return Ok(()),
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
}

/// XLSX file reader.
///
/// Survey workbooks carry a single data sheet whose first non-empty row is
/// the header, so the reader returns the first worksheet as a [`Table`].
pub struct XlsxReader;

impl XlsxReader {
    /// Read the first worksheet of a workbook file
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Table> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Read the first worksheet of a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Table> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let entries = Self::read_sheet_entries(&mut archive)?;
        let sheet_paths = Self::read_worksheet_paths(&mut archive)?;

        let (name, path) = entries
            .iter()
            .find_map(|(name, r_id)| sheet_paths.get(r_id).map(|path| (name, path)))
            .ok_or_else(|| XlsxError::InvalidFormat("workbook has no worksheets".into()))?;

        log::debug!("reading worksheet '{}' from {}", name, path);
        let cells = Self::read_worksheet(&mut archive, path, &shared_strings)?;
        Self::build_table(cells)
    }

    /// List the sheet names of a workbook, in workbook order
    pub fn sheet_names<R: Read + Seek>(reader: R) -> XlsxResult<Vec<String>> {
        let mut archive = zip::ZipArchive::new(reader)?;
        Ok(Self::read_sheet_entries(&mut archive)?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        // Whitespace inside <t> is significant (rich text runs keep their spaces)
        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;
        // Phonetic runs (<rPh>) repeat text in another script; skip them
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current_string));
                        current_string.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    if let Ok(text) = e.unescape() {
                        current_string.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// `(sheet name, relationship id)` pairs in workbook order
    fn read_sheet_entries<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let mut entries = Vec::new();
        scan_elements(archive, "xl/workbook.xml", b"sheet", |sheet| {
            let name = attribute(sheet, b"name");
            if let (Some(name), Some(rel_id)) = (name, attribute(sheet, b"r:id")) {
                entries.push((name, rel_id));
            }
        })?;
        Ok(entries)
    }

    /// Worksheet part paths keyed by relationship id.
    ///
    /// Chartsheets, styles and other relationships are skipped.
    fn read_worksheet_paths<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let mut paths = HashMap::new();
        scan_elements(archive, "xl/_rels/workbook.xml.rels", b"Relationship", |rel| {
            let is_worksheet = attribute(rel, b"Type").is_some_and(|t| t.ends_with("/worksheet"));
            if !is_worksheet {
                return;
            }
            if let (Some(id), Some(target)) = (attribute(rel, b"Id"), attribute(rel, b"Target")) {
                paths.insert(id, part_path(&target));
            }
        })?;
        Ok(paths)
    }

    /// Read the cells of a worksheet, keyed by row then column
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
    ) -> XlsxResult<BTreeMap<u32, BTreeMap<u32, CellValue>>> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut cells: BTreeMap<u32, BTreeMap<u32, CellValue>> = BTreeMap::new();

        // Current cell state
        let mut current_cell_ref: Option<String> = None;
        let mut current_cell_type: Option<String> = None;
        let mut current_value: Option<String> = None;
        let mut in_cell = false;
        let mut in_value = false;
        let mut in_inline_str = false;
        let mut in_inline_text = false;

        // Cells without an `r` attribute follow the previous cell
        let mut current_row: u32 = 0;
        let mut next_col: u32 = 0;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"row" => {
                        next_col = 0;
                        if let Some(row) = row_index(&e) {
                            current_row = row;
                        }
                    }
                    b"c" => {
                        in_cell = true;
                        current_cell_ref = attribute(&e, b"r");
                        current_cell_type = attribute(&e, b"t");
                        current_value = None;
                    }
                    b"v" if in_cell => in_value = true,
                    b"is" if in_cell => in_inline_str = true,
                    b"t" if in_inline_str => in_inline_text = true,
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"row" => {
                        current_row += 1;
                    }
                    b"c" => {
                        let addr =
                            cell_address(current_cell_ref.as_deref(), current_row, next_col)?;
                        current_row = addr.row;
                        next_col = addr.col + 1;

                        let value = Self::process_cell(
                            current_cell_type.as_deref(),
                            current_value.as_deref(),
                            shared_strings,
                        )?;
                        if !value.is_empty() {
                            cells.entry(addr.row).or_default().insert(addr.col, value);
                        }
                        in_cell = false;
                    }
                    b"v" => in_value = false,
                    b"is" => in_inline_str = false,
                    b"t" if in_inline_str => in_inline_text = false,
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"row" => {
                        if let Some(row) = row_index(&e) {
                            current_row = row;
                        }
                        current_row += 1;
                    }
                    // A value-less cell still takes up its column
                    b"c" => {
                        let addr =
                            cell_address(attribute(&e, b"r").as_deref(), current_row, next_col)?;
                        current_row = addr.row;
                        next_col = addr.col + 1;
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) if in_value || in_inline_text => {
                    let text = e.unescape().map_err(XlsxError::Xml)?;
                    current_value
                        .get_or_insert_with(String::new)
                        .push_str(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(cells)
    }

    /// Convert a raw `<v>`/`<is>` value into a cell value based on its type
    fn process_cell(
        cell_type: Option<&str>,
        value: Option<&str>,
        shared_strings: &[String],
    ) -> XlsxResult<CellValue> {
        let Some(value) = value else {
            return Ok(CellValue::Empty);
        };

        let cell_value = match cell_type {
            // Shared string
            Some("s") => {
                let idx: usize = value.parse().map_err(|_| {
                    XlsxError::Parse(format!("Invalid shared string index: {}", value))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    XlsxError::Parse(format!("Shared string index {} out of bounds", idx))
                })?;
                CellValue::string(s.as_str())
            }

            // Boolean
            Some("b") => CellValue::Boolean(value == "1" || value.eq_ignore_ascii_case("true")),

            // Inline and formula strings - decode Excel escape sequences
            Some("inlineStr") | Some("str") => CellValue::String(decode_excel_escapes(value)),

            // Number (default type or explicit "n")
            None | Some("n") => match value.parse::<f64>() {
                Ok(n) => CellValue::Number(n),
                Err(_) => CellValue::string(value),
            },

            // Errors (#N/A, ...) and unknown types are kept as text
            Some(_) => CellValue::string(value),
        };

        Ok(cell_value)
    }

    /// Turn sparse cells into a table: the first row is the header.
    ///
    /// Blank header cells are named `Unnamed: N` after their column index.
    fn build_table(cells: BTreeMap<u32, BTreeMap<u32, CellValue>>) -> XlsxResult<Table> {
        let rows: Vec<BTreeMap<u32, CellValue>> = cells.into_values().collect();

        let Some((header, data)) = rows.split_first() else {
            return Ok(Table::default());
        };

        let width = rows
            .iter()
            .filter_map(|row| row.keys().next_back())
            .max()
            .map_or(0, |max| *max as usize + 1);

        let columns = (0..width as u32).map(|col| match header.get(&col) {
            Some(value) => value.to_string(),
            None => format!("Unnamed: {}", col),
        });
        let mut table = Table::new(columns);

        for row in data {
            let mut values = vec![CellValue::Empty; width];
            for (col, value) in row {
                values[*col as usize] = value.clone();
            }
            table.push_row(values)?;
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};

    const CONTENT_TYPES: &[u8] = br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#;
    const WORKBOOK: &[u8] = br#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="All May 2019 data" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    const WORKBOOK_RELS: &[u8] = br#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/></Relationships>"#;

    fn worksheet_xml(sheet_data: &str) -> String {
        format!(
            r#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
            sheet_data
        )
    }

    /// Zip the given parts into a package
    fn package(parts: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();
            for (name, data) in parts {
                zip.start_file(*name, options).unwrap();
                zip.write_all(data).unwrap();
            }
            zip.finish().unwrap();
        }
        buf
    }

    /// Build a minimal workbook around the given sheetData body
    fn workbook(shared_strings: Option<&str>, sheet_data: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(CONTENT_TYPES).unwrap();
            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(WORKBOOK).unwrap();
            zip.start_file("xl/_rels/workbook.xml.rels", options)
                .unwrap();
            zip.write_all(WORKBOOK_RELS).unwrap();

            if let Some(sst) = shared_strings {
                zip.start_file("xl/sharedStrings.xml", options).unwrap();
                write!(
                    zip,
                    r#"<?xml version="1.0"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">{}</sst>"#,
                    sst
                )
                .unwrap();
            }

            zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
            zip.write_all(worksheet_xml(sheet_data).as_bytes()).unwrap();

            zip.finish().unwrap();
        }
        buf
    }

    #[test]
    fn test_decode_excel_escapes() {
        assert_eq!(decode_excel_escapes("hello_x000d_world"), "hello\rworld");
        assert_eq!(decode_excel_escapes("col1_x0009_col2"), "col1\tcol2");
        assert_eq!(decode_excel_escapes("under_x005f_score"), "under_score");
        assert_eq!(decode_excel_escapes("_x000A_"), "\n");
        assert_eq!(decode_excel_escapes("plain text"), "plain text");
    }

    #[test]
    fn test_decode_excel_escapes_partial_sequence() {
        assert_eq!(decode_excel_escapes("_x00"), "_x00");
        assert_eq!(decode_excel_escapes("_x000d"), "_x000d");
        assert_eq!(decode_excel_escapes("AREA_xyz"), "AREA_xyz");
        assert_eq!(decode_excel_escapes("OCC_TITLE"), "OCC_TITLE");
    }

    #[test]
    fn test_read_empty_sheet() {
        let table = XlsxReader::read(Cursor::new(workbook(None, ""))).unwrap();
        assert!(table.columns().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_header_and_rows() {
        let sst = r#"<si><t>AREA_TITLE</t></si><si><t>OCC_TITLE</t></si><si><t>Wisconsin</t></si><si><r><t>Registered </t></r><r><t>Nurses</t></r></si>"#;
        let sheet = r#"
            <row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c><c r="C1" t="inlineStr"><is><t>A_MEAN</t></is></c></row>
            <row r="2"><c r="A2" t="s"><v>2</v></c><c r="B2" t="s"><v>3</v></c><c r="C2"><v>78550</v></c></row>
            <row r="3"><c r="A3" t="s"><v>2</v></c><c r="C3" t="str"><v>*</v></c></row>
        "#;

        let table = XlsxReader::read(Cursor::new(workbook(Some(sst), sheet))).unwrap();

        assert_eq!(table.columns(), &["AREA_TITLE", "OCC_TITLE", "A_MEAN"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows()[0],
            vec![
                CellValue::string("Wisconsin"),
                CellValue::string("Registered Nurses"),
                CellValue::Number(78550.0),
            ]
        );
        assert_eq!(
            table.rows()[1],
            vec![
                CellValue::string("Wisconsin"),
                CellValue::Empty,
                CellValue::string("*"),
            ]
        );
    }

    #[test]
    fn test_read_skips_blank_rows_and_names_blank_headers() {
        let sheet = r#"
            <row r="1"><c r="A1" t="inlineStr"><is><t>YEAR</t></is></c></row>
            <row r="2"><c r="A2"><v>2019</v></c></row>
            <row r="3"></row>
            <row r="5"><c r="A5"><v>2021</v></c><c r="C5" t="b"><v>1</v></c></row>
        "#;

        let table = XlsxReader::read(Cursor::new(workbook(None, sheet))).unwrap();

        assert_eq!(table.columns(), &["YEAR", "Unnamed: 1", "Unnamed: 2"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(1, "YEAR"), Some(&CellValue::Number(2021.0)));
        assert_eq!(table.get(1, "Unnamed: 2"), Some(&CellValue::Boolean(true)));
    }

    #[test]
    fn test_read_cells_without_references() {
        let sheet = r#"
            <row><c t="inlineStr"><is><t>A</t></is></c><c t="inlineStr"><is><t>B</t></is></c></row>
            <row><c><v>1</v></c><c><v>2</v></c></row>
        "#;

        let table = XlsxReader::read(Cursor::new(workbook(None, sheet))).unwrap();
        assert_eq!(table.columns(), &["A", "B"]);
        assert_eq!(table.get(0, "B"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_value_less_cells_keep_their_column() {
        let sheet = r#"
            <row r="1"><c t="inlineStr"><is><t>A</t></is></c><c/><c t="inlineStr"><is><t>C</t></is></c></row>
            <row r="2"><c><v>1</v></c><c s="2"/><c><v>3</v></c></row>
            <row r="3"><c r="B3"/><c><v>6</v></c></row>
        "#;

        let table = XlsxReader::read(Cursor::new(workbook(None, sheet))).unwrap();
        assert_eq!(table.columns(), &["A", "Unnamed: 1", "C"]);
        assert_eq!(table.get(0, "C"), Some(&CellValue::Number(3.0)));
        assert_eq!(table.get(0, "Unnamed: 1"), Some(&CellValue::Empty));
        assert_eq!(table.get(1, "A"), Some(&CellValue::Empty));
        assert_eq!(table.get(1, "C"), Some(&CellValue::Number(6.0)));
    }

    #[test]
    fn test_first_worksheet_relationship_wins() {
        let workbook_xml: &[u8] = br#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Chart" sheetId="1" r:id="rId3"/><sheet name="Data" sheetId="2" r:id="rId1"/></sheets></workbook>"#;
        let rels: &[u8] = br#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/chartsheet" Target="chartsheets/sheet1.xml"/><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/data.xml"/></Relationships>"#;
        let sheet = worksheet_xml(r#"<row r="1"><c r="A1" t="inlineStr"><is><t>YEAR</t></is></c></row><row r="2"><c r="A2"><v>2020</v></c></row>"#);
        let bytes = package(&[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/workbook.xml", workbook_xml),
            ("xl/_rels/workbook.xml.rels", rels),
            ("xl/worksheets/data.xml", sheet.as_bytes()),
        ]);

        let names = XlsxReader::sheet_names(Cursor::new(bytes.clone())).unwrap();
        assert_eq!(names, vec!["Chart".to_string(), "Data".to_string()]);

        let table = XlsxReader::read(Cursor::new(bytes)).unwrap();
        assert_eq!(table.columns(), &["YEAR"]);
        assert_eq!(table.get(0, "YEAR"), Some(&CellValue::Number(2020.0)));
    }

    #[test]
    fn test_bad_shared_string_index() {
        let sheet = r#"<row r="1"><c r="A1" t="s"><v>7</v></c></row>"#;
        let err = XlsxReader::read(Cursor::new(workbook(Some("<si><t>x</t></si>"), sheet)))
            .unwrap_err();
        assert!(matches!(err, XlsxError::Parse(_)));
    }

    #[test]
    fn test_not_a_workbook() {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            zip.start_file("readme.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"hello").unwrap();
            zip.finish().unwrap();
        }
        let err = XlsxReader::read(Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, XlsxError::InvalidFormat(_)));
    }

    #[test]
    fn test_sheet_names() {
        let names = XlsxReader::sheet_names(Cursor::new(workbook(None, ""))).unwrap();
        assert_eq!(names, vec!["All May 2019 data".to_string()]);
    }

    #[test]
    fn test_read_file() {
        let sheet = r#"<row r="1"><c r="A1" t="inlineStr"><is><t>YEAR</t></is></c><c r="B1" t="inlineStr"><is><t>INFLATION</t></is></c></row><row r="2"><c r="A2"><v>2019</v></c><c r="B2"><v>1.018</v></c></row>"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&workbook(None, sheet)).unwrap();

        let table = XlsxReader::read_file(file.path()).unwrap();
        assert_eq!(table.columns(), &["YEAR", "INFLATION"]);
        assert_eq!(table.get(0, "INFLATION"), Some(&CellValue::Number(1.018)));
    }

    #[test]
    fn test_read_missing_file() {
        let err = XlsxReader::read_file("does/not/exist.xlsx").unwrap_err();
        assert!(matches!(err, XlsxError::Io(_)));
    }
}
