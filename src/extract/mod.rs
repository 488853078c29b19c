//! Extract stage: read a delimited text file into a [`Table`].
//!
//! The whole file is read into memory at once, decoded with encoding
//! auto-detection, split on an auto-detected (or explicit) delimiter, and
//! typed column by column. No streaming, no partial reads.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ExtractError, ExtractResult};
use crate::table::Table;

/// Result of an extraction with parse metadata.
#[derive(Debug, Clone)]
pub struct Extracted {
    /// The loaded table.
    pub table: Table,
    /// Detected or used encoding.
    pub encoding: String,
    /// Detected or used delimiter.
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> ExtractResult<String> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match String::from_utf8(bytes.to_vec()) {
            Ok(s) => Ok(s),
            Err(_) => Ok(String::from_utf8_lossy(bytes).to_string()),
        },
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.to_string())
        }
        "windows-1252" | "cp1252" => {
            Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string())
        }
        // Fallback: UTF-8 with lossy conversion
        _ => Ok(String::from_utf8_lossy(bytes).to_string()),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read a table from a file with encoding and delimiter auto-detection.
///
/// A missing file is reported as [`ExtractError::NotFound`] so the caller
/// can treat it as a non-fatal skip rather than a crash.
pub fn read_table<P: AsRef<Path>>(path: P) -> ExtractResult<Extracted> {
    read_table_with_delimiter(path, None)
}

/// Read a table from a file, with an optional explicit delimiter.
pub fn read_table_with_delimiter<P: AsRef<Path>>(
    path: P,
    delimiter: Option<char>,
) -> ExtractResult<Extracted> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ExtractError::NotFound(path.to_path_buf())
        } else {
            ExtractError::Io(e)
        }
    })?;

    if bytes.is_empty() {
        return Err(ExtractError::EmptyFile);
    }

    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let table = parse_table(&content, delimiter)?;

    Ok(Extracted {
        table,
        encoding,
        delimiter,
    })
}

/// Parse decoded CSV text into a table with an explicit delimiter.
///
/// First line = headers; blank lines are skipped; fields are trimmed and
/// surrounding quotes stripped. Empty fields become missing cells.
pub fn parse_table(content: &str, delimiter: char) -> ExtractResult<Table> {
    let mut lines = content.lines();

    let header_line = lines.next().ok_or(ExtractError::EmptyFile)?;
    let headers: Vec<String> = split_fields(header_line, delimiter);

    if headers.iter().all(|h| h.is_empty()) {
        return Err(ExtractError::NoHeaders);
    }

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(split_fields(line, delimiter));
    }

    Table::from_rows(headers, rows)
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|s| s.trim().trim_matches('"').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, ColumnKind};
    use std::io::Write;

    #[test]
    fn test_simple_parse() {
        let table = parse_table("Zone,Price\nA,100\nB,200", ',').unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.headers(), vec!["Zone", "Price"]);
        assert_eq!(table.column("Price").unwrap().kind, ColumnKind::Numeric);
        assert_eq!(table.column("Zone").unwrap().kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_missing_fields_become_missing_cells() {
        let table = parse_table("a,b,c\n1,,3", ',').unwrap();
        assert_eq!(table.column("b").unwrap().cells[0], Cell::Missing);
        assert_eq!(table.column("c").unwrap().cells[0], Cell::Number(3.0));
    }

    #[test]
    fn test_quoted_values() {
        let table = parse_table("name,value\n\"Alice\",\"Hello\"", ',').unwrap();
        assert_eq!(
            table.column("name").unwrap().cells[0],
            Cell::Text("Alice".into())
        );
    }

    #[test]
    fn test_empty_lines_skipped() {
        let table = parse_table("a,b\n1,2\n\n3,4\n", ',').unwrap();
        assert_eq!(table.n_rows(), 2);
    }

    #[test]
    fn test_empty_content_errors() {
        assert!(matches!(parse_table("", ','), Err(ExtractError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_detect_delimiter_pipe() {
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert!(decoded.contains("Soci"));
    }

    #[test]
    fn test_read_table_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        let result = read_table(&path);
        match result {
            Err(ExtractError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_read_table_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Zone,Price").unwrap();
        writeln!(file, "A,100").unwrap();
        writeln!(file, "B,200").unwrap();

        let extracted = read_table(&path).unwrap();
        assert_eq!(extracted.delimiter, ',');
        assert_eq!(extracted.encoding, "utf-8");
        assert_eq!(extracted.table.n_rows(), 2);
    }
}
