use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};

use crate::error::CsvError;
use crate::table::Table;

/// Read a CSV file into a [`Table`].
///
/// The format is deliberately naive: a comma is always a delimiter (quotes are
/// treated as literal text), cells are whitespace-trimmed, CRLF line endings
/// are accepted, blank lines are skipped, and ragged rows are kept as-is. The
/// first line is the header.
pub fn read_csv(path: &str) -> Result<Table, CsvError> {
    let file = File::open(path).map_err(|source| CsvError::Open {
        path: path.to_string(),
        source,
    })?;
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let headers = rdr
        .headers()
        .map_err(|source| CsvError::Read {
            path: path.to_string(),
            source,
        })?
        .iter()
        .map(String::from)
        .collect();
    let mut table = Table::new(headers);

    for record in rdr.records() {
        let record = record.map_err(|source| CsvError::Read {
            path: path.to_string(),
            source,
        })?;
        table.push_row(record.iter().map(String::from).collect());
    }
    Ok(table)
}

/// Write a [`Table`] back out, header first, creating parent directories as
/// needed. Cells are never quoted or escaped, mirroring the reader.
pub fn write_csv(table: &Table, path: &str) -> Result<(), CsvError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CsvError::Create {
                path: path.to_string(),
                source,
            })?;
        }
    }
    let file = File::create(path).map_err(|source| CsvError::Create {
        path: path.to_string(),
        source,
    })?;
    let mut w = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .from_writer(BufWriter::new(file));

    w.write_record(table.columns())
        .map_err(|source| CsvError::Write {
            path: path.to_string(),
            source,
        })?;
    for row in table.rows() {
        w.write_record(row).map_err(|source| CsvError::Write {
            path: path.to_string(),
            source,
        })?;
    }
    w.flush().map_err(|source| CsvError::Write {
        path: path.to_string(),
        source: source.into(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn parses_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "id,name\n1,Alice\n2,Bob\n");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.columns(), ["id", "name"]);
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows()[0], ["1", "Alice"]);
    }

    #[test]
    fn trims_cells_and_strips_crlf() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "id , name\r\n 1 ,\tAlice \r\n");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.columns(), ["id", "name"]);
        assert_eq!(t.rows()[0], ["1", "Alice"]);
    }

    #[test]
    fn skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "id\n1\n\n2\n\n");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.row_count(), 2);
    }

    #[test]
    fn tolerates_ragged_rows() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "a,b,c\n1,2\n1,2,3,4\n");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.rows()[0], ["1", "2"]);
        assert_eq!(t.rows()[1], ["1", "2", "3", "4"]);
    }

    #[test]
    fn commas_always_delimit_quotes_are_literal() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "a,b\n\"x,y\",z\n");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.rows()[0], ["\"x", "y\"", "z"]);
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.column_count(), 0);
        assert_eq!(t.row_count(), 0);
    }

    #[test]
    fn trailing_comma_keeps_empty_cell() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "a,b,c\n1,2,\n");
        let t = read_csv(&path).unwrap();
        assert_eq!(t.rows()[0], ["1", "2", ""]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_csv("/no/such/file.csv").unwrap_err();
        assert!(err.to_string().contains("/no/such/file.csv"));
    }

    #[test]
    fn writes_exact_bytes() {
        let dir = tempdir().unwrap();
        let mut t = Table::new(vec!["id".into(), "name".into()]);
        t.push_row(vec!["2".into(), "Bob".into()]);
        let out = dir.path().join("out.csv").to_string_lossy().into_owned();
        write_csv(&t, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "id,name\n2,Bob\n");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let out = dir
            .path()
            .join("nested/deeper/out.csv")
            .to_string_lossy()
            .into_owned();
        let t = Table::new(vec!["a".into()]);
        write_csv(&t, &out).unwrap();
        assert!(Path::new(&out).exists());
    }

    #[test]
    fn round_trip_is_byte_identical() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "in.csv", "a,b\n1,2\n3,4\n");
        let t = read_csv(&path).unwrap();
        let out = dir.path().join("out.csv").to_string_lossy().into_owned();
        write_csv(&t, &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "a,b\n1,2\n3,4\n");
    }
}
