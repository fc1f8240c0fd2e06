use std::fs::File;
use std::path::Path;

use crate::error::Error;

use super::model::NumericTable;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a numeric CSV file into a [`NumericTable`].
///
/// Expected layout: no header row, every field a number, comma-delimited.
/// Quoting and escaping are deliberately unsupported — a quote is an ordinary
/// character and a comma always splits the field, so a literal comma inside a
/// value cannot be represented. Rows may have differing field counts.
///
/// Fields are trimmed of surrounding whitespace and parsed as `f64`; integer
/// fields are just floats without a fractional part. The first field that
/// fails to parse aborts the load with [`Error::MalformedField`] naming the
/// 0-based row and column.
pub fn load_csv(path: &Path) -> Result<NumericTable, Error> {
    let file = File::open(path).map_err(|source| Error::FileUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut table = NumericTable::default();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        for (column, token) in record.iter().enumerate() {
            let value = token.parse::<f64>().map_err(|_| Error::MalformedField {
                row,
                column,
                token: token.to_string(),
            })?;
            table.push(column, value);
        }
    }

    log::debug!(
        "loaded {} column(s) from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    /// Write `contents` to a throwaway file and return its path.
    fn fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("csv-trim-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_columns_across_rows() {
        let path = fixture("basic.csv", "1,10,100\n2,20,200\n3,30,300\n");
        let table = load_csv(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(table.columns[1], vec![10.0, 20.0, 30.0]);
        assert_eq!(table.columns[2], vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn accepts_whitespace_and_mixed_notation() {
        let path = fixture("mixed.csv", " 1 ,2.5\n-3,1e2\n");
        let table = load_csv(&path).unwrap();
        assert_eq!(table.columns[0], vec![1.0, -3.0]);
        assert_eq!(table.columns[1], vec![2.5, 100.0]);
    }

    #[test]
    fn tolerates_ragged_rows() {
        let path = fixture("ragged.csv", "1,2\n3,4,5\n6\n");
        let table = load_csv(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.columns[0], vec![1.0, 3.0, 6.0]);
        assert_eq!(table.columns[1], vec![2.0, 4.0]);
        assert_eq!(table.columns[2], vec![5.0]);
    }

    #[test]
    fn malformed_field_is_located() {
        let path = fixture("bad.csv", "1,2\n3,abc\n");
        match load_csv(&path) {
            Err(Error::MalformedField { row, column, token }) => {
                assert_eq!(row, 1);
                assert_eq!(column, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("expected MalformedField, got {other:?}"),
        }
    }

    #[test]
    fn quotes_are_literal_characters() {
        // No quoting support: "1" is the three-character token `"1"`, which
        // is not a number.
        let path = fixture("quoted.csv", "\"1\",2\n");
        assert!(matches!(
            load_csv(&path),
            Err(Error::MalformedField { row: 0, column: 0, .. })
        ));
    }

    #[test]
    fn missing_file_is_reported_as_unavailable() {
        let path = Path::new("/definitely/not/here.csv");
        assert!(matches!(
            load_csv(path),
            Err(Error::FileUnavailable { .. })
        ));
    }
}
