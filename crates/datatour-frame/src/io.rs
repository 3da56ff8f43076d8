//! CSV input and output.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::column::ColumnData;
use crate::error::{FrameError, Result};
use crate::frame::DataFrame;

/// Options for [`DataFrame::to_csv`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
    /// Write the row labels as a leading, unnamed column.
    pub index: bool,
}

/// Read a CSV file with a header row into a frame.
///
/// Column types are inferred from the text; see [`ColumnData::infer`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FrameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let df = read_csv_from(file)?;
    tracing::debug!(
        "read {} rows x {} columns from {}",
        df.len(),
        df.shape().1,
        path.display()
    );
    Ok(df)
}

/// Read CSV text with a header row from any reader.
pub fn read_csv_from<R: Read>(reader: R) -> Result<DataFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(field.to_string());
        }
    }

    DataFrame::from_columns(
        headers
            .iter()
            .zip(&cells)
            .map(|(name, column)| (name, ColumnData::infer(column))),
    )
}

impl DataFrame {
    /// Write the frame to `path` as CSV with a header row.
    pub fn to_csv(&self, path: impl AsRef<Path>, options: CsvOptions) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| FrameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_csv_to(file, options)?;
        tracing::debug!("wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }

    /// Write the frame as CSV to any writer. Nulls become empty fields.
    pub fn write_csv_to<W: Write>(&self, writer: W, options: CsvOptions) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header: Vec<&str> = Vec::new();
        if options.index {
            header.push("");
        }
        header.extend(self.column_names());
        wtr.write_record(&header)?;

        let columns: Vec<&ColumnData> = self.columns_data().map(|(_, data)| data).collect();
        for row in 0..self.len() {
            let mut record: Vec<String> = Vec::with_capacity(columns.len() + 1);
            if options.index {
                if let Some(label) = self.index().get(row) {
                    record.push(label.to_string());
                }
            }
            record.extend(columns.iter().map(|c| c.csv_cell(row)));
            wtr.write_record(&record)?;
        }

        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{DType, Value};

    const SAMPLE: &str = "\
Name,Age,City,Salary,JoinDate
John,28,New York,75000,2023-01-15
Jane,34,Chicago,82000.5,2022-06-01
Jim,,Houston,61000,2021-11-30
";

    #[test]
    fn test_read_infers_types() {
        let df = read_csv_from(SAMPLE.as_bytes()).unwrap();
        assert_eq!(df.shape(), (3, 5));
        assert_eq!(
            df.dtypes(),
            vec![
                ("Name", DType::Object),
                ("Age", DType::Int64),
                ("City", DType::Object),
                ("Salary", DType::Float64),
                ("JoinDate", DType::Object),
            ]
        );
        assert_eq!(df.row(2).unwrap()[1], Value::Null);
    }

    #[test]
    fn test_read_ragged_row_fails() {
        let r = read_csv_from("a,b\n1\n".as_bytes());
        assert!(matches!(r, Err(FrameError::Csv(_))));
    }

    #[test]
    fn test_write_without_index() {
        let df = read_csv_from(SAMPLE.as_bytes()).unwrap();
        let mut out = Vec::new();
        df.write_csv_to(&mut out, CsvOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Name,Age,City,Salary,JoinDate\n\
             John,28,New York,75000.0,2023-01-15\n\
             Jane,34,Chicago,82000.5,2022-06-01\n\
             Jim,,Houston,61000.0,2021-11-30\n"
        );
    }

    #[test]
    fn test_write_with_index() {
        let df = read_csv_from("a\n1\n2\n".as_bytes()).unwrap();
        let mut out = Vec::new();
        df.write_csv_to(&mut out, CsvOptions { index: true }).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ",a\n0,1\n1,2\n");
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let df = read_csv_from(SAMPLE.as_bytes()).unwrap();
        df.to_csv(&path, CsvOptions::default()).unwrap();

        let back = read_csv(&path).unwrap();
        assert_eq!(back.shape(), df.shape());
        for row in 0..df.len() {
            assert_eq!(back.row(row), df.row(row));
        }
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_csv("no/such/file.csv").unwrap_err();
        assert!(matches!(err, FrameError::Io { .. }));
        assert!(err.to_string().starts_with("no/such/file.csv"));
    }
}
