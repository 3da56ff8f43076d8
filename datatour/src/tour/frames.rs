//! Series and frames: construction, CSV loading, concatenation, row
//! assignment by label and CSV export.

use std::io::Write;
use std::path::PathBuf;

use datatour_frame::{read_csv, ColumnData, CsvOptions, DataFrame, Label, Series, Value};

use crate::config::TourConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct FramesReport {
    /// Rows read from the input CSV.
    pub loaded_rows: usize,
    /// Rows after concatenating the loaded frame with itself.
    pub concatenated_rows: usize,
    /// Rows after the literal row was set.
    pub final_rows: usize,
    /// The frame as written to `output`.
    pub frame: DataFrame,
    pub output: PathBuf,
}

/// The row set at label `len` after concatenation.
fn literal_row() -> Vec<Value> {
    vec![
        Value::from("Ashfdkjshn"),
        Value::Int(20),
        Value::from("New York"),
        Value::Int(75_000),
        Value::from("2024-02-15"),
    ]
}

pub fn run(config: &TourConfig, out: &mut impl Write) -> Result<FramesReport> {
    tracing::debug!("frames step");

    let series = Series::new(vec![1_i64, 2, 3, 4, 5]);
    writeln!(out, "{series}")?;
    let labeled = Series::with_index(vec![1_i64, 2, 3, 4, 5], ["a", "b", "c", "d", "e"])?;
    writeln!(out, "{labeled}")?;

    let people = DataFrame::from_columns([
        ("Name", ColumnData::from(vec!["John", "Jane", "Jim", "Jill"])),
        ("Age", ColumnData::from(vec![20_i64, 21, 22, 23])),
        (
            "City",
            ColumnData::from(vec!["New York", "Los Angeles", "Chicago", "Houston"]),
        ),
    ])?;
    writeln!(out, "{people}")?;

    let loaded = read_csv(&config.input_csv)?;
    writeln!(out, "{loaded}")?;

    let mut df = DataFrame::concat(&[&loaded, &loaded])?;
    writeln!(out, "{df}")?;
    let concatenated_rows = df.len();
    writeln!(out, "{concatenated_rows}")?;

    df.set_row(Label::from(concatenated_rows), literal_row())?;
    writeln!(out, "{df}")?;
    df.to_csv(&config.output_csv, CsvOptions { index: false })?;

    Ok(FramesReport {
        loaded_rows: loaded.len(),
        concatenated_rows,
        final_rows: df.len(),
        frame: df,
        output: config.output_csv.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const INPUT: &str = "\
Name,Age,City,Salary,JoinDate
Alice,30,Boston,68000,2021-03-01
Bob,45,Denver,91000,2019-07-15
";

    fn run_in(dir: &std::path::Path) -> (FramesReport, String) {
        let input = dir.join("in.csv");
        fs::write(&input, INPUT).unwrap();
        let config = TourConfig::in_dir(dir, input);
        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_row_counts() {
        let dir = tempfile::tempdir().unwrap();
        let (report, _) = run_in(dir.path());
        assert_eq!(report.loaded_rows, 2);
        assert_eq!(report.concatenated_rows, 4);
        assert_eq!(report.final_rows, 5);
        assert_eq!(report.frame.row(4), Some(literal_row()));
    }

    #[test]
    fn test_transcript_opens_with_series() {
        let dir = tempfile::tempdir().unwrap();
        let (_, text) = run_in(dir.path());
        assert!(text.starts_with("0    1\n1    2\n2    3\n3    4\n4    5\ndtype: int64\n"));
        assert!(text.contains("a    1\nb    2\nc    3\nd    4\ne    5\ndtype: int64\n"));
        assert!(text.contains("1  Jane   21  Los Angeles\n"));
        assert!(text.contains("\n4\n"));
    }

    #[test]
    fn test_output_has_header_and_no_index() {
        let dir = tempfile::tempdir().unwrap();
        let (report, _) = run_in(dir.path());
        let written = fs::read_to_string(&report.output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "Name,Age,City,Salary,JoinDate");
        assert_eq!(lines[1], "Alice,30,Boston,68000,2021-03-01");
        assert_eq!(lines[5], "Ashfdkjshn,20,New York,75000,2024-02-15");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = TourConfig::in_dir(dir.path(), dir.path().join("absent.csv"));
        let mut out = Vec::new();
        assert!(run(&config, &mut out).is_err());
    }
}
