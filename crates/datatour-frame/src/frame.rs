//! Columnar tables with a shared row index.

use std::collections::HashSet;
use std::fmt;

use crate::column::ColumnData;
use crate::error::{FrameError, Result};
use crate::index::{Index, Label};
use crate::series::Series;
use crate::value::{DType, Value};

/// Frames longer than this print only their head and tail.
const MAX_ROWS: usize = 60;
/// Rows shown at each end of a truncated frame.
const EDGE_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    data: ColumnData,
}

/// An ordered set of equal-length named columns sharing one [`Index`].
///
/// ```
/// use datatour_frame::{ColumnData, DataFrame};
///
/// let df = DataFrame::from_columns([
///     ("Name", ColumnData::from(vec!["John", "Jane"])),
///     ("Age", ColumnData::from(vec![20_i64, 21])),
/// ])
/// .unwrap();
/// assert_eq!(df.shape(), (2, 2));
/// assert_eq!(df.to_string(), "   Name  Age\n0  John   20\n1  Jane   21");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrame {
    index: Index,
    columns: Vec<Column>,
}

impl DataFrame {
    /// Build a frame from `(name, data)` pairs with positional labels.
    ///
    /// All columns must have the same length and distinct names.
    pub fn from_columns<N, I>(columns: I) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ColumnData)>,
    {
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|(name, data)| Column {
                name: name.into(),
                data,
            })
            .collect();

        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                return Err(FrameError::DuplicateColumn(col.name.clone()));
            }
        }

        let len = columns.first().map_or(0, |c| c.data.len());
        if let Some(bad) = columns.iter().find(|c| c.data.len() != len) {
            return Err(FrameError::LengthMismatch {
                expected: len,
                got: bad.data.len(),
            });
        }

        Ok(Self {
            index: Index::range(len),
            columns,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.columns.len())
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// The named column as a series sharing this frame's labels.
    pub fn column(&self, name: &str) -> Result<Series> {
        let col = self.find(name)?;
        Ok(Series::from_parts(
            Some(col.name.clone()),
            self.index.clone(),
            col.data.clone(),
        ))
    }

    pub fn dtypes(&self) -> Vec<(&str, DType)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.data.dtype()))
            .collect()
    }

    /// The cells of the row at position `pos`, in column order.
    pub fn row(&self, pos: usize) -> Option<Vec<Value>> {
        if pos >= self.len() {
            return None;
        }
        self.columns.iter().map(|c| c.data.get(pos)).collect()
    }

    /// The first `n` rows.
    #[must_use]
    pub fn head(&self, n: usize) -> DataFrame {
        let rows: Vec<usize> = (0..n.min(self.len())).collect();
        self.take(&rows)
    }

    /// Stack frames vertically, like `pd.concat`.
    ///
    /// Row labels are kept as they are, so concatenating a frame with itself
    /// repeats every label. The result has the union of the parts' columns in
    /// first-seen order; a part lacking a column contributes nulls.
    pub fn concat(parts: &[&DataFrame]) -> Result<DataFrame> {
        if parts.is_empty() {
            return Err(FrameError::EmptyConcat);
        }

        let mut names: Vec<&str> = Vec::new();
        for part in parts {
            for col in &part.columns {
                if !names.contains(&col.name.as_str()) {
                    names.push(&col.name);
                }
            }
        }

        let mut columns = Vec::with_capacity(names.len());
        for name in names {
            let dtype = parts
                .iter()
                .find_map(|p| p.find(name).ok())
                .map_or(DType::Float64, |c| c.data.dtype());
            let mut data = ColumnData::nulls(dtype, 0);
            for part in parts {
                let piece = match part.find(name) {
                    Ok(col) => col.data.clone(),
                    Err(_) => ColumnData::nulls(data.dtype(), part.len()),
                };
                data.append(&piece)
                    .map_err(|found| FrameError::TypeMismatch {
                        column: name.to_string(),
                        expected: data.dtype(),
                        found,
                    })?;
            }
            columns.push(Column {
                name: name.to_string(),
                data,
            });
        }

        Ok(DataFrame {
            index: Index::concat(parts.iter().map(|p| &p.index)),
            columns,
        })
    }

    /// Assign a whole row by label, like `df.loc[label] = values`.
    ///
    /// Every row carrying `label` is overwritten; if none does, the row is
    /// appended under `label`. Values are checked against every column
    /// before anything is modified.
    pub fn set_row(&mut self, label: impl Into<Label>, values: Vec<Value>) -> Result<()> {
        let label = label.into();
        self.check_row(&values)?;

        let positions = self.index.positions_of(&label);
        if positions.is_empty() {
            tracing::debug!("appending row at new label {}", label);
            self.append_checked(label, values)
        } else {
            for (col, value) in self.columns.iter_mut().zip(values) {
                for &pos in &positions {
                    col.data
                        .set(pos, value.clone())
                        .map_err(|found| mismatch(col, found))?;
                }
            }
            Ok(())
        }
    }

    /// Append a row under the next positional label.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<()> {
        self.check_row(&values)?;
        let label = Label::from(self.len());
        self.append_checked(label, values)
    }

    fn append_checked(&mut self, label: Label, values: Vec<Value>) -> Result<()> {
        for (col, value) in self.columns.iter_mut().zip(values) {
            col.data.push(value).map_err(|found| mismatch(col, found))?;
        }
        self.index.push(label);
        Ok(())
    }

    fn check_row(&self, values: &[Value]) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(FrameError::LengthMismatch {
                expected: self.columns.len(),
                got: values.len(),
            });
        }
        for (col, value) in self.columns.iter().zip(values) {
            if !col.data.accepts(value) {
                return Err(mismatch(col, value.dtype().unwrap_or(DType::Object)));
            }
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    fn take(&self, rows: &[usize]) -> DataFrame {
        DataFrame {
            index: self.index.take(rows),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    data: c.data.take(rows),
                })
                .collect(),
        }
    }

    pub(crate) fn columns_data(&self) -> impl Iterator<Item = (&str, &ColumnData)> {
        self.columns.iter().map(|c| (c.name.as_str(), &c.data))
    }
}

fn mismatch(col: &Column, found: DType) -> FrameError {
    FrameError::TypeMismatch {
        column: col.name.clone(),
        expected: col.data.dtype(),
        found,
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() || self.columns.is_empty() {
            let names = self.column_names().join(", ");
            let labels: Vec<String> = self.index.labels().iter().map(ToString::to_string).collect();
            return write!(
                f,
                "Empty DataFrame\nColumns: [{names}]\nIndex: [{}]",
                labels.join(", ")
            );
        }

        let total = self.len();
        let truncated = total > MAX_ROWS;
        let visible: Vec<usize> = if truncated {
            (0..EDGE_ROWS).chain(total - EDGE_ROWS..total).collect()
        } else {
            (0..total).collect()
        };

        let mut labels: Vec<String> = visible
            .iter()
            .filter_map(|&r| self.index.get(r).map(ToString::to_string))
            .collect();
        let mut cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.data.take(&visible).display_cells())
            .collect();
        if truncated {
            labels.insert(EDGE_ROWS, "..".into());
            for col in &mut cells {
                col.insert(EDGE_ROWS, "...".into());
            }
        }

        let label_width = labels.iter().map(String::as_str).map(width).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(c, col)| col.iter().map(String::as_str).map(width).fold(width(&c.name), usize::max))
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (c, &w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.name)?;
        }
        for (row, label) in labels.iter().enumerate() {
            write!(f, "\n{label:<label_width$}")?;
            for (col, &w) in cells.iter().zip(&widths) {
                write!(f, "  {:>w$}", col[row])?;
            }
        }
        if truncated {
            write!(f, "\n\n[{} rows x {} columns]", total, self.columns.len())?;
        }
        Ok(())
    }
}
