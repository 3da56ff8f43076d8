//! One labeled column.

use std::fmt;

use crate::column::ColumnData;
use crate::error::{FrameError, Result};
use crate::index::{Index, Label};
use crate::value::{DType, Value};

/// A typed column paired with row labels, like a pandas `Series`.
///
/// ```
/// use datatour_frame::Series;
///
/// let s = Series::new(vec![1_i64, 2, 3]);
/// assert_eq!(s.to_string(), "0    1\n1    2\n2    3\ndtype: int64");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: Option<String>,
    index: Index,
    data: ColumnData,
}

impl Series {
    /// An unnamed series with positional labels `0..n`.
    pub fn new(data: impl Into<ColumnData>) -> Self {
        let data = data.into();
        Self {
            name: None,
            index: Index::range(data.len()),
            data,
        }
    }

    /// An unnamed series with explicit labels, one per value.
    pub fn with_index<L: Into<Label>>(
        data: impl Into<ColumnData>,
        labels: impl IntoIterator<Item = L>,
    ) -> Result<Self> {
        let data = data.into();
        let index = Index::from_labels(labels.into_iter().map(Into::into).collect());
        if index.len() != data.len() {
            return Err(FrameError::LengthMismatch {
                expected: data.len(),
                got: index.len(),
            });
        }
        Ok(Self {
            name: None,
            index,
            data,
        })
    }

    pub(crate) fn from_parts(name: Option<String>, index: Index, data: ColumnData) -> Self {
        debug_assert_eq!(index.len(), data.len());
        Self { name, index, data }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    /// The value at position `pos`.
    pub fn get(&self, pos: usize) -> Option<Value> {
        self.data.get(pos)
    }

    /// The value under `label`; the last one when the label repeats.
    pub fn get_label(&self, label: &Label) -> Option<Value> {
        self.index
            .positions_of(label)
            .last()
            .and_then(|&pos| self.data.get(pos))
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.index.labels().iter().map(ToString::to_string).collect();
        let cells = self.data.display_cells();
        let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let cell_width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);

        if self.is_empty() {
            write!(f, "Series([], ")?;
        } else {
            for (label, cell) in labels.iter().zip(&cells) {
                writeln!(f, "{label:<label_width$}    {cell:>cell_width$}")?;
            }
        }
        if let Some(name) = &self.name {
            write!(f, "Name: {name}, ")?;
        }
        write!(f, "dtype: {}", self.dtype())?;
        if self.is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_display() {
        let s = Series::new(vec![1_i64, 2, 3, 4, 5]);
        assert_eq!(
            s.to_string(),
            "0    1\n1    2\n2    3\n3    4\n4    5\ndtype: int64"
        );
    }

    #[test]
    fn test_labeled_display() {
        let s = Series::with_index(vec![1_i64, 2, 3, 4, 5], ["a", "b", "c", "d", "e"]).unwrap();
        assert_eq!(
            s.to_string(),
            "a    1\nb    2\nc    3\nd    4\ne    5\ndtype: int64"
        );
    }

    #[test]
    fn test_named_display_right_aligns_values() {
        let s = Series::new(vec!["a", "bbb"]).with_name("City");
        assert_eq!(s.to_string(), "0      a\n1    bbb\nName: City, dtype: object");
    }

    #[test]
    fn test_float_display() {
        let s = Series::new(vec![1.0, 2.5]);
        assert_eq!(s.to_string(), "0    1.0\n1    2.5\ndtype: float64");
    }

    #[test]
    fn test_with_index_length_mismatch() {
        let r = Series::with_index(vec![1_i64, 2], ["a"]);
        assert!(matches!(
            r,
            Err(FrameError::LengthMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_get_label() {
        let s = Series::with_index(vec![10_i64, 20], ["x", "y"]).unwrap();
        assert_eq!(s.get_label(&Label::from("y")), Some(Value::Int(20)));
        assert_eq!(s.get_label(&Label::from("z")), None);
        assert_eq!(s.get(0), Some(Value::Int(10)));
    }

    #[test]
    fn test_empty_display() {
        let s = Series::new(Vec::<i64>::new());
        assert_eq!(s.to_string(), "Series([], dtype: int64)");
    }
}
