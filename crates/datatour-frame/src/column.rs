//! Typed, nullable column storage.

use crate::value::{DType, Value};

/// Text that reads as a missing value, as pandas' `read_csv` treats it.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One column's cells, stored by type.
///
/// Every cell may be null. Integer columns widen to float when a float is
/// stored into them; numbers and strings never mix.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Str(Vec<Option<String>>),
}

impl ColumnData {
    /// An all-null column of `len` cells.
    pub fn nulls(dtype: DType, len: usize) -> Self {
        match dtype {
            DType::Int64 => ColumnData::Int(vec![None; len]),
            DType::Float64 => ColumnData::Float(vec![None; len]),
            DType::Object => ColumnData::Str(vec![None; len]),
        }
    }

    /// Infer a column from raw text cells: integers if every non-missing
    /// cell parses as `i64`, floats if every one parses as `f64`, strings
    /// otherwise. A column with no values at all is float, like pandas.
    pub fn infer<S: AsRef<str>>(cells: &[S]) -> Self {
        let present: Vec<&str> = cells
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| !is_na(c))
            .collect();

        if present.iter().all(|c| c.trim().parse::<i64>().is_ok()) && !present.is_empty() {
            return ColumnData::Int(
                cells
                    .iter()
                    .map(|c| parse_present(c.as_ref(), |t| t.trim().parse().ok()))
                    .collect(),
            );
        }
        if present.iter().all(|c| c.trim().parse::<f64>().is_ok()) {
            return ColumnData::Float(
                cells
                    .iter()
                    .map(|c| parse_present(c.as_ref(), |t| t.trim().parse().ok()))
                    .collect(),
            );
        }
        ColumnData::Str(
            cells
                .iter()
                .map(|c| parse_present(c.as_ref(), |t| Some(t.to_string())))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Int(_) => DType::Int64,
            ColumnData::Float(_) => DType::Float64,
            ColumnData::Str(_) => DType::Object,
        }
    }

    /// The cell at `row`, or `None` past the end.
    pub fn get(&self, row: usize) -> Option<Value> {
        match self {
            ColumnData::Int(v) => v.get(row).map(|c| Value::from(*c)),
            ColumnData::Float(v) => v.get(row).map(|c| Value::from(*c)),
            ColumnData::Str(v) => v.get(row).map(|c| Value::from(c.clone())),
        }
    }

    /// Iterate over all cells as [`Value`]s.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Whether `value` can be stored here, possibly after widening.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (ColumnData::Int(_) | ColumnData::Float(_), Value::Int(_) | Value::Float(_))
                | (ColumnData::Str(_), Value::Str(_))
        )
    }

    /// Append one cell. On a type clash the rejected value's dtype is
    /// returned and the column is unchanged.
    pub(crate) fn push(&mut self, value: Value) -> Result<(), DType> {
        self.store(None, value)
    }

    /// Overwrite the cell at `row`, which must be in bounds.
    pub(crate) fn set(&mut self, row: usize, value: Value) -> Result<(), DType> {
        debug_assert!(row < self.len());
        self.store(Some(row), value)
    }

    fn store(&mut self, row: Option<usize>, value: Value) -> Result<(), DType> {
        fn put<T>(cells: &mut Vec<Option<T>>, row: Option<usize>, cell: Option<T>) {
            match row {
                Some(r) => cells[r] = cell,
                None => cells.push(cell),
            }
        }

        if matches!((&*self, &value), (ColumnData::Int(_), Value::Float(_))) {
            self.widen_to_float();
        }
        match (self, value) {
            (ColumnData::Int(v), Value::Int(x)) => put(v, row, Some(x)),
            (ColumnData::Int(v), Value::Null) => put(v, row, None),
            (ColumnData::Float(v), Value::Float(x)) => put(v, row, Some(x)),
            (ColumnData::Float(v), Value::Int(x)) => put(v, row, Some(x as f64)),
            (ColumnData::Float(v), Value::Null) => put(v, row, None),
            (ColumnData::Str(v), Value::Str(x)) => put(v, row, Some(x)),
            (ColumnData::Str(v), Value::Null) => put(v, row, None),
            (_, other) => return Err(other.dtype().unwrap_or(DType::Object)),
        }
        Ok(())
    }

    /// Append every cell of `other`, widening `Int` to `Float` when the two
    /// sides disagree. On a type clash `other`'s dtype is returned and the
    /// column is unchanged.
    pub(crate) fn append(&mut self, other: &ColumnData) -> Result<(), DType> {
        if matches!((&*self, other), (ColumnData::Int(_), ColumnData::Float(_))) {
            self.widen_to_float();
        }
        if matches!((&*self, other), (ColumnData::Float(_), ColumnData::Int(_))) {
            let mut widened = other.clone();
            widened.widen_to_float();
            return self.append(&widened);
        }
        match (self, other) {
            (ColumnData::Int(a), ColumnData::Int(b)) => a.extend_from_slice(b),
            (ColumnData::Float(a), ColumnData::Float(b)) => a.extend_from_slice(b),
            (ColumnData::Str(a), ColumnData::Str(b)) => a.extend_from_slice(b),
            (_, other) => return Err(other.dtype()),
        }
        Ok(())
    }

    /// A new column holding the cells at `rows`, in that order.
    pub(crate) fn take(&self, rows: &[usize]) -> ColumnData {
        match self {
            ColumnData::Int(v) => ColumnData::Int(rows.iter().map(|&r| v[r]).collect()),
            ColumnData::Float(v) => ColumnData::Float(rows.iter().map(|&r| v[r]).collect()),
            ColumnData::Str(v) => ColumnData::Str(rows.iter().map(|&r| v[r].clone()).collect()),
        }
    }

    fn widen_to_float(&mut self) {
        if let ColumnData::Int(v) = self {
            *self = ColumnData::Float(v.iter().map(|c| c.map(|x| x as f64)).collect());
        }
    }

    /// Cell text for display: pandas' `NaN` for nulls, and floats sharing
    /// one number of decimals (at least one, at most six) across the column.
    pub(crate) fn display_cells(&self) -> Vec<String> {
        match self {
            ColumnData::Int(v) => v.iter().map(|c| c.map_or("NaN".into(), |x| x.to_string())).collect(),
            ColumnData::Str(v) => v.iter().map(|c| c.clone().unwrap_or_else(|| "NaN".into())).collect(),
            ColumnData::Float(v) => {
                let decimals = v
                    .iter()
                    .flatten()
                    .filter(|x| x.is_finite())
                    .map(|x| {
                        let text = format!("{x:.6}");
                        text.split_once('.')
                            .map_or(0, |(_, frac)| frac.trim_end_matches('0').len())
                    })
                    .max()
                    .unwrap_or(0)
                    .max(1);
                v.iter()
                    .map(|c| match c {
                        None => "NaN".into(),
                        Some(x) if x.is_nan() => "NaN".into(),
                        Some(x) if x.is_infinite() => if *x > 0.0 { "inf" } else { "-inf" }.into(),
                        Some(x) => format!("{x:.decimals$}"),
                    })
                    .collect()
            }
        }
    }

    /// Cell text for CSV output: empty for nulls, shortest round-trip form
    /// for floats.
    pub(crate) fn csv_cell(&self, row: usize) -> String {
        match self {
            ColumnData::Int(v) => v[row].map(|x| x.to_string()).unwrap_or_default(),
            ColumnData::Float(v) => v[row].map(|x| format!("{x:?}")).unwrap_or_default(),
            ColumnData::Str(v) => v[row].clone().unwrap_or_default(),
        }
    }
}

fn is_na(cell: &str) -> bool {
    NA_VALUES.contains(&cell)
}

fn parse_present<T>(cell: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    if is_na(cell) {
        None
    } else {
        parse(cell)
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(v: Vec<i64>) -> Self {
        ColumnData::Int(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(v: Vec<f64>) -> Self {
        ColumnData::Float(v.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(v: Vec<&str>) -> Self {
        ColumnData::Str(v.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(v: Vec<String>) -> Self {
        ColumnData::Str(v.into_iter().map(Some).collect())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_int() {
        let col = ColumnData::infer(&["20", "21", ""]);
        assert_eq!(col, ColumnData::Int(vec![Some(20), Some(21), None]));
    }

    #[test]
    fn test_infer_float() {
        let col = ColumnData::infer(&["1", "2.5", "NaN"]);
        assert_eq!(col, ColumnData::Float(vec![Some(1.0), Some(2.5), None]));
    }

    #[test]
    fn test_infer_str() {
        let col = ColumnData::infer(&["2024-02-15", "12"]);
        assert_eq!(col.dtype(), DType::Object);
        assert_eq!(col.get(1), Some(Value::from("12")));
    }

    #[test]
    fn test_infer_all_missing_is_float() {
        assert_eq!(ColumnData::infer(&["", "NA"]).dtype(), DType::Float64);
    }

    #[test]
    fn test_push_widens_int_column() {
        let mut col = ColumnData::from(vec![1_i64, 2]);
        col.push(Value::Float(2.5)).unwrap();
        assert_eq!(col, ColumnData::Float(vec![Some(1.0), Some(2.0), Some(2.5)]));
    }

    #[test]
    fn test_push_int_into_float() {
        let mut col = ColumnData::from(vec![1.5]);
        col.push(Value::Int(2)).unwrap();
        assert_eq!(col.get(1), Some(Value::Float(2.0)));
    }

    #[test]
    fn test_push_str_into_int_rejected() {
        let mut col = ColumnData::from(vec![1_i64]);
        assert_eq!(col.push(Value::from("x")), Err(DType::Object));
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn test_push_null_anywhere() {
        let mut col = ColumnData::from(vec!["a"]);
        col.push(Value::Null).unwrap();
        assert_eq!(col.get(1), Some(Value::Null));
    }

    #[test]
    fn test_append_mixed_numeric() {
        let mut a = ColumnData::from(vec![1_i64]);
        a.append(&ColumnData::from(vec![0.5])).unwrap();
        assert_eq!(a, ColumnData::Float(vec![Some(1.0), Some(0.5)]));

        let mut b = ColumnData::from(vec![0.5]);
        b.append(&ColumnData::from(vec![1_i64])).unwrap();
        assert_eq!(b, ColumnData::Float(vec![Some(0.5), Some(1.0)]));
    }

    #[test]
    fn test_append_str_onto_int_rejected() {
        let mut a = ColumnData::from(vec![1_i64]);
        assert!(a.append(&ColumnData::from(vec!["x"])).is_err());
    }

    #[test]
    fn test_display_cells_share_decimals() {
        let col = ColumnData::Float(vec![Some(1.5), Some(2.25), None]);
        assert_eq!(col.display_cells(), vec!["1.50", "2.25", "NaN"]);
        let whole = ColumnData::from(vec![75000.0]);
        assert_eq!(whole.display_cells(), vec!["75000.0"]);
    }

    #[test]
    fn test_csv_cell() {
        let col = ColumnData::Float(vec![Some(75000.0), None]);
        assert_eq!(col.csv_cell(0), "75000.0");
        assert_eq!(col.csv_cell(1), "");
    }
}
