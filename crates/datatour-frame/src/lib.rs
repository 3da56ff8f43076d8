//! # datatour-frame
//!
//! Labeled one- and two-dimensional data: [`Series`] and [`DataFrame`],
//! with typed nullable columns, pandas-style printing, concatenation,
//! label-based row assignment and CSV input/output.
//!
//! ```
//! use datatour_frame::{read_csv_from, DataFrame, Label, Value};
//!
//! let df = read_csv_from("Name,Age\nJohn,20\n".as_bytes()).unwrap();
//! let mut both = DataFrame::concat(&[&df, &df]).unwrap();
//! let next = both.len();
//! both.set_row(Label::from(next), vec![Value::from("Jane"), Value::Int(21)])
//!     .unwrap();
//! assert_eq!(both.len(), 3);
//! ```

pub mod column;
pub mod error;
pub mod frame;
pub mod index;
pub mod io;
pub mod series;
pub mod value;

pub use column::ColumnData;
pub use error::{FrameError, Result};
pub use frame::DataFrame;
pub use index::{Index, Label};
pub use io::{read_csv, read_csv_from, CsvOptions};
pub use series::Series;
pub use value::{DType, Value};
