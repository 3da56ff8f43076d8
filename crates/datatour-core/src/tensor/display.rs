//! `Display` for [`Tensor`] in NumPy's layout.
//!
//! ```text
//! [[1 2 3]
//!  [4 5 6]]
//! ```
//!
//! Elements are right-aligned to a common width and lines wrap at
//! [`LINE_WIDTH`] columns. Floats print with the fewest fraction digits (at
//! most [`PRECISION`]) that represent every visible element, padded with
//! spaces, and switch to scientific notation when magnitudes call for it.
//! Scientific mantissas are padded with zeros instead.
//! Tensors above [`THRESHOLD`] elements are summarised with `...`.

use core::fmt;

use crate::Scalar;

use super::Tensor;

/// Maximum characters per line before wrapping.
pub const LINE_WIDTH: usize = 75;
/// Maximum fraction digits for floats.
pub const PRECISION: usize = 8;
/// Element count above which axes are summarised.
pub const THRESHOLD: usize = 1000;
/// Items kept at each end of a summarised axis.
pub const EDGE_ITEMS: usize = 3;

impl<T: Scalar> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ndim() == 0 {
            return if T::IS_FLOAT {
                write!(f, "{:?}", self.data[0].to_f64())
            } else {
                write!(f, "{}", self.data[0])
            };
        }
        if self.is_empty() {
            return f.write_str("[]");
        }

        let summarise = self.numel() > THRESHOLD;
        let mut visible = Vec::new();
        self.collect_visible(0, 0, summarise, &mut visible);
        let format = ElementFormat::new(visible.iter().map(|&i| self.data[i]));

        let printer = Printer {
            tensor: self,
            format: &format,
            summarise,
        };
        let body = printer.render(0, 0, " ", LINE_WIDTH);
        f.write_str(&body)
    }
}

impl<T: Scalar> Tensor<T> {
    /// Items shown along an axis: all of them, or the leading and trailing
    /// [`EDGE_ITEMS`] when summarising.
    fn shown_items(&self, axis: usize, summarise: bool) -> (usize, usize) {
        let len = self.shape[axis];
        if summarise && len > 2 * EDGE_ITEMS {
            (EDGE_ITEMS, EDGE_ITEMS)
        } else {
            (len, 0)
        }
    }

    fn collect_visible(&self, axis: usize, offset: usize, summarise: bool, out: &mut Vec<usize>) {
        let (leading, trailing) = self.shown_items(axis, summarise);
        let len = self.shape[axis];
        let items = (0..leading).chain(len - trailing..len);
        for i in items {
            let flat = offset + i * self.strides[axis];
            if axis + 1 == self.ndim() {
                out.push(flat);
            } else {
                self.collect_visible(axis + 1, flat, summarise, out);
            }
        }
    }
}

struct Printer<'a, T: Scalar> {
    tensor: &'a Tensor<T>,
    format: &'a ElementFormat,
    summarise: bool,
}

impl<T: Scalar> Printer<'_, T> {
    /// Render the sub-array starting at `offset` along `axis`, bracketed.
    ///
    /// `hanging` is the indent of continuation lines; `width` the columns
    /// left for this nesting level.
    fn render(&self, axis: usize, offset: usize, hanging: &str, width: usize) -> String {
        let t = self.tensor;
        let len = t.shape[axis];
        let stride = t.strides[axis];
        let (leading, trailing) = t.shown_items(axis, self.summarise);
        let next_hanging = format!("{hanging} ");
        let next_width = width - 1;

        let mut s = String::new();
        if axis + 1 == t.ndim() {
            let elem_width = width - 1;
            let mut line = hanging.to_string();
            let word = |i: usize| self.format.format(t.data[offset + i * stride]);

            for i in 0..leading.min(len - 1) {
                extend_line(&mut s, &mut line, &word(i), elem_width, hanging);
                line.push(' ');
            }
            if trailing > 0 {
                extend_line(&mut s, &mut line, "...", elem_width, hanging);
                line.push(' ');
                for i in len - trailing..len - 1 {
                    extend_line(&mut s, &mut line, &word(i), elem_width, hanging);
                    line.push(' ');
                }
            }
            extend_line(&mut s, &mut line, &word(len - 1), elem_width, hanging);
            s.push_str(&line);
        } else {
            let line_sep = "\n".repeat(t.ndim() - axis - 1);
            let nested = |i: usize| self.render(axis + 1, offset + i * stride, &next_hanging, next_width);

            for i in 0..leading.min(len - 1) {
                s.push_str(hanging);
                s.push_str(&nested(i));
                s.push_str(&line_sep);
            }
            if trailing > 0 {
                s.push_str(hanging);
                s.push_str("...");
                s.push_str(&line_sep);
                for i in len - trailing..len - 1 {
                    s.push_str(hanging);
                    s.push_str(&nested(i));
                    s.push_str(&line_sep);
                }
            }
            s.push_str(hanging);
            s.push_str(&nested(len - 1));
        }

        format!("[{}]", &s[hanging.len()..])
    }
}

/// Append `word` to `line`, first flushing `line` into `s` if it would
/// overflow `width`. A line holding only the indent is never flushed.
fn extend_line(s: &mut String, line: &mut String, word: &str, width: usize, hanging: &str) {
    let needs_wrap = line.len() + word.len() > width && line.len() > hanging.len();
    if needs_wrap {
        s.push_str(line.trim_end());
        s.push('\n');
        line.clear();
        line.push_str(hanging);
    }
    line.push_str(word);
}

/// How every element of one tensor is rendered, fixed up front so columns
/// line up.
#[derive(Debug)]
enum ElementFormat {
    Integer { width: usize },
    Fixed { int_width: usize, frac_width: usize },
    Scientific {
        int_width: usize,
        frac_width: usize,
        exp_width: usize,
    },
}

impl ElementFormat {
    fn new<T: Scalar>(values: impl Iterator<Item = T>) -> Self {
        if !T::IS_FLOAT {
            let width = values.map(|v| v.to_string().len()).max().unwrap_or(0);
            return Self::Integer { width };
        }

        let values: Vec<f64> = values.map(Scalar::to_f64).collect();
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let max_abs = finite.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let min_nonzero = finite
            .iter()
            .map(|v| v.abs())
            .filter(|&v| v > 0.0)
            .fold(f64::INFINITY, f64::min);
        let scientific = max_abs >= 1e8
            || (min_nonzero.is_finite() && (min_nonzero < 1e-4 || max_abs / min_nonzero > 1e3));

        let mut int_width = 0;
        let mut frac_width = 0;
        let mut exp_width = 0;
        for &v in &finite {
            if scientific {
                let (int, frac, exp) = split_scientific(v);
                int_width = int_width.max(int.len());
                frac_width = frac_width.max(frac.len());
                exp_width = exp_width.max(exp.unsigned_abs().to_string().len().max(2));
            } else {
                let (int, frac) = split_fixed(v);
                int_width = int_width.max(int.len());
                frac_width = frac_width.max(frac.len());
            }
        }
        // Non-finite values are right-aligned in the same total width.
        let special = values
            .iter()
            .filter(|v| !v.is_finite())
            .map(|&v| special_name(v).len())
            .max()
            .unwrap_or(0);
        let body = int_width + 1 + frac_width + if scientific { exp_width + 2 } else { 0 };
        if special > body {
            int_width += special - body;
        }

        if scientific {
            Self::Scientific {
                int_width,
                frac_width,
                exp_width,
            }
        } else {
            Self::Fixed {
                int_width,
                frac_width,
            }
        }
    }

    fn format<T: Scalar>(&self, value: T) -> String {
        match *self {
            Self::Integer { width } => format!("{value:>width$}"),
            Self::Fixed {
                int_width,
                frac_width,
            } => {
                let v = value.to_f64();
                if !v.is_finite() {
                    let total = int_width + 1 + frac_width;
                    return format!("{:>total$}", special_name(v));
                }
                let (int, frac) = split_fixed(v);
                format!("{int:>int_width$}.{frac:<frac_width$}")
            }
            Self::Scientific {
                int_width,
                frac_width,
                exp_width,
            } => {
                let v = value.to_f64();
                if !v.is_finite() {
                    let total = int_width + 1 + frac_width + 2 + exp_width;
                    return format!("{:>total$}", special_name(v));
                }
                let (int, frac, exp) = split_scientific(v);
                let sign = if exp < 0 { '-' } else { '+' };
                let digits = exp.unsigned_abs();
                format!("{int:>int_width$}.{frac:0<frac_width$}e{sign}{digits:0>exp_width$}")
            }
        }
    }
}

fn special_name(v: f64) -> &'static str {
    if v.is_nan() {
        "nan"
    } else if v > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

/// Integer part (with sign) and trimmed fraction digits of `v` rounded to
/// [`PRECISION`] places.
fn split_fixed(v: f64) -> (String, String) {
    let text = format!("{v:.PRECISION$}");
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    (int.to_string(), frac.trim_end_matches('0').to_string())
}

/// Mantissa integer digit (with sign), trimmed mantissa fraction, and the
/// decimal exponent.
fn split_scientific(v: f64) -> (String, String, i32) {
    let text = format!("{v:.PRECISION$e}");
    let (mantissa, exp) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    (
        int.to_string(),
        frac.trim_end_matches('0').to_string(),
        exp.parse().unwrap_or(0),
    )
}
