//! Array construction, element-wise arithmetic, matrix products and
//! descriptive statistics.

use std::io::Write;

use datatour_core::random::{uniform, Rng};
use datatour_core::Tensor;

use crate::config::TourConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ArraysReport {
    pub sum: Tensor<i64>,
    pub difference: Tensor<i64>,
    pub product: Tensor<i64>,
    pub quotient: Tensor<f64>,
    pub power: Tensor<i64>,
    pub transpose: Tensor<i64>,
    pub dot: Tensor<i64>,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub var: f64,
}

pub fn run(config: &TourConfig, out: &mut impl Write) -> Result<ArraysReport> {
    tracing::debug!("arrays step");

    let arr = Tensor::from_row(vec![1_i64, 2, 3, 4, 5]);
    let arr_2d = Tensor::from_rows(&[vec![1_i64, 2, 3], vec![4, 5, 6]])?;
    writeln!(out, "{arr}")?;
    writeln!(out, "{arr_2d}")?;

    let mut rng = config.seed.map_or_else(Rng::from_time, Rng::new);
    let random = uniform::<f64>(&mut rng, vec![3, 4]);
    let zeros = Tensor::<f64>::zeros(vec![3, 4]);
    let ones = Tensor::<f64>::ones(vec![3, 4]);
    let full = Tensor::full(vec![3, 4], 10_i64);
    writeln!(out, "{random}")?;
    writeln!(out, "{zeros}")?;
    writeln!(out, "{ones}")?;
    writeln!(out, "{full}")?;

    let range = Tensor::arange_step(10.0_f64, 20.0, 0.5)?;
    writeln!(out, "{range}")?;
    let range_step = Tensor::arange_step(10.0_f64, 20.0, 0.5)?;
    writeln!(out, "{range_step}")?;

    let m1 = arr_2d.clone();
    let m2 = arr_2d;
    let sum = m1.add_checked(&m2)?;
    writeln!(out, "{sum}")?;
    let difference = m1.sub_checked(&m2)?;
    writeln!(out, "{difference}")?;
    let product = m1.mul_checked(&m2)?;
    writeln!(out, "{product}")?;
    let quotient = m1.true_div(&m2)?;
    writeln!(out, "{quotient}")?;
    let power = m1.pow_checked(&m2)?;
    writeln!(out, "{power}")?;
    let transpose = m1.transpose()?;
    writeln!(out, "{transpose}")?;
    let dot = m1.dot(&m2.transpose()?)?;
    writeln!(out, "{dot}")?;

    let mean = arr.mean()?;
    let median = arr.median()?;
    writeln!(out, "{mean:?}")?;
    writeln!(out, "{median:?}")?;
    let std = arr.std_dev()?;
    let var = arr.variance()?;
    writeln!(out, "{std:?}")?;
    writeln!(out, "{var:?}")?;

    Ok(ArraysReport {
        sum,
        difference,
        product,
        quotient,
        power,
        transpose,
        dot,
        mean,
        median,
        std,
        var,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn run_seeded() -> (ArraysReport, String) {
        let config = TourConfig::default().with_seed(0);
        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_matrix_results() {
        let (report, _) = run_seeded();
        assert_eq!(report.sum.as_slice(), &[2, 4, 6, 8, 10, 12]);
        assert!(report.difference.iter().all(|&x| x == 0));
        assert_eq!(report.product.as_slice(), &[1, 4, 9, 16, 25, 36]);
        assert!(report.quotient.iter().all(|&x| x == 1.0));
        assert_eq!(report.power.as_slice(), &[1, 4, 27, 256, 3125, 46_656]);
        assert_eq!(report.transpose.shape(), &[3, 2]);
        assert_eq!(report.dot.as_slice(), &[14, 32, 32, 77]);
    }

    #[test]
    fn test_statistics() {
        let (report, _) = run_seeded();
        assert_eq!(report.mean, 3.0);
        assert_eq!(report.median, 3.0);
        assert!((report.std - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((report.var - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_transcript() {
        let (_, text) = run_seeded();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[1 2 3 4 5]");
        assert_eq!(lines[1], "[[1 2 3]");
        assert_eq!(lines[2], " [4 5 6]]");
        assert!(text.contains("[[0. 0. 0. 0.]\n [0. 0. 0. 0.]\n [0. 0. 0. 0.]]\n"));
        assert!(text.contains("[[10 10 10 10]\n [10 10 10 10]\n [10 10 10 10]]\n"));
        assert!(text.contains("[[ 2  4  6]\n [ 8 10 12]]\n"));
        assert!(text.contains("[[1. 1. 1.]\n [1. 1. 1.]]\n"));
        assert!(text.contains("[[14 32]\n [32 77]]\n"));
        assert!(text.ends_with("3.0\n3.0\n1.4142135623730951\n2.0\n"));
    }

    #[test]
    fn test_seeded_random_array_repeats() {
        let (_, a) = run_seeded();
        let (_, b) = run_seeded();
        assert_eq!(a, b);
    }
}
