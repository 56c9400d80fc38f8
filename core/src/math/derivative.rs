use crate::prelude::{TransferError, TransferResult};
use ndarray::{Array1, ArrayView1};

/// Finite-difference derivative that tolerates flat or repeated abscissae.
///
/// Endpoints use one-sided differences; interior points average the backward
/// and forward differences. Any spacing with `|dx| <= MIN_SPACING` is replaced
/// by `+MIN_SPACING`, so a tiny negative step flips the sign of its term.
pub struct StableDerivative;

impl StableDerivative {
    pub const MIN_SPACING: f64 = 1e-12;

    pub fn differentiate(f: ArrayView1<f64>, x: ArrayView1<f64>) -> TransferResult<Array1<f64>> {
        if f.len() != x.len() {
            return Err(TransferError::Shape(format!(
                "derivative inputs differ in length ({} vs {})",
                f.len(),
                x.len()
            )));
        }

        let n = f.len();
        if n < 2 {
            return Ok(Array1::zeros(n));
        }

        let mut df = Array1::zeros(n);
        df[0] = (f[1] - f[0]) / Self::spacing(x[1] - x[0]);
        df[n - 1] = (f[n - 1] - f[n - 2]) / Self::spacing(x[n - 1] - x[n - 2]);
        for i in 1..n - 1 {
            let backward = (f[i] - f[i - 1]) / Self::spacing(x[i] - x[i - 1]);
            let forward = (f[i + 1] - f[i]) / Self::spacing(x[i + 1] - x[i]);
            df[i] = (backward + forward) / 2.0;
        }
        Ok(df)
    }

    fn spacing(dx: f64) -> f64 {
        if dx.abs() > Self::MIN_SPACING {
            dx
        } else {
            Self::MIN_SPACING
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn linear_signal_has_constant_slope() {
        let x = array![-1.0, -0.25, 0.5, 2.0, 3.5, 7.0];
        let f = x.mapv(|v| 2.5 * v - 4.0);
        let df = StableDerivative::differentiate(f.view(), x.view()).unwrap();
        assert_eq!(df.len(), x.len());
        for value in df.iter() {
            assert!((value - 2.5).abs() < 1e-9, "slope {}", value);
        }
    }

    #[test]
    fn short_inputs_yield_zeros() {
        let empty = Array1::<f64>::zeros(0);
        let df = StableDerivative::differentiate(empty.view(), empty.view()).unwrap();
        assert!(df.is_empty());

        let single = array![4.0];
        let df = StableDerivative::differentiate(single.view(), array![1.0].view()).unwrap();
        assert_eq!(df, array![0.0]);
    }

    #[test]
    fn endpoints_use_one_sided_differences() {
        let x = array![0.0, 1.0, 3.0];
        let f = array![0.0, 2.0, 3.0];
        let df = StableDerivative::differentiate(f.view(), x.view()).unwrap();
        assert_eq!(df[0], 2.0);
        assert_eq!(df[1], (2.0 + 0.5) / 2.0);
        assert_eq!(df[2], 0.5);
    }

    #[test]
    fn repeated_abscissa_is_clamped_to_min_spacing() {
        let x = array![0.0, 0.0, 1.0];
        let f = array![0.0, 1.0, 2.0];
        let df = StableDerivative::differentiate(f.view(), x.view()).unwrap();
        assert!(df.iter().all(|v| v.is_finite()));
        assert_eq!(df[0], 1.0 / StableDerivative::MIN_SPACING);
        assert_eq!(df[1], (1.0 / StableDerivative::MIN_SPACING + 1.0) / 2.0);
        assert_eq!(df[2], 1.0);
    }

    #[test]
    fn tiny_negative_spacing_is_replaced_by_positive_epsilon() {
        // Known edge behavior: the sign of a sub-epsilon step is dropped.
        let x = array![0.0, -1e-13];
        let f = array![0.0, 1.0];
        let df = StableDerivative::differentiate(f.view(), x.view()).unwrap();
        assert_eq!(df[0], 1.0 / StableDerivative::MIN_SPACING);
        assert!(df[0] > 0.0);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = StableDerivative::differentiate(array![1.0, 2.0].view(), array![1.0].view())
            .unwrap_err();
        assert!(matches!(err, TransferError::Shape(_)));
    }
}
