use ndarray::{Array1, ArrayView1};

/// Extremum search and magnitude helpers over one-dimensional signals.
pub struct StatsHelper;

impl StatsHelper {
    /// Lowest index among the maxima, `None` for an empty signal.
    pub fn argmax(values: ArrayView1<f64>) -> Option<usize> {
        Self::first_extremum(values, |candidate, best| candidate > best)
    }

    /// Lowest index among the minima, `None` for an empty signal.
    pub fn argmin(values: ArrayView1<f64>) -> Option<usize> {
        Self::first_extremum(values, |candidate, best| candidate < best)
    }

    pub fn magnitude(values: ArrayView1<f64>) -> Array1<f64> {
        values.mapv(f64::abs)
    }

    /// `log10(max(|v|, floor))` element-wise.
    pub fn log_magnitude(values: ArrayView1<f64>, floor: f64) -> Array1<f64> {
        values.mapv(|v| v.abs().max(floor).log10())
    }

    fn first_extremum<F>(values: ArrayView1<f64>, better: F) -> Option<usize>
    where
        F: Fn(f64, f64) -> bool,
    {
        let mut iter = values.iter().copied().enumerate();
        let (mut best_idx, mut best) = iter.next()?;
        for (idx, value) in iter {
            if better(value, best) {
                best_idx = idx;
                best = value;
            }
        }
        Some(best_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn argmax_prefers_first_occurrence() {
        let values = array![1.0, 5.0, 2.0, 5.0];
        assert_eq!(StatsHelper::argmax(values.view()), Some(1));
    }

    #[test]
    fn argmin_prefers_first_occurrence() {
        let values = array![3.0, -1.0, 0.0, -1.0];
        assert_eq!(StatsHelper::argmin(values.view()), Some(1));
    }

    #[test]
    fn extremum_of_empty_signal_is_none() {
        let values = Array1::<f64>::zeros(0);
        assert_eq!(StatsHelper::argmax(values.view()), None);
        assert_eq!(StatsHelper::argmin(values.view()), None);
    }

    #[test]
    fn log_magnitude_floors_zero_current() {
        let values = array![0.0, -100.0];
        let logged = StatsHelper::log_magnitude(values.view(), 1e-12);
        assert!((logged[0] + 12.0).abs() < 1e-12);
        assert!((logged[1] - 2.0).abs() < 1e-12);
    }
}
