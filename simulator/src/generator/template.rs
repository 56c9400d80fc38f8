/// Forward-and-back gate sweep: `points` samples from `start` to `stop`, then
/// back to `start` without repeating the turning sample.
pub fn triangle_sweep(start: f64, stop: f64, points: usize) -> Vec<f64> {
    if points == 0 {
        return Vec::new();
    }
    if points == 1 {
        return vec![start];
    }
    let step = (stop - start) / (points - 1) as f64;
    let up: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
    let back = up.iter().rev().skip(1).copied();
    up.iter().copied().chain(back).collect()
}
