//! Descriptive statistics over recorded samples.

/// Total of `values`, widened so any number of `u64` samples fits.
pub fn sum(values: &[u64]) -> u128 {
    values.iter().map(|&value| u128::from(value)).sum()
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[u64]) -> f64 {
    sum(values) as f64 / values.len() as f64
}

/// Sample standard deviation (`n - 1` denominator). NaN for fewer than two
/// values.
pub fn std(values: &[u64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(values);
    let squares: f64 = values
        .iter()
        .map(|&value| {
            let diff = value as f64 - mean;
            diff * diff
        })
        .sum();
    (squares / (values.len() as f64 - 1.0)).sqrt()
}
