//! Sample statistics shared by calibration and the risk summary.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with the N-1 denominator.
///
/// The sample (not population) convention matches the usual statistical
/// libraries the calibration inputs come from; the two differ by
/// `sqrt((N-1)/N)`, which matters for short series. Returns 0.0 when fewer
/// than two values are present.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Empirical percentile with linear interpolation between closest ranks.
///
/// `p` is a fraction in `[0, 1]`. Sorts `sample` in place. This is the
/// NumPy-default convention: rank `p * (n - 1)` interpolated between its
/// neighbors, which pins the interpolation scheme the reported VaR depends
/// on for small samples.
///
/// # Panics
/// Panics when `sample` is empty or `p` is outside `[0, 1]`.
pub fn empirical_percentile(sample: &mut [f64], p: f64) -> f64 {
    assert!(!sample.is_empty(), "sample must not be empty");
    assert!((0.0..=1.0).contains(&p), "percentile fraction must be in [0,1]");

    sample.sort_by(|a, b| a.total_cmp(b));
    if sample.len() == 1 {
        return sample[0];
    }

    let rank = p * (sample.len() as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sample[lo]
    } else {
        let w = rank - lo as f64;
        sample[lo] + w * (sample[hi] - sample[lo])
    }
}
