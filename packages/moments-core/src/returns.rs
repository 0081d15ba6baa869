//! Growth factor and compounding helpers for return series.

/// Convert each period return into a growth factor `1 + r`.
pub fn growth_factors(returns: &[f64]) -> Vec<f64> {
    returns.iter().map(|r| 1.0 + r).collect()
}

/// Cumulative product of growth factors, one entry per period.
///
/// The last element is the total compounded growth over the series.
///
/// # Example
///
/// ```rust
/// use moments_core::cumulative_returns;
///
/// let cumulative = cumulative_returns(&[0.10, -0.10]);
///
/// // 1.10, then 1.10 * 0.90 = 0.99
/// assert!((cumulative[0] - 1.10).abs() < 1e-12);
/// assert!((cumulative[1] - 0.99).abs() < 1e-12);
/// ```
pub fn cumulative_returns(returns: &[f64]) -> Vec<f64> {
    growth_factors(returns)
        .into_iter()
        .scan(1.0, |cum, factor| {
            *cum *= factor;
            Some(*cum)
        })
        .collect()
}

/// Total compounded return as a decimal (e.g., 0.05 for 5%).
pub fn total_return(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    returns.iter().fold(1.0, |cum, r| cum * (1.0 + r)) - 1.0
}
