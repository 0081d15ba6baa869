//! One-shot partial moment summary of a return series.

use crate::moments::{higher_partial_moment, lower_partial_moment};
use crate::returns::cumulative_returns;
use crate::types::MomentMetrics;
use crate::Result;

/// Calculate the partial moment metrics of a return series.
///
/// # Arguments
///
/// * `returns` - Periodic returns in chronological order
/// * `threshold` - Minimum acceptable return
///
/// # Returns
///
/// `MomentMetrics` with first and second order moments on both sides. Ratios
/// that need a downside denominator are `None` when no return falls below
/// the threshold.
pub fn calculate_moment_metrics(returns: &[f64], threshold: f64) -> Result<MomentMetrics> {
    let lpm1 = lower_partial_moment(returns, threshold, 1.0)?;
    let lpm2 = lower_partial_moment(returns, threshold, 2.0)?;
    let hpm1 = higher_partial_moment(returns, threshold, 1.0)?;
    let hpm2 = higher_partial_moment(returns, threshold, 2.0)?;

    let downside_deviation = lpm2.sqrt();
    let upside_deviation = hpm2.sqrt();

    let omega_ratio = (lpm1 > 0.0).then(|| hpm1 / lpm1);
    let upside_potential_ratio = (downside_deviation > 0.0).then(|| hpm1 / downside_deviation);

    // Non-empty after the moment calls above
    let growth = cumulative_returns(returns).last().copied().unwrap_or(1.0);
    let final_sortino = (downside_deviation > 0.0).then(|| growth / downside_deviation);

    Ok(MomentMetrics {
        threshold,
        periods: returns.len(),
        lpm1,
        lpm2,
        hpm1,
        hpm2,
        downside_deviation,
        upside_deviation,
        omega_ratio,
        upside_potential_ratio,
        total_return: growth - 1.0,
        final_sortino,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::{omega_ratio, sortino, upside_potential_ratio};
    use crate::returns::total_return;
    use crate::Error;
    use approx::assert_relative_eq;

    #[test]
    fn test_calculate_moment_metrics() {
        let returns: Vec<f64> = vec![
            0.01, -0.005, 0.008, -0.003, 0.012, -0.007, 0.005, 0.002, -0.004, 0.006, 0.003, -0.002,
            0.007, -0.001, 0.004,
        ];

        let metrics = calculate_moment_metrics(&returns, 0.0).unwrap();

        assert_eq!(metrics.periods, 15);
        assert_eq!(metrics.threshold, 0.0);
        assert!(metrics.lpm1 > 0.0);
        assert!(metrics.hpm1 > metrics.lpm1);
        assert_relative_eq!(
            metrics.downside_deviation,
            metrics.lpm2.sqrt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.omega_ratio.unwrap(),
            omega_ratio(&returns, 0.0).unwrap(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.upside_potential_ratio.unwrap(),
            upside_potential_ratio(&returns, 0.0).unwrap(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            metrics.total_return,
            total_return(&returns),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_final_sortino_matches_trajectory() {
        let returns = vec![0.01, -0.02, 0.03, -0.01];

        let metrics = calculate_moment_metrics(&returns, 0.0).unwrap();
        let trajectory = sortino(&returns, 0.0, 2.0).unwrap();

        assert_eq!(metrics.final_sortino, trajectory.last().copied());
    }

    #[test]
    fn test_metrics_without_downside() {
        let returns = vec![0.01, 0.02, 0.03];
        let metrics = calculate_moment_metrics(&returns, 0.0).unwrap();

        assert_eq!(metrics.lpm1, 0.0);
        assert_eq!(metrics.lpm2, 0.0);
        assert_eq!(metrics.downside_deviation, 0.0);
        assert!(metrics.omega_ratio.is_none());
        assert!(metrics.upside_potential_ratio.is_none());
        assert!(metrics.final_sortino.is_none());

        // Undefined ratios are left out of the JSON document
        let json = serde_json::to_value(&metrics).unwrap();
        assert!(json.get("omega_ratio").is_none());
        assert!(json.get("final_sortino").is_none());
        assert!(json.get("lpm2").is_some());
    }

    #[test]
    fn test_metrics_insufficient_data() {
        let result = calculate_moment_metrics(&[], 0.0);
        assert!(matches!(result, Err(Error::EmptySeries)));
    }
}
