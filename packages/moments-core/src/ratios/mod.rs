//! Risk-adjusted ratios built on partial moments.
//!
//! Provides the Sortino trajectory, Omega and upside potential ratios, and a
//! one-shot metrics summary.

mod omega;
mod sortino;
mod summary;

pub use omega::{omega_ratio, upside_potential_ratio};
pub use sortino::{downside_deviation, sortino, sortino_rows, sortino_with_config};
pub use summary::calculate_moment_metrics;
