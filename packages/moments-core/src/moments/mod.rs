//! Partial moment module.
//!
//! Lower and higher partial moments of a return series about a threshold.

mod partial;

pub use partial::{higher_partial_moment, lower_partial_moment, partial_moment};
