//! Result types for the overlap engine.
//!
//! An [`OverlapReport`] is the successful outcome of one comparison. Besides
//! the ratio it keeps the counts it was computed from so callers can show or
//! log them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::OverlapError;

/// Value reported in place of a ratio when a comparison fails, for callers
/// that still speak the sentinel convention.
pub const FAILURE_SENTINEL: f64 = -1.0;

/// Outcome of a successful overlap comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlapReport {
    /// Tuple size `N` the comparison ran with.
    pub tuple_size: usize,
    /// Candidate tuples (by occurrence) also present in the reference set.
    pub repetitions: usize,
    /// Length of the candidate tuple list, duplicates included.
    pub candidate_tuples: usize,
    /// Number of distinct reference tuples.
    pub reference_tuples: usize,
    /// `repetitions / candidate_tuples`, always within `[0, 1]`.
    pub ratio: f64,
}

impl OverlapReport {
    /// The ratio scaled to a percentage.
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Renders the percentage followed by `%`, always with a fractional part
/// (`100.0%`, `66.66666666666666%`). Non-zero percentages below `0.001`
/// switch to scientific notation with an upper-case exponent (`5.0E-4%`).
impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.percentage())?;
        f.write_str("%")
    }
}

/// Shortest round-trip rendering of `value`: plain decimal within
/// `[1e-3, 1e7)`, `<mantissa>E<exponent>` outside it.
fn write_decimal(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let magnitude = value.abs();
    if magnitude == 0.0 || !value.is_finite() || (1e-3..1e7).contains(&magnitude) {
        return write!(f, "{value:?}");
    }
    let exp = format!("{value:e}");
    let (mantissa, exponent) = exp.split_once('e').unwrap_or((exp.as_str(), "0"));
    if mantissa.contains('.') {
        write!(f, "{mantissa}E{exponent}")
    } else {
        write!(f, "{mantissa}.0E{exponent}")
    }
}

/// Collapses a comparison result into the sentinel convention.
pub fn legacy_ratio(result: &Result<OverlapReport, OverlapError>) -> f64 {
    match result {
        Ok(report) => report.ratio,
        Err(_) => FAILURE_SENTINEL,
    }
}
