//! Min-max normalization.
//!
//! Maps a sequence of values linearly onto [0, 1]: the minimum becomes `0.0`,
//! the maximum becomes `1.0`. A constant sequence maps to all zeros.

use ordered_float::OrderedFloat;
use toolkit_core::{Error, Result};

/// Observed range of a non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Bounds {
    /// Compute the bounds of `values`, or `None` if it is empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        let min = values.iter().copied().map(OrderedFloat).min()?;
        let max = values.iter().copied().map(OrderedFloat).max()?;
        Some(Self {
            min: min.0,
            max: max.0,
        })
    }

    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every value in the sequence was equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Rescale a single value against these bounds.
    ///
    /// Finite bounds whose width overflows `f64` are scaled on halved terms,
    /// which keeps the result in [0, 1].
    #[inline]
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let span = self.span();
        if span.is_finite() {
            (value - self.min) / span
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }
}

/// Scale `values` into the range 0.0 to 1.0.
///
/// Empty input returns an empty vector. If all values are identical the
/// result is all `0.0`, same length as the input. Never panics.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some(bounds) = Bounds::of(values) else {
        return Vec::new();
    };

    if bounds.is_degenerate() {
        tracing::debug!(len = values.len(), value = bounds.min, "constant input, zero-filling");
        return vec![0.0; values.len()];
    }

    values.iter().map(|&v| bounds.scale(v)).collect()
}

/// Like [`normalize`], but rejects NaN and infinite values.
pub fn normalize_checked(values: &[f64]) -> Result<Vec<f64>> {
    if let Some((idx, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(Error::data(format!("value at index {} is not finite: {}", idx, v)));
    }
    Ok(normalize(values))
}
