//! Numeric feature transforms for the data toolkit.
//!
//! This crate handles:
//! - Min-max normalization into the [0, 1] range
//! - Input validation for values coming from outside the process

pub mod normalize;

pub use normalize::{normalize, normalize_checked, Bounds};
