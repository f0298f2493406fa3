//! List operations built from the combinators.

use minitorch_core::error::Result;

use crate::combinators::{map, reduce, try_map, zip_with};
use crate::scalar::{add, inv, log, mul, neg};

/// Negate every element.
pub fn neg_list(ls: &[f64]) -> Vec<f64> {
    map(neg, ls.iter().copied())
}

/// Pairwise sum, truncated to the shorter input.
pub fn add_lists(ls1: &[f64], ls2: &[f64]) -> Vec<f64> {
    zip_with(add, ls1.iter().copied(), ls2.iter().copied())
}

/// Sum of all elements; `0.0` for an empty slice.
pub fn sum(ls: &[f64]) -> f64 {
    reduce(add, 0.0, ls.iter().copied())
}

/// Product of all elements; `1.0` for an empty slice.
pub fn prod(ls: &[f64]) -> f64 {
    reduce(mul, 1.0, ls.iter().copied())
}

/// Elementwise `inv`; fails on the first zero.
pub fn inv_list(ls: &[f64]) -> Result<Vec<f64>> {
    try_map(inv, ls.iter().copied())
}

/// Elementwise `log`; fails on the first out-of-domain element.
pub fn log_list(ls: &[f64]) -> Result<Vec<f64>> {
    try_map(log, ls.iter().copied())
}
