//! Convenient re-exports for downstream crates.

pub use crate::config::{ScalarConfig, CLOSE_TOLERANCE, EPS};
pub use crate::error::{OpError, Result};
pub use crate::Scalar;
