#![forbid(unsafe_code)]
//! minitorch-core: shared error taxonomy and tolerance configuration.
//!
//! No operators live here; `minitorch-operators` builds on these types.

pub mod config;
pub mod error;
pub mod prelude;

/// A single IEEE double. Every operator takes and returns scalars by value.
pub type Scalar = f64;

pub use config::ScalarConfig;
pub use error::{OpError, Result};
