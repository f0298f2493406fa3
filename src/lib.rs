#![forbid(unsafe_code)]
//! minitorch: scalar operators and list combinators for an autodiff stack.
//!
//! Re-exports `minitorch-core` (errors, tolerances) and `minitorch-operators`.

pub use minitorch_core;
pub use minitorch_operators;

pub use minitorch_core::prelude::*;
pub use minitorch_operators::*;
