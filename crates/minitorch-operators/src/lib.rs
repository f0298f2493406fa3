#![forbid(unsafe_code)]
//! minitorch-operators: elementary scalar operators and list combinators.
//!
//! Design intent:
//! - Every function is pure and synchronous; nothing here holds state.
//! - Fallible operators (`log`, `log_back`, `inv`, `inv_back`) return
//!   `minitorch_core::Result` and never panic on bad input.
//! - Combinators are generic over closures; the list helpers fix them to `f64`.

pub mod combinators;
pub mod list;
pub mod scalar;

mod trace;

pub use combinators::{map, map_iter, mapper, reduce, reducer, try_map, zip_with, zipper};
pub use list::{add_lists, inv_list, log_list, neg_list, prod, sum};
pub use scalar::{
    add, eq, exp, id, inv, inv_back, is_close, log, log_back, lt, max, mul, neg, relu, relu_back,
    sigmoid, ScalarOps,
};
