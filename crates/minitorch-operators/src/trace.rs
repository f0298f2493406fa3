//! Tracing hook for failing operators.
//!
//! A no-op unless the `tracing` feature is enabled.

use minitorch_core::error::{OpError, Result};

#[cfg(feature = "tracing")]
fn emit(err: &OpError) {
    tracing::trace!(op = ?err.op(), error = %err, "operator failed");
}

#[cfg(not(feature = "tracing"))]
fn emit(_err: &OpError) { /* no-op */
}

/// Report `err` and return it as the operator's result.
pub(crate) fn fail<T>(err: OpError) -> Result<T> {
    emit(&err);
    Err(err)
}
