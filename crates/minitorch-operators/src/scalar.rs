//! Elementary scalar operators.
//!
//! Predicates `lt` and `eq` encode truth as `1.0` / `0.0` so they can flow
//! through arithmetic; `is_close` returns a plain `bool`.
//! Comparisons are exact (no tolerance) except in `is_close`.

use minitorch_core::config::ScalarConfig;
use minitorch_core::error::{OpError, Result};

use crate::trace::fail;

const DEFAULT_OPS: ScalarOps = ScalarOps {
    cfg: ScalarConfig::DEFAULT,
};

/// `x * y`
#[inline]
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// `x`
#[inline]
pub fn id(x: f64) -> f64 {
    x
}

/// `x + y`
#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// `-x`
#[inline]
pub fn neg(x: f64) -> f64 {
    -x
}

/// `1.0` if `x < y`, else `0.0`.
#[inline]
pub fn lt(x: f64, y: f64) -> f64 {
    if x < y {
        1.0
    } else {
        0.0
    }
}

/// `1.0` if `x == y`, else `0.0`.
#[inline]
pub fn eq(x: f64, y: f64) -> f64 {
    if x == y {
        1.0
    } else {
        0.0
    }
}

/// `x` if `x > y`, else `y`. Ties return `y`.
#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

/// `|x - y| < 1e-2`
pub fn is_close(x: f64, y: f64) -> bool {
    DEFAULT_OPS.is_close(x, y)
}

/// Logistic function.
///
/// For negative inputs this uses `e^x / (1 + e^x)`, so `e^-x` is never
/// evaluated where it would overflow.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let exp_x = x.exp();
        exp_x / (1.0 + exp_x)
    }
}

/// `max(0, x)`
#[inline]
pub fn relu(x: f64) -> f64 {
    max(0.0, x)
}

/// `ln(x + 1e-6)`
pub fn log(x: f64) -> Result<f64> {
    DEFAULT_OPS.log(x)
}

/// `e^x`; saturates to `+inf` on overflow.
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// `d / (x + 1e-6)`: gradient of `log` scaled by the upstream gradient `d`.
pub fn log_back(x: f64, d: f64) -> Result<f64> {
    DEFAULT_OPS.log_back(x, d)
}

/// `1 / x`
pub fn inv(x: f64) -> Result<f64> {
    if x == 0.0 {
        return fail(OpError::DivisionByZero { op: "inv" });
    }
    Ok(1.0 / x)
}

/// `-d / x^2`: gradient of `inv` scaled by `d`.
///
/// Fails whenever `x^2` is zero, which includes subnormal `x` whose square
/// underflows.
pub fn inv_back(x: f64, d: f64) -> Result<f64> {
    let sq = x * x;
    if sq == 0.0 {
        return fail(OpError::DivisionByZero { op: "inv_back" });
    }
    Ok(-d / sq)
}

/// `d` if `x > 0`, else `0.0`. The gradient at `x = 0` is `0`.
#[inline]
pub fn relu_back(x: f64, d: f64) -> f64 {
    if x > 0.0 {
        d
    } else {
        0.0
    }
}

/// Operators whose behaviour depends on a tolerance.
///
/// The free functions `log`, `log_back` and `is_close` use
/// [`ScalarConfig::DEFAULT`]; build a `ScalarOps` to run them with another
/// epsilon or closeness tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarOps {
    cfg: ScalarConfig,
}

impl ScalarOps {
    /// Validates `cfg` before accepting it.
    pub fn new(cfg: ScalarConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &ScalarConfig {
        &self.cfg
    }

    pub fn is_close(&self, x: f64, y: f64) -> bool {
        (x - y).abs() < self.cfg.close_tolerance
    }

    pub fn log(&self, x: f64) -> Result<f64> {
        let shifted = self.shifted("log", x)?;
        Ok(shifted.ln())
    }

    pub fn log_back(&self, x: f64, d: f64) -> Result<f64> {
        let shifted = self.shifted("log_back", x)?;
        Ok(d / shifted)
    }

    fn shifted(&self, op: &'static str, x: f64) -> Result<f64> {
        let shifted = x + self.cfg.log_eps;
        if shifted <= 0.0 {
            return fail(OpError::Domain { op, input: x });
        }
        Ok(shifted)
    }
}

impl Default for ScalarOps {
    fn default() -> Self {
        DEFAULT_OPS
    }
}
