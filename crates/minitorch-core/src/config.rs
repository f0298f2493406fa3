//! Tolerance configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{OpError, Result};

/// Shift applied to `log` and `log_back` inputs so that `x = 0` stays in the domain.
pub const EPS: f64 = 1e-6;

/// Absolute tolerance used by `is_close` (strict `<`).
pub const CLOSE_TOLERANCE: f64 = 1e-2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalarConfig {
    /// Epsilon added to the input of `log` / `log_back`.
    pub log_eps: f64,

    /// Absolute tolerance for `is_close`.
    pub close_tolerance: f64,
}

impl ScalarConfig {
    pub const DEFAULT: ScalarConfig = ScalarConfig {
        log_eps: EPS,
        close_tolerance: CLOSE_TOLERANCE,
    };

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `MINITORCH_LOG_EPS`: epsilon shift for `log`
    /// - `MINITORCH_CLOSE_TOLERANCE`: absolute tolerance for `is_close`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("MINITORCH_LOG_EPS") {
            if let Ok(v) = s.parse::<f64>() {
                cfg.log_eps = v;
            }
        }

        if let Ok(s) = std::env::var("MINITORCH_CLOSE_TOLERANCE") {
            if let Ok(v) = s.parse::<f64>() {
                cfg.close_tolerance = v;
            }
        }

        cfg
    }

    /// Both values must be finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        check_positive("log_eps", self.log_eps)?;
        check_positive("close_tolerance", self.close_tolerance)
    }
}

impl Default for ScalarConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_positive(name: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(OpError::Config(format!(
            "{} must be finite and > 0, got {}",
            name, v
        )))
    }
}
