use crate::utils::round_to_precision;
use pyo3::prelude::*;

pub const DEFAULT_PRECISION: i32 = 2;
pub const FLOAT_TOLERANCE: f64 = 0.0000001;

/// Rounding and float comparison settings shared by both fraction types.
#[pyclass(get_all, set_all)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionConfig {
    /// Decimal digits kept by `real_value`, the sign is ignored
    pub precision: i32,
    /// Absolute tolerance used when a fraction is compared with a float
    pub tolerance: f64,
}

impl Default for FractionConfig {
    fn default() -> Self {
        FractionConfig {
            precision: DEFAULT_PRECISION,
            tolerance: FLOAT_TOLERANCE,
        }
    }
}

impl FractionConfig {
    pub fn round(&self, value: f64) -> f64 {
        round_to_precision(value, self.precision)
    }

    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance
    }
}

#[pymethods]
impl FractionConfig {
    #[new]
    #[pyo3(signature = (precision=DEFAULT_PRECISION, tolerance=FLOAT_TOLERANCE))]
    pub fn py_new(precision: i32, tolerance: f64) -> Self {
        FractionConfig {
            precision,
            tolerance,
        }
    }

    pub fn __repr__(&self) -> String {
        format!(
            "FractionConfig(precision={}, tolerance={})",
            self.precision, self.tolerance
        )
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
