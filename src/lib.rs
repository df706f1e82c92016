use pyo3::prelude::*;

pub mod config;
pub mod error;
pub mod rings {
    pub mod fraction;
    pub mod mixed_fraction;
    pub mod rational;
    pub mod sign;
}

pub mod utils;

pub use config::FractionConfig;
pub use error::{FractionError, Result};
pub use rings::fraction::Fraction;
pub use rings::mixed_fraction::MixedFraction;
pub use rings::rational::{Comparand, Rational};
pub use rings::sign::Sign;

/// Exact fractions for Python, backed by arbitrary precision integers.
#[pymodule]
fn rust_fraction(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<rings::fraction::Fraction>()?;
    m.add_class::<rings::mixed_fraction::MixedFraction>()?;
    m.add_class::<rings::sign::Sign>()?;
    m.add_class::<config::FractionConfig>()?;
    m.add(
        "ZeroDenominatorError",
        py.get_type::<error::ZeroDenominatorError>(),
    )?;
    m.add(
        "NegativeDenominatorError",
        py.get_type::<error::NegativeDenominatorError>(),
    )?;
    m.add(
        "InvalidArgumentError",
        py.get_type::<error::InvalidArgumentError>(),
    )?;
    Ok(())
}
