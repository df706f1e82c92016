use crate::config::FractionConfig;
use crate::error::{FractionError, Result, INVALID_PARAMETER, SAME_CLASS_ONLY};
use crate::rings::fraction::Fraction;
use crate::rings::sign::Sign;
use num_bigint::BigInt;
use pyo3::prelude::*;
use pyo3::types::{PyFloat, PyInt};
use pyo3::PyClass;
use std::fmt;

/// Right hand side accepted by `Rational::equals`.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparand {
    Integer(BigInt),
    Float(f64),
    Fraction(Fraction),
}

impl From<i64> for Comparand {
    fn from(value: i64) -> Self {
        Comparand::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for Comparand {
    fn from(value: BigInt) -> Self {
        Comparand::Integer(value)
    }
}

impl From<f64> for Comparand {
    fn from(value: f64) -> Self {
        Comparand::Float(value)
    }
}

impl From<Fraction> for Comparand {
    fn from(value: Fraction) -> Self {
        Comparand::Fraction(value)
    }
}

impl From<&Fraction> for Comparand {
    fn from(value: &Fraction) -> Self {
        Comparand::Fraction(value.clone())
    }
}

/// Exact arithmetic shared by `Fraction` and `MixedFraction`.
///
/// Operands are `&Self`, so the two kinds never mix. Every operation returns a
/// new value in lowest terms and leaves both inputs untouched.
pub trait Rational: Sized + Clone + fmt::Display {
    fn add(&self, rhs: &Self) -> Self;
    fn subtract(&self, rhs: &Self) -> Self;
    fn multiply(&self, rhs: &Self) -> Self;

    /// Fails with `ZeroDenominator` when the divisor produces a zero denominator.
    fn divide(&self, rhs: &Self) -> Result<Self>;

    /// Negates in place, zero stays zero.
    fn change_sign(&mut self);

    fn sign(&self) -> Sign;

    fn value(&self) -> f64;

    fn real_value(&self, precision: i32) -> f64;

    fn equals_with(&self, other: &Comparand, config: &FractionConfig) -> bool;

    fn equals(&self, other: &Comparand) -> bool {
        self.equals_with(other, &FractionConfig::default())
    }
}

/// Borrows `other` as a `T`, the Python side can hand over anything.
pub fn same_class<'py, T: PyClass>(other: &Bound<'py, PyAny>) -> PyResult<PyRef<'py, T>> {
    let other = other
        .downcast::<T>()
        .map_err(|_| FractionError::InvalidArgument(SAME_CLASS_ONLY.to_string()))?;
    Ok(other.try_borrow()?)
}

pub fn comparand(other: &Bound<'_, PyAny>) -> PyResult<Comparand> {
    if let Ok(fraction) = other.downcast::<Fraction>() {
        return Ok(Comparand::Fraction(fraction.try_borrow()?.clone()));
    }
    if other.is_instance_of::<PyInt>() {
        return Ok(Comparand::Integer(other.extract()?));
    }
    if other.is_instance_of::<PyFloat>() {
        return Ok(Comparand::Float(other.extract()?));
    }
    Err(FractionError::InvalidArgument(INVALID_PARAMETER.to_string()).into())
}

// Macro to create the python interface, `$extra` holds the constructor and
// anything specific to the type
#[macro_export]
macro_rules! impl_rational_pymethods {
    ($type:ty, $name:literal, { $($extra:tt)* }) => {
        #[::pyo3::pymethods]
        impl $type {
            $($extra)*

            #[staticmethod]
            #[pyo3(name = "from_fraction")]
            pub fn py_from_fraction(other: ::pyo3::PyRef<'_, Self>) -> Self {
                Self::from_fraction(&other)
            }

            #[pyo3(name = "numerator")]
            pub fn py_numerator(&self) -> ::num_bigint::BigInt {
                self.numerator().clone()
            }

            #[pyo3(name = "denominator")]
            pub fn py_denominator(&self) -> ::num_bigint::BigInt {
                self.denominator().clone()
            }

            #[pyo3(name = "sign")]
            pub fn py_sign(&self) -> $crate::rings::sign::Sign {
                $crate::rings::rational::Rational::sign(self)
            }

            #[pyo3(name = "is_fraction")]
            pub fn py_is_fraction(&self) -> bool {
                self.is_fraction()
            }

            #[pyo3(name = "is_negative")]
            pub fn py_is_negative(&self) -> bool {
                self.is_negative()
            }

            #[pyo3(name = "is_non_negative")]
            pub fn py_is_non_negative(&self) -> bool {
                self.is_non_negative()
            }

            #[pyo3(name = "value")]
            pub fn py_value(&self) -> f64 {
                $crate::rings::rational::Rational::value(self)
            }

            #[pyo3(name = "real_value", signature = (precision=None))]
            pub fn py_real_value(&self, precision: Option<i32>) -> f64 {
                let precision = precision.unwrap_or($crate::config::DEFAULT_PRECISION);
                $crate::rings::rational::Rational::real_value(self, precision)
            }

            #[pyo3(name = "set_numerator")]
            pub fn py_set_numerator(&mut self, numerator: ::num_bigint::BigInt) {
                self.set_numerator(numerator);
            }

            #[pyo3(name = "set_denominator")]
            pub fn py_set_denominator(
                &mut self,
                denominator: ::num_bigint::BigInt,
            ) -> ::pyo3::PyResult<()> {
                Ok(self.set_denominator(denominator)?)
            }

            #[pyo3(name = "change_sign")]
            pub fn py_change_sign(&mut self) {
                $crate::rings::rational::Rational::change_sign(self);
            }

            #[pyo3(name = "equals", signature = (other, config=None))]
            pub fn py_equals(
                &self,
                other: &::pyo3::Bound<'_, ::pyo3::PyAny>,
                config: Option<$crate::config::FractionConfig>,
            ) -> ::pyo3::PyResult<bool> {
                if let Ok(same) = ::pyo3::types::PyAnyMethods::downcast::<Self>(other) {
                    return Ok(*self == *same.try_borrow()?);
                }
                let other = $crate::rings::rational::comparand(other)?;
                Ok($crate::rings::rational::Rational::equals_with(
                    self,
                    &other,
                    &config.unwrap_or_default(),
                ))
            }

            #[pyo3(name = "add")]
            pub fn py_add(&self, other: &::pyo3::Bound<'_, ::pyo3::PyAny>) -> ::pyo3::PyResult<Self> {
                let other = $crate::rings::rational::same_class::<Self>(other)?;
                Ok($crate::rings::rational::Rational::add(self, &other))
            }

            #[pyo3(name = "subtract")]
            pub fn py_subtract(&self, other: &::pyo3::Bound<'_, ::pyo3::PyAny>) -> ::pyo3::PyResult<Self> {
                let other = $crate::rings::rational::same_class::<Self>(other)?;
                Ok($crate::rings::rational::Rational::subtract(self, &other))
            }

            #[pyo3(name = "multiply")]
            pub fn py_multiply(&self, other: &::pyo3::Bound<'_, ::pyo3::PyAny>) -> ::pyo3::PyResult<Self> {
                let other = $crate::rings::rational::same_class::<Self>(other)?;
                Ok($crate::rings::rational::Rational::multiply(self, &other))
            }

            #[pyo3(name = "divide")]
            pub fn py_divide(&self, other: &::pyo3::Bound<'_, ::pyo3::PyAny>) -> ::pyo3::PyResult<Self> {
                let other = $crate::rings::rational::same_class::<Self>(other)?;
                Ok($crate::rings::rational::Rational::divide(self, &other)?)
            }

            pub fn __add__(&self, rhs: ::pyo3::PyRef<'_, Self>) -> Self {
                $crate::rings::rational::Rational::add(self, &rhs)
            }

            pub fn __sub__(&self, rhs: ::pyo3::PyRef<'_, Self>) -> Self {
                $crate::rings::rational::Rational::subtract(self, &rhs)
            }

            pub fn __mul__(&self, rhs: ::pyo3::PyRef<'_, Self>) -> Self {
                $crate::rings::rational::Rational::multiply(self, &rhs)
            }

            pub fn __truediv__(&self, rhs: ::pyo3::PyRef<'_, Self>) -> ::pyo3::PyResult<Self> {
                Ok($crate::rings::rational::Rational::divide(self, &rhs)?)
            }

            pub fn __neg__(&self) -> Self {
                let mut negated = self.clone();
                $crate::rings::rational::Rational::change_sign(&mut negated);
                negated
            }

            pub fn __str__(&self) -> String {
                self.to_string()
            }

            pub fn __repr__(&self) -> String {
                format!("{}('{}')", $name, self)
            }
        }
    };
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidArgumentError, ZeroDenominatorError};
    use crate::rings::mixed_fraction::MixedFraction;

    #[test]
    fn test_comparand_from() {
        assert_eq!(Comparand::from(3i64), Comparand::Integer(BigInt::from(3)));
        assert_eq!(Comparand::from(0.5), Comparand::Float(0.5));
        let half = Fraction::new(1, 2).unwrap();
        assert_eq!(Comparand::from(&half), Comparand::Fraction(half));
    }

    #[test]
    fn test_python_rejects_other_class() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let half = Bound::new(py, Fraction::new(1, 2).unwrap()).unwrap();
            let mixed = Bound::new(py, MixedFraction::integer(2)).unwrap().into_any();

            for method in ["add", "subtract", "multiply", "divide"] {
                let error = half.call_method1(method, (mixed.clone(),)).unwrap_err();
                assert!(error.is_instance_of::<InvalidArgumentError>(py));
                assert_eq!(error.value(py).to_string(), "Only same class allowed");
            }

            let third = Bound::new(py, Fraction::new(1, 3).unwrap()).unwrap();
            let sum = half.call_method1("add", (third,)).unwrap();
            assert_eq!(sum.str().unwrap().to_string(), "5/6");
        });
    }

    #[test]
    fn test_python_equals() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let half = Bound::new(py, Fraction::new(1, 2).unwrap()).unwrap();

            let matches: bool = half.call_method1("equals", (0.5f64,)).unwrap().extract().unwrap();
            assert!(matches);
            let matches: bool = half.call_method1("equals", (1i64,)).unwrap().extract().unwrap();
            assert!(!matches);

            let third = Bound::new(py, Fraction::new(1, 3).unwrap()).unwrap();
            let matches: bool = third.call_method1("equals", (0.33f64,)).unwrap().extract().unwrap();
            assert!(!matches);

            let same = Bound::new(py, Fraction::new(2, 4).unwrap()).unwrap();
            let matches: bool = half.call_method1("equals", (same,)).unwrap().extract().unwrap();
            assert!(matches);
            let mixed = Bound::new(py, MixedFraction::new(1, 2, 0, 1).unwrap()).unwrap();
            let matches: bool = mixed.call_method1("equals", (half.clone(),)).unwrap().extract().unwrap();
            assert!(matches);

            let error = half.call_method1("equals", ("1/2",)).unwrap_err();
            assert!(error.is_instance_of::<InvalidArgumentError>(py));
        });
    }

    #[test]
    fn test_python_division_by_zero() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let half = Bound::new(py, Fraction::new(1, 2).unwrap()).unwrap();
            let zero = Bound::new(py, Fraction::integer(0)).unwrap();
            let error = half.call_method1("divide", (zero,)).unwrap_err();
            assert!(error.is_instance_of::<ZeroDenominatorError>(py));
        });
    }
}
