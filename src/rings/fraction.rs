use crate::config::FractionConfig;
use crate::error::{FractionError, Result};
use crate::impl_rational_pymethods;
use crate::rings::rational::{Comparand, Rational};
use crate::rings::sign::Sign;
use crate::utils::{greatest_common_divisor, ratio_to_f64, round_to_precision};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Exact rational number, always stored in lowest terms.
///
/// The denominator is strictly positive, the sign lives in the numerator and
/// zero is `0/1`.
#[pyo3::pyclass]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

pub(crate) fn validate_denominator(denominator: BigInt) -> Result<BigInt> {
    if denominator.is_zero() {
        tracing::debug!(%denominator, "rejected zero denominator");
        return Err(FractionError::ZeroDenominator(denominator));
    }
    if denominator.is_negative() {
        tracing::debug!(%denominator, "rejected negative denominator");
        return Err(FractionError::NegativeDenominator(denominator));
    }
    Ok(denominator)
}

impl Fraction {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = validate_denominator(denominator.into())?;
        Ok(Fraction::reduced(numerator.into(), denominator))
    }

    pub fn integer(numerator: impl Into<BigInt>) -> Self {
        Fraction {
            numerator: numerator.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn from_fraction(other: &Fraction) -> Self {
        other.clone()
    }

    // `denominator` has to be positive already
    pub(crate) fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(denominator.is_positive());
        let mut fraction = Fraction {
            numerator,
            denominator,
        };
        fraction.reduce();
        fraction
    }

    fn reduce(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = BigInt::one();
            return;
        }

        if self.numerator.magnitude().is_one() || self.denominator.is_one() {
            return;
        }

        let divisor = greatest_common_divisor(&self.numerator, &self.denominator);
        if divisor.is_one() {
            return;
        }
        tracing::trace!(%divisor, "reducing fraction");
        self.numerator /= &divisor;
        self.denominator /= &divisor;
    }

    /// (a/b) / (c/d) as `(|a*d|, |b*c|, flip)` where `flip` is set when exactly
    /// one of the two products is negative.
    pub(crate) fn divide_magnitudes(&self, rhs: &Fraction) -> Result<(BigInt, BigInt, bool)> {
        let numerator = &self.numerator * &rhs.denominator;
        let denominator = &self.denominator * &rhs.numerator;
        let flip = numerator.is_negative() != denominator.is_negative();
        let denominator = validate_denominator(denominator.abs())?;
        Ok((numerator.abs(), denominator, flip))
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn set_numerator(&mut self, numerator: impl Into<BigInt>) {
        self.numerator = numerator.into();
        self.reduce();
    }

    pub fn set_denominator(&mut self, denominator: impl Into<BigInt>) -> Result<()> {
        self.denominator = validate_denominator(denominator.into())?;
        self.reduce();
        Ok(())
    }

    /// True unless the value is a whole number
    pub fn is_fraction(&self) -> bool {
        !self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_non_negative(&self) -> bool {
        !self.numerator.is_negative()
    }
}

impl Rational for Fraction {
    fn add(&self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &rhs.denominator + &self.denominator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn subtract(&self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &rhs.denominator - &self.denominator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn multiply(&self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }

    fn divide(&self, rhs: &Fraction) -> Result<Fraction> {
        let (numerator, denominator, flip) = self.divide_magnitudes(rhs)?;
        let mut quotient = Fraction::reduced(numerator, denominator);
        if flip {
            quotient.change_sign();
        }
        Ok(quotient)
    }

    fn change_sign(&mut self) {
        if self.numerator.is_zero() {
            return;
        }
        self.numerator = -std::mem::take(&mut self.numerator);
    }

    fn sign(&self) -> Sign {
        if self.is_non_negative() {
            Sign::NonNegative
        } else {
            Sign::Negative
        }
    }

    fn value(&self) -> f64 {
        ratio_to_f64(&self.numerator, &self.denominator)
    }

    fn real_value(&self, precision: i32) -> f64 {
        round_to_precision(self.value(), precision)
    }

    fn equals_with(&self, other: &Comparand, config: &FractionConfig) -> bool {
        match other {
            Comparand::Integer(integer) => self.denominator.is_one() && self.numerator == *integer,
            Comparand::Float(float) => config.approx_eq(self.value(), *float),
            Comparand::Fraction(fraction) => {
                self.numerator == fraction.numerator && self.denominator == fraction.denominator
            }
        }
    }
}

impl_rational_pymethods!(Fraction, "Fraction", {
    #[new]
    #[pyo3(signature = (numerator, denominator=BigInt::one()))]
    pub fn py_new(numerator: BigInt, denominator: BigInt) -> pyo3::PyResult<Self> {
        Ok(Fraction::new(numerator, denominator)?)
    }
});

impl ops::Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Rational::add(self, rhs)
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl ops::Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        Rational::subtract(self, rhs)
    }
}

impl ops::Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Rational::multiply(self, rhs)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl ops::Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        let mut negated = self.clone();
        negated.change_sign();
        negated
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::integer(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            return write!(f, "{}", self.numerator);
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = &self.numerator * &rhs.denominator;
        let b = &rhs.numerator * &self.denominator;
        a.cmp(&b)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
