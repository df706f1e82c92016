use crate::config::FractionConfig;
use crate::error::Result;
use crate::impl_rational_pymethods;
use crate::rings::fraction::Fraction;
use crate::rings::rational::{Comparand, Rational};
use crate::rings::sign::Sign;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Stands in for `value()` while the M part is positive
pub const UNBOUNDED_ABOVE: f64 = i64::MAX as f64;
/// Stands in for `value()` while the M part is negative
pub const UNBOUNDED_BELOW: f64 = i64::MIN as f64;

const M_SIGN: &str = "M";

/// A real fraction paired with an independent "M" fraction.
///
/// Both parts are reduced on their own but share one sign: negating the value
/// negates both, and a sign change produced while dividing one part is applied
/// to the other one too.
#[pyo3::pyclass]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MixedFraction {
    real: Fraction,
    m: Fraction,
}

impl MixedFraction {
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
        m_numerator: impl Into<BigInt>,
        m_denominator: impl Into<BigInt>,
    ) -> Result<Self> {
        let m = Fraction::new(m_numerator, m_denominator)?;
        let real = Fraction::new(numerator, denominator)?;
        Ok(MixedFraction { real, m })
    }

    /// Whole number with an empty M part
    pub fn integer(numerator: impl Into<BigInt>) -> Self {
        MixedFraction {
            real: Fraction::integer(numerator),
            m: Fraction::zero(),
        }
    }

    pub fn from_parts(real: Fraction, m: Fraction) -> Self {
        MixedFraction { real, m }
    }

    pub fn from_fraction(other: &MixedFraction) -> Self {
        other.clone()
    }

    pub fn real_part(&self) -> &Fraction {
        &self.real
    }

    pub fn m_part(&self) -> &Fraction {
        &self.m
    }

    pub fn numerator(&self) -> &BigInt {
        self.real.numerator()
    }

    pub fn denominator(&self) -> &BigInt {
        self.real.denominator()
    }

    pub fn m_numerator(&self) -> &BigInt {
        self.m.numerator()
    }

    pub fn m_denominator(&self) -> &BigInt {
        self.m.denominator()
    }

    pub fn set_numerator(&mut self, numerator: impl Into<BigInt>) {
        self.real.set_numerator(numerator);
    }

    pub fn set_denominator(&mut self, denominator: impl Into<BigInt>) -> Result<()> {
        self.real.set_denominator(denominator)
    }

    pub fn set_m_numerator(&mut self, m_numerator: impl Into<BigInt>) {
        self.m.set_numerator(m_numerator);
    }

    pub fn set_m_denominator(&mut self, m_denominator: impl Into<BigInt>) -> Result<()> {
        self.m.set_denominator(m_denominator)
    }

    pub fn is_fraction(&self) -> bool {
        self.real.is_fraction()
    }

    pub fn is_negative(&self) -> bool {
        self.real.is_negative()
    }

    pub fn is_non_negative(&self) -> bool {
        self.real.is_non_negative()
    }

    fn saturated(&self) -> Option<f64> {
        if self.m.is_zero() {
            None
        } else if self.m.is_negative() {
            Some(UNBOUNDED_BELOW)
        } else {
            Some(UNBOUNDED_ABOVE)
        }
    }
}

impl Rational for MixedFraction {
    fn add(&self, rhs: &MixedFraction) -> MixedFraction {
        MixedFraction {
            real: self.real.add(&rhs.real),
            m: self.m.add(&rhs.m),
        }
    }

    fn subtract(&self, rhs: &MixedFraction) -> MixedFraction {
        MixedFraction {
            real: self.real.subtract(&rhs.real),
            m: self.m.subtract(&rhs.m),
        }
    }

    fn multiply(&self, rhs: &MixedFraction) -> MixedFraction {
        MixedFraction {
            real: self.real.multiply(&rhs.real),
            m: self.m.multiply(&rhs.m),
        }
    }

    /// Both pairs are divided on their own, so an empty M part in `rhs` fails
    /// with `ZeroDenominator` just like a zero real part does.
    fn divide(&self, rhs: &MixedFraction) -> Result<MixedFraction> {
        let (numerator, denominator, real_flip) = self.real.divide_magnitudes(&rhs.real)?;
        let (m_numerator, m_denominator, m_flip) = self.m.divide_magnitudes(&rhs.m)?;

        let mut quotient = MixedFraction {
            real: Fraction::reduced(numerator, denominator),
            m: Fraction::reduced(m_numerator, m_denominator),
        };
        // each flip negates both parts, two of them cancel out
        if real_flip != m_flip {
            tracing::trace!(real_flip, m_flip, "mixed quotient changes sign");
            quotient.change_sign();
        }
        Ok(quotient)
    }

    fn change_sign(&mut self) {
        self.real.change_sign();
        self.m.change_sign();
    }

    fn sign(&self) -> Sign {
        self.real.sign()
    }

    fn value(&self) -> f64 {
        self.saturated().unwrap_or_else(|| self.real.value())
    }

    fn real_value(&self, precision: i32) -> f64 {
        self.saturated()
            .unwrap_or_else(|| self.real.real_value(precision))
    }

    fn equals_with(&self, other: &Comparand, config: &FractionConfig) -> bool {
        if self.m.is_zero() {
            return self.real.equals_with(other, config);
        }

        let bound = if self.m.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        };
        match other {
            Comparand::Integer(integer) => *integer == BigInt::from(bound),
            Comparand::Float(float) => config.approx_eq(bound as f64, *float),
            // an unbounded value never equals a finite fraction, the real pair is ignored
            Comparand::Fraction(_) => false,
        }
    }
}

impl_rational_pymethods!(MixedFraction, "MixedFraction", {
    #[new]
    #[pyo3(signature = (
        numerator,
        denominator=BigInt::one(),
        m_numerator=BigInt::zero(),
        m_denominator=BigInt::one()
    ))]
    pub fn py_new(
        numerator: BigInt,
        denominator: BigInt,
        m_numerator: BigInt,
        m_denominator: BigInt,
    ) -> pyo3::PyResult<Self> {
        Ok(MixedFraction::new(
            numerator,
            denominator,
            m_numerator,
            m_denominator,
        )?)
    }

    #[pyo3(name = "m_numerator")]
    pub fn py_m_numerator(&self) -> BigInt {
        self.m_numerator().clone()
    }

    #[pyo3(name = "m_denominator")]
    pub fn py_m_denominator(&self) -> BigInt {
        self.m_denominator().clone()
    }

    #[pyo3(name = "set_m_numerator")]
    pub fn py_set_m_numerator(&mut self, m_numerator: BigInt) {
        self.set_m_numerator(m_numerator);
    }

    #[pyo3(name = "set_m_denominator")]
    pub fn py_set_m_denominator(&mut self, m_denominator: BigInt) -> pyo3::PyResult<()> {
        Ok(self.set_m_denominator(m_denominator)?)
    }

    #[pyo3(name = "real_part")]
    pub fn py_real_part(&self) -> Fraction {
        self.real.clone()
    }

    #[pyo3(name = "m_part")]
    pub fn py_m_part(&self) -> Fraction {
        self.m.clone()
    }
});

impl ops::Add for &MixedFraction {
    type Output = MixedFraction;

    fn add(self, rhs: &MixedFraction) -> MixedFraction {
        Rational::add(self, rhs)
    }
}

impl ops::Sub for &MixedFraction {
    type Output = MixedFraction;

    fn sub(self, rhs: &MixedFraction) -> MixedFraction {
        Rational::subtract(self, rhs)
    }
}

impl ops::Mul for &MixedFraction {
    type Output = MixedFraction;

    fn mul(self, rhs: &MixedFraction) -> MixedFraction {
        Rational::multiply(self, rhs)
    }
}

impl ops::Neg for &MixedFraction {
    type Output = MixedFraction;

    fn neg(self) -> MixedFraction {
        let mut negated = self.clone();
        negated.change_sign();
        negated
    }
}

impl Display for MixedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.real)?;
        if self.m.is_zero() {
            return Ok(());
        }
        if self.m.is_non_negative() {
            f.write_str(Sign::NonNegative.as_str())?;
        }
        write!(f, "{}{}", self.m, M_SIGN)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
