use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

// f64 keeps ~1023 bits of exponent, stay well below it when shrinking
const MAX_FLOAT_BITS: u64 = 1000;

/// Non-negative gcd, safe for operands of any size.
pub fn greatest_common_divisor(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// Closest f64 to `numerator / denominator`, even when both sides overflow f64.
pub fn ratio_to_f64(numerator: &BigInt, denominator: &BigInt) -> f64 {
    if let (Some(n), Some(d)) = (numerator.to_f64(), denominator.to_f64()) {
        if n.is_finite() && d.is_finite() {
            return n / d;
        }
    }

    let excess = numerator
        .bits()
        .max(denominator.bits())
        .saturating_sub(MAX_FLOAT_BITS);
    // `>>` floors negative values, shift the magnitudes and restore the sign
    let n = (numerator.magnitude() >> excess).to_f64().unwrap_or(0.0);
    let d = (denominator.magnitude() >> excess).to_f64().unwrap_or(0.0);
    let quotient = n / d;
    if numerator.is_negative() != denominator.is_negative() {
        -quotient
    } else {
        quotient
    }
}

/// Rounds half away from zero to `|precision|` decimal digits.
pub fn round_to_precision(value: f64, precision: i32) -> f64 {
    let digits = precision.unsigned_abs().min(308) as i32;
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
