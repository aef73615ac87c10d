//! Numeric helpers shared by the conversions.
//!
//! All of these are generic over any ordered numeric type and are total over
//! their documented domain.

use num_traits::Num;

/// Return the larger of `a` and `b`. Returns `b` when they are unordered.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Return the smaller of `a` and `b`. Returns `b` when they are unordered.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Return the largest of three values.
#[inline]
pub fn max3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    max(max(a, b), c)
}

/// Return the smallest of three values.
#[inline]
pub fn min3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    min(min(a, b), c)
}

/// Reduce a non-negative `value` into `[0, modulus)`.
///
/// `modulus` must be positive. A negative `value` is outside the domain of
/// this function and is returned unchanged, it is *not* wrapped into range.
#[inline]
pub fn modulo<T: Num + PartialOrd + Copy>(value: T, modulus: T) -> T {
    if value >= modulus {
        value % modulus
    } else {
        value
    }
}

/// Clamp `value` to at most `max`. There is no lower bound and a NaN `value`
/// is passed through.
#[inline]
pub fn clamp_upper<T: PartialOrd>(value: T, max: T) -> T {
    if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_over_integers_and_floats() {
        assert_eq!(max(3, 7), 7);
        assert_eq!(min(3, 7), 3);
        assert_eq!(max3(1u8, 9, 4), 9);
        assert_eq!(min3(1u8, 9, 4), 1);
        assert_eq!(max3(0.25, -1.0, 0.5), 0.5);
        assert_eq!(min3(0.25, -1.0, 0.5), -1.0);
    }

    #[test]
    fn modulo_reduces_into_range() {
        assert_eq!(modulo(20.0, 12.0), 8.0);
        assert_eq!(modulo(12.0, 12.0), 0.0);
        assert_eq!(modulo(11.5, 12.0), 11.5);
        assert_eq!(modulo(7, 3), 1);
        // More than one multiple above the modulus.
        assert_eq!(modulo(50.0, 12.0), 2.0);
        assert_eq!(modulo(1.0e300, 6.0), 1.0e300 % 6.0);
    }

    #[test]
    fn modulo_leaves_negative_values_alone() {
        assert_eq!(modulo(-3.0, 12.0), -3.0);
    }

    #[test]
    fn clamp_upper_only_clamps_above() {
        assert_eq!(clamp_upper(1.5, 1.0), 1.0);
        assert_eq!(clamp_upper(0.5, 1.0), 0.5);
        assert_eq!(clamp_upper(-0.5, 1.0), -0.5);
        assert!(clamp_upper(f64::NAN, 1.0).is_nan());
    }
}
