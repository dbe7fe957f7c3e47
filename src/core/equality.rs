use super::conversion::{okxab_to_okxch, ACHROMATIC_EPSILON};
use super::ColorSpace;
use crate::{Bits, Float};

#[cfg(feature = "f64")]
pub(crate) const ROUNDING_FACTOR: Float = 1e12;
#[cfg(not(feature = "f64"))]
pub(crate) const ROUNDING_FACTOR: Float = 1e4;

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping
/// the sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two color coordinate slices describe the
/// same color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// coordinates by zeroing out not-a-numbers, clamping the lightness and
/// chroma of Ok* colors, scaling the hue of Oklch/Oklrch, reducing
/// resolution, and dropping the sign of negative zeros before comparing the
/// resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(space, cs1);
        let bits2 = $crate::core::to_eq_coordinates(space, cs2);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize the color coordinates.
///
/// This function canonicalizes the hue of polar coordinates: If the hue is
/// not finite or the chroma is below the achromatic threshold, both the hue
/// becomes not-a-number and the chroma becomes zero, marking the color as
/// achromatic. Otherwise, the hue is wrapped into `0..360`. Coordinates for
/// Cartesian color spaces pass through unchanged; in particular, this
/// function never clamps.
#[inline]
pub(crate) fn normalize(space: ColorSpace, coordinates: &[Float; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *coordinates;

    if space.is_polar() {
        if !c3.is_finite() || c2 < ACHROMATIC_EPSILON {
            return [c1, 0.0, Float::NAN];
        }
        return [c1, c2, c3.rem_euclid(360.0)];
    }

    [c1, c2, c3]
}

/// Normalize coordinates for equality testing and hashing.
///
/// This function eliminates not-a-numbers, enforces meaningful ranges for the
/// Oklab variations, scales hues to have the same order of magnitude as other
/// coordinates, and converts the result to bits that are ready for equality
/// comparison and/or hashing.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(space: ColorSpace, coordinates: &[Float; 3]) -> [Bits; 3] {
    let [mut c1, mut c2, mut c3] = *coordinates;

    // Zero out not-a-numbers; a missing hue also implies zero chroma.
    if c1.is_nan() {
        c1 = 0.0;
    }
    if c2.is_nan() {
        c2 = 0.0;
    }
    if c3.is_nan() {
        c3 = 0.0;
        if space.is_polar() {
            c2 = 0.0;
        }
    }

    // Clamp (revised) lightness and chroma in the Oklab variations.
    if space.is_ok() {
        c1 = c1.clamp(0.0, 1.0);
        if space.is_polar() {
            c2 = c2.max(0.0);
        }
    }

    // Normalize rotation and scale to unit range.
    if space.is_polar() {
        c3 = c3.rem_euclid(360.0) / 360.0
    }

    // Reduce precision.
    c1 = (c1 * ROUNDING_FACTOR).round();
    c2 = (c2 * ROUNDING_FACTOR).round();
    c3 = (c3 * ROUNDING_FACTOR).round();

    // Prevent too much negativity.
    if c1 == -0.0 {
        c1 = 0.0;
    }
    if c2 == -0.0 {
        c2 = 0.0
    }
    if c3 == -0.0 {
        c3 = 0.0
    }

    [c1.to_bits(), c2.to_bits(), c3.to_bits()]
}

// --------------------------------------------------------------------------------------------------------------------

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a
/// bit string. It is only public because the [`assert_close_enough`] test
/// macro uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the color is achromatic or gray-ish.
///
/// This function determines whether the hue is not-a-number or the chroma is
/// smaller than or equal to the given threshold in Oklch/Oklrch, converting
/// the coordinates if necessary.
pub(crate) fn is_achromatic(space: ColorSpace, coordinates: &[Float; 3], threshold: Float) -> bool {
    let coordinates = match space {
        ColorSpace::Oklch | ColorSpace::Oklrch => *coordinates,
        ColorSpace::Oklab | ColorSpace::Oklrab => okxab_to_okxch(coordinates),
        _ => super::convert(space, ColorSpace::Oklch, coordinates),
    };

    is_achromatic_chroma_hue(coordinates[1], coordinates[2], threshold)
}

/// Determine whether the chroma and hue are gray-ish.
///
/// This function treats the chroma and hue as gray-ish if either the hue is
/// not-a-number or the chroma is smaller than or equal to the given
/// threshold.
#[inline]
pub(crate) fn is_achromatic_chroma_hue(chroma: Float, hue: Float, threshold: Float) -> bool {
    hue.is_nan() || chroma <= threshold
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{normalize, to_eq_coordinates};
    use crate::core::ColorSpace::*;
    use crate::Float;

    #[test]
    fn test_normalize() {
        // Cartesian coordinates pass through, not-a-numbers included.
        let [c1, c2, c3] = normalize(Srgb, &[1.5, Float::NAN, -0.25]);
        assert_eq!(c1, 1.5);
        assert!(c2.is_nan());
        assert_eq!(c3, -0.25);

        // Hues wrap into 0..360.
        assert_eq!(normalize(Oklch, &[0.5, 0.1, 400.0]), [0.5, 0.1, 40.0]);
        assert_eq!(normalize(Oklch, &[0.5, 0.1, -60.0]), [0.5, 0.1, 300.0]);

        // Achromatic colors have a not-a-number hue and zero chroma.
        let [c1, c2, c3] = normalize(Oklrch, &[0.5, 0.00001, 120.0]);
        assert_eq!(c1, 0.5);
        assert_eq!(c2, 0.0);
        assert!(c3.is_nan());

        let [_, c2, c3] = normalize(Oklch, &[0.5, 0.1, Float::INFINITY]);
        assert_eq!(c2, 0.0);
        assert!(c3.is_nan());
    }

    #[test]
    fn test_equivalence() {
        let f00 = 0.0;
        let f01 = 1e-15_f64;
        let f02 = 2e-15_f64;
        let f03 = 3e-15_f64;
        let f05 = 5e-15_f64;
        let f07 = 7e-15_f64;
        let f09 = 9e-15_f64;
        let f10 = 1e-14_f64;
        let f20 = 2e-14_f64;

        assert_eq!(
            to_eq_coordinates(Srgb, &[f01, f02, f03]),
            to_eq_coordinates(Srgb, &[f00, f00, f00])
        );
        assert_eq!(
            to_eq_coordinates(Srgb, &[f05, f07, f09]),
            to_eq_coordinates(Srgb, &[f10, f10, f10])
        );
        assert_ne!(
            to_eq_coordinates(Srgb, &[f10, f10, f10]),
            to_eq_coordinates(Srgb, &[f20, f20, f20])
        );

        // Hues compare modulo full rotations; a missing hue zeroes chroma.
        assert_eq!(
            to_eq_coordinates(Oklch, &[0.5, 0.1, 665.0]),
            to_eq_coordinates(Oklch, &[0.5, 0.1, 305.0])
        );
        assert_eq!(
            to_eq_coordinates(Oklch, &[0.5, 0.1, Float::NAN]),
            to_eq_coordinates(Oklch, &[0.5, 0.0, 0.0])
        );
    }
}
