use super::{convert, normalize, ColorSpace};
use crate::Float;

/// Compute the Euclidian distance between the two coordinate triples.
#[inline]
pub(crate) fn euclidean_distance(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [c1, c2, c3] = coordinates1;
    let [d1, d2, d3] = coordinates2;

    let x = c1 - d1;
    let y = c2 - d2;
    let z = c3 - d3;

    x.mul_add(x, y.mul_add(y, z * z)).sqrt()
}

/// Compute Delta E for Oklab or Oklrab.
///
/// Delta E is a generic difference metric for colors and several algorithms
/// exist. The one for Oklab has the benefit of being both fairly accurate and
/// incredibly simple: It is the Euclidian distance between the coordinates.
#[inline]
pub(crate) fn delta_e_ok(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    euclidean_distance(coordinates1, coordinates2)
}

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color—or `None` if there are no candidates. Ties go to
/// the candidate with the smallest index.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

// --------------------------------------------------------------------------------------------------------------------

/// A strategy for interpolating hues.
///
/// Since hues are expressed as angles, the same perceptual hue has an
/// infinite number of representations modulo 360. Furthermore, there are two
/// ways of interpolating between two hues, clockwise and counter-clockwise.
/// Consistent with [CSS Color
/// 4](https://www.w3.org/TR/css-color-4/#hue-interpolation), the
/// interpolation strategy selects the way based either on the distance
/// between hues, [`HueInterpolation::Shorter`] and
/// [`HueInterpolation::Longer`], or on the direction,
/// [`HueInterpolation::Increasing`] and [`HueInterpolation::Decreasing`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Take the shorter arc between the two hue angles.
    Shorter,
    /// Take the longer arc between the two hue angles.
    Longer,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
}

/// Adjust the pair of hues based on interpolation strategy.
fn prepare_hue_interpolation(strategy: HueInterpolation, h1: Float, h2: Float) -> [Float; 2] {
    match strategy {
        HueInterpolation::Shorter => {
            if h2 - h1 > 180.0 {
                return [h1 + 360.0, h2];
            } else if h2 - h1 < -180.0 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Longer => {
            if (0.0..=180.0).contains(&(h2 - h1)) {
                return [h1 + 360.0, h2];
            } else if (-180.0..=0.0).contains(&(h2 - h1)) {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Increasing => {
            if h2 < h1 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Decreasing => {
            if h1 < h2 {
                return [h1 + 360.0, h2];
            }
        }
    }

    [h1, h2]
}

/// Prepare a pair of colors for interpolation.
///
/// This function converts both endpoints into the interpolation color space
/// and normalizes them. If the interpolation space is polar and exactly one
/// endpoint is achromatic, i.e., has a not-a-number hue, that endpoint
/// inherits the other endpoint's hue. If both endpoints have hues, the
/// interpolation strategy selects one of the two available arcs between them.
///
/// By separating preparation from actual interpolation, it becomes possible
/// to amortize the overhead of the former when generating several
/// interpolated colors, e.g., when computing a gradient.
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn prepare_to_interpolate(
    space1: ColorSpace,
    coordinates1: &[Float; 3],
    space2: ColorSpace,
    coordinates2: &[Float; 3],
    interpolation_space: ColorSpace,
    strategy: HueInterpolation,
) -> ([Float; 3], [Float; 3]) {
    let mut coordinates1 = normalize(
        interpolation_space,
        &convert(space1, interpolation_space, coordinates1),
    );
    let mut coordinates2 = normalize(
        interpolation_space,
        &convert(space2, interpolation_space, coordinates2),
    );

    if interpolation_space.is_polar() {
        // An achromatic endpoint takes on the other endpoint's hue.
        if coordinates1[2].is_nan() {
            coordinates1[2] = coordinates2[2];
        } else if coordinates2[2].is_nan() {
            coordinates2[2] = coordinates1[2];
        }

        if !coordinates1[2].is_nan() && !coordinates2[2].is_nan() {
            [coordinates1[2], coordinates2[2]] =
                prepare_hue_interpolation(strategy, coordinates1[2], coordinates2[2]);
        }
    }

    (coordinates1, coordinates2)
}

/// Interpolate between the prepared coordinates.
///
/// This function calculates the linear interpolation for the given fraction
/// between equivalent coordinates of the two colors. The fraction is not
/// clamped, so extrapolation works just the same. For the result to be
/// meaningful, the coordinates must be prepared with
/// [`prepare_to_interpolate`].
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    [
        coordinates1[0] + fraction * (coordinates2[0] - coordinates1[0]),
        coordinates1[1] + fraction * (coordinates2[1] - coordinates1[1]),
        coordinates1[2] + fraction * (coordinates2[2] - coordinates1[2]),
    ]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        find_closest, delta_e_ok, interpolate, prepare_to_interpolate, HueInterpolation,
    };
    use crate::core::ColorSpace::*;
    use crate::Float;

    #[test]
    fn test_find_closest() {
        let candidates = [
            [0.0_f64, 0.0, 0.0],
            [0.5, 0.5, 0.5],
            [1.0, 1.0, 1.0],
            [0.5, 0.5, 0.5],
        ];
        assert_eq!(
            find_closest(&[0.6, 0.6, 0.6], &candidates, delta_e_ok),
            Some(1)
        );
        assert_eq!(
            find_closest(&[0.9, 0.9, 0.9], &candidates, delta_e_ok),
            Some(2)
        );
        let no_candidates: [[f64; 3]; 0] = [];
        assert_eq!(
            find_closest(&[0.0, 0.0, 0.0], no_candidates.iter(), delta_e_ok),
            None
        );
    }

    #[test]
    fn test_hue_strategies() {
        let pairs = [
            (HueInterpolation::Shorter, [330.0, 390.0]),
            (HueInterpolation::Longer, [330.0, 30.0]),
            (HueInterpolation::Increasing, [330.0, 390.0]),
            (HueInterpolation::Decreasing, [330.0, 30.0]),
        ];
        for (strategy, expected) in pairs {
            let (c1, c2) = prepare_to_interpolate(
                Oklch,
                &[0.5, 0.1, 330.0],
                Oklch,
                &[0.5, 0.1, 30.0],
                Oklch,
                strategy,
            );
            assert_eq!([c1[2], c2[2]], expected, "strategy {:?}", strategy);
        }
    }

    #[test]
    fn test_achromatic_hue() {
        // The achromatic endpoint inherits the chromatic endpoint's hue.
        let (c1, c2) = prepare_to_interpolate(
            Srgb,
            &[0.5, 0.5, 0.5],
            Oklch,
            &[0.6, 0.2, 120.0],
            Oklch,
            HueInterpolation::Shorter,
        );
        assert_eq!(c1[2], 120.0);
        assert_eq!(c2[2], 120.0);

        let midpoint = interpolate(0.5, &c1, &c2);
        assert_eq!(midpoint[2], 120.0);

        // Two achromatic endpoints stay achromatic.
        let (c1, c2) = prepare_to_interpolate(
            Srgb,
            &[0.2, 0.2, 0.2],
            Srgb,
            &[0.9, 0.9, 0.9],
            Oklrch,
            HueInterpolation::Shorter,
        );
        assert!(c1[2].is_nan());
        assert!(c2[2].is_nan());
        assert!(interpolate(0.5, &c1, &c2)[2].is_nan());
    }

    #[test]
    fn test_extrapolation() {
        let c1 = [0.0_f64, 0.0, 0.0];
        let c2 = [1.0, 2.0, 3.0];
        assert_eq!(interpolate(1.5, &c1, &c2), [1.5, 3.0, 4.5]);
        assert_eq!(interpolate(-0.5, &c1, &c2), [-0.5, -1.0, -1.5]);
        assert!(interpolate(Float::NAN, &c1, &c2)
            .iter()
            .all(|c| c.is_nan()));
    }
}
