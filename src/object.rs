use crate::core::{
    adjust_lightness, clip, convert, delta_e_ok, format, from_24bit, in_gamut, interpolate,
    is_achromatic, normalize, parse, prepare_to_interpolate, to_24bit, to_contrast,
    to_contrast_luminance_srgb, to_eq_coordinates, to_gamut, ColorSpace, HueInterpolation,
};
use crate::Float;

/// Create a new sRGB color from 24-bit integer coordinates.
///
/// Like [`Color::from_24bit`], this macro creates a new color from 24-bit
/// integer coordinates. However, it also is safe to use in const expressions.
///
/// Rust currently does not allow floating point operations in const
/// functions. That makes it impossible to write a const function that
/// constructs a new high-resolution color object from integer coordinates.
/// However, Rust does currently allow floating point operations in const
/// expressions, notably as arguments to a const function such as a
/// constructor. Hence, a macro can convert the integer coordinates before
/// passing them to the const function. That's just what this macro does.
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color::new(
            $crate::ColorSpace::Srgb,
            [
                $r as $crate::Float / 255.0,
                $g as $crate::Float / 255.0,
                $b as $crate::Float / 255.0,
            ],
        )
    };
}

/// A high-resolution color object.
///
/// Every color object combines a [color space](ColorSpace) with three
/// [`Float`] coordinates.
///
/// # Color Coordinates
///
/// For RGB color spaces, the coordinates of in-gamut colors have unit range.
/// For the other color spaces, there are no gamut bounds, though
/// well-formed colors in the Oklab variations keep their (revised) lightness
/// in `0..=1` and their chroma in `0..`.
///
/// The hue in Oklch/Oklrch may be not-a-number, which marks a [powerless
/// component](https://www.w3.org/TR/css-color-4/#powerless): the color is
/// achromatic, i.e., a gray. That convention is necessary for grayscale
/// colors to survive round-tripping through the polar color spaces, and
/// conversions as well as interpolation carefully preserve it. No other
/// coordinate is intentionally not-a-number; constructors accept such
/// coordinates without checking or clamping, and [`Color::normalize`]
/// canonicalizes the hue.
///
/// # Immutability
///
/// Color objects are immutable. Every operation that appears to modify a
/// color, such as [`Color::to`] or [`Color::lighten`], returns a new color.
#[derive(Clone)]
pub struct Color {
    space: ColorSpace,
    coordinates: [Float; 3],
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// The coordinates are taken as given; they are never clamped or
    /// otherwise adjusted on construction.
    #[inline]
    pub const fn new(space: ColorSpace, coordinates: [Float; 3]) -> Self {
        Self { space, coordinates }
    }

    /// Instantiate a new sRGB color with the given red, green, and blue
    /// coordinates.
    pub fn srgb(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Srgb, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Display P3 color with the given red, green, and blue
    /// coordinates.
    pub fn p3(r: impl Into<Float>, g: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::DisplayP3, [r.into(), g.into(), b.into()])
    }

    /// Instantiate a new Oklab color with the given lightness L, a, and b
    /// coordinates.
    pub fn oklab(l: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklab, [l.into(), a.into(), b.into()])
    }

    /// Instantiate a new Oklrab color with the given revised lightness Lr, a,
    /// and b coordinates.
    pub fn oklrab(lr: impl Into<Float>, a: impl Into<Float>, b: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklrab, [lr.into(), a.into(), b.into()])
    }

    /// Instantiate a new Oklch color with the given lightness L, chroma C,
    /// and hue h coordinates.
    pub fn oklch(l: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklch, [l.into(), c.into(), h.into()])
    }

    /// Instantiate a new Oklrch color with the given revised lightness Lr,
    /// chroma C, and hue h coordinates.
    pub fn oklrch(lr: impl Into<Float>, c: impl Into<Float>, h: impl Into<Float>) -> Self {
        Self::new(ColorSpace::Oklrch, [lr.into(), c.into(), h.into()])
    }

    /// Instantiate a new sRGB color from its 24-bit representation.
    ///
    /// This function returns a new sRGB color with the given red, green, and
    /// blue coordinates scaled by 1/255. The [`rgb`] macro does the same
    /// thing but is safe to use inside const expressions.
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(ColorSpace::Srgb, from_24bit(r, g, b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the color space.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Determine whether this color is the default color.
    ///
    /// High-resolution colors always carry concrete coordinates, so this
    /// method returns `false` for every color. Only [the terminal
    /// default](crate::termco::TerminalColor::Default), which stands in for
    /// whatever color the terminal currently uses for a layer, is a default
    /// color.
    #[inline]
    pub fn is_default(&self) -> bool {
        false
    }

    /// The threshold used by [`is_achromatic`](Color::is_achromatic).
    pub const ACHROMATIC_THRESHOLD: Float = 0.01;

    /// Determine whether this color is achromatic.
    ///
    /// For consistent, high-quality results, this method tests whether the
    /// hue is not-a-number or the chroma is less equal than
    /// [`ACHROMATIC_THRESHOLD`](Color::ACHROMATIC_THRESHOLD) in Oklch or
    /// Oklrch, converting this color if necessary.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        is_achromatic(self.space, &self.coordinates, Color::ACHROMATIC_THRESHOLD)
    }

    /// Determine whether this color is achromatic given the threshold.
    ///
    /// The threshold must be non-negative, since the chroma in Oklch/Oklrch
    /// is non-negative and hence cannot possibly be less equal than a
    /// negative threshold. Upon violation of this invariant, this method
    /// returns the offending threshold as the error value.
    pub fn is_achromatic_threshold(&self, threshold: Float) -> Result<bool, Float> {
        if threshold.is_sign_negative() {
            Err(threshold)
        } else {
            Ok(is_achromatic(self.space, &self.coordinates, threshold))
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Normalize this color.
    ///
    /// For colors in a polar color space, this method canonicalizes the hue:
    /// If the hue is not finite or the chroma is below the achromatic
    /// threshold of the color space conversions, the hue becomes not-a-number
    /// and the chroma zero; otherwise, the hue is wrapped into `0..360`. All
    /// other coordinates pass through unchanged.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn normalize(&self) -> Self {
        Self::new(self.space, normalize(self.space, &self.coordinates))
    }

    /// Convert this color to the target color space.
    ///
    /// # Approach
    ///
    /// A color space is usually defined through a conversion from and to
    /// another color space. The color module includes handwritten functions
    /// that implement just those single-hop conversions. The basic challenge
    /// for arbitrary conversions, as implemented by this method, is to find a
    /// path through the graph of single-hop conversions. Dijkstra's algorithm
    /// would certainly work. But it also incurs substantial dynamic overhead
    /// on every conversion.
    ///
    /// The algorithm used by this method can avoid much of this dynamic
    /// overhead. It is based on the observation that single-hop conversions
    /// form a tree rooted in XYZ. That suggests taking a divide and conquer
    /// approach towards the most general conversions, which go through XYZ:
    /// Split the path into two, from the source color space to XYZ and from
    /// XYZ to the target color space.
    ///
    /// Alas, conversions that do not go through XYZ need to be handled
    /// separately and the cluster of Oklab, Oklrab, Oklch, and Oklrch
    /// requires 8 single-hop and 4 double-hop conversion functions in
    /// addition to the 2 single-hop, 4 double-hop, and 2 triple-hop functions
    /// for converting from and to XYZ. With those conversion functions in
    /// place, routing through the conversion graph is a straightforward
    /// linear case analysis. See the source code for the full details.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorSpace) -> Self {
        Self::new(target, convert(self.space, target, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether this color is in-gamut for its color space.
    ///
    /// Colors in unbounded color spaces are always in gamut. For RGB color
    /// spaces, all coordinates must be in unit range, with a tolerance of
    /// 1e-4 to account for floating point error introduced by conversions.
    #[inline]
    pub fn in_gamut(&self) -> bool {
        in_gamut(self.space, &self.coordinates)
    }

    /// Clip this color to the gamut of its color space.
    ///
    /// Clipping is the quick-and-dirty fallback for out-of-gamut colors; it
    /// clamps each coordinate separately and hence may noticeably shift the
    /// color. [`Color::to_gamut`] produces better results.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn clip(&self) -> Self {
        Self::new(self.space, clip(self.space, &self.coordinates))
    }

    /// Map this color into the gamut of its color space.
    ///
    /// # Algorithm
    ///
    /// This method uses the [CSS Color 4
    /// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping) for
    /// gamut mapping. It performs a binary search in Oklch for a color with
    /// less chroma than the original (but the same lightness and hue), whose
    /// clipped version is within the *just noticeable difference* and in
    /// gamut for the current color space. That clipped color is the result.
    ///
    /// The algorithm nicely illustrates how different color spaces are best
    /// suited to different needs. First, it performs clipping and in-gamut
    /// testing in the current color space. After all, that's the color space
    /// the application requires the color to be in. Second, it performs color
    /// adjustments in Oklch. It is nicely suited to color manipulation
    /// because it is both perceptually uniform and has polar coordinates.
    /// Third, it measures distance in Oklab. Since that color space is
    /// perceptually uniform and has Cartesian coordinates, computing the
    /// distance is as simple as calculating the Euclidian distance.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_gamut(&self) -> Self {
        Self::new(self.space, to_gamut(self.space, &self.coordinates))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Compute the Euclidian distance between the two colors in Oklab.
    ///
    /// This method computes the color difference *Delta E OK*, which is the
    /// Euclidian distance in the Oklab color space, using either the original
    /// or the revised version of that space.
    pub fn distance(&self, other: &Self, version: OkVersion) -> Float {
        let space = version.cartesian_space();
        delta_e_ok(
            &self.to(space).coordinates,
            &other.to(space).coordinates,
        )
    }

    /// Find the index position of the candidate color closest to this color.
    ///
    /// This method delegates to [`Color::find_closest`] using the Delta E
    /// metric for Oklab/Oklrab, which is the Euclidian distance.
    pub fn find_closest_ok<'c, C>(&self, candidates: C, version: OkVersion) -> Option<usize>
    where
        C: IntoIterator<Item = &'c Self>,
    {
        self.find_closest(candidates, version.cartesian_space(), delta_e_ok)
    }

    /// Find the index position of the candidate color closest to this color.
    ///
    /// This method compares this color to every candidate color by computing
    /// the distance with the given function and returns the index position of
    /// the candidate with the smallest distance. If there are no candidates,
    /// it returns `None`. Ties go to the candidate with the smallest index.
    /// The distance metric is declared `mut` to allow for stateful
    /// comparisons.
    pub fn find_closest<'c, C, F>(
        &self,
        candidates: C,
        space: ColorSpace,
        mut compute_distance: F,
    ) -> Option<usize>
    where
        C: IntoIterator<Item = &'c Color>,
        F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
    {
        let origin = self.to(space);
        let mut min_distance = Float::INFINITY;
        let mut min_index = None;

        for (index, candidate) in candidates.into_iter().enumerate() {
            let candidate = candidate.to(space);
            let distance = compute_distance(&origin.coordinates, &candidate.coordinates);
            if distance < min_distance {
                min_distance = distance;
                min_index = Some(index);
            }
        }

        min_index
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Interpolate the two colors.
    ///
    /// This method creates a new interpolator for this and the given color.
    /// [`Interpolator::at`] generates the actual, interpolated colors.
    ///
    /// Both colors are converted into the interpolation color space and
    /// normalized. If that color space is polar and exactly one of the colors
    /// is achromatic, i.e., has a not-a-number hue, it inherits the other
    /// color's hue. The interpolation strategy picks one of the two arcs
    /// between the two hues; it has no effect on Cartesian color spaces.
    ///
    /// Note that the interpolated colors may not be displayable and hence may
    /// require further processing, such as gamut mapping.
    #[inline]
    #[must_use = "method returns interpolator and does not mutate original values"]
    pub fn interpolate(
        &self,
        color: &Self,
        interpolation_space: ColorSpace,
        interpolation_strategy: HueInterpolation,
    ) -> Interpolator {
        Interpolator::new(self, color, interpolation_space, interpolation_strategy)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Lighten this color by the given amount.
    ///
    /// This method converts this color to Oklrch, adds the given amount to
    /// its revised lightness Lr, clamps the result to `0..=1`, and converts
    /// back to this color's space. Chroma and hue remain unchanged. This
    /// method uses Oklrch and not Oklch because of the latter's non-uniform
    /// lightness L.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lighten(&self, amount: Float) -> Self {
        let adjusted = adjust_lightness(self.space, &self.coordinates, amount);
        Self::new(
            self.space,
            convert(ColorSpace::Oklrch, self.space, &adjusted),
        )
    }

    /// Darken this color by the given amount.
    ///
    /// Darkening is the same as lightening, except that it subtracts the
    /// amount from the revised lightness. See [`Color::lighten`].
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darken(&self, amount: Float) -> Self {
        self.lighten(-amount)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine the perceptual contrast of text against a solidly colored
    /// background.
    ///
    /// This method computes the asymmetric, perceptual contrast of text with
    /// this color against a background with the given color. It uses an
    /// algorithm that is surprisingly similar to the [Accessible Perceptual
    /// Contrast Algorithm](https://github.com/Myndex/apca-w3) (APCA), version
    /// 0.0.98G-4g, computed over sRGB contrast luminance. The result is
    /// signed: positive for dark text on a light background and negative for
    /// light text on a dark background.
    pub fn contrast_against(&self, background: &Self) -> Float {
        let fg = self.to(ColorSpace::Srgb);
        let bg = background.to(ColorSpace::Srgb);

        to_contrast(
            to_contrast_luminance_srgb(&fg.coordinates),
            to_contrast_luminance_srgb(&bg.coordinates),
        )
    }

    /// Determine the text with maximal perceptual contrast.
    ///
    /// This method determines whether black or white text maximizes
    /// perceptual contrast against a background with this color. It uses the
    /// same algorithm as [`Color::contrast_against`].
    pub fn use_black_text(&self) -> bool {
        let luminance = to_contrast_luminance_srgb(&self.to(ColorSpace::Srgb).coordinates);
        -to_contrast(1.0, luminance) <= to_contrast(0.0, luminance)
    }

    /// Determine the background with maximal perceptual contrast.
    ///
    /// This method determines whether a black or white background maximizes
    /// perceptual contrast behind text with this color. It uses the same
    /// algorithm as [`Color::contrast_against`].
    pub fn use_black_background(&self) -> bool {
        let luminance = to_contrast_luminance_srgb(&self.to(ColorSpace::Srgb).coordinates);
        to_contrast(luminance, 0.0) <= -to_contrast(luminance, 1.0)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit RGB representation.
    ///
    /// This method converts the color to a gamut-mapped sRGB color before
    /// scaling each coordinate by 255 and rounding half-to-even.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(self.to(ColorSpace::Srgb).to_gamut().as_ref())
    }

    /// Format this color in familiar `#123abc` hashed hexadecimal
    /// representation.
    ///
    /// Like [`Color::to_24bit`], this method converts the color to a
    /// gamut-mapped sRGB color before formatting its coordinates in hashed
    /// hexadecimal notation.
    #[inline]
    pub fn to_hex_format(&self) -> String {
        let [r, g, b] = self.to_24bit();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Default for Color {
    /// Create an instance of the pitch-black color, i.e., the origin in XYZ.
    #[inline]
    fn default() -> Self {
        Self::new(ColorSpace::Xyz, [0.0, 0.0, 0.0])
    }
}

impl std::str::FromStr for Color {
    type Err = crate::error::ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower
    /// case. That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes two hexadecimal notations for RGB colors, the
    /// hashed notation familiar from the web and the XParseColor notation
    /// familiar from X Windows. While the latter originally specified *device
    /// RGB*, this crate treats `rgb:` strings as specifying sRGB colors.
    ///
    /// The *hashed notation* has three or six hexadecimal digits, e.g.,
    /// `#123` or `#cafe00`. Note that the three digit version is a short form
    /// of the six digit version with every digit repeated. In other words,
    /// the red coordinate in `#123` is not 0x1/0xf but 0x11/0xff.
    ///
    /// The *XParseColor notation* has between one and four hexadecimal
    /// digits per coordinate, e.g., `rgb:1/00/cafe`. Here, every coordinate
    /// is scaled, i.e., the red coordinate in the example is 0x1/0xf.
    ///
    /// This method also recognizes a subset of the *CSS color syntax*. In
    /// particular, it recognizes the `color()`, `oklab()`, and `oklch()` CSS
    /// functions. For `color()`, the tag right after the opening parenthesis
    /// may be `srgb`, `display-p3`, `rec2020`, `xyz`, `xyz-d65`, or one of
    /// the non-standard tags `--linear-srgb`, `--linear-display-p3`,
    /// `--linear-rec2020`, `--oklrab`, and `--oklrch`. Coordinates must be
    /// space-separated and unitless (i.e., no `%` or `deg`); a hue may also
    /// be `none`. This method is a left inverse of both [`Color as
    /// Display`](struct.Color.html#impl-Display-for-Color) and
    /// [`Color::to_hex_format`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|(space, coordinates)| Self::new(space, coordinates))
    }
}

impl TryFrom<&str> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use std::str::FromStr;
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = crate::error::ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use std::str::FromStr;
        Color::from_str(value.as_str())
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.space.hash(state);

        let [n1, n2, n3] = to_eq_coordinates(self.space, &self.coordinates);
        n1.hash(state);
        n2.hash(state);
        n3.hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// A key requirement for data structures that implement the `Eq` and
    /// `Hash` traits is that equal colors also have equal hashes. [`Color`]
    /// enforces that invariant by normalizing coordinates and turning them
    /// into bit strings before equality testing or hashing. In particular,
    /// both operations perform the following steps:
    ///
    ///   * To turn coordinates into comparable entities, replace
    ///     not-a-numbers with positive zero;
    ///   * To preserve not-a-number semantics for hues, also zero out chroma
    ///     for not-a-number hues in Oklch/Oklrch;
    ///   * To preserve rotation semantics for hues, remove all full
    ///     rotations;
    ///   * To prepare for rounding, scale down hues to unit range;
    ///   * To allow for floating point error, multiply by 1e12/1e4 (depending
    ///     on `Float`'s type) and then round to drop the least significant
    ///     digit;
    ///   * To make zeros comparable, replace negative zero with positive zero
    ///     (but only after rounding, as it may produce zeros);
    ///   * To convince Rust that coordinates are comparable, convert them to
    ///     bits.
    ///
    /// While rounding isn't strictly necessary for correctness, it makes for
    /// a more robust comparison without meaningfully reducing precision.
    fn eq(&self, other: &Self) -> bool {
        if self.space != other.space {
            return false;
        } else if self.coordinates == other.coordinates {
            return true;
        }

        let n1 = to_eq_coordinates(self.space, &self.coordinates);
        let n2 = to_eq_coordinates(other.space, &other.coordinates);
        n1 == n2
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        f.write_fmt(format_args!(
            "Color({:?}, [{}, {}, {}])",
            self.space, c1, c2, c3
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color.
    ///
    /// This method formats the color in CSS format using either a `color()`,
    /// `oklab()`, or `oklch()` CSS function and three space-separated
    /// coordinates. It respects the formatter's precision, defaulting to 5
    /// digits past the decimal. Since degrees for Oklch/Oklrch are up to two
    /// orders of magnitude larger than other coordinates, this method uses a
    /// precision smaller by 2 for degrees. A not-a-number hue formats as
    /// `none`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format(self.space, &self.coordinates, f)
    }
}

// ====================================================================================================================

/// A choice of Oklab versions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OkVersion {
    /// The original Oklab/Oklch color spaces.
    Original,
    /// The revised Oklrab/Oklrch color spaces.
    Revised,
}

impl OkVersion {
    /// Determine the Cartesian color space corresponding to this version of
    /// the Oklab color spaces.
    pub const fn cartesian_space(&self) -> ColorSpace {
        match *self {
            Self::Original => ColorSpace::Oklab,
            Self::Revised => ColorSpace::Oklrab,
        }
    }

    /// Determine the polar color space corresponding to this version of the
    /// Oklab color spaces.
    pub const fn polar_space(&self) -> ColorSpace {
        match *self {
            Self::Original => ColorSpace::Oklch,
            Self::Revised => ColorSpace::Oklrch,
        }
    }
}

// ====================================================================================================================

/// Helper struct returned by [`Color::interpolate`].
///
/// An interpolator performs linear interpolation between the coordinates of
/// two colors according to [CSS Color
/// 4](https://www.w3.org/TR/css-color-4/#interpolation). While the linear
/// interpolation itself is straight-forward, preparing color coordinates
/// requires converting both colors into the interpolation color space,
/// filling in the hue of achromatic colors, and adjusting the pair of hues
/// according to the interpolation strategy. Instead of performing this
/// preparatory work for every interpolation, this struct performs it once and
/// then can compute an arbitrary number of interpolated colors for its two
/// source colors.
#[derive(Clone, Debug)]
pub struct Interpolator {
    space: ColorSpace,
    coordinates1: [Float; 3],
    coordinates2: [Float; 3],
}

impl Interpolator {
    /// Create a new color interpolator.
    ///
    /// See [`Color::interpolate`].
    #[inline]
    pub fn new(
        color1: &Color,
        color2: &Color,
        space: ColorSpace,
        strategy: HueInterpolation,
    ) -> Self {
        let (coordinates1, coordinates2) = prepare_to_interpolate(
            color1.space,
            &color1.coordinates,
            color2.space,
            &color2.coordinates,
            space,
            strategy,
        );

        Self {
            space,
            coordinates1,
            coordinates2,
        }
    }

    /// Compute the interpolated color for the given fraction.
    ///
    /// The fraction is not clamped, so fractions outside the unit range
    /// extrapolate beyond the two source colors. A not-a-number fraction
    /// yields not-a-number coordinates; the caller is responsible for
    /// avoiding that. The result is a color in the interpolation color
    /// space.
    #[inline]
    pub fn at(&self, fraction: Float) -> Color {
        Color::new(
            self.space,
            interpolate(fraction, &self.coordinates1, &self.coordinates2),
        )
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, HueInterpolation, OkVersion};
    use crate::core::ColorSpace::*;
    use crate::error::ColorFormatError;
    use crate::{assert_close_enough, Float};
    use std::str::FromStr;

    #[test]
    fn test_conversion_identity() {
        let pink = Color::new(Oklch, [0.7, 0.22, 3.0]);
        assert_eq!(pink.space(), Oklch);
        assert_eq!(pink.as_ref(), &[0.7 as Float, 0.22, 3.0]);
        assert_eq!(pink.to(Oklch), pink);

        let gray = Color::from_24bit(0x6c, 0x74, 0x79);
        let same_gray = gray.to(Oklrch);
        assert_eq!(
            same_gray,
            Color::new(
                Oklrch,
                [0.4827939631351205, 0.012421260273578993, 234.98550533688365]
            )
        );
        assert_eq!(same_gray.to(Srgb).to_24bit(), [0x6c_u8, 0x74, 0x79]);
    }

    #[test]
    fn test_white_to_oklrch() -> Result<(), ColorFormatError> {
        let white = Color::from_str("#ffffff")?;
        let oklrch = white.to(Oklrch);
        assert!((oklrch[0] - 1.0).abs() < 1e-9);
        assert!(oklrch[2].is_nan());
        Ok(())
    }

    #[test]
    fn test_gamut_mapping() {
        // oklch(0.7 0.4 30) is way outside of the sRGB gamut. Gamut mapping
        // reduces the chroma while preserving lightness and hue.
        let vivid = Color::oklch(0.7, 0.4, 30.0);
        let mapped = vivid.to(Srgb).to_gamut();
        assert!(mapped.in_gamut());

        let [l, c, h] = *mapped.to(Oklch).as_ref();
        assert!((l - 0.7).abs() < 0.03);
        assert!((h - 30.0).abs() < 5.0);
        assert!(c < 0.4);

        // In-gamut colors map onto themselves.
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(red.to_gamut(), red);
    }

    #[test]
    fn test_distance() -> Result<(), ColorFormatError> {
        let honeydew = Color::from_str("#d4fb79")?;
        let cantaloupe = Color::from_str("#ffd479")?;
        let d1 = honeydew.distance(&cantaloupe, OkVersion::Original);
        let d2 = honeydew.distance(&cantaloupe, OkVersion::Revised);
        assert_close_enough!(d1, 0.11174969799958659);
        assert_close_enough!(d2, 0.11498895250174994);
        Ok(())
    }

    #[test]
    fn test_find_closest() {
        let colors = [
            &Color::from_24bit(0xc4, 0x13, 0x31),
            &Color::from_24bit(0, 0x80, 0x25),
            &Color::from_24bit(0x30, 0x78, 0xea),
        ];
        let rose = Color::srgb(1.0, 0.5, 0.5);
        assert_eq!(rose.find_closest_ok(colors, OkVersion::Revised), Some(0));

        let green = Color::srgb(0.5, 1.0, 0.6);
        assert_eq!(green.find_closest_ok(colors, OkVersion::Revised), Some(1));
    }

    #[test]
    fn test_interpolation() {
        let red = Color::srgb(0.8, 0.0, 0.0);
        let yellow = Color::from_24bit(0xff, 0xca, 0);
        let orange = red
            .interpolate(&yellow, Oklch, HueInterpolation::Shorter)
            .at(0.5);
        assert_eq!(
            orange,
            Color::oklch(0.6960475282872609, 0.196904718808239, 59.33737836604695)
        );
    }

    #[test]
    fn test_lighten_darken() {
        let gray = Color::srgb(0.2, 0.2, 0.2);
        let lr = gray.to(Oklrch)[0];

        let lighter = gray.lighten(0.3);
        assert_eq!(lighter.space(), Srgb);
        let [lr2, c2, h2] = *lighter.to(Oklrch).as_ref();
        assert!((lr2 - lr - 0.3).abs() < 1e-6);
        assert!(c2 < 1e-3);
        assert!(h2.is_nan());

        let darker_again = lighter.darken(0.3);
        let lr3 = darker_again.to(Oklrch)[0];
        assert!((lr3 - lr).abs() < 1e-6);

        // Lightness clamps at the unit range.
        assert!((Color::srgb(0.9, 0.9, 0.9).lighten(0.5).to(Oklrch)[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_contrast() {
        let blue: Color = str::parse("#6872ff").unwrap();
        assert!(!blue.use_black_text());

        let lighter_blue: Color = str::parse("#68a0ff").unwrap();
        assert!(lighter_blue.use_black_background());

        // Dark text on a light background has positive contrast, light text
        // on a dark background negative contrast.
        let black = Color::srgb(0.0, 0.0, 0.0);
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert!(black.contrast_against(&white) > 0.0);
        assert!(white.contrast_against(&black) < 0.0);
    }

    #[test]
    fn test_hex_format() -> Result<(), ColorFormatError> {
        let pink = Color::p3(1.0, 0.2, 1.0).to(Srgb);
        assert!(!pink.in_gamut());
        assert_eq!(pink.clip(), Color::srgb(1.0, 0.0, 1.0));
        assert_eq!(pink.to_hex_format(), "#ff41fb");

        let navy = Color::from_str("#011480")?;
        assert_eq!(navy.to_hex_format(), "#011480");
        Ok(())
    }

    #[test]
    fn test_is_default() {
        assert!(!Color::default().is_default());
        assert!(!Color::srgb(0.0, 0.0, 0.0).is_default());
    }
}
