//! Utility module with this crate's errors.

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=5` for coordinates of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `0..=23` for the gray levels of [`GrayGradient`](crate::termco::GrayGradient);
///   * `0..=17` for index values of [`ThemeEntry`](crate::theme::ThemeEntry);
///   * `16..=231` for index values of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `232..=255` for index values of [`GrayGradient`](crate::termco::GrayGradient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous color format.
///
/// Several variants carry the offending fragment of the parsed string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb:`, `color(`, `oklab(`, or `oklch(`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `color display-p3 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    UnknownColorSpace(String),

    /// A color format that is missing a coordinate. For example, `rgb:0` is
    /// missing the second and third coordinate, whereas `rgb:0//0` is missing
    /// the second coordinate only.
    MissingCoordinate,

    /// A color format that has too many digits in a coordinate. For example,
    /// `rgb:12345/1/22` has too many digits in the first coordinate.
    OversizedCoordinate(String),

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex(String),

    /// A color format that has a malformed floating point number as
    /// coordinate. For example, `color(srgb 1.0 0..1 0.0)` has a malformed
    /// second coordinate.
    MalformedFloat(String),

    /// A color format with more than three coordinates. For example,
    /// `rgb:1/2/3/4` has one coordinate too many.
    TooManyCoordinates,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `color()`, `oklab()`, `oklch()`, or `rgb:`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace(s) => f.write_fmt(format_args!(
                "color format should use a known color space, not `{}`",
                s
            )),
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            OversizedCoordinate(s) => f.write_fmt(format_args!(
                "color format coordinates should have 1-4 hex digits but `{}` has more",
                s
            )),
            MalformedHex(s) => f.write_fmt(format_args!(
                "color format coordinates should be hexadecimal integers, not `{}`",
                s
            )),
            MalformedFloat(s) => f.write_fmt(format_args!(
                "color format coordinates should be floating point numbers, not `{}`",
                s
            )),
            TooManyCoordinates => f.write_str("color format should have 3 coordinates but has more"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An erroneous theme length.
///
/// This error indicates that a color theme was constructed from a sequence
/// with anything other than the required 18 colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeLengthError(pub usize);

impl std::fmt::Display for ThemeLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "color theme should have 18 colors but has {}",
            self.0
        ))
    }
}

impl std::error::Error for ThemeLengthError {}
