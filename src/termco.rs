//! Terminal-specific color formats.
//!
//! This module has a dual focus, first providing the different color formats
//! used by terminals and then unifying them again:
//!
//!   * [`AnsiColor`] names the 16 extended ANSI colors, which have no
//!     intrinsic color values.
//!   * [`EmbeddedRgb`] covers the 6x6x6 RGB cube embedded in 8-bit terminal
//!     colors.
//!   * [`GrayGradient`] covers the 24-step gray gradient embedded in 8-bit
//!     terminal colors.
//!   * [`TrueColor`] represents 24-bit RGB colors, which terminals treat as
//!     sRGB.
//!   * [`TerminalColor`] combines the above with the terminal default into
//!     one coherent sum type.
//!
//! The module also defines [`Layer`] to distinguish between foreground and
//! background colors and [`Fidelity`] to rank the color support of
//! terminals.

use crate::error::OutOfBoundsError;
use crate::Color;

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Rust code converts between 8-bit color codes and enumeration variants with
/// [`AnsiColor as
/// TryFrom<u8>`](enum.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) and
/// [`u8 as
/// From<AnsiColor>`](enum.AnsiColor.html#impl-From%3CAnsiColor%3E-for-u8).
///
/// Since ANSI colors have no intrinsic color values, conversion from/to
/// high-resolution colors requires additional machinery, as provided by
/// [`Sampler`](crate::Sampler).
///
/// The ANSI colors are ordered because they are ordered as theme colors and
/// as indexed colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Get the 8-bit code for this ANSI color.
    #[inline]
    pub const fn to_8bit(&self) -> u8 {
        *self as u8
    }

    /// Determine whether this ANSI color is achromatic.
    ///
    /// The four achromatic ANSI colors are black, white, bright black, and
    /// bright white.
    pub const fn is_achromatic(&self) -> bool {
        use AnsiColor::*;
        matches!(*self, Black | White | BrightBlack | BrightWhite)
    }

    /// Determine whether this ANSI color is bright.
    pub const fn is_bright(&self) -> bool {
        *self as u8 >= 8
    }

    /// Get the corresponding nonbright ANSI color.
    ///
    /// If this color is bright, this method returns the corresponding
    /// nonbright color. Otherwise, it returns the color itself.
    pub fn nonbright(&self) -> AnsiColor {
        let mut index = *self as u8;
        if index >= 8 {
            index -= 8;
        }
        AnsiColor::try_from(index).unwrap()
    }

    /// Get the corresponding bright ANSI color.
    ///
    /// If this color is nonbright, this method returns the corresponding
    /// bright color. Otherwise, it returns the color itself.
    pub fn to_bright(&self) -> AnsiColor {
        let mut index = *self as u8;
        if index < 8 {
            index += 8;
        }
        AnsiColor::try_from(index).unwrap()
    }

    /// Get this ANSI color's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"`
    /// for [`AnsiColor::BrightGreen`].
    pub const fn name(&self) -> &'static str {
        use AnsiColor::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let ansi = match value {
            0 => AnsiColor::Black,
            1 => AnsiColor::Red,
            2 => AnsiColor::Green,
            3 => AnsiColor::Yellow,
            4 => AnsiColor::Blue,
            5 => AnsiColor::Magenta,
            6 => AnsiColor::Cyan,
            7 => AnsiColor::White,
            8 => AnsiColor::BrightBlack,
            9 => AnsiColor::BrightRed,
            10 => AnsiColor::BrightGreen,
            11 => AnsiColor::BrightYellow,
            12 => AnsiColor::BrightBlue,
            13 => AnsiColor::BrightMagenta,
            14 => AnsiColor::BrightCyan,
            15 => AnsiColor::BrightWhite,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        };

        Ok(ansi)
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

impl From<AnsiColor> for TerminalColor {
    fn from(color: AnsiColor) -> Self {
        TerminalColor::Ansi(color)
    }
}

// ====================================================================================================================
// The Embedded 6x6x6 RGB Cube
// ====================================================================================================================

/// The 6x6x6 RGB cube embedded in 8-bit terminal colors.
///
/// An embedded RGB color has three coordinates, each ranging `0..=5`, and
/// occupies the range `16..=231` of the 8-bit terminal colors, in order
/// `16 + 36×r + 6×g + b`. The number of coordinate levels explains this
/// type's `Rgb6` tag in [`TerminalColor`].
///
/// Rust code can create a new embedded RGB color with either
/// [`EmbeddedRgb::new`] or [`EmbeddedRgb as
/// TryFrom<u8>`](struct.EmbeddedRgb.html#impl-TryFrom%3Cu8%3E-for-EmbeddedRgb)
/// and convert it back to `u8`, to 24-bit coordinates, to a [`TrueColor`],
/// or to a high-resolution [`Color`]. The canonical 24-bit coordinates use
/// the terminal-standard ramp 0, 95, 135, 175, 215, 255.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddedRgb([u8; 3]);

impl EmbeddedRgb {
    /// Create a new embedded RGB value from its coordinates.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
        if r >= 6 {
            Err(OutOfBoundsError::new(r, 0..=5))
        } else if g >= 6 {
            Err(OutOfBoundsError::new(g, 0..=5))
        } else if b >= 6 {
            Err(OutOfBoundsError::new(b, 0..=5))
        } else {
            Ok(Self([r, g, b]))
        }
    }
}

impl TryFrom<u8> for EmbeddedRgb {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(16..=231).contains(&value) {
            Err(OutOfBoundsError::new(value, 16..=231))
        } else {
            let mut b = value - 16;
            let r = b / 36;
            b -= r * 36;
            let g = b / 6;
            b -= g * 6;

            Self::new(r, g, b)
        }
    }
}

impl AsRef<[u8; 3]> for EmbeddedRgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for EmbeddedRgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `index > 2`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<EmbeddedRgb> for u8 {
    fn from(value: EmbeddedRgb) -> u8 {
        let [r, g, b] = value.0;
        16 + 36 * r + 6 * g + b
    }
}

impl From<EmbeddedRgb> for [u8; 3] {
    fn from(value: EmbeddedRgb) -> Self {
        fn convert(value: u8) -> u8 {
            if value == 0 {
                0
            } else {
                55 + 40 * value
            }
        }

        let [r, g, b] = *value.as_ref();
        [convert(r), convert(g), convert(b)]
    }
}

impl From<EmbeddedRgb> for TrueColor {
    fn from(value: EmbeddedRgb) -> Self {
        let [r, g, b] = value.into();
        TrueColor::new(r, g, b)
    }
}

impl From<EmbeddedRgb> for TerminalColor {
    fn from(color: EmbeddedRgb) -> Self {
        TerminalColor::Rgb6(color)
    }
}

impl From<EmbeddedRgb> for Color {
    fn from(value: EmbeddedRgb) -> Self {
        TrueColor::from(value).into()
    }
}

// ====================================================================================================================
// Gray Gradient
// ====================================================================================================================

/// The 24-step gray gradient embedded in 8-bit terminal colors.
///
/// A gray gradient color has a level ranging `0..=23` and occupies the range
/// `232..=255` of the 8-bit terminal colors, in order. The canonical 24-bit
/// coordinates are `8 + 10×level` for all three channels. Gray gradient
/// colors are ordered by level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrayGradient(u8);

impl GrayGradient {
    /// Instantiate a new gray gradient from its level `0..=23`.
    pub fn new(value: u8) -> Result<Self, OutOfBoundsError> {
        if value <= 23 {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=23))
        }
    }

    /// Access the gray level `0..=23`.
    #[inline]
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GrayGradient {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 231 {
            Err(OutOfBoundsError::new(value, 232..=255))
        } else {
            Self::new(value - 232)
        }
    }
}

impl From<GrayGradient> for u8 {
    fn from(value: GrayGradient) -> u8 {
        232 + value.0
    }
}

impl From<GrayGradient> for [u8; 3] {
    fn from(value: GrayGradient) -> Self {
        let level = 8 + 10 * value.level();
        [level, level, level]
    }
}

impl From<GrayGradient> for TrueColor {
    fn from(value: GrayGradient) -> TrueColor {
        let [r, g, b] = value.into();
        TrueColor::new(r, g, b)
    }
}

impl From<GrayGradient> for TerminalColor {
    fn from(color: GrayGradient) -> Self {
        TerminalColor::Gray(color)
    }
}

impl From<GrayGradient> for Color {
    fn from(value: GrayGradient) -> Self {
        TrueColor::from(value).into()
    }
}

// ====================================================================================================================
// True Color
// ====================================================================================================================

/// A "true," 24-bit RGB color.
///
/// Rust code can create a new true color with either [`TrueColor::new`] or
/// [`TrueColor as
/// From<&Color>`](struct.TrueColor.html#impl-From%3C%26Color%3E-for-TrueColor),
/// access the coordinates by reference or index, convert the color to a
/// high-resolution [`Color`], and format it in hashed hexadecimal notation
/// with [`TrueColor as
/// Display`](struct.TrueColor.html#impl-Display-for-TrueColor).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrueColor([u8; 3]);

impl TrueColor {
    /// Create a new true color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }
}

impl AsRef<[u8; 3]> for TrueColor {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for TrueColor {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `index > 2`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for TrueColor {
    fn from(value: [u8; 3]) -> Self {
        TrueColor::new(value[0], value[1], value[2])
    }
}

impl From<&Color> for TrueColor {
    /// Convert the given color to a true color.
    ///
    /// This method first converts the color to gamut-mapped sRGB and then
    /// converts each coordinate to `u8`.
    fn from(value: &Color) -> Self {
        let [r, g, b] = value.to_24bit();
        Self::new(r, g, b)
    }
}

impl From<TrueColor> for TerminalColor {
    fn from(color: TrueColor) -> Self {
        TerminalColor::Rgb256(color)
    }
}

impl From<TrueColor> for Color {
    fn from(value: TrueColor) -> Self {
        Self::from_24bit(value.0[0], value.0[1], value.0[2])
    }
}

impl std::fmt::Display for TrueColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = *self.as_ref();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// ====================================================================================================================
// Terminal Color
// ====================================================================================================================

/// A terminal color.
///
/// This enumeration unifies the terminal default with the four terminal
/// color types [`AnsiColor`], [`EmbeddedRgb`], [`GrayGradient`], and
/// [`TrueColor`]. The `Default` variant carries no payload; it stands in for
/// the terminal's current default color on whatever layer the terminal color
/// ends up being used for. The variants for the embedded RGB and 24-bit RGB
/// colors derive their names from the number of levels per channel.
///
/// The 8-bit terminal colors map bijectively onto the `Ansi`, `Rgb6`, and
/// `Gray` variants, with the index ranges `0..=15`, `16..=231`, and
/// `232..=255`, respectively. [`TerminalColor::from_8bit`] and [`u8 as
/// TryFrom<TerminalColor>`](enum.TerminalColor.html#impl-TryFrom%3CTerminalColor%3E-for-u8)
/// convert between the two representations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TerminalColor {
    Default,
    Ansi(AnsiColor),
    Rgb6(EmbeddedRgb),
    Gray(GrayGradient),
    Rgb256(TrueColor),
}

impl TerminalColor {
    /// Convert the 8-bit index to a terminal color.
    ///
    /// Depending on the index, this method returns a wrapped ANSI, embedded
    /// RGB, or gray gradient color.
    #[inline]
    pub fn from_8bit(index: u8) -> Self {
        Self::from(index)
    }

    /// Instantiate a new terminal color from the 24-bit RGB coordinates.
    pub fn from_24bit(r: impl Into<u8>, g: impl Into<u8>, b: impl Into<u8>) -> Self {
        Self::Rgb256(TrueColor::new(r.into(), g.into(), b.into()))
    }

    /// Determine whether this terminal color is the default color.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Get the SGR parameters for this terminal color.
    ///
    /// This method determines the SGR parameters for setting the given
    /// layer, i.e., foreground or background, to this terminal color. It
    /// returns 1, 3, or 5 parameters that may be combined with other SGR
    /// parameters into one escape sequence, as long as they are properly
    /// separated by semicolons. This crate does not perform any terminal
    /// I/O; wrapping the parameters in `ESC [`…`m` is the caller's job.
    pub fn sgr_parameters(&self, layer: Layer) -> Vec<u8> {
        match self {
            TerminalColor::Default => vec![39 + layer.offset()],
            TerminalColor::Ansi(c) => {
                let base = if c.is_bright() { 90 } else { 30 } + layer.offset();
                vec![base + c.nonbright().to_8bit()]
            }
            TerminalColor::Rgb6(c) => {
                vec![38 + layer.offset(), 5, u8::from(*c)]
            }
            TerminalColor::Gray(c) => {
                vec![38 + layer.offset(), 5, u8::from(*c)]
            }
            TerminalColor::Rgb256(c) => {
                vec![38 + layer.offset(), 2, c[0], c[1], c[2]]
            }
        }
    }
}

impl From<u8> for TerminalColor {
    /// Convert the 8-bit index to a terminal color.
    fn from(value: u8) -> Self {
        if (0..=15).contains(&value) {
            Self::Ansi(AnsiColor::try_from(value).unwrap())
        } else if (16..=231).contains(&value) {
            Self::Rgb6(EmbeddedRgb::try_from(value).unwrap())
        } else {
            Self::Gray(GrayGradient::try_from(value).unwrap())
        }
    }
}

impl From<&Color> for TerminalColor {
    /// Convert a high-resolution color to a terminal color.
    ///
    /// This method first converts the color to gamut-mapped sRGB and then
    /// converts each coordinate to `u8` before returning a wrapped
    /// [`TrueColor`].
    fn from(value: &Color) -> Self {
        Self::Rgb256(TrueColor::from(value))
    }
}

impl TryFrom<TerminalColor> for u8 {
    type Error = TerminalColor;

    /// Try to convert this terminal color to an 8-bit index.
    ///
    /// For ANSI, embedded RGB, and gray gradient colors, this method unwraps
    /// the color and converts it to an 8-bit index. It returns any other
    /// terminal color as the error value.
    fn try_from(value: TerminalColor) -> Result<Self, Self::Error> {
        match value {
            TerminalColor::Default => Err(value),
            TerminalColor::Ansi(c) => Ok(u8::from(c)),
            TerminalColor::Rgb6(c) => Ok(u8::from(c)),
            TerminalColor::Gray(c) => Ok(u8::from(c)),
            TerminalColor::Rgb256(_) => Err(value),
        }
    }
}

impl TryFrom<TerminalColor> for [u8; 3] {
    type Error = TerminalColor;

    fn try_from(value: TerminalColor) -> Result<Self, Self::Error> {
        match value {
            TerminalColor::Default => Err(value),
            TerminalColor::Ansi(_) => Err(value),
            TerminalColor::Rgb6(color) => Ok(color.into()),
            TerminalColor::Gray(color) => Ok(color.into()),
            TerminalColor::Rgb256(color) => Ok(*color.as_ref()),
        }
    }
}

impl TryFrom<TerminalColor> for Color {
    type Error = TerminalColor;

    fn try_from(value: TerminalColor) -> Result<Self, Self::Error> {
        let [r, g, b] = value.try_into()?;
        Ok(Color::from_24bit(r, g, b))
    }
}

// ====================================================================================================================
// Layer and Fidelity
// ====================================================================================================================

/// The targeted display layer: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

impl Layer {
    /// Determine the offset for this layer.
    ///
    /// The offset is added to SGR parameter values for foreground colors.
    #[inline]
    pub const fn offset(&self) -> u8 {
        match self {
            Self::Foreground => 0,
            Self::Background => 10,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Foreground => f.write_str("foreground"),
            Self::Background => f.write_str("background"),
        }
    }
}

/// The stylistic fidelity of terminal output.
///
/// This enumeration captures levels of stylistic fidelity. It can describe
/// the capabilities of a terminal or runtime environment (such as CI) as
/// well as the preferences of a user (notably, `NoColor`). Fidelity levels
/// are totally ordered from least to most capable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fidelity {
    /// Plain text, no ANSI escape codes.
    Plain,
    /// ANSI escape codes but no colors.
    NoColor,
    /// ANSI and default colors only.
    Ansi,
    /// 8-bit indexed colors including ANSI and default colors.
    EightBit,
    /// Full fidelity including 24-bit RGB color.
    Full,
}

impl Fidelity {
    /// Determine whether this fidelity level suffices for rendering the
    /// terminal color.
    pub fn covers(&self, color: TerminalColor) -> bool {
        Fidelity::from(color) <= *self
    }
}

impl From<TerminalColor> for Fidelity {
    /// Determine the fidelity required for rendering the given terminal
    /// color.
    ///
    /// Any color at all, including the terminal default, requires escape
    /// codes and hence at least [`Fidelity::NoColor`].
    fn from(value: TerminalColor) -> Self {
        match value {
            TerminalColor::Default => Self::NoColor,
            TerminalColor::Ansi(_) => Self::Ansi,
            TerminalColor::Rgb6(_) | TerminalColor::Gray(_) => Self::EightBit,
            TerminalColor::Rgb256(_) => Self::Full,
        }
    }
}

impl std::fmt::Display for Fidelity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Plain => "plain text",
            Self::NoColor => "no colors",
            Self::Ansi => "ANSI colors",
            Self::EightBit => "8-bit colors",
            Self::Full => "24-bit colors",
        };

        f.write_str(s)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        AnsiColor, EmbeddedRgb, Fidelity, GrayGradient, Layer, OutOfBoundsError, TerminalColor,
        TrueColor,
    };

    #[test]
    fn test_conversion() -> Result<(), OutOfBoundsError> {
        let magenta = AnsiColor::Magenta;
        assert_eq!(magenta as u8, 5);

        let green = EmbeddedRgb::new(0, 4, 0)?;
        assert_eq!(green.as_ref(), &[0, 4, 0]);
        assert_eq!(TrueColor::from(green), TrueColor::new(0, 215, 0));

        let gray = GrayGradient::new(12)?;
        assert_eq!(gray.level(), 12);
        assert_eq!(TrueColor::from(gray), TrueColor::new(128, 128, 128));

        let also_magenta = TerminalColor::Ansi(AnsiColor::Magenta);
        let also_green = TerminalColor::Rgb6(green);
        let also_gray = TerminalColor::Gray(gray);

        assert_eq!(also_magenta, TerminalColor::from(5));
        assert_eq!(also_green, TerminalColor::from(40));
        assert_eq!(also_gray, TerminalColor::from(244));

        assert!(<[u8; 3]>::try_from(also_magenta).is_err());
        assert_eq!(<[u8; 3]>::try_from(also_green), Ok([0_u8, 215, 0]));
        assert_eq!(<[u8; 3]>::try_from(also_gray), Ok([128_u8, 128, 128]));

        Ok(())
    }

    #[test]
    fn test_limits() -> Result<(), OutOfBoundsError> {
        let black_ansi = AnsiColor::try_from(0)?;
        assert_eq!(black_ansi, AnsiColor::Black);
        assert_eq!(u8::from(black_ansi), 0);
        let white_ansi = AnsiColor::try_from(15)?;
        assert_eq!(white_ansi, AnsiColor::BrightWhite);
        assert_eq!(u8::from(white_ansi), 15);
        assert!(AnsiColor::try_from(16).is_err());

        let black_rgb = EmbeddedRgb::try_from(16)?;
        assert_eq!(*black_rgb.as_ref(), [0_u8, 0_u8, 0_u8]);
        assert_eq!(u8::from(black_rgb), 16);
        let white_rgb = EmbeddedRgb::try_from(231)?;
        assert_eq!(*white_rgb.as_ref(), [5_u8, 5_u8, 5_u8]);
        assert_eq!(u8::from(white_rgb), 231);
        assert!(EmbeddedRgb::new(6, 0, 0).is_err());

        let black_gray = GrayGradient::try_from(232)?;
        assert_eq!(black_gray.level(), 0);
        assert_eq!(u8::from(black_gray), 232);
        let white_gray = GrayGradient::try_from(255)?;
        assert_eq!(white_gray.level(), 23);
        assert_eq!(u8::from(white_gray), 255);
        assert!(GrayGradient::new(24).is_err());

        Ok(())
    }

    #[test]
    fn test_8bit_roundtrip() {
        for index in 0..=255_u8 {
            let color = TerminalColor::from_8bit(index);
            assert_eq!(u8::try_from(color), Ok(index));
        }
    }

    #[test]
    fn test_nonbright() {
        assert_eq!(AnsiColor::Red.nonbright(), AnsiColor::Red);
        assert_eq!(AnsiColor::BrightRed.nonbright(), AnsiColor::Red);
        assert_eq!(AnsiColor::Cyan.to_bright(), AnsiColor::BrightCyan);
        assert_eq!(AnsiColor::BrightCyan.to_bright(), AnsiColor::BrightCyan);
    }

    #[test]
    fn test_sgr_parameters() {
        assert_eq!(
            TerminalColor::Default.sgr_parameters(Layer::Foreground),
            vec![39]
        );
        assert_eq!(
            TerminalColor::Default.sgr_parameters(Layer::Background),
            vec![49]
        );
        assert_eq!(
            TerminalColor::Ansi(AnsiColor::Green).sgr_parameters(Layer::Foreground),
            vec![32]
        );
        assert_eq!(
            TerminalColor::Ansi(AnsiColor::Green).sgr_parameters(Layer::Background),
            vec![42]
        );
        assert_eq!(
            TerminalColor::from_8bit(9).sgr_parameters(Layer::Foreground),
            vec![91]
        );
        assert_eq!(
            TerminalColor::from_8bit(9).sgr_parameters(Layer::Background),
            vec![101]
        );
        assert_eq!(
            TerminalColor::from_8bit(196).sgr_parameters(Layer::Foreground),
            vec![38, 5, 196]
        );
        assert_eq!(
            TerminalColor::from_8bit(254).sgr_parameters(Layer::Background),
            vec![48, 5, 254]
        );
        assert_eq!(
            TerminalColor::from_24bit(1_u8, 2_u8, 3_u8).sgr_parameters(Layer::Foreground),
            vec![38, 2, 1, 2, 3]
        );
    }

    #[test]
    fn test_fidelity() {
        use Fidelity::*;

        assert!(Plain < NoColor);
        assert!(NoColor < Ansi);
        assert!(Ansi < EightBit);
        assert!(EightBit < Full);

        assert_eq!(Fidelity::from(TerminalColor::Default), NoColor);
        assert_eq!(
            Fidelity::from(TerminalColor::Ansi(AnsiColor::Blue)),
            Ansi
        );
        assert_eq!(Fidelity::from(TerminalColor::from_8bit(77)), EightBit);
        assert_eq!(Fidelity::from(TerminalColor::from_8bit(243)), EightBit);
        assert_eq!(
            Fidelity::from(TerminalColor::from_24bit(0_u8, 0_u8, 0_u8)),
            Full
        );

        assert!(Ansi.covers(TerminalColor::Default));
        assert!(Ansi.covers(TerminalColor::Ansi(AnsiColor::Red)));
        assert!(!Ansi.covers(TerminalColor::from_8bit(66)));
        assert!(Full.covers(TerminalColor::from_24bit(1_u8, 2_u8, 3_u8)));
        assert!(!NoColor.covers(TerminalColor::Ansi(AnsiColor::Red)));
    }
}
