//! Utility module implementing terminal color themes.

use crate::error::{OutOfBoundsError, ThemeLengthError};
use crate::termco::{AnsiColor, Layer};
use crate::{rgb, Color, ColorSpace};

/// A color theme.
///
/// A color theme is a container with 18 colors, one each for the default
/// foreground and background colors as well as the 16 extended ANSI colors,
/// in the order given by [`ThemeEntry`]. The internal representation is an
/// array with 18 colors, which remains accessible through [`AsRef<[Color]>
/// for Theme`](struct.Theme.html#impl-AsRef%3C%5BColor%5D%3E-for-Theme),
/// albeit read-only. The primary reason for encapsulating the array thusly
/// is to force the use of semantic index values, i.e., [`ThemeEntry`],
/// [`Layer`], or [`AnsiColor`].
///
/// Every entry of a well-formed theme is a finite, in-gamut sRGB color.
/// [`Theme::new`] establishes that invariant by converting and gamut-mapping
/// the given colors; the `const` constructor [`Theme::with_array`] instead
/// trusts its caller, which makes static themes such as [`VGA_COLORS`]
/// possible.
#[derive(Clone, PartialEq, Eq)]
pub struct Theme {
    inner: [Color; 18],
}

impl Theme {
    /// Create a new color theme from the given colors.
    ///
    /// The slice must contain exactly 18 colors, in the order given by
    /// [`ThemeEntry`]. Every color is converted to sRGB and gamut-mapped.
    pub fn new(colors: &[Color]) -> Result<Self, ThemeLengthError> {
        if colors.len() != 18 {
            return Err(ThemeLengthError(colors.len()));
        }

        Ok(Self {
            inner: std::array::from_fn(|index| colors[index].to(ColorSpace::Srgb).to_gamut()),
        })
    }

    /// Create a new color theme with the given colors.
    ///
    /// The colors must be finite, in-gamut sRGB colors, in the order given by
    /// [`ThemeEntry`].
    pub const fn with_array(colors: [Color; 18]) -> Self {
        Self { inner: colors }
    }
}

impl AsRef<[Color]> for Theme {
    fn as_ref(&self) -> &[Color] {
        &self.inner
    }
}

impl std::ops::Index<ThemeEntry> for Theme {
    type Output = Color;

    fn index(&self, index: ThemeEntry) -> &Self::Output {
        &self.inner[index as usize]
    }
}

impl std::ops::Index<AnsiColor> for Theme {
    type Output = Color;

    fn index(&self, index: AnsiColor) -> &Self::Output {
        &self.inner[index as usize + 2]
    }
}

impl std::ops::Index<Layer> for Theme {
    type Output = Color;

    fn index(&self, index: Layer) -> &Self::Output {
        match index {
            Layer::Foreground => &self.inner[0],
            Layer::Background => &self.inner[1],
        }
    }
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debugger = f.debug_struct("Theme");
        for entry in ThemeEntry::entries() {
            debugger.field(&entry.name().replace(' ', "_"), &self[entry]);
        }
        debugger.finish()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color theme entry.
///
/// This enumeration conveniently names the 18 entries of a color theme in
/// order. It effectively combines the variants of [`Layer`] and
/// [`AnsiColor`] into a new enumeration; [`From<Layer> as
/// ThemeEntry`](enum.ThemeEntry.html#impl-From%3CLayer%3E-for-ThemeEntry)
/// and [`From<AnsiColor> as
/// ThemeEntry`](enum.ThemeEntry.html#impl-From%3CAnsiColor%3E-for-ThemeEntry)
/// capture the semantic connection.
///
/// [`ThemeEntry::entries`] returns an iterator over the theme entries in
/// order; [`ThemeEntry::name`] returns each theme entry's name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    Foreground,
    Background,
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

impl ThemeEntry {
    /// Get an iterator over all theme entries.
    pub fn entries() -> ThemeEntryIterator {
        ThemeEntryIterator { index: 0 }
    }

    /// Get this theme entry's name.
    pub const fn name(&self) -> &'static str {
        use ThemeEntry::*;

        match self {
            Foreground => "foreground",
            Background => "background",
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

impl TryFrom<usize> for ThemeEntry {
    type Error = OutOfBoundsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value <= 1 {
            Ok(if value == 0 {
                ThemeEntry::Foreground
            } else {
                ThemeEntry::Background
            })
        } else if value <= 17 {
            Ok(ThemeEntry::from(
                AnsiColor::try_from((value - 2) as u8).unwrap(),
            ))
        } else {
            Err(OutOfBoundsError::new(value, 0..=17))
        }
    }
}

impl From<Layer> for ThemeEntry {
    fn from(value: Layer) -> Self {
        match value {
            Layer::Foreground => ThemeEntry::Foreground,
            Layer::Background => ThemeEntry::Background,
        }
    }
}

impl From<AnsiColor> for ThemeEntry {
    fn from(value: AnsiColor) -> Self {
        ThemeEntry::try_from(value as usize + 2).unwrap()
    }
}

/// An iterator over theme entries.
///
/// This iterator is returned by [`ThemeEntry::entries`] and is both fused
/// and exact, i.e., it will keep returning `None` after returning `None`
/// once and its `size_hint()` returns the exact number of remaining items.
#[derive(Debug)]
pub struct ThemeEntryIterator {
    index: usize,
}

impl Iterator for ThemeEntryIterator {
    type Item = ThemeEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= 18 {
            None
        } else {
            let item = ThemeEntry::try_from(self.index).expect("index should be smaller than 18");
            self.index += 1;
            Some(item)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 18 - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for ThemeEntryIterator {
    fn len(&self) -> usize {
        18 - self.index
    }
}

impl std::iter::FusedIterator for ThemeEntryIterator {}

// --------------------------------------------------------------------------------------------------------------------

/// The color theme with the 2+16 colors of [VGA text
/// mode](https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit).
pub const VGA_COLORS: Theme = Theme::with_array([
    rgb!(0, 0, 0),       // Foreground
    rgb!(255, 255, 255), // Background
    rgb!(0, 0, 0),       // Black
    rgb!(170, 0, 0),     // Red
    rgb!(0, 170, 0),     // Green
    rgb!(170, 85, 0),    // Yellow(ish)
    rgb!(0, 0, 170),     // Blue
    rgb!(170, 0, 170),   // Magenta
    rgb!(0, 170, 170),   // Cyan
    rgb!(170, 170, 170), // White
    rgb!(85, 85, 85),    // Bright Black
    rgb!(255, 85, 85),   // Bright Red
    rgb!(85, 255, 85),   // Bright Green
    rgb!(255, 255, 85),  // Bright Yellow
    rgb!(85, 85, 255),   // Bright Blue
    rgb!(255, 85, 255),  // Bright Magenta
    rgb!(85, 255, 255),  // Bright Cyan
    rgb!(255, 255, 255), // Bright White
]);

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Theme, ThemeEntry, VGA_COLORS};
    use crate::error::ThemeLengthError;
    use crate::termco::{AnsiColor, Layer};
    use crate::Color;

    #[test]
    fn test_theme_entry() {
        assert_eq!(ThemeEntry::try_from(0), Ok(ThemeEntry::Foreground));
        assert_eq!(ThemeEntry::try_from(1), Ok(ThemeEntry::Background));
        assert_eq!(ThemeEntry::try_from(2), Ok(ThemeEntry::Black));
        assert_eq!(ThemeEntry::try_from(17), Ok(ThemeEntry::BrightWhite));
        assert!(ThemeEntry::try_from(18).is_err());

        assert_eq!(
            ThemeEntry::from(AnsiColor::Red),
            ThemeEntry::try_from(AnsiColor::Red.to_8bit() as usize + 2).unwrap()
        );
        assert_eq!(ThemeEntry::from(Layer::Background), ThemeEntry::Background);

        let entries: Vec<ThemeEntry> = ThemeEntry::entries().collect();
        assert_eq!(entries.len(), 18);
        assert_eq!(entries[0], ThemeEntry::Foreground);
        assert_eq!(entries[17], ThemeEntry::BrightWhite);
    }

    #[test]
    fn test_theme_access() {
        assert_eq!(VGA_COLORS[ThemeEntry::Blue], Color::from_24bit(0, 0, 170));
        assert_eq!(VGA_COLORS[AnsiColor::Blue], Color::from_24bit(0, 0, 170));
        assert_eq!(VGA_COLORS[Layer::Foreground], Color::from_24bit(0, 0, 0));
        assert_eq!(
            VGA_COLORS[Layer::Background],
            Color::from_24bit(255, 255, 255)
        );
        assert_eq!(VGA_COLORS.as_ref().len(), 18);
    }

    #[test]
    fn test_theme_construction() {
        let too_short = vec![Color::default(); 17];
        assert_eq!(Theme::new(&too_short), Err(ThemeLengthError(17)));

        // Out-of-gamut entries are mapped into the sRGB gamut.
        let mut colors: Vec<Color> = VGA_COLORS.as_ref().to_vec();
        colors[5] = Color::p3(0.0, 1.0, 0.0);
        let theme = Theme::new(&colors).unwrap();
        assert_eq!(theme[ThemeEntry::Red], VGA_COLORS[ThemeEntry::Red]);

        let green = &theme[ThemeEntry::Yellow];
        assert_eq!(green.space(), crate::ColorSpace::Srgb);
        assert!(green.in_gamut());
    }
}
