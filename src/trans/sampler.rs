use super::hue_lightness::HueLightnessTable;
use crate::core::{delta_e_ok, euclidean_distance, find_closest};
use crate::termco::{AnsiColor, EmbeddedRgb, Fidelity, GrayGradient, Layer, TerminalColor};
use crate::theme::Theme;
use crate::{Color, ColorSpace, Float, OkVersion};

/// A color sampler.
///
/// Instances of this struct translate between [`TerminalColor`] and [`Color`]
/// and maintain the state for doing so efficiently. Compared to converting
/// high-resolution colors between color spaces, translation between terminal
/// and high-resolution colors is more complicated for three reasons:
///
///  1. Whereas all high-resolution colors fit into a uniform model of
///     coordinates tagged by their color spaces, different kinds of terminal
///     colors have different representations from each other and from
///     high-resolution colors.
///  2. Some of the differences between terminal colors are not just
///     differences of representation but rather radically different color
///     concepts. In particular, the default and ANSI colors have no intrinsic
///     color values; they are resolved by the terminal's current color theme.
///  3. There are huge differences in the number of available colors: 16 ANSI
///     colors versus 256 indexed colors versus 16 million true colors.
///     Curiously, the bigger challenge when translating colors is not the
///     step from 16 million down to 256 colors but the one from 256 down to
///     16 colors.
///
/// Hence a sampler owns a color [`Theme`] for upsampling abstract colors to
/// high-resolution colors as well as several tables derived at construction
/// for downsampling high-resolution colors again:
///
///   * the 16 theme ANSI colors converted to the Oklab version's Cartesian
///     color space, for perceptually matching the closest ANSI color;
///   * the same 16 colors in sRGB, for the alternate RGB-based match;
///   * the 240 colors of the embedded RGB cube and the gray gradient in
///     sRGB, for matching the closest 8-bit color;
///   * if the theme's hues follow the conventional order, a [hue and
///     lightness table](Sampler::to_ansi_hue_lightness) for higher-quality
///     matching of ANSI colors.
///
/// All state is immutable after construction, so sharing a sampler across
/// threads requires no synchronization. Since a sampler incorporates theme
/// colors, an application should regenerate its sampler if the current theme
/// changes.
pub struct Sampler {
    /// The theme colors. For converting *to* high-resolution colors.
    theme: Theme,
    /// The table for matching by hue and lightness.
    hue_lightness_table: Option<HueLightnessTable>,
    /// The color space for the Oklab-based ANSI color coordinates.
    space: ColorSpace,
    /// The ANSI color coordinates for matching to the closest color.
    ansi: [[Float; 3]; 16],
    /// The ANSI color coordinates in sRGB for the RGB-based match.
    ansi_in_rgb: [[Float; 3]; 16],
    /// The 8-bit color coordinates in sRGB for matching to the closest color.
    eight_bit: [[Float; 3]; 240],
}

/// Create the coordinates for the 16 extended ANSI colors in the given color
/// space.
fn ansi_coordinates(space: ColorSpace, theme: &Theme) -> [[Float; 3]; 16] {
    let mut coordinates: [[Float; 3]; 16] = [[0.0; 3]; 16];
    for (index, slot) in coordinates.iter_mut().enumerate() {
        let color = &theme[AnsiColor::try_from(index as u8).unwrap()];
        *slot = *color.to(space).as_ref();
    }

    coordinates
}

/// Create the sRGB coordinates for the embedded RGB and gray gradient
/// colors.
fn eight_bit_coordinates() -> [[Float; 3]; 240] {
    let mut coordinates: [[Float; 3]; 240] = [[0.0; 3]; 240];
    for index in 16..=231_u8 {
        coordinates[index as usize - 16] =
            *Color::from(EmbeddedRgb::try_from(index).unwrap()).as_ref();
    }
    for index in 232..=255_u8 {
        coordinates[index as usize - 16] =
            *Color::from(GrayGradient::try_from(index).unwrap()).as_ref();
    }

    coordinates
}

impl Sampler {
    /// Create a new sampler for the given Oklab version and theme.
    pub fn new(version: OkVersion, theme: Theme) -> Self {
        let hue_lightness_table = HueLightnessTable::new(&theme);
        let space = version.cartesian_space();
        let ansi = ansi_coordinates(space, &theme);
        let ansi_in_rgb = ansi_coordinates(ColorSpace::Srgb, &theme);
        let eight_bit = eight_bit_coordinates();

        Self {
            theme,
            hue_lightness_table,
            space,
            ansi,
            ansi_in_rgb,
            eight_bit,
        }
    }

    /// Access this sampler's color theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Resolve the 8-bit index to a high-resolution color.
    ///
    /// This method is a pure function of the index: ANSI indices `0..=15`
    /// resolve to the corresponding theme colors, whereas embedded RGB and
    /// gray gradient indices resolve to their canonical sRGB colors.
    pub fn to_high_res_8bit(&self, index: u8) -> Color {
        match TerminalColor::from_8bit(index) {
            TerminalColor::Ansi(c) => self.theme[c].clone(),
            TerminalColor::Rgb6(c) => Color::from(c),
            TerminalColor::Gray(c) => Color::from(c),
            // from_8bit only produces the three 8-bit variants.
            _ => unreachable!(),
        }
    }

    /// Try resolving the terminal color to a high-resolution color.
    ///
    /// ANSI colors resolve to the corresponding theme colors and the other
    /// concrete terminal colors to their sRGB equivalents. Since the layer is
    /// unknown, the terminal default does not resolve and this method returns
    /// `None`.
    pub fn try_high_res(&self, color: TerminalColor) -> Option<Color> {
        match color {
            TerminalColor::Default => None,
            TerminalColor::Ansi(c) => Some(self.theme[c].clone()),
            TerminalColor::Rgb6(c) => Some(Color::from(c)),
            TerminalColor::Gray(c) => Some(Color::from(c)),
            TerminalColor::Rgb256(c) => Some(Color::from(c)),
        }
    }

    /// Resolve the terminal color to a high-resolution color.
    ///
    /// Like [`Sampler::try_high_res`], except that the terminal default
    /// resolves to the theme's default foreground or background color,
    /// depending on the given layer.
    pub fn to_high_res(&self, color: TerminalColor, layer: Layer) -> Color {
        match color {
            TerminalColor::Default => self.theme[layer].clone(),
            _ => self.try_high_res(color).unwrap(),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert the high-resolution color into an ANSI color.
    ///
    /// If available, this method utilizes [`Sampler::to_ansi_hue_lightness`]
    /// to find a suitable ANSI color based on hue and lightness. If the
    /// current theme does not meet the requirements for that search, this
    /// method falls back onto [`Sampler::to_closest_ansi`], which searches
    /// for the closest matching ANSI color.
    pub fn to_ansi(&self, color: &Color) -> AnsiColor {
        self.to_ansi_hue_lightness(color)
            .unwrap_or_else(|| self.to_closest_ansi(color))
    }

    /// Determine whether this sampler instance supports color translation
    /// with the hue/lightness algorithm.
    pub fn supports_hue_lightness(&self) -> bool {
        self.hue_lightness_table.is_some()
    }

    /// Convert the high-resolution color to ANSI based on hue h and revised
    /// lightness Lr.
    ///
    /// For grays, this method finds the ANSI gray with the closest lightness.
    /// For colors, this method first finds the pair of regular and bright
    /// ANSI colors with the closest hue and then selects the one with the
    /// closest lightness.
    ///
    /// This method requires that concrete theme colors and abstract ANSI
    /// colors are (loosely) aligned. Notably, the color values for pairs of
    /// regular and bright ANSI colors must be in order red, yellow, green,
    /// cyan, blue, and magenta when traversing hues counter-clockwise, i.e.,
    /// with increasing hue magnitude. Note that this does allow hues to be
    /// arbitrarily shifted along the circle. Furthermore, it does not
    /// prescribe an order for regular and bright versions of the same
    /// abstract ANSI color. If the theme colors passed to this sampler's
    /// constructor did not meet this requirement, this method returns `None`.
    pub fn to_ansi_hue_lightness(&self, color: &Color) -> Option<AnsiColor> {
        self.hue_lightness_table
            .as_ref()
            .map(|t| t.find_match(color))
    }

    /// Find the ANSI color that comes perceptually closest to the given
    /// color.
    ///
    /// This method converts the given color to this sampler's Cartesian Oklab
    /// version and then searches the 16 theme colors, converted at sampler
    /// construction, for the one with the smallest Delta E OK. Ties go to the
    /// ANSI color with the smaller index.
    ///
    /// Matching by minimal distance is a common approach and produces
    /// reasonable results for most colors. It may, however, select a gray for
    /// a saturated color when the theme provides no good chromatic match;
    /// [`Sampler::to_ansi_hue_lightness`] is designed to avoid just that.
    pub fn to_closest_ansi(&self, color: &Color) -> AnsiColor {
        let color = color.to(self.space);
        find_closest(color.as_ref(), &self.ansi, delta_e_ok)
            .map(|index| AnsiColor::try_from(index as u8).unwrap())
            .unwrap()
    }

    /// Convert the high-resolution color to an ANSI color in sRGB.
    ///
    /// This method performs an alternate conversion from high-resolution
    /// color to ANSI color that matches in sRGB instead of Oklab: It clips
    /// the given color to the sRGB gamut and then picks the theme color with
    /// the minimal Euclidian distance between the raw sRGB coordinates.
    ///
    /// The sRGB-based match weighs hue, chroma, and lightness differently
    /// than the perceptual match and hence tends to stay truer to hue at the
    /// cost of lightness. It exists because some users prefer just that
    /// trade-off.
    pub fn to_ansi_in_rgb(&self, color: &Color) -> AnsiColor {
        let color = color.to(ColorSpace::Srgb).clip();
        find_closest(color.as_ref(), &self.ansi_in_rgb, euclidean_distance)
            .map(|index| AnsiColor::try_from(index as u8).unwrap())
            .unwrap()
    }

    /// Find the 8-bit color that comes closest to the given color and return
    /// its index.
    ///
    /// The search covers the embedded RGB cube and the gray gradient, i.e.,
    /// indices `16..=255`, but *not* the ANSI colors. They are excluded
    /// because their appearance depends on the current color theme, which
    /// rarely improves 8-bit matches. The given color is clipped to the sRGB
    /// gamut and matched by Euclidian distance between raw sRGB coordinates.
    pub fn to_closest_8bit_raw(&self, color: &Color) -> u8 {
        let color = color.to(ColorSpace::Srgb).clip();
        find_closest(color.as_ref(), &self.eight_bit, euclidean_distance)
            .map(|index| index as u8 + 16)
            .unwrap()
    }

    /// Find the 8-bit color that comes closest to the given color.
    ///
    /// Like [`Sampler::to_closest_8bit_raw`], but with the resulting index
    /// wrapped as a [`TerminalColor`].
    pub fn to_closest_8bit(&self, color: &Color) -> TerminalColor {
        TerminalColor::from_8bit(self.to_closest_8bit_raw(color))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Adjust the terminal color to the fidelity.
    ///
    /// This method ensures that the given color can be displayed with the
    /// given fidelity, downsampling it if necessary. In particular:
    ///
    ///   * Return `None` if the fidelity is plain-text or no-color;
    ///   * Downsample 24-bit and 8-bit colors if the fidelity is ANSI-colors;
    ///   * Downsample 24-bit colors if the fidelity is 8-bit-colors;
    ///   * Pass through the color if the fidelity is 24-bit-colors.
    ///
    /// The terminal default passes through all three color fidelities, since
    /// every color-capable terminal renders it.
    pub fn adjust(
        &self,
        color: impl Into<TerminalColor>,
        fidelity: Fidelity,
    ) -> Option<TerminalColor> {
        let color = color.into();
        match fidelity {
            Fidelity::Plain | Fidelity::NoColor => None,
            Fidelity::Ansi => {
                let c = match color {
                    TerminalColor::Default | TerminalColor::Ansi(_) => {
                        return Some(color);
                    }
                    TerminalColor::Rgb6(c) => Color::from(c),
                    TerminalColor::Gray(c) => Color::from(c),
                    TerminalColor::Rgb256(c) => Color::from(c),
                };

                Some(TerminalColor::Ansi(self.to_closest_ansi(&c)))
            }
            Fidelity::EightBit => {
                if let TerminalColor::Rgb256(c) = color {
                    Some(self.to_closest_8bit(&Color::from(c)))
                } else {
                    Some(color)
                }
            }
            Fidelity::Full => Some(color),
        }
    }
}

impl std::fmt::Debug for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler")
            .field(
                "version",
                &if self.space == ColorSpace::Oklab {
                    OkVersion::Original
                } else {
                    OkVersion::Revised
                },
            )
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Sampler;
    use crate::termco::{AnsiColor, EmbeddedRgb, Fidelity, GrayGradient, Layer, TerminalColor};
    use crate::theme::VGA_COLORS;
    use crate::{Color, OkVersion};
    use std::str::FromStr;

    fn sampler() -> Sampler {
        Sampler::new(OkVersion::Revised, VGA_COLORS.clone())
    }

    #[test]
    fn test_high_res() {
        let sampler = sampler();

        let blue = sampler.to_high_res_8bit(4);
        assert_eq!(blue, Color::srgb(0.0, 0.0, 170.0 / 255.0));

        let red196 = sampler.to_high_res_8bit(196);
        assert_eq!(red196, Color::from_24bit(255, 0, 0));

        let gray244 = sampler.to_high_res_8bit(244);
        assert_eq!(gray244, Color::from_24bit(128, 128, 128));

        assert_eq!(sampler.try_high_res(TerminalColor::Default), None);
        assert_eq!(
            sampler.try_high_res(TerminalColor::Ansi(AnsiColor::Blue)),
            Some(blue.clone())
        );
        assert_eq!(
            sampler.to_high_res(TerminalColor::Default, Layer::Foreground),
            Color::srgb(0.0, 0.0, 0.0)
        );
        assert_eq!(
            sampler.to_high_res(TerminalColor::Default, Layer::Background),
            Color::srgb(1.0, 1.0, 1.0)
        );
        assert_eq!(
            sampler.to_high_res(TerminalColor::Ansi(AnsiColor::Blue), Layer::Foreground),
            blue
        );
    }

    #[test]
    fn test_closest_ansi() {
        let sampler = sampler();

        // The theme's own colors are their own best matches.
        for index in 0..=15_u8 {
            let ansi = AnsiColor::try_from(index).unwrap();
            let color = sampler.to_high_res_8bit(index);
            assert_eq!(sampler.to_closest_ansi(&color), ansi, "{}", ansi.name());
        }

        // VGA's bright red is much closer to the pure red primary than its
        // rather dark nonbright red.
        assert_eq!(
            sampler.to_closest_ansi(&Color::srgb(1.0, 0.0, 0.0)),
            AnsiColor::BrightRed
        );
        assert_eq!(
            sampler.to_closest_ansi(&Color::srgb(1.0, 1.0, 0.0)),
            AnsiColor::BrightYellow
        );
    }

    #[test]
    fn test_ansi_in_rgb() {
        let sampler = sampler();

        for index in 0..=15_u8 {
            let ansi = AnsiColor::try_from(index).unwrap();
            let color = sampler.to_high_res_8bit(index);
            assert_eq!(sampler.to_ansi_in_rgb(&color), ansi, "{}", ansi.name());
        }

        assert_eq!(
            sampler.to_ansi_in_rgb(&Color::srgb(1.0, 0.1, 0.1)),
            AnsiColor::BrightRed
        );
    }

    #[test]
    fn test_hue_lightness() {
        let sampler = sampler();
        assert!(sampler.supports_hue_lightness());

        // Both orange tones match the yellow pair by hue and then bright
        // yellow by lightness.
        let orange1 = Color::from_str("#ffa563").unwrap();
        let orange2 = Color::from_str("#ff9600").unwrap();
        assert_eq!(
            sampler.to_ansi_hue_lightness(&orange1),
            Some(AnsiColor::BrightYellow)
        );
        assert_eq!(
            sampler.to_ansi_hue_lightness(&orange2),
            Some(AnsiColor::BrightYellow)
        );

        // By contrast, the closest-color search settles on white and bright
        // red, respectively.
        assert_eq!(sampler.to_closest_ansi(&orange1), AnsiColor::White);
        assert_eq!(sampler.to_closest_ansi(&orange2), AnsiColor::BrightRed);

        // Grays match by lightness alone.
        assert_eq!(
            sampler.to_ansi_hue_lightness(&Color::srgb(0.12, 0.12, 0.12)),
            Some(AnsiColor::Black)
        );
        assert_eq!(
            sampler.to_ansi_hue_lightness(&Color::srgb(0.95, 0.95, 0.95)),
            Some(AnsiColor::BrightWhite)
        );
    }

    #[test]
    fn test_closest_8bit() {
        let sampler = sampler();

        // The embedded RGB cube and the gray gradient are fixed points.
        for r in 0..6_u8 {
            for g in 0..6_u8 {
                for b in 0..6_u8 {
                    let embedded = EmbeddedRgb::new(r, g, b).unwrap();
                    let index = u8::from(embedded);
                    let color = Color::from(embedded);
                    assert_eq!(sampler.to_closest_8bit_raw(&color), index);
                }
            }
        }

        for level in 0..24_u8 {
            let gray = GrayGradient::new(level).unwrap();
            let index = u8::from(gray);
            let color = Color::from(gray);
            assert_eq!(sampler.to_closest_8bit_raw(&color), index);
        }

        assert_eq!(
            sampler.to_closest_8bit(&Color::from_24bit(255, 0, 0)),
            TerminalColor::from_8bit(196)
        );
    }

    #[test]
    fn test_adjust() {
        let sampler = sampler();

        let samples = [
            TerminalColor::Default,
            TerminalColor::Ansi(AnsiColor::BrightCyan),
            TerminalColor::from_8bit(40),
            TerminalColor::from_8bit(244),
            TerminalColor::from_24bit(255_u8, 0_u8, 0_u8),
        ];

        for color in samples {
            // Full fidelity passes every color through; no-color and plain
            // strip every color.
            assert_eq!(sampler.adjust(color, Fidelity::Full), Some(color));
            assert_eq!(sampler.adjust(color, Fidelity::NoColor), None);
            assert_eq!(sampler.adjust(color, Fidelity::Plain), None);
        }

        // ANSI fidelity passes defaults and ANSI colors through and
        // downsamples everything else.
        assert_eq!(
            sampler.adjust(TerminalColor::Default, Fidelity::Ansi),
            Some(TerminalColor::Default)
        );
        assert_eq!(
            sampler.adjust(AnsiColor::Magenta, Fidelity::Ansi),
            Some(TerminalColor::Ansi(AnsiColor::Magenta))
        );
        assert_eq!(
            sampler.adjust(TerminalColor::from_24bit(255_u8, 0_u8, 0_u8), Fidelity::Ansi),
            Some(TerminalColor::Ansi(AnsiColor::BrightRed))
        );

        // Eight-bit fidelity downsamples 24-bit colors only.
        assert_eq!(
            sampler.adjust(TerminalColor::from_8bit(40), Fidelity::EightBit),
            Some(TerminalColor::from_8bit(40))
        );
        assert_eq!(
            sampler.adjust(
                TerminalColor::from_24bit(255_u8, 0_u8, 0_u8),
                Fidelity::EightBit
            ),
            Some(TerminalColor::from_8bit(196))
        );
    }
}
