//! # Pretty 🌸 Pretty
//!
//! Prettypretty brings 2020s color science to 1970s terminals.
//!
//! ## Overview
//!
//! This crate's main abstractions are:
//!
//!   * [`Color`] implements **high-resolution colors** by combining a
//!     [`ColorSpace`] with three [`Float`] coordinates. Its methods expose
//!     much of this crate's functionality, including conversion between color
//!     spaces, interpolation between colors, calculation of perceptual
//!     contrast, as well as gamut testing, clipping, and mapping.
//!   * The [`termco`] module models **terminal colors**. Notably, the
//!     [`TerminalColor`](termco::TerminalColor) enum combines, in order from
//!     lowest to highest resolution, the terminal default,
//!     [`AnsiColor`](termco::AnsiColor), [`EmbeddedRgb`](termco::EmbeddedRgb),
//!     [`GrayGradient`](termco::GrayGradient), and
//!     [`TrueColor`](termco::TrueColor). The module also defines
//!     [`Layer`](termco::Layer) to distinguish between foreground and
//!     background colors and [`Fidelity`](termco::Fidelity) to represent a
//!     terminal's styling capabilities.
//!   * A [`Theme`](theme::Theme) captures the high-resolution color values of
//!     the terminal's two default and 16 extended ANSI colors.
//!   * [`Sampler`] implements **translation between color representations**.
//!     To ensure high quality results, its preferred algorithms leverage the
//!     perceptually uniform Oklab/Oklch color spaces. Since default and ANSI
//!     colors are abstract, translating to and from them also requires the
//!     terminal's current color [`Theme`](theme::Theme).
//!
//! Every value is immutable and every operation returns a new value, so
//! sharing a [`Sampler`] across threads requires no synchronization.
//!
//! ## Feature Flags
//!
//! This crate has one feature flag, **`f64`**, which is enabled by default.
//! When disabled, the crate uses `f32`. In either case, the currently active
//! floating point type is [`Float`] and the same-sized unsigned integer bits
//! are [`Bits`].
//!
//! Since many floating point operations require the `std` crate, a `no_std`
//! version of this crate is highly unlikely.
//!
//! ## Acknowledgements
//!
//! This crate directly reuses the conversion formulae collected by the
//! [Color.js](https://colorjs.io) library and implements several [CSS Color
//! 4](https://www.w3.org/TR/css-color-4/) algorithms.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
pub mod termco;
pub mod theme;
mod trans;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{ColorSpace, HueInterpolation};
pub use object::{Color, Interpolator, OkVersion};
pub use trans::Sampler;
