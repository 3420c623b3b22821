use std::fmt;

use rand::Rng;
use thiserror::Error;

/// Error raised when a color channel is built from a value outside {0, 1}.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("{channel} channel must be 0 or 1, got {value}")]
    InvalidChannel { channel: &'static str, value: u8 },
}

/// A tile color: three independent on/off light channels.
///
/// Mixing is additive. Channels can only turn on, never off, so repeated
/// merges drive a tile toward white.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    r: bool,
    g: bool,
    b: bool,
}

impl Color {
    pub const BLACK: Self = Self::from_channels(false, false, false);
    pub const BLUE: Self = Self::from_channels(false, false, true);
    pub const GREEN: Self = Self::from_channels(false, true, false);
    pub const CYAN: Self = Self::from_channels(false, true, true);
    pub const RED: Self = Self::from_channels(true, false, false);
    pub const MAGENTA: Self = Self::from_channels(true, false, true);
    pub const YELLOW: Self = Self::from_channels(true, true, false);
    pub const WHITE: Self = Self::from_channels(true, true, true);

    /// Every reachable color, ordered by composite code.
    pub const ALL: [Self; 8] = [
        Self::BLACK,
        Self::BLUE,
        Self::GREEN,
        Self::CYAN,
        Self::RED,
        Self::MAGENTA,
        Self::YELLOW,
        Self::WHITE,
    ];

    /// Build a color from integer channel values.
    /// Each value must be 0 or 1; anything else is rejected.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, ColorError> {
        Ok(Self::from_channels(
            channel_bit("red", r)?,
            channel_bit("green", g)?,
            channel_bit("blue", b)?,
        ))
    }

    /// Build a color directly from channel flags.
    pub const fn from_channels(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }

    /// Draw a color with three independent random channel bits.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_channels(rng.random(), rng.random(), rng.random())
    }

    /// Additive merge: each channel is the OR of the operands' channels.
    ///
    /// Commutative and idempotent, with no inverse: black is the identity,
    /// white absorbs everything.
    pub const fn merge(self, other: Self) -> Self {
        Self::from_channels(self.r || other.r, self.g || other.g, self.b || other.b)
    }

    /// The three channel flags in (r, g, b) order.
    pub const fn channels(self) -> (bool, bool, bool) {
        (self.r, self.g, self.b)
    }

    /// Composite code: the channels packed as bits `r<<2 | g<<1 | b` (0..=7).
    pub const fn code(self) -> u8 {
        (self.r as u8) << 2 | (self.g as u8) << 1 | self.b as u8
    }

    /// Canonical name. Total over the 8 channel combinations by
    /// exhaustiveness, so an unnamed color cannot exist.
    pub const fn name(self) -> &'static str {
        match (self.r, self.g, self.b) {
            (false, false, false) => "black",
            (false, false, true) => "blue",
            (false, true, false) => "green",
            (false, true, true) => "cyan",
            (true, false, false) => "red",
            (true, false, true) => "magenta",
            (true, true, false) => "yellow",
            (true, true, true) => "white",
        }
    }

    /// Whether this is the cleared sentinel (black, all channels off).
    pub const fn is_cleared(self) -> bool {
        !(self.r || self.g || self.b)
    }

    /// Whether every channel is lit (white, the absorbing element).
    pub const fn is_white(self) -> bool {
        self.r && self.g && self.b
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interpret an integer channel value, rejecting anything but 0 or 1.
fn channel_bit(channel: &'static str, value: u8) -> Result<bool, ColorError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ColorError::InvalidChannel { channel, value }),
    }
}
