//! 24-bit pixel and channel selection.

use bytemuck::{Pod, Zeroable};
use strum_macros::{Display, EnumIter, EnumString};

/// Constrains `value` to the closed range `[low, high]`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Saturates an integer into the `u8` channel range.
#[inline]
pub(crate) fn saturate(value: i64) -> u8 {
    clamp(value, 0, u8::MAX as i64) as u8
}

/// Converts a normalized `[0, 1]` value back to a channel, rounding half up.
#[inline]
pub(crate) fn denormalize(value: f32) -> u8 {
    clamp(value * 255.0 + 0.5, 0.0, 255.0) as u8
}

#[inline]
pub(crate) fn normalize(value: u8) -> f32 {
    value as f32 / 255.0
}

/// One truecolor sample.
///
/// Field order is the on-disk order (blue, green, red), so a `[Pixel]` slice
/// can be cast to and from its serialized bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Creates a pixel from channels given in red, green, blue order.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// Returns `(red, green, blue)`.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}
