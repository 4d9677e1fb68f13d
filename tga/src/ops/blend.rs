use log::trace;
use strum_macros::{Display, EnumIter, EnumString};

use super::ensure_same_size;
use crate::common::pixel::{denormalize, normalize, saturate};
use crate::common::{Channel, Result};
use crate::image::Image;

/// Blend modes for combining an image with an operand of the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BlendMode {
    /// result = image * operand
    Multiply,
    /// result = image - operand, on raw values, clamped at 0
    Subtract,
    /// result = 1 - (1 - image) * (1 - operand)
    Screen,
    /// Multiply where the operand is dark, screen where it is light.
    Overlay,
}

impl BlendMode {
    /// Blends one channel value of the receiver with the operand's value.
    #[inline]
    pub fn blend(self, value: u8, operand: u8) -> u8 {
        if self == BlendMode::Subtract {
            return saturate(value as i64 - operand as i64);
        }

        let a = normalize(value);
        let b = normalize(operand);
        let result = match self {
            BlendMode::Multiply => a * b,
            BlendMode::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            BlendMode::Overlay => {
                if b <= 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            }
            BlendMode::Subtract => unreachable!(),
        };

        denormalize(result)
    }
}

impl Image {
    /// Blends every pixel with the pixel at the same index in `operand`.
    ///
    /// Fails with [`crate::Error::DimensionMismatch`] if the pixel counts
    /// differ; the receiver is left untouched in that case.
    pub fn blend(&mut self, operand: &Image, mode: BlendMode) -> Result<&mut Self> {
        ensure_same_size(self, operand)?;
        trace!("Blending {} pixels ({})", self.pixel_count(), mode);

        for (pixel, other) in self.pixels_mut().iter_mut().zip(operand.pixels()) {
            for channel in [Channel::Red, Channel::Green, Channel::Blue] {
                let value = pixel.channel_mut(channel);
                *value = mode.blend(*value, other.channel(channel));
            }
        }

        Ok(self)
    }

    pub fn multiply(&mut self, operand: &Image) -> Result<&mut Self> {
        self.blend(operand, BlendMode::Multiply)
    }

    pub fn subtract(&mut self, operand: &Image) -> Result<&mut Self> {
        self.blend(operand, BlendMode::Subtract)
    }

    pub fn screen(&mut self, operand: &Image) -> Result<&mut Self> {
        self.blend(operand, BlendMode::Screen)
    }

    pub fn overlay(&mut self, operand: &Image) -> Result<&mut Self> {
        self.blend(operand, BlendMode::Overlay)
    }
}
