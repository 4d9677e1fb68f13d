use log::trace;

use super::ensure_same_size;
use crate::common::Result;
use crate::image::Image;

impl Image {
    /// Keeps the red channel and takes green from `green` and blue from `blue`,
    /// index by index.
    ///
    /// Both sources must have the receiver's pixel count. Nothing is modified
    /// unless both checks pass.
    pub fn combine(&mut self, green: &Image, blue: &Image) -> Result<&mut Self> {
        ensure_same_size(self, green)?;
        ensure_same_size(self, blue)?;
        trace!("Combining channels of {} pixels", self.pixel_count());

        let sources = green.pixels().iter().zip(blue.pixels());
        for (pixel, (g, b)) in self.pixels_mut().iter_mut().zip(sources) {
            pixel.green = g.green;
            pixel.blue = b.blue;
        }

        Ok(self)
    }
}
