mod blend;
mod channel;
mod combine;
mod flip;
mod operation;


pub use blend::BlendMode;
pub use operation::Operation;

use crate::common::{Error, Result};
use crate::image::Image;

/// Binary operations are index-aligned and require equal pixel counts.
fn ensure_same_size(image: &Image, operand: &Image) -> Result<()> {
    if image.pixel_count() != operand.pixel_count() {
        return Err(Error::DimensionMismatch {
            expected: image.pixel_count(),
            actual: operand.pixel_count(),
        });
    }

    Ok(())
}
