use std::io::{Read, Write};

use log::trace;

use super::header::{Header, HEADER_SIZE};
use super::Image;
use crate::common::{Error, Pixel, Result};

/// Pixels decoded per `read_exact` call.
const READ_CHUNK_PIXELS: usize = 4096;

/// Empty buffer with room for `count` pixels. Capacity is reserved, not filled.
pub(crate) fn reserve_pixels(count: usize) -> Result<Vec<Pixel>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| Error::Allocation(count))?;

    Ok(pixels)
}

pub(crate) fn alloc_pixels(count: usize) -> Result<Vec<Pixel>> {
    let mut pixels = reserve_pixels(count)?;
    pixels.resize(count, Pixel::default());

    Ok(pixels)
}

pub(crate) fn read<R: Read>(mut reader: R) -> Result<Image> {
    let mut header_bytes = [0u8; HEADER_SIZE];
    reader
        .read_exact(&mut header_bytes)
        .map_err(|e| Error::from_read(e, "header"))?;

    let header = Header::from_bytes(&header_bytes);
    let count = header.pixel_count()?;
    trace!("Decoding {} ({} pixels)", header, count);

    // Pixels are only written as bytes arrive, so a short stream fails
    // before the reserved buffer is touched.
    let mut pixels = reserve_pixels(count)?;
    let mut chunk = [Pixel::default(); READ_CHUNK_PIXELS];
    while pixels.len() < count {
        let n = (count - pixels.len()).min(READ_CHUNK_PIXELS);
        reader
            .read_exact(bytemuck::cast_slice_mut(&mut chunk[..n]))
            .map_err(|e| Error::from_read(e, "pixel data"))?;
        pixels.extend_from_slice(&chunk[..n]);
    }

    Ok(Image { header, pixels })
}

pub(crate) fn write<W: Write>(image: &Image, mut writer: W) -> Result<()> {
    let expected = image.header.pixel_count()?;
    super::check_len(expected, image.pixels.len())?;

    writer.write_all(&image.header.to_bytes())?;
    writer.write_all(bytemuck::cast_slice(&image.pixels))?;

    Ok(())
}
