mod header;
mod io;


use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::common::{Error, Pixel, Result};

pub use header::{Header, HEADER_SIZE, TRUECOLOR_BITS_PER_PIXEL, TRUECOLOR_DATA_TYPE};

/// Header plus a flat, row-major pixel sequence.
///
/// Outside of [`Image::default`], the pixel count always equals
/// `width * height` of the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    header: Header,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Allocates a black image for `header`.
    pub fn new(header: Header) -> Result<Image> {
        let pixels = io::alloc_pixels(header.pixel_count()?)?;

        Ok(Image { header, pixels })
    }

    pub fn new_with_pixels(header: Header, pixels: Vec<Pixel>) -> Result<Image> {
        check_len(header.pixel_count()?, pixels.len())?;

        Ok(Image { header, pixels })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Replaces the header. The new header must describe the current pixel count.
    pub fn set_header(&mut self, header: Header) -> Result<()> {
        check_len(header.pixel_count()?, self.pixels.len())?;
        self.header = header;

        Ok(())
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn take_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Replaces the pixel data. Length must match the header.
    pub fn set_pixels(&mut self, pixels: Vec<Pixel>) -> Result<()> {
        check_len(self.pixels.len(), pixels.len())?;
        self.pixels = pixels;

        Ok(())
    }

    pub fn width(&self) -> i16 {
        self.header.width
    }

    pub fn height(&self) -> i16 {
        self.header.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x` of row `y`, counted in storage order.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&Pixel> {
        let width = self.header.width.max(0) as usize;
        let height = self.header.height.max(0) as usize;
        if x >= width || y >= height {
            return None;
        }
        self.pixels.get(y * width + x)
    }

    /// Decodes a complete image from `reader`.
    pub fn read<R: Read>(reader: R) -> Result<Image> {
        io::read(reader)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Image> {
        io::read(bytes)
    }

    pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Image> {
        let filename = filename.as_ref();
        let file = File::open(filename)?;
        let image = io::read(BufReader::new(file))?;

        debug!("Read {} from {}", image.header, filename.display());

        Ok(image)
    }

    /// Encodes the image into `writer`.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        io::write(self, writer)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + self.pixels.len() * 3);
        io::write(self, &mut bytes)?;

        Ok(bytes)
    }

    pub fn save_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let filename = filename.as_ref();
        let mut writer = BufWriter::new(File::create(filename)?);
        io::write(self, &mut writer)?;
        writer.flush()?;

        debug!("Wrote {} to {}", self.header, filename.display());

        Ok(())
    }
}

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch { expected, actual });
    }

    Ok(())
}
