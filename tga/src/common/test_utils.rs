use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::prelude::*;

/// Builds an image from `(red, green, blue)` triples in row-major order.
pub fn image_from_rgb(width: i16, height: i16, rgb: &[(u8, u8, u8)]) -> Image {
    let pixels = rgb.iter().copied().map(Pixel::from).collect();
    Image::new_with_pixels(Header::new(width, height), pixels).unwrap()
}

pub fn solid_image(width: i16, height: i16, pixel: Pixel) -> Image {
    let count = width as usize * height as usize;
    Image::new_with_pixels(Header::new(width, height), vec![pixel; count]).unwrap()
}

/// Image filled with reproducible noise.
pub fn random_image(width: i16, height: i16, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = width as usize * height as usize;
    let pixels = (0..count)
        .map(|_| Pixel::new(rng.random(), rng.random(), rng.random()))
        .collect();
    Image::new_with_pixels(Header::new(width, height), pixels).unwrap()
}

/// Same as [`random_image`] but with randomized pass-through header fields.
pub fn random_image_with_metadata(width: i16, height: i16, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let mut image = random_image(width, height, seed);
    let header = Header {
        id_length: rng.random(),
        color_map_type: rng.random(),
        color_map_origin: rng.random(),
        color_map_length: rng.random(),
        color_map_depth: rng.random(),
        x_origin: rng.random(),
        y_origin: rng.random(),
        image_descriptor: rng.random(),
        ..*image.header()
    };
    image.set_header(header).unwrap();
    image
}
