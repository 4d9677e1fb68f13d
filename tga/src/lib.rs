mod common;
mod image;
mod ops;

pub mod prelude;

pub use prelude::*;

// Error handling
pub use crate::common::{Error, Result};

// Pixel data
pub use crate::common::{clamp, Channel, Pixel};

// Image types
pub use crate::image::{
    Header, Image, HEADER_SIZE, TRUECOLOR_BITS_PER_PIXEL, TRUECOLOR_DATA_TYPE,
};

// Operations
pub use crate::ops::{BlendMode, Operation};
