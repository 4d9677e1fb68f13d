pub(crate) mod error;
pub(crate) mod pixel;
#[cfg(test)]
pub(crate) mod test_utils;

// Public API
pub use error::{Error, Result};
pub use pixel::{clamp, Channel, Pixel};
