pub use crate::common::{Channel, Error, Pixel, Result};
pub use crate::image::{Header, Image};
pub use crate::ops::{BlendMode, Operation};
