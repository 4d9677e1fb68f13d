use crate::common::{Error, Result};

/// Size of the serialized header in bytes.
pub const HEADER_SIZE: usize = 18;

/// Data type code for uncompressed truecolor images.
pub const TRUECOLOR_DATA_TYPE: u8 = 2;

pub const TRUECOLOR_BITS_PER_PIXEL: u8 = 24;

/// Fixed 18-byte metadata block preceding the pixel data.
///
/// Geometry fields keep the signed on-disk representation. Everything except
/// `width`, `height` and `bits_per_pixel` is passed through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Header {
    pub id_length: u8,
    pub color_map_type: u8,
    pub data_type_code: u8,
    pub color_map_origin: i16,
    pub color_map_length: i16,
    pub color_map_depth: u8,
    pub x_origin: i16,
    pub y_origin: i16,
    pub width: i16,
    pub height: i16,
    pub bits_per_pixel: u8,
    pub image_descriptor: u8,
}

impl Header {
    /// Uncompressed 24-bit header with all other fields zeroed.
    pub fn new(width: i16, height: i16) -> Self {
        Self {
            data_type_code: TRUECOLOR_DATA_TYPE,
            width,
            height,
            bits_per_pixel: TRUECOLOR_BITS_PER_PIXEL,
            ..Default::default()
        }
    }

    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let le = |at: usize| i16::from_le_bytes([bytes[at], bytes[at + 1]]);

        Self {
            id_length: bytes[0],
            color_map_type: bytes[1],
            data_type_code: bytes[2],
            color_map_origin: le(3),
            color_map_length: le(5),
            color_map_depth: bytes[7],
            x_origin: le(8),
            y_origin: le(10),
            width: le(12),
            height: le(14),
            bits_per_pixel: bytes[16],
            image_descriptor: bytes[17],
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        let mut put = |at: usize, value: i16| {
            bytes[at..at + 2].copy_from_slice(&value.to_le_bytes());
        };
        put(3, self.color_map_origin);
        put(5, self.color_map_length);
        put(8, self.x_origin);
        put(10, self.y_origin);
        put(12, self.width);
        put(14, self.height);

        bytes[0] = self.id_length;
        bytes[1] = self.color_map_type;
        bytes[2] = self.data_type_code;
        bytes[7] = self.color_map_depth;
        bytes[16] = self.bits_per_pixel;
        bytes[17] = self.image_descriptor;

        bytes
    }

    /// Rejects non-positive geometry and a zero bit depth.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::MalformedHeader(format!(
                "invalid dimensions {}x{}",
                self.width, self.height
            )));
        }
        if self.bits_per_pixel == 0 {
            return Err(Error::MalformedHeader(
                "bits per pixel must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Number of pixels the header describes. Validates first.
    pub fn pixel_count(&self) -> Result<usize> {
        self.validate()?;

        let width = self.width as usize;
        let height = self.height as usize;
        width
            .checked_mul(height)
            .ok_or(Error::Allocation(usize::MAX))
    }

    /// Bytes occupied by the pixel data that follows the header.
    pub fn pixel_data_size(&self) -> Result<usize> {
        let count = self.pixel_count()?;
        count
            .checked_mul(std::mem::size_of::<crate::Pixel>())
            .ok_or(Error::Allocation(count))
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {}bpp (type {})",
            self.width, self.height, self.bits_per_pixel, self.data_type_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; HEADER_SIZE] = [
        0x05, 0x00, 0x02, // id length, color map type, data type
        0x34, 0x12, 0xfe, 0xff, 0x18, // color map origin, length, depth
        0x0a, 0x00, 0xf6, 0xff, // x origin, y origin
        0x00, 0x02, 0x80, 0x01, // width, height
        0x18, 0x20, // bpp, descriptor
    ];

    #[test]
    fn parses_little_endian_fields_in_order() {
        let header = Header::from_bytes(&SAMPLE);
        assert_eq!(header.id_length, 5);
        assert_eq!(header.color_map_type, 0);
        assert_eq!(header.data_type_code, 2);
        assert_eq!(header.color_map_origin, 0x1234);
        assert_eq!(header.color_map_length, -2);
        assert_eq!(header.color_map_depth, 24);
        assert_eq!(header.x_origin, 10);
        assert_eq!(header.y_origin, -10);
        assert_eq!(header.width, 512);
        assert_eq!(header.height, 384);
        assert_eq!(header.bits_per_pixel, 24);
        assert_eq!(header.image_descriptor, 0x20);
    }

    #[test]
    fn serializes_back_to_same_bytes() {
        assert_eq!(Header::from_bytes(&SAMPLE).to_bytes(), SAMPLE);
    }

    #[test]
    fn new_is_truecolor() {
        let header = Header::new(3, 2);
        assert_eq!(header.data_type_code, TRUECOLOR_DATA_TYPE);
        assert_eq!(header.bits_per_pixel, TRUECOLOR_BITS_PER_PIXEL);
        assert_eq!(header.pixel_count().unwrap(), 6);
        assert_eq!(header.pixel_data_size().unwrap(), 18);
        assert_eq!(header.to_string(), "3x2 24bpp (type 2)");
    }

    #[test]
    fn validate_rejects_non_positive_geometry() {
        for (w, h) in [(0, 1), (1, 0), (-1, 5), (5, -1), (i16::MIN, i16::MIN)] {
            let result = Header::new(w, h).validate();
            assert!(matches!(result, Err(Error::MalformedHeader(_))), "{w}x{h}");
        }
    }

    #[test]
    fn validate_rejects_zero_bit_depth() {
        let header = Header {
            bits_per_pixel: 0,
            ..Header::new(1, 1)
        };
        assert!(matches!(header.validate(), Err(Error::MalformedHeader(_))));
        assert!(matches!(header.pixel_count(), Err(Error::MalformedHeader(_))));
    }

    #[test]
    fn largest_geometry_is_countable() {
        let header = Header::new(i16::MAX, i16::MAX);
        assert_eq!(
            header.pixel_count().unwrap(),
            i16::MAX as usize * i16::MAX as usize
        );
    }
}
