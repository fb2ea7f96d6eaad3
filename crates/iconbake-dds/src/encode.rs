//! Uncompressed DDS encoding.

use std::io::Write;

use image::RgbaImage;

use crate::header::{DdsHeader, BYTES_PER_PIXEL, HEADER_LEN};
use crate::swizzle::rgba_to_bgra_into;
use crate::{Error, Result};

/// Validate dimensions and return the body size in bytes.
fn body_len(header: &DdsHeader, rgba: &[u8]) -> Result<usize> {
    let (width, height) = (header.width(), header.height());
    let expected = (height as usize)
        .checked_mul(header.pitch() as usize)
        .ok_or(Error::InvalidDimensions { width, height })?;

    if rgba.len() != expected {
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }
    Ok(expected)
}

/// Encode a top-to-bottom RGBA buffer as a complete DDS file.
///
/// # Arguments
///
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `rgba` - `width * height * 4` bytes of R, G, B, A pixels
///
/// # Returns
///
/// The 128-byte header followed by the pixels in B, G, R, A order.
pub fn encode(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    let header = DdsHeader::rgba32(width, height)?;
    let len = body_len(&header, rgba)?;

    let mut out = Vec::with_capacity(HEADER_LEN + len);
    out.extend_from_slice(&header.to_bytes());
    out.resize(HEADER_LEN + len, 0);
    rgba_to_bgra_into(rgba, &mut out[HEADER_LEN..])?;

    Ok(out)
}

/// Encode a decoded RGBA image.
pub fn encode_image(image: &RgbaImage) -> Result<Vec<u8>> {
    encode(image.width(), image.height(), image.as_raw())
}

/// Stream a DDS file to `writer`, reordering one row at a time.
///
/// Returns the number of bytes written.
pub fn write_dds<W: Write>(writer: &mut W, width: u32, height: u32, rgba: &[u8]) -> Result<u64> {
    let header = DdsHeader::rgba32(width, height)?;
    let len = body_len(&header, rgba)?;

    writer.write_all(&header.to_bytes())?;

    let pitch = (width * BYTES_PER_PIXEL) as usize;
    let mut row = vec![0u8; pitch];
    for src in rgba.chunks_exact(pitch) {
        rgba_to_bgra_into(src, &mut row)?;
        writer.write_all(&row)?;
    }

    Ok((HEADER_LEN + len) as u64)
}

#[cfg(test)]
mod tests {
    use byteorder::{ByteOrder, LittleEndian};
    use image::Rgba;

    use super::*;

    #[test]
    fn test_encode_two_pixels() {
        let rgba = [255, 0, 0, 255, 0, 255, 0, 128];
        let dds = encode(2, 1, &rgba).unwrap();

        assert_eq!(dds.len(), 128 + 8);
        assert_eq!(&dds[..4], b"DDS ");
        assert_eq!(LittleEndian::read_u32(&dds[12..16]), 1);
        assert_eq!(LittleEndian::read_u32(&dds[16..20]), 2);
        assert_eq!(LittleEndian::read_u32(&dds[20..24]), 8);
        assert_eq!(&dds[128..], &[0x00, 0x00, 0xFF, 0xFF, 0x00, 0xFF, 0x00, 0x80]);
    }

    #[test]
    fn test_encode_rejects_wrong_buffer_size() {
        assert!(matches!(
            encode(2, 2, &[0u8; 12]),
            Err(Error::BufferSizeMismatch { expected: 16, actual: 12 })
        ));
    }

    #[test]
    fn test_encode_rejects_zero_dimensions() {
        assert!(matches!(
            encode(0, 0, &[]),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_write_matches_encode() {
        let rgba: Vec<u8> = (0..3 * 5 * 4).map(|i| i as u8).collect();
        let expected = encode(3, 5, &rgba).unwrap();

        let mut streamed = Vec::new();
        let written = write_dds(&mut streamed, 3, 5, &rgba).unwrap();

        assert_eq!(written, expected.len() as u64);
        assert_eq!(streamed, expected);
    }

    #[test]
    fn test_rows_stay_top_to_bottom() {
        let mut image = RgbaImage::new(1, 2);
        image.put_pixel(0, 0, Rgba([10, 20, 30, 40]));
        image.put_pixel(0, 1, Rgba([50, 60, 70, 80]));

        let dds = encode_image(&image).unwrap();
        assert_eq!(&dds[128..], &[30, 20, 10, 40, 70, 60, 50, 80]);
    }
}
