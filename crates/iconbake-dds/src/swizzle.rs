//! RGBA to BGRA channel reordering.
//!
//! Decoders hand out pixels as R, G, B, A while the DDS body stores them as
//! B, G, R, A. Swapping red and blue is its own inverse, so the same routines
//! also convert BGRA back to RGBA.

use crate::header::BYTES_PER_PIXEL;
use crate::{Error, Result};

const PIXEL: usize = BYTES_PER_PIXEL as usize;

fn check_len(len: usize) -> Result<()> {
    if len % PIXEL != 0 {
        return Err(Error::MalformedPixels { len });
    }
    Ok(())
}

/// Copy `rgba` into a new buffer with red and blue swapped in every pixel.
pub fn rgba_to_bgra(rgba: &[u8]) -> Result<Vec<u8>> {
    let mut out = rgba.to_vec();
    swap_red_blue_in_place(&mut out)?;
    Ok(out)
}

/// Swap red and blue of every 4-byte pixel without allocating.
pub fn swap_red_blue_in_place(pixels: &mut [u8]) -> Result<()> {
    check_len(pixels.len())?;
    for px in pixels.chunks_exact_mut(PIXEL) {
        px.swap(0, 2);
    }
    Ok(())
}

/// Write the BGRA form of `rgba` into `out`, which must be the same length.
pub(crate) fn rgba_to_bgra_into(rgba: &[u8], out: &mut [u8]) -> Result<()> {
    check_len(rgba.len())?;
    if out.len() != rgba.len() {
        return Err(Error::BufferSizeMismatch {
            expected: rgba.len(),
            actual: out.len(),
        });
    }
    for (src, dst) in rgba.chunks_exact(PIXEL).zip(out.chunks_exact_mut(PIXEL)) {
        dst.copy_from_slice(&[src[2], src[1], src[0], src[3]]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swaps_red_and_blue() {
        let rgba = [255, 0, 0, 255, 0, 255, 0, 128];
        assert_eq!(rgba_to_bgra(&rgba).unwrap(), vec![0, 0, 255, 255, 0, 255, 0, 128]);
    }

    #[test]
    fn test_double_application_is_identity() {
        let rgba: Vec<u8> = (0..=255u8).cycle().take(4 * 97).collect();
        let once = rgba_to_bgra(&rgba).unwrap();
        assert_ne!(once, rgba);
        assert_eq!(rgba_to_bgra(&once).unwrap(), rgba);
    }

    #[test]
    fn test_length_preserved() {
        for len in [0, 4, 8, 1024] {
            let data = vec![7u8; len];
            assert_eq!(rgba_to_bgra(&data).unwrap().len(), len);
        }
    }

    #[test]
    fn test_partial_pixel_rejected() {
        for len in [1, 2, 3, 5, 6, 7] {
            let data = vec![0u8; len];
            assert!(matches!(
                rgba_to_bgra(&data),
                Err(Error::MalformedPixels { len: l }) if l == len
            ));
        }
        assert!(rgba_to_bgra(&[0u8; 8]).is_ok());
    }

    #[test]
    fn test_in_place_matches_copy() {
        let rgba = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let mut buf = rgba;
        swap_red_blue_in_place(&mut buf).unwrap();
        assert_eq!(buf.to_vec(), rgba_to_bgra(&rgba).unwrap());
        assert_eq!(buf, [3, 2, 1, 4, 7, 6, 5, 8, 11, 10, 9, 12]);
    }

    #[test]
    fn test_into_checks_output_length() {
        let rgba = [1, 2, 3, 4];
        let mut short = [0u8; 3];
        assert!(matches!(
            rgba_to_bgra_into(&rgba, &mut short),
            Err(Error::BufferSizeMismatch { expected: 4, actual: 3 })
        ));

        let mut out = [0u8; 4];
        rgba_to_bgra_into(&rgba, &mut out).unwrap();
        assert_eq!(out, [3, 2, 1, 4]);
    }
}
