//! DDS header structures.

use zerocopy::byteorder::{LittleEndian, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::{Error, Result, DDS_MAGIC};

type Le32 = U32<LittleEndian>;

/// Length of the magic plus the header structure.
pub const HEADER_LEN: usize = 4 + DdsHeader::SIZE as usize;

/// Bytes per pixel of the uncompressed 32-bit layout.
pub const BYTES_PER_PIXEL: u32 = 4;

/// `dwCaps` is valid.
pub const DDSD_CAPS: u32 = 0x1;
/// `dwHeight` is valid.
pub const DDSD_HEIGHT: u32 = 0x2;
/// `dwWidth` is valid.
pub const DDSD_WIDTH: u32 = 0x4;
/// `ddspf` is valid.
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
/// `dwMipMapCount` is valid.
pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
/// `dwPitchOrLinearSize` is valid.
pub const DDSD_LINEARSIZE: u32 = 0x80000;

/// Pixel format contains alpha data.
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
/// Pixel format contains uncompressed RGB data.
pub const DDPF_RGB: u32 = 0x40;

/// Surface is a texture.
pub const DDSCAPS_TEXTURE: u32 = 0x1000;

/// DDS file header.
///
/// Every field is stored little-endian, so the in-memory layout is the
/// on-disk layout and [`IntoBytes::as_bytes`] yields the 124 wire bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsHeader {
    /// Header size (always 124).
    pub size: Le32,
    /// Header flags.
    pub flags: Le32,
    /// Image height.
    pub height: Le32,
    /// Image width.
    pub width: Le32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: Le32,
    /// Depth (for volume textures).
    pub depth: Le32,
    /// Number of mipmap levels.
    pub mipmap_count: Le32,
    /// Reserved.
    pub reserved1: [Le32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: Le32,
    /// Surface capabilities 2.
    pub caps2: Le32,
    /// Surface capabilities 3.
    pub caps3: Le32,
    /// Surface capabilities 4.
    pub caps4: Le32,
    /// Reserved.
    pub reserved2: Le32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// Flags written for an uncompressed single-level texture.
    pub const RGBA32_FLAGS: u32 = DDSD_CAPS
        | DDSD_HEIGHT
        | DDSD_WIDTH
        | DDSD_PIXELFORMAT
        | DDSD_MIPMAPCOUNT
        | DDSD_LINEARSIZE;

    /// Build the header of an uncompressed 32-bit texture with one mip level.
    ///
    /// Fails with [`Error::InvalidDimensions`] when either side is zero or the
    /// row pitch would overflow the 32-bit pitch field.
    pub fn rgba32(width: u32, height: u32) -> Result<Self> {
        let pitch = width
            .checked_mul(BYTES_PER_PIXEL)
            .filter(|_| width > 0 && height > 0)
            .ok_or(Error::InvalidDimensions { width, height })?;

        Ok(Self {
            size: Le32::new(Self::SIZE),
            flags: Le32::new(Self::RGBA32_FLAGS),
            height: Le32::new(height),
            width: Le32::new(width),
            pitch_or_linear_size: Le32::new(pitch),
            depth: Le32::new(0),
            mipmap_count: Le32::new(1),
            reserved1: [Le32::new(0); 11],
            pixel_format: DdsPixelFormat::rgba32(),
            caps: Le32::new(DDSCAPS_TEXTURE),
            caps2: Le32::new(0),
            caps3: Le32::new(0),
            caps4: Le32::new(0),
            reserved2: Le32::new(0),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Bytes per row.
    pub fn pitch(&self) -> u32 {
        self.pitch_or_linear_size.get()
    }

    /// Serialize the magic followed by this header.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..DDS_MAGIC.len()].copy_from_slice(DDS_MAGIC);
        out[DDS_MAGIC.len()..].copy_from_slice(self.as_bytes());
        out
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsPixelFormat {
    /// Structure size (always 32).
    pub size: Le32,
    /// Pixel format flags.
    pub flags: Le32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: Le32,
    /// Red bit mask.
    pub r_bit_mask: Le32,
    /// Green bit mask.
    pub g_bit_mask: Le32,
    /// Blue bit mask.
    pub b_bit_mask: Le32,
    /// Alpha bit mask.
    pub a_bit_mask: Le32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// 32-bit pixels stored B, G, R, A in memory.
    pub fn rgba32() -> Self {
        Self {
            size: Le32::new(Self::SIZE),
            flags: Le32::new(DDPF_RGB | DDPF_ALPHAPIXELS),
            four_cc: FourCC::UNCOMPRESSED,
            rgb_bit_count: Le32::new(BYTES_PER_PIXEL * 8),
            r_bit_mask: Le32::new(0x00FF_0000),
            g_bit_mask: Le32::new(0x0000_FF00),
            b_bit_mask: Le32::new(0x0000_00FF),
            a_bit_mask: Le32::new(0xFF00_0000),
        }
    }
}

/// Four-character code for compression type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// No compression; pixel layout is described by the bit masks.
    pub const UNCOMPRESSED: Self = Self([0; 4]);
}

/// Build the 128-byte header (magic included) for a `width` x `height`
/// uncompressed 32-bit texture.
pub fn encode_header(width: u32, height: u32) -> Result<[u8; HEADER_LEN]> {
    DdsHeader::rgba32(width, height).map(|header| header.to_bytes())
}

#[cfg(test)]
mod tests {
    use byteorder::{ByteOrder, LittleEndian};

    use super::*;

    fn field(bytes: &[u8], offset: usize) -> u32 {
        LittleEndian::read_u32(&bytes[offset..offset + 4])
    }

    #[test]
    fn test_struct_sizes() {
        assert_eq!(std::mem::size_of::<DdsHeader>(), DdsHeader::SIZE as usize);
        assert_eq!(std::mem::size_of::<DdsPixelFormat>(), DdsPixelFormat::SIZE as usize);
        assert_eq!(HEADER_LEN, 128);
    }

    #[test]
    fn test_header_magic_and_length() {
        for (w, h) in [(1, 1), (2, 1), (64, 64), (300, 17)] {
            let bytes = encode_header(w, h).unwrap();
            assert_eq!(bytes.len(), 128);
            assert_eq!(&bytes[..4], b"DDS ");
        }
    }

    #[test]
    fn test_header_dimensions() {
        let bytes = encode_header(1024, 512).unwrap();
        assert_eq!(field(&bytes, 4), 124);
        assert_eq!(field(&bytes, 12), 512);
        assert_eq!(field(&bytes, 16), 1024);
    }

    #[test]
    fn test_header_pitch() {
        assert_eq!(field(&encode_header(4, 4).unwrap(), 20), 16);
        assert_eq!(field(&encode_header(256, 1).unwrap(), 20), 1024);
        assert_eq!(field(&encode_header(2, 1).unwrap(), 20), 8);
    }

    #[test]
    fn test_header_flags_and_caps() {
        let bytes = encode_header(16, 16).unwrap();
        assert_eq!(field(&bytes, 8), 0x000A_1007);
        assert_eq!(field(&bytes, 24), 0); // depth
        assert_eq!(field(&bytes, 28), 1); // mipmap count
        assert_eq!(field(&bytes, 108), 0x1000);
        for offset in [112, 116, 120, 124] {
            assert_eq!(field(&bytes, offset), 0);
        }
    }

    #[test]
    fn test_header_reserved_is_zero() {
        let bytes = encode_header(8, 8).unwrap();
        assert!(bytes[32..76].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_format_block() {
        let bytes = encode_header(8, 8).unwrap();
        assert_eq!(field(&bytes, 76), 32);
        assert_eq!(field(&bytes, 80), 0x41);
        assert_eq!(field(&bytes, 84), 0);
        assert_eq!(field(&bytes, 88), 32);
        assert_eq!(field(&bytes, 92), 0x00FF_0000);
        assert_eq!(field(&bytes, 96), 0x0000_FF00);
        assert_eq!(field(&bytes, 100), 0x0000_00FF);
        assert_eq!(field(&bytes, 104), 0xFF00_0000);
    }

    #[test]
    fn test_header_bytes_parse_back() {
        let bytes = encode_header(48, 24).unwrap();
        let header = DdsHeader::read_from_bytes(&bytes[4..]).unwrap();
        assert_eq!(header.width(), 48);
        assert_eq!(header.height(), 24);
        assert_eq!(header.pitch(), 192);
        assert_eq!(header.pixel_format, DdsPixelFormat::rgba32());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            DdsHeader::rgba32(0, 16),
            Err(Error::InvalidDimensions { width: 0, height: 16 })
        ));
        assert!(matches!(
            DdsHeader::rgba32(16, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_pitch_overflow_rejected() {
        assert!(matches!(
            DdsHeader::rgba32(u32::MAX / 4 + 1, 1),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(DdsHeader::rgba32(u32::MAX / 4, 1).is_ok());
    }
}
