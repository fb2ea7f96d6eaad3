//! Uncompressed DDS texture encoding.
//!
//! Produces DirectDraw Surface files that Direct3D texture loaders accept
//! without any block decompression:
//! - a 4-byte `"DDS "` magic
//! - a 124-byte header describing one 32-bit mip level
//! - the pixels, row-major from the top row, stored B, G, R, A
//!
//! # Example
//!
//! ```
//! use iconbake_dds::encode;
//!
//! // A 2x1 image: opaque red, half-transparent green
//! let dds = encode(2, 1, &[255, 0, 0, 255, 0, 255, 0, 128])?;
//! assert_eq!(&dds[..4], b"DDS ");
//! assert_eq!(&dds[128..], &[0, 0, 255, 255, 0, 255, 0, 128]);
//! # Ok::<(), iconbake_dds::Error>(())
//! ```

mod convert;
mod encode;
mod error;
mod header;
mod swizzle;

pub use convert::{convert_png_to_dds, dds_path_for, load_rgba, write_dds_file, Conversion};
pub use encode::{encode, encode_image, write_dds};
pub use error::{Error, Result};
pub use header::{encode_header, DdsHeader, DdsPixelFormat, FourCC, HEADER_LEN};
pub use swizzle::{rgba_to_bgra, swap_red_blue_in_place};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
