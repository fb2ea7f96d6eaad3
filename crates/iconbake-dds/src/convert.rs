//! Image file to DDS file conversion.

use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use image::{ImageError, RgbaImage};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::encode::write_dds;
use crate::{Error, Result};

/// Summary of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Size of the written DDS file.
    pub bytes_written: u64,
}

/// Decode an image file and normalize it to 8-bit RGBA.
///
/// Sources without alpha get an opaque channel; grayscale, palette and
/// 16-bit sources are expanded by the decoder.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let image = image::open(path).map_err(|source| match source {
        ImageError::IoError(e) if e.kind() == ErrorKind::NotFound => {
            Error::SourceNotFound(path.to_path_buf())
        }
        source => Error::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(path = %path.display(), color = ?image.color(), "decoded source image");
    Ok(image.into_rgba8())
}

/// Create the staging file for `dest` in `dir`.
///
/// New files get the usual `0o666` minus umask instead of the owner-only
/// temp file default; an existing destination keeps its own permissions.
fn staging_file(dir: &Path, dest: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    if let Ok(meta) = fs::metadata(dest) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

/// Write `image` to `path` as an uncompressed DDS file.
///
/// The file is assembled next to the destination and renamed into place
/// once flushed, so a failure never leaves a partial destination behind.
pub fn write_dds_file<P: AsRef<Path>>(path: P, image: &RgbaImage) -> Result<u64> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = staging_file(dir, path).map_err(write_err)?;

    let written = {
        let mut writer = BufWriter::new(&mut tmp);
        let written = write_dds(&mut writer, image.width(), image.height(), image.as_raw())
            .map_err(|e| match e {
                Error::Io(source) => write_err(source),
                other => other,
            })?;
        writer.flush().map_err(write_err)?;
        written
    };

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(written)
}

/// Convert a PNG (or any decodable image) to an uncompressed DDS file.
///
/// # Example
///
/// ```no_run
/// use iconbake_dds::convert_png_to_dds;
///
/// let done = convert_png_to_dds("art/chair.png", "art/chair.dds")?;
/// println!("{}x{}", done.width, done.height);
/// # Ok::<(), iconbake_dds::Error>(())
/// ```
pub fn convert_png_to_dds<P, Q>(source: P, destination: Q) -> Result<Conversion>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (source, destination) = (source.as_ref(), destination.as_ref());

    let image = load_rgba(source)?;
    let bytes_written = write_dds_file(destination, &image)?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        width = image.width(),
        height = image.height(),
        "converted image to DDS"
    );

    Ok(Conversion {
        width: image.width(),
        height: image.height(),
        bytes_written,
    })
}

/// Destination path with the extension replaced by `dds`.
pub fn dds_path_for<P: AsRef<Path>>(source: P) -> PathBuf {
    source.as_ref().with_extension("dds")
}
