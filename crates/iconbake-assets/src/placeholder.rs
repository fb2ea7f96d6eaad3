//! Placeholder icons copied from an existing file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::template::TemplateSet;
use crate::{Error, Result};

/// Which destinations a placeholder run created and which it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderReport {
    /// Destinations newly copied from the source.
    pub created: Vec<PathBuf>,
    /// Destinations that already existed.
    pub skipped: Vec<PathBuf>,
}

/// Copy `source` to every destination that does not exist yet.
///
/// Existing destinations are never touched, so running this again reports
/// every destination as skipped.
pub fn create_placeholders<P, I, Q>(source: P, destinations: I) -> Result<PlaceholderReport>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Q>,
    Q: AsRef<Path>,
{
    let source = source.as_ref();
    if !source.is_file() {
        return Err(Error::SourceNotFound(source.to_path_buf()));
    }

    let mut report = PlaceholderReport::default();
    for dest in destinations {
        let dest = dest.as_ref();
        if copy_if_absent(source, dest)? {
            debug!(path = %dest.display(), "created placeholder");
            report.created.push(dest.to_path_buf());
        } else {
            debug!(path = %dest.display(), "placeholder target already exists");
            report.skipped.push(dest.to_path_buf());
        }
    }

    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "placeholders done"
    );
    Ok(report)
}

/// Fill every DDS slot of `set` with a copy of `source`.
pub fn create_template_placeholders<P: AsRef<Path>>(
    source: P,
    set: &TemplateSet,
) -> Result<PlaceholderReport> {
    create_placeholders(source, set.dds_paths())
}

/// Returns `false` when `dest` already exists.
///
/// A destination is only created once the source is open, and removed again
/// if the copy fails, so a failed run never leaves an empty slot behind.
fn copy_if_absent(source: &Path, dest: &Path) -> Result<bool> {
    let mut input = File::open(source).map_err(|e| Error::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut out = match OpenOptions::new().write(true).create_new(true).open(dest) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(Error::Write {
                path: dest.to_path_buf(),
                source: e,
            })
        }
    };

    if let Err(e) = io::copy(&mut input, &mut out).and_then(|_| out.sync_all()) {
        drop(out);
        let _ = fs::remove_file(dest);
        return Err(Error::Write {
            path: dest.to_path_buf(),
            source: e,
        });
    }
    Ok(true)
}
