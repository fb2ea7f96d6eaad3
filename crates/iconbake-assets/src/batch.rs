//! Batch conversion of a template set from PNG to DDS.

use std::path::PathBuf;

use iconbake_dds::convert_png_to_dds;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::template::TemplateSet;

/// Outcome of converting a template set.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// DDS files written.
    pub converted: Vec<PathBuf>,
    /// PNG sources that do not exist.
    pub missing: Vec<PathBuf>,
    /// Sources whose conversion failed.
    pub failed: Vec<(PathBuf, iconbake_dds::Error)>,
}

impl BatchReport {
    /// True when no conversion failed. Missing sources do not count.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

enum Outcome {
    Converted(PathBuf),
    Missing(PathBuf),
    Failed(PathBuf, iconbake_dds::Error),
}

/// Convert every `<prefix><n>.png` of `set` to `<prefix><n>.dds`.
pub fn convert_templates(set: &TemplateSet) -> BatchReport {
    convert_templates_with_progress(set, |_| {})
}

/// Like [`convert_templates`], calling `progress` with each finished member.
///
/// Members are converted in parallel; a failing member does not stop the
/// others. Report lists keep the set's numbering order.
pub fn convert_templates_with_progress<F>(set: &TemplateSet, progress: F) -> BatchReport
where
    F: Fn(u32) + Sync,
{
    let indices: Vec<u32> = set.indices().collect();

    let outcomes: Vec<Outcome> = indices
        .par_iter()
        .map(|&n| {
            let (png, dds) = (set.png_path(n), set.dds_path(n));
            let outcome = if !png.exists() {
                warn!(path = %png.display(), "template source not found");
                Outcome::Missing(png)
            } else {
                match convert_png_to_dds(&png, &dds) {
                    Ok(_) => Outcome::Converted(dds),
                    Err(e) => {
                        warn!(path = %png.display(), error = %e, "template conversion failed");
                        Outcome::Failed(png, e)
                    }
                }
            };
            progress(n);
            outcome
        })
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Converted(path) => report.converted.push(path),
            Outcome::Missing(path) => report.missing.push(path),
            Outcome::Failed(path, e) => report.failed.push((path, e)),
        }
    }

    info!(
        converted = report.converted.len(),
        missing = report.missing.len(),
        failed = report.failed.len(),
        "template conversion finished"
    );
    report
}
