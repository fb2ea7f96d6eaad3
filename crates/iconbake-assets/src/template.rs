//! Numbered template icon sets.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// A directory of numbered icons (`template1.png`, `template1.dds`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    dir: PathBuf,
    prefix: String,
    count: u32,
}

impl TemplateSet {
    /// Default file stem prefix.
    pub const DEFAULT_PREFIX: &'static str = "template";
    /// Default number of icons (one per cell of a 3x3 sheet).
    pub const DEFAULT_COUNT: u32 = 9;

    /// Create a set of nine `template<n>` icons in `dir`.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            prefix: Self::DEFAULT_PREFIX.to_string(),
            count: Self::DEFAULT_COUNT,
        }
    }

    /// Use a different file stem prefix.
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Use a different number of icons.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Directory holding the icons.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File stem prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of icons.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Icon numbers, starting at 1.
    pub fn indices(&self) -> RangeInclusive<u32> {
        1..=self.count
    }

    /// Path of icon `n` with the given extension.
    pub fn path(&self, n: u32, extension: &str) -> PathBuf {
        self.dir.join(format!("{}{}.{}", self.prefix, n, extension))
    }

    /// Path of the PNG for icon `n`.
    pub fn png_path(&self, n: u32) -> PathBuf {
        self.path(n, "png")
    }

    /// Path of the DDS for icon `n`.
    pub fn dds_path(&self, n: u32) -> PathBuf {
        self.path(n, "dds")
    }

    /// DDS paths of every icon in the set.
    pub fn dds_paths(&self) -> Vec<PathBuf> {
        self.indices().map(|n| self.dds_path(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let set = TemplateSet::new("art/Finals");
        assert_eq!(set.count(), 9);
        assert_eq!(set.png_path(1), Path::new("art/Finals/template1.png"));
        assert_eq!(set.dds_path(9), Path::new("art/Finals/template9.dds"));
        assert_eq!(set.indices().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_prefix_and_count() {
        let set = TemplateSet::new("icons").with_prefix("helmet").with_count(4);
        assert_eq!(set.dds_paths().len(), 4);
        assert_eq!(set.dds_paths()[3], Path::new("icons/helmet4.dds"));
    }

    #[test]
    fn test_empty_set() {
        let set = TemplateSet::new("icons").with_count(0);
        assert!(set.indices().next().is_none());
        assert!(set.dds_paths().is_empty());
    }
}
