//! Iconbake - game-asset icon preparation library.
//!
//! This crate provides a unified interface to the Iconbake crates.
//!
//! # Crates
//!
//! - [`iconbake_dds`] - Uncompressed 32-bit DDS encoding
//! - [`iconbake_assets`] - Sprite-sheet slicing, placeholders, batch conversion
//!
//! # Example
//!
//! ```no_run
//! use iconbake::prelude::*;
//!
//! // Cut a 3x3 sheet straight into DDS icons
//! let set = TemplateSet::new("art/Finals");
//! SpriteSheet::open("equipment.png")?.extract_to(&set, CellFormat::Dds)?;
//!
//! // Or convert a single file
//! convert_png_to_dds("art/Finals/chair.png", "art/Finals/chair.dds")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use iconbake_assets as assets;
pub use iconbake_dds as dds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use iconbake_assets::{
        convert_templates, convert_templates_with_progress, create_placeholders,
        create_template_placeholders, BatchReport, CellFormat, PlaceholderReport, SpriteSheet,
        TemplateSet,
    };
    pub use iconbake_dds::{convert_png_to_dds, encode, encode_image, Conversion};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
