//! Icon asset preparation built on [`iconbake_dds`].
//!
//! - [`SpriteSheet`] - cut a grid sprite sheet (3x3 by default) into icons
//! - [`create_placeholders`] - fill missing icon slots with a copy of one file
//! - [`convert_templates`] - convert a numbered PNG set to DDS in parallel
//! - [`TemplateSet`] - naming of numbered icons (`template1` ... `template9`)
//!
//! # Example
//!
//! ```no_run
//! use iconbake_assets::{CellFormat, SpriteSheet, TemplateSet};
//!
//! let set = TemplateSet::new("art/Finals");
//! let sheet = SpriteSheet::open("equipment.png")?;
//! sheet.extract_to(&set, CellFormat::Png)?;
//!
//! let report = iconbake_assets::convert_templates(&set);
//! println!("{} converted", report.converted.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod batch;
mod error;
mod placeholder;
mod sheet;
mod template;

pub use batch::{convert_templates, convert_templates_with_progress, BatchReport};
pub use error::{Error, Result};
pub use placeholder::{create_placeholders, create_template_placeholders, PlaceholderReport};
pub use sheet::{CellFormat, SpriteSheet};
pub use template::TemplateSet;
