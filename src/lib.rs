#![doc = include_str!("../README.md")]

pub mod config;
pub mod convert;
pub mod error;
pub mod grid;
pub mod image_io;
pub mod text;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the two pipelines plus the data model.
pub use crate::convert::{export_image_to_text, import_text_to_image};
pub use crate::error::GridError;
pub use crate::grid::{GridDims, HeightGrid};

/// Small prelude for quick experiments.
///
/// ```
/// use heightmap_io::prelude::*;
///
/// let mut grid = HeightGrid::new(GridDims::new(4, 4));
/// grid.set(0, 0, 255);
/// let text = write_text_grid(&grid);
/// let back = parse_text_grid(&text, grid.dims()).unwrap();
/// assert_eq!(grid, back);
/// ```
pub mod prelude {
    pub use crate::text::{parse_text_grid, sniff_dims, write_text_grid};
    pub use crate::{export_image_to_text, import_text_to_image};
    pub use crate::{GridDims, GridError, HeightGrid};
}
