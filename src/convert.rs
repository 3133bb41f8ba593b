//! The two conversion pipelines.
//!
//! Each is a single synchronous pass: decode, transform sample by
//! sample, encode. Text output is fully materialized in memory before a
//! single write so a failed run never leaves a truncated artifact that
//! could pass for a complete one.
use crate::error::GridError;
use crate::grid::GridDims;
use crate::image_io::{load_grayscale_image, save_rgb_image};
use crate::text::{parse_text_grid, write_text_grid};
use log::debug;
use std::fs;
use std::path::Path;

/// Decode `src`, collapse it to 8-bit luminance, and write its Text
/// Grid to `dst`. Returns the dimensions that were written.
pub fn export_image_to_text(src: &Path, dst: &Path) -> Result<GridDims, GridError> {
    let grid = load_grayscale_image(src)?;
    debug!(
        "decoded {} as {}x{} grayscale",
        src.display(),
        grid.width(),
        grid.height()
    );
    let text = write_text_grid(&grid);
    fs::write(dst, text).map_err(|e| GridError::Io {
        path: dst.to_path_buf(),
        source: e,
    })?;
    debug!("wrote text grid to {}", dst.display());
    Ok(grid.dims())
}

/// Read a Text Grid of the declared dimensions from `src` and encode it
/// as a neutral-RGB image at `dst`.
pub fn import_text_to_image(src: &Path, dst: &Path, dims: GridDims) -> Result<(), GridError> {
    let content = fs::read_to_string(src).map_err(|e| GridError::Io {
        path: src.to_path_buf(),
        source: e,
    })?;
    let grid = parse_text_grid(&content, dims)?;
    debug!(
        "parsed {}x{} text grid from {}",
        dims.width,
        dims.height,
        src.display()
    );
    save_rgb_image(&grid, dst)
}
