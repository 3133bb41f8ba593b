//! Raster I/O for height grids.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit grid.
//! - `save_rgb_image`: write a grid as a neutral-RGB raster.
use crate::error::GridError;
use crate::grid::{GridDims, HeightGrid};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::Path;

/// Load an image from disk and collapse it to 8-bit luminance.
pub fn load_grayscale_image(path: &Path) -> Result<HeightGrid, GridError> {
    let img = image::open(path)
        .map_err(|e| GridError::ImageDecode {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_luma8();
    let dims = GridDims::new(img.width() as usize, img.height() as usize);
    Ok(HeightGrid::from_raw(dims, img.into_raw()))
}

/// Expand a grid to neutral RGB (every channel equal to the sample) and
/// save it. The output format follows the file extension.
pub fn save_rgb_image(grid: &HeightGrid, path: &Path) -> Result<(), GridError> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for (x, &v) in grid.row(y).iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    out.save(path).map_err(|e| GridError::ImageEncode {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), GridError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| GridError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    Ok(())
}
