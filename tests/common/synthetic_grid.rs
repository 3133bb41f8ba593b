use heightmap_io::{GridDims, HeightGrid};
use image::GrayImage;
use std::path::Path;

/// Generates a grid where every sample differs from its neighbors.
pub fn ramp_grid(width: usize, height: usize) -> HeightGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    let mut grid = HeightGrid::new(GridDims::new(width, height));
    for y in 0..height {
        for x in 0..width {
            grid.set(x, y, ((x * 7 + y * 13) % 256) as u8);
        }
    }
    grid
}

/// Build a grid from literal rows.
pub fn grid_from_rows<const W: usize>(rows: &[[u8; W]]) -> HeightGrid {
    let mut grid = HeightGrid::new(GridDims::new(W, rows.len()));
    for (y, row) in rows.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            grid.set(x, y, v);
        }
    }
    grid
}

/// Write a grid to disk as a single-channel grayscale PNG.
pub fn save_gray_png(grid: &HeightGrid, path: &Path) {
    let img = GrayImage::from_raw(
        grid.width() as u32,
        grid.height() as u32,
        grid.as_slice().to_vec(),
    )
    .expect("buffer length matches dimensions");
    img.save(path).expect("failed to write test PNG");
}
