//! Core data model: grid dimensions and the owned height grid buffer.
use serde::{Deserialize, Serialize};

/// Grid dimensions in samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub width: usize,
    pub height: usize,
}

impl GridDims {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total sample count.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for GridDims {
    /// The historical heightmap tooling always assumed a 128×128 grid.
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
        }
    }
}

/// Owned 8-bit height grid in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightGrid {
    dims: GridDims,
    data: Vec<u8>,
}

impl HeightGrid {
    /// Zero-filled grid of the given dimensions.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            data: vec![0u8; dims.len()],
        }
    }

    /// Wrap a raw row-major buffer. The buffer length must match the
    /// dimensions exactly.
    pub fn from_raw(dims: GridDims, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            dims.len(),
            "buffer length must equal width * height"
        );
        Self { dims, data }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Grid width in samples
    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Grid height in samples
    pub fn height(&self) -> usize {
        self.dims.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.dims.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.dims.width + x] = value;
    }

    /// Borrow one row as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.dims.width;
        &self.data[start..start + self.dims.width]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
