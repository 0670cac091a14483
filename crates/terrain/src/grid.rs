//! Row-major square grid over a flat `Vec`.
//!
//! The world height buffer and the per-vertex normal buffer are both
//! addressed as `z * size + x`; wrapping that formula in one type keeps the
//! addressing identical everywhere it is used.

/// Square 2D grid stored row-major.
#[derive(Debug, Clone)]
pub struct Grid2<T> {
    data: Vec<T>,
    size: usize,
}

impl<T> Grid2<T> {
    /// Build a grid by evaluating `f(x, z)` at every cell, row by row.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size * size);
        for z in 0..size {
            for x in 0..size {
                data.push(f(x, z));
            }
        }
        Self { data, size }
    }

    /// Edge length in cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat row-major index of (x, z).
    #[inline]
    pub fn index(&self, x: usize, z: usize) -> usize {
        z * self.size + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, z: usize) -> bool {
        x < self.size && z < self.size
    }

    #[inline]
    pub fn get(&self, x: usize, z: usize) -> &T {
        &self.data[self.index(x, z)]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}
