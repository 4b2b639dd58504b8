use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx / self.width as usize) as u32;
        let col = (idx % self.width as usize) as u32;
        (row, col)
    }

    // === Bounds checking ===

    /// True when (row, col) lies outside the grid.
    /// Takes signed values so neighbour offsets can go negative.
    #[inline]
    pub fn is_oob(&self, row: i32, col: i32) -> bool {
        row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32
    }

    #[inline]
    pub fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    pub(crate) fn checked_index(&self, row: u32, col: u32) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some(self.index(row, col))
        } else {
            None
        }
    }
}
