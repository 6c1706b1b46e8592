//! Grid module - the settled stack
//!
//! The grid is a `width x height` matrix of cells, each empty or holding the
//! color of a locked block. Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x ranges `0..width` (left to right) and y ranges
//! `0..height` (top to bottom). Negative y is the spawn buffer and is never
//! stored.
//!
//! Only locked blocks live here; the falling shape is tracked by the
//! controller until it locks.

use crate::types::{Block, Cell, MAX_GRID_SIDE};

/// The settled playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or larger than [`MAX_GRID_SIDE`].
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "grid must be at least 1x1, got {}x{}", width, height);
        assert!(
            width <= MAX_GRID_SIDE && height <= MAX_GRID_SIDE,
            "grid {}x{} exceeds the {} cell limit per side",
            width,
            height,
            MAX_GRID_SIDE
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x as i32 >= self.width as i32 || y as i32 >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True if any candidate block hits a wall, the floor, or a settled cell.
    ///
    /// Blocks above the field (`y < 0`) only collide with the side walls.
    /// Read-only: a failed check leaves nothing behind.
    pub fn collides(&self, blocks: &[Block]) -> bool {
        blocks.iter().any(|b| {
            b.x < 0
                || b.x as i32 >= self.width as i32
                || b.y as i32 >= self.height as i32
                || (b.y >= 0 && self.is_occupied(b.x, b.y))
        })
    }

    /// Write blocks into their cells.
    ///
    /// # Panics
    ///
    /// Panics if a block is outside the grid or lands on an occupied cell.
    /// Callers check [`Grid::collides`] first, so this is unreachable in play.
    pub fn commit_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            let idx = self.index(block.x, block.y).unwrap_or_else(|| {
                panic!(
                    "block ({}, {}) outside {}x{} grid",
                    block.x, block.y, self.width, self.height
                )
            });
            assert!(
                self.cells[idx].is_none(),
                "block ({}, {}) lands on an occupied cell",
                block.x,
                block.y
            );
            self.cells[idx] = Some(block.color);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of every full row, ascending (top to bottom).
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.height as usize).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Delete row `y`, drop every row above it by one and empty the top row.
    ///
    /// Rows below `y` keep their indices, so a list of full rows can be removed
    /// in ascending order without adjusting the remaining indices.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a row of this grid.
    pub fn remove_row(&mut self, y: usize) {
        assert!(
            y < self.height as usize,
            "row {} out of range for height {}",
            y,
            self.height
        );

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);
    }

    /// True if any block of a locking shape is still in the spawn buffer.
    pub fn is_end_game(blocks: &[Block]) -> bool {
        blocks.iter().any(Block::in_spawn_buffer)
    }

    /// Every settled cell as a block, row-major.
    pub fn occupied_blocks(&self) -> Vec<Block> {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| {
                cell.map(|color| Block::new((idx % width) as i16, (idx / width) as i16, color))
            })
            .collect()
    }

    /// Cells of row `y`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Count of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
        assert_eq!(grid.index(0, -1), None);
    }

    #[test]
    fn flat_storage_is_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set(1, 2, Some(Color::Red));
        assert_eq!(grid.cells[2 * 4 + 1], Some(Color::Red));
        assert_eq!(grid.row(2), &[None, Some(Color::Red), None, None]);
    }

    #[test]
    fn remove_top_row_only_empties_it() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Some(Color::Blue));
        grid.set(1, 1, Some(Color::Cyan));
        grid.remove_row(0);
        assert_eq!(grid.row(0), &[None, None]);
        assert_eq!(grid.row(1), &[None, Some(Color::Cyan)]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_row_past_floor_panics() {
        let mut grid = Grid::new(3, 3);
        grid.remove_row(3);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_sized_grid_is_rejected() {
        let _ = Grid::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "cell limit")]
    fn oversized_grid_is_rejected() {
        let _ = Grid::new(4, 40_000);
    }

    #[test]
    fn largest_grid_plays_to_the_floor() {
        let mut grid = Grid::new(4, MAX_GRID_SIDE);
        let bottom = MAX_GRID_SIDE as i16 - 1;
        assert!(!grid.collides(&[Block::new(3, bottom, Color::Red)]));
        assert!(grid.collides(&[Block::new(3, bottom + 2, Color::Red)]));
        grid.commit_blocks(&[Block::new(3, bottom, Color::Red)]);
        assert_eq!(grid.occupied_blocks(), vec![Block::new(3, bottom, Color::Red)]);
    }
}
