//! Render snapshot.
//!
//! A [`Frame`] is captured after every processed action and handed to the
//! observer. Settled cells come from the grid; the active shape is carried
//! whole, including blocks still above the field.
//!
//! ```
//! use blockfall_core::Controller;
//! use blockfall_types::ShapeKind;
//!
//! let game = Controller::new(10, 20, || ShapeKind::I, ());
//! let frame = game.frame();
//! assert!(frame.settled.is_empty());
//! assert!(frame.active.iter().all(|b| b.y < 0));
//! assert_eq!(frame.visible_blocks().count(), 0);
//! ```

use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{Block, ShapeKind, SHAPE_BLOCKS};

/// Read-only picture of the game handed to render sinks.
///
/// Owns copies of everything, so a sink can keep it around without holding
/// a borrow on the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    /// Settled cells, row-major.
    pub settled: Vec<Block>,
    pub active_kind: ShapeKind,
    /// Active shape blocks; may include rows above the field.
    pub active: [Block; SHAPE_BLOCKS],
    pub lines_cleared: u32,
    pub game_over: bool,
}

impl Frame {
    pub fn capture(grid: &Grid, active: &Shape, lines_cleared: u32, game_over: bool) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            settled: grid.occupied_blocks(),
            active_kind: active.kind(),
            active: active.clone_blocks(),
            lines_cleared,
            game_over,
        }
    }

    /// Settled and active blocks that fall inside the visible field.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.settled.iter().chain(self.active.iter().filter(|b| {
            b.y >= 0 && (b.y as i32) < self.height as i32 && b.x >= 0 && (b.x as i32) < self.width as i32
        }))
    }
}
