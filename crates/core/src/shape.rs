//! Shape module - the seven falling shapes and their rotation tables
//!
//! A shape is four blocks plus a rotation state. Rotation is table driven:
//! for every (kind, state) pair there is a fixed delta per block, so the
//! footprint always stays on whole grid cells.
//!
//! Block order is significant. Index 1 is the pivot for every kind except O,
//! which never moves when rotated. Each table row rotates the three other
//! blocks a quarter turn clockwise around the pivot; applying all `period`
//! rows returns the blocks to where they started.

use crate::types::{Block, GameAction, ShapeKind, SHAPE_BLOCKS};

/// Per-block `(dx, dy)` delta.
pub type Delta = (i16, i16);

/// One row of a rotation table: a delta for each of the four blocks.
pub type RotationStep = [Delta; SHAPE_BLOCKS];

/// Spawn footprint as `(dx, dy)` from `(spawn_x, 0)`.
type Footprint = [Delta; SHAPE_BLOCKS];

const I_SPAWN: Footprint = [(0, -4), (0, -3), (0, -2), (0, -1)];
const O_SPAWN: Footprint = [(0, -2), (1, -2), (0, -1), (1, -1)];
const T_SPAWN: Footprint = [(-1, -2), (0, -2), (1, -2), (0, -1)];
const S_SPAWN: Footprint = [(0, -3), (0, -2), (1, -2), (1, -1)];
const Z_SPAWN: Footprint = [(1, -3), (1, -2), (0, -2), (0, -1)];
const J_SPAWN: Footprint = [(1, -3), (1, -2), (1, -1), (0, -1)];
const L_SPAWN: Footprint = [(0, -3), (0, -2), (0, -1), (1, -1)];

const I_ROTATION: [RotationStep; 2] = [
    [(1, 1), (0, 0), (-1, -1), (-2, -2)],
    [(-1, -1), (0, 0), (1, 1), (2, 2)],
];

const O_ROTATION: [RotationStep; 1] = [[(0, 0); SHAPE_BLOCKS]];

const T_ROTATION: [RotationStep; 4] = [
    [(1, -1), (0, 0), (-1, 1), (-1, -1)],
    [(1, 1), (0, 0), (-1, -1), (1, -1)],
    [(-1, 1), (0, 0), (1, -1), (1, 1)],
    [(-1, -1), (0, 0), (1, 1), (-1, 1)],
];

const S_ROTATION: [RotationStep; 2] = [
    [(1, 1), (0, 0), (-1, 1), (-2, 0)],
    [(-1, -1), (0, 0), (1, -1), (2, 0)],
];

const Z_ROTATION: [RotationStep; 2] = [
    [(-1, 1), (0, 0), (1, 1), (2, 0)],
    [(1, -1), (0, 0), (-1, -1), (-2, 0)],
];

const J_ROTATION: [RotationStep; 4] = [
    [(1, 1), (0, 0), (-1, -1), (0, -2)],
    [(-1, 1), (0, 0), (1, -1), (2, 0)],
    [(-1, -1), (0, 0), (1, 1), (0, 2)],
    [(1, -1), (0, 0), (-1, 1), (-2, 0)],
];

const L_ROTATION: [RotationStep; 4] = [
    [(1, 1), (0, 0), (-1, -1), (-2, 0)],
    [(-1, 1), (0, 0), (1, -1), (0, -2)],
    [(-1, -1), (0, 0), (1, 1), (2, 0)],
    [(1, -1), (0, 0), (-1, 1), (0, 2)],
];

/// Rotation table for a kind. Its length equals `kind.period()`.
pub fn rotation_table(kind: ShapeKind) -> &'static [RotationStep] {
    match kind {
        ShapeKind::I => &I_ROTATION,
        ShapeKind::O => &O_ROTATION,
        ShapeKind::T => &T_ROTATION,
        ShapeKind::S => &S_ROTATION,
        ShapeKind::Z => &Z_ROTATION,
        ShapeKind::J => &J_ROTATION,
        ShapeKind::L => &L_ROTATION,
    }
}

fn spawn_footprint(kind: ShapeKind) -> &'static Footprint {
    match kind {
        ShapeKind::I => &I_SPAWN,
        ShapeKind::O => &O_SPAWN,
        ShapeKind::T => &T_SPAWN,
        ShapeKind::S => &S_SPAWN,
        ShapeKind::Z => &Z_SPAWN,
        ShapeKind::J => &J_SPAWN,
        ShapeKind::L => &L_SPAWN,
    }
}

/// Default spawn column for a grid of the given width.
pub fn spawn_column(width: u16) -> i16 {
    (width / 2) as i16 - 1
}

/// Active falling shape
///
/// `Shape` is `Copy`: a speculative move is just a copy that gets mutated,
/// the source value is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    blocks: [Block; SHAPE_BLOCKS],
    rotation: u8,
}

impl Shape {
    /// Create a shape in its spawn footprint, entirely inside the spawn buffer.
    pub fn spawn(kind: ShapeKind, spawn_x: i16) -> Self {
        let color = kind.color();
        let footprint = spawn_footprint(kind);
        let blocks = footprint.map(|(dx, dy)| Block::new(spawn_x + dx, dy, color));
        Self {
            kind,
            blocks,
            rotation: 0,
        }
    }

    /// Rebuild a shape from raw parts.
    ///
    /// # Panics
    ///
    /// Panics if `rotation` is not below the kind's period.
    pub fn from_parts(kind: ShapeKind, blocks: [Block; SHAPE_BLOCKS], rotation: u8) -> Self {
        assert!(
            rotation < kind.period(),
            "rotation state {} out of range for {:?} (period {})",
            rotation,
            kind,
            kind.period()
        );
        Self {
            kind,
            blocks,
            rotation,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block; SHAPE_BLOCKS] {
        &self.blocks
    }

    /// Independent copy of the blocks.
    pub fn clone_blocks(&self) -> [Block; SHAPE_BLOCKS] {
        self.blocks
    }

    pub fn rotation_state(&self) -> u8 {
        self.rotation
    }

    pub fn period(&self) -> u8 {
        self.kind.period()
    }

    /// Shift every block by the same offset.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        for block in &mut self.blocks {
            *block = block.offset(dx, dy);
        }
    }

    /// Apply the table row for the current state, then advance the state.
    pub fn rotate(&mut self) {
        let step = &rotation_table(self.kind)[self.rotation as usize];
        for (block, &(dx, dy)) in self.blocks.iter_mut().zip(step.iter()) {
            *block = block.offset(dx, dy);
        }
        self.rotation = (self.rotation + 1) % self.kind.period();
    }

    /// Apply a movement action in place.
    pub fn perform(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.translate(-1, 0),
            GameAction::MoveRight => self.translate(1, 0),
            GameAction::MoveDown => self.translate(0, 1),
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Copy of this shape with `action` applied. `self` is left as is.
    pub fn moved(&self, action: GameAction) -> Self {
        let mut next = *self;
        next.perform(action);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative(shape: &Shape) -> [Delta; SHAPE_BLOCKS] {
        let pivot = shape.blocks()[1];
        shape.blocks().map(|b| (b.x - pivot.x, b.y - pivot.y))
    }

    #[test]
    fn tables_match_periods() {
        for kind in ShapeKind::ALL {
            assert_eq!(rotation_table(kind).len(), kind.period() as usize);
        }
    }

    #[test]
    fn pivot_never_moves() {
        for kind in ShapeKind::ALL {
            for step in rotation_table(kind) {
                assert_eq!(step[1], (0, 0), "{:?} moves its pivot", kind);
            }
        }
    }

    #[test]
    fn table_deltas_cancel_over_a_full_cycle() {
        for kind in ShapeKind::ALL {
            for block in 0..SHAPE_BLOCKS {
                let (sx, sy) = rotation_table(kind)
                    .iter()
                    .fold((0, 0), |(ax, ay), step| (ax + step[block].0, ay + step[block].1));
                assert_eq!((sx, sy), (0, 0), "{:?} block {} drifts", kind, block);
            }
        }
    }

    #[test]
    fn rotation_is_a_quarter_turn_around_the_pivot() {
        // Clockwise with rows growing downward: (dx, dy) -> (-dy, dx).
        for kind in [ShapeKind::T, ShapeKind::J, ShapeKind::L] {
            let mut shape = Shape::spawn(kind, 4);
            for _ in 0..4 {
                let before = relative(&shape);
                shape.rotate();
                let after = relative(&shape);
                for i in 0..SHAPE_BLOCKS {
                    assert_eq!(after[i], (-before[i].1, before[i].0), "{:?}", kind);
                }
            }
        }
    }

    #[test]
    fn spawn_sits_in_buffer_with_lowest_row_at_minus_one() {
        for kind in ShapeKind::ALL {
            let shape = Shape::spawn(kind, 4);
            assert!(shape.blocks().iter().all(|b| b.y < 0));
            assert_eq!(shape.blocks().iter().map(|b| b.y).max(), Some(-1));
            assert!(shape.blocks().iter().all(|b| b.color == kind.color()));
        }
    }

    #[test]
    fn l_first_rotation_lays_the_bar_flat() {
        let mut shape = Shape::spawn(ShapeKind::L, 4);
        shape.rotate();
        let cells: Vec<(i16, i16)> = shape.blocks().iter().map(|b| (b.x, b.y)).collect();
        assert_eq!(cells, vec![(5, -2), (4, -2), (3, -2), (3, -1)]);
        assert_eq!(shape.rotation_state(), 1);
    }

    #[test]
    fn moved_leaves_source_untouched() {
        let shape = Shape::spawn(ShapeKind::Z, 4);
        let next = shape.moved(GameAction::Rotate);
        assert_eq!(shape.rotation_state(), 0);
        assert_eq!(next.rotation_state(), 1);
        assert_ne!(shape.blocks(), next.blocks());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_parts_rejects_bad_rotation_state() {
        let blocks = Shape::spawn(ShapeKind::S, 4).clone_blocks();
        let _ = Shape::from_parts(ShapeKind::S, blocks, 2);
    }
}
