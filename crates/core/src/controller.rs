//! Controller module - sequences actions into a game
//!
//! The controller owns the grid and the active shape. Every action is checked
//! against a speculative copy of the active shape first; only a copy that
//! fits is replayed on the live shape. A blocked `MoveDown` locks the shape,
//! clears full rows and spawns the next shape, or ends the game when the
//! shape is still partly in the spawn buffer.
//!
//! Collaborators hang off the [`GameObserver`] seam: rendering gets a
//! [`Frame`] after every action, scoring gets the cleared-row count of every
//! lock, lifecycle gets a single game-over call.

use crate::grid::Grid;
use crate::rng::ShapeSource;
use crate::shape::{spawn_column, Shape};
use crate::snapshot::Frame;
use crate::types::{Block, GameAction};

/// Receives what the controller wants the outside world to know.
///
/// All methods default to no-ops so a collaborator only implements what it
/// cares about.
pub trait GameObserver {
    /// Called on setup and after every processed action.
    fn on_render(&mut self, _frame: &Frame) {}

    /// Called once per lock with the number of rows it cleared (may be 0),
    /// before the next shape spawns.
    fn on_lines_completed(&mut self, _count: usize) {}

    /// Called once when the game ends, right before the final frame.
    fn on_game_over(&mut self) {}
}

impl GameObserver for () {}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_render(&mut self, frame: &Frame) {
        (**self).on_render(frame);
    }

    fn on_lines_completed(&mut self, count: usize) {
        (**self).on_lines_completed(count);
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over();
    }
}

impl<T: GameObserver + ?Sized> GameObserver for Box<T> {
    fn on_render(&mut self, frame: &Frame) {
        (**self).on_render(frame);
    }

    fn on_lines_completed(&mut self, count: usize) {
        (**self).on_lines_completed(count);
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Over,
}

/// What a single action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    /// Shape translated.
    Moved,
    /// Shape rotated.
    Rotated,
    /// Candidate collided; nothing changed.
    Blocked,
    /// Shape locked, rows cleared, next shape spawned.
    Locked { lines_cleared: usize },
    /// The game is over; no further actions are accepted.
    GameOver,
}

impl ActionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionOutcome::Moved => "moved",
            ActionOutcome::Rotated => "rotated",
            ActionOutcome::Blocked => "blocked",
            ActionOutcome::Locked { .. } => "locked",
            ActionOutcome::GameOver => "gameOver",
        }
    }
}

/// Game controller
pub struct Controller<S, O> {
    grid: Grid,
    active: Shape,
    spawn_x: i16,
    source: S,
    observer: O,
    status: GameStatus,
    lines_cleared: u32,
    shapes_locked: u32,
}

impl<S: ShapeSource, O: GameObserver> Controller<S, O> {
    /// Start a game on an empty `width x height` grid.
    pub fn new(width: u16, height: u16, source: S, observer: O) -> Self {
        Self::with_grid(Grid::new(width, height), source, observer)
    }

    /// Start a game on an existing grid.
    ///
    /// Spawns the first shape and renders the initial frame. If the first
    /// shape cannot fit the game is over immediately.
    pub fn with_grid(grid: Grid, mut source: S, observer: O) -> Self {
        let spawn_x = spawn_column(grid.width());
        let active = Shape::spawn(source.next_kind(), spawn_x);

        let mut controller = Self {
            grid,
            active,
            spawn_x,
            source,
            observer,
            status: GameStatus::Running,
            lines_cleared: 0,
            shapes_locked: 0,
        };

        if controller.grid.collides(controller.active.blocks()) {
            controller.finish();
        } else {
            controller.render();
        }
        controller
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Shape {
        &self.active
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Total rows cleared this game.
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Shapes locked into the grid this game.
    pub fn shapes_locked(&self) -> u32 {
        self.shapes_locked
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Snapshot of the current state.
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.grid, &self.active, self.lines_cleared, self.is_over())
    }

    /// Process one action to completion, including any lock, clear and spawn.
    ///
    /// # Panics
    ///
    /// Panics if the game is already over.
    pub fn apply(&mut self, action: GameAction) -> ActionOutcome {
        assert!(
            !self.is_over(),
            "action {} applied after game over",
            action.as_str()
        );

        let outcome = match action {
            GameAction::MoveLeft | GameAction::MoveRight => {
                if self.try_perform(action) {
                    ActionOutcome::Moved
                } else {
                    ActionOutcome::Blocked
                }
            }
            GameAction::Rotate => {
                if self.try_perform(action) {
                    ActionOutcome::Rotated
                } else {
                    ActionOutcome::Blocked
                }
            }
            GameAction::MoveDown => self.step_down(),
        };

        // The game-over path has already rendered its final frame.
        if outcome != ActionOutcome::GameOver {
            self.render();
        }
        outcome
    }

    /// Check `action` on a copy; replay it on the live shape only if the copy fits.
    fn try_perform(&mut self, action: GameAction) -> bool {
        let candidate = self.active.moved(action);
        if self.grid.collides(candidate.blocks()) {
            return false;
        }
        self.active.perform(action);
        true
    }

    fn step_down(&mut self) -> ActionOutcome {
        if self.try_perform(GameAction::MoveDown) {
            return ActionOutcome::Moved;
        }

        if Grid::is_end_game(self.active.blocks()) {
            self.end_game();
            return ActionOutcome::GameOver;
        }

        self.grid.commit_blocks(self.active.blocks());
        self.shapes_locked += 1;

        let full_rows = self.grid.full_rows();
        self.observer.on_lines_completed(full_rows.len());
        for &row in &full_rows {
            self.grid.remove_row(row);
        }
        self.lines_cleared += full_rows.len() as u32;

        if !self.spawn_next() {
            return ActionOutcome::GameOver;
        }

        ActionOutcome::Locked {
            lines_cleared: full_rows.len(),
        }
    }

    /// Returns false (and ends the game) if the new shape does not fit.
    fn spawn_next(&mut self) -> bool {
        self.active = Shape::spawn(self.source.next_kind(), self.spawn_x);
        if self.grid.collides(self.active.blocks()) {
            self.finish();
            return false;
        }
        true
    }

    /// Lock whatever part of the shape is visible, then finish. A shape with
    /// nothing inside the field does not count as locked.
    fn end_game(&mut self) {
        let visible: Vec<Block> = self
            .active
            .blocks()
            .iter()
            .copied()
            .filter(|b| !b.in_spawn_buffer())
            .collect();
        if !visible.is_empty() {
            self.grid.commit_blocks(&visible);
            self.shapes_locked += 1;
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.status = GameStatus::Over;
        self.observer.on_game_over();
        self.render();
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.observer.on_render(&frame);
    }
}
