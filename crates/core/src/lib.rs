//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block puzzle: shapes and their
//! rotation tables, the settled grid, and the controller that turns a stream
//! of discrete actions into a game. It has **zero dependencies** on UI,
//! timers, or I/O:
//!
//! - **Deterministic**: Same seed produces the same shape sequence
//! - **Synchronous**: One action is processed to completion before the next
//! - **Portable**: Rendering and scoring are observers, not built in
//!
//! # Module Structure
//!
//! - [`shape`]: the seven shapes, spawn footprints and rotation tables
//! - [`grid`]: settled cells, collision checks, full-row detection and removal
//! - [`controller`]: active shape + grid, action handling, lock/clear/spawn cycle
//! - [`rng`]: 7-bag shape generation behind the [`ShapeSource`] trait
//! - [`snapshot`]: the [`Frame`] handed to render sinks
//!
//! # Rules
//!
//! - Moves and rotations are tried on a copy first and rejected on collision
//! - There are no wall kicks: a rotation that collides is simply dropped
//! - A blocked `MoveDown` locks the shape; full rows are removed top to bottom
//! - A shape that locks while still partly above the field ends the game
//!
//! # Example
//!
//! ```
//! use blockfall_core::{ActionOutcome, Controller, ShapeBag};
//! use blockfall_types::GameAction;
//!
//! let mut game = Controller::new(10, 20, ShapeBag::new(12345), ());
//! game.apply(GameAction::MoveRight);
//! game.apply(GameAction::Rotate);
//!
//! // Gravity until the first shape locks.
//! loop {
//!     match game.apply(GameAction::MoveDown) {
//!         ActionOutcome::Moved => continue,
//!         outcome => {
//!             assert_eq!(outcome, ActionOutcome::Locked { lines_cleared: 0 });
//!             break;
//!         }
//!     }
//! }
//! assert_eq!(game.grid().occupied_count(), 4);
//! ```

pub mod controller;
pub mod grid;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use controller::{ActionOutcome, Controller, GameObserver, GameStatus};
pub use grid::Grid;
pub use rng::{ShapeBag, ShapeSource, SimpleRng};
pub use shape::{rotation_table, spawn_column, Shape};
pub use snapshot::Frame;
