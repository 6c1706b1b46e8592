//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, event logging).
//!
//! # Coordinates
//!
//! - **Columns** grow rightward from 0 to `width - 1`
//! - **Rows** grow downward from 0 to `height - 1`
//! - **Negative rows** form the spawn buffer above the visible field; new shapes
//!   appear there and fall into view
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_WIDTH` | 10 | Columns in the playfield |
//! | `DEFAULT_GRID_HEIGHT` | 20 | Visible rows in the playfield |
//! | `DEFAULT_TICK_MS` | 500 | Gravity interval (one row per tick) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Block, Color, GameAction, ShapeKind};
//!
//! let kind = ShapeKind::from_str("l").unwrap();
//! assert_eq!(kind, ShapeKind::L);
//! assert_eq!(kind.period(), 4);
//!
//! let block = Block::new(4, -1, kind.color());
//! assert_eq!(block.color, Color::Orange);
//! assert!(block.in_spawn_buffer());
//!
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//! ```

/// Playfield width in cells (10 columns)
pub const DEFAULT_GRID_WIDTH: u16 = 10;

/// Playfield height in cells (20 rows)
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Largest width or height a grid may have. Block coordinates are `i16` and
/// a speculative move or rotation can step a few cells past the field.
pub const MAX_GRID_SIDE: u16 = 4096;

/// Gravity interval in milliseconds (one `MoveDown` per tick)
pub const DEFAULT_TICK_MS: u64 = 500;

/// Number of blocks in every shape
pub const SHAPE_BLOCKS: usize = 4;

/// Display color of a block.
///
/// Every shape variant has a fixed color; settled cells keep the color of the
/// shape that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Orange => "orange",
        }
    }
}

/// The seven shape variants
///
/// Each variant has a fixed color and rotation period:
/// - **I**: Cyan, straight bar, period 2
/// - **O**: Yellow, 2x2 square, period 1
/// - **T**: Purple, period 4
/// - **S**: Green, period 2
/// - **Z**: Red, mirror of S, period 2
/// - **J**: Blue, period 4
/// - **L**: Orange, mirror of J, period 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All variants in declaration order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("Z"), Some(ShapeKind::Z));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::Cyan,
            ShapeKind::O => Color::Yellow,
            ShapeKind::T => Color::Purple,
            ShapeKind::S => Color::Green,
            ShapeKind::Z => Color::Red,
            ShapeKind::J => Color::Blue,
            ShapeKind::L => Color::Orange,
        }
    }

    /// Number of distinct rotation states before the footprint repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::O.period(), 1);
    /// assert_eq!(ShapeKind::S.period(), 2);
    /// assert_eq!(ShapeKind::T.period(), 4);
    /// ```
    pub fn period(&self) -> u8 {
        match self {
            ShapeKind::O => 1,
            ShapeKind::I | ShapeKind::S | ShapeKind::Z => 2,
            ShapeKind::T | ShapeKind::J | ShapeKind::L => 4,
        }
    }
}

/// A single cell of a shape or of the settled stack.
///
/// `y` may be negative while a shape is still in the spawn buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i16,
    pub y: i16,
    pub color: Color,
}

impl Block {
    pub const fn new(x: i16, y: i16, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Same block shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            color: self.color,
        }
    }

    /// True while the block sits above the visible field.
    pub const fn in_spawn_buffer(&self) -> bool {
        self.y < 0
    }
}

/// Discrete actions the controller understands
///
/// Keyboard input and the gravity timer both produce these; the controller
/// does not care which source an action came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the active shape one column left
    MoveLeft,
    /// Move the active shape one column right
    MoveRight,
    /// Move the active shape one row down, locking it when blocked
    MoveDown,
    /// Rotate the active shape one step clockwise
    Rotate,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("movedown"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string (event log format)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
        }
    }
}

/// A cell of the settled grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell occupied by a locked block of that color
pub type Cell = Option<Color>;
