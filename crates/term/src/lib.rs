//! Terminal front end.
//!
//! A small, game-oriented rendering layer: a [`Frame`](core::Frame) from the
//! controller is drawn into a framebuffer which is then flushed to the
//! terminal with crossterm.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`game_view`]: pure `Frame -> FrameBuffer` mapping
//! - [`renderer`]: raw mode / alternate screen handling and flushing
//! - [`observer`]: ties the above to the controller's observer seam

pub mod fb;
pub mod game_view;
pub mod observer;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use observer::TerminalObserver;
pub use renderer::{encode_full_into, TerminalRenderer};
