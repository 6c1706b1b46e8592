//! Session driver - feeds the controller from independent action sources
//!
//! The controller is synchronous and processes one action at a time. This
//! crate supplies the asynchronous side around it:
//!
//! - [`sources`]: producers (gravity timer, keyboard) writing into one
//!   bounded tokio channel of [`SessionInput`]s
//! - [`session`]: the loop that drains that channel into the controller and
//!   tears the producers down when the game is over
//! - [`config`]: [`GameConfig`] read from `BLOCKFALL_*` environment variables
//! - [`event_log`]: optional JSON-lines event log written off the game loop
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Controller, ShapeBag};
//! use blockfall_driver::{Session, SessionEnd, SessionInput};
//! use blockfall_types::GameAction;
//! use tokio::sync::mpsc;
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let summary = rt.block_on(async {
//!     let (tx, rx) = mpsc::channel(8);
//!     let controller = Controller::new(10, 20, ShapeBag::new(3), ());
//!
//!     tx.send(SessionInput::Action(GameAction::MoveLeft)).await.unwrap();
//!     tx.send(SessionInput::Quit).await.unwrap();
//!
//!     let (_controller, summary) = Session::new(controller, rx).run().await;
//!     summary
//! });
//! assert_eq!(summary.end, SessionEnd::Quit);
//! assert_eq!(summary.actions, 1);
//! ```

pub mod config;
pub mod event_log;
pub mod session;
pub mod sources;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use config::GameConfig;
pub use event_log::{EventLog, LogRecord};
pub use session::{Session, SessionEnd, SessionSummary};
pub use sources::{spawn_gravity, spawn_keyboard, SessionInput};
