//! Action producers.
//!
//! Every producer owns a clone of the same bounded sender, so the session
//! sees one ordered stream no matter where an action came from. A producer
//! stops as soon as the receiving side is gone.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::input::{handle_key_event, should_quit};
use crate::types::GameAction;

/// Item carried by the session channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Action(GameAction),
    Quit,
}

impl From<GameAction> for SessionInput {
    fn from(action: GameAction) -> Self {
        SessionInput::Action(action)
    }
}

/// Send `MoveDown` every `period`, first one a full period after start.
pub fn spawn_gravity(tx: mpsc::Sender<SessionInput>, period: Duration) -> JoinHandle<()> {
    let start = Instant::now() + period;
    tokio::spawn(async move {
        let mut ticks = time::interval_at(start, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            if tx
                .send(SessionInput::Action(GameAction::MoveDown))
                .await
                .is_err()
            {
                break;
            }
        }
    })
}

/// How long the keyboard reader blocks before rechecking the channel.
const KEY_POLL: Duration = Duration::from_millis(50);

/// Read key presses on a blocking thread and forward mapped actions.
///
/// Unmapped keys are dropped here; quit keys become [`SessionInput::Quit`].
pub fn spawn_keyboard(tx: mpsc::Sender<SessionInput>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(KEY_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    eprintln!("[Keyboard] poll failed: {}", e);
                    break;
                }
            }

            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(_) => continue,
                Err(e) => {
                    eprintln!("[Keyboard] read failed: {}", e);
                    break;
                }
            };

            let input = if should_quit(key) {
                SessionInput::Quit
            } else if let Some(action) = handle_key_event(key) {
                SessionInput::Action(action)
            } else {
                continue;
            };

            if tx.blocking_send(input).is_err() {
                break;
            }
        }
    })
}
