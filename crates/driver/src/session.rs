//! Session loop.
//!
//! Drains the action channel into the controller one item at a time. Each
//! action, including any lock/clear/spawn it triggers, finishes before the
//! next item is received, so observers never see a half-applied state.
//!
//! The session ends on game over, on [`SessionInput::Quit`], or when every
//! sender is gone. On the way out the channel is closed and every producer
//! is aborted, so nothing keeps feeding a finished game.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::{ActionOutcome, Controller, GameObserver, ShapeSource};
use crate::event_log::{now_ms, EventLog, LogRecord};
use crate::sources::SessionInput;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    Quit,
    SourcesClosed,
}

impl SessionEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEnd::GameOver => "game_over",
            SessionEnd::Quit => "quit",
            SessionEnd::SourcesClosed => "sources_closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Actions applied to the controller.
    pub actions: u64,
    pub lines_cleared: u32,
    pub shapes_locked: u32,
}

pub struct Session<S, O> {
    controller: Controller<S, O>,
    rx: mpsc::Receiver<SessionInput>,
    producers: Vec<JoinHandle<()>>,
    log: Option<EventLog>,
}

impl<S: ShapeSource, O: GameObserver> Session<S, O> {
    pub fn new(controller: Controller<S, O>, rx: mpsc::Receiver<SessionInput>) -> Self {
        Self {
            controller,
            rx,
            producers: Vec::new(),
            log: None,
        }
    }

    /// Register a producer task to be torn down when the session ends.
    pub fn with_producer(mut self, handle: JoinHandle<()>) -> Self {
        self.producers.push(handle);
        self
    }

    /// Attach an event log; `seed` goes into the start record.
    pub fn with_log(mut self, log: EventLog, seed: u32) -> Self {
        let grid = self.controller.grid();
        log.record(LogRecord::Start {
            ts: now_ms(),
            width: grid.width(),
            height: grid.height(),
            seed,
        });
        self.log = Some(log);
        self
    }

    /// Run until the game ends, the player quits, or all producers are gone.
    ///
    /// Returns the controller so callers can inspect the final grid and
    /// observer.
    pub async fn run(mut self) -> (Controller<S, O>, SessionSummary) {
        let mut actions: u64 = 0;

        let end = if self.controller.is_over() {
            SessionEnd::GameOver
        } else {
            loop {
                let Some(input) = self.rx.recv().await else {
                    break SessionEnd::SourcesClosed;
                };

                let action = match input {
                    SessionInput::Quit => break SessionEnd::Quit,
                    SessionInput::Action(action) => action,
                };

                actions += 1;
                let outcome = self.controller.apply(action);
                self.log_outcome(actions, action.as_str(), outcome);

                if outcome == ActionOutcome::GameOver {
                    break SessionEnd::GameOver;
                }
            }
        };

        self.rx.close();
        for producer in self.producers.drain(..) {
            producer.abort();
        }

        let summary = SessionSummary {
            end,
            actions,
            lines_cleared: self.controller.lines_cleared(),
            shapes_locked: self.controller.shapes_locked(),
        };

        if let Some(log) = self.log.take() {
            log.record(LogRecord::End {
                ts: now_ms(),
                reason: end.as_str(),
                actions,
            });
            log.close().await;
        }

        (self.controller, summary)
    }

    fn log_outcome(&self, seq: u64, action: &'static str, outcome: ActionOutcome) {
        let Some(log) = &self.log else {
            return;
        };
        let ts = now_ms();
        log.record(LogRecord::Action {
            ts,
            seq,
            action,
            outcome: outcome.as_str(),
        });
        match outcome {
            ActionOutcome::Locked { lines_cleared } => log.record(LogRecord::Lock {
                ts,
                seq,
                lines_cleared,
            }),
            ActionOutcome::GameOver => log.record(LogRecord::GameOver {
                ts,
                seq,
                lines_cleared: self.controller.lines_cleared(),
                shapes_locked: self.controller.shapes_locked(),
            }),
            _ => {}
        }
    }
}
