//! Terminal runner (default binary).
//!
//! Wires the controller to the terminal observer, the gravity timer and the
//! keyboard, then hands everything to a driver session.

use anyhow::Result;
use tokio::sync::mpsc;

use blockfall::core::{Controller, ShapeBag};
use blockfall::driver::{spawn_gravity, spawn_keyboard, EventLog, GameConfig, Session};
use blockfall::driver::{SessionEnd, SessionSummary};
use blockfall::term::{TerminalObserver, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let summary = run(&config, renderer)?;

    let reason = match summary.end {
        SessionEnd::GameOver => "game over",
        SessionEnd::Quit => "quit",
        SessionEnd::SourcesClosed => "input closed",
    };
    println!(
        "{}: {} lines cleared, {} shapes locked, {} actions (seed {})",
        reason, summary.lines_cleared, summary.shapes_locked, summary.actions, config.seed
    );
    Ok(())
}

fn run(config: &GameConfig, renderer: TerminalRenderer) -> Result<SessionSummary> {
    let runtime = tokio::runtime::Runtime::new()?;

    let (controller, summary) = runtime.block_on(async {
        let observer = TerminalObserver::new(renderer);
        let controller = Controller::new(
            config.width,
            config.height,
            ShapeBag::new(config.seed),
            observer,
        );

        let (tx, rx) = mpsc::channel(config.channel_capacity);
        let mut session = Session::new(controller, rx)
            .with_producer(spawn_gravity(tx.clone(), config.tick()))
            .with_producer(spawn_keyboard(tx));

        if let Some(path) = &config.log_path {
            session = session.with_log(EventLog::open(path.clone()), config.seed);
        }

        session.run().await
    });

    let mut observer = controller.into_observer();
    // Always try to restore terminal state.
    let _ = observer.renderer_mut().exit();

    if let Some(e) = observer.take_error() {
        return Err(e);
    }
    Ok(summary)
}
