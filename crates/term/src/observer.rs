//! Terminal-backed [`GameObserver`].
//!
//! Observer callbacks cannot fail, so the first terminal error is parked and
//! later draws are skipped. The caller picks it up with
//! [`TerminalObserver::take_error`] once the session is over.

use crate::core::{Frame, GameObserver};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalObserver {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    error: Option<anyhow::Error>,
}

impl TerminalObserver {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }
}

impl GameObserver for TerminalObserver {
    fn on_render(&mut self, frame: &Frame) {
        if self.error.is_some() {
            return;
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(frame, Viewport::new(w, h), &mut self.fb);
        if let Err(e) = self.renderer.draw(&self.fb) {
            self.error = Some(e);
        }
    }
}
