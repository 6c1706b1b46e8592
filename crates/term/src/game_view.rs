//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Block;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

/// Draws the playfield, a border, the lines counter and the game-over banner.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let field_w = frame.width.saturating_mul(self.cell_w);
        let box_w = field_w.saturating_add(2);
        let box_h = frame.height.saturating_add(2);

        let start_x = viewport.width.saturating_sub(box_w) / 2;
        let start_y = viewport.height.saturating_sub(box_h) / 2;

        let empty = CellStyle::new(Rgb::new(90, 90, 100), FIELD_BG);
        for y in 0..frame.height {
            for x in 0..frame.width {
                self.fill_cell(fb, start_x, start_y, x, y, '·', empty);
            }
        }

        self.draw_border(fb, start_x, start_y, box_w, box_h);

        for block in frame.visible_blocks() {
            self.draw_block(fb, start_x, start_y, block);
        }

        let panel_x = start_x.saturating_add(box_w).saturating_add(2);
        let label = CellStyle::default().bold();
        fb.put_str(panel_x, start_y, "LINES", label);
        fb.put_u32(panel_x, start_y.saturating_add(1), frame.lines_cleared, CellStyle::default());

        if frame.game_over {
            let text = "GAME OVER";
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(box_w.saturating_sub(text_w) / 2);
            let y = start_y.saturating_add(box_h / 2);
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, y, text, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, block: &Block) {
        // visible_blocks() only yields in-field blocks
        let style = CellStyle::new(Rgb::of_block(block.color), FIELD_BG).bold();
        self.fill_cell(fb, start_x, start_y, block.x as u16, block.y as u16, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Controller, Grid};
    use crate::types::{Color, ShapeKind};

    fn render(frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        GameView::default().render_into(frame, viewport, &mut fb);
        fb
    }

    fn frame_with(grid: Grid) -> Frame {
        Controller::with_grid(grid, || ShapeKind::O, ()).frame()
    }

    #[test]
    fn draws_border_around_field() {
        let frame = frame_with(Grid::new(4, 3));
        // Field 8 columns + 2 border = 10 wide, 5 tall; viewport fits exactly.
        let fb = render(&frame, Viewport::new(10, 5));
        assert_eq!(fb.row_text(0), "┌────────┐");
        assert_eq!(fb.row_text(1), "│········│");
        assert_eq!(fb.row_text(4), "└────────┘");
    }

    #[test]
    fn settled_cells_are_solid() {
        let mut grid = Grid::new(4, 3);
        grid.set(0, 2, Some(Color::Red));
        let frame = frame_with(grid);
        let fb = render(&frame, Viewport::new(10, 5));
        assert_eq!(fb.row_text(3), "│██······│");
        assert_eq!(fb.get(1, 3).map(|c| c.style.fg), Some(Rgb::of_block(Color::Red)));
    }

    #[test]
    fn game_over_banner_is_drawn() {
        let mut grid = Grid::new(10, 4);
        grid.set(4, 0, Some(Color::Red));
        let mut controller = Controller::with_grid(grid, || ShapeKind::O, ());
        controller.apply(crate::types::GameAction::MoveDown);
        assert!(controller.is_over());

        let fb = render(&controller.frame(), Viewport::new(40, 10));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("GAME OVER"));
    }
}
