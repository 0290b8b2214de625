//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, BOARD_SIZE};

const BOARD_BG: Rgb = Rgb::new(30, 32, 30);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HEAD: Rgb = Rgb::hex(0x4CAF50);
const BODY: Rgb = Rgb::hex(0x81C784);
const FOOD: Rgb = Rgb::hex(0xFF5252);
const GAME_OVER: Rgb = Rgb::hex(0xF44336);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board renderer for the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps board cells roughly square in common terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = BOARD_SIZE as u16;
        (
            side.saturating_mul(self.cell_w).saturating_add(2),
            side.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::new(Rgb::new(200, 200, 200), PANEL_BG)));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let empty = Style::new(Rgb::new(70, 75, 70), BOARD_BG).dim();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                self.fill_board_cell(fb, start_x, start_y, Cell::new(x, y), '·', empty);
            }
        }

        let border = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Food first so that a food cell under the snake stays hidden.
        let food = Style::new(FOOD, BOARD_BG).bold();
        self.fill_board_cell(fb, start_x, start_y, snap.food, '●', food);

        // Tail to head, so the head wins if cells ever overlap.
        for (i, &cell) in snap.snake.iter().enumerate().rev() {
            let style = if i == 0 {
                Style::new(HEAD, BOARD_BG).bold()
            } else {
                Style::new(BODY, BOARD_BG)
            };
            self.fill_board_cell(fb, start_x, start_y, cell, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w), start_y);

        if snap.game_over() {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        style: Style,
    ) {
        if !cell.in_bounds() {
            return;
        }
        let px = start_x
            .saturating_add(1)
            .saturating_add((cell.x as u16).saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add((cell.y as u16).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, snap.snake.len() as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "HEADING", label);
        fb.put_str(panel_x, y + 1, snap.direction.as_str(), value);
        y += 3;

        fb.put_str(panel_x, y, "arrows/wasd", hint);
        fb.put_str(panel_x, y + 1, "r restart", hint);
        fb.put_str(panel_x, y + 2, "q quit", hint);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let title = Style::new(Rgb::new(255, 255, 255), GAME_OVER).bold();
        let sub = Style::new(Rgb::new(255, 255, 255), PANEL_BG);
        centered(fb, start_x, frame_w, mid_y, " GAME OVER ", title);
        centered(fb, start_x, frame_w, mid_y + 1, " press r to restart ", sub);
    }
}

fn centered(fb: &mut FrameBuffer, left: u16, width: u16, y: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    let x = left.saturating_add(width.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }

    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}
