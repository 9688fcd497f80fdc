//! GameView: maps a `core::GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so it is unit-tested directly. The board keeps `y` pointing
//! up; the terminal counts rows downward, so board row `y` is drawn on screen
//! row `BOARD_HEIGHT - 1 - y` inside the frame.

use crate::core::{GameState, Mask};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const BLOCK: char = '█';
const PANEL_GAP: u16 = 2;
const PANEL_MIN_WIDTH: u16 = 10;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Top-left corner of the board frame on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
}

/// Draws the well, the landed blocks, the falling piece and a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps blocks roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (frame_w, frame_h) = self.frame_size();
        Layout {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        }
    }

    /// Screen position of the left column of board cell `(x, y)`.
    fn cell_origin(&self, layout: Layout, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        let col = layout.x + 1 + x as u16 * self.cell_w;
        let row = layout.y + 1 + (BOARD_HEIGHT as u16 - 1 - y as u16);
        Some((col, row))
    }

    /// Render `state` into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into<R>(&self, state: &GameState<R>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = self.layout(viewport);
        let (frame_w, frame_h) = self.frame_size();

        fb.fill(
            layout.x + 1,
            layout.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::new(WELL_BG, WELL_BG),
        );
        draw_border(fb, layout.x, layout.y, frame_w, frame_h);

        let board = state.board();
        let empty = Style::new(Rgb::new(70, 70, 80), WELL_BG);
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match board.get(x, y).flatten() {
                    Some(kind) => self.draw_block(fb, layout, x, y, kind),
                    None => {
                        if let Some((col, row)) = self.cell_origin(layout, x, y) {
                            fb.put(col, row, '·', empty);
                        }
                    }
                }
            }
        }

        if let Some(piece) = state.current() {
            for (x, y) in piece.cells() {
                self.draw_block(fb, layout, x, y, piece.kind());
            }
        }

        self.draw_side_panel(fb, state, viewport, layout, frame_w);

        if state.is_game_over() {
            draw_overlay(fb, layout, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R>(&self, state: &GameState<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: i8, y: i8, kind: PieceKind) {
        let Some((col, row)) = self.cell_origin(layout, x, y) else {
            return;
        };
        let style = Style::new(kind_color(kind), WELL_BG);
        fb.fill(col, row, self.cell_w, 1, BLOCK, style);
    }

    fn draw_side_panel<R>(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState<R>,
        viewport: Viewport,
        layout: Layout,
        frame_w: u16,
    ) {
        let panel_x = layout.x.saturating_add(frame_w).saturating_add(PANEL_GAP);
        if panel_x.saturating_add(PANEL_MIN_WIDTH) > viewport.width {
            return;
        }

        let label = Style::default().bold();
        let value = Style::default();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let preview = state.preview_piece();
        self.draw_mask(fb, panel_x, y, preview.current_mask(), preview.kind());
        y += 5;

        fb.put_str(panel_x, y, "ROWS", label);
        y += 1;
        fb.put_str(panel_x, y, &state.rows_cleared().to_string(), value);
        y += 2;

        fb.put_str(panel_x, y, "PIECES", label);
        y += 1;
        fb.put_str(panel_x, y, &state.pieces_spawned().to_string(), value);
    }

    /// Draw a 4x4 mask with its top row at screen row `top`.
    fn draw_mask(&self, fb: &mut FrameBuffer, left: u16, top: u16, mask: Mask, kind: PieceKind) {
        let style = Style::new(kind_color(kind), SCREEN_BG);
        for (cx, cy) in mask.cells() {
            let col = left + cx as u16 * self.cell_w;
            let row = top + (3 - cy as u16);
            fb.fill(col, row, self.cell_w, 1, BLOCK, style);
        }
    }
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for col in x + 1..right {
        fb.put(col, y, '─', style);
        fb.put(col, bottom, '─', style);
    }
    for row in y + 1..bottom {
        fb.put(x, row, '│', style);
        fb.put(right, row, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, layout: Layout, frame_w: u16, frame_h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = layout.x + frame_w.saturating_sub(text_w) / 2;
    let y = layout.y + frame_h / 2;
    let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, y, text, style);
}
