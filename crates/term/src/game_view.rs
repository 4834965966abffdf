//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

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

const FRAME_BG: Rgb = Rgb::new(40, 40, 48);
const EMPTY_BG: Rgb = Rgb::new(70, 70, 80);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Renders the 2048 board, side panel and banners.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six-digit value with a column of padding on each side.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size in terminal cells, border included.
    pub fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        // One column/row of gap between tiles and around them, plus the border.
        (n * (self.tile_w + 1) + 1 + 2, n * (self.tile_h + 1) + 1 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.board_size();
        let start_x = viewport.width.saturating_sub(frame_w + SIDE_PANEL_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(FRAME_BG, FRAME_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let fresh = snap.last_spawn == Some((row, col));
                self.draw_tile(fb, start_x, start_y, row, col, snap.tile(row, col), fresh);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            let title = if snap.won { "YOU WON!" } else { "GAME OVER" };
            self.draw_banner(fb, start_x, start_y, frame_w, frame_h, title);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at `(row, col)`.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        (
            start_x + 2 + col as u16 * (self.tile_w + 1),
            start_y + 2 + row as u16 * (self.tile_h + 1),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: u32,
        fresh: bool,
    ) {
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let bg = tile_color(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', CellStyle::new(bg, bg));
        if value == 0 {
            return;
        }

        let label = CellStyle::new(tile_text_color(value), bg).bold();
        let mut digits = [0u8; 10];
        fb.put_str_centered(x, y + self.tile_h / 2, self.tile_w, format_u32(value, &mut digits), label);

        if fresh {
            fb.put_char(x, y, '•', CellStyle::new(Rgb::new(255, 255, 255), bg));
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST TILE", snap.max_tile),
            ("MOVES", snap.moves),
            ("TARGET", snap.target),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        if snap.last_gained > 0 && snap.playable() {
            fb.put_char(panel_x + 7, start_y + 1, '+', hint);
            fb.put_u32(panel_x + 8, start_y + 1, snap.last_gained, hint);
        }

        if snap.won && snap.playable() {
            let gold = CellStyle::new(Rgb::new(250, 204, 21), PANEL_BG).bold();
            fb.put_str(panel_x, y, "WON! keep going", gold);
        }
        y = y.saturating_add(2);

        if snap.playable() {
            fb.put_str(panel_x, y, "arrows/hjkl/wasd", hint);
        } else {
            fb.put_str(panel_x, y, "enter share", hint);
        }
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "r restart", hint);
        fb.put_str(panel_x, y.saturating_add(1), "q quit", hint);
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let band_w = (title.chars().count() as u16 + 4).min(frame_w);
        let band_x = start_x + frame_w.saturating_sub(band_w) / 2;
        fb.fill_rect(band_x, mid_y, band_w, 1, ' ', style);
        fb.put_str_centered(band_x, mid_y, band_w, title, style);
    }
}

/// Columns reserved for the side panel when centering.
const SIDE_PANEL_W: u16 = 18;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Background per tile value: oranges up to 64, yellows up to 2048.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 => EMPTY_BG,
        2 => Rgb::new(251, 146, 60),
        4 => Rgb::new(249, 115, 22),
        8 => Rgb::new(234, 88, 12),
        16 => Rgb::new(194, 65, 12),
        32 => Rgb::new(154, 52, 18),
        64 => Rgb::new(124, 45, 18),
        128 => Rgb::new(250, 204, 21),
        256 => Rgb::new(234, 179, 8),
        512 => Rgb::new(202, 138, 4),
        1024 => Rgb::new(161, 98, 7),
        2048 => Rgb::new(133, 77, 14),
        _ => Rgb::new(156, 163, 175),
    }
}

fn tile_text_color(value: u32) -> Rgb {
    match value {
        128 | 256 => Rgb::new(40, 30, 10),
        _ => Rgb::new(255, 255, 255),
    }
}

fn format_u32(value: u32, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("")
}
