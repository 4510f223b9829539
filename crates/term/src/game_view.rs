//! TerminalView: paints a render-model [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Frames are laid out in window pixels; the
//! view maps them onto character cells at a fixed scale of `CELL / 2` pixels
//! per column and `CELL` pixels per row, so a board cell becomes two
//! characters side by side.

use crate::core::render::Layout;
use crate::core::{DrawCommand, Frame, GameStatus, PixelRect};
use crate::fb::{CellStyle, FrameBuffer, Glyph};
use crate::types::{min_window_size, Rgb, CELL};

/// Window pixels per terminal column
pub const PX_PER_COL: i32 = CELL / 2;

/// Window pixels per terminal row
pub const PX_PER_ROW: i32 = CELL;

const WINDOW_BG: Rgb = Rgb::new(240, 240, 240);
const LABEL_FG: Rgb = Rgb::new(0, 0, 0);

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

/// Character span `[start, end]` covered by a pixel rect, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharRect {
    col: i32,
    row: i32,
    cols: i32,
    rows: i32,
}

impl CharRect {
    fn from_pixels(rect: PixelRect) -> Self {
        let col = rect.x.div_euclid(PX_PER_COL);
        let row = rect.y.div_euclid(PX_PER_ROW);
        let last_col = (rect.x + rect.w - 1).div_euclid(PX_PER_COL);
        let last_row = (rect.y + rect.h - 1).div_euclid(PX_PER_ROW);
        Self {
            col,
            row,
            cols: last_col - col + 1,
            rows: last_row - row + 1,
        }
    }
}

/// Rasterizes frames onto a fixed-size character canvas centered in the
/// viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalView;

impl TerminalView {
    pub fn new() -> Self {
        Self
    }

    /// Canvas size in characters: the minimum window size, scaled.
    pub fn canvas_size() -> (u16, u16) {
        let (w, h) = min_window_size();
        ((w / PX_PER_COL) as u16, (h / PX_PER_ROW) as u16)
    }

    /// Paint `frame` into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (canvas_w, canvas_h) = Self::canvas_size();
        let origin_x = viewport.width.saturating_sub(canvas_w) / 2;
        let origin_y = viewport.height.saturating_sub(canvas_h) / 2;
        let mut canvas = Canvas {
            fb,
            origin: (i32::from(origin_x), i32::from(origin_y)),
        };

        canvas.fill(
            CharRect {
                col: 0,
                row: 0,
                cols: i32::from(canvas_w),
                rows: i32::from(canvas_h),
            },
            ' ',
            CellStyle::new(LABEL_FG, WINDOW_BG),
        );

        for command in &frame.commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    canvas.fill(CharRect::from_pixels(*rect), ' ', CellStyle::new(*color, *color));
                }
                DrawCommand::StrokeRect { rect, color } => {
                    let bg = canvas.bg_at(rect.x / PX_PER_COL, rect.y / PX_PER_ROW);
                    canvas.stroke(CharRect::from_pixels(*rect), CellStyle::new(*color, bg));
                }
                DrawCommand::FillCell { area, x, y, color } => {
                    let rect = Layout::cell_rect(*area, *x, *y);
                    canvas.fill(CharRect::from_pixels(rect), '█', CellStyle::new(*color, *color));
                }
                DrawCommand::Text { x, y, text } => {
                    let col = x.div_euclid(PX_PER_COL);
                    let row = y.div_euclid(PX_PER_ROW);
                    let bg = canvas.bg_at(col, row);
                    canvas.text(col, row, text, CellStyle::new(LABEL_FG, bg).bold());
                }
            }
        }

        let overlay = match frame.status {
            GameStatus::Running => None,
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
        };
        if let Some(text) = overlay {
            let board = CharRect::from_pixels(Layout::board_frame());
            let len = text.chars().count() as i32;
            let col = board.col + (board.cols - len) / 2;
            let row = board.row + board.rows / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            canvas.text(col, row, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }
}

/// Framebuffer plus the canvas origin; all coordinates are canvas-relative
/// and clipped to the framebuffer.
struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    origin: (i32, i32),
}

impl Canvas<'_> {
    fn to_fb(&self, col: i32, row: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(self.origin.0 + col).ok()?;
        let y = u16::try_from(self.origin.1 + row).ok()?;
        Some((x, y))
    }

    fn put(&mut self, col: i32, row: i32, ch: char, style: CellStyle) {
        if let Some((x, y)) = self.to_fb(col, row) {
            self.fb.put_char(x, y, ch, style);
        }
    }

    fn bg_at(&self, col: i32, row: i32) -> Rgb {
        self.to_fb(col, row)
            .and_then(|(x, y)| self.fb.get(x, y))
            .map_or(WINDOW_BG, |g| g.style.bg)
    }

    fn fill(&mut self, rect: CharRect, ch: char, style: CellStyle) {
        for row in rect.row..rect.row + rect.rows {
            for col in rect.col..rect.col + rect.cols {
                self.put(col, row, ch, style);
            }
        }
    }

    fn stroke(&mut self, rect: CharRect, style: CellStyle) {
        match (self.to_fb(rect.col, rect.row), rect.cols, rect.rows) {
            (Some((x, y)), w, h) if w >= 2 && h >= 2 => {
                self.fb.draw_box(x, y, w as u16, h as u16, style);
            }
            _ => {}
        }
    }

    fn text(&mut self, col: i32, row: i32, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, style);
        }
    }
}
