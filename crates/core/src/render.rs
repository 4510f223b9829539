//! Render model: maps a [`GameSnapshot`] to a list of draw instructions.
//!
//! This module is pure (no I/O, no game rules). A host paints the resulting
//! [`Frame`] however it likes; [`Layout`] gives the pixel geometry of a
//! window with `CELL`-sized squares for hosts that draw in pixels.

use crate::game_state::GameStatus;
use crate::snapshot::GameSnapshot;
use crate::types::{
    board_pixel_height, board_pixel_width, Rgb, BOARD_HEIGHT, BOARD_MARGIN, BOARD_WIDTH, CELL,
    PANEL_GAP, PREVIEW_PADDING, PREVIEW_SIZE, PREVIEW_TOP,
};

const BOARD_BORDER: Rgb = Rgb::new(0, 0, 0);
const PREVIEW_BACKGROUND: Rgb = Rgb::new(230, 230, 230);
const PREVIEW_BORDER: Rgb = Rgb::new(180, 180, 180);

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Which grid a [`DrawCommand::FillCell`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// Playfield grid coordinates
    Board,
    /// Next-piece preview, local grid coordinates
    Preview,
}

/// One draw instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: PixelRect, color: Rgb },
    StrokeRect { rect: PixelRect, color: Rgb },
    FillCell { area: Area, x: i8, y: i8, color: Rgb },
    Text { x: i32, y: i32, text: String },
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: &'static str,
    pub status: GameStatus,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            title: "",
            status: GameStatus::Running,
            commands: Vec::with_capacity(256),
        }
    }

    /// `(x, y, color)` of every cell instruction targeting `area`
    pub fn cells(&self, area: Area) -> impl Iterator<Item = (i8, i8, Rgb)> + '_ {
        self.commands.iter().filter_map(move |cmd| match *cmd {
            DrawCommand::FillCell { area: a, x, y, color } if a == area => Some((x, y, color)),
            _ => None,
        })
    }

    /// Text of every label, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed window geometry
pub struct Layout;

impl Layout {
    /// Left edge of the side panel
    pub const PANEL_X: i32 = BOARD_MARGIN + board_pixel_width() + PANEL_GAP;

    pub const SCORE_LABEL_Y: i32 = 20;
    pub const LINES_LABEL_Y: i32 = 40;
    pub const LEVEL_LABEL_Y: i32 = 60;
    pub const NEXT_LABEL_Y: i32 = 80;

    /// One-pixel frame drawn just outside the playfield
    pub const fn board_frame() -> PixelRect {
        PixelRect::new(
            BOARD_MARGIN - 1,
            BOARD_MARGIN - 1,
            board_pixel_width() + 2,
            board_pixel_height() + 2,
        )
    }

    /// Background square of the next-piece preview
    pub const fn preview_panel() -> PixelRect {
        PixelRect::new(
            Self::PANEL_X - PREVIEW_PADDING,
            PREVIEW_TOP - PREVIEW_PADDING,
            PREVIEW_SIZE,
            PREVIEW_SIZE,
        )
    }

    /// Pixel position of grid cell (0, 0) in `area`
    pub const fn origin(area: Area) -> (i32, i32) {
        match area {
            Area::Board => (BOARD_MARGIN, BOARD_MARGIN),
            Area::Preview => (Self::PANEL_X, PREVIEW_TOP),
        }
    }

    /// Filled part of a grid cell: the square inset by one pixel on each side
    pub const fn cell_rect(area: Area, x: i8, y: i8) -> PixelRect {
        let (ox, oy) = Self::origin(area);
        PixelRect::new(
            ox + x as i32 * CELL + 1,
            oy + y as i32 * CELL + 1,
            CELL - 2,
            CELL - 2,
        )
    }
}

/// Build a fresh frame for `snap`.
pub fn render(snap: &GameSnapshot) -> Frame {
    let mut frame = Frame::new();
    render_into(snap, &mut frame);
    frame
}

/// Rebuild `frame` in place for `snap`, reusing its command buffer.
pub fn render_into(snap: &GameSnapshot, frame: &mut Frame) {
    frame.title = snap.status.title();
    frame.status = snap.status;
    frame.commands.clear();
    let out = &mut frame.commands;

    out.push(DrawCommand::StrokeRect {
        rect: Layout::board_frame(),
        color: BOARD_BORDER,
    });

    // Locked cells.
    for (x, y, cell) in snap.board.occupied() {
        if let Some(kind) = cell.kind() {
            out.push(DrawCommand::FillCell {
                area: Area::Board,
                x,
                y,
                color: kind.color(),
            });
        }
    }

    // Active piece, visible rows only.
    if let Some(active) = snap.active {
        let color = active.piece.kind().color();
        for (x, y) in active.cells() {
            if y < 0 || y >= BOARD_HEIGHT as i8 || x < 0 || x >= BOARD_WIDTH as i8 {
                continue;
            }
            out.push(DrawCommand::FillCell {
                area: Area::Board,
                x,
                y,
                color,
            });
        }
    }

    // Preview panel.
    out.push(DrawCommand::FillRect {
        rect: Layout::preview_panel(),
        color: PREVIEW_BACKGROUND,
    });
    out.push(DrawCommand::StrokeRect {
        rect: Layout::preview_panel(),
        color: PREVIEW_BORDER,
    });

    // Next piece, pivot at local (1, 1).
    let color = snap.next.kind().color();
    for &(dx, dy) in snap.next.coords() {
        out.push(DrawCommand::FillCell {
            area: Area::Preview,
            x: dx + 1,
            y: dy + 1,
            color,
        });
    }

    // Side panel labels.
    let labels = [
        (Layout::SCORE_LABEL_Y, format!("Score: {}", snap.score)),
        (Layout::LINES_LABEL_Y, format!("Lines: {}", snap.lines)),
        (Layout::LEVEL_LABEL_Y, format!("Level: {}", snap.level)),
        (Layout::NEXT_LABEL_Y, String::from("Next:")),
    ];
    for (y, text) in labels {
        out.push(DrawCommand::Text {
            x: Layout::PANEL_X,
            y,
            text,
        });
    }
}
