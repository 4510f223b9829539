//! Shared data types and constants
//!
//! Everything here is plain data with no external dependencies, so the same
//! definitions can be used by the game rules, the render model and any host
//! (terminal, GUI plugin window, tests).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 22 rows (indexed 0-21, top to bottom)
//! - **Spawn pivot**: (5, 0)
//!
//! # Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_INTERVAL_MS` | 400 | Gravity interval at level 1 |
//! | `INTERVAL_STEP_MS` | 30 | Interval decrease per level |
//! | `MIN_INTERVAL_MS` | 80 | Interval floor |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level |
//!
//! # Examples
//!
//! ```
//! use plugin_tetris_types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("line").unwrap();
//! assert_eq!(kind, PieceKind::Line);
//! assert_eq!(Cell::from(kind).kind(), Some(PieceKind::Line));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Edge length of one board cell in pixels
pub const CELL: i32 = 20;

/// Distance from the window's top-left corner to the playfield in pixels
pub const BOARD_MARGIN: i32 = 20;

/// Horizontal gap between the playfield and the side panel in pixels
pub const PANEL_GAP: i32 = 40;

/// Top of the next-piece preview grid in pixels
pub const PREVIEW_TOP: i32 = 120;

/// Edge length of the square preview panel in pixels
pub const PREVIEW_SIZE: i32 = 120;

/// Padding between the preview panel edge and its cell grid in pixels
pub const PREVIEW_PADDING: i32 = 10;

/// Spawn pivot column (mid-top)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Spawn pivot row
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at level 1
pub const BASE_INTERVAL_MS: u32 = 400;

/// Interval decrease per level above 1
pub const INTERVAL_STEP_MS: u32 = 30;

/// Gravity never gets faster than this
pub const MIN_INTERVAL_MS: u32 = 80;

/// Lines that have to be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Score awarded per lock, indexed by rows cleared in that lock.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Width of the playfield in pixels
pub const fn board_pixel_width() -> i32 {
    BOARD_WIDTH as i32 * CELL
}

/// Height of the playfield in pixels
pub const fn board_pixel_height() -> i32 {
    BOARD_HEIGHT as i32 * CELL
}

/// Minimum host window size `(width, height)` in pixels: playfield plus
/// margins plus the side panel.
pub const fn min_window_size() -> (i32, i32) {
    (
        BOARD_MARGIN + board_pixel_width() + 180,
        BOARD_MARGIN + board_pixel_height() + 40,
    )
}

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Z,
    S,
    Line,
    T,
    Square,
    L,
    MirroredL,
}

impl PieceKind {
    /// Every kind, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::Line,
        PieceKind::T,
        PieceKind::Square,
        PieceKind::L,
        PieceKind::MirroredL,
    ];

    /// Kind at `index` in [`PieceKind::ALL`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use plugin_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Square"), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_str("mirroredl"), Some(PieceKind::MirroredL));
    /// assert_eq!(PieceKind::from_str("o"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "line" => Some(PieceKind::Line),
            "t" => Some(PieceKind::T),
            "square" => Some(PieceKind::Square),
            "l" => Some(PieceKind::L),
            "mirroredl" => Some(PieceKind::MirroredL),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::Line => "line",
            PieceKind::T => "t",
            PieceKind::Square => "square",
            PieceKind::L => "l",
            PieceKind::MirroredL => "mirroredl",
        }
    }

    /// Fill color used for this kind on the board and in the preview
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::Z => Rgb::new(204, 0, 0),
            PieceKind::S => Rgb::new(0, 153, 0),
            PieceKind::Line => Rgb::new(0, 153, 204),
            PieceKind::T => Rgb::new(153, 0, 153),
            PieceKind::Square => Rgb::new(204, 153, 0),
            PieceKind::L => Rgb::new(255, 102, 0),
            PieceKind::MirroredL => Rgb::new(0, 102, 204),
        }
    }
}

/// One board cell: empty, or filled by a locked piece of some kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Z,
    S,
    Line,
    T,
    Square,
    L,
    MirroredL,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The piece kind occupying this cell, if any
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Z => Some(PieceKind::Z),
            Cell::S => Some(PieceKind::S),
            Cell::Line => Some(PieceKind::Line),
            Cell::T => Some(PieceKind::T),
            Cell::Square => Some(PieceKind::Square),
            Cell::L => Some(PieceKind::L),
            Cell::MirroredL => Some(PieceKind::MirroredL),
        }
    }
}

impl From<PieceKind> for Cell {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Z => Cell::Z,
            PieceKind::S => Cell::S,
            PieceKind::Line => Cell::Line,
            PieceKind::T => Cell::T,
            PieceKind::Square => Cell::Square,
            PieceKind::L => Cell::L,
            PieceKind::MirroredL => Cell::MirroredL,
        }
    }
}

/// Player actions delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece a quarter turn
    Rotate,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Toggle pause
    Pause,
    /// Start a fresh session (accepted in every state)
    Restart,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_and_kind_convert_both_ways() {
        for kind in PieceKind::ALL {
            let cell = Cell::from(kind);
            assert!(!cell.is_empty());
            assert_eq!(cell.kind(), Some(kind));
        }
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::Empty.kind(), None);
    }

    #[test]
    fn piece_kind_names_parse_back() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_index(2), Some(PieceKind::Line));
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn window_geometry() {
        assert_eq!(board_pixel_width(), 200);
        assert_eq!(board_pixel_height(), 440);
        assert_eq!(min_window_size(), (400, 500));
        assert_eq!(SPAWN_X, 5);
    }

    #[test]
    fn piece_colors_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
