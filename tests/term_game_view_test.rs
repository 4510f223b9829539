use plugin_tetris::core::{render::render, GameState, GameStatus};
use plugin_tetris::term::{FrameBuffer, TerminalView, Viewport};
use plugin_tetris::types::{Cell, PieceKind};

fn started() -> GameState {
    let mut game = GameState::new(1);
    game.start();
    game
}

#[test]
fn term_view_renders_board_border_corners() {
    let frame = render(&started().snapshot());
    let fb = TerminalView::new().render(&frame, Viewport::new(40, 25));

    assert_eq!(fb.get(1, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(22, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(1, 23).unwrap().ch, '└');
    assert_eq!(fb.get(22, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = started().snapshot();
    snap.board.set(9, 21, Cell::Square);
    snap.active = None;
    let fb = TerminalView::new().render(&render(&snap), Viewport::new(40, 25));

    // Column 9 -> characters 20 and 21, row 21 -> terminal row 22.
    for x in [20, 21] {
        let glyph = fb.get(x, 22).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, PieceKind::Square.color());
    }
    assert_eq!(fb.get(22, 22).unwrap().ch, '│');
}

#[test]
fn term_view_shows_counters() {
    let mut snap = started().snapshot();
    snap.score = 300;
    snap.lines = 12;
    snap.level = 2;
    let fb = TerminalView::new().render(&render(&snap), Viewport::new(40, 25));

    assert!(fb.row_text(1).contains("Score: 300"));
    assert!(fb.row_text(2).contains("Lines: 12"));
    assert!(fb.row_text(3).contains("Level: 2"));
}

#[test]
fn term_view_overlays_status() {
    let mut snap = started().snapshot();
    let view = TerminalView::new();
    let vp = Viewport::new(40, 25);

    let running = view.render(&render(&snap), vp);
    assert!((0..25).all(|y| !running.row_text(y).contains("PAUSED")));

    snap.status = GameStatus::Paused;
    let paused = view.render(&render(&snap), vp);
    assert!((0..25).any(|y| paused.row_text(y).contains("PAUSED")));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let frame = render(&started().snapshot());
    let view = TerminalView::new();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&frame, Viewport::new(80, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 30));
    // Canvas offset: (80 - 40) / 2 = 20, (30 - 25) / 2 = 2.
    assert_eq!(fb.get(21, 2).unwrap().ch, '┌');

    view.render_into(&frame, Viewport::new(40, 25), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 25));
    assert_eq!(fb.get(1, 0).unwrap().ch, '┌');
}
