//! TerminalRenderer: writes framebuffers to the real terminal.
//!
//! Frames are diffed against the previously flushed buffer, so only changed
//! runs of glyphs are emitted after the first paint.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    title: Option<&'static str>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            title: None,
            out: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Drop the remembered screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Update the terminal window title when it differs from the last one set.
    pub fn set_title(&mut self, title: &'static str) -> Result<()> {
        if self.title == Some(title) {
            return Ok(());
        }
        self.out.clear();
        self.out.queue(terminal::SetTitle(title))?;
        self.flush()?;
        self.title = Some(title);
        Ok(())
    }

    /// Draw `fb`, then swap it with the previously shown buffer.
    ///
    /// On return `fb` holds stale contents the caller can paint over.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        match self.shown.take() {
            Some(mut shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(&shown, fb, &mut self.out)?;
                self.flush()?;
                std::mem::swap(&mut shown, fb);
                self.shown = Some(shown);
            }
            reusable => {
                encode_full_into(fb, &mut self.out)?;
                self.flush()?;
                let mut shown = reusable.unwrap_or_else(|| FrameBuffer::new(0, 0));
                shown.resize(fb.width(), fb.height());
                std::mem::swap(&mut shown, fb);
                self.shown = Some(shown);
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let glyph = fb.get(x, y).unwrap_or_default();
            queue_style_change(out, &mut style, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the glyphs that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let glyph = next.get(cx, y).unwrap_or_default();
            queue_style_change(out, &mut style, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    })?;
    if style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn queue_style_change(
    out: &mut Vec<u8>,
    current: &mut Option<CellStyle>,
    style: CellStyle,
) -> Result<()> {
    if *current == Some(style) {
        return Ok(());
    }
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    *current = Some(style);
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Calls `f(x, y, len)` for each horizontal run of differing glyphs.
///
/// Buffers of different sizes are treated as entirely changed.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    for y in 0..next.height() {
        if !same_size {
            f(0, y, next.width())?;
            continue;
        }
        let differs = |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        while x < next.width() {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && differs(x) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(prev, next, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn identical_buffers_have_no_runs() {
        let a = FrameBuffer::new(4, 2);
        assert!(runs(&a, &a.clone()).is_empty());

        let mut out = Vec::new();
        encode_diff_into(&a, &a, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn adjacent_changes_coalesce() {
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        b.put_str(1, 0, "XYZ", CellStyle::default());
        b.put_char(5, 1, '#', CellStyle::default());
        assert_eq!(runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn style_only_change_is_a_run() {
        let a = FrameBuffer::new(3, 1);
        let mut b = a.clone();
        b.put_char(2, 0, ' ', CellStyle::default().bold());
        assert_eq!(runs(&a, &b), vec![(2, 0, 1)]);
    }

    #[test]
    fn resized_buffer_is_fully_dirty() {
        let a = FrameBuffer::new(3, 1);
        let b = FrameBuffer::new(4, 2);
        assert_eq!(runs(&a, &b), vec![(0, 0, 4), (0, 1, 4)]);
    }

    #[test]
    fn full_encode_prints_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "abc", CellStyle::default());
        fb.put_str(0, 1, "def", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abc"));
        assert!(text.contains("def"));
    }

    #[test]
    fn color_conversion_keeps_channels() {
        assert_eq!(
            to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
