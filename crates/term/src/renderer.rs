//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! Frames are repainted row by row. For each row only the span between its
//! first and last changed cell is rewritten, so a piece stepping down costs a
//! few short spans instead of a full screen. Without a previous frame of the
//! same size every row is repainted.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
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
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal; safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        self.last = None;
        Ok(())
    }

    /// Force the next draw to repaint every row (after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, keeping it as the reference for the next diff.
    ///
    /// The caller gets the previous frame's buffer back in `fb`, ready to be
    /// re-rendered into, so no frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self.last.take();
        encode_frame(prev.as_ref(), fb, &mut self.buf)?;
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        let mut spare = prev.unwrap_or_else(|| FrameBuffer::new(0, 0));
        std::mem::swap(&mut spare, fb);
        self.last = Some(spare);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .context("write frame to terminal")?;
        self.stdout.flush().context("flush terminal")?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// A missing or differently sized `prev` clears the screen and repaints
/// every row. Returns the number of rows repainted; nothing is written to
/// `out` when that is zero.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<u16> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::new(out);
    let mut painted = 0;
    for y in 0..next.height() {
        let span = match prev {
            Some(prev) => dirty_span(prev, next, y),
            None => Some((0, next.width())),
        };
        if let Some((start, end)) = span {
            pen.paint_row(next, y, start, end)?;
            painted += 1;
        }
    }

    if painted > 0 {
        pen.finish()?;
    }
    Ok(painted)
}

/// Columns `[start, end)` of row `y` from the first to the last changed cell.
///
/// Both frames must have the same size.
fn dirty_span(prev: &FrameBuffer, next: &FrameBuffer, y: u16) -> Option<(u16, u16)> {
    let differs = |x: u16| prev.get(x, y) != next.get(x, y);
    let start = (0..next.width()).find(|&x| differs(x))?;
    let last = (start..next.width()).rfind(|&x| differs(x))?;
    Some((start, last + 1))
}

/// Tracks the terminal's current colors and attributes so each escape
/// sequence is only emitted when a cell actually needs it.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    /// (bold, dim)
    attrs: Option<(bool, bool)>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    fn paint_row(&mut self, fb: &FrameBuffer, y: u16, start: u16, end: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(start, y))?;
        for x in start..end {
            let cell = fb.get(x, y).unwrap_or_default();
            self.set_style(cell.style)?;
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        let attrs = (style.bold, style.dim);
        if self.attrs != Some(attrs) {
            // SGR reset drops the colors too.
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.attrs = Some(attrs);
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(style.fg) {
            self.out.queue(SetForegroundColor(term_color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            self.out.queue(SetBackgroundColor(term_color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
