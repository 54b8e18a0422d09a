//! Console Module - crossterm-backed terminal session
//!
//! Implements the echo loop's `Console` trait on top of crossterm:
//! blocking event reads, positioned color-coded line writes, and raw-mode
//! session setup/teardown with an alternate-screen buffer.
//!
//! Teardown is attempted again on drop as a best-effort safety net, so a
//! panicking caller still gets a usable terminal back.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    event::read,
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use log::debug;
use unicode_width::UnicodeWidthStr;

use crate::echo::Console;
use crate::event::{from_crossterm, Channel, Input};

/// Banner background, matching the demo's plum tone.
const BANNER_BG: Color = Color::Rgb {
    r: 0xbb,
    g: 0x64,
    b: 0xbb,
};

/// A raw-mode terminal session owning stdout.
pub struct TermConsole {
    out: Stdout,
    cols: u16,
    rows: u16,
    active: bool,
}

impl TermConsole {
    /// Enter raw mode on the alternate screen and snapshot the terminal
    /// dimensions.
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Clear(ClearType::All)) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        debug!("raw session started at {}x{}", cols, rows);
        Ok(Self {
            out,
            cols,
            rows,
            active: true,
        })
    }

    /// Draw the centered, underlined banner on row 0.
    pub fn draw_banner(&mut self, text: &str) -> io::Result<()> {
        let width = text.width() as u16;
        let col = self.cols.saturating_sub(width) / 2;
        execute!(
            self.out,
            MoveTo(col, 0),
            SetAttribute(Attribute::Underlined),
            SetForegroundColor(Color::Black),
            SetBackgroundColor(BANNER_BG),
            Print(text),
            SetAttribute(Attribute::NoUnderline),
            ResetColor,
        )
    }

    /// Leave the alternate screen and restore cooked mode.
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        debug!("raw session released");
        Ok(())
    }
}

impl Console for TermConsole {
    fn read_event(&mut self) -> io::Result<Option<Input>> {
        Ok(from_crossterm(read()?))
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn refresh_dimensions(&mut self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        Ok((cols, rows))
    }

    fn put_line(&mut self, row: u16, text: &str, channel: Channel) -> io::Result<()> {
        let (r, g, b) = channel.rgb();
        queue!(
            self.out,
            MoveTo(0, row),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print(text),
            ResetColor,
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for TermConsole {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
