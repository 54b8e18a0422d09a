//! Caps Module - Terminal capability detection and report
//!
//! Detects what the hosting terminal can do (color depth, text styles,
//! glyph repertoires, bitmap graphics) from the environment, and renders
//! the colored capability report shown by `termscope-info`.
//!
//! Detection is heuristic by design: the terminal's own answer lives in
//! `TERM`/`COLORTERM`/locale variables, and the pure `from_env`-style
//! constructors keep every rule unit-testable.

use std::env;
use std::io::{self, Write};

use bitflags::bitflags;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

// =============================================================================
// TYPES
// =============================================================================

/// How many colors the terminal can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorDepth {
    Monochrome,
    Ansi16,
    Ansi256,
    TrueColor,
}

impl ColorDepth {
    /// Derive color depth from `TERM` and `COLORTERM`.
    pub fn from_env(term: Option<&str>, colorterm: Option<&str>) -> Self {
        let term = term.unwrap_or("");
        if term.is_empty() || term == "dumb" {
            return ColorDepth::Monochrome;
        }
        match colorterm {
            Some("truecolor") | Some("24bit") => return ColorDepth::TrueColor,
            _ => {}
        }
        if term.contains("truecolor") || term.contains("direct") {
            ColorDepth::TrueColor
        } else if term.contains("256") {
            ColorDepth::Ansi256
        } else {
            ColorDepth::Ansi16
        }
    }

    /// Short name used in the report.
    pub fn name(self) -> &'static str {
        match self {
            ColorDepth::Monochrome => "monochrome",
            ColorDepth::Ansi16 => "16 colors",
            ColorDepth::Ansi256 => "256 colors",
            ColorDepth::TrueColor => "rgb",
        }
    }
}

/// Bitmap graphics protocol the terminal advertises, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelSupport {
    None,
    Sixel,
    Kitty,
    Iterm2,
}

impl PixelSupport {
    /// Derive bitmap support from `TERM` and `TERM_PROGRAM`.
    pub fn from_env(term: Option<&str>, term_program: Option<&str>) -> Self {
        if term_program == Some("iTerm.app") {
            return PixelSupport::Iterm2;
        }
        let term = term.unwrap_or("");
        if term.contains("kitty") || term.contains("ghostty") {
            PixelSupport::Kitty
        } else if term.contains("sixel") || term.contains("mlterm") || term.contains("foot") {
            PixelSupport::Sixel
        } else {
            PixelSupport::None
        }
    }
}

bitflags! {
    /// Text styles the terminal is believed to honor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StyleCaps: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE   = 1 << 4;
        const STRUCK    = 1 << 5;
    }
}

impl StyleCaps {
    /// Derive style support from `TERM`. The Linux console renders neither
    /// italics nor strikethrough.
    pub fn from_term(term: Option<&str>) -> Self {
        let term = term.unwrap_or("");
        if term.is_empty() || term == "dumb" {
            return StyleCaps::empty();
        }
        let mut caps = StyleCaps::BOLD | StyleCaps::DIM | StyleCaps::UNDERLINE | StyleCaps::REVERSE;
        if term != "linux" {
            caps |= StyleCaps::ITALIC | StyleCaps::STRUCK;
        }
        caps
    }
}

/// Everything `termscope-info` reports about the hosting terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermCaps {
    pub color_depth: ColorDepth,
    pub utf8: bool,
    pub styles: StyleCaps,
    pub quadrants: bool,
    pub sextants: bool,
    pub braille: bool,
    pub pixel: PixelSupport,
}

impl TermCaps {
    /// Detect capabilities from the process environment.
    pub fn detect() -> Self {
        let term = env::var("TERM").ok();
        let colorterm = env::var("COLORTERM").ok();
        let term_program = env::var("TERM_PROGRAM").ok();
        let locale = env::var("LC_ALL")
            .or_else(|_| env::var("LC_CTYPE"))
            .or_else(|_| env::var("LANG"))
            .ok();
        Self::from_env(
            term.as_deref(),
            colorterm.as_deref(),
            term_program.as_deref(),
            locale.as_deref(),
        )
    }

    /// Pure constructor used by `detect()` and the tests.
    pub fn from_env(
        term: Option<&str>,
        colorterm: Option<&str>,
        term_program: Option<&str>,
        locale: Option<&str>,
    ) -> Self {
        let utf8 = utf8_locale(locale);
        let glyphs = utf8 && term != Some("dumb");
        Self {
            color_depth: ColorDepth::from_env(term, colorterm),
            utf8,
            styles: StyleCaps::from_term(term),
            quadrants: glyphs,
            sextants: glyphs && term != Some("linux"),
            braille: glyphs && term != Some("linux"),
            pixel: PixelSupport::from_env(term, term_program),
        }
    }

    /// Check glyph for a capability: ✓/✖ on UTF-8 terminals, +/- otherwise.
    pub fn capbool(&self, cap: bool) -> char {
        match (self.utf8, cap) {
            (true, true) => '✓',
            (true, false) => '✖',
            (false, true) => '+',
            (false, false) => '-',
        }
    }
}

/// True when the locale string asks for UTF-8.
pub fn utf8_locale(locale: Option<&str>) -> bool {
    locale
        .map(|l| {
            let l = l.to_ascii_lowercase();
            l.contains("utf-8") || l.contains("utf8")
        })
        .unwrap_or(false)
}

// =============================================================================
// REPORT RENDERING
// =============================================================================

const INDENT: &str = " ";

/// One style entry: report name, capability flag, on/off attributes.
const STYLE_TABLE: [(&str, StyleCaps, Attribute, Attribute); 6] = [
    ("bold", StyleCaps::BOLD, Attribute::Bold, Attribute::NormalIntensity),
    ("dim", StyleCaps::DIM, Attribute::Dim, Attribute::NormalIntensity),
    ("ital", StyleCaps::ITALIC, Attribute::Italic, Attribute::NoItalic),
    ("uline", StyleCaps::UNDERLINE, Attribute::Underlined, Attribute::NoUnderline),
    ("rev", StyleCaps::REVERSE, Attribute::Reverse, Attribute::NoReverse),
    ("struck", StyleCaps::STRUCK, Attribute::CrossedOut, Attribute::NotCrossedOut),
];

impl TermCaps {
    /// Write the capability report. Each style name is printed in the style
    /// it reports on.
    pub fn render_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        // Color and glyph summary.
        queue!(
            out,
            SetForegroundColor(Color::Rgb { r: 0xcc, g: 0x99, b: 0xff }),
            Print(format!(
                "{}colors: {}  utf8{} quad{} sex{} braille{}\r\n",
                INDENT,
                self.color_depth.name(),
                self.capbool(self.utf8),
                self.capbool(self.quadrants),
                self.capbool(self.sextants),
                self.capbool(self.braille),
            )),
            ResetColor,
        )?;

        // Styles, each demonstrated in place.
        queue!(
            out,
            SetForegroundColor(Color::Rgb { r: 0xc8, g: 0xa2, b: 0xc8 }),
            Print(INDENT),
        )?;
        for (name, flag, on, off) in STYLE_TABLE {
            queue!(
                out,
                SetAttribute(on),
                Print(name),
                SetAttribute(off),
                Print(self.capbool(self.styles.contains(flag))),
                Print(' '),
            )?;
        }
        queue!(out, Print("\r\n"), ResetColor)?;

        // Bitmap graphics.
        let bitmap = match self.pixel {
            PixelSupport::None => "didn't detect bitmap graphics support",
            PixelSupport::Sixel => "sixel graphics supported",
            PixelSupport::Kitty => "kitty rgba pixel graphics supported",
            PixelSupport::Iterm2 => "iTerm2 inline graphics supported",
        };
        queue!(
            out,
            SetForegroundColor(Color::Rgb { r: 0x5e, g: 0xfa, b: 0x80 }),
            Print(format!("{}{}\r\n", INDENT, bitmap)),
            ResetColor,
        )?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
