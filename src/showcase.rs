//! Showcase Module - Decorative glyph dump
//!
//! Renders the glyph portion of `termscope-info`: block elements, box
//! drawing corner sets, sextants, and the full braille page tinted with an
//! RGB gradient. Sections are gated on the detected glyph repertoires and
//! the whole showcase is skipped on non-UTF-8 terminals.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::caps::TermCaps;

// =============================================================================
// GLYPH TABLES
// =============================================================================

pub const HALF_BLOCKS: &str = "▀▄▌▐";
pub const QUAD_BLOCKS: &str = "▖▗▘▝▚▞▙▛▜▟";
pub const SHADE_BLOCKS: &str = "░▒▓█";
pub const EIGHTHS_BOTTOM: &str = "▁▂▃▄▅▆▇█";
pub const EIGHTHS_LEFT: &str = "▏▎▍▌▋▊▉█";

/// Corner/edge sets as (top-left, top-right, bottom-left, bottom-right,
/// horizontal, vertical).
pub const BOX_LIGHT: [char; 6] = ['┌', '┐', '└', '┘', '─', '│'];
pub const BOX_HEAVY: [char; 6] = ['┏', '┓', '┗', '┛', '━', '┃'];
pub const BOX_ROUND: [char; 6] = ['╭', '╮', '╰', '╯', '─', '│'];
pub const BOX_DOUBLE: [char; 6] = ['╔', '╗', '╚', '╝', '═', '║'];

/// The sextant block, U+1FB00..=U+1FB3B.
pub fn sextant_blocks() -> String {
    (0x1FB00..=0x1FB3B).filter_map(char::from_u32).collect()
}

/// The braille patterns page, U+2800..=U+28FF, as four rows of 64.
pub fn braille_rows() -> [String; 4] {
    let mut rows: [String; 4] = Default::default();
    for (i, row) in rows.iter_mut().enumerate() {
        let base = 0x2800 + (i as u32) * 64;
        *row = (base..base + 64).filter_map(char::from_u32).collect();
    }
    rows
}

// =============================================================================
// GRADIENT TINTING
// =============================================================================

/// Linear interpolation between two colors.
pub fn lerp(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Write one row with a horizontal color gradient, one color step per glyph.
fn write_stained_row<W: Write>(
    out: &mut W,
    text: &str,
    left: (u8, u8, u8),
    right: (u8, u8, u8),
) -> io::Result<()> {
    let len = text.chars().count().max(1);
    for (i, c) in text.chars().enumerate() {
        let t = i as f32 / (len - 1).max(1) as f32;
        let (r, g, b) = lerp(left, right, t);
        queue!(
            out,
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print(c),
        )?;
    }
    Ok(())
}

// =============================================================================
// RENDERING
// =============================================================================

const INDENT: &str = " ";
const STAIN_UL: (u8, u8, u8) = (0x30, 0x30, 0x30);
const STAIN_LR: (u8, u8, u8) = (0xc4, 0xae, 0xad);

/// Render the glyph showcase for the detected capabilities. Produces no
/// output at all on non-UTF-8 terminals.
pub fn render<W: Write>(caps: &TermCaps, out: &mut W) -> io::Result<()> {
    if !caps.utf8 {
        return Ok(());
    }

    // Block elements on one line.
    queue!(
        out,
        SetForegroundColor(Color::Rgb { r: 0x91, g: 0x72, b: 0xec }),
        Print(format!(
            "{}{} {} {} {} {}\r\n",
            INDENT, HALF_BLOCKS, QUAD_BLOCKS, SHADE_BLOCKS, EIGHTHS_BOTTOM, EIGHTHS_LEFT,
        )),
        ResetColor,
    )?;

    // Box drawing corner sets, two rows.
    let sets = [BOX_LIGHT, BOX_HEAVY, BOX_ROUND, BOX_DOUBLE];
    let mut top = String::from(INDENT);
    let mut bottom = String::from(INDENT);
    for set in sets {
        top.extend([set[0], set[4], set[1], ' ']);
        bottom.extend([set[2], set[4], set[3], ' ']);
    }
    queue!(
        out,
        SetForegroundColor(Color::Rgb { r: 0xfa, g: 0xf0, b: 0xe6 }),
        Print(top),
        Print("\r\n"),
        Print(bottom),
        Print("\r\n"),
        ResetColor,
    )?;

    if caps.sextants {
        let sextants = sextant_blocks();
        let glyphs: Vec<char> = sextants.chars().collect();
        let half = glyphs.len() / 2;
        for chunk in glyphs.chunks(half.max(1)) {
            let row: String = chunk.iter().collect();
            queue!(
                out,
                SetForegroundColor(Color::Rgb { r: 0x60, g: 0x7d, b: 0x3b }),
                Print(format!("{}{}\r\n", INDENT, row)),
                ResetColor,
            )?;
        }
    }

    if caps.braille {
        // The braille page, stained corner to corner.
        let rows = braille_rows();
        let count = rows.len();
        for (i, row) in rows.iter().enumerate() {
            let t = i as f32 / (count - 1) as f32;
            let left = lerp(STAIN_UL, STAIN_LR, t * 0.5);
            let right = lerp(STAIN_UL, STAIN_LR, 0.5 + t * 0.5);
            queue!(out, Print(INDENT))?;
            write_stained_row(out, row, left, right)?;
            queue!(out, Print("\r\n"), ResetColor)?;
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
