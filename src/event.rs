//! Event Module - Decoded input model and classification
//!
//! Bridges crossterm's event system with the echo loop. Every decoded
//! event is classified into exactly one of three categories, each with
//! its own display color channel.
//!
//! # API
//!
//! - `Input` - Decoded event (codepoint, special key, or resize)
//! - `Key` - Named special keys with a total `label()` mapping
//! - `Category` / `Channel` - Classification and its color identity
//! - `from_crossterm` - Convert a crossterm event to an `Input`
//! - `describe` - Format an event as a one-line log entry
//! - `control_picture` - Control Pictures glyph for unprintable ASCII

use std::borrow::Cow;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
};

/// First value of the reserved band special keys are numbered from
/// (Supplementary Private Use Area-B), keeping them disjoint from every
/// assigned codepoint.
pub const SENTINEL_BASE: u32 = 0x10_0000;

/// Band slot for the resize notification, which is not a `Key`.
const RESIZE_CODE: u32 = SENTINEL_BASE + 12;

// =============================================================================
// TYPES
// =============================================================================

/// A named special key, distinct from ordinary codepoints.
///
/// Keys that terminals deliver as plain control codes (Tab, Escape) are
/// deliberately not listed here; they arrive as ASCII codepoints instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Invalid,
    Left,
    Up,
    Right,
    Down,
    Insert,
    Delete,
    PageDown,
    PageUp,
    Home,
    End,
    /// Function key, `F(0)` through `F(30)`.
    F(u8),
    Backspace,
    Center,
    Enter,
    Clear,
    DownLeft,
    DownRight,
    UpLeft,
    UpRight,
    Begin,
    Cancel,
    Close,
    Command,
    Copy,
    Exit,
    Print,
    Refresh,
    /// Anything the decoder recognized but this table does not.
    Unknown,
}

impl Key {
    /// Human-readable name. Total: every variant yields a non-empty string,
    /// with `Unknown` mapping to `"unknown"`. Only `F(n)` allocates.
    pub fn label(&self) -> Cow<'static, str> {
        let name = match self {
            Key::Invalid => "invalid",
            Key::Left => "left",
            Key::Up => "up",
            Key::Right => "right",
            Key::Down => "down",
            Key::Insert => "insert",
            Key::Delete => "delete",
            Key::PageDown => "pgdown",
            Key::PageUp => "pgup",
            Key::Home => "home",
            Key::End => "end",
            Key::F(n) => return Cow::Owned(format!("F{}", n)),
            Key::Backspace => "backspace",
            Key::Center => "center",
            Key::Enter => "enter",
            Key::Clear => "clear",
            Key::DownLeft => "down+left",
            Key::DownRight => "down+right",
            Key::UpLeft => "up+left",
            Key::UpRight => "up+right",
            Key::Begin => "begin",
            Key::Cancel => "cancel",
            Key::Close => "close",
            Key::Command => "command",
            Key::Copy => "copy",
            Key::Exit => "exit",
            Key::Print => "print",
            Key::Refresh => "refresh",
            Key::Unknown => "unknown",
        };
        Cow::Borrowed(name)
    }

    /// Numeric value of this key inside the reserved sentinel band,
    /// shown in the echoed line alongside the name.
    pub fn code(&self) -> u32 {
        let slot = match self {
            Key::Invalid => 0,
            Key::Up => 1,
            Key::Right => 2,
            Key::Down => 3,
            Key::Left => 4,
            Key::Insert => 5,
            Key::Delete => 6,
            Key::Backspace => 7,
            Key::PageDown => 8,
            Key::PageUp => 9,
            Key::Home => 10,
            Key::End => 11,
            // Slot 12 belongs to the resize notification.
            Key::F(n) => 20 + u32::from(*n),
            Key::Center => 100,
            Key::Enter => 101,
            Key::Clear => 102,
            Key::DownLeft => 103,
            Key::DownRight => 104,
            Key::UpLeft => 105,
            Key::UpRight => 106,
            Key::Begin => 107,
            Key::Cancel => 108,
            Key::Close => 109,
            Key::Command => 110,
            Key::Copy => 111,
            Key::Exit => 112,
            Key::Print => 113,
            Key::Refresh => 114,
            Key::Unknown => 0xffff,
        };
        SENTINEL_BASE + slot
    }
}

/// A decoded input event as consumed by the echo loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// A Unicode scalar codepoint.
    Char(char),
    /// A named special key.
    Key(Key),
    /// Terminal resize notification (new columns, new rows).
    Resize(u16, u16),
}

/// Classification of an input event. Total and disjoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Codepoint below 0x80.
    Ascii,
    /// Special key (including resize).
    Special,
    /// Any other codepoint.
    NonAscii,
}

impl Input {
    /// Classify this event. Priority order: ASCII first, then special
    /// keys, then everything else.
    pub fn category(&self) -> Category {
        match self {
            Input::Char(c) if (*c as u32) < 0x80 => Category::Ascii,
            Input::Key(_) | Input::Resize(..) => Category::Special,
            Input::Char(_) => Category::NonAscii,
        }
    }
}

/// Fixed color identity for each event category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Ascii,
    Special,
    Unicode,
}

impl Channel {
    /// Foreground color for this channel.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Channel::Ascii => (128, 250, 64),
            Channel::Special => (250, 64, 128),
            Channel::Unicode => (64, 128, 250),
        }
    }
}

impl From<Category> for Channel {
    fn from(category: Category) -> Self {
        match category {
            Category::Ascii => Channel::Ascii,
            Category::Special => Channel::Special,
            Category::NonAscii => Channel::Unicode,
        }
    }
}

// =============================================================================
// DISPLAY GLYPHS
// =============================================================================

/// Map C0 control codepoints 0..=27 to the Unicode Control Pictures block
/// (`c + 0x2400`). Display-only; the classified value is never altered.
/// Anything outside that range passes through unchanged.
pub fn control_picture(c: char) -> char {
    let cp = c as u32;
    if cp <= 27 {
        char::from_u32(0x2400 + cp).unwrap_or(c)
    } else {
        c
    }
}

/// The glyph shown for an ASCII codepoint: the character itself when
/// printable, otherwise its Control Pictures stand-in.
fn ascii_glyph(c: char) -> char {
    if c.is_ascii_graphic() || c == ' ' {
        c
    } else {
        control_picture(c)
    }
}

// =============================================================================
// EVENT CONVERSION
// =============================================================================

/// Convert a crossterm event to an `Input`.
///
/// Returns `None` for events the echo loop does not consume (mouse, focus,
/// paste, key releases).
pub fn from_crossterm(event: CrosstermEvent) -> Option<Input> {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Resize(cols, rows) => Some(Input::Resize(cols, rows)),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to an `Input`.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Input> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let input = match event.code {
        // Ctrl+letter is a C0 control code on the wire; restore it so the
        // display shows the Control Pictures glyph.
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() {
                Input::Char(((lower as u8) - b'a' + 1) as char)
            } else {
                Input::Char(c)
            }
        }
        KeyCode::Char(c) => Input::Char(c),
        // Tab and Escape are plain control codepoints, not special keys.
        KeyCode::Tab => Input::Char('\t'),
        KeyCode::Esc => Input::Char('\u{1b}'),
        KeyCode::Enter => Input::Key(Key::Enter),
        KeyCode::Backspace => Input::Key(Key::Backspace),
        KeyCode::Left => Input::Key(Key::Left),
        KeyCode::Up => Input::Key(Key::Up),
        KeyCode::Right => Input::Key(Key::Right),
        KeyCode::Down => Input::Key(Key::Down),
        KeyCode::Insert => Input::Key(Key::Insert),
        KeyCode::Delete => Input::Key(Key::Delete),
        KeyCode::PageDown => Input::Key(Key::PageDown),
        KeyCode::PageUp => Input::Key(Key::PageUp),
        KeyCode::Home => Input::Key(Key::Home),
        KeyCode::End => Input::Key(Key::End),
        KeyCode::F(n) => Input::Key(Key::F(n)),
        _ => Input::Key(Key::Unknown),
    };
    Some(input)
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Format an event as the one-line description the echo loop displays,
/// paired with its color channel.
pub fn describe(input: &Input) -> (String, Channel) {
    match input {
        Input::Char(c) if input.category() == Category::Ascii => {
            let cp = *c as u32;
            (
                format!("Got ASCII: [0x{:02x} ({:03})] '{}'", cp, cp, ascii_glyph(*c)),
                Channel::Ascii,
            )
        }
        Input::Char(c) => {
            let cp = *c as u32;
            (format!("Got UTF-8: [0x{:08x}] '{}'", cp, c), Channel::Unicode)
        }
        Input::Key(key) => (
            format!("Got special key: [0x{:02x}] '{}'", key.code(), key.label()),
            Channel::Special,
        ),
        Input::Resize(..) => (
            format!("Got special key: [0x{:02x}] 'resize event'", RESIZE_CODE),
            Channel::Special,
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_classification() {
        for cp in 0u32..0x80 {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(Input::Char(c).category(), Category::Ascii, "cp {:#x}", cp);
        }
    }

    #[test]
    fn test_non_ascii_classification() {
        for c in ['\u{80}', 'é', '本', '🦀', '\u{10FFFF}'] {
            assert_eq!(Input::Char(c).category(), Category::NonAscii);
        }
    }

    #[test]
    fn test_special_classification() {
        assert_eq!(Input::Key(Key::Left).category(), Category::Special);
        assert_eq!(Input::Key(Key::Unknown).category(), Category::Special);
        assert_eq!(Input::Resize(80, 24).category(), Category::Special);
    }

    #[test]
    fn test_control_picture_range() {
        for cp in 0u32..=27 {
            let c = char::from_u32(cp).unwrap();
            assert_eq!(control_picture(c) as u32, 0x2400 + cp);
        }
        // Outside the mapped range the codepoint passes through.
        assert_eq!(control_picture('\u{1c}'), '\u{1c}');
        assert_eq!(control_picture('\u{7f}'), '\u{7f}');
        assert_eq!(control_picture('a'), 'a');
    }

    #[test]
    fn test_escape_display_glyph() {
        let (line, channel) = describe(&Input::Char('\u{1b}'));
        assert_eq!(channel, Channel::Ascii);
        assert_eq!(line, "Got ASCII: [0x1b (027)] '\u{241b}'");
    }

    #[test]
    fn test_ascii_line_format() {
        let (line, channel) = describe(&Input::Char('a'));
        assert_eq!(channel, Channel::Ascii);
        assert_eq!(line, "Got ASCII: [0x61 (097)] 'a'");
    }

    #[test]
    fn test_utf8_line_format() {
        let (line, channel) = describe(&Input::Char('é'));
        assert_eq!(channel, Channel::Unicode);
        assert_eq!(line, "Got UTF-8: [0x000000e9] 'é'");
    }

    #[test]
    fn test_special_line_format() {
        let (line, channel) = describe(&Input::Key(Key::PageDown));
        assert_eq!(channel, Channel::Special);
        assert_eq!(line, "Got special key: [0x100008] 'pgdown'");
    }

    #[test]
    fn test_special_line_carries_sentinel_value() {
        // Every special-key line shows the raw band value next to the name.
        let (line, _) = describe(&Input::Key(Key::Left));
        assert_eq!(line, "Got special key: [0x100004] 'left'");
        assert!(line.contains("[0x10"));

        let (line, _) = describe(&Input::Key(Key::F(7)));
        assert_eq!(line, format!("Got special key: [0x{:02x}] 'F7'", Key::F(7).code()));
    }

    #[test]
    fn test_key_codes_stay_in_sentinel_band() {
        let keys = [
            Key::Invalid,
            Key::Left,
            Key::End,
            Key::F(0),
            Key::F(30),
            Key::Enter,
            Key::Refresh,
            Key::Unknown,
        ];
        for key in keys {
            let code = key.code();
            assert!((SENTINEL_BASE..=0x10FFFF).contains(&code), "{:?}", key);
        }
        assert_ne!(Key::Left.code(), Key::Right.code());
    }

    #[test]
    fn test_label_is_total() {
        let keys = [
            Key::Invalid,
            Key::Left,
            Key::Up,
            Key::Right,
            Key::Down,
            Key::Insert,
            Key::Delete,
            Key::PageDown,
            Key::PageUp,
            Key::Home,
            Key::End,
            Key::Backspace,
            Key::Center,
            Key::Enter,
            Key::Clear,
            Key::DownLeft,
            Key::DownRight,
            Key::UpLeft,
            Key::UpRight,
            Key::Begin,
            Key::Cancel,
            Key::Close,
            Key::Command,
            Key::Copy,
            Key::Exit,
            Key::Print,
            Key::Refresh,
            Key::Unknown,
        ];
        for key in keys {
            assert!(!key.label().is_empty(), "{:?}", key);
        }
        for n in 0..=30 {
            assert_eq!(Key::F(n).label(), format!("F{}", n));
        }
        assert_eq!(Key::Unknown.label(), "unknown");
    }

    #[test]
    fn test_channel_colors() {
        assert_eq!(Channel::Ascii.rgb(), (128, 250, 64));
        assert_eq!(Channel::Special.rgb(), (250, 64, 128));
        assert_eq!(Channel::Unicode.rgb(), (64, 128, 250));
    }

    #[test]
    fn test_convert_key_char() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), Some(Input::Char('a')));
    }

    #[test]
    fn test_convert_key_escape_is_codepoint() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), Some(Input::Char('\u{1b}')));
    }

    #[test]
    fn test_convert_key_ctrl_letter() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), Some(Input::Char('\u{3}')));
    }

    #[test]
    fn test_convert_key_arrows() {
        let arrows = [
            (KeyCode::Left, Key::Left),
            (KeyCode::Up, Key::Up),
            (KeyCode::Right, Key::Right),
            (KeyCode::Down, Key::Down),
        ];
        for (code, expected) in arrows {
            let event = CrosstermKeyEvent {
                code,
                modifiers: KeyModifiers::empty(),
                kind: KeyEventKind::Press,
                state: crossterm::event::KeyEventState::NONE,
            };
            assert_eq!(convert_key_event(event), Some(Input::Key(expected)));
        }
    }

    #[test]
    fn test_convert_key_function_keys() {
        for n in 1..=12 {
            let event = CrosstermKeyEvent {
                code: KeyCode::F(n),
                modifiers: KeyModifiers::empty(),
                kind: KeyEventKind::Press,
                state: crossterm::event::KeyEventState::NONE,
            };
            assert_eq!(convert_key_event(event), Some(Input::Key(Key::F(n))));
        }
    }

    #[test]
    fn test_convert_key_unmapped_is_unknown() {
        let event = CrosstermKeyEvent {
            code: KeyCode::CapsLock,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), Some(Input::Key(Key::Unknown)));
    }

    #[test]
    fn test_convert_release_filtered() {
        let event = CrosstermKeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(convert_key_event(event), None);
    }

    #[test]
    fn test_convert_resize() {
        let input = from_crossterm(CrosstermEvent::Resize(120, 40));
        assert_eq!(input, Some(Input::Resize(120, 40)));
    }
}
