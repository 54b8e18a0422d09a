//! # termscope
//!
//! Terminal capability and input event demos.
//!
//! Two binaries ship with this crate:
//!
//! - `termscope-info` dumps what the hosting terminal can do (color depth,
//!   text styles, glyph repertoires, bitmap graphics) and renders a
//!   decorative glyph showcase.
//! - `termscope-input` runs an interactive loop that classifies every
//!   decoded key into one of three color-coded categories and echoes it
//!   into a scrolling display region with a bounded history.
//!
//! All terminal I/O goes through crossterm. The echo loop itself only
//! sees the [`echo::Console`] trait, so its classification, cursor, and
//! history behavior is fully testable without a terminal.
//!
//! ## Modules
//!
//! - [`event`] - Decoded input model, classification, display formatting
//! - [`echo`] - The scrolling echo loop and its collaborator trait
//! - [`console`] - crossterm-backed raw-mode session
//! - [`caps`] - Capability detection and the colored report
//! - [`showcase`] - Glyph tables and gradient-tinted rendering

pub mod caps;
pub mod console;
pub mod echo;
pub mod event;
pub mod showcase;

pub use caps::{ColorDepth, PixelSupport, StyleCaps, TermCaps};
pub use console::TermConsole;
pub use echo::{Console, EchoError, EchoLoop};
pub use event::{describe, from_crossterm, Category, Channel, Input, Key};
