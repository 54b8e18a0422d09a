//! Echo Module - The scrolling input echo loop
//!
//! Consumes decoded input events from a `Console`, classifies each one,
//! writes a color-coded description into a scrolling display region, and
//! keeps a bounded, newest-first history of what was seen.
//!
//! The loop owns all of its state (cursor row, history, cached terminal
//! dimensions) and talks to the terminal only through the `Console` trait,
//! so it can be driven by a scripted mock in tests.
//!
//! # Display region
//!
//! Row 0 holds the banner and the bottom two rows stay blank, so event
//! lines occupy rows `1..=rows - 3`, wrapping back to row 1. Wrapped rows
//! are overwritten in place; older lines are not repainted or faded.

use std::collections::VecDeque;
use std::io;

use log::debug;
use thiserror::Error;

use crate::event::{describe, Channel, Input};

// =============================================================================
// CONSOLE TRAIT
// =============================================================================

/// The terminal collaborator the echo loop drives.
///
/// One blocking read at a time; everything else is synchronous.
pub trait Console {
    /// Block until the next decoded event. `Ok(None)` means the decoder
    /// produced something the loop does not consume; the loop asks again.
    /// `ErrorKind::Interrupted` is the benign signal-delivery case.
    fn read_event(&mut self) -> io::Result<Option<Input>>;

    /// Cached terminal dimensions as (columns, rows).
    fn dimensions(&self) -> (u16, u16);

    /// Re-query the terminal for its dimensions after a resize.
    fn refresh_dimensions(&mut self) -> io::Result<(u16, u16)>;

    /// Write a classified line at (row, column 0), replacing the row.
    fn put_line(&mut self, row: u16, text: &str, channel: Channel) -> io::Result<()>;

    /// Flush the frame to the terminal.
    fn flush(&mut self) -> io::Result<()>;
}

// =============================================================================
// ERRORS
// =============================================================================

/// Fatal failures of the echo loop and its session. Every hard error
/// stops the loop; only interrupted reads are retried.
#[derive(Debug, Error)]
pub enum EchoError {
    #[error("error preparing terminal ({0})")]
    Setup(#[source] io::Error),
    #[error("error reading from terminal ({0})")]
    Read(#[source] io::Error),
    #[error("error writing to terminal ({0})")]
    Render(#[source] io::Error),
    #[error("error restoring terminal ({0})")]
    Teardown(#[source] io::Error),
}

// =============================================================================
// ECHO LOOP
// =============================================================================

/// Scrolling echo loop state. Created at loop start, discarded on exit.
pub struct EchoLoop<C: Console> {
    console: C,
    history: VecDeque<Input>,
    cursor_row: u16,
    cols: u16,
    rows: u16,
}

impl<C: Console> EchoLoop<C> {
    /// Create a loop over a console, snapshotting its dimensions.
    pub fn new(console: C) -> Self {
        let (cols, rows) = console.dimensions();
        Self {
            console,
            history: VecDeque::new(),
            cursor_row: 1,
            cols,
            rows,
        }
    }

    /// Newest-first history of accepted events.
    pub fn history(&self) -> &VecDeque<Input> {
        &self.history
    }

    /// The row the next event line will be written to.
    pub fn cursor_row(&self) -> u16 {
        self.cursor_row
    }

    /// Cached terminal dimensions as (columns, rows).
    pub fn dimensions(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Access the underlying console.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Last display row event lines may occupy. Floors at 1 so degenerate
    /// terminal heights cannot push the cursor into the banner row.
    fn last_row(&self) -> u16 {
        self.rows.saturating_sub(3).max(1)
    }

    /// History capacity; may be zero on very short terminals.
    fn history_cap(&self) -> usize {
        usize::from(self.rows.saturating_sub(3))
    }

    /// Run until the terminal read fails hard.
    ///
    /// Interrupted reads retry without touching any state. Read failures
    /// surface as `EchoError::Read`; write or flush failures as
    /// `EchoError::Render`.
    pub fn run(&mut self) -> Result<(), EchoError> {
        loop {
            let input = match self.console.read_event() {
                Ok(Some(input)) => input,
                Ok(None) => continue,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(EchoError::Read(err)),
            };
            self.step(input)?;
        }
    }

    /// Process one accepted event.
    pub fn step(&mut self, input: Input) -> Result<(), EchoError> {
        if let Input::Resize(..) = input {
            // Dimensions must be current before the next wrap calculation.
            let (cols, rows) = self.console.refresh_dimensions().map_err(EchoError::Read)?;
            self.apply_dimensions(cols, rows);
            return Ok(());
        }

        let (text, channel) = describe(&input);
        self.console
            .put_line(self.cursor_row, &text, channel)
            .map_err(EchoError::Render)?;
        self.console.flush().map_err(EchoError::Render)?;

        self.cursor_row = if self.cursor_row >= self.last_row() {
            1
        } else {
            self.cursor_row + 1
        };

        self.history.push_front(input);
        self.history.truncate(self.history_cap());
        Ok(())
    }

    /// Apply fresh terminal dimensions, clamping cursor and history to the
    /// new bounds.
    fn apply_dimensions(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        if self.cursor_row > self.last_row() {
            self.cursor_row = 1;
        }
        self.history.truncate(self.history_cap());
        debug!("terminal resized to {}x{}", cols, rows);
    }
}

// =============================================================================
// TESTS
// =============================================================================
