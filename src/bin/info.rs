//! termscope-info - dump detected terminal capabilities.
//!
//! Prints to the normal screen buffer so the report stays in the scrollback,
//! no alternate screen and no raw mode. Takes no flags.

use std::io::{self, Write};
use std::process::ExitCode;

use termscope::{caps::TermCaps, showcase};

fn main() -> ExitCode {
    env_logger::init();

    let caps = TermCaps::detect();
    let mut out = io::stdout().lock();
    if let Err(err) = render(&caps, &mut out) {
        eprintln!("termscope-info: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn render<W: Write>(caps: &TermCaps, out: &mut W) -> io::Result<()> {
    caps.render_report(out)?;
    showcase::render(caps, out)?;
    out.flush()
}
