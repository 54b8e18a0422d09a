//! termscope-input - echo classified input events.
//!
//! Puts the terminal in raw mode on the alternate screen, draws a banner,
//! then echoes a color-coded description of every decoded event until the
//! terminal read fails or the process is terminated. Takes no flags.

use std::io;
use std::process::ExitCode;

use termscope::{echo::Console, EchoError, EchoLoop, TermConsole};

const BANNER: &str = "mash some keys, yo";

fn main() -> ExitCode {
    env_logger::init();

    let errors = run();
    // Loop error first, teardown failure after; neither is dropped.
    for err in &errors {
        eprintln!("termscope-input: {}", err);
    }
    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run() -> Vec<EchoError> {
    let console = match TermConsole::new() {
        Ok(console) => console,
        Err(err) => return vec![EchoError::Setup(err)],
    };
    let mut echo = EchoLoop::new(console);

    let mut banner = echo.console_mut().draw_banner(BANNER);
    if banner.is_ok() {
        banner = echo.console_mut().flush();
    }
    let outcome = match banner {
        Ok(()) => echo.run(),
        Err(err) => Err(EchoError::Setup(err)),
    };

    let teardown = echo.console_mut().release();
    session_errors(outcome, teardown)
}

/// Collect the session's failures in report order: the loop (or setup)
/// error leads, a teardown failure follows it.
fn session_errors(
    outcome: Result<(), EchoError>,
    teardown: io::Result<()>,
) -> Vec<EchoError> {
    let mut errors = Vec::new();
    if let Err(err) = outcome {
        errors.push(err);
    }
    if let Err(err) = teardown {
        errors.push(EchoError::Teardown(err));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_session_reports_nothing() {
        assert!(session_errors(Ok(()), Ok(())).is_empty());
    }

    #[test]
    fn test_teardown_failure_is_reported_alone() {
        let errors = session_errors(
            Ok(()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone")),
        );
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], EchoError::Teardown(_)));
    }

    #[test]
    fn test_teardown_failure_never_hides_loop_error() {
        let loop_err = EchoError::Read(io::Error::new(io::ErrorKind::UnexpectedEof, "done"));
        let errors = session_errors(
            Err(loop_err),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone")),
        );
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], EchoError::Read(_)));
        assert!(matches!(errors[1], EchoError::Teardown(_)));
    }
}
