//! Entry point for the `lspwire` message inspector.
//!
//! The binary delegates to [`lspwire_inspect::run`], which parses arguments,
//! loads configuration and reports on each message read from the input.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdin: StdinLock<'static> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    lspwire_inspect::run(std::env::args_os(), stdin, &mut stdout, &mut stderr)
}
