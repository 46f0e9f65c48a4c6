//! Diagnostic emission for failure signals.
//!
//! Signals write their formatted message to standard error before the
//! control transfer. Emission never affects control flow: write errors are
//! swallowed, and builds with the `quiet` feature skip the write entirely.

use std::fmt;

#[cfg(not(feature = "quiet"))]
pub(crate) fn emit(message: fmt::Arguments<'_>) {
    use std::io::Write;

    let mut stderr = std::io::stderr().lock();
    let _ = stderr.write_fmt(message);
}

#[cfg(feature = "quiet")]
pub(crate) fn emit(message: fmt::Arguments<'_>) {
    let _ = message;
}
