//! Failure signaling and the unwind that carries it.

use std::fmt;
use std::panic;
use std::process;

use crate::diagnostics;
use crate::state::with_regions;

/// Unwind payload distinguishing a signaled failure from a host panic.
///
/// Zero-sized: boxing it does not allocate, and no error information
/// crosses the jump. The innermost region entry point catches it.
pub(crate) struct FailureSignal;

/// Report a failure.
///
/// The formatted `message` is written to standard error (unless the crate
/// is built with the `quiet` feature), then control transfers to the
/// innermost active protected region's recovery path, abandoning every
/// frame in between. With no region active the process terminates
/// immediately with `status` as its exit code.
///
/// Signaling from a recovery path composes: the signal targets the next
/// enclosing region, or terminates the process when none remains.
///
/// Most callers use [`fail!`](crate::fail) rather than building
/// [`fmt::Arguments`] by hand.
pub fn signal_failure(status: i32, message: fmt::Arguments<'_>) -> ! {
    diagnostics::emit(message);
    if with_regions(|regions| regions.is_protected()) {
        panic::resume_unwind(Box::new(FailureSignal));
    }
    process::exit(status);
}

/// Signal a failure with a status code and a printf-style diagnostic.
///
/// Expands to a [`signal_failure`] call and therefore never returns. The
/// message arm takes any [`format_args!`] input; the status-only arm
/// signals with an empty message.
///
/// # Examples
///
/// ```
/// use redoubt::protect;
///
/// let outcome = protect(|| {
///     let header = [0u8; 4];
///     if header.len() < 8 {
///         redoubt::fail!(2, "truncated header: {} bytes\n", header.len());
///     }
///     header.len()
/// });
/// assert!(outcome.failed());
/// ```
#[macro_export]
macro_rules! fail {
    ($status:expr) => {
        $crate::signal_failure($status, ::core::format_args!(""))
    };
    ($status:expr, $($message:tt)+) => {
        $crate::signal_failure($status, ::core::format_args!($($message)+))
    };
}
