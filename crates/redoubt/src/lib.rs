//! Bounded non-local error exits for code that cannot thread `Result`
//! through every frame.
//!
//! `redoubt` marks a block of code as a *protected region*. A failure
//! signaled anywhere in the region's dynamic extent, directly or through
//! any depth of nested calls, transfers control back to the region entry
//! and skips every intermediate frame. With no region active, signaling
//! terminates the process with the supplied exit status.
//!
//! Regions nest up to a fixed depth and are tracked per thread (see the
//! `threaded` feature); a signal always lands in the innermost active
//! region of the signaling thread.
//!
//! # Example
//!
//! ```
//! use redoubt::{is_protected, protect};
//!
//! fn parse(input: &str) -> u32 {
//!     match input.parse() {
//!         Ok(value) => value,
//!         Err(_) => redoubt::fail!(2, "not a number: {input}\n"),
//!     }
//! }
//!
//! let outcome = protect(|| parse("17") + parse("forty"));
//! assert!(outcome.failed());
//! assert!(!is_protected());
//! ```
//!
//! # Contract
//!
//! - The mechanism does no resource management of its own. Frames between
//!   the signal site and the region entry are abandoned mid-execution;
//!   their locals are dropped as the unwinder passes, but nothing else
//!   (open transactions, external state) is rolled back.
//! - No error information crosses the jump beyond the fact that a failure
//!   happened. The status code and message only reach the diagnostic
//!   stream, or the process exit status when unprotected.
//! - Signals ride the platform unwinder, so the crate requires the default
//!   `panic = "unwind"` setting.
//!
//! # Build configuration
//!
//! - `threaded` (default): one region stack per thread. Disable for
//!   single-threaded hosts to use a single global stack.
//! - `quiet`: suppress signal diagnostics; control transfer is unchanged.

mod diagnostics;
mod protect;
mod signal;
mod stack;
mod state;

pub use protect::{protect, RegionOutcome};
pub use signal::signal_failure;
pub use stack::{CapacityExceeded, Marker, RegionStack, MAX_PROTECTED_DEPTH};
pub use state::{depth, is_protected};
