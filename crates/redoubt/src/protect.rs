//! Protected-region entry and the dual-entry discriminant.

use std::panic::{self, AssertUnwindSafe};
use std::process;

use crate::signal::FailureSignal;
use crate::state::with_regions;

/// How a protected region was left.
///
/// This is the dual-entry discriminant of [`protect`]: one call site
/// observes either the body's completion value or the fact that a failure
/// was signaled somewhere in the body's dynamic extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOutcome<T> {
    /// The body ran to completion and the region exited normally.
    Completed(T),
    /// A failure was signaled; the body was abandoned at the signal site.
    Failed,
}

impl<T> RegionOutcome<T> {
    /// Run `recovery` if the region failed, giving the two-block
    /// protect/recover shape.
    pub fn or_recover(self, recovery: impl FnOnce() -> T) -> T {
        match self {
            RegionOutcome::Completed(value) => value,
            RegionOutcome::Failed => recovery(),
        }
    }

    /// The completion value, if the body ran to completion.
    pub fn completed(self) -> Option<T> {
        match self {
            RegionOutcome::Completed(value) => Some(value),
            RegionOutcome::Failed => None,
        }
    }

    /// Whether the region was left via a signaled failure.
    pub fn failed(&self) -> bool {
        matches!(self, RegionOutcome::Failed)
    }
}

/// Run `body` as a protected region on the calling context.
///
/// A failure signaled anywhere in `body`'s dynamic extent, by `body` itself
/// or any function it calls, abandons the frames between the signal site
/// and this call and returns [`RegionOutcome::Failed`]. Code in the body
/// after the signal site never runs.
///
/// The region's marker is popped on both exits, so by the time the caller
/// sees the outcome the region is no longer active and a signal raised from
/// recovery code targets the next enclosing region.
///
/// Nesting regions deeper than
/// [`MAX_PROTECTED_DEPTH`](crate::MAX_PROTECTED_DEPTH) on one context
/// aborts the process after a diagnostic.
///
/// Panics that are not failure signals cross the region transparently.
pub fn protect<T>(body: impl FnOnce() -> T) -> RegionOutcome<T> {
    let marker = match with_regions(|regions| regions.enter()) {
        Ok(marker) => marker,
        Err(err) => {
            eprintln!("redoubt: {err}");
            process::abort();
        }
    };
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => {
            with_regions(|regions| regions.exit(marker));
            RegionOutcome::Completed(value)
        }
        Err(payload) => {
            with_regions(|regions| regions.exit(marker));
            if payload.is::<FailureSignal>() {
                RegionOutcome::Failed
            } else {
                panic::resume_unwind(payload);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::depth;

    #[test]
    fn test_completed_body_returns_value() {
        let outcome = protect(|| 40 + 2);
        assert_eq!(outcome, RegionOutcome::Completed(42));
        assert_eq!(outcome.completed(), Some(42));
        assert!(!outcome.failed());
    }

    #[test]
    fn test_signal_in_body_yields_failed() {
        let outcome = protect(|| crate::fail!(2, "rejected\n"));
        assert!(outcome.failed());
        assert_eq!(depth(), 0);
    }

    #[test]
    fn test_or_recover_runs_only_on_failure() {
        let value = protect(|| 1).or_recover(|| 2);
        assert_eq!(value, 1);

        let value = protect(|| -> i32 { crate::fail!(2, "rejected\n") }).or_recover(|| 2);
        assert_eq!(value, 2);
    }

    #[test]
    fn test_depth_is_visible_inside_body() {
        let outcome = protect(|| {
            assert_eq!(depth(), 1);
            protect(|| depth())
        });
        assert_eq!(outcome, RegionOutcome::Completed(RegionOutcome::Completed(2)));
        assert_eq!(depth(), 0);
    }
}
