//! Ambient per-context storage for the region stack.
//!
//! With the default `threaded` feature every thread owns an independent
//! stack, so a failure signaled on one thread can never resume another
//! thread's recovery path. Disabling the feature switches to a single
//! process-global stack for single-threaded hosts; such builds must not
//! call into this crate from more than one thread.

use crate::stack::RegionStack;

#[cfg(feature = "threaded")]
use std::cell::RefCell;

#[cfg(feature = "threaded")]
thread_local! {
    static REGIONS: RefCell<RegionStack> = const { RefCell::new(RegionStack::new()) };
}

#[cfg(not(feature = "threaded"))]
static mut REGIONS: RegionStack = RegionStack::new();

/// Run `f` with the calling context's region stack.
///
/// `f` must not re-enter this function: callers only perform short
/// push/pop/query operations and never run user code while holding the
/// stack.
pub(crate) fn with_regions<R>(f: impl FnOnce(&mut RegionStack) -> R) -> R {
    #[cfg(feature = "threaded")]
    {
        REGIONS.with(|stack| f(&mut stack.borrow_mut()))
    }

    #[cfg(not(feature = "threaded"))]
    // Sound only under the crate's single-threaded contract for
    // non-`threaded` builds.
    unsafe {
        f(&mut *core::ptr::addr_of_mut!(REGIONS))
    }
}

/// Number of active protected regions in the calling context.
pub fn depth() -> usize {
    with_regions(|regions| regions.depth())
}

/// Whether the calling context is presently protected.
///
/// When this returns `false`, a signal terminates the process instead of
/// resuming a recovery path.
pub fn is_protected() -> bool {
    with_regions(|regions| regions.is_protected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_starts_unprotected() {
        assert_eq!(depth(), 0);
        assert!(!is_protected());
    }
}
