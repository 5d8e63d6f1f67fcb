//! Allocation failure policy.
//!
//! Running out of memory while growing a token list or a node's children
//! is never reported as a recoverable result. Every growth point funnels
//! through [`reserve`], which hands control to the installed handler; the
//! handler diverges.

use std::sync::{PoisonError, RwLock};

/// Diverging callback invoked with a short description of the failed growth.
pub type AllocFailureHandler = fn(&str) -> !;

static HANDLER: RwLock<AllocFailureHandler> = RwLock::new(abort_with_diagnostic);

/// Default handler: report on stderr and abort the process.
pub fn abort_with_diagnostic(context: &str) -> ! {
    eprintln!("{context}: failed to allocate memory");
    std::process::abort()
}

/// Replaces the process-wide allocation failure handler.
pub fn set_alloc_failure_handler(handler: AllocFailureHandler) {
    *HANDLER.write().unwrap_or_else(PoisonError::into_inner) = handler;
}

pub fn alloc_failure(context: &str) -> ! {
    let handler = *HANDLER.read().unwrap_or_else(PoisonError::into_inner);
    handler(context)
}

/// Makes room for exactly `capacity` items in `items`.
pub fn reserve<T>(items: &mut Vec<T>, capacity: usize, context: &str) {
    let additional = capacity.saturating_sub(items.len());
    if items.try_reserve_exact(additional).is_err() {
        alloc_failure(context);
    }
}

/// Capacity after one growth step: doubles, starting from one.
pub fn doubled(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(1)
}
