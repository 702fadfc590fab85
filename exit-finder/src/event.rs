//! One-shot events.
//!
//! A toast or a navigation must fire once even if the UI re-reads the
//! state while re-rendering, so events are not ordinary persistent state:
//! each carries a consumed flag and yields its content at most once.

use std::sync::atomic::{AtomicBool, Ordering};

/// A value guaranteed to be observed at most once.
#[derive(Debug)]
pub struct Event<T> {
    content: T,
    handled: AtomicBool,
}

impl<T> Event<T> {
    /// Wrap a value in a fresh, unconsumed event.
    pub fn new(content: T) -> Self {
        Self {
            content,
            handled: AtomicBool::new(false),
        }
    }

    /// Consume the event, returning its content on the first call only.
    pub fn take(&self) -> Option<&T> {
        if self.handled.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(&self.content)
        }
    }

    /// Whether the event has already been consumed.
    pub fn is_handled(&self) -> bool {
        self.handled.load(Ordering::Acquire)
    }
}
