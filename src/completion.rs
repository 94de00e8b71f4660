//! One-shot completion latch
//!
//! A [`Completion`] wraps a handler that must run at most once. Clones share the
//! same slot, so a transport may hand copies around (or call `complete` twice by
//! mistake) and the handler still fires only for the first value.

use std::fmt;
use std::sync::{Arc, Mutex};

type Handler<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// Shared one-shot handler
pub struct Completion<T> {
    slot: Arc<Mutex<Option<Handler<T>>>>,
}

impl<T> Completion<T> {
    /// Wrap a handler
    pub fn new<F>(handler: F) -> Self
    where
        F: FnOnce(T) + Send + 'static,
    {
        Self {
            slot: Arc::new(Mutex::new(Some(Box::new(handler)))),
        }
    }

    /// Deliver `value` to the handler
    ///
    /// Returns `true` if this call fired the handler, `false` if it had already
    /// fired. The handler is released before it runs, so anything it captured is
    /// dropped as soon as it returns.
    pub fn complete(&self, value: T) -> bool {
        let handler = self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        match handler {
            Some(handler) => {
                handler(value);
                true
            }
            None => false,
        }
    }

    /// Whether the handler has already fired
    pub fn is_completed(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_none()
    }
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("completed", &self.is_completed())
            .finish()
    }
}
