//! Cancellation for in-flight resolutions.
//!
//! The site runs on a single thread, so a token is a shared `Cell<bool>`.
//! [`CancelSlot`] keeps the token of the latest navigation and cancels the
//! previous one whenever a new request starts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared cancellation flag for one resolution.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Holds the token of the most recent request.
#[derive(Debug, Default)]
pub struct CancelSlot(RefCell<Option<CancelToken>>);

impl CancelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is in flight and hand out a fresh token.
    pub fn renew(&self) -> CancelToken {
        let token = CancelToken::new();
        if let Some(previous) = self.0.borrow_mut().replace(token.clone()) {
            previous.cancel();
        }
        token
    }
}
