//! Change-notification hooks.
//!
//! A registration point only, no logic of its own: the cart store invokes
//! every registered callback exactly once per mutation, synchronously,
//! after state is fully updated. Invocation follows registration order so
//! tests observe a deterministic sequence.

use crate::store::{CartEntry, CartSummary};

/// Callback invoked after a cart mutation with the fresh summary and the
/// current entries.
pub type ChangeCallback = Box<dyn Fn(&CartSummary, &[CartEntry])>;

/// Registry of change callbacks.
#[derive(Default)]
pub struct ChangeHooks {
    callbacks: Vec<ChangeCallback>,
}

impl ChangeHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, callback: impl Fn(&CartSummary, &[CartEntry]) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    /// Fan out to every callback, in registration order.
    pub fn notify(&self, summary: &CartSummary, entries: &[CartEntry]) {
        for callback in &self.callbacks {
            callback(summary, entries);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl core::fmt::Debug for ChangeHooks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeHooks")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
