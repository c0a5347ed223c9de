// SPDX-License-Identifier: MPL-2.0
//! Single-use outcome delivery for the confirmation dialog.

use std::fmt;

/// A write-at-most-once slot that maps the dialog outcome to a caller
/// message.
///
/// The first call to [`resolve`](Self::resolve) consumes the stored mapper;
/// later calls find the slot spent and yield nothing. This makes
/// "the callback fires at most once per invocation" a structural guarantee
/// rather than a convention, covering rapid double activation of a dialog
/// control before the dialog closes.
pub struct Responder<M> {
    on_result: Option<Box<dyn FnOnce(bool) -> M>>,
}

impl<M> Responder<M> {
    /// Wraps an outcome mapper into a fresh, unspent slot.
    pub fn new(on_result: impl FnOnce(bool) -> M + 'static) -> Self {
        Self {
            on_result: Some(Box::new(on_result)),
        }
    }

    /// Resolves the outcome, returning the mapped message.
    ///
    /// Returns `None` if the slot was already spent.
    pub fn resolve(&mut self, confirmed: bool) -> Option<M> {
        self.on_result.take().map(|mapper| mapper(confirmed))
    }

    /// Returns whether the outcome has already been delivered.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.on_result.is_none()
    }
}

impl<M> fmt::Debug for Responder<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("spent", &self.is_spent())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_maps_the_outcome() {
        let mut responder = Responder::new(|confirmed| confirmed as u8);
        assert_eq!(responder.resolve(true), Some(1));
    }

    #[test]
    fn second_resolution_yields_nothing() {
        let mut responder = Responder::new(|confirmed| confirmed);
        assert_eq!(responder.resolve(false), Some(false));
        assert_eq!(responder.resolve(true), None);
        assert_eq!(responder.resolve(false), None);
    }

    #[test]
    fn is_spent_tracks_resolution() {
        let mut responder = Responder::new(|_| ());
        assert!(!responder.is_spent());
        responder.resolve(true);
        assert!(responder.is_spent());
    }
}
