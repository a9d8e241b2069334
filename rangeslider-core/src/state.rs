//! Single-owner cell holding the most recent refinement state.
//!
//! The [`RangeAdapter`](crate::adapter::RangeAdapter) owns the [`StateCell`]
//! and is the only writer. Everything else gets a [`RefineHandle`], which can
//! only invoke the current `refine` callback.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Range, RefinementState, Selection};

#[derive(Debug, Default)]
pub struct StateCell {
    inner: Rc<RefCell<RefinementState>>,
}

impl StateCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replace(&self, state: RefinementState) {
        *self.inner.borrow_mut() = state;
    }

    pub fn snapshot(&self) -> RefinementState {
        self.inner.borrow().clone()
    }

    pub fn range(&self) -> Range {
        self.inner.borrow().range
    }

    pub fn start(&self) -> Selection {
        self.inner.borrow().start
    }

    pub fn refine_handle(&self) -> RefineHandle {
        RefineHandle {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only view that forwards selections to the latest `refine` callback.
#[derive(Debug, Clone)]
pub struct RefineHandle {
    inner: Rc<RefCell<RefinementState>>,
}

impl RefineHandle {
    pub fn refine(&self, values: Selection) {
        // release the borrow before calling out
        let refine = self.inner.borrow().refine.clone();
        refine.call(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Refine;
    use std::cell::Cell;

    #[test]
    fn handle_uses_latest_refine() {
        let cell = StateCell::new();
        let handle = cell.refine_handle();

        // before any state: no-op
        handle.refine([1.0, 2.0]);

        let seen = Rc::new(Cell::new([0.0, 0.0]));
        let sink = seen.clone();
        cell.replace(RefinementState::new(
            Range::new(0.0, 10.0),
            [0.0, 10.0],
            Refine::new(move |v| sink.set(v)),
        ));
        handle.refine([3.0, 4.0]);
        assert_eq!(seen.get(), [3.0, 4.0]);
    }

    #[test]
    fn replace_swaps_wholesale() {
        let cell = StateCell::new();
        cell.replace(RefinementState::new(
            Range::new(1.0, 9.0),
            [2.0, 8.0],
            Refine::noop(),
        ));
        assert_eq!(cell.range(), Range::new(1.0, 9.0));
        assert_eq!(cell.start(), [2.0, 8.0]);
    }
}
