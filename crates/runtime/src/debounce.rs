use std::cell::RefCell;

/// Quiet period before a debounced action runs (milliseconds).
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Trailing-edge debouncer over a cancel-on-drop timer handle `T`.
///
/// Holds at most one pending timer. Arming a new one drops the previous
/// handle, which cancels it, so only the last event of a burst runs and no
/// handles accumulate.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay_ms: u32,
    pending: RefCell<Option<T>>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replaces the pending timer with `timer`.
    pub fn arm(&self, timer: T) {
        let previous = self.pending.borrow_mut().replace(timer);
        // Dropped outside the borrow; cancelling may run arbitrary code.
        drop(previous);
    }

    /// Drops the pending timer, if any.
    pub fn cancel(&self) -> bool {
        let previous = self.pending.borrow_mut().take();
        previous.is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DEBOUNCE_MS, Debouncer};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many handles were dropped (cancelled).
    struct Timer {
        id: u32,
        dropped: Rc<Cell<u32>>,
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[test]
    fn burst_keeps_only_the_last_timer() {
        let dropped = Rc::new(Cell::new(0));
        let debouncer = Debouncer::default();
        for id in 0..5 {
            debouncer.arm(Timer {
                id,
                dropped: dropped.clone(),
            });
        }
        assert_eq!(dropped.get(), 4);
        assert!(debouncer.is_armed());
        assert_eq!(debouncer.pending.borrow().as_ref().map(|t| t.id), Some(4));
        assert_eq!(debouncer.delay_ms(), DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn cancel_releases_the_pending_timer() {
        let dropped = Rc::new(Cell::new(0));
        let debouncer = Debouncer::new(50);
        assert!(!debouncer.cancel());
        debouncer.arm(Timer {
            id: 1,
            dropped: dropped.clone(),
        });
        assert!(debouncer.cancel());
        assert_eq!(dropped.get(), 1);
        assert!(!debouncer.is_armed());
        assert_eq!(debouncer.delay_ms(), 50);
    }
}
