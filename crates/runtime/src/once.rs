use std::cell::Cell;

/// Single-initialization token.
///
/// `fire` returns `true` the first time it is called and `false` forever after,
/// so a trigger that fires repeatedly still only initializes once.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

#[cfg(test)]
mod tests {
    use super::OneShot;

    #[test]
    fn fires_exactly_once() {
        let guard = OneShot::new();
        assert!(!guard.has_fired());
        assert!(guard.fire());
        assert!(!guard.fire());
        assert!(!guard.fire());
        assert!(guard.has_fired());
    }
}
