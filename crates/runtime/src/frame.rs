/// Render-loop frame metadata.
///
/// One frame per display refresh; the viewer advances its animation by a fixed
/// amount per frame rather than by wall-clock time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
}

impl Frame {
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    pub fn next(self) -> Self {
        Self::new(self.index.wrapping_add(1))
    }

    pub fn is_first(self) -> bool {
        self.index == 0
    }
}
