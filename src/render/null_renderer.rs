use crate::error::GraphResult;
use crate::render::{PrimitiveCounts, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_counts: PrimitiveCounts,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.last_counts = frame.counts();
        self.frames_rendered += 1;
        Ok(())
    }
}
