use crate::framebuffer::{BUFFER_SIZE, DisplayBuffers};

/// Refresh modes for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full refresh with complete waveform
    Full,
    /// Fast refresh using the partial waveform
    Fast,
}

/// The panel the screen renders to. Implemented by frontends; the core
/// composes into `DisplayBuffers` and hands them over.
pub trait Display {
    /// Present the active buffer and swap, so the next frame diffs
    /// against what is on screen now.
    fn display(&mut self, buffers: &mut DisplayBuffers, mode: RefreshMode);
    fn copy_to_lsb(&mut self, buffer: &[u8; BUFFER_SIZE]);
    fn copy_to_msb(&mut self, buffer: &[u8; BUFFER_SIZE]);
    /// Mix the two gray planes over the displayed black/white frame.
    fn display_differential_grayscale(&mut self);
}
