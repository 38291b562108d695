//! Surface boundaries: the editable input, the isolated preview, and the
//! viewport size source.
//!
//! This module contains the traits a host embeds the preview pipeline behind.
//! The session controller and renderer only ever talk to these seams, so a
//! host can back them with real UI widgets while tests and the bundled demos
//! use the in-memory implementations.

pub mod editable;
pub mod preview;
pub mod viewport;

pub use editable::{EditableSurface, InMemoryEditableSurface};
pub use preview::{InMemoryPreviewSurface, PreviewSurface};
pub use viewport::{SharedViewport, ViewportSource};

/// Pixel dimensions applied to a surface by the layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_surfaces_start_empty() {
        let editable = InMemoryEditableSurface::new();
        assert_eq!(editable.value(), "");
        assert!(editable.size().is_none());

        let preview = InMemoryPreviewSurface::new();
        assert!(preview.document().is_none());
        assert!(preview.size().is_none());
    }
}
