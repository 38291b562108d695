//! The isolated preview surface

use crate::surface::SurfaceSize;
use crate::Result;
use std::sync::Mutex;

/// The rendering boundary the preview pipeline commits documents to.
///
/// `set_document` fully replaces the rendered output in one assignment;
/// content committed here must not share script or style scope with the host.
/// Implementations may fail the commit (a detached or quota-limited surface),
/// which the renderer surfaces as an inline error.
pub trait PreviewSurface: Send + Sync {
    /// Replace the surface's content with a complete document
    fn set_document(&self, document: &str) -> Result<()>;

    /// The last committed document, if any
    fn document(&self) -> Option<String>;

    /// Apply dimensions to the surface
    fn set_size(&self, size: SurfaceSize);

    /// Dimensions last applied by the layout pass, if any
    fn size(&self) -> Option<SurfaceSize>;
}

/// In-memory implementation that stores the last committed document
pub struct InMemoryPreviewSurface {
    document: Mutex<Option<String>>,
    size: Mutex<Option<SurfaceSize>>,
}

impl InMemoryPreviewSurface {
    pub fn new() -> Self {
        Self {
            document: Mutex::new(None),
            size: Mutex::new(None),
        }
    }
}

impl Default for InMemoryPreviewSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSurface for InMemoryPreviewSurface {
    fn set_document(&self, document: &str) -> Result<()> {
        let mut guard = self.document.lock().unwrap();
        *guard = Some(document.to_string());
        Ok(())
    }

    fn document(&self) -> Option<String> {
        self.document.lock().unwrap().clone()
    }

    fn set_size(&self, size: SurfaceSize) {
        let mut guard = self.size.lock().unwrap();
        *guard = Some(size);
    }

    fn size(&self) -> Option<SurfaceSize> {
        *self.size.lock().unwrap()
    }
}
