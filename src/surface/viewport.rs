//! Viewport size source for layout passes

use crate::Viewport;
use std::sync::Mutex;

/// Read-only access to the current viewport dimensions.
///
/// Consulted on load and on each resize pass, never stored: the layout always
/// reflects whatever the source reports at the moment it runs.
pub trait ViewportSource: Send + Sync {
    fn current(&self) -> Viewport;
}

/// A mutable in-memory viewport the host resizes
pub struct SharedViewport {
    inner: Mutex<Viewport>,
}

impl SharedViewport {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            inner: Mutex::new(viewport),
        }
    }

    /// Update the reported dimensions (the host's resize notification)
    pub fn resize(&self, viewport: Viewport) {
        let mut guard = self.inner.lock().unwrap();
        *guard = viewport;
    }
}

impl Default for SharedViewport {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ViewportSource for SharedViewport {
    fn current(&self) -> Viewport {
        *self.inner.lock().unwrap()
    }
}
