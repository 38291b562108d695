//! The editable input surface

use crate::surface::SurfaceSize;
use std::sync::Mutex;

/// The surface the user types into.
///
/// Hosts differ in how they expose the typed text: form-control widgets have
/// a `value`-style string property, freeform editable regions a text-content
/// one. This trait absorbs that difference; the renderer and controller only
/// ever read `value()` and never know which shape backs it.
pub trait EditableSurface: Send + Sync {
    /// Current raw input exactly as typed
    fn value(&self) -> String;

    /// Replace the surface content (used when restoring a persisted session)
    fn set_value(&self, text: &str);

    /// Apply dimensions to the surface's container
    fn set_size(&self, size: SurfaceSize);

    /// Dimensions last applied by the layout pass, if any
    fn size(&self) -> Option<SurfaceSize>;
}

/// In-memory implementation backing tests, demos, and headless hosts
pub struct InMemoryEditableSurface {
    value: Mutex<String>,
    size: Mutex<Option<SurfaceSize>>,
}

impl InMemoryEditableSurface {
    pub fn new() -> Self {
        Self {
            value: Mutex::new(String::new()),
            size: Mutex::new(None),
        }
    }
}

impl Default for InMemoryEditableSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EditableSurface for InMemoryEditableSurface {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_value(&self, text: &str) {
        let mut guard = self.value.lock().unwrap();
        *guard = text.to_string();
    }

    fn set_size(&self, size: SurfaceSize) {
        let mut guard = self.size.lock().unwrap();
        *guard = Some(size);
    }

    fn size(&self) -> Option<SurfaceSize> {
        *self.size.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trips_verbatim() {
        let surface = InMemoryEditableSurface::new();
        surface.set_value("<b>hi</b>");
        assert_eq!(surface.value(), "<b>hi</b>");
    }

    #[test]
    fn size_can_be_applied_and_read_back() {
        let surface = InMemoryEditableSurface::new();
        surface.set_size(SurfaceSize::new(1088, 216));
        assert_eq!(surface.size(), Some(SurfaceSize::new(1088, 216)));
    }
}
