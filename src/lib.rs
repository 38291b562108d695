//! LivePreview Engine
//!
//! A headless live-preview pipeline for Rust: markup typed into an editable
//! surface is wrapped in a fixed document shell and committed to an isolated
//! preview surface, re-rendered on every (debounced) edit, with the last
//! input optionally persisted across sessions and surface layout derived
//! from viewport size.
//!
//! # Features
//!
//! - **Trait surfaces**: the editable input, the preview boundary, viewport
//!   size, and persistence are all seams a host implements; in-memory
//!   implementations are bundled for tests and headless embedding
//! - **Last-call-wins debouncing**: rapid edits collapse into one render of
//!   the latest input
//! - **Contained failures**: a failed render or save is logged and surfaced
//!   inline in the preview, never propagated
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use livepreview::{Session, SessionConfig};
//! use livepreview::surface::{
//!     EditableSurface, InMemoryEditableSurface, InMemoryPreviewSurface, PreviewSurface,
//!     SharedViewport,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let editable = Arc::new(InMemoryEditableSurface::new());
//! let preview = Arc::new(InMemoryPreviewSurface::new());
//! let viewport = Arc::new(SharedViewport::default());
//!
//! let session = Session::new(
//!     editable.clone(),
//!     preview.clone(),
//!     viewport,
//!     None,
//!     SessionConfig::default(),
//! )?;
//!
//! session.on_load();
//! assert_eq!(
//!     preview.document().as_deref(),
//!     Some("<p>Start typing to see preview...</p>"),
//! );
//!
//! editable.set_value("<b>hi</b>");
//! session.notify_input(); // renders after the quiet period
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod debounce;
pub mod render;
pub mod session;
pub mod storage;
pub mod surface;

// Text-snapshot inspection of committed documents
#[cfg(feature = "snapshot")]
pub mod snapshot;

// Re-export the session types at the crate root for ergonomic embedding
pub use session::{LayoutPlan, Session};

/// Placeholder committed to the preview before any input exists
pub const DEFAULT_PLACEHOLDER: &str = "<p>Start typing to see preview...</p>";

/// Configuration for a preview session
///
/// The defaults reproduce the reference behavior: a 300 ms quiet period,
/// persistence off, and the fixed `savedCode` storage key. The original's
/// persistence variants collapse into the single `persistence_enabled` flag.
///
/// # Examples
///
/// ```
/// let cfg = livepreview::SessionConfig::default();
/// assert_eq!(cfg.quiet_period_ms, 300);
/// assert!(!cfg.persistence_enabled);
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quiet period for debounced input and resize handling, in milliseconds
    pub quiet_period_ms: u64,
    /// Whether the last rendered input is saved and restored across sessions
    pub persistence_enabled: bool,
    /// Storage key the raw input is saved under
    pub storage_key: String,
    /// Markup committed to the preview when no input has been seen yet
    pub placeholder: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: debounce::DEFAULT_QUIET_PERIOD_MS,
            persistence_enabled: false,
            storage_key: storage::SAVED_CODE_KEY.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
