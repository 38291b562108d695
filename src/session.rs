//! Session controller: wires the editable surface, renderer, layout, and
//! persistence into one page-lifetime object.
//!
//! A [`Session`] owns its surface handles and the two debounced actions that
//! back the host's input and resize notifications. Dropping the session
//! cancels any debounced work still pending, so nothing fires after teardown.

use crate::debounce::Debounced;
use crate::render::Renderer;
use crate::storage::KeyValueStore;
use crate::surface::{EditableSurface, PreviewSurface, SurfaceSize, ViewportSource};
use crate::{Error, Result, SessionConfig, Viewport};
use std::sync::Arc;
use std::time::Duration;

/// Preview surface fraction of viewport width and height
pub const PREVIEW_VIEWPORT_FRACTION: f64 = 0.4;
/// Editable container fraction of viewport width
pub const EDITOR_WIDTH_FRACTION: f64 = 0.85;
/// Editable container fraction of viewport height
pub const EDITOR_HEIGHT_FRACTION: f64 = 0.3;

/// Surface dimensions derived from one viewport reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub preview: SurfaceSize,
    pub editor: SurfaceSize,
}

impl LayoutPlan {
    /// Compute the plan for `viewport`. Pure and idempotent: equal viewports
    /// produce equal plans.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            preview: SurfaceSize::new(
                scaled(viewport.width, PREVIEW_VIEWPORT_FRACTION),
                scaled(viewport.height, PREVIEW_VIEWPORT_FRACTION),
            ),
            editor: SurfaceSize::new(
                scaled(viewport.width, EDITOR_WIDTH_FRACTION),
                scaled(viewport.height, EDITOR_HEIGHT_FRACTION),
            ),
        }
    }
}

fn scaled(dimension: u32, fraction: f64) -> u32 {
    (f64::from(dimension) * fraction) as u32
}

fn apply_layout(
    viewport: &dyn ViewportSource,
    editable: &dyn EditableSurface,
    preview: &dyn PreviewSurface,
) {
    let plan = LayoutPlan::for_viewport(viewport.current());
    preview.set_size(plan.preview);
    editable.set_size(plan.editor);
}

/// A live-preview session bound to one set of surfaces.
///
/// Lifecycle mirrors the host page: construct once, call [`Session::on_load`]
/// when the host is ready, then forward edit and resize notifications through
/// [`Session::notify_input`] and [`Session::notify_resize`]. The session has
/// no terminal state; it lives until dropped.
pub struct Session {
    editable: Arc<dyn EditableSurface>,
    preview: Arc<dyn PreviewSurface>,
    viewport: Arc<dyn ViewportSource>,
    store: Option<Arc<dyn KeyValueStore>>,
    renderer: Arc<Renderer>,
    config: SessionConfig,
    render_debounce: Debounced<()>,
    layout_debounce: Debounced<()>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session over the given surfaces.
    ///
    /// `store` may be omitted when `config.persistence_enabled` is false;
    /// enabling persistence without a store is a configuration error.
    pub fn new(
        editable: Arc<dyn EditableSurface>,
        preview: Arc<dyn PreviewSurface>,
        viewport: Arc<dyn ViewportSource>,
        store: Option<Arc<dyn KeyValueStore>>,
        config: SessionConfig,
    ) -> Result<Self> {
        if config.persistence_enabled && store.is_none() {
            return Err(Error::ConfigError(
                "persistence enabled without a store".to_string(),
            ));
        }

        let renderer = match (&store, config.persistence_enabled) {
            (Some(store), true) => Arc::new(Renderer::with_store(
                preview.clone(),
                store.clone(),
                config.storage_key.clone(),
            )),
            _ => Arc::new(Renderer::new(preview.clone())),
        };

        let quiet_period = Duration::from_millis(config.quiet_period_ms);

        // The render action reads the editable surface at fire time, so the
        // committed document always reflects the latest input.
        let render_debounce = Debounced::new(
            {
                let editable = editable.clone();
                let renderer = renderer.clone();
                move |()| {
                    let raw_input = editable.value();
                    renderer.render(&raw_input);
                }
            },
            quiet_period,
        );

        let layout_debounce = Debounced::new(
            {
                let editable = editable.clone();
                let preview = preview.clone();
                let viewport = viewport.clone();
                move |()| apply_layout(viewport.as_ref(), editable.as_ref(), preview.as_ref())
            },
            quiet_period,
        );

        Ok(Self {
            editable,
            preview,
            viewport,
            store,
            renderer,
            config,
            render_debounce,
            layout_debounce,
        })
    }

    /// Size both surfaces from the current viewport.
    ///
    /// Safe to call repeatedly; with an unchanged viewport it applies the
    /// same dimensions again.
    pub fn initialize_layout(&self) {
        apply_layout(
            self.viewport.as_ref(),
            self.editable.as_ref(),
            self.preview.as_ref(),
        );
    }

    /// Host-ready entry point: size the surfaces, then either restore the
    /// persisted input and render it immediately, or show the placeholder.
    ///
    /// The restore render is synchronous, not debounced, so the first paint
    /// is not delayed by the quiet period. A storage read failure degrades to
    /// the placeholder path.
    pub fn on_load(&self) {
        self.initialize_layout();

        if self.config.persistence_enabled {
            if let Some(store) = &self.store {
                match store.get(&self.config.storage_key) {
                    Ok(Some(saved)) => {
                        self.editable.set_value(&saved);
                        self.renderer.render(&saved);
                        return;
                    }
                    Ok(None) => {}
                    Err(err) => log::warn!("failed to restore saved input: {}", err),
                }
            }
        }

        if let Err(err) = self.preview.set_document(&self.config.placeholder) {
            log::error!("failed to show placeholder: {}", err);
        }
    }

    /// The host's input-change notification (debounced render).
    pub fn notify_input(&self) {
        self.render_debounce.call(());
    }

    /// The host's resize notification (debounced layout pass).
    pub fn notify_resize(&self) {
        self.layout_debounce.call(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::build_document;
    use crate::storage::{MemoryStore, SAVED_CODE_KEY};
    use crate::surface::{InMemoryEditableSurface, InMemoryPreviewSurface, SharedViewport};

    fn quick_config() -> SessionConfig {
        SessionConfig {
            quiet_period_ms: 20,
            ..Default::default()
        }
    }

    fn in_memory_session(config: SessionConfig) -> (
        Session,
        Arc<InMemoryEditableSurface>,
        Arc<InMemoryPreviewSurface>,
        Arc<SharedViewport>,
    ) {
        let editable = Arc::new(InMemoryEditableSurface::new());
        let preview = Arc::new(InMemoryPreviewSurface::new());
        let viewport = Arc::new(SharedViewport::new(Viewport {
            width: 1000,
            height: 500,
        }));
        let session = Session::new(
            editable.clone(),
            preview.clone(),
            viewport.clone(),
            None,
            config,
        )
        .unwrap();
        (session, editable, preview, viewport)
    }

    #[test]
    fn layout_plan_uses_fixed_fractions() {
        let plan = LayoutPlan::for_viewport(Viewport {
            width: 1000,
            height: 500,
        });
        assert_eq!(plan.preview, SurfaceSize::new(400, 200));
        assert_eq!(plan.editor, SurfaceSize::new(850, 150));
    }

    #[test]
    fn initialize_layout_is_idempotent() {
        let (session, editable, preview, _viewport) = in_memory_session(quick_config());

        session.initialize_layout();
        let first = (preview.size(), editable.size());
        session.initialize_layout();
        let second = (preview.size(), editable.size());

        assert_eq!(first, second);
        assert_eq!(preview.size(), Some(SurfaceSize::new(400, 200)));
        assert_eq!(editable.size(), Some(SurfaceSize::new(850, 150)));
    }

    #[test]
    fn on_load_without_saved_input_shows_placeholder() {
        let (session, _editable, preview, _viewport) = in_memory_session(quick_config());

        session.on_load();

        // The placeholder is committed as-is: render was never invoked.
        assert_eq!(
            preview.document().as_deref(),
            Some("<p>Start typing to see preview...</p>")
        );
    }

    #[test]
    fn on_load_restores_saved_input_and_renders_immediately() {
        let editable = Arc::new(InMemoryEditableSurface::new());
        let preview = Arc::new(InMemoryPreviewSurface::new());
        let viewport = Arc::new(SharedViewport::default());
        let store = Arc::new(MemoryStore::new());
        store.set(SAVED_CODE_KEY, "<b>hi</b>").unwrap();

        let session = Session::new(
            editable.clone(),
            preview.clone(),
            viewport,
            Some(store),
            SessionConfig {
                persistence_enabled: true,
                ..quick_config()
            },
        )
        .unwrap();

        session.on_load();

        assert_eq!(editable.value(), "<b>hi</b>");
        assert_eq!(
            preview.document().unwrap(),
            build_document("<b>hi</b>")
        );
    }

    #[test]
    fn persistence_without_store_is_a_config_error() {
        let editable = Arc::new(InMemoryEditableSurface::new());
        let preview = Arc::new(InMemoryPreviewSurface::new());
        let viewport = Arc::new(SharedViewport::default());

        let err = Session::new(
            editable,
            preview,
            viewport,
            None,
            SessionConfig {
                persistence_enabled: true,
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn input_notifications_render_after_the_quiet_period() {
        let (session, editable, preview, _viewport) = in_memory_session(quick_config());

        editable.set_value("<p>draft</p>");
        session.notify_input();
        editable.set_value("<p>final</p>");
        session.notify_input();

        std::thread::sleep(Duration::from_millis(100));

        // Collapsed to one render of the latest input.
        assert_eq!(
            preview.document().unwrap(),
            build_document("<p>final</p>")
        );
    }

    #[test]
    fn resize_notifications_resize_after_the_quiet_period() {
        let (session, editable, preview, viewport) = in_memory_session(quick_config());
        session.initialize_layout();

        viewport.resize(Viewport {
            width: 600,
            height: 400,
        });
        session.notify_resize();

        std::thread::sleep(Duration::from_millis(100));

        assert_eq!(preview.size(), Some(SurfaceSize::new(240, 160)));
        assert_eq!(editable.size(), Some(SurfaceSize::new(510, 120)));
    }
}
