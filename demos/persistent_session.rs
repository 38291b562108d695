//! Persistence demo: the second "page load" restores what the first one typed
//!
//! Run with: cargo run --example persistent_session

use livepreview::storage::{FileStore, KeyValueStore};
use livepreview::surface::{
    EditableSurface, InMemoryEditableSurface, InMemoryPreviewSurface, PreviewSurface,
    SharedViewport,
};
use livepreview::{Session, SessionConfig};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("LivePreview - Persistent Session Example\n");

    let store_path = std::env::temp_dir().join("livepreview-demo-store.json");
    let config = SessionConfig {
        quiet_period_ms: 50,
        persistence_enabled: true,
        ..Default::default()
    };

    // First "page load": type something and let it render (and persist).
    {
        let editable = Arc::new(InMemoryEditableSurface::new());
        let preview = Arc::new(InMemoryPreviewSurface::new());
        let viewport = Arc::new(SharedViewport::default());
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&store_path)?);

        let session = Session::new(
            editable.clone(),
            preview,
            viewport,
            Some(store),
            config.clone(),
        )?;

        session.on_load();
        editable.set_value("<b>hi from the first session</b>");
        session.notify_input();
        thread::sleep(Duration::from_millis(200));
        println!("First session rendered and saved its input.");
    }

    // Second "page load": the saved input comes back and renders immediately.
    let editable = Arc::new(InMemoryEditableSurface::new());
    let preview = Arc::new(InMemoryPreviewSurface::new());
    let viewport = Arc::new(SharedViewport::default());
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&store_path)?);

    let session = Session::new(editable.clone(), preview.clone(), viewport, Some(store), config)?;
    session.on_load();

    println!("Restored input: {}", editable.value());
    println!(
        "Preview shows the wrapped document: {}",
        preview.document().map(|d| d.len()).unwrap_or(0) > 0
    );

    let _ = std::fs::remove_file(&store_path);
    println!("Done.");
    Ok(())
}
