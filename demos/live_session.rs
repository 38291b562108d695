//! Minimal in-memory session demonstrating the preview pipeline
//!
//! Run with: cargo run --example live_session

use livepreview::surface::{
    EditableSurface, InMemoryEditableSurface, InMemoryPreviewSurface, PreviewSurface,
    SharedViewport,
};
use livepreview::{Session, SessionConfig, Viewport};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("LivePreview - Minimal Session Example\n");

    let editable = Arc::new(InMemoryEditableSurface::new());
    let preview = Arc::new(InMemoryPreviewSurface::new());
    let viewport = Arc::new(SharedViewport::new(Viewport {
        width: 1000,
        height: 600,
    }));

    // Short quiet period so the demo settles quickly
    let config = SessionConfig {
        quiet_period_ms: 50,
        ..Default::default()
    };

    let session = Session::new(
        editable.clone(),
        preview.clone(),
        viewport.clone(),
        None,
        config,
    )?;

    session.on_load();
    println!("After load: {}\n", preview.document().unwrap_or_default());

    // Simulate a user typing: only the final state gets rendered.
    for markup in ["<h1>He", "<h1>Hell", "<h1>Hello preview</h1>"] {
        editable.set_value(markup);
        session.notify_input();
    }
    thread::sleep(Duration::from_millis(200));

    let document = preview.document().unwrap_or_default();
    println!("Rendered document:\n{}", document);

    #[cfg(feature = "snapshot")]
    {
        let snap = livepreview::snapshot::text_snapshot(&document);
        println!("Snapshot text: {}", snap.text.trim());
    }

    // Resize the viewport and let the debounced layout pass run.
    viewport.resize(Viewport {
        width: 640,
        height: 480,
    });
    session.notify_resize();
    thread::sleep(Duration::from_millis(200));
    println!(
        "Preview size after resize: {:?}",
        preview.size().expect("layout applied")
    );

    println!("Done.");
    Ok(())
}
