//! Minimal stdin-driven host for a preview session.
//!
//! Each line read from stdin is treated as an edit appended to the input;
//! after stdin closes and the pending debounced render settles, the final
//! committed document is written to stdout. Passing `--storage` turns on
//! persistence, so a later run with the same file restores the input.

use anyhow::Context;
use clap::Parser;
use livepreview::storage::{FileStore, KeyValueStore};
use livepreview::surface::{
    EditableSurface, InMemoryEditableSurface, InMemoryPreviewSurface, PreviewSurface,
    SharedViewport,
};
use livepreview::{Session, SessionConfig, Viewport};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "livepreview")]
#[command(about = "Render stdin edits through a headless live-preview session")]
struct Cli {
    /// JSON file backing the persistent store; enables persistence
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Quiet period between the last edit and a render, in milliseconds
    #[arg(long, default_value_t = 300)]
    quiet_ms: u64,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let editable = Arc::new(InMemoryEditableSurface::new());
    let preview = Arc::new(InMemoryPreviewSurface::new());
    let viewport = Arc::new(SharedViewport::new(Viewport {
        width: cli.width,
        height: cli.height,
    }));

    let store: Option<Arc<dyn KeyValueStore>> = match &cli.storage {
        Some(path) => {
            let store = FileStore::open(path)
                .with_context(|| format!("failed to open storage file {}", path.display()))?;
            Some(Arc::new(store))
        }
        None => None,
    };

    let config = SessionConfig {
        quiet_period_ms: cli.quiet_ms,
        persistence_enabled: store.is_some(),
        ..Default::default()
    };

    let session = Session::new(editable.clone(), preview.clone(), viewport, store, config)?;
    session.on_load();

    // Start from the restored input, if the store held any.
    let mut buffer = editable.value();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if !buffer.is_empty() {
            buffer.push('\n');
        }
        buffer.push_str(&line);
        editable.set_value(&buffer);
        session.notify_input();
    }

    // Let the pending debounced render settle before reading the surface.
    thread::sleep(Duration::from_millis(cli.quiet_ms + 50));

    match preview.document() {
        Some(document) => println!("{}", document),
        None => eprintln!("livepreview: nothing rendered (no input, no saved session)"),
    }

    Ok(())
}
