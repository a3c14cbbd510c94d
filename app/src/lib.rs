//! Lector - Tabbed PDF reader
//!
//! Headless host shell. The window surface sends events as JSON lines on
//! stdin; every event is applied to the window state in arrival order and
//! answered with one JSON line on stdout.

pub mod commands;
pub mod state;

use anyhow::Context;
use lector_core::document_from_args;
use state::AppState;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

const REQUEST_QUEUE: usize = 64;

pub async fn run() -> anyhow::Result<()> {
    // Initialize logging
    lector_core::init_logging();

    let state = AppState::new().context("failed to create window state")?;

    // Documents named on the command line wait for the frontend like any
    // other early file-open request
    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = document_from_args(&args, &state.config().document_extension) {
        state.file_opened(path)?;
    }

    tracing::info!("Lector started");

    let (tx, mut rx) = mpsc::channel::<String>(REQUEST_QUEUE);
    tokio::spawn(read_requests(tx));

    let mut stdout = tokio::io::stdout();
    while let Some(line) = rx.recv().await {
        let response = commands::handle_line(&state, &line);
        let quit = response.quit;

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;

        if quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    tracing::info!("Lector stopped");

    Ok(())
}

/// Forward non-empty stdin lines until EOF
async fn read_requests(tx: mpsc::Sender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if tx.send(line).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read request");
                break;
            }
        }
    }
}
