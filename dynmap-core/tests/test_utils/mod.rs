// File: dynmap-core/tests/test_utils/mod.rs
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use parking_lot::Mutex;
use tokio::net::TcpListener;

use dynmap_common::error::FetchError;
use dynmap_common::models::{Player, ServerStatus};
use dynmap_common::traits::StatusSource;

/// A StatusSource returning a fixed result and recording every base URL it
/// was asked for.
#[derive(Default)]
pub struct RecordingStatusSource {
    pub status: Option<ServerStatus>,
    pub requested: Mutex<Vec<String>>,
}

impl RecordingStatusSource {
    pub fn online(status: ServerStatus) -> Arc<Self> {
        Arc::new(Self { status: Some(status), requested: Mutex::new(Vec::new()) })
    }

    pub fn offline() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl StatusSource for RecordingStatusSource {
    async fn fetch(&self, base_url: &str) -> Result<ServerStatus, FetchError> {
        self.requested.lock().push(base_url.to_string());
        self.status
            .clone()
            .ok_or_else(|| FetchError::Transport("connection refused".to_string()))
    }
}

pub fn sample_status() -> ServerStatus {
    ServerStatus {
        players: vec![
            Player { name: "Steve".into(), health: 20.0, armor: 7.0 },
            Player { name: "Alex".into(), health: 12.5, armor: 0.0 },
        ],
        servertime: 0,
        has_storm: false,
        is_thundering: false,
    }
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Serve `body` at `/up/world/world/` on an ephemeral local port and return
/// the base URL.
pub async fn spawn_dynmap_stub(body: &'static str) -> String {
    let app = Router::new().route("/up/world/world/", get(move || async move { body }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
