#![allow(dead_code)]

use axum_test::TestServer;
use golinks::domain::entities::Entry;
use golinks::domain::registry::{CorruptFilePolicy, RedirectRegistry};
use golinks::infrastructure::persistence::JsonFileStore;
use golinks::routes::app_router;
use golinks::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A server wired to a registry backed by a file in a temporary directory.
///
/// The directory lives as long as the fixture.
pub struct TestApp {
    pub server: TestServer,
    pub registry: Arc<RedirectRegistry>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn redirects_file(&self) -> PathBuf {
        redirects_file(&self.dir)
    }

    /// Entries currently on disk, as a fresh load would see them.
    pub fn persisted(&self) -> Vec<Entry> {
        read_persisted(&self.dir)
    }
}

pub fn redirects_file(dir: &TempDir) -> PathBuf {
    dir.path().join("redirects.json")
}

pub fn read_persisted(dir: &TempDir) -> Vec<Entry> {
    match std::fs::read(redirects_file(dir)) {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => panic!("failed to read redirects file: {e}"),
    }
}

pub async fn open_registry(dir: &TempDir) -> Arc<RedirectRegistry> {
    open_registry_at(redirects_file(dir)).await
}

pub async fn open_registry_at(path: PathBuf) -> Arc<RedirectRegistry> {
    let store = Arc::new(JsonFileStore::new(path));
    Arc::new(
        RedirectRegistry::open(store, CorruptFilePolicy::Reset)
            .await
            .unwrap(),
    )
}

pub fn create_test_state(registry: Arc<RedirectRegistry>) -> AppState {
    AppState::new(registry)
}

/// Builds the full application router over a fresh temporary directory.
pub async fn spawn_app() -> TestApp {
    spawn_app_in(TempDir::new().unwrap()).await
}

/// Builds the full application router over an existing directory.
pub async fn spawn_app_in(dir: TempDir) -> TestApp {
    let registry = open_registry(&dir).await;
    build_app(registry, dir)
}

/// Builds the app over a redirects file inside a directory that does not
/// exist, so loading starts empty and every save fails.
pub async fn spawn_unsaveable_app() -> TestApp {
    let dir = TempDir::new().unwrap();
    let registry = open_registry_at(dir.path().join("missing").join("redirects.json")).await;
    build_app(registry, dir)
}

fn build_app(registry: Arc<RedirectRegistry>, dir: TempDir) -> TestApp {
    let app = app_router(create_test_state(registry.clone()));
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        registry,
        dir,
    }
}

/// Writes `entries` to the redirects file in `dir` using the on-disk format.
pub fn seed_file(dir: &TempDir, entries: &[Entry]) {
    std::fs::write(
        redirects_file(dir),
        serde_json::to_vec_pretty(entries).unwrap(),
    )
    .unwrap();
}
