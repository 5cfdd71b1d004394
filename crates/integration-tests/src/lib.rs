//! Integration tests for RocketShoes.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rocketshoes-integration-tests
//! ```
//!
//! Each test starts the catalogue API on an ephemeral loopback port, seeded
//! from `crates/api/db.json`, and drives a real cart store against it over
//! HTTP with file-backed storage in a temporary directory.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rocketshoes_api::catalogue::Catalogue;
use rocketshoes_storefront::config::{CatalogApiConfig, StorefrontConfig};
use rocketshoes_storefront::notify::RecordingNotifier;
use rocketshoes_storefront::state::AppState;
use tempfile::TempDir;

/// Path of the catalogue seed file shipped with the API crate.
#[must_use]
pub fn seed_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("api")
        .join("db.json")
}

/// A catalogue API server running in the background for one test.
pub struct TestServer {
    pub addr: SocketAddr,
}

impl TestServer {
    /// Start the API with the seed catalogue.
    pub async fn spawn() -> Self {
        Self::spawn_with(Catalogue::load(&seed_path()).unwrap()).await
    }

    /// Start the API with a custom catalogue.
    pub async fn spawn_with(catalogue: Catalogue) -> Self {
        let app = rocketshoes_api::app(rocketshoes_api::state::AppState::new(catalogue));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr }
    }

    /// Base URL of the running server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// A storefront session: cart state plus the notifications it emitted.
pub struct Session {
    pub state: AppState,
    pub notifier: Arc<RecordingNotifier>,
    pub storage_path: PathBuf,
    /// Temporary storage directory, removed when the session is dropped
    dir: Option<TempDir>,
}

impl Session {
    /// Start a session against `server` with fresh storage.
    #[must_use]
    pub fn start(server: &TestServer) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let storage_path = dir.path().join("storage.json");
        let mut session = Self::resume(server, &storage_path);
        session.dir = Some(dir);
        session
    }

    /// Start a session reusing existing storage (a "page reload").
    #[must_use]
    pub fn resume(server: &TestServer, storage_path: &Path) -> Self {
        let config = StorefrontConfig {
            api: CatalogApiConfig::new(&server.base_url()).unwrap(),
            storage_path: storage_path.to_path_buf(),
        };
        let notifier = Arc::new(RecordingNotifier::new());
        let state = AppState::new(config, notifier.clone()).unwrap();

        Self {
            state,
            notifier,
            storage_path: storage_path.to_path_buf(),
            dir: None,
        }
    }
}
