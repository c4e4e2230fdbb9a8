//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and checking responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thoughts_api::{create_app, create_app_state, create_app_state_with_repo, AppState};
use thoughts_common::AppConfig;
use thoughts_db::MemoryThoughtRepository;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Backing store when the server runs in memory
    pub repo: Option<Arc<MemoryThoughtRepository>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory repository
    pub async fn start() -> Result<Self> {
        let repo = Arc::new(MemoryThoughtRepository::new());
        let config = AppConfig::from_lookup(|_| None)?;
        let state = create_app_state_with_repo(config, repo.clone())?;

        Self::serve(state, Some(repo)).await
    }

    /// Start a server backed by PostgreSQL at `DATABASE_URL`
    pub async fn start_postgres() -> Result<Self> {
        let state = create_app_state(test_config()?).await?;
        Self::serve(state, None).await
    }

    async fn serve(state: AppState, repo: Option<Arc<MemoryThoughtRepository>>) -> Result<Self> {
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            repo,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw body and JSON content type
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    /// The in-memory store, for tests that need to inspect or break it
    ///
    /// # Panics
    /// Panics when the server runs against PostgreSQL.
    pub fn memory_repo(&self) -> &MemoryThoughtRepository {
        self.repo.as_deref().expect("server is not backed by memory")
    }
}

/// Create a configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Check whether a PostgreSQL instance was provided
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }

    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }

    Ok(())
}
