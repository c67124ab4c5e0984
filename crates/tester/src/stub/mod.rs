//! Self-test stub server.
//!
//! A stub owns its payload and its listener, so several stubs can run in one process
//! (tests bind them to ephemeral ports). The layout mirrors a small Axum app:
//! - `routes.rs`: router, handlers, JSON error responses
//! - `catalog.rs`: the fixed sample catalog

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::http::StatusCode;
use thiserror::Error;
use tokio::task::JoinHandle;

use catalogcheck_products::Product;

pub mod catalog;
pub mod routes;

pub use catalog::defective_catalog;

#[derive(Debug, Error)]
pub enum StubError {
    #[error("failed to encode stub payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to bind stub server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Response served on `GET /products`. Immutable once built.
#[derive(Debug, Clone)]
pub struct Payload {
    status: StatusCode,
    body: Bytes,
}

impl Payload {
    /// `200 OK` with the products encoded as a JSON array.
    pub fn products(products: &[Product]) -> Result<Self, StubError> {
        let body = serde_json::to_vec(products)?;
        Ok(Self {
            status: StatusCode::OK,
            body: Bytes::from(body),
        })
    }

    /// Arbitrary status and body, e.g. to simulate server errors or broken JSON.
    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Bytes::from(body.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// A running stub server. The server task stops when this handle is dropped.
pub struct StubServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Bind `addr` (port 0 picks an ephemeral port) and start serving `payload`.
    ///
    /// The listener is bound before this returns, so the stub accepts requests as soon
    /// as the caller gets the handle back.
    pub async fn spawn(addr: SocketAddr, payload: Payload) -> Result<Self, StubError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| StubError::Bind { addr, source })?;
        let addr = listener
            .local_addr()
            .map_err(|source| StubError::Bind { addr, source })?;

        let app = routes::router(Arc::new(payload));
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "stub server stopped");
            }
        });

        tracing::info!(%addr, "stub server listening");
        Ok(Self { addr, handle })
    }

    /// Start a stub serving the defective sample catalog.
    pub async fn spawn_sample(addr: SocketAddr) -> Result<Self, StubError> {
        Self::spawn(addr, Payload::products(&defective_catalog())?).await
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url())
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
