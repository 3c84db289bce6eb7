use axum::{http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use url::Url;

use crate::{builder::StubRoute, error::TestError};

/// Test context holding a running stub HTTP server.
///
/// The server listens on an ephemeral localhost port and is aborted when the
/// context is dropped, so each test gets an isolated server.
pub struct TestContext {
    /// Address the stub server is listening on.
    pub addr: SocketAddr,

    /// Handle of the task running the server.
    handle: JoinHandle<()>,
}

impl TestContext {
    /// Binds a listener and serves `routes` on it.
    ///
    /// Unknown paths answer 404 with an empty body.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Server running in a background task
    /// - `Err(TestError::Io)` - Failed to bind or read the local address
    pub async fn serve(routes: Vec<StubRoute>) -> Result<Self, TestError> {
        let mut router = Router::new();

        for route in routes {
            let StubRoute {
                path,
                status,
                body,
                delay,
            } = route;
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            router = router.route(
                &path,
                get(move || {
                    let body = body.clone();
                    async move {
                        if let Some(delay) = delay {
                            tokio::time::sleep(delay).await;
                        }
                        (status, body)
                    }
                }),
            );
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            // Ends when the test drops the context and the task is aborted.
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self { addr, handle })
    }

    /// Absolute URL of `path` on the stub server.
    pub fn url(&self, path: &str) -> Result<Url, TestError> {
        Ok(Url::parse(&format!("http://{}{}", self.addr, path))?)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
