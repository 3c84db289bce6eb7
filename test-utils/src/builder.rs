use std::time::Duration;

use crate::{context::TestContext, error::TestError};

/// A canned response served by the stub server.
#[derive(Debug, Clone)]
pub struct StubRoute {
    /// Request path, e.g. `/api/v2/status.json`.
    pub path: String,
    /// HTTP status code to answer with.
    pub status: u16,
    /// Response body, sent as-is.
    pub body: String,
    /// Optional delay before answering, for timeout and ordering tests.
    pub delay: Option<Duration>,
}

/// Builder for creating test contexts backed by a stub HTTP server.
///
/// Provides a fluent interface for registering canned GET routes. Call
/// `build()` to bind a local listener and start serving them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_route("/", 200, "")
///     .with_delayed_route("/slow", 200, "", Duration::from_secs(2))
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// Routes to register, in the order they were added.
    routes: Vec<StubRoute>,
}

impl TestBuilder {
    /// Creates a new test builder with no routes configured.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Adds a route that answers immediately.
    ///
    /// # Arguments
    /// - `path` - Request path to match
    /// - `status` - HTTP status code to return
    /// - `body` - Response body
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_route(self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.with_stub(StubRoute {
            path: path.to_string(),
            status,
            body: body.into(),
            delay: None,
        })
    }

    /// Adds a route that waits `delay` before answering.
    ///
    /// Use this to exercise client timeouts or to skew completion order
    /// between concurrent requests.
    pub fn with_delayed_route(
        self,
        path: &str,
        status: u16,
        body: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.with_stub(StubRoute {
            path: path.to_string(),
            status,
            body: body.into(),
            delay: Some(delay),
        })
    }

    /// Adds a fully specified route.
    pub fn with_stub(mut self, route: StubRoute) -> Self {
        self.routes.push(route);
        self
    }

    /// Starts the stub server with all configured routes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Server bound to an ephemeral localhost port
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::serve(self.routes).await
    }
}
