use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Binding or querying the stub server's listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A stub URL could not be built from the server address and path.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
