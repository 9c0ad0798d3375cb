//! Errors raised while serving generated tools.

use thiserror::Error;

/// Failure to start or run the serve loop.
///
/// Tool-level failures never surface here: they are returned to the client
/// as protocol errors.
#[derive(Error, Debug)]
pub enum ServeError {
    /// The protocol handshake with the client failed.
    #[error("MCP server initialization failed: {message}")]
    Initialize {
        /// Description of the failure
        message: String,
    },

    /// The serve loop terminated abnormally.
    #[error("MCP transport terminated abnormally: {message}")]
    Transport {
        /// Description of the failure
        message: String,
    },
}
