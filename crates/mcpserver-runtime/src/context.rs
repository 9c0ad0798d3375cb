//! Per-call context handed to adapter methods.

use tokio_util::sync::CancellationToken;

/// Context of one tool invocation.
///
/// Created fresh for every call; adapters can watch the cancellation token to
/// stop work when the client cancels the request.
///
/// # Examples
///
/// ```
/// use mcpserver_runtime::CallContext;
///
/// let ctx = CallContext::new("Sum");
/// assert_eq!(ctx.tool(), "Sum");
/// assert!(!ctx.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CallContext {
    tool: String,
    ct: CancellationToken,
}

impl CallContext {
    /// Creates a context with a fresh, never-cancelled token.
    #[must_use]
    pub fn new(tool: impl Into<String>) -> Self {
        Self::with_cancellation(tool, CancellationToken::new())
    }

    /// Creates a context bound to an existing cancellation token.
    #[must_use]
    pub fn with_cancellation(tool: impl Into<String>, ct: CancellationToken) -> Self {
        Self {
            tool: tool.into(),
            ct,
        }
    }

    /// Name of the tool being invoked.
    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Cancellation token of the request.
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.ct
    }

    /// Returns `true` once the client has cancelled the request.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.ct.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_shared() {
        let ct = CancellationToken::new();
        let ctx = CallContext::with_cancellation("Tool", ct.clone());
        assert!(!ctx.is_cancelled());
        ct.cancel();
        assert!(ctx.is_cancelled());
    }
}
