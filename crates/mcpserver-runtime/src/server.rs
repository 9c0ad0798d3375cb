//! Tool registry and MCP server handler.
//!
//! Generated `register_*` functions add one tool per schema method; the
//! server then answers `tools/list` in registration order and dispatches
//! `tools/call` to the matching handler.

use crate::{Arguments, CallContext, JsonObject, ServeError, ToolDefinition, ToolError};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, LoggingLevel,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, SetLevelRequestParam, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Boxed future returned by a registered tool handler.
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<CallToolResult, ToolError>> + Send>>;

type Handler = Arc<dyn Fn(CallContext, Arguments) -> ToolFuture + Send + Sync>;

struct RegisteredTool {
    definition: ToolDefinition,
    tool: Tool,
    handler: Handler,
}

/// Ordered registry of tools served over MCP.
///
/// Handlers hold no shared mutable state; the registry itself is immutable
/// once serving starts. The only mutable field is the client-selected log
/// level, kept in an atomic.
///
/// # Examples
///
/// ```
/// use mcpserver_runtime::{Arguments, CallContext, ToolDefinition, ToolOutput, ToolServer};
///
/// # async fn example() -> Result<(), mcpserver_runtime::ToolError> {
/// let mut server = ToolServer::new("greeter", "0.1.0");
/// server.add_tool(
///     ToolDefinition::new("Greet").string("name", "Parameter name"),
///     |_ctx: CallContext, args: Arguments| async move {
///         let mut output = ToolOutput::new();
///         output.line("greeting", format!("Hello, {}", args.parse_string("name", String::new())));
///         Ok(output.into_result())
///     },
/// );
///
/// let result = server.call("Greet", None).await?;
/// assert_eq!(result.is_error, Some(false));
/// # Ok(())
/// # }
/// ```
pub struct ToolServer {
    name: String,
    version: String,
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
    log_level: AtomicU8,
}

impl fmt::Debug for ToolServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolServer")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("tools", &self.tool_names())
            .field("log_level", &self.log_level())
            .finish()
    }
}

impl ToolServer {
    /// Creates an empty server advertising `name` and `version`.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            tools: Vec::new(),
            index: HashMap::new(),
            log_level: AtomicU8::new(level_to_u8(LoggingLevel::Info)),
        }
    }

    /// Registers a tool.
    ///
    /// Registering a name twice replaces the earlier handler but keeps its
    /// position in the listing.
    pub fn add_tool<F, Fut>(&mut self, definition: ToolDefinition, handler: F)
    where
        F: Fn(CallContext, Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<CallToolResult, ToolError>> + Send + 'static,
    {
        let boxed: Handler = Arc::new(move |ctx: CallContext, args: Arguments| -> ToolFuture {
            Box::pin(handler(ctx, args))
        });
        let entry = RegisteredTool {
            tool: definition.to_tool(),
            definition,
            handler: boxed,
        };
        let name = entry.definition.name().to_string();

        if let Some(&position) = self.index.get(&name) {
            tracing::warn!(tool = %name, "Replacing previously registered tool");
            self.tools[position] = entry;
        } else {
            tracing::debug!(tool = %name, "Registered tool");
            self.index.insert(name, self.tools.len());
            self.tools.push(entry);
        }
    }

    /// Server name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Server version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Registered tool names in registration order.
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.definition.name()).collect()
    }

    /// Looks up a tool definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&i| &self.tools[i].definition)
    }

    /// Protocol tool models in registration order.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.tool.clone()).collect()
    }

    /// Minimum level of log messages the client asked for. Defaults to
    /// `info`.
    #[must_use]
    pub fn log_level(&self) -> LoggingLevel {
        level_from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Records the level a client selected with `logging/setLevel`.
    pub fn set_log_level(&self, level: LoggingLevel) {
        tracing::debug!(?level, "Client log level changed");
        self.log_level.store(level_to_u8(level), Ordering::Relaxed);
    }

    /// Invokes a tool in-process with a fresh context.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for an unknown tool, otherwise whatever the
    /// handler returns.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        self.dispatch(CallContext::new(name), arguments).await
    }

    async fn dispatch(
        &self,
        ctx: CallContext,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(&position) = self.index.get(ctx.tool()) else {
            tracing::warn!(tool = ctx.tool(), "Call to unknown tool");
            return Err(ToolError::invalid_params(
                format!("Unknown tool: {}", ctx.tool()),
                None,
            ));
        };

        tracing::debug!(tool = ctx.tool(), "Dispatching tool call");
        let handler = Arc::clone(&self.tools[position].handler);
        handler(ctx, Arguments::from(arguments)).await
    }

    /// Serves the registered tools over stdin/stdout until the client
    /// disconnects.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError`] if the handshake fails or the serve loop
    /// terminates abnormally.
    pub async fn serve_stdio(self) -> Result<(), ServeError> {
        tracing::info!(
            "Starting MCP server {} v{} with {} tools",
            self.name,
            self.version,
            self.tools.len()
        );

        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| ServeError::Initialize {
                message: e.to_string(),
            })?;

        let reason = running.waiting().await.map_err(|e| ServeError::Transport {
            message: e.to_string(),
        })?;

        tracing::info!("MCP server stopped: {reason:?}");
        Ok(())
    }
}

impl ServerHandler for ToolServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = Implementation::from_build_env();
        implementation.name.clone_from(&self.name);
        implementation.version.clone_from(&self.version);

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_logging()
                .enable_tools()
                .build(),
            server_info: implementation,
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ToolError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ToolError> {
        let ctx = CallContext::with_cancellation(request.name.as_ref(), context.ct.clone());
        self.dispatch(ctx, request.arguments).await
    }

    async fn set_level(
        &self,
        request: SetLevelRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<(), ToolError> {
        self.set_log_level(request.level);
        Ok(())
    }
}

const fn level_to_u8(level: LoggingLevel) -> u8 {
    match level {
        LoggingLevel::Debug => 0,
        LoggingLevel::Info => 1,
        LoggingLevel::Notice => 2,
        LoggingLevel::Warning => 3,
        LoggingLevel::Error => 4,
        LoggingLevel::Critical => 5,
        LoggingLevel::Alert => 6,
        LoggingLevel::Emergency => 7,
    }
}

const fn level_from_u8(value: u8) -> LoggingLevel {
    match value {
        0 => LoggingLevel::Debug,
        1 => LoggingLevel::Info,
        2 => LoggingLevel::Notice,
        3 => LoggingLevel::Warning,
        4 => LoggingLevel::Error,
        5 => LoggingLevel::Critical,
        6 => LoggingLevel::Alert,
        _ => LoggingLevel::Emergency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolOutput;

    fn echo_server() -> ToolServer {
        let mut server = ToolServer::new("test", "1.0.0");
        server.add_tool(
            ToolDefinition::new("Echo").string("text", "Parameter text"),
            |_ctx: CallContext, args: Arguments| async move {
                let mut output = ToolOutput::new();
                output.line("text", args.parse_string("text", String::new()));
                Ok(output.into_result())
            },
        );
        server
    }

    #[test]
    fn test_registration_order() {
        let mut server = echo_server();
        server.add_tool(ToolDefinition::new("B"), |_ctx, _args| async {
            Ok(ToolOutput::new().into_result())
        });
        server.add_tool(ToolDefinition::new("A"), |_ctx, _args| async {
            Ok(ToolOutput::new().into_result())
        });
        assert_eq!(server.tool_names(), vec!["Echo", "B", "A"]);
        assert_eq!(server.tools().len(), 3);
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut server = echo_server();
        server.add_tool(ToolDefinition::new("Other"), |_ctx, _args| async {
            Ok(ToolOutput::new().into_result())
        });
        server.add_tool(
            ToolDefinition::new("Echo").description("replaced"),
            |_ctx, _args| async { Ok(ToolOutput::new().into_result()) },
        );
        assert_eq!(server.tool_names(), vec!["Echo", "Other"]);
        assert!(server.definition("Echo").unwrap().parameters().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = echo_server();
        let err = server.call("Missing", None).await.unwrap_err();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Missing"));
    }

    #[tokio::test]
    async fn test_handler_receives_tool_name() {
        let mut server = ToolServer::new("test", "1.0.0");
        server.add_tool(ToolDefinition::new("Who"), |ctx: CallContext, _args| async move {
            let mut output = ToolOutput::new();
            output.line("tool", ctx.tool().to_string());
            Ok(output.into_result())
        });
        let result = server.call("Who", None).await.unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["content"][0]["text"], "tool: Who");
    }

    #[test]
    fn test_get_info() {
        let info = echo_server().get_info();
        assert_eq!(info.server_info.name, "test");
        assert_eq!(info.server_info.version, "1.0.0");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.logging.is_some());
    }

    #[test]
    fn test_log_level_defaults_to_info_and_updates() {
        let server = echo_server();
        assert_eq!(server.log_level(), LoggingLevel::Info);

        for level in [
            LoggingLevel::Debug,
            LoggingLevel::Warning,
            LoggingLevel::Emergency,
        ] {
            server.set_log_level(level);
            assert_eq!(server.log_level(), level);
        }
    }

    #[test]
    fn test_debug_lists_tools() {
        let debug = format!("{:?}", echo_server());
        assert!(debug.contains("Echo"));
    }
}
