//! Runtime support for MCP tool adapters generated by `protoc-gen-mcpserver`.
//!
//! Generated code registers one tool per schema method on a [`ToolServer`],
//! which implements the `rmcp` server handler and serves the stdio transport.
//! The helpers here are the only surface generated code touches:
//!
//! - [`Arguments`] reads typed call arguments with defaults
//! - [`coerce`] converts elements of repeated arguments
//! - [`format`] renders response fields as text
//! - [`ToolDefinition`] and [`ToolOutput`] describe a tool and its result
//!
//! # Examples
//!
//! ```
//! use mcpserver_runtime::{Arguments, CallContext, ToolDefinition, ToolOutput, ToolServer, format};
//!
//! let mut server = ToolServer::new("calculator", "0.1.0");
//! server.add_tool(
//!     ToolDefinition::new("Sum")
//!         .number("a", "Parameter a")
//!         .number("b", "Parameter b"),
//!     |_ctx: CallContext, args: Arguments| async move {
//!         let sum = args.parse_i32("a", 0) + args.parse_i32("b", 0);
//!         let mut output = ToolOutput::new();
//!         output.line("result", format::integer(&sum));
//!         Ok(output.into_result())
//!     },
//! );
//!
//! assert_eq!(server.tool_names(), vec!["Sum"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod arguments;
pub mod coerce;
mod context;
mod error;
pub mod format;
mod server;
mod tool;

pub use arguments::Arguments;
pub use context::CallContext;
pub use error::ServeError;
pub use server::{ToolFuture, ToolServer};
pub use tool::{ParamKind, Parameter, ToolDefinition, ToolOutput};

/// Attribute macro used on generated adapter traits.
pub use async_trait::async_trait;

/// Error returned by adapter methods and propagated verbatim to the client.
pub use rmcp::ErrorData as ToolError;

/// Result of a tool invocation.
pub use rmcp::model::CallToolResult;

/// Generic string-keyed JSON object used for nested messages.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
