//! protoc plugin that exposes protobuf service methods as MCP tools.
//!
//! For every schema file with at least one service the plugin emits a Rust
//! source file containing message structs, one adapter trait and one
//! registration function per service, and a `serve_stdio` entry point.
//!
//! # Usage
//!
//! ```bash
//! protoc --plugin=protoc-gen-mcpserver --mcpserver_out=src/generated example.proto
//! ```
//!
//! Options are passed as `--mcpserver_opt=runtime_crate=crate::rt,file_suffix=.mcp.rs`.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
pub mod plugin;
pub mod sink;
pub mod walker;

pub use plugin::{process, run};
