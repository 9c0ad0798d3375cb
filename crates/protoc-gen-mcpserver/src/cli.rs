//! Command-line arguments.
//!
//! The compiler runs the plugin without arguments; `--version` is the only
//! flag and exists for humans.

use clap::Parser;

/// Version line printed by `--version`.
pub const VERSION_LINE: &str = concat!("protoc-gen-mcpserver version: ", env!("CARGO_PKG_VERSION"));

/// protoc plugin that generates MCP tool adapters for protobuf services.
///
/// Reads a `CodeGeneratorRequest` from stdin and writes a
/// `CodeGeneratorResponse` to stdout. Log verbosity follows `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-mcpserver")]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Print the version and exit
    #[arg(long)]
    pub version: bool,
}
