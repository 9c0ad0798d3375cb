//! Plugin protocol: request in, response out.

use crate::{sink, walker};
use anyhow::{Context, Result};
use mcpserver_codegen::Renderer;
use mcpserver_core::GeneratorOptions;
use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use std::io::{Read, Write};

/// Generates the response for one request.
///
/// Problems with the request itself (bad options, missing descriptors) are
/// reported in the response's `error` field, which the compiler prints and
/// treats as a failure.
#[must_use]
pub fn process(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    tracing::debug!(
        files = request.file_to_generate.len(),
        parameter = request.parameter(),
        "Processing request"
    );

    let options = match GeneratorOptions::parse(request.parameter.as_deref()) {
        Ok(options) => options,
        Err(err) => return sink::error_response(&err),
    };
    let files = match walker::walk(request) {
        Ok(files) => files,
        Err(err) => return sink::error_response(&err),
    };
    let renderer = match Renderer::new(options) {
        Ok(renderer) => renderer,
        Err(err) => return sink::error_response(&err),
    };

    sink::emit(&files, &renderer)
}

/// Reads an encoded request from `input` and writes the encoded response to
/// `output`.
///
/// # Errors
///
/// Returns error if reading, decoding or writing fails.
pub fn run(mut input: impl Read, mut output: impl Write) -> Result<()> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .context("failed to read CodeGeneratorRequest from stdin")?;

    let request = CodeGeneratorRequest::decode(bytes.as_slice())
        .context("failed to decode CodeGeneratorRequest")?;

    let response = process(&request);

    output
        .write_all(&response.encode_to_vec())
        .context("failed to write CodeGeneratorResponse to stdout")?;
    output.flush().context("failed to flush stdout")?;
    Ok(())
}
