//! Emission sink.
//!
//! Packs rendered documents into the compiler's response. A file whose
//! template fails still produces an output file, holding only an error
//! comment, so that one bad schema does not hide the others.

use mcpserver_codegen::{GeneratedCode, GeneratedFile, Renderer};
use mcpserver_core::{Error, SchemaFile};
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::compiler::code_generator_response::{Feature, File};

/// Features this plugin supports, as the bitmask the compiler expects.
#[must_use]
pub fn supported_features() -> u64 {
    Feature::Proto3Optional as u64
}

/// Renders every schema file that declares at least one service.
#[must_use]
pub fn emit(files: &[SchemaFile], renderer: &Renderer<'_>) -> CodeGeneratorResponse {
    let mut code = GeneratedCode::new();

    for file in files {
        if !file.has_services() {
            tracing::debug!(file = %file.name, "No services, skipping");
            continue;
        }

        let generated = renderer.render(file).unwrap_or_else(|err| {
            tracing::error!(file = %file.name, "Failed to render adapter: {err}");
            GeneratedFile::new(
                renderer.output_path(file),
                format!("// Error rendering template: {err}\n"),
            )
        });
        code.add_file(generated);
    }

    tracing::info!("Generated {} files", code.file_count());
    response(code)
}

/// Builds a response that reports a request-level failure to the compiler.
#[must_use]
pub fn error_response(err: &Error) -> CodeGeneratorResponse {
    tracing::error!("{err}");
    CodeGeneratorResponse {
        error: Some(err.to_string()),
        supported_features: Some(supported_features()),
        ..Default::default()
    }
}

fn response(code: GeneratedCode) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        supported_features: Some(supported_features()),
        file: code
            .into_iter()
            .map(|f| File {
                name: Some(f.path),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
