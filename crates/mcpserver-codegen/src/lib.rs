//! Code generation for protoc-gen-mcpserver.
//!
//! Maps schema fields to tool parameters and renders per-file Rust adapter
//! source using Handlebars templates.
//!
//! # Architecture
//!
//! - [`type_mapper`] decides parameter kind, Rust type, parse and format
//!   strategy for every field
//! - [`renderer`] assembles mappings into a template context and renders it
//! - [`template_engine`] wraps Handlebars in strict mode
//!
//! # Examples
//!
//! ```
//! use mcpserver_codegen::Renderer;
//! use mcpserver_core::{GeneratorOptions, SchemaFile};
//!
//! let renderer = Renderer::new(GeneratorOptions::default()).unwrap();
//! let file = renderer.render(&SchemaFile::new("empty.proto", "")).unwrap();
//! assert!(file.content.starts_with("// Code generated by protoc-gen-mcpserver. DO NOT EDIT."));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod context;
pub mod naming;
pub mod renderer;
pub mod template_engine;
pub mod type_mapper;
pub mod types;

pub use renderer::Renderer;
pub use type_mapper::{FieldMapping, map_field};
pub use types::{GeneratedCode, GeneratedFile};
