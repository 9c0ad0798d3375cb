//! Core types and errors for protoc-gen-mcpserver.
//!
//! This crate provides the foundational types shared by the code generator,
//! the protoc plugin and their tests.
//!
//! # Architecture
//!
//! The core consists of:
//! - The schema descriptor model (`SchemaFile`, `ServiceDescriptor`,
//!   `MethodDescriptor`, `MessageDescriptor`, `FieldDescriptor`)
//! - Error hierarchy with contextual information
//! - Generator options parsed from the protoc parameter string

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod descriptor;
mod error;
mod options;

pub use descriptor::{
    Cardinality, FieldDescriptor, FieldKind, MessageDescriptor, MethodDescriptor, SchemaFile,
    ServiceDescriptor,
};
pub use error::{Error, Result};
pub use options::{DEFAULT_FILE_SUFFIX, DEFAULT_RUNTIME_CRATE, GeneratorOptions};
