//! Descriptor walker.
//!
//! Converts the compiler's raw descriptors into [`SchemaFile`]s: only files
//! listed in `file_to_generate`, in that order, with services, methods and
//! fields in declaration order.

use mcpserver_core::{
    Error, FieldDescriptor, FieldKind, MessageDescriptor, MethodDescriptor, Result,
    SchemaFile, ServiceDescriptor,
};
use prost_types::compiler::CodeGeneratorRequest;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto};
use std::collections::HashMap;

/// A message found anywhere in the request, keyed by its full name.
#[derive(Debug, Clone, Copy)]
struct IndexedMessage<'a> {
    relative_name: &'a str,
    proto: &'a DescriptorProto,
}

/// Full-name index over every message of every file in the request,
/// including nested messages and dependencies.
#[derive(Debug, Default)]
struct MessageIndex<'a> {
    messages: HashMap<String, (String, &'a DescriptorProto)>,
}

impl<'a> MessageIndex<'a> {
    fn build(files: &'a [FileDescriptorProto]) -> Self {
        let mut index = Self::default();
        for file in files {
            let package = file.package();
            for message in &file.message_type {
                index.insert(package, "", message);
            }
        }
        index
    }

    fn insert(&mut self, package: &str, parent: &str, message: &'a DescriptorProto) {
        let relative = if parent.is_empty() {
            message.name().to_string()
        } else {
            format!("{parent}.{}", message.name())
        };
        let full = if package.is_empty() {
            relative.clone()
        } else {
            format!("{package}.{relative}")
        };

        for nested in &message.nested_type {
            self.insert(package, &relative, nested);
        }
        self.messages.insert(full, (relative, message));
    }

    fn get(&self, type_name: &str) -> Option<IndexedMessage<'_>> {
        self.messages
            .get(type_name.trim_start_matches('.'))
            .map(|(relative_name, proto)| IndexedMessage {
                relative_name,
                proto,
            })
    }

    fn is_map_entry(&self, type_name: &str) -> bool {
        self.get(type_name).is_some_and(|m| {
            m.proto
                .options
                .as_ref()
                .is_some_and(|o| o.map_entry.unwrap_or(false))
        })
    }
}

/// Extracts the schema files selected for generation.
///
/// # Errors
///
/// Returns [`Error::DescriptorError`] if a file listed in `file_to_generate`
/// has no descriptor in the request.
pub fn walk(request: &CodeGeneratorRequest) -> Result<Vec<SchemaFile>> {
    let index = MessageIndex::build(&request.proto_file);
    let by_name: HashMap<&str, &FileDescriptorProto> = request
        .proto_file
        .iter()
        .map(|f| (f.name(), f))
        .collect();

    request
        .file_to_generate
        .iter()
        .map(|name| {
            let file = by_name.get(name.as_str()).ok_or_else(|| Error::DescriptorError {
                file: name.clone(),
                reason: "listed for generation but no descriptor was provided".to_string(),
            })?;
            Ok(schema_file(file, &index))
        })
        .collect()
}

fn schema_file(file: &FileDescriptorProto, index: &MessageIndex<'_>) -> SchemaFile {
    tracing::debug!(
        file = file.name(),
        services = file.service.len(),
        "Walking schema file"
    );

    file.service.iter().fold(
        SchemaFile::new(file.name(), file.package()),
        |schema, service| {
            let descriptor = service.method.iter().fold(
                ServiceDescriptor::new(service.name()),
                |svc, method| {
                    svc.with_method(MethodDescriptor::new(
                        method.name(),
                        message(method.input_type(), index),
                        message(method.output_type(), index),
                    ))
                },
            );
            schema.with_service(descriptor)
        },
    )
}

fn message(type_name: &str, index: &MessageIndex<'_>) -> MessageDescriptor {
    let full_name = type_name.trim_start_matches('.');
    let Some(found) = index.get(type_name) else {
        tracing::warn!(
            message = full_name,
            "Message type not found in request, treating it as empty"
        );
        return MessageDescriptor::new(full_name);
    };

    found.proto.field.iter().fold(
        MessageDescriptor::with_names(found.relative_name, full_name),
        |msg, field| msg.with_field(field_descriptor(field, index)),
    )
}

fn field_descriptor(field: &FieldDescriptorProto, index: &MessageIndex<'_>) -> FieldDescriptor {
    let kind = field_kind(field);
    let is_map = kind == FieldKind::Message && index.is_map_entry(field.type_name());

    let descriptor = FieldDescriptor::new(field.name(), kind);
    if field.label() == Label::Repeated && !is_map {
        descriptor.repeated()
    } else {
        descriptor
    }
}

/// Collapses the raw wire type to its canonical kind.
fn field_kind(field: &FieldDescriptorProto) -> FieldKind {
    let Some(raw) = field.r#type else {
        return FieldKind::Other("unspecified".to_string());
    };

    match Type::try_from(raw) {
        Ok(Type::Bool) => FieldKind::Bool,
        Ok(Type::Int32 | Type::Sint32 | Type::Sfixed32) => FieldKind::Int32,
        Ok(Type::Uint32 | Type::Fixed32) => FieldKind::Uint32,
        Ok(Type::Int64 | Type::Sint64 | Type::Sfixed64) => FieldKind::Int64,
        Ok(Type::Uint64 | Type::Fixed64) => FieldKind::Uint64,
        Ok(Type::Float) => FieldKind::Float,
        Ok(Type::Double) => FieldKind::Double,
        Ok(Type::String) => FieldKind::String,
        Ok(Type::Bytes) => FieldKind::Bytes,
        Ok(Type::Message) => FieldKind::Message,
        Ok(Type::Enum) => FieldKind::Other("enum".to_string()),
        Ok(Type::Group) => FieldKind::Other("group".to_string()),
        Err(_) => FieldKind::Other(format!("type {raw}")),
    }
}
