//! Drives the plugin the way protoc does: encoded request in, encoded
//! response out.

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    MessageOptions, MethodDescriptorProto, ServiceDescriptorProto,
};

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

fn repeated(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated as i32),
        ..field(name, number, ty)
    }
}

fn typed(mut f: FieldDescriptorProto, type_name: &str) -> FieldDescriptorProto {
    f.type_name = Some(type_name.to_string());
    f
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(format!(".example.{input}")),
        output_type: Some(format!(".example.{output}")),
        ..Default::default()
    }
}

/// The example schema: `Sum`, `ProcessNames` with repeated, map and enum
/// fields, and a parameterless `Ping`.
fn example_proto() -> FileDescriptorProto {
    let labels_entry = DescriptorProto {
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..message(
            "LabelsEntry",
            vec![field("key", 1, Type::String), field("value", 2, Type::String)],
        )
    };

    FileDescriptorProto {
        name: Some("example/example.proto".to_string()),
        package: Some("example".to_string()),
        syntax: Some("proto3".to_string()),
        message_type: vec![
            message(
                "SumRequest",
                vec![field("a", 1, Type::Int32), field("b", 2, Type::Int32)],
            ),
            message("SumResponse", vec![field("result", 1, Type::Int32)]),
            DescriptorProto {
                nested_type: vec![labels_entry],
                ..message(
                    "NamesRequest",
                    vec![
                        repeated("names", 1, Type::String),
                        typed(
                            repeated("labels", 2, Type::Message),
                            ".example.NamesRequest.LabelsEntry",
                        ),
                        typed(field("mode", 3, Type::Enum), ".example.Mode"),
                        field("blob", 4, Type::Bytes),
                        field("weight", 5, Type::Double),
                        repeated("ids", 6, Type::Fixed64),
                    ],
                )
            },
            message(
                "NamesResponse",
                vec![
                    repeated("processed", 1, Type::String),
                    field("count", 2, Type::Uint32),
                    field("ok", 3, Type::Bool),
                ],
            ),
            message("Empty", vec![]),
        ],
        enum_type: vec![EnumDescriptorProto {
            name: Some("Mode".to_string()),
            ..Default::default()
        }],
        service: vec![ServiceDescriptorProto {
            name: Some("Example".to_string()),
            method: vec![
                method("Sum", "SumRequest", "SumResponse"),
                method("ProcessNames", "NamesRequest", "NamesResponse"),
                method("Ping", "Empty", "Empty"),
            ],
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn types_only_proto() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("example/types.proto".to_string()),
        package: Some("example".to_string()),
        message_type: vec![message("Unused", vec![field("x", 1, Type::Int32)])],
        ..Default::default()
    }
}

fn invoke(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let mut output = Vec::new();
    protoc_gen_mcpserver::run(request.encode_to_vec().as_slice(), &mut output).unwrap();
    CodeGeneratorResponse::decode(output.as_slice()).unwrap()
}

fn generate() -> String {
    let request = CodeGeneratorRequest {
        file_to_generate: vec!["example/example.proto".to_string()],
        proto_file: vec![example_proto()],
        ..Default::default()
    };
    let response = invoke(&request);
    assert!(response.error.is_none(), "{:?}", response.error);
    assert_eq!(response.file.len(), 1);
    assert_eq!(response.file[0].name(), "example/example.mcpserver.rs");
    response.file[0].content().to_string()
}

#[test]
fn test_advertises_proto3_optional() {
    let response = invoke(&CodeGeneratorRequest::default());
    assert_eq!(response.supported_features, Some(1));
}

#[test]
fn test_sum_tool_is_generated() {
    let out = generate();
    assert!(out.contains("// source: example/example.proto"));
    assert!(out.contains(r#".number("a", "Parameter a")"#));
    assert!(out.contains(r#"b: args.parse_i32("b", 0),"#));
    assert!(out.contains(r#"output.line("result", mcp::format::integer(&res.result));"#));
}

#[test]
fn test_tools_registered_in_declaration_order() {
    let out = generate();
    let sum = out.find(r#"ToolDefinition::new("Sum")"#).unwrap();
    let names = out.find(r#"ToolDefinition::new("ProcessNames")"#).unwrap();
    let ping = out.find(r#"ToolDefinition::new("Ping")"#).unwrap();
    assert!(sum < names && names < ping);
}

#[test]
fn test_field_kinds_map_through_the_plugin() {
    let out = generate();

    // repeated string
    assert!(out.contains(r#".array("names", "Parameter names", mcp::ParamKind::String)"#));
    assert!(out.contains(r#"names: args.repeated("names", mcp::coerce::string),"#));
    // map
    assert!(out.contains("pub labels: mcp::JsonObject,"));
    assert!(out.contains(r#".object("labels", "Parameter labels")"#));
    // enum widens to string
    assert!(out.contains(r#"mode: args.parse_string("mode", String::new()),"#));
    // bytes degrade to string
    assert!(out.contains("pub blob: String,"));
    // fixed64 is unsigned
    assert!(out.contains("pub ids: Vec<u64>,"));
    assert!(out.contains(r#"ids: args.repeated("ids", mcp::coerce::u64),"#));
    assert!(out.contains(r#"weight: args.parse_f64("weight", 0.0),"#));
    // outputs
    assert!(out.contains(
        r#"output.line("processed", mcp::format::string_list(&res.processed));"#
    ));
    assert!(out.contains(r#"output.line("ok", mcp::format::boolean(&res.ok));"#));
}

#[test]
fn test_map_entry_struct_is_not_emitted() {
    let out = generate();
    assert!(!out.contains("LabelsEntry"));
    assert_eq!(out.matches("pub struct Empty").count(), 1);
}

#[test]
fn test_files_without_services_produce_nothing() {
    let request = CodeGeneratorRequest {
        file_to_generate: vec![
            "example/types.proto".to_string(),
            "example/example.proto".to_string(),
        ],
        proto_file: vec![types_only_proto(), example_proto()],
        ..Default::default()
    };
    let response = invoke(&request);
    let names: Vec<_> = response.file.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["example/example.mcpserver.rs"]);
}

#[test]
fn test_options_are_applied() {
    let request = CodeGeneratorRequest {
        file_to_generate: vec!["example/example.proto".to_string()],
        parameter: Some("runtime_crate=crate::mcp_runtime,file_suffix=_tools.rs".to_string()),
        proto_file: vec![example_proto()],
        ..Default::default()
    };
    let response = invoke(&request);
    assert_eq!(response.file[0].name(), "example/example_tools.rs");
    assert!(response.file[0].content().contains("use crate::mcp_runtime as mcp;"));
}

#[test]
fn test_missing_descriptor_is_reported_in_response() {
    let request = CodeGeneratorRequest {
        file_to_generate: vec!["missing.proto".to_string()],
        ..Default::default()
    };
    let response = invoke(&request);
    assert!(response.error.unwrap().contains("missing.proto"));
    assert!(response.file.is_empty());
}
