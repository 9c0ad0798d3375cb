//! Template contexts for the adapter template.
//!
//! Every value is precomputed Rust text: identifiers are already escaped and
//! string literals already quoted, so the template only concatenates. All
//! fields are always present because the engine runs in strict mode.

use serde::Serialize;

/// Context of one generated file.
#[derive(Debug, Clone, Serialize)]
pub struct FileContext {
    /// Schema file the code was generated from
    pub source: String,
    /// Path of the runtime support crate
    pub runtime_crate: String,
    /// Message structs in first-appearance order
    pub messages: Vec<MessageContext>,
    /// Services in declaration order
    pub services: Vec<ServiceContext>,
}

/// A generated message struct.
#[derive(Debug, Clone, Serialize)]
pub struct MessageContext {
    /// Struct identifier
    pub ident: String,
    /// Fully-qualified schema name
    pub full_name: String,
    /// Struct fields in declaration order
    pub fields: Vec<StructFieldContext>,
}

/// A field of a generated message struct.
#[derive(Debug, Clone, Serialize)]
pub struct StructFieldContext {
    /// Field identifier
    pub ident: String,
    /// Rust type
    pub rust_type: String,
}

/// A service: adapter trait plus registration function.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceContext {
    /// Service name as declared
    pub name: String,
    /// Adapter trait identifier
    pub trait_ident: String,
    /// Registration function identifier
    pub register_fn: String,
    /// Parameter name in `serve_stdio`
    pub arg_ident: String,
    /// Methods in declaration order
    pub methods: Vec<MethodContext>,
}

/// A method rendered as one tool.
#[derive(Debug, Clone, Serialize)]
pub struct MethodContext {
    /// Trait method identifier
    pub rust_ident: String,
    /// Tool name literal
    pub name_literal: String,
    /// Tool description literal
    pub description_literal: String,
    /// Title annotation literal
    pub title_literal: String,
    /// Input struct identifier
    pub input_ident: String,
    /// Output struct identifier
    pub output_ident: String,
    /// Handler binding for the call arguments
    pub args_binding: String,
    /// Handler binding for the adapter's response
    pub res_binding: String,
    /// Handler binding for the output builder
    pub output_binding: String,
    /// Tool parameters
    pub params: Vec<ParamContext>,
    /// Input struct initializers
    pub inputs: Vec<InputFieldContext>,
    /// Output lines
    pub outputs: Vec<OutputFieldContext>,
}

/// A `ToolDefinition` builder call.
#[derive(Debug, Clone, Serialize)]
pub struct ParamContext {
    /// Builder method (`number`, `array`, ...)
    pub builder: String,
    /// Parameter name literal
    pub name_literal: String,
    /// Parameter description literal
    pub description_literal: String,
    /// Trailing builder argument, empty unless the parameter is an array
    pub items_arg: String,
}

/// One field initializer of the input struct.
#[derive(Debug, Clone, Serialize)]
pub struct InputFieldContext {
    /// Struct field identifier
    pub ident: String,
    /// Expression reading the argument
    pub value_expr: String,
}

/// One `field: value` output line.
#[derive(Debug, Clone, Serialize)]
pub struct OutputFieldContext {
    /// Struct field identifier
    pub ident: String,
    /// Output label literal
    pub name_literal: String,
    /// `format` module function
    pub format_fn: String,
}
