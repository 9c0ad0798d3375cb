//! Descriptor-to-tool type mapping.
//!
//! For every schema field this decides the tool parameter kind, the Rust
//! type of the generated struct field, how the handler parses the argument
//! and how it renders the response value. The decisions live in one static
//! table keyed by [`BaseType`]; the template only picks between the singular
//! and repeated shape.
//!
//! Mapping is total. Kinds without a dedicated row (enums, groups, anything a
//! future schema version adds) widen to the string row.
//!
//! # Examples
//!
//! ```
//! use mcpserver_codegen::type_mapper::{ParamKind, map_field};
//! use mcpserver_core::{FieldDescriptor, FieldKind};
//!
//! let mapping = map_field(&FieldDescriptor::new("a", FieldKind::Int32));
//! assert_eq!(mapping.param_kind, ParamKind::Number);
//! assert_eq!(mapping.rust_type, "i32");
//! assert_eq!(mapping.parse_expr("args"), r#"args.parse_i32("a", 0)"#);
//!
//! let names = map_field(&FieldDescriptor::new("names", FieldKind::String).repeated());
//! assert_eq!(names.param_kind, ParamKind::Array);
//! assert_eq!(names.rust_type, "Vec<String>");
//! assert_eq!(names.format_fn, "string_list");
//! ```

use crate::naming::string_literal;
use mcpserver_core::{Cardinality, FieldDescriptor, FieldKind};
use serde::Serialize;
use std::fmt;

/// JSON type of a tool parameter, as named by the runtime's builder methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParamKind {
    /// `boolean`
    Boolean,
    /// `number`
    Number,
    /// `string`
    String,
    /// `object`
    Object,
    /// `array`
    Array,
}

impl ParamKind {
    /// Name of the `ToolDefinition` builder method for this kind.
    #[must_use]
    pub const fn builder(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }

    /// Name of the runtime `ParamKind` variant.
    #[must_use]
    pub const fn variant(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Object => "Object",
            Self::Array => "Array",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builder())
    }
}

/// Value type a field is parsed into, after widening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseType {
    /// `bool`
    Bool,
    /// `i32`
    I32,
    /// `u32`
    U32,
    /// `i64`
    I64,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `String`
    String,
    /// `String` carrying bytes lossily
    Bytes,
    /// Generic JSON object (nested messages and maps)
    Object,
}

/// One row of the strategy table.
#[derive(Debug)]
struct Strategy {
    rust_type: &'static str,
    param_kind: ParamKind,
    parse_fn: &'static str,
    coerce_fn: &'static str,
    default_literal: &'static str,
    format_fn: &'static str,
    list_format_fn: &'static str,
}

const BOOL: Strategy = Strategy {
    rust_type: "bool",
    param_kind: ParamKind::Boolean,
    parse_fn: "parse_bool",
    coerce_fn: "boolean",
    default_literal: "false",
    format_fn: "boolean",
    list_format_fn: "list",
};

const I32: Strategy = Strategy {
    rust_type: "i32",
    param_kind: ParamKind::Number,
    parse_fn: "parse_i32",
    coerce_fn: "i32",
    default_literal: "0",
    format_fn: "integer",
    list_format_fn: "list",
};

const U32: Strategy = Strategy {
    rust_type: "u32",
    param_kind: ParamKind::Number,
    parse_fn: "parse_u32",
    coerce_fn: "u32",
    default_literal: "0",
    format_fn: "integer",
    list_format_fn: "list",
};

const I64: Strategy = Strategy {
    rust_type: "i64",
    param_kind: ParamKind::Number,
    parse_fn: "parse_i64",
    coerce_fn: "i64",
    default_literal: "0",
    format_fn: "integer",
    list_format_fn: "list",
};

const U64: Strategy = Strategy {
    rust_type: "u64",
    param_kind: ParamKind::Number,
    parse_fn: "parse_u64",
    coerce_fn: "u64",
    default_literal: "0",
    format_fn: "integer",
    list_format_fn: "list",
};

const F32: Strategy = Strategy {
    rust_type: "f32",
    param_kind: ParamKind::Number,
    parse_fn: "parse_f32",
    coerce_fn: "f32",
    default_literal: "0.0",
    format_fn: "float",
    list_format_fn: "list",
};

const F64: Strategy = Strategy {
    rust_type: "f64",
    param_kind: ParamKind::Number,
    parse_fn: "parse_f64",
    coerce_fn: "f64",
    default_literal: "0.0",
    format_fn: "float",
    list_format_fn: "list",
};

const STRING: Strategy = Strategy {
    rust_type: "String",
    param_kind: ParamKind::String,
    parse_fn: "parse_string",
    coerce_fn: "string",
    default_literal: "String::new()",
    format_fn: "text",
    list_format_fn: "string_list",
};

const OBJECT: Strategy = Strategy {
    rust_type: "mcp::JsonObject",
    param_kind: ParamKind::Object,
    parse_fn: "parse_object",
    coerce_fn: "object",
    default_literal: "mcp::JsonObject::new()",
    format_fn: "object",
    list_format_fn: "object_list",
};

impl BaseType {
    /// Collapses a canonical kind to its base type.
    #[must_use]
    pub const fn from_kind(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Bool => Self::Bool,
            FieldKind::Int32 => Self::I32,
            FieldKind::Uint32 => Self::U32,
            FieldKind::Int64 => Self::I64,
            FieldKind::Uint64 => Self::U64,
            FieldKind::Float => Self::F32,
            FieldKind::Double => Self::F64,
            FieldKind::String | FieldKind::Other(_) => Self::String,
            FieldKind::Bytes => Self::Bytes,
            FieldKind::Message => Self::Object,
        }
    }

    const fn strategy(self) -> &'static Strategy {
        match self {
            Self::Bool => &BOOL,
            Self::I32 => &I32,
            Self::U32 => &U32,
            Self::I64 => &I64,
            Self::U64 => &U64,
            Self::F32 => &F32,
            Self::F64 => &F64,
            Self::String | Self::Bytes => &STRING,
            Self::Object => &OBJECT,
        }
    }

    /// Rust type of a single value.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        self.strategy().rust_type
    }

    /// Parameter kind of a single value.
    #[must_use]
    pub const fn param_kind(self) -> ParamKind {
        self.strategy().param_kind
    }
}

/// How the handler obtains a field value from the call arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseStrategy {
    /// `args.<function>("<field>", <default>)`
    Singular {
        /// `Arguments` method name
        function: &'static str,
        /// Rust expression used when the argument is missing or invalid
        default: &'static str,
    },
    /// `args.repeated("<field>", coerce::<coerce>)`
    Repeated {
        /// `coerce` module function name
        coerce: &'static str,
    },
}

/// Everything the renderer needs to know about one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
    /// Field name as declared in the schema; also the tool parameter name
    /// and the output label
    pub name: String,
    /// Base type after widening
    pub base: BaseType,
    /// Singular or repeated
    pub cardinality: Cardinality,
    /// Parameter kind advertised to clients
    pub param_kind: ParamKind,
    /// Element kind for array parameters
    pub item_kind: Option<ParamKind>,
    /// Rust type of the struct field
    pub rust_type: String,
    /// Argument parsing
    pub parse: ParseStrategy,
    /// `format` module function rendering the field
    pub format_fn: &'static str,
    /// `true` if the kind had no dedicated row and was widened to string
    pub widened: bool,
}

impl FieldMapping {
    /// Returns `true` if the field holds a sequence.
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self.cardinality, Cardinality::Repeated)
    }

    /// Rust expression reading this field from the arguments bound to `args`.
    #[must_use]
    pub fn parse_expr(&self, args: &str) -> String {
        let name = string_literal(&self.name);
        match &self.parse {
            ParseStrategy::Singular { function, default } => {
                format!("{args}.{function}({name}, {default})")
            }
            ParseStrategy::Repeated { coerce } => {
                format!("{args}.repeated({name}, mcp::coerce::{coerce})")
            }
        }
    }
}

/// Maps one schema field.
///
/// Pure and deterministic: the same descriptor always yields the same
/// mapping.
#[must_use]
pub fn map_field(field: &FieldDescriptor) -> FieldMapping {
    let base = BaseType::from_kind(&field.kind);
    let strategy = base.strategy();
    let widened = matches!(field.kind, FieldKind::Other(_));

    if widened {
        tracing::debug!(
            field = %field.name,
            kind = %field.kind,
            "Widening unrecognized field kind to string"
        );
    }

    match field.cardinality {
        Cardinality::Singular => FieldMapping {
            name: field.name.clone(),
            base,
            cardinality: Cardinality::Singular,
            param_kind: strategy.param_kind,
            item_kind: None,
            rust_type: strategy.rust_type.to_string(),
            parse: ParseStrategy::Singular {
                function: strategy.parse_fn,
                default: strategy.default_literal,
            },
            format_fn: strategy.format_fn,
            widened,
        },
        Cardinality::Repeated => FieldMapping {
            name: field.name.clone(),
            base,
            cardinality: Cardinality::Repeated,
            param_kind: ParamKind::Array,
            item_kind: Some(strategy.param_kind),
            rust_type: format!("Vec<{}>", strategy.rust_type),
            parse: ParseStrategy::Repeated {
                coerce: strategy.coerce_fn,
            },
            format_fn: strategy.list_format_fn,
            widened,
        },
    }
}
