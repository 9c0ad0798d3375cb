//! Schema descriptor model.
//!
//! An immutable, already-resolved view of the services declared in one
//! schema file. The plugin builds these from the compiler's descriptors; the
//! code generator only ever reads them.
//!
//! Declaration order is preserved everywhere: services, methods and fields are
//! stored in the order the schema declares them, which fixes tool registration
//! order and output line order in generated code.
//!
//! # Examples
//!
//! ```
//! use mcpserver_core::{
//!     FieldDescriptor, FieldKind, MessageDescriptor, MethodDescriptor, ServiceDescriptor,
//! };
//!
//! let input = MessageDescriptor::new("example.SumRequest")
//!     .with_field(FieldDescriptor::new("a", FieldKind::Int32))
//!     .with_field(FieldDescriptor::new("b", FieldKind::Int32));
//! let output = MessageDescriptor::new("example.SumResponse")
//!     .with_field(FieldDescriptor::new("result", FieldKind::Int32));
//!
//! let service = ServiceDescriptor::new("Example")
//!     .with_method(MethodDescriptor::new("Sum", input, output));
//!
//! assert_eq!(service.methods.len(), 1);
//! assert_eq!(service.methods[0].input.name, "SumRequest");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical value category of a schema field.
///
/// Wire-level variants collapse here: `sint32` and `sfixed32` are `Int32`,
/// `fixed64` is `Uint64`, and so on. Anything the schema can carry that has
/// no dedicated variant (enums, groups, kinds added by future schema
/// versions) is kept as [`FieldKind::Other`] so that mapping stays total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// `bool`
    Bool,
    /// Signed 32-bit integer (`int32`, `sint32`, `sfixed32`)
    Int32,
    /// Unsigned 32-bit integer (`uint32`, `fixed32`)
    Uint32,
    /// Signed 64-bit integer (`int64`, `sint64`, `sfixed64`)
    Int64,
    /// Unsigned 64-bit integer (`uint64`, `fixed64`)
    Uint64,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// UTF-8 string
    String,
    /// Byte sequence
    Bytes,
    /// Nested message or map
    Message,
    /// Kind outside the canonical enumeration, with the schema's own label
    Other(String),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Int32 => f.write_str("int32"),
            Self::Uint32 => f.write_str("uint32"),
            Self::Int64 => f.write_str("int64"),
            Self::Uint64 => f.write_str("uint64"),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::Message => f.write_str("message"),
            Self::Other(label) => write!(f, "other({label})"),
        }
    }
}

/// Whether a field holds one value or a sequence of values.
///
/// Map fields are reported as [`Cardinality::Singular`] even though the wire
/// format encodes them as repeated entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// Exactly one value
    #[default]
    Singular,
    /// Ordered sequence of values
    Repeated,
}

/// A single field of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared in the schema
    pub name: String,
    /// Canonical kind
    pub kind: FieldKind,
    /// Singular or repeated
    pub cardinality: Cardinality,
}

impl FieldDescriptor {
    /// Creates a singular field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            cardinality: Cardinality::Singular,
        }
    }

    /// Marks the field as repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpserver_core::{Cardinality, FieldDescriptor, FieldKind};
    ///
    /// let field = FieldDescriptor::new("names", FieldKind::String).repeated();
    /// assert_eq!(field.cardinality, Cardinality::Repeated);
    /// assert!(field.is_repeated());
    /// ```
    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    /// Returns `true` if the field holds a sequence of values.
    #[inline]
    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        matches!(self.cardinality, Cardinality::Repeated)
    }
}

/// A message type with its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Name relative to the package, nested levels joined with `.`
    /// (e.g. `Outer.Inner`)
    pub name: String,
    /// Fully-qualified name without leading dot (e.g. `pkg.Outer.Inner`)
    pub full_name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    /// Creates a message without fields from its fully-qualified name.
    ///
    /// The relative name is everything after the last package segment, which
    /// is taken to be the last lowercase-initial segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpserver_core::MessageDescriptor;
    ///
    /// let msg = MessageDescriptor::new("acme.tools.v1.Outer.Inner");
    /// assert_eq!(msg.name, "Outer.Inner");
    /// assert_eq!(msg.full_name, "acme.tools.v1.Outer.Inner");
    ///
    /// let bare = MessageDescriptor::new("Empty");
    /// assert_eq!(bare.name, "Empty");
    /// ```
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let full_name = full_name.trim_start_matches('.').to_string();
        let name = relative_name(&full_name).to_string();
        Self {
            name,
            full_name,
            fields: Vec::new(),
        }
    }

    /// Creates a message with an explicit package-relative name.
    #[must_use]
    pub fn with_names(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// Strips leading package segments (those starting with a lowercase letter
/// or digit) from a fully-qualified name.
fn relative_name(full_name: &str) -> &str {
    let mut offset = 0;
    for segment in full_name.split('.') {
        let is_package = segment
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !is_package {
            break;
        }
        offset += segment.len() + 1;
    }
    if offset >= full_name.len() {
        full_name
    } else {
        &full_name[offset..]
    }
}

/// An RPC method: one input message, one output message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name as declared in the schema
    pub name: String,
    /// Input message
    pub input: MessageDescriptor,
    /// Output message
    pub output: MessageDescriptor,
}

impl MethodDescriptor {
    /// Creates a method descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        input: MessageDescriptor,
        output: MessageDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

/// A service with its ordered methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name as declared in the schema
    pub name: String,
    /// Methods in declaration order
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// Creates a service without methods.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Appends a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }
}

/// One schema file selected for generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Path of the schema file as given by the compiler (e.g. `acme/tools.proto`)
    pub name: String,
    /// Declared package, empty if none
    pub package: String,
    /// Services in declaration order
    pub services: Vec<ServiceDescriptor>,
}

impl SchemaFile {
    /// Creates a schema file without services.
    #[must_use]
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            services: Vec::new(),
        }
    }

    /// Appends a service.
    #[must_use]
    pub fn with_service(mut self, service: ServiceDescriptor) -> Self {
        self.services.push(service);
        self
    }

    /// Returns `true` if the file declares at least one service.
    #[inline]
    #[must_use]
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// File name with the schema extension removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpserver_core::SchemaFile;
    ///
    /// let file = SchemaFile::new("acme/tools.proto", "acme");
    /// assert_eq!(file.stem(), "acme/tools");
    /// ```
    #[must_use]
    pub fn stem(&self) -> &str {
        self.name.strip_suffix(".proto").unwrap_or(&self.name)
    }
}
