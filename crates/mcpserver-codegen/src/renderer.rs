//! Adapter source renderer.
//!
//! Turns one [`SchemaFile`] into one Rust source document: a struct per
//! distinct input/output message, an adapter trait and registration function
//! per service, and a `serve_stdio` entry point over all services.
//!
//! # Examples
//!
//! ```
//! use mcpserver_codegen::Renderer;
//! use mcpserver_core::{
//!     FieldDescriptor, FieldKind, GeneratorOptions, MessageDescriptor, MethodDescriptor,
//!     SchemaFile, ServiceDescriptor,
//! };
//!
//! let sum = MethodDescriptor::new(
//!     "Sum",
//!     MessageDescriptor::new("example.SumRequest")
//!         .with_field(FieldDescriptor::new("a", FieldKind::Int32))
//!         .with_field(FieldDescriptor::new("b", FieldKind::Int32)),
//!     MessageDescriptor::new("example.SumResponse")
//!         .with_field(FieldDescriptor::new("result", FieldKind::Int32)),
//! );
//! let file = SchemaFile::new("example.proto", "example")
//!     .with_service(ServiceDescriptor::new("Example").with_method(sum));
//!
//! let renderer = Renderer::new(GeneratorOptions::default()).unwrap();
//! let generated = renderer.render(&file).unwrap();
//!
//! assert_eq!(generated.path, "example.mcpserver.rs");
//! assert!(generated.content.contains("pub trait ExampleMcpServer"));
//! assert!(generated.content.contains(r#"a: args.parse_i32("a", 0),"#));
//! ```

use crate::context::{
    FileContext, InputFieldContext, MessageContext, MethodContext, OutputFieldContext,
    ParamContext, ServiceContext, StructFieldContext,
};
use crate::naming::{rust_ident, string_literal, to_pascal_case, to_snake_case};
use crate::template_engine::{ADAPTER_TEMPLATE, TemplateEngine};
use crate::type_mapper::{FieldMapping, map_field};
use crate::types::GeneratedFile;
use mcpserver_core::{GeneratorOptions, MessageDescriptor, Result, SchemaFile};
use std::collections::{HashMap, HashSet};

/// Renders schema files into adapter source.
///
/// Rendering is deterministic: the same schema file and options always
/// produce byte-identical output.
#[derive(Debug)]
pub struct Renderer<'a> {
    engine: TemplateEngine<'a>,
    options: GeneratorOptions,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer using the built-in template.
    ///
    /// # Errors
    ///
    /// Returns error if the built-in template fails to register.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        Ok(Self::with_engine(TemplateEngine::new()?, options))
    }

    /// Creates a renderer around a prepared engine.
    ///
    /// The engine must have a template registered under
    /// [`ADAPTER_TEMPLATE`].
    #[must_use]
    pub const fn with_engine(engine: TemplateEngine<'a>, options: GeneratorOptions) -> Self {
        Self { engine, options }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Output path for a schema file: its stem plus the configured suffix.
    #[must_use]
    pub fn output_path(&self, file: &SchemaFile) -> String {
        format!("{}{}", file.stem(), self.options.file_suffix)
    }

    /// Renders one schema file.
    ///
    /// # Errors
    ///
    /// Returns [`mcpserver_core::Error::TemplateError`] if the template fails
    /// to render.
    pub fn render(&self, file: &SchemaFile) -> Result<GeneratedFile> {
        tracing::info!(
            "Rendering {} with {} services",
            file.name,
            file.services.len()
        );

        let context = self.build_context(file);
        let content = self.engine.render(ADAPTER_TEMPLATE, &context)?;

        let path = self.output_path(file);
        tracing::debug!(path = %path, bytes = content.len(), "Rendered adapter");
        Ok(GeneratedFile::new(path, content))
    }

    /// Builds the template context for a schema file.
    ///
    /// Every emitted name is unique within its namespace: traits and structs
    /// share the type namespace (traits claim theirs first), register
    /// functions sit next to `serve_stdio`, and method names are unique per
    /// trait.
    #[must_use]
    pub fn build_context(&self, file: &SchemaFile) -> FileContext {
        let mut types: HashSet<String> = HashSet::from([ADAPTER_PARAM.to_string()]);
        let mut functions: HashSet<String> = HashSet::from(["serve_stdio".to_string()]);
        let mut serve_args: HashSet<String> =
            HashSet::from(["name".to_string(), "version".to_string()]);

        let names: Vec<_> = file
            .services
            .iter()
            .map(|service| {
                let snake = to_snake_case(&service.name);
                (
                    unique(
                        format!("{}McpServer", to_pascal_case(&service.name)),
                        &mut types,
                    ),
                    unique(format!("register_{snake}_mcp_server"), &mut functions),
                    unique(format!("srv_{snake}"), &mut serve_args),
                )
            })
            .collect();

        let mut messages = MessageTable::reserving(types);
        let mut services = Vec::with_capacity(file.services.len());

        for (service, (trait_ident, register_fn, arg_ident)) in file.services.iter().zip(names) {
            let mut method_idents = HashSet::new();
            let mut methods = Vec::with_capacity(service.methods.len());

            for method in &service.methods {
                let ident = unique(rust_ident(&to_snake_case(&method.name)), &mut method_idents);
                let input = messages.plan(&method.input);
                let output = messages.plan(&method.output);
                tracing::debug!(
                    service = %service.name,
                    tool = %method.name,
                    params = input.fields.len(),
                    "Planned tool"
                );
                methods.push(method_context(&method.name, ident, input, output));
            }

            services.push(ServiceContext {
                name: service.name.clone(),
                trait_ident,
                register_fn,
                arg_ident,
                methods,
            });
        }

        FileContext {
            source: file.name.clone(),
            runtime_crate: self.options.runtime_crate.clone(),
            messages: messages.into_contexts(),
            services,
        }
    }
}

/// Type parameter of the generated register functions.
const ADAPTER_PARAM: &str = "S";

/// A message struct as it will be emitted.
#[derive(Debug, Clone)]
struct MessagePlan {
    ident: String,
    full_name: String,
    fields: Vec<PlannedField>,
}

#[derive(Debug, Clone)]
struct PlannedField {
    ident: String,
    mapping: FieldMapping,
}

/// Distinct messages in first-appearance order, keyed by full name.
#[derive(Debug, Default)]
struct MessageTable {
    plans: Vec<MessagePlan>,
    by_name: HashMap<String, usize>,
    idents: HashSet<String>,
}

impl MessageTable {
    /// A table whose structs avoid every name in `taken`.
    fn reserving(taken: HashSet<String>) -> Self {
        Self {
            idents: taken,
            ..Self::default()
        }
    }

    fn plan(&mut self, message: &MessageDescriptor) -> MessagePlan {
        if let Some(&i) = self.by_name.get(&message.full_name) {
            return self.plans[i].clone();
        }

        let ident = self.struct_ident(message);
        let mut field_idents = HashSet::new();
        let fields = message
            .fields
            .iter()
            .map(|field| PlannedField {
                ident: unique(rust_ident(&to_snake_case(&field.name)), &mut field_idents),
                mapping: map_field(field),
            })
            .collect();

        let plan = MessagePlan {
            ident,
            full_name: message.full_name.clone(),
            fields,
        };
        self.by_name
            .insert(message.full_name.clone(), self.plans.len());
        self.plans.push(plan.clone());
        plan
    }

    fn struct_ident(&mut self, message: &MessageDescriptor) -> String {
        let short = rust_ident(&to_pascal_case(&message.name));
        if !short.is_empty() && !self.idents.contains(&short) {
            self.idents.insert(short.clone());
            return short;
        }

        let long = rust_ident(&to_pascal_case(&message.full_name));
        tracing::debug!(
            message = %message.full_name,
            ident = %long,
            "Struct name taken, using fully-qualified name"
        );
        unique(long, &mut self.idents)
    }

    fn into_contexts(self) -> Vec<MessageContext> {
        self.plans
            .into_iter()
            .map(|plan| MessageContext {
                ident: plan.ident,
                full_name: plan.full_name,
                fields: plan
                    .fields
                    .into_iter()
                    .map(|f| StructFieldContext {
                        ident: f.ident,
                        rust_type: f.mapping.rust_type,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Returns `candidate`, or `candidate_N` for the smallest free `N >= 2`.
fn unique(candidate: String, taken: &mut HashSet<String>) -> String {
    let candidate = if candidate.is_empty() {
        "Message".to_string()
    } else {
        candidate
    };
    let mut ident = candidate.clone();
    let mut n = 2;
    while taken.contains(&ident) {
        ident = format!("{candidate}_{n}");
        n += 1;
    }
    taken.insert(ident.clone());
    ident
}

fn method_context(
    name: &str,
    ident: String,
    input: MessagePlan,
    output: MessagePlan,
) -> MethodContext {
    let params = input
        .fields
        .iter()
        .map(|f| ParamContext {
            builder: f.mapping.param_kind.builder().to_string(),
            name_literal: string_literal(&f.mapping.name),
            description_literal: string_literal(&format!("Parameter {}", f.mapping.name)),
            items_arg: f
                .mapping
                .item_kind
                .map(|kind| format!(", mcp::ParamKind::{}", kind.variant()))
                .unwrap_or_default(),
        })
        .collect();

    let inputs = input
        .fields
        .iter()
        .map(|f| InputFieldContext {
            ident: f.ident.clone(),
            value_expr: f.mapping.parse_expr("args"),
        })
        .collect::<Vec<_>>();

    let outputs = output
        .fields
        .iter()
        .map(|f| OutputFieldContext {
            ident: f.ident.clone(),
            name_literal: string_literal(&f.mapping.name),
            format_fn: f.mapping.format_fn.to_string(),
        })
        .collect::<Vec<_>>();

    MethodContext {
        rust_ident: ident,
        name_literal: string_literal(name),
        description_literal: string_literal(&format!("{name} description")),
        title_literal: string_literal(name),
        input_ident: input.ident,
        output_ident: output.ident,
        args_binding: if inputs.is_empty() { "_args" } else { "args" }.to_string(),
        res_binding: if outputs.is_empty() { "_res" } else { "res" }.to_string(),
        output_binding: if outputs.is_empty() {
            "output"
        } else {
            "mut output"
        }
        .to_string(),
        params,
        inputs,
        outputs,
    }
}
