//! Tool definitions and results.

use crate::JsonObject;
use rmcp::model::{CallToolResult, Content, Tool, ToolAnnotations};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `boolean`
    Boolean,
    /// `number` (all integer and float widths)
    Number,
    /// `string`
    String,
    /// `object`
    Object,
    /// `array`
    Array,
}

impl ParamKind {
    /// JSON Schema type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Argument name
    pub name: String,
    /// JSON type
    pub kind: ParamKind,
    /// Element type for arrays
    pub items: Option<ParamKind>,
    /// Human-readable description
    pub description: String,
}

impl Parameter {
    fn schema(&self) -> Value {
        let mut schema = json!({
            "type": self.kind.as_str(),
            "description": self.description,
        });
        if let Some(items) = self.items {
            schema["items"] = json!({ "type": items.as_str() });
        }
        schema
    }
}

/// Builder for a tool advertised to MCP clients.
///
/// All parameters are optional from the client's point of view: handlers
/// substitute defaults for anything missing.
///
/// # Examples
///
/// ```
/// use mcpserver_runtime::{ParamKind, ToolDefinition};
///
/// let def = ToolDefinition::new("ProcessNames")
///     .description("ProcessNames description")
///     .title("ProcessNames")
///     .array("names", "Parameter names", ParamKind::String)
///     .boolean("dry_run", "Parameter dry_run");
///
/// let schema = def.input_schema();
/// assert_eq!(schema["type"], "object");
/// assert_eq!(schema["properties"]["names"]["items"]["type"], "string");
/// assert_eq!(def.parameters().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    name: String,
    description: String,
    title: Option<String>,
    parameters: Vec<Parameter>,
}

impl ToolDefinition {
    /// Starts a definition; the description defaults to `"<name> description"`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("{name} description"),
            name,
            title: None,
            parameters: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the title annotation.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn parameter(
        mut self,
        name: impl Into<String>,
        kind: ParamKind,
        items: Option<ParamKind>,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            kind,
            items,
            description: description.into(),
        });
        self
    }

    /// Adds a boolean parameter.
    #[must_use]
    pub fn boolean(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameter(name, ParamKind::Boolean, None, description)
    }

    /// Adds a number parameter.
    #[must_use]
    pub fn number(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameter(name, ParamKind::Number, None, description)
    }

    /// Adds a string parameter.
    #[must_use]
    pub fn string(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameter(name, ParamKind::String, None, description)
    }

    /// Adds an object parameter.
    #[must_use]
    pub fn object(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameter(name, ParamKind::Object, None, description)
    }

    /// Adds an array parameter with typed elements.
    #[must_use]
    pub fn array(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
        items: ParamKind,
    ) -> Self {
        self.parameter(name, ParamKind::Array, Some(items), description)
    }

    /// Tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// JSON Schema of the tool's input object.
    #[must_use]
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .parameters
            .iter()
            .map(|p| (p.name.clone(), p.schema()))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema
    }

    /// Converts to the protocol's tool model.
    #[must_use]
    pub fn to_tool(&self) -> Tool {
        let mut tool = Tool::new(
            self.name.clone(),
            self.description.clone(),
            Arc::new(self.input_schema()),
        );
        if let Some(title) = &self.title {
            tool.annotations = Some(ToolAnnotations::with_title(title.clone()));
        }
        tool
    }
}

/// Ordered `field: value` lines returned from a tool call.
///
/// # Examples
///
/// ```
/// use mcpserver_runtime::ToolOutput;
///
/// let mut output = ToolOutput::new();
/// output.line("result", "5".to_string());
/// assert_eq!(output.lines(), ["result: 5"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    lines: Vec<String>,
}

impl ToolOutput {
    /// Creates an empty output.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends a `field: value` line.
    pub fn line(&mut self, field: &str, value: String) {
        self.lines.push(format!("{field}: {value}"));
    }

    /// Lines appended so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Converts into a successful call result, one text item per line.
    #[must_use]
    pub fn into_result(self) -> CallToolResult {
        CallToolResult::success(self.lines.into_iter().map(Content::text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_description() {
        let def = ToolDefinition::new("Sum");
        assert_eq!(def.description, "Sum description");
        assert!(def.parameters().is_empty());
    }

    #[test]
    fn test_parameterless_schema_has_empty_properties() {
        let schema = ToolDefinition::new("Ping").input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_schema_properties() {
        let def = ToolDefinition::new("Sum")
            .number("a", "Parameter a")
            .object("meta", "Parameter meta");
        let schema = def.input_schema();
        assert_eq!(schema["properties"]["a"]["type"], "number");
        assert_eq!(schema["properties"]["a"]["description"], "Parameter a");
        assert_eq!(schema["properties"]["meta"]["type"], "object");
        assert!(schema["properties"]["a"].get("items").is_none());
    }

    #[test]
    fn test_to_tool() {
        let tool = ToolDefinition::new("Sum").title("Sum").to_tool();
        assert_eq!(tool.name, "Sum");
        assert!(tool.annotations.is_some());
        assert_eq!(tool.input_schema["type"], "object");
    }

    #[test]
    fn test_empty_output_has_no_content() {
        let result = ToolOutput::new().into_result();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["content"].as_array().is_none_or(Vec::is_empty));
    }

    #[test]
    fn test_param_kind_display() {
        assert_eq!(ParamKind::Array.to_string(), "array");
        assert_eq!(ParamKind::Number.as_str(), "number");
    }
}
