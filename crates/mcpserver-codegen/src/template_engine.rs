//! Template engine for adapter generation using Handlebars.
//!
//! Wraps Handlebars with the built-in adapter template pre-registered.
//! Output is Rust source, so HTML escaping is turned off.
//!
//! # Examples
//!
//! ```
//! use mcpserver_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("greeting", "// hello {{name}}").unwrap();
//! let out = engine.render("greeting", &json!({"name": "a<b>"})).unwrap();
//! assert_eq!(out, "// hello a<b>");
//! ```

use handlebars::Handlebars;
use mcpserver_core::{Error, Result};
use serde::Serialize;

/// Name of the built-in adapter template.
pub const ADAPTER_TEMPLATE: &str = "mcpserver";

/// Template engine for code generation.
///
/// Runs in strict mode: referencing a variable missing from the context is a
/// render error rather than an empty string.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with the adapter template registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with the built-in template).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        engine.register_template_string(
            ADAPTER_TEMPLATE,
            include_str!("../templates/mcpserver.rs.hbs"),
        )?;

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context references a missing variable
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("rendering failed: {e}"),
            })
    }

    /// Registers a template, replacing any template of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("registration failed: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
