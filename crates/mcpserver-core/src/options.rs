//! Generator options.
//!
//! Options arrive through the compiler's parameter string, e.g.
//! `protoc --mcpserver_out=. --mcpserver_opt=runtime_crate=crate::rt,file_suffix=.mcp.rs`.
//!
//! # Examples
//!
//! ```
//! use mcpserver_core::GeneratorOptions;
//!
//! let opts = GeneratorOptions::parse(Some("runtime_crate=crate::rt")).unwrap();
//! assert_eq!(opts.runtime_crate, "crate::rt");
//! assert_eq!(opts.file_suffix, ".mcpserver.rs");
//! ```

use crate::{Error, Result};

/// Default crate path used by generated code to reach the runtime support.
pub const DEFAULT_RUNTIME_CRATE: &str = "::mcpserver_runtime";

/// Default suffix appended to the schema file stem.
pub const DEFAULT_FILE_SUFFIX: &str = ".mcpserver.rs";

/// Options controlling code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Rust path of the runtime support crate in generated `use` statements.
    ///
    /// Default: `::mcpserver_runtime`
    pub runtime_crate: String,

    /// Suffix of generated file names.
    ///
    /// Default: `.mcpserver.rs`
    pub file_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Parses the comma-separated `key=value` parameter string.
    ///
    /// `None` or an empty string yields the defaults. Unknown keys are
    /// ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if an entry is not of the form
    /// `key=value` or a known key has an empty value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpserver_core::GeneratorOptions;
    ///
    /// assert_eq!(GeneratorOptions::parse(None).unwrap(), GeneratorOptions::default());
    /// assert!(GeneratorOptions::parse(Some("runtime_crate")).is_err());
    /// ```
    pub fn parse(parameter: Option<&str>) -> Result<Self> {
        let mut opts = Self::default();
        let Some(parameter) = parameter else {
            return Ok(opts);
        };

        for part in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').ok_or_else(|| Error::ConfigError {
                message: format!("expected key=value, got '{part}'"),
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "runtime_crate" => opts.runtime_crate = non_empty(key, value)?,
                "file_suffix" => opts.file_suffix = non_empty(key, value)?,
                other => tracing::warn!("Ignoring unknown option '{other}'"),
            }
        }

        Ok(opts)
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::ConfigError {
            message: format!("option '{key}' cannot be empty"),
        });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GeneratorOptions::default();
        assert_eq!(opts.runtime_crate, "::mcpserver_runtime");
        assert_eq!(opts.file_suffix, ".mcpserver.rs");
    }

    #[test]
    fn test_parse_empty_string() {
        let opts = GeneratorOptions::parse(Some("")).unwrap();
        assert_eq!(opts, GeneratorOptions::default());
    }

    #[test]
    fn test_parse_multiple_options() {
        let opts =
            GeneratorOptions::parse(Some(" runtime_crate = crate::rt , file_suffix=.mcp.rs"))
                .unwrap();
        assert_eq!(opts.runtime_crate, "crate::rt");
        assert_eq!(opts.file_suffix, ".mcp.rs");
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let opts = GeneratorOptions::parse(Some("paths=source_relative")).unwrap();
        assert_eq!(opts, GeneratorOptions::default());
    }

    #[test]
    fn test_parse_rejects_missing_equals() {
        let err = GeneratorOptions::parse(Some("runtime_crate")).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_parse_rejects_empty_value() {
        let err = GeneratorOptions::parse(Some("file_suffix=")).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("file_suffix"));
    }
}
