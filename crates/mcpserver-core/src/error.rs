//! Error types for protoc-gen-mcpserver.
//!
//! Generation is best-effort: most failures are scoped to one schema file and
//! recovered by the emission sink, so the variants carry enough context to be
//! rendered into an inline marker.
//!
//! # Examples
//!
//! ```
//! use mcpserver_core::{Error, Result};
//!
//! fn check_suffix(suffix: &str) -> Result<()> {
//!     if suffix.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "file_suffix cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_suffix("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for protoc-gen-mcpserver.
#[derive(Error, Debug)]
pub enum Error {
    /// Template registration or rendering failed.
    ///
    /// Raised when the Handlebars template cannot be parsed, references a
    /// missing variable (strict mode) or fails during execution.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template that failed
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when the plugin parameter string is malformed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Descriptor error.
    ///
    /// Raised when the schema descriptors handed over by the compiler are
    /// inconsistent (for example a file listed for generation is missing).
    #[error("Descriptor error in {file}: {reason}")]
    DescriptorError {
        /// Schema file the problem was found in
        file: String,
        /// Detailed reason
        reason: String,
    },
}

impl Error {
    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpserver_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     template: "mcpserver".to_string(),
    ///     message: "unclosed tag".to_string(),
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a descriptor error.
    #[must_use]
    pub const fn is_descriptor_error(&self) -> bool {
        matches!(self, Self::DescriptorError { .. })
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
