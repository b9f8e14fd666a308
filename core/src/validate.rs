//! Registry validation.
//!
//! Reports the conditions [`OptionRegistry::register`] deliberately
//! tolerates: empty names, options without command tokens, tokens that do
//! not look like flags, the same token bound to two options, and a missing
//! `"help"` registration (which would make the missing-value fallback
//! invisible to the host). Validation never mutates the registry and is not
//! called by `parse`; hosts opt in, typically once at startup.
//!
//! # Examples
//!
//! ```
//! use optreg_core::{OptionRegistry, validate_registry};
//!
//! let mut options = OptionRegistry::new();
//! options.register("help", &["-h", "--help"], false, "Show this help listing");
//! options.register("width", &["-w", "--width"], true, "Window width in pixels");
//! assert!(validate_registry(&options).is_empty());
//!
//! // Tokenless option → can never match
//! options.register("ghost", &[], false, "Unreachable");
//! assert!(!validate_registry(&options).is_empty());
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::OptionRegistry;

/// Registry validation errors.
///
/// Each variant describes a registration that will misbehave at parse or
/// help time. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Option name is empty or whitespace-only.
    #[error("option name cannot be empty")]
    EmptyOptionName,
    /// Option has no command tokens and can never match.
    #[error("option '{0}' has no command tokens")]
    NoCommandTokens(String),
    /// Command token does not start with a dash (e.g. `"w"` instead of `"-w"`).
    #[error("invalid command token format: {0}")]
    InvalidCommandToken(String),
    /// The same command token is bound to two different options.
    #[error("command token '{token}' is bound to both '{first}' and '{second}'")]
    DuplicateCommandToken {
        /// The ambiguous token.
        token: String,
        /// Option that registered the token first.
        first: String,
        /// Option that registered it again.
        second: String,
    },
    /// No `"help"` option is registered, so the missing-value fallback has
    /// nothing visible to raise.
    #[error("no 'help' option is registered")]
    MissingHelpOption,
}

/// Validates a registry, returning every problem found.
///
/// Options are visited in registration order, so the result is
/// deterministic.
///
/// # Examples
///
/// ```
/// use optreg_core::{OptionRegistry, ValidationError, validate_registry};
///
/// let mut options = OptionRegistry::new();
/// options.register("help", &["--help"], false, "Show this help listing");
/// options.register("verbose", &["--help"], false, "Verbose output");
///
/// let errors = validate_registry(&options);
/// assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateCommandToken { .. })));
/// ```
pub fn validate_registry(registry: &OptionRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_tokens: HashMap<&str, &str> = HashMap::new();
    let mut has_help = false;

    for (name, entry) in registry.entries() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyOptionName);
            continue;
        }
        if name == "help" {
            has_help = true;
        }

        if entry.commands.is_empty() {
            errors.push(ValidationError::NoCommandTokens(name.to_string()));
            continue;
        }

        for token in &entry.commands {
            if !token.starts_with('-') || token.len() < 2 {
                errors.push(ValidationError::InvalidCommandToken(token.clone()));
                continue;
            }
            if let Some(first) = seen_tokens.insert(token.as_str(), name) {
                errors.push(ValidationError::DuplicateCommandToken {
                    token: token.clone(),
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }
        }
    }

    if !has_help {
        errors.push(ValidationError::MissingHelpOption);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registry() -> OptionRegistry {
        let mut options = OptionRegistry::new();
        options.register("help", &["-h", "--help"], false, "Show this help listing");
        options.register("width", &["-w", "--width"], true, "Window width in pixels");
        options
    }

    #[test]
    fn test_accepts_valid_registry() {
        assert!(validate_registry(&valid_registry()).is_empty());
    }

    #[test]
    fn test_rejects_tokenless_option() {
        let mut options = valid_registry();
        options.register("ghost", &[], false, "Unreachable");

        let errors = validate_registry(&options);
        assert_eq!(
            errors,
            vec![ValidationError::NoCommandTokens("ghost".to_string())]
        );
    }

    #[test]
    fn test_rejects_bad_token_format() {
        let mut options = valid_registry();
        options.register("verbose", &["v"], false, "Verbose output");

        let errors = validate_registry(&options);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidCommandToken("v".to_string())]
        );
    }

    #[test]
    fn test_rejects_token_bound_twice() {
        let mut options = valid_registry();
        options.register("wrap", &["-w"], false, "Wrap output");

        let errors = validate_registry(&options);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateCommandToken {
                token: "-w".to_string(),
                first: "width".to_string(),
                second: "wrap".to_string(),
            }]
        );
    }

    #[test]
    fn test_reports_missing_help_option() {
        let mut options = OptionRegistry::new();
        options.register("width", &["-w", "--width"], true, "Window width in pixels");

        let errors = validate_registry(&options);
        assert_eq!(errors, vec![ValidationError::MissingHelpOption]);
    }
}
