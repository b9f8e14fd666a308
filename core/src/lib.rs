//! Registry-based command-line option parsing.
//!
//! This crate provides a small, table-driven argument parser:
//!
//! - [`OptionRegistry`] — maps logical option names to their definitions,
//!   scans a raw argument vector, and answers typed queries afterward.
//! - [`OptionEntry`] — one registered option: accepted command tokens,
//!   value requirement, help text, and parse-time state.
//!
//! Validation ([`validate_registry`]) reports the conditions registration
//! deliberately tolerates, such as tokenless options or a command token
//! bound to two different options.
//!
//! Options are registered once at startup, `parse` runs once on the process
//! argument vector, and the host then queries the results. A value-requiring
//! flag with no following token does not produce an error; it raises the
//! `"help"` option's flag so the host can print usage and exit.
//!
//! # Example
//!
//! ```
//! use optreg_core::OptionRegistry;
//!
//! let mut options = OptionRegistry::new();
//! options.register("help", &["-h", "--help"], false, "Show this help listing");
//! options.register("width", &["-w", "--width"], true, "Window width in pixels");
//!
//! options.parse(["demo", "-w", "1920"]);
//!
//! assert!(options.is_set("width"));
//! assert_eq!(options.value_as_int("width", 800), 1920);
//! assert!(!options.is_set("help"));
//! ```

mod help;
mod registry;
mod types;
mod validate;

pub use registry::OptionRegistry;
pub use types::OptionEntry;
pub use validate::{ValidationError, validate_registry};
