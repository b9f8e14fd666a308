//! Option entry data model.
//!
//! Defines the per-option record stored in the
//! [`OptionRegistry`](crate::OptionRegistry). The type derives [`serde`]
//! traits so a registry snapshot can round-trip through JSON.

use serde::{Deserialize, Serialize};

/// A registered command-line option together with its parse-time state.
///
/// An option is identified in the registry by a logical name (the map key)
/// and matched on the command line by any of its `commands` tokens — e.g.
/// a `"width"` option answering to both `-w` and `--width`.
///
/// The `set` and `value` fields are mutated only by
/// [`OptionRegistry::parse`](crate::OptionRegistry::parse). An empty `value`
/// is the sentinel for "no value captured".
///
/// # Examples
///
/// ```
/// use optreg_core::OptionEntry;
///
/// let entry = OptionEntry::new(&["-w", "--width"], true, "Window width");
/// assert_eq!(entry.commands, vec!["-w", "--width"]);
/// assert!(entry.has_value);
/// assert!(!entry.set);
/// assert!(entry.value.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Command tokens that select this option (e.g. `-h`, `--help`).
    /// Order is preserved for deterministic help display.
    pub commands: Vec<String>,
    /// Whether a value token must follow the command token.
    pub has_value: bool,
    /// Free-text description shown in the help listing.
    pub help: String,
    /// Whether this option was matched during the last parse.
    pub set: bool,
    /// The captured value token; empty means none captured.
    pub value: String,
}

impl OptionEntry {
    /// Creates an entry with the given definition and fresh parse state.
    pub fn new(commands: &[&str], has_value: bool, help: &str) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            has_value,
            help: help.to_string(),
            set: false,
            value: String::new(),
        }
    }
}
