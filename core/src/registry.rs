//! Option registration, argument scanning, and typed accessors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::OptionEntry;

/// Registry of named command-line options.
///
/// Register options once at startup, run [`parse`](Self::parse) (or
/// [`parse_args`](Self::parse_args)) exactly once on the raw argument
/// vector, then query the results through [`is_set`](Self::is_set) and the
/// typed value accessors. The registry is single-threaded and single-shot:
/// repeated parse calls accumulate state and are not supported.
///
/// Lookup goes through a hash map; registration order is kept separately so
/// the help listing is deterministic.
///
/// # Examples
///
/// ```
/// use optreg_core::OptionRegistry;
///
/// let mut options = OptionRegistry::new();
/// options.register("help", &["-h", "--help"], false, "Show this help listing");
/// options.register("gpu", &["-g", "--gpu"], true, "GPU selection");
///
/// options.parse(["demo", "--gpu", "discrete"]);
/// assert_eq!(options.value_as_string("gpu", "auto"), "discrete");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionRegistry {
    options: HashMap<String, OptionEntry>,
    /// Registration order, used only for help display.
    order: Vec<String>,
}

impl OptionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the option definition under `name`.
    ///
    /// `name` must be non-empty. `commands` should contain at least one
    /// token for the option to ever match; this is not enforced here, but
    /// [`validate_registry`](crate::validate_registry) reports it.
    ///
    /// Re-registering a name overwrites its definition and resets its parse
    /// state; the option keeps its original position in the help listing.
    pub fn register(&mut self, name: &str, commands: &[&str], has_value: bool, help: &str) {
        if !self.options.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.options
            .insert(name.to_string(), OptionEntry::new(commands, has_value, help));
    }

    /// Scans `arguments` and marks every registered option that matches.
    ///
    /// For each option, each of its command tokens is compared against every
    /// argument token for an exact string match. A match sets the option;
    /// for value-requiring options the following token is captured
    /// unconditionally, even when it looks like another flag. When a matched
    /// value-requiring token has no following token, scanning of that
    /// option's remaining command tokens stops and, after all options have
    /// been scanned, the `"help"` option's flag is force-set so the host can
    /// print usage and bail out.
    ///
    /// When the same command token appears more than once, the last
    /// occurrence wins for value capture. Index 0 of a real argument vector
    /// is the program path and simply never matches a flag token.
    pub fn parse<I, S>(&mut self, arguments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = arguments
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        let mut missing_value = false;
        for (name, entry) in self.options.iter_mut() {
            'commands: for command in &entry.commands {
                for (index, token) in tokens.iter().enumerate() {
                    if token != command {
                        continue;
                    }
                    debug!(option = %name, command = %command, index, "Matched command token");
                    entry.set = true;
                    if !entry.has_value {
                        continue;
                    }
                    match tokens.get(index + 1) {
                        Some(next) => entry.value = next.clone(),
                        None => {
                            debug!(option = %name, command = %command, "Missing option value");
                            missing_value = true;
                            break 'commands;
                        }
                    }
                }
            }
        }

        // A missing value aborts normal handling by raising the shared help
        // flag. Mirrors map-insert semantics: an unregistered "help" gains a
        // tokenless placeholder entry so is_set("help") still reports true.
        if missing_value {
            debug!("Forcing help flag after missing option value");
            self.options.entry("help".to_string()).or_default().set = true;
        }
    }

    /// Parses the process argument vector (`std::env::args()`).
    pub fn parse_args(&mut self) {
        self.parse(std::env::args());
    }

    /// Returns whether `name` is registered and was matched by the last
    /// parse. Unknown names return `false` rather than erroring, so hosts
    /// need not special-case flags they never registered.
    pub fn is_set(&self, name: &str) -> bool {
        self.options.get(name).is_some_and(|entry| entry.set)
    }

    /// Returns the captured value for `name`, or `default` when no value
    /// was captured.
    ///
    /// # Panics
    ///
    /// Panics when `name` was never registered; querying an unknown option
    /// is a programming error, not a recoverable condition.
    pub fn value_as_string(&self, name: &str, default: &str) -> String {
        let entry = self.entry_or_panic(name);
        if entry.value.is_empty() {
            default.to_string()
        } else {
            entry.value.clone()
        }
    }

    /// Returns the captured value for `name` parsed as a base-10 integer,
    /// or `default` when no value was captured or the parsed integer is not
    /// strictly positive.
    ///
    /// Parsing follows `strtol` semantics: leading whitespace is skipped, an
    /// optional sign and leading digits are consumed, and trailing text is
    /// ignored. Non-numeric text parses to 0 and therefore falls back to
    /// `default`; no error is raised for malformed input.
    ///
    /// # Panics
    ///
    /// Panics when `name` was never registered.
    pub fn value_as_int(&self, name: &str, default: i32) -> i32 {
        let entry = self.entry_or_panic(name);
        if entry.value.is_empty() {
            return default;
        }
        let parsed = leading_int(&entry.value);
        if parsed > 0 { parsed } else { default }
    }

    /// Iterates the registered options in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &OptionEntry)> {
        self.order
            .iter()
            .filter_map(|name| self.options.get(name).map(|entry| (name.as_str(), entry)))
    }

    fn entry_or_panic(&self, name: &str) -> &OptionEntry {
        self.options
            .get(name)
            .unwrap_or_else(|| panic!("option '{name}' is not registered"))
    }
}

/// Parses a leading base-10 integer the way `strtol` does: skip leading
/// whitespace, take an optional sign and as many digits as follow, ignore
/// the rest. No digits yields 0; overflow saturates to the `i32` range.
fn leading_int(text: &str) -> i32 {
    let mut chars = text.trim_start().chars().peekable();
    let mut negative = false;
    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            negative = c == '-';
            chars.next();
        }
    }

    let mut magnitude: i64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else { break };
        magnitude = magnitude.saturating_mul(10).saturating_add(i64::from(digit));
        // Past the i32 range the exact magnitude no longer matters.
        magnitude = magnitude.min(i64::from(i32::MAX) + 1);
    }

    let signed = if negative { -magnitude } else { magnitude };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
