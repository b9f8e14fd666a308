//! Help listing rendering.

use std::fmt::Write as _;

use crate::OptionRegistry;

impl OptionRegistry {
    /// Renders the option listing: a header line, then one line per option
    /// in registration order with its command tokens comma-joined and its
    /// help text.
    ///
    /// # Examples
    ///
    /// ```
    /// use optreg_core::OptionRegistry;
    ///
    /// let mut options = OptionRegistry::new();
    /// options.register("help", &["-h", "--help"], false, "Show this help listing");
    ///
    /// let listing = options.render_help();
    /// assert!(listing.starts_with("Available command line options:\n"));
    /// assert!(listing.contains(" -h, --help: Show this help listing"));
    /// ```
    pub fn render_help(&self) -> String {
        let mut listing = String::from("Available command line options:\n");
        for (_, entry) in self.entries() {
            let commands = entry.commands.join(", ");
            let _ = writeln!(listing, " {commands}: {}", entry.help);
        }
        listing
    }

    /// Writes the rendered listing to stdout. Does not mutate registry
    /// state and has no effect on the process exit code.
    pub fn print_help(&self) {
        print!("{}", self.render_help());
    }
}

#[cfg(test)]
mod tests {
    use crate::OptionRegistry;

    #[test]
    fn test_listing_follows_registration_order() {
        let mut options = OptionRegistry::new();
        options.register("width", &["-w", "--width"], true, "Window width in pixels");
        options.register("help", &["-h", "--help"], false, "Show this help listing");

        let listing = options.render_help();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Available command line options:",
                " -w, --width: Window width in pixels",
                " -h, --help: Show this help listing",
            ]
        );
    }

    #[test]
    fn test_rendering_does_not_mutate_state() {
        let mut options = OptionRegistry::new();
        options.register("help", &["-h", "--help"], false, "Show this help listing");
        options.parse(["demo", "-h"]);

        let first = options.render_help();
        let second = options.render_help();
        assert_eq!(first, second);
        assert!(options.is_set("help"));
    }
}
