//! Demo host for the optreg option registry.
//!
//! Registers a realistic option set, parses the process argument vector, and
//! either prints the help listing or the resolved settings. Deliberately
//! does not use an argument-parsing library: the registry under demo is the
//! argument parser.

use std::process;

use optreg_core::{OptionRegistry, validate_registry};

fn build_registry() -> OptionRegistry {
    let mut options = OptionRegistry::new();
    options.register("help", &["--help"], false, "Show this help listing");
    options.register("width", &["-w", "--width"], true, "Window width in pixels");
    options.register("height", &["-h", "--height"], true, "Window height in pixels");
    options.register("fullscreen", &["-f", "--fullscreen"], false, "Start in fullscreen mode");
    options.register("vsync", &["--vsync"], false, "Enable vertical sync");
    options.register("validation", &["-v", "--validation"], false, "Enable validation layers");
    options.register("gpu", &["-g", "--gpu"], true, "Select GPU by index or name");
    options
}

fn main() {
    let mut options = build_registry();
    for error in validate_registry(&options) {
        eprintln!("warning: {error}");
    }

    options.parse_args();

    if options.is_set("help") {
        options.print_help();
        process::exit(0);
    }

    println!("width = {}", options.value_as_int("width", 1280));
    println!("height = {}", options.value_as_int("height", 720));
    println!("fullscreen = {}", options.is_set("fullscreen"));
    println!("vsync = {}", options.is_set("vsync"));
    println!("validation = {}", options.is_set("validation"));
    println!("gpu = {}", options.value_as_string("gpu", "auto"));
}
