//! Generate DESIGN_CODES.md from the family tables.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-codes
//! cargo run --bin gen-codes -- ru    # localized reference
//! ```
//!
//! The generated file is written to `codedef_core/DESIGN_CODES.md`
//! (or `DESIGN_CODES.<locale>.md` when a locale is given).

use std::fs;
use std::path::PathBuf;

use codedef_core::registry::DesignCodeRegistry;
use codedef_core::report::generate_codes_markdown;

fn main() {
    let locale = std::env::args().nth(1);

    let registry = match &locale {
        Some(locale) => DesignCodeRegistry::new().with_locale(locale),
        None => DesignCodeRegistry::new(),
    };

    let output_path = match registry.locale() {
        Some(locale) => PathBuf::from(format!("codedef_core/DESIGN_CODES.{}.md", locale)),
        None => PathBuf::from("codedef_core/DESIGN_CODES.md"),
    };

    println!("Generating {}...", output_path.display());
    let markdown = generate_codes_markdown(&registry);

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
