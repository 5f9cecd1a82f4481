//! The `learnpath validate` command.

use std::path::PathBuf;

use anyhow::Result;

use learnpath_core::parser;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = parser::parse_catalog(&catalog_path)?;

    println!(
        "Catalog: {} students, {} courses, {} enrollments",
        catalog.students().len(),
        catalog.courses().len(),
        catalog.enrollments().len()
    );

    let warnings = parser::validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .record
            .as_ref()
            .map(|r| format!("  [{r}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
