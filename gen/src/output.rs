//! Output assembly and file writing for the regenerated re-export files.
//!
//! This module is the I/O edge of the generator: it reads the two binding
//! files, runs the pure extract/render pipeline, and writes the results.
//!
//! ## Output Structure
//!
//! ```text
//! contracts/src/
//! ├── lib.rs         # Index: module declarations and flattened re-exports
//! ├── jobs.rs        # Jobs API re-export surface
//! └── search.rs      # Search API re-export surface
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: every rendered artifact is parsed with `syn` before any
//!   file is written, so a templating bug can never ship broken Rust
//! - **Atomic writes**: temp file + rename, so a file is never half-written

use std::fs;
use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::errors::GeneratorError;
use crate::extract::extract_schema_names;
use crate::render::{render_index, render_jobs, render_search};

/// Reads a generated binding file as plain text.
pub fn read_binding(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Validates a rendered artifact by parsing it as a complete Rust file.
///
/// ## Errors
///
/// Returns `GeneratorError::RenderError` if the text fails to parse. That
/// means the templates are broken, not the input.
pub fn validate_rendered(name: &str, content: &str) -> Result<(), GeneratorError> {
    syn::parse_file(content)
        .map(|_| ())
        .map_err(|e| GeneratorError::RenderError(format!("{name}: {e}")))
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created if absent. Other readers see either the
/// old or the new content, never a mix.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Regenerates the three re-export files under `<contracts_dir>/src`.
///
/// This is the main entry point. It reads the binding files, extracts the
/// schema names, renders and validates all three artifacts, and only then
/// writes them (jobs, search, index in that order) with a progress line per
/// file. With `dry_run` the rendered text is printed instead of written.
///
/// ## Errors
///
/// Returns an error if either binding file cannot be read, a rendered
/// artifact fails validation, or a write fails. There is no partial-write
/// recovery: a failure partway leaves previously written files in place.
pub fn generate_and_write_all(contracts_dir: &Path, dry_run: bool) -> Result<(), GeneratorError> {
    let src_dir = contracts_dir.join("src");

    let jobs_binding = read_binding(&src_dir.join("generated").join("jobs.rs"))?;
    let search_binding = read_binding(&src_dir.join("generated").join("search.rs"))?;

    let jobs_names = extract_schema_names(&jobs_binding);
    let search_names = extract_schema_names(&search_binding);
    info!(
        jobs = jobs_names.len(),
        search = search_names.len(),
        "extracted schema names"
    );

    let artifacts = [
        ("jobs.rs", render_jobs()),
        ("search.rs", render_search(&search_names)),
        ("lib.rs", render_index(&jobs_names, &search_names)),
    ];

    for (name, content) in &artifacts {
        validate_rendered(name, content)?;
    }

    if dry_run {
        for (name, content) in &artifacts {
            println!("=== {} ===\n{}", name, content);
        }
        return Ok(());
    }

    for (name, content) in &artifacts {
        let path = src_dir.join(name);
        write_atomic(&path, content)?;
        println!("{} {}", "✓".green(), path.display());
    }

    Ok(())
}
