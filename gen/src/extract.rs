//! Schema name extraction from generated binding files.
//!
//! The binding files are treated as plain text, never compiled or parsed:
//! the extractor only needs the names of the schema types, and a regex over
//! the source keeps the generator decoupled from the bindings crate.

use std::sync::OnceLock;

use regex::Regex;

/// Matches schema declarations in a generated binding file.
///
/// Schema types are the only `pub struct`/`pub enum` items two modules deep
/// (inside `components::schemas`), so an exact eight-space indent singles
/// them out; path and operation items sit one level down or are
/// `const`/`type` items and never match.
fn schema_decl() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^ {8}pub (?:struct|enum) ([A-Z][A-Za-z0-9]*)\b")
            .expect("schema declaration pattern is valid")
    })
}

/// Extracts schema names from binding-file text, in encounter order.
///
/// Duplicates are preserved as-is; no renaming or validation is performed.
/// Text that contains no schema declarations (including empty text) yields
/// an empty list rather than an error.
///
/// ## Examples
///
/// ```
/// use jobs_contracts_gen::extract::extract_schema_names;
///
/// let source = "pub mod components {\n    pub mod schemas {\n        pub struct Job {\n        }\n    }\n}\n";
/// assert_eq!(extract_schema_names(source), vec!["Job"]);
/// ```
pub fn extract_schema_names(source: &str) -> Vec<String> {
    schema_decl()
        .captures_iter(source)
        .map(|cap| cap[1].to_string())
        .collect()
}
