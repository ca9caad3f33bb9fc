//! Rendering of the three re-export files from extracted name lists.
//!
//! Pure string templating: no filesystem access happens here, so every
//! artifact can be asserted on in tests without touching disk. Reading the
//! binding files and writing the results is the job of [`crate::output`].

use std::collections::HashSet;

use tracing::debug;

/// Static portion of the jobs re-export file.
const JOBS_HEADER: &str = r#"//! Jobs API contract types.
//!
//! Generated by contracts-gen from the Jobs API bindings. Do not edit manually.

pub use crate::generated::jobs::{paths, webhooks, components, operations, defs};

pub use crate::generated::jobs::paths as jobs_paths;
pub use crate::generated::jobs::webhooks as jobs_webhooks;
pub use crate::generated::jobs::components as jobs_components;
pub use crate::generated::jobs::operations as jobs_operations;
pub use crate::generated::jobs::defs as jobs_defs;
"#;

/// Static portion of the search re-export file.
const SEARCH_HEADER: &str = r#"//! Search API contract types.
//!
//! Generated by contracts-gen from the Search API bindings. Do not edit manually.

pub use crate::generated::search::{paths, webhooks, components, operations, defs};

pub use crate::generated::search::paths as search_paths;
pub use crate::generated::search::webhooks as search_webhooks;
pub use crate::generated::search::components as search_components;
pub use crate::generated::search::operations as search_operations;
pub use crate::generated::search::defs as search_defs;
"#;

/// Static portion of the crate-root index file: module declarations and the
/// namespaced grouping aliases for both APIs.
const INDEX_HEADER: &str = r#"//! Typed data contracts for the Jobs and Search APIs.
//!
//! Rust types generated from the two OpenAPI schema documents. The re-export
//! surface below is regenerated by contracts-gen; edit the schemas, not this
//! file.

pub mod generated;
pub mod jobs;
pub mod search;

// Jobs API groupings, under namespaced aliases.
pub use crate::generated::jobs::paths as jobs_paths;
pub use crate::generated::jobs::webhooks as jobs_webhooks;
pub use crate::generated::jobs::components as jobs_components;
pub use crate::generated::jobs::operations as jobs_operations;
pub use crate::generated::jobs::defs as jobs_defs;

// Search API groupings, under namespaced aliases.
pub use crate::generated::search::paths as search_paths;
pub use crate::generated::search::webhooks as search_webhooks;
pub use crate::generated::search::components as search_components;
pub use crate::generated::search::operations as search_operations;
pub use crate::generated::search::defs as search_defs;
"#;

/// Renders the jobs re-export file.
///
/// The jobs surface re-exports the five groupings only; individual schema
/// types reach consumers through the crate root.
pub fn render_jobs() -> String {
    JOBS_HEADER.to_string()
}

/// Renders the search re-export file: the five groupings plus one re-export
/// line per extracted schema name, in extraction order.
///
/// An empty name list yields the static header alone, with no per-name lines.
pub fn render_search(names: &[String]) -> String {
    let mut out = String::from(SEARCH_HEADER);
    if !names.is_empty() {
        out.push('\n');
        out.push_str("// Commonly used schema types, re-exported for convenience.\n");
        for name in names {
            out.push_str(&format!(
                "pub use crate::generated::search::components::schemas::{name};\n"
            ));
        }
    }
    out
}

/// Renders the crate-root index file.
///
/// Emits one flattened re-export per Jobs schema name, then one per Search
/// schema name not already exported from Jobs (Search order preserved). A
/// Search schema literally named `Error` is re-exported `as ApiError` so the
/// bare name never shadows `std::error::Error` in consumer imports.
pub fn render_index(jobs_names: &[String], search_names: &[String]) -> String {
    let mut out = String::from(INDEX_HEADER);
    let mut exported: HashSet<&str> = HashSet::new();

    out.push_str("\n// Jobs schema types.\n");
    for name in jobs_names {
        if !exported.insert(name) {
            continue;
        }
        out.push_str(&format!(
            "pub use crate::generated::jobs::components::schemas::{name};\n"
        ));
    }

    // Jobs is authoritative for any name defined by both documents.
    out.push_str("\n// Search schema types not already exported from Jobs.\n");
    for name in search_names {
        if !exported.insert(name) {
            debug!(name = %name, "suppressing search schema already exported from jobs");
            continue;
        }
        if name == "Error" {
            out.push_str(
                "pub use crate::generated::search::components::schemas::Error as ApiError;\n",
            );
        } else {
            out.push_str(&format!(
                "pub use crate::generated::search::components::schemas::{name};\n"
            ));
        }
    }

    out
}
