//! Re-export file generator for the jobs-contracts crate.
//!
//! The contracts crate ships two machine-generated binding modules (one per
//! OpenAPI document) and three hand-importable re-export files regenerated
//! from them. This crate is the regenerator: it scrapes the schema names out
//! of the binding files, renders the re-export files, and writes them back.
//!
//! ## Modules
//!
//! - [`extract`] - Schema name extraction from binding-file text
//! - [`render`] - Pure templating from name lists to file text
//! - [`output`] - Validation, atomic file writing, and the run driver
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use jobs_contracts_gen::output::generate_and_write_all;
//!
//! generate_and_write_all(Path::new("contracts"), false).unwrap();
//! ```

pub mod errors;
pub mod extract;
pub mod output;
pub mod render;
