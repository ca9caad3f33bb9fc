//! Jobs API contract types.
//!
//! Generated by contracts-gen from the Jobs API bindings. Do not edit manually.

pub use crate::generated::jobs::{paths, webhooks, components, operations, defs};

pub use crate::generated::jobs::paths as jobs_paths;
pub use crate::generated::jobs::webhooks as jobs_webhooks;
pub use crate::generated::jobs::components as jobs_components;
pub use crate::generated::jobs::operations as jobs_operations;
pub use crate::generated::jobs::defs as jobs_defs;
