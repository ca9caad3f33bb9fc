//! Search API contract types.
//!
//! Generated by contracts-gen from the Search API bindings. Do not edit manually.

pub use crate::generated::search::{paths, webhooks, components, operations, defs};

pub use crate::generated::search::paths as search_paths;
pub use crate::generated::search::webhooks as search_webhooks;
pub use crate::generated::search::components as search_components;
pub use crate::generated::search::operations as search_operations;
pub use crate::generated::search::defs as search_defs;

// Commonly used schema types, re-exported for convenience.
pub use crate::generated::search::components::schemas::JobSearchRequest;
pub use crate::generated::search::components::schemas::JobSearchResponse;
pub use crate::generated::search::components::schemas::JobResultItem;
pub use crate::generated::search::components::schemas::Job;
pub use crate::generated::search::components::schemas::FixedLocation;
pub use crate::generated::search::components::schemas::OverseasLocation;
pub use crate::generated::search::components::schemas::Location;
pub use crate::generated::search::components::schemas::Salary;
pub use crate::generated::search::components::schemas::Contacts;
pub use crate::generated::search::components::schemas::Approach;
pub use crate::generated::search::components::schemas::Assignments;
pub use crate::generated::search::components::schemas::Grade;
pub use crate::generated::search::components::schemas::Profession;
pub use crate::generated::search::components::schemas::Error;
