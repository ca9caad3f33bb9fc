//! Typed data contracts for the Jobs and Search APIs.
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

// Jobs schema types.
pub use crate::generated::jobs::components::schemas::JobSummary;
pub use crate::generated::jobs::components::schemas::Job;
pub use crate::generated::jobs::components::schemas::JobCreate;
pub use crate::generated::jobs::components::schemas::JobUpdate;
pub use crate::generated::jobs::components::schemas::JobAttachment;
pub use crate::generated::jobs::components::schemas::FixedLocations;
pub use crate::generated::jobs::components::schemas::OverseasLocations;
pub use crate::generated::jobs::components::schemas::Location;
pub use crate::generated::jobs::components::schemas::Salary;
pub use crate::generated::jobs::components::schemas::Contacts;
pub use crate::generated::jobs::components::schemas::Approach;
pub use crate::generated::jobs::components::schemas::Assignments;
pub use crate::generated::jobs::components::schemas::WorkLocation;
pub use crate::generated::jobs::components::schemas::WorkingPattern;
pub use crate::generated::jobs::components::schemas::Grade;
pub use crate::generated::jobs::components::schemas::Profession;
pub use crate::generated::jobs::components::schemas::DCStatus;

// Search schema types not already exported from Jobs.
pub use crate::generated::search::components::schemas::JobSearchRequest;
pub use crate::generated::search::components::schemas::JobSearchResponse;
pub use crate::generated::search::components::schemas::JobResultItem;
pub use crate::generated::search::components::schemas::FixedLocation;
pub use crate::generated::search::components::schemas::OverseasLocation;
pub use crate::generated::search::components::schemas::Error as ApiError;
