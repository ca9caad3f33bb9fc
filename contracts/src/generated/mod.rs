//! Machine-generated OpenAPI bindings for the Jobs and Search APIs.
//!
//! Each module mirrors one OpenAPI document and exposes the same five
//! top-level groupings: `paths`, `webhooks`, `components` (with the
//! `schemas` map), `operations`, and `defs`. The re-export files one level
//! up are regenerated from these modules by `contracts-gen`.

pub mod jobs;
pub mod search;
