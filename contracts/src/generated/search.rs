// This code was automatically generated from schemas/search/openapi.yaml. Do not edit manually.

//! Search API bindings.
//!
//! Query published job postings.

pub mod paths {
    //! Path templates defined by the Search API document.

    pub const SEARCH: &str = "/search";
}

pub mod webhooks {
    //! The Search API document defines no webhooks.
}

pub mod components {
    //! Reusable components defined by the Search API document.

    pub mod schemas {
        //! Schema definitions, keyed by schema name.

        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Serialize};

        /// Query and filters for a job search.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobSearchRequest {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub query: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub page: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub page_size: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub profession: Option<Profession>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub grade: Option<Grade>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub assignment_type: Option<Assignments>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub approach: Option<Approach>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub location: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub radius_miles: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary_minimum: Option<f64>,
        }

        /// Paginated search results.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobSearchResponse {
            pub results: Vec<JobResultItem>,
            pub total: i64,
            pub page: i64,
            pub page_size: i64,
            pub total_pages: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub query: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub applied_filters: Option<JobSearchRequest>,
        }

        /// A single search hit.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobResultItem {
            pub id: String,
            pub external_id: String,
            pub title: String,
            pub organisation: String,
            pub location: Vec<Location>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub assignment_type: Option<Assignments>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary: Option<Salary>,
            pub closing_date: DateTime<Utc>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub profession: Option<Profession>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub approach: Option<Approach>,
        }

        /// A published job as indexed by the search service.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Job {
            pub id: String,
            pub external_id: String,
            pub title: String,
            pub description: String,
            pub organisation: String,
            pub approach: Approach,
            pub location: Vec<Location>,
            pub grade: Grade,
            pub assignment_type: Assignments,
            pub closing_date: DateTime<Utc>,
            pub profession: Profession,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary: Option<Salary>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub summary: Option<String>,
        }

        /// A location within the UK, with optional search distance.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct FixedLocation {
            pub location_display: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub postcode: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub latitude: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub longitude: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub distance_miles: Option<f64>,
        }

        /// A location outside the UK.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct OverseasLocation {
            pub country_name: String,
            pub country_code: String,
            pub location_display: String,
        }

        /// Either a fixed UK location or an overseas location.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(untagged)]
        pub enum Location {
            Overseas(OverseasLocation),
            Fixed(FixedLocation),
        }

        /// Salary range and presentation details.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Salary {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub minimum: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub maximum: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub currency: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub currency_symbol: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary_details: Option<String>,
        }

        /// Recruitment contact details for a posting.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Contacts {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub contact_name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub contact_email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub contact_phone: Option<String>,
        }

        /// Who a posting is open to.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Approach {
            External,
            Internal,
            AcrossGovernment,
            PreRelease,
        }

        /// Contractual basis of an assignment.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Assignments {
            Permanent,
            FixedTerm,
            Loan,
            Secondment,
        }

        /// Grade band, expressed as civil service equivalents.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Grade {
            #[serde(rename = "administrative_assistant_equivalent")]
            AdministrativeAssistantEquivalent,
            #[serde(rename = "administrative_officer_equivalent")]
            AdministrativeOfficerEquivalent,
            #[serde(rename = "executive_officer_equivalent")]
            ExecutiveOfficerEquivalent,
            #[serde(rename = "higher_executive_officer_equivalent")]
            HigherExecutiveOfficerEquivalent,
            #[serde(rename = "senior_executive_officer_equivalent")]
            SeniorExecutiveOfficerEquivalent,
            #[serde(rename = "grade_7_equivalent")]
            Grade7Equivalent,
            #[serde(rename = "grade_6_equivalent")]
            Grade6Equivalent,
            #[serde(rename = "senior_civil_service_equivalent")]
            SeniorCivilServiceEquivalent,
        }

        /// Professional discipline of a posting.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Profession {
            DigitalAndData,
            Policy,
            Operational,
            Commercial,
            Finance,
            HumanResources,
            Legal,
            ProjectDelivery,
            ScienceAndEngineering,
            Communications,
        }

        /// Error envelope returned by the search service.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Error {
            pub code: String,
            pub message: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub details: Option<Vec<String>>,
        }
    }
}

pub mod operations {
    //! Operations defined by the Search API document, keyed by operation id.

    pub mod search_jobs {
        //! `POST /search`

        pub const METHOD: &str = "POST";
        pub const PATH: &str = super::super::paths::SEARCH;
        pub type Request = super::super::components::schemas::JobSearchRequest;
        pub type Response = super::super::components::schemas::JobSearchResponse;
    }

    pub mod search_jobs_get {
        //! `GET /search`
        //!
        //! Query-parameter variant of the search operation.

        pub const METHOD: &str = "GET";
        pub const PATH: &str = super::super::paths::SEARCH;
        pub type Response = super::super::components::schemas::JobSearchResponse;
    }
}

pub mod defs {
    //! The Search API document defines no top-level definitions.
}
