// This code was automatically generated from schemas/jobs/openapi.yaml. Do not edit manually.

//! Jobs API bindings.
//!
//! Create, update, list and retrieve job postings.

pub mod paths {
    //! Path templates defined by the Jobs API document.

    pub const JOBS: &str = "/jobs";
    pub const JOB_BY_EXTERNAL_ID: &str = "/jobs/{externalId}";
}

pub mod webhooks {
    //! The Jobs API document defines no webhooks.
}

pub mod components {
    //! Reusable components defined by the Jobs API document.

    pub mod schemas {
        //! Schema definitions, keyed by schema name.

        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Serialize};

        /// Condensed listing row returned by the list operation.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobSummary {
            pub external_id: String,
            pub title: String,
            pub organisation: String,
            pub closing_date: DateTime<Utc>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub grade: Option<Grade>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub profession: Option<Profession>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub status: Option<DCStatus>,
        }

        /// A full job posting record.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Job {
            /// Server-assigned identifier; absent until the job is stored.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,
            pub external_id: String,
            pub title: String,
            pub description: String,
            pub organisation: String,
            pub approach: Approach,
            pub location: Vec<Location>,
            pub grade: Grade,
            pub assignment_type: Assignments,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub working_pattern: Option<WorkingPattern>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub work_location: Option<WorkLocation>,
            pub personal_spec: String,
            pub apply_detail: String,
            pub closing_date: DateTime<Utc>,
            pub profession: Profession,
            pub recruitment_email: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary: Option<Salary>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub summary: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub benefits: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub attachments: Option<Vec<JobAttachment>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub contacts: Option<Contacts>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub status: Option<DCStatus>,
        }

        /// Payload for creating a job posting.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobCreate {
            pub external_id: String,
            pub title: String,
            pub description: String,
            pub organisation: String,
            pub approach: Approach,
            pub location: Vec<Location>,
            pub grade: Grade,
            pub assignment_type: Assignments,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub working_pattern: Option<WorkingPattern>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub work_location: Option<WorkLocation>,
            pub personal_spec: String,
            pub apply_detail: String,
            pub closing_date: DateTime<Utc>,
            pub profession: Profession,
            pub recruitment_email: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary: Option<Salary>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub summary: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub benefits: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub attachments: Option<Vec<JobAttachment>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub contacts: Option<Contacts>,
        }

        /// Payload for updating a job posting; every field is optional.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobUpdate {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub title: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub organisation: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub approach: Option<Approach>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub location: Option<Vec<Location>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub grade: Option<Grade>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub assignment_type: Option<Assignments>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub working_pattern: Option<WorkingPattern>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub work_location: Option<WorkLocation>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub personal_spec: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub apply_detail: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub closing_date: Option<DateTime<Utc>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub profession: Option<Profession>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub recruitment_email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub salary: Option<Salary>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub summary: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub benefits: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub attachments: Option<Vec<JobAttachment>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub contacts: Option<Contacts>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub status: Option<DCStatus>,
        }

        /// Supporting document attached to a job posting.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct JobAttachment {
            pub file_name: String,
            pub url: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub content_type: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub size_bytes: Option<i64>,
        }

        /// A location within the UK.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct FixedLocations {
            pub location_display: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub postcode: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub town: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub region: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub latitude: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub longitude: Option<f64>,
        }

        /// A location outside the UK.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct OverseasLocations {
            pub country_name: String,
            pub country_code: String,
            pub location_display: String,
        }

        /// Either a fixed UK location or an overseas location.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(untagged)]
        pub enum Location {
            Overseas(OverseasLocations),
            Fixed(FixedLocations),
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

        /// Where the work is carried out.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum WorkLocation {
            Office,
            Remote,
            Hybrid,
        }

        /// Working time arrangement for a posting.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum WorkingPattern {
            FullTime,
            PartTime,
            FlexibleWorking,
            JobShare,
            CompressedHours,
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

        /// Lifecycle status of a data-contract record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum DCStatus {
            Draft,
            PendingApproval,
            Published,
            Closed,
            Archived,
        }
    }
}

pub mod operations {
    //! Operations defined by the Jobs API document, keyed by operation id.

    pub mod list_jobs {
        //! `GET /jobs`

        pub const METHOD: &str = "GET";
        pub const PATH: &str = super::super::paths::JOBS;
        pub type Response = Vec<super::super::components::schemas::JobSummary>;
    }

    pub mod create_job {
        //! `POST /jobs`

        pub const METHOD: &str = "POST";
        pub const PATH: &str = super::super::paths::JOBS;
        pub type Request = super::super::components::schemas::JobCreate;
        pub type Response = super::super::components::schemas::Job;
    }

    pub mod get_job {
        //! `GET /jobs/{externalId}`

        pub const METHOD: &str = "GET";
        pub const PATH: &str = super::super::paths::JOB_BY_EXTERNAL_ID;
        pub type Response = super::super::components::schemas::Job;
    }

    pub mod update_job {
        //! `PUT /jobs/{externalId}`

        pub const METHOD: &str = "PUT";
        pub const PATH: &str = super::super::paths::JOB_BY_EXTERNAL_ID;
        pub type Request = super::super::components::schemas::JobUpdate;
        pub type Response = super::super::components::schemas::Job;
    }

    pub mod delete_job {
        //! `DELETE /jobs/{externalId}`

        pub const METHOD: &str = "DELETE";
        pub const PATH: &str = super::super::paths::JOB_BY_EXTERNAL_ID;
        pub type Response = ();
    }
}

pub mod defs {
    //! The Jobs API document defines no top-level definitions.
}
