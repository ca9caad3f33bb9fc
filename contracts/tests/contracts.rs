//! Wire-format tests for the contract types.
//!
//! The bindings are machine-generated, so these tests pin the wire behavior
//! consumers depend on: camelCase field names, omitted optionals, the
//! untagged location union, and the flattened re-export surface.

use chrono::{DateTime, Utc};
use serde_json::json;

use jobs_contracts::{
    ApiError, Approach, Assignments, Contacts, DCStatus, FixedLocations, Grade, Job, JobCreate,
    JobResultItem, JobSearchRequest, JobSearchResponse, JobSummary, Location, OverseasLocations,
    Profession, Salary, WorkingPattern,
};
use jobs_contracts::{jobs_operations, search, search_operations};

fn closing_date() -> DateTime<Utc> {
    "2026-09-30T23:59:59Z".parse().expect("valid RFC 3339 datetime")
}

fn sample_job() -> Job {
    Job {
        id: Some("8f2b".to_string()),
        external_id: "HO-2026-0117".to_string(),
        title: "Data Engineer".to_string(),
        description: "Build pipelines.".to_string(),
        organisation: "Home Office".to_string(),
        approach: Approach::External,
        location: vec![Location::Fixed(FixedLocations {
            location_display: "Manchester".to_string(),
            postcode: Some("M1 2AB".to_string()),
            town: Some("Manchester".to_string()),
            region: None,
            latitude: None,
            longitude: None,
        })],
        grade: Grade::SeniorExecutiveOfficerEquivalent,
        assignment_type: Assignments::Permanent,
        working_pattern: Some(WorkingPattern::FullTime),
        work_location: None,
        personal_spec: "You have shipped data platforms.".to_string(),
        apply_detail: "Apply via the portal.".to_string(),
        closing_date: closing_date(),
        profession: Profession::DigitalAndData,
        recruitment_email: "recruitment@example.gov.uk".to_string(),
        salary: Some(Salary {
            minimum: Some(45000.0),
            maximum: Some(52000.0),
            currency: Some("GBP".to_string()),
            currency_symbol: Some("£".to_string()),
            salary_details: None,
        }),
        summary: None,
        benefits: None,
        attachments: None,
        contacts: Some(Contacts {
            contact_name: Some("J. Doe".to_string()),
            contact_email: Some("j.doe@example.gov.uk".to_string()),
            contact_phone: None,
        }),
        status: Some(DCStatus::Published),
    }
}

#[test]
fn job_serializes_with_camel_case_wire_names() {
    let json = serde_json::to_string(&sample_job()).unwrap();

    assert!(json.contains("\"externalId\":\"HO-2026-0117\""));
    assert!(json.contains("\"assignmentType\":\"permanent\""));
    assert!(json.contains("\"recruitmentEmail\""));
    assert!(json.contains("\"closingDate\":\"2026-09-30T23:59:59Z\""));
    assert!(!json.contains("external_id"));
}

#[test]
fn job_round_trips_through_json() {
    let job = sample_job();
    let json = serde_json::to_string(&job).unwrap();
    let back: Job = serde_json::from_str(&json).unwrap();

    assert_eq!(job, back);
}

#[test]
fn absent_optionals_are_omitted_from_the_wire() {
    let job = sample_job();
    let value = serde_json::to_value(&job).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("workLocation"));
    assert!(!object.contains_key("summary"));
    assert!(!object.contains_key("attachments"));
    assert!(object.contains_key("workingPattern"));
}

#[test]
fn job_summary_deserializes_from_wire_payload() {
    let summary: JobSummary = serde_json::from_value(json!({
        "externalId": "HO-2026-0117",
        "title": "Data Engineer",
        "organisation": "Home Office",
        "closingDate": "2026-09-30T23:59:59Z",
        "grade": "grade_7_equivalent",
        "status": "pending_approval"
    }))
    .unwrap();

    assert_eq!(summary.grade, Some(Grade::Grade7Equivalent));
    assert_eq!(summary.status, Some(DCStatus::PendingApproval));
    assert_eq!(summary.profession, None);
}

#[test]
fn enum_wire_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Approach::AcrossGovernment).unwrap(),
        "\"across_government\""
    );
    assert_eq!(
        serde_json::to_string(&Assignments::FixedTerm).unwrap(),
        "\"fixed_term\""
    );
    assert_eq!(
        serde_json::to_string(&Grade::SeniorCivilServiceEquivalent).unwrap(),
        "\"senior_civil_service_equivalent\""
    );
    assert_eq!(
        serde_json::to_string(&Profession::ScienceAndEngineering).unwrap(),
        "\"science_and_engineering\""
    );
}

#[test]
fn location_union_picks_overseas_when_country_fields_present() {
    let location: Location = serde_json::from_value(json!({
        "countryName": "France",
        "countryCode": "FR",
        "locationDisplay": "Paris"
    }))
    .unwrap();

    match location {
        Location::Overseas(OverseasLocations { country_code, .. }) => {
            assert_eq!(country_code, "FR");
        }
        Location::Fixed(_) => panic!("expected overseas variant"),
    }
}

#[test]
fn location_union_falls_back_to_fixed() {
    let location: Location = serde_json::from_value(json!({
        "locationDisplay": "Leeds",
        "postcode": "LS1 4AP"
    }))
    .unwrap();

    match location {
        Location::Fixed(FixedLocations { postcode, .. }) => {
            assert_eq!(postcode.as_deref(), Some("LS1 4AP"));
        }
        Location::Overseas(_) => panic!("expected fixed variant"),
    }
}

#[test]
fn job_create_has_no_status_field() {
    let create: JobCreate = serde_json::from_value(json!({
        "externalId": "HO-2026-0118",
        "title": "Policy Advisor",
        "description": "Advise on policy.",
        "organisation": "Cabinet Office",
        "approach": "internal",
        "location": [{"locationDisplay": "London"}],
        "grade": "grade_6_equivalent",
        "assignmentType": "loan",
        "personalSpec": "Policy background.",
        "applyDetail": "Internal moves board.",
        "closingDate": "2026-10-15T12:00:00Z",
        "profession": "policy",
        "recruitmentEmail": "moves@example.gov.uk"
    }))
    .unwrap();

    assert_eq!(create.approach, Approach::Internal);
    let value = serde_json::to_value(&create).unwrap();
    assert!(!value.as_object().unwrap().contains_key("status"));
}

#[test]
fn search_response_round_trips_with_results() {
    let response = JobSearchResponse {
        results: vec![JobResultItem {
            id: "8f2b".to_string(),
            external_id: "HO-2026-0117".to_string(),
            title: "Data Engineer".to_string(),
            organisation: "Home Office".to_string(),
            location: vec![search::Location::Overseas(search::OverseasLocation {
                country_name: "Ireland".to_string(),
                country_code: "IE".to_string(),
                location_display: "Dublin".to_string(),
            })],
            assignment_type: Some(search::Assignments::Permanent),
            salary: None,
            closing_date: closing_date(),
            profession: Some(search::Profession::DigitalAndData),
            approach: None,
        }],
        total: 1,
        page: 1,
        page_size: 20,
        total_pages: 1,
        query: Some("data".to_string()),
        applied_filters: None,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"pageSize\":20"));
    assert!(json.contains("\"totalPages\":1"));

    let back: JobSearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(response, back);
}

#[test]
fn search_request_serializes_only_set_filters() {
    let request = JobSearchRequest {
        query: Some("engineer".to_string()),
        page: None,
        page_size: None,
        profession: None,
        grade: None,
        assignment_type: None,
        approach: None,
        location: Some("Manchester".to_string()),
        radius_miles: Some(25.0),
        salary_minimum: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("radiusMiles"));
}

#[test]
fn search_error_is_exported_as_api_error() {
    let error: ApiError = serde_json::from_value(json!({
        "code": "invalid_request",
        "message": "page must be positive",
        "details": ["page: -1"]
    }))
    .unwrap();

    assert_eq!(error.code, "invalid_request");
    assert_eq!(error.details.as_deref(), Some(&["page: -1".to_string()][..]));

    // Same type as the bare name inside the search module.
    let via_search: search::Error = serde_json::from_str(
        &serde_json::to_string(&error).unwrap(),
    )
    .unwrap();
    assert_eq!(via_search, error);
}

#[test]
fn operation_modules_carry_method_and_path() {
    assert_eq!(jobs_operations::list_jobs::METHOD, "GET");
    assert_eq!(jobs_operations::create_job::METHOD, "POST");
    assert_eq!(jobs_operations::create_job::PATH, "/jobs");
    assert_eq!(jobs_operations::update_job::PATH, "/jobs/{externalId}");
    assert_eq!(jobs_operations::delete_job::METHOD, "DELETE");
    assert_eq!(search_operations::search_jobs::METHOD, "POST");
    assert_eq!(search_operations::search_jobs_get::METHOD, "GET");
    assert_eq!(search_operations::search_jobs::PATH, "/search");
}

#[test]
fn operation_aliases_name_the_schema_types() {
    let create: jobs_operations::create_job::Request = serde_json::from_value(json!({
        "externalId": "HO-2026-0119",
        "title": "Analyst",
        "description": "Analyse.",
        "organisation": "HMRC",
        "approach": "external",
        "location": [{"locationDisplay": "Remote", "postcode": null}],
        "grade": "executive_officer_equivalent",
        "assignmentType": "fixed_term",
        "personalSpec": "Analysis background.",
        "applyDetail": "Portal.",
        "closingDate": "2026-11-01T09:00:00Z",
        "profession": "operational",
        "recruitmentEmail": "jobs@example.gov.uk"
    }))
    .unwrap();

    // Request is an alias for JobCreate; both sides of the round trip agree.
    let as_create: JobCreate = create.clone();
    assert_eq!(as_create.title, "Analyst");
}
