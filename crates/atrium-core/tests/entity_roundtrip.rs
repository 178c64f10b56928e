//! Serde roundtrip and JsonSchema validation tests for the entity and view types.

use chrono::{NaiveDate, Utc};
use schemars::schema_for;
use atrium_core::entities::*;
use atrium_core::enums::*;
use atrium_core::filter::ResearchFilter;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_project() -> ResearchProject {
    ResearchProject {
        id: 1,
        title: "Telehealth Adoption Study".into(),
        summary: Some("Adoption of virtual visits in rural clinics".into()),
        category: Some("Clinical NLP".into()),
        client_id: Some(3),
        start_date: Some(date(2025, 1, 15)),
        end_date: None,
        status: Some(ProjectStatus::Active),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

roundtrip_and_validate!(
    company_roundtrip,
    Company,
    Company {
        id: 3,
        name: "Acme Health".into(),
        industry: Some("Hospital network".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(project_roundtrip, ResearchProject, sample_project());

roundtrip_and_validate!(
    unaffiliated_project_roundtrip,
    ResearchProject,
    ResearchProject {
        id: 2,
        title: "Internal benchmark".into(),
        summary: None,
        category: None,
        client_id: None,
        start_date: None,
        end_date: None,
        status: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    tag_roundtrip,
    Tag,
    Tag {
        id: 9,
        name: "telehealth".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    project_tag_roundtrip,
    ProjectTag,
    ProjectTag {
        project_id: 1,
        tag_id: 9,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    metrics_roundtrip,
    ResearchMetrics,
    ResearchMetrics {
        id: 4,
        project_id: 1,
        impact: Some("Reduced no-show rate".into()),
        satisfaction_score: Some(87.5),
        implementation_status: Some("pilot".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    document_roundtrip,
    ResearchDocument,
    ResearchDocument {
        id: 5,
        project_id: 1,
        title: "Final report".into(),
        drive_id: Some("1AbC".into()),
        drive_url: Some("https://drive.example.com/1AbC".into()),
        doc_type: Some(DocType::Report),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    detail_roundtrip,
    ProjectDetail,
    ProjectDetail {
        project: sample_project(),
        client: None,
        tags: vec![Tag {
            id: 9,
            name: "telehealth".into(),
            created_at: Utc::now(),
        }],
        metrics: None,
        documents: vec![],
    }
);

roundtrip_and_validate!(
    view_roundtrip,
    ResearchDataView,
    ResearchDataView {
        id: 1,
        title: "Telehealth Adoption Study".into(),
        summary: None,
        category: Some("Clinical NLP".into()),
        client: Some("Acme Health".into()),
        client_industry: Some("Hospital network".into()),
        start_date: Some(date(2025, 1, 15)),
        end_date: Some(date(2025, 9, 30)),
        status: Some(ProjectStatus::Completed),
        created_at: Utc::now(),
        tags: vec!["nlp".into(), "telehealth".into()],
        metrics: Some(MetricsView {
            impact: Some("High".into()),
            satisfaction_score: Some(92.0),
            implementation_status: None,
        }),
        documents: vec![DocumentView {
            id: 5,
            title: "Final report".into(),
            drive_id: None,
            drive_url: None,
            doc_type: Some(DocType::Presentation),
        }],
    }
);

roundtrip_and_validate!(
    filter_roundtrip,
    ResearchFilter,
    ResearchFilter::all()
        .with_category("Imaging")
        .with_end_date(date(2025, 12, 31))
);

#[test]
fn view_serializes_camel_case_keys() {
    let view = ResearchDataView {
        id: 1,
        title: "T".into(),
        summary: None,
        category: None,
        client: None,
        client_industry: Some("Payer".into()),
        start_date: Some(date(2025, 3, 1)),
        end_date: None,
        status: Some(ProjectStatus::OnHold),
        created_at: Utc::now(),
        tags: vec![],
        metrics: Some(MetricsView::default()),
        documents: vec![DocumentView {
            id: 2,
            title: "Deck".into(),
            drive_id: Some("x".into()),
            drive_url: None,
            doc_type: None,
        }],
    };
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["clientIndustry"], "Payer");
    assert_eq!(json["startDate"], "2025-03-01");
    assert_eq!(json["status"], "on_hold");
    assert!(json.get("createdAt").is_some());
    assert_eq!(json["tags"], serde_json::json!([]));
    assert!(json["metrics"].get("satisfactionScore").is_some());
    assert_eq!(json["documents"][0]["driveId"], "x");
}

#[test]
fn view_missing_tags_deserializes_as_empty() {
    let json = serde_json::json!({
        "id": 1,
        "title": "No tags",
        "summary": null,
        "category": null,
        "client": null,
        "clientIndustry": null,
        "startDate": null,
        "endDate": null,
        "status": null,
        "createdAt": "2025-01-01T00:00:00Z",
        "metrics": null
    });
    let view: ResearchDataView = serde_json::from_value(json).unwrap();
    assert!(view.tags.is_empty());
    assert!(view.documents.is_empty());
}
