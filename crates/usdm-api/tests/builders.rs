//! Integration tests for the study builders.

use std::collections::BTreeSet;

use serde_json::Value;
use usdm_api::{
    ApiError, ApiInstance, BuildOptions, Factory, IdStrategy, minimum, minimum_with_options,
    sample_study, sample_wrapper,
};
use usdm_model::terminology::OFFICIAL_STUDY_TITLE;
use usdm_model::{Code, Study, StudyTitle, Wrapper};
use uuid::Uuid;

fn collect_ids(value: &Value, ids: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(id)) = map.get("id") {
                ids.insert(id.clone());
            }
            for child in map.values() {
                collect_ids(child, ids);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_ids(item, ids);
            }
        }
        _ => {}
    }
}

#[test]
fn minimum_study_is_linked() {
    let wrapper = minimum("A Phase II Trial", "ACME-001", "2").unwrap();

    assert_eq!(wrapper.usdm_version, "3.0.0");
    assert_eq!(wrapper.system_name.as_deref(), Some("usdm-api"));

    let study = &wrapper.study;
    let study_id = study.id.as_deref().expect("study id");
    assert!(Uuid::parse_str(study_id).is_ok());
    assert_eq!(study.instance_type, "Study");

    let version = &study.versions[0];
    let title = version
        .title_of_type(OFFICIAL_STUDY_TITLE)
        .expect("official title");
    assert_eq!(title.text, "A Phase II Trial");

    let sponsor = version.sponsor_identifier().expect("sponsor identifier");
    assert_eq!(sponsor.text, "ACME-001");
    assert_eq!(
        version.identifier_scope(sponsor).map(|org| org.name.as_str()),
        Some("Sponsor")
    );

    let (document, document_version) = study.version_document(version).expect("protocol");
    assert_eq!(document.name, "PROTOCOL");
    assert_eq!(document_version.version, "2");
    assert_eq!(document_version.status.decode, "Approved");
}

#[test]
fn minimum_study_ids_are_distinct() {
    let wrapper = minimum("Title", "ID-1", "1").unwrap();
    let json = serde_json::to_value(&wrapper).unwrap();
    let mut ids = BTreeSet::new();
    collect_ids(&json, &mut ids);
    // five codes, title, document version, document, organization,
    // identifier, study version, study
    assert_eq!(ids.len(), 12);
    assert!(ids.contains("StudyTitle_1"));
    assert!(ids.contains("Code_5"));
}

#[test]
fn minimum_rejects_blank_title() {
    let err = minimum("  ", "ID-1", "1").unwrap_err();
    assert!(matches!(
        err,
        ApiError::Invalid {
            instance_type: "StudyTitle",
            ..
        }
    ));
}

#[test]
fn minimum_rejects_blank_identifier() {
    let err = minimum("Title", "", "1").unwrap_err();
    assert!(matches!(
        err,
        ApiError::Invalid {
            instance_type: "StudyIdentifier",
            ..
        }
    ));
}

#[test]
fn uuid_strategy_applies_to_every_object() {
    let options = BuildOptions::default().with_id_strategy(IdStrategy::Uuid);
    let wrapper = minimum_with_options("Title", "ID-1", "1", options).unwrap();
    let json = serde_json::to_value(&wrapper).unwrap();
    let mut ids = BTreeSet::new();
    collect_ids(&json, &mut ids);
    assert_eq!(ids.len(), 12);
    assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
}

#[test]
fn sample_study_registers_every_object_once() {
    let mut factory = Factory::default();
    let study = sample_study(&mut factory).unwrap();

    let json = serde_json::to_value(&study).unwrap();
    let mut ids = BTreeSet::new();
    collect_ids(&json, &mut ids);
    assert_eq!(ids.len(), factory.api().ids().len());
    assert!(study.id.is_none());
}

#[test]
fn sample_study_references_resolve() {
    let wrapper = sample_wrapper(BuildOptions::default()).unwrap();
    let study = &wrapper.study;
    let version = &study.versions[0];

    assert_eq!(version.titles.len(), 3);
    assert_eq!(version.organizations.len(), 3);
    assert_eq!(
        version.sponsor_identifier().map(|id| id.text.as_str()),
        Some("SPONSOR-1234")
    );
    for identifier in &version.study_identifiers {
        assert!(version.identifier_scope(identifier).is_some());
    }

    let design = &version.study_designs[0];
    let cell = &design.study_cells[0];
    assert_eq!(design.arm(&cell.arm_id).map(|arm| arm.name.as_str()), Some("Arm1"));
    assert_eq!(
        design.epoch(&cell.epoch_id).map(|epoch| epoch.name.as_str()),
        Some("EP1")
    );

    let amendment = &version.amendments[0];
    assert_eq!(amendment.reasons().count(), 2);
    assert_eq!(amendment.total_enrollment(), 10.0);

    let (_, document_version) = study.version_document(version).expect("document version");
    let scope = &document_version.date_values[0].geographic_scopes[0];
    assert_eq!(
        scope.code.as_ref().map(|code| code.standard_code.decode.as_str()),
        Some("Europe")
    );
    assert!(version.date_values[0].is_global());
}

#[test]
fn sample_wrapper_survives_json() {
    let wrapper = sample_wrapper(BuildOptions::default()).unwrap();
    let json = serde_json::to_string_pretty(&wrapper).unwrap();
    let round: Wrapper = serde_json::from_str(&json).unwrap();
    assert_eq!(round, wrapper);
}

#[test]
fn explicit_ids_are_kept_and_reserved() {
    let mut api = ApiInstance::default();
    let code = api
        .create(Code {
            id: "Code_1".to_string(),
            code: "C1".to_string(),
            code_system: "SPONSOR".to_string(),
            decode: "One".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(code.id, "Code_1");

    let next = api
        .create(Code {
            code: "C2".to_string(),
            code_system: "SPONSOR".to_string(),
            decode: "Two".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(next.id, "Code_2");

    let err = api
        .create(StudyTitle {
            id: "Code_2".to_string(),
            text: "Title".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateId { ref id, .. } if id == "Code_2"));
}

#[test]
fn study_keeps_missing_id() {
    let mut api = ApiInstance::default();
    let study = api
        .create(Study {
            name: "Study".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert!(study.id.is_none());
    assert!(api.ids().is_empty());
}

#[test]
fn empty_study_id_is_written_as_null() {
    let mut api = ApiInstance::default();
    let study = api
        .create(Study {
            id: Some(String::new()),
            name: "Study".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert!(study.id.is_none());
    let json = serde_json::to_value(&study).unwrap();
    assert_eq!(json["id"], Value::Null);
}

#[test]
fn clearing_restarts_ids() {
    let mut factory = Factory::default();
    factory.cdisc_dummy().unwrap();
    factory.clear();
    let code = factory.cdisc_dummy().unwrap();
    assert_eq!(code.id, "Code_1");
}

#[test]
fn cdisc_code_snapshot() {
    let mut factory = Factory::default();
    let code = factory.cdisc_code("C70793", "Clinical Study Sponsor").unwrap();
    insta::assert_json_snapshot!(code, @r#"
    {
      "id": "Code_1",
      "code": "C70793",
      "codeSystem": "http://www.cdisc.org",
      "codeSystemVersion": "2023-12-15",
      "decode": "Clinical Study Sponsor",
      "instanceType": "Code"
    }
    "#);
}
