//! A fully populated sample study.
//!
//! Exercises every record type the crate knows about: an amendment with
//! reasons and enrollment, global and regional governance dates, a protocol
//! document, a single-arm design, three organizations with their
//! identifiers, and a study phase.

use tracing::info;
use usdm_model::terminology::{GLOBAL_SCOPE, OTHER_REASON, REGION_SCOPE};
use usdm_model::{
    Address, GovernanceDate, Organization, Quantity, Study, StudyAmendment, StudyAmendmentReason,
    StudyArm, StudyCell, StudyDefinitionDocument, StudyDefinitionDocumentVersion, StudyDesign,
    StudyDesignPopulation, StudyEpoch, StudyIdentifier, StudyTitle, StudyVersion,
    SubjectEnrollment, Wrapper,
};

use crate::error::Result;
use crate::factory::{Factory, parse_date};
use crate::options::BuildOptions;

/// Build the sample study in `factory`'s id space.
pub fn sample_study(factory: &mut Factory) -> Result<Study> {
    let feedback_code = factory.cdisc_code("C99904x3", "IRB/IEC Feedback")?;
    let feedback_reason = factory.item(StudyAmendmentReason {
        code: feedback_code,
        ..Default::default()
    })?;
    let other_code = factory.cdisc_code(OTHER_REASON, "Other")?;
    let other_reason = factory.item(StudyAmendmentReason {
        code: other_code,
        other_reason: Some("Fix typographical errors".to_string()),
        ..Default::default()
    })?;
    let subjects = factory.item(Quantity {
        value: 10.0,
        ..Default::default()
    })?;
    let enrollment_type = factory.cdisc_code(GLOBAL_SCOPE, "Global")?;
    let enrollment = factory.item(SubjectEnrollment {
        enrollment_type,
        quantity: subjects,
        ..Default::default()
    })?;
    let amendment = factory.item(StudyAmendment {
        number: "1".to_string(),
        summary: "Updated inclusion criteria".to_string(),
        substantial_impact: true,
        primary_reason: feedback_reason,
        secondary_reasons: vec![other_reason],
        enrollments: vec![enrollment],
        ..Default::default()
    })?;

    let global_scope = factory.global_scope()?;
    let europe = factory.geo_code("150", "Europe")?;
    let europe_code = factory.alias_code(europe, vec![])?;
    let region_type = factory.cdisc_code(REGION_SCOPE, "Region")?;
    let europe_scope = factory.geographic_scope(region_type, Some(europe_code))?;

    let study_approval_type = factory.cdisc_code("C132352", "Sponsor Approval Date")?;
    let study_approval_date = factory.item(GovernanceDate {
        name: "D_APPROVE".to_string(),
        label: Some("Design Approval".to_string()),
        description: Some("Design approval date".to_string()),
        date_type: study_approval_type,
        date_value: parse_date("2006-06-01")?,
        geographic_scopes: vec![global_scope],
        ..Default::default()
    })?;
    let doc_approval_type = factory.cdisc_code("C99903x1", "Sponsor Approval Date")?;
    let doc_approval_date = factory.item(GovernanceDate {
        name: "D_APPROVE".to_string(),
        label: Some("Design Approval".to_string()),
        description: Some("Design approval date".to_string()),
        date_type: doc_approval_type,
        date_value: parse_date("2006-06-01")?,
        geographic_scopes: vec![europe_scope],
        ..Default::default()
    })?;

    let phase_code = factory.cdisc_code("C12345", "Phase Code")?;
    let study_phase = factory.alias_code(phase_code, vec![])?;

    let population = factory.item(StudyDesignPopulation {
        name: "POP1".to_string(),
        label: Some(String::new()),
        description: Some(String::new()),
        includes_healthy_subjects: true,
        ..Default::default()
    })?;
    let arm_type = factory.cdisc_dummy()?;
    let data_origin_type = factory.cdisc_dummy()?;
    let arm = factory.item(StudyArm {
        name: "Arm1".to_string(),
        arm_type,
        data_origin_description: "xxx".to_string(),
        data_origin_type,
        population_ids: vec![population.id.clone()],
        ..Default::default()
    })?;
    let epoch_type = factory.cdisc_code("C22222", "Epoch Code")?;
    let epoch = factory.item(StudyEpoch {
        name: "EP1".to_string(),
        label: Some("Epoch A".to_string()),
        description: Some(String::new()),
        epoch_type,
        ..Default::default()
    })?;
    let cell = factory.item(StudyCell {
        arm_id: arm.id.clone(),
        epoch_id: epoch.id.clone(),
        ..Default::default()
    })?;

    let official_type = factory.cdisc_code("C44444", "Official Study Title")?;
    let study_title = factory.item(StudyTitle {
        text: "Title".to_string(),
        title_type: official_type,
        ..Default::default()
    })?;
    let brief_type = factory.cdisc_code("C33333", "Brief Study Title")?;
    let study_short_title = factory.item(StudyTitle {
        text: "Short Title".to_string(),
        title_type: brief_type,
        ..Default::default()
    })?;
    let acronym_type = factory.cdisc_code("C33333", "Study Acronym")?;
    let study_acronym = factory.item(StudyTitle {
        text: "ACRONYM".to_string(),
        title_type: acronym_type,
        ..Default::default()
    })?;

    let doc_status = factory.cdisc_dummy()?;
    let document_version = factory.item(StudyDefinitionDocumentVersion {
        version: "1".to_string(),
        status: doc_status,
        date_values: vec![doc_approval_date],
        ..Default::default()
    })?;
    let document_version_id = document_version.id.clone();
    let language = factory.english()?;
    let document_type = factory.cdisc_code("C70817", "Protocol")?;
    let document = factory.item(StudyDefinitionDocument {
        name: "PD1".to_string(),
        label: Some("Protocol Document".to_string()),
        description: Some(String::new()),
        language,
        document_type,
        template_name: "Sponsor".to_string(),
        versions: vec![document_version],
        ..Default::default()
    })?;

    let intervention_model = factory.cdisc_dummy()?;
    let study_design = factory.item(StudyDesign {
        name: "Study Design".to_string(),
        label: Some(String::new()),
        description: Some(String::new()),
        rationale: "Study Design Rationale".to_string(),
        intervention_model,
        arms: vec![arm],
        study_cells: vec![cell],
        epochs: vec![epoch],
        population: Some(population),
        ..Default::default()
    })?;

    let country = factory.code("UKK", "UKK_decode")?;
    let address = factory.address(Address {
        lines: vec!["line 1".to_string()],
        city: Some("City".to_string()),
        district: Some("District".to_string()),
        state: Some("State".to_string()),
        postal_code: Some("12345".to_string()),
        country: Some(country),
        ..Default::default()
    })?;

    let mut organizations = Vec::new();
    let mut identifiers = Vec::new();
    for (type_code, type_decode, registry_id, study_id) in [
        ("C70793", "sponsor", "123456789", "SPONSOR-1234"),
        ("C188863", "reg 1", "REG 1", "REG 111111"),
        ("C93453", "reg 2", "REG 2", "REG 222222"),
    ] {
        let organization_type = factory.cdisc_code(type_code, type_decode)?;
        let organization = factory.item(Organization {
            name: "Sponsor".to_string(),
            organization_type,
            identifier: registry_id.to_string(),
            identifier_scheme: "DUNS".to_string(),
            legal_address: Some(address.clone()),
            ..Default::default()
        })?;
        identifiers.push(factory.item(StudyIdentifier {
            text: study_id.to_string(),
            scope_id: organization.id.clone(),
            ..Default::default()
        })?);
        organizations.push(organization);
    }

    let study_version = factory.item(StudyVersion {
        version_identifier: "1".to_string(),
        rationale: "Study version rationale".to_string(),
        titles: vec![study_title, study_short_title, study_acronym],
        study_designs: vec![study_design],
        document_version_id: Some(document_version_id),
        study_identifiers: identifiers,
        study_phase: Some(study_phase),
        date_values: vec![study_approval_date],
        amendments: vec![amendment],
        organizations,
        ..Default::default()
    })?;
    let study = factory.item(Study {
        id: None,
        name: "Study".to_string(),
        label: Some(String::new()),
        description: Some(String::new()),
        versions: vec![study_version],
        documented_by: vec![document],
        ..Default::default()
    })?;

    info!(
        objects = factory.api().ids().len(),
        strategy = ?factory.api().ids().strategy(),
        "built sample study"
    );
    Ok(study)
}

/// Build the sample study in a fresh id space and wrap it.
pub fn sample_wrapper(options: BuildOptions) -> Result<Wrapper> {
    let mut factory = Factory::new(options);
    let study = sample_study(&mut factory)?;
    Ok(factory.wrap(study))
}
