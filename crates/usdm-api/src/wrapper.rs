//! The smallest complete USDM document.

use tracing::info;
use usdm_model::terminology::{
    APPROVED_STATUS, OFFICIAL_STUDY_TITLE, PROTOCOL_DOCUMENT, SPONSOR_ORGANIZATION,
};
use usdm_model::{
    Organization, Study, StudyDefinitionDocument, StudyDefinitionDocumentVersion,
    StudyIdentifier, StudyTitle, StudyVersion, Wrapper,
};
use uuid::Uuid;

use crate::error::Result;
use crate::factory::Factory;
use crate::options::BuildOptions;

const TO_BE_PROVIDED: &str = "To be provided";

/// Build a minimal study with default options.
///
/// See [`minimum_with_options`].
pub fn minimum(title: &str, identifier: &str, version: &str) -> Result<Wrapper> {
    minimum_with_options(title, identifier, version, BuildOptions::default())
}

/// Build a minimal study in a fresh id space.
///
/// The result holds one official title, a protocol document with a single
/// approved version, a sponsor organization with one identifier, and a
/// study version pointing at the protocol version. The study id is a random
/// UUID.
///
/// # Errors
///
/// Fails if a required value such as `title` or `identifier` is blank.
pub fn minimum_with_options(
    title: &str,
    identifier: &str,
    version: &str,
    options: BuildOptions,
) -> Result<Wrapper> {
    let mut factory = Factory::new(options);

    let title_type = factory.cdisc_code(OFFICIAL_STUDY_TITLE, "Official Study Title")?;
    let organization_type = factory.cdisc_code(SPONSOR_ORGANIZATION, "Clinical Study Sponsor")?;
    let doc_status = factory.cdisc_code(APPROVED_STATUS, "Approved")?;
    let doc_type = factory.cdisc_code(PROTOCOL_DOCUMENT, "Protocol")?;
    let language = factory.english()?;

    let study_title = factory.item(StudyTitle {
        text: title.to_string(),
        title_type,
        ..Default::default()
    })?;

    let document_version = factory.item(StudyDefinitionDocumentVersion {
        version: version.to_string(),
        status: doc_status,
        ..Default::default()
    })?;
    let document_version_id = document_version.id.clone();
    let document = factory.item(StudyDefinitionDocument {
        name: "PROTOCOL".to_string(),
        label: Some("Study Protocol".to_string()),
        description: Some("The study protocol document".to_string()),
        language,
        document_type: doc_type,
        template_name: "Sponsor".to_string(),
        versions: vec![document_version],
        ..Default::default()
    })?;

    let organization = factory.item(Organization {
        name: "Sponsor".to_string(),
        organization_type,
        identifier: TO_BE_PROVIDED.to_string(),
        identifier_scheme: TO_BE_PROVIDED.to_string(),
        legal_address: None,
        ..Default::default()
    })?;
    let study_identifier = factory.item(StudyIdentifier {
        text: identifier.to_string(),
        scope_id: organization.id.clone(),
        ..Default::default()
    })?;

    let study_version = factory.item(StudyVersion {
        version_identifier: "1".to_string(),
        rationale: TO_BE_PROVIDED.to_string(),
        titles: vec![study_title],
        document_version_id: Some(document_version_id),
        study_identifiers: vec![study_identifier],
        organizations: vec![organization],
        ..Default::default()
    })?;
    let study = factory.item(Study {
        id: Some(Uuid::new_v4().to_string()),
        name: "Study".to_string(),
        label: Some(String::new()),
        description: Some(String::new()),
        versions: vec![study_version],
        documented_by: vec![document],
        ..Default::default()
    })?;

    info!(
        identifier,
        objects = factory.api().ids().len(),
        strategy = ?factory.api().ids().strategy(),
        "built minimum study"
    );
    Ok(factory.wrap(study))
}
