//! The study, its versions, and the wrapper that carries a study as a
//! USDM document.

use serde::{Deserialize, Serialize};

use crate::amendment::StudyAmendment;
use crate::code::{AliasCode, Code};
use crate::design::StudyDesign;
use crate::document::{StudyDefinitionDocument, StudyDefinitionDocumentVersion};
use crate::error::Result;
use crate::governance::GovernanceDate;
use crate::object::{ApiObject, api_object, require};
use crate::organization::{Organization, StudyIdentifier};
use crate::terminology::SPONSOR_ORGANIZATION;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTitle {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub title_type: Code,
    pub instance_type: String,
}

api_object!(StudyTitle, |title| require("StudyTitle", "text", &title.text));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyVersion {
    pub id: String,
    pub version_identifier: String,
    pub rationale: String,
    #[serde(default)]
    pub titles: Vec<StudyTitle>,
    #[serde(default)]
    pub study_designs: Vec<StudyDesign>,
    /// Id of the [`StudyDefinitionDocumentVersion`] that documents this version.
    #[serde(default)]
    pub document_version_id: Option<String>,
    #[serde(default)]
    pub study_identifiers: Vec<StudyIdentifier>,
    #[serde(default)]
    pub study_phase: Option<AliasCode>,
    #[serde(default)]
    pub date_values: Vec<GovernanceDate>,
    #[serde(default)]
    pub amendments: Vec<StudyAmendment>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    pub instance_type: String,
}

api_object!(StudyVersion, |version| {
    require(
        "StudyVersion",
        "versionIdentifier",
        &version.version_identifier,
    )?;
    require("StudyVersion", "rationale", &version.rationale)
});

impl StudyVersion {
    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|org| org.id == id)
    }

    /// The organization that issued `identifier`.
    pub fn identifier_scope(&self, identifier: &StudyIdentifier) -> Option<&Organization> {
        self.organization(&identifier.scope_id)
    }

    /// First identifier issued by a clinical study sponsor.
    pub fn sponsor_identifier(&self) -> Option<&StudyIdentifier> {
        self.study_identifiers.iter().find(|identifier| {
            self.identifier_scope(identifier)
                .is_some_and(|org| org.organization_type.code == SPONSOR_ORGANIZATION)
        })
    }

    pub fn title_of_type(&self, code: &str) -> Option<&StudyTitle> {
        self.titles.iter().find(|title| title.title_type.code == code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    /// Never auto-assigned; callers supply one (often a UUID) or leave it empty.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub versions: Vec<StudyVersion>,
    #[serde(default)]
    pub documented_by: Vec<StudyDefinitionDocument>,
    pub instance_type: String,
}

impl ApiObject for Study {
    const INSTANCE_TYPE: &'static str = "Study";
    const AUTO_ID: bool = false;

    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn assign_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn clear_blank_id(&mut self) {
        if self.id.as_deref().is_some_and(str::is_empty) {
            self.id = None;
        }
    }

    fn stamp_instance_type(&mut self) {
        self.instance_type = Self::INSTANCE_TYPE.to_string();
    }

    fn check(&self) -> Result<()> {
        require("Study", "name", &self.name)
    }
}

impl Study {
    /// Find a document version by id across every document.
    pub fn document_version(&self, id: &str) -> Option<&StudyDefinitionDocumentVersion> {
        self.documented_by
            .iter()
            .find_map(|document| document.version(id))
    }

    /// The document and document version referenced by a study version.
    pub fn version_document(
        &self,
        version: &StudyVersion,
    ) -> Option<(&StudyDefinitionDocument, &StudyDefinitionDocumentVersion)> {
        let id = version.document_version_id.as_deref()?;
        self.documented_by
            .iter()
            .find_map(|document| document.version(id).map(|found| (document, found)))
    }
}

/// Top-level USDM document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wrapper {
    pub study: Study,
    pub usdm_version: String,
    #[serde(default)]
    pub system_name: Option<String>,
    #[serde(default)]
    pub system_version: Option<String>,
}
