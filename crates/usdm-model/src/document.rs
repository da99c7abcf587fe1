//! Study definition documents (the protocol and its versions).

use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::governance::GovernanceDate;
use crate::object::{api_object, require};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDefinitionDocumentVersion {
    pub id: String,
    pub version: String,
    pub status: Code,
    #[serde(default)]
    pub date_values: Vec<GovernanceDate>,
    pub instance_type: String,
}

api_object!(StudyDefinitionDocumentVersion, |version| require(
    "StudyDefinitionDocumentVersion",
    "version",
    &version.version
));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDefinitionDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub language: Code,
    #[serde(rename = "type")]
    pub document_type: Code,
    pub template_name: String,
    #[serde(default)]
    pub versions: Vec<StudyDefinitionDocumentVersion>,
    pub instance_type: String,
}

api_object!(StudyDefinitionDocument, |document| {
    require("StudyDefinitionDocument", "name", &document.name)?;
    require(
        "StudyDefinitionDocument",
        "templateName",
        &document.template_name,
    )
});

impl StudyDefinitionDocument {
    pub fn version(&self, id: &str) -> Option<&StudyDefinitionDocumentVersion> {
        self.versions.iter().find(|version| version.id == id)
    }
}
