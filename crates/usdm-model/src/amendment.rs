use serde::{Deserialize, Serialize};

use crate::code::{AliasCode, Code};
use crate::governance::GovernanceDate;
use crate::object::{api_object, require, require_finite};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub id: String,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<AliasCode>,
    pub instance_type: String,
}

api_object!(Quantity, |quantity| require_finite(
    "Quantity",
    "value",
    quantity.value
));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEnrollment {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub enrollment_type: Code,
    #[serde(default)]
    pub code: Option<AliasCode>,
    pub quantity: Quantity,
    pub instance_type: String,
}

api_object!(SubjectEnrollment);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyAmendmentReason {
    pub id: String,
    pub code: Code,
    /// Free-text reason, used with the CDISC "Other" code.
    #[serde(default)]
    pub other_reason: Option<String>,
    pub instance_type: String,
}

api_object!(StudyAmendmentReason);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyAmendment {
    pub id: String,
    pub number: String,
    pub summary: String,
    pub substantial_impact: bool,
    pub primary_reason: StudyAmendmentReason,
    #[serde(default)]
    pub secondary_reasons: Vec<StudyAmendmentReason>,
    #[serde(default)]
    pub enrollments: Vec<SubjectEnrollment>,
    #[serde(default)]
    pub date_values: Vec<GovernanceDate>,
    /// Id of the amendment this one supersedes.
    #[serde(default)]
    pub previous_id: Option<String>,
    pub instance_type: String,
}

api_object!(StudyAmendment, |amendment| {
    require("StudyAmendment", "number", &amendment.number)?;
    require("StudyAmendment", "summary", &amendment.summary)
});

impl StudyAmendment {
    /// Primary reason followed by the secondary reasons.
    pub fn reasons(&self) -> impl Iterator<Item = &StudyAmendmentReason> {
        std::iter::once(&self.primary_reason).chain(self.secondary_reasons.iter())
    }

    /// Sum of all enrollment quantities.
    pub fn total_enrollment(&self) -> f64 {
        self.enrollments
            .iter()
            .map(|enrollment| enrollment.quantity.value)
            .sum()
    }
}
