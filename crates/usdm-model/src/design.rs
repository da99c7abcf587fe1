//! Study design: arms, epochs, the cells that join them, and the population.
//!
//! Cells refer to arms and epochs by id. The lookups on [`StudyDesign`]
//! resolve those references within the design and return `None` for a
//! dangling id.

use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::object::{api_object, require};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyArm {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub arm_type: Code,
    pub data_origin_description: String,
    pub data_origin_type: Code,
    #[serde(default)]
    pub population_ids: Vec<String>,
    pub instance_type: String,
}

api_object!(StudyArm, |arm| require("StudyArm", "name", &arm.name));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyEpoch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub epoch_type: Code,
    #[serde(default)]
    pub previous_id: Option<String>,
    #[serde(default)]
    pub next_id: Option<String>,
    pub instance_type: String,
}

api_object!(StudyEpoch, |epoch| require("StudyEpoch", "name", &epoch.name));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyCell {
    pub id: String,
    pub arm_id: String,
    pub epoch_id: String,
    #[serde(default)]
    pub element_ids: Vec<String>,
    pub instance_type: String,
}

api_object!(StudyCell, |cell| {
    require("StudyCell", "armId", &cell.arm_id)?;
    require("StudyCell", "epochId", &cell.epoch_id)
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDesignPopulation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub includes_healthy_subjects: bool,
    #[serde(default)]
    pub criterion_ids: Vec<String>,
    pub instance_type: String,
}

api_object!(StudyDesignPopulation, |population| require(
    "StudyDesignPopulation",
    "name",
    &population.name
));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDesign {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub rationale: String,
    pub intervention_model: Code,
    #[serde(default)]
    pub arms: Vec<StudyArm>,
    #[serde(default)]
    pub study_cells: Vec<StudyCell>,
    #[serde(default)]
    pub epochs: Vec<StudyEpoch>,
    #[serde(default)]
    pub population: Option<StudyDesignPopulation>,
    pub instance_type: String,
}

api_object!(StudyDesign, |design| {
    require("StudyDesign", "name", &design.name)?;
    require("StudyDesign", "rationale", &design.rationale)
});

impl StudyDesign {
    pub fn arm(&self, id: &str) -> Option<&StudyArm> {
        self.arms.iter().find(|arm| arm.id == id)
    }

    pub fn epoch(&self, id: &str) -> Option<&StudyEpoch> {
        self.epochs.iter().find(|epoch| epoch.id == id)
    }

    /// The cell at the intersection of an arm and an epoch.
    pub fn cell_for(&self, arm_id: &str, epoch_id: &str) -> Option<&StudyCell> {
        self.study_cells
            .iter()
            .find(|cell| cell.arm_id == arm_id && cell.epoch_id == epoch_id)
    }
}
