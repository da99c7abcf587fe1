//! Governance dates and the geographic scopes they apply to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::code::{AliasCode, Code};
use crate::object::{api_object, require};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicScope {
    pub id: String,
    /// Scope kind: global, region or country.
    #[serde(rename = "type")]
    pub scope_type: Code,
    /// Region or country code; absent for a global scope.
    #[serde(default)]
    pub code: Option<AliasCode>,
    pub instance_type: String,
}

api_object!(GeographicScope);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceDate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub date_type: Code,
    /// Serialized as `YYYY-MM-DD`.
    pub date_value: NaiveDate,
    #[serde(default)]
    pub geographic_scopes: Vec<GeographicScope>,
    pub instance_type: String,
}

api_object!(GovernanceDate, |date| require(
    "GovernanceDate",
    "name",
    &date.name
));

impl GovernanceDate {
    /// True when no scope narrows the date to a region or country.
    pub fn is_global(&self) -> bool {
        self.geographic_scopes.iter().all(|scope| scope.code.is_none())
    }
}
