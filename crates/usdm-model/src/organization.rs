use serde::{Deserialize, Serialize};

use crate::code::Code;
use crate::object::{api_object, require};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    /// Single-line rendering of the address parts.
    pub text: String,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<Code>,
    pub instance_type: String,
}

api_object!(Address);

impl Address {
    /// Join the populated parts (lines, city, district, state, postal code,
    /// country decode) with `", "`.
    pub fn compose_text(&self) -> String {
        let optional = [
            self.city.as_deref(),
            self.district.as_deref(),
            self.state.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_ref().map(|country| country.decode.as_str()),
        ];
        self.lines
            .iter()
            .map(String::as_str)
            .chain(optional.into_iter().flatten())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: Code,
    /// Registry identifier of the organization itself, e.g. a DUNS number.
    pub identifier: String,
    pub identifier_scheme: String,
    #[serde(default)]
    pub legal_address: Option<Address>,
    pub instance_type: String,
}

api_object!(Organization, |org| {
    require("Organization", "name", &org.name)?;
    require("Organization", "identifier", &org.identifier)?;
    require("Organization", "identifierScheme", &org.identifier_scheme)
});

/// A study identifier issued by an organization. `scope_id` names the
/// issuing [`Organization`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyIdentifier {
    pub id: String,
    pub text: String,
    pub scope_id: String,
    pub instance_type: String,
}

api_object!(StudyIdentifier, |identifier| {
    require("StudyIdentifier", "text", &identifier.text)?;
    require("StudyIdentifier", "scopeId", &identifier.scope_id)
});
