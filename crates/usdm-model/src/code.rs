//! Coded terms.
//!
//! A [`Code`] is a single concept from a code system (CDISC CT, ISO 639,
//! ISO 3166, or a sponsor dictionary). An [`AliasCode`] pairs a standard code
//! with any number of equivalent codes from other systems.

use serde::{Deserialize, Serialize};

use crate::object::{api_object, require};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    pub id: String,
    /// Concept code, e.g. `C70793`.
    pub code: String,
    pub code_system: String,
    pub code_system_version: String,
    /// Human-readable term for the code.
    pub decode: String,
    pub instance_type: String,
}

api_object!(Code, |code| {
    require("Code", "code", &code.code)?;
    require("Code", "codeSystem", &code.code_system)?;
    require("Code", "decode", &code.decode)
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasCode {
    pub id: String,
    pub standard_code: Code,
    #[serde(default)]
    pub standard_code_aliases: Vec<Code>,
    pub instance_type: String,
}

api_object!(AliasCode);

impl AliasCode {
    /// Standard code followed by every alias.
    pub fn all_codes(&self) -> impl Iterator<Item = &Code> {
        std::iter::once(&self.standard_code).chain(self.standard_code_aliases.iter())
    }

    /// True when the standard code or any alias carries `code`.
    pub fn matches(&self, code: &str) -> bool {
        self.all_codes().any(|candidate| candidate.code == code)
    }
}
