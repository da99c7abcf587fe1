//! Build options shared by the factory and the study builders.

use usdm_model::terminology::{CDISC_CODE_SYSTEM, CDISC_CODE_SYSTEM_VERSION};

use crate::id_manager::IdStrategy;

/// USDM model version written to generated wrappers.
pub const USDM_VERSION: &str = "3.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Code system used for CDISC controlled terminology.
    pub cdisc_code_system: String,
    /// Controlled terminology release, e.g. "2023-12-15".
    pub cdisc_code_system_version: String,
    /// Code system for sponsor-defined codes.
    pub sponsor_code_system: String,
    pub sponsor_code_system_version: String,
    pub usdm_version: String,
    /// Written to `Wrapper.systemName`.
    pub system_name: String,
    /// Written to `Wrapper.systemVersion`.
    pub system_version: String,
    pub id_strategy: IdStrategy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            cdisc_code_system: CDISC_CODE_SYSTEM.to_string(),
            cdisc_code_system_version: CDISC_CODE_SYSTEM_VERSION.to_string(),
            sponsor_code_system: "SPONSOR".to_string(),
            sponsor_code_system_version: "1".to_string(),
            usdm_version: USDM_VERSION.to_string(),
            system_name: env!("CARGO_PKG_NAME").to_string(),
            system_version: env!("CARGO_PKG_VERSION").to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl BuildOptions {
    #[must_use]
    pub fn with_cdisc_code_system_version(mut self, version: impl Into<String>) -> Self {
        self.cdisc_code_system_version = version.into();
        self
    }

    #[must_use]
    pub fn with_sponsor_code_system(
        mut self,
        system: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.sponsor_code_system = system.into();
        self.sponsor_code_system_version = version.into();
        self
    }

    #[must_use]
    pub fn with_system(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.system_name = name.into();
        self.system_version = version.into();
        self
    }

    #[must_use]
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}
