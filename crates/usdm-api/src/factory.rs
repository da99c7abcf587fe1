//! Factory for commonly reused USDM sub-objects.
//!
//! The factory owns an [`ApiInstance`] so that everything it stamps out
//! shares one id space. Codes are built against the code systems named in
//! [`BuildOptions`].

use chrono::NaiveDate;
use usdm_model::terminology::{
    GLOBAL_SCOPE, ISO_639_CODE_SYSTEM, ISO_639_CODE_SYSTEM_VERSION, ISO_3166_CODE_SYSTEM,
    ISO_3166_CODE_SYSTEM_VERSION,
};
use usdm_model::{
    Address, AliasCode, ApiObject, Code, GeographicScope, GovernanceDate, Study, Wrapper,
};

use crate::error::{ApiError, Result};
use crate::instance::ApiInstance;
use crate::options::BuildOptions;

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ApiError::InvalidDate`] for anything else.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| ApiError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

#[derive(Debug, Default)]
pub struct Factory {
    api: ApiInstance,
    options: BuildOptions,
}

impl Factory {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            api: ApiInstance::new(options.id_strategy),
            options,
        }
    }

    pub fn api(&self) -> &ApiInstance {
        &self.api
    }

    /// Forget every id issued so far.
    pub fn clear(&mut self) {
        self.api.clear();
    }

    /// Create any USDM record in this factory's id space.
    pub fn item<T: ApiObject>(&mut self, value: T) -> Result<T> {
        self.api.create(value)
    }

    fn code_in(
        &mut self,
        system: String,
        version: String,
        code: &str,
        decode: &str,
    ) -> Result<Code> {
        self.item(Code {
            code: code.to_string(),
            code_system: system,
            code_system_version: version,
            decode: decode.to_string(),
            ..Default::default()
        })
    }

    /// A code from the sponsor's own dictionary.
    pub fn code(&mut self, code: &str, decode: &str) -> Result<Code> {
        let system = self.options.sponsor_code_system.clone();
        let version = self.options.sponsor_code_system_version.clone();
        self.code_in(system, version, code, decode)
    }

    /// A CDISC controlled terminology code.
    pub fn cdisc_code(&mut self, code: &str, decode: &str) -> Result<Code> {
        let system = self.options.cdisc_code_system.clone();
        let version = self.options.cdisc_code_system_version.clone();
        self.code_in(system, version, code, decode)
    }

    /// Placeholder CDISC code for slots whose value does not matter.
    pub fn cdisc_dummy(&mut self) -> Result<Code> {
        self.cdisc_code("C12345", "decode")
    }

    /// ISO 639-1 English.
    pub fn english(&mut self) -> Result<Code> {
        self.code_in(
            ISO_639_CODE_SYSTEM.to_string(),
            ISO_639_CODE_SYSTEM_VERSION.to_string(),
            "en",
            "English",
        )
    }

    /// An ISO 3166 country or M49-style region code.
    pub fn geo_code(&mut self, code: &str, decode: &str) -> Result<Code> {
        self.code_in(
            ISO_3166_CODE_SYSTEM.to_string(),
            ISO_3166_CODE_SYSTEM_VERSION.to_string(),
            code,
            decode,
        )
    }

    pub fn alias_code(&mut self, standard: Code, aliases: Vec<Code>) -> Result<AliasCode> {
        self.item(AliasCode {
            standard_code: standard,
            standard_code_aliases: aliases,
            ..Default::default()
        })
    }

    /// Create an address, filling `text` from its parts when left blank.
    pub fn address(&mut self, mut address: Address) -> Result<Address> {
        if address.text.trim().is_empty() {
            address.text = address.compose_text();
        }
        self.item(address)
    }

    pub fn geographic_scope(
        &mut self,
        scope_type: Code,
        code: Option<AliasCode>,
    ) -> Result<GeographicScope> {
        self.item(GeographicScope {
            scope_type,
            code,
            ..Default::default()
        })
    }

    /// A scope covering every region.
    pub fn global_scope(&mut self) -> Result<GeographicScope> {
        let scope_type = self.cdisc_code(GLOBAL_SCOPE, "Global")?;
        self.geographic_scope(scope_type, None)
    }

    pub fn governance_date(
        &mut self,
        name: &str,
        date_type: Code,
        date_value: &str,
        geographic_scopes: Vec<GeographicScope>,
    ) -> Result<GovernanceDate> {
        let date_value = parse_date(date_value)?;
        self.item(GovernanceDate {
            name: name.to_string(),
            date_type,
            date_value,
            geographic_scopes,
            ..Default::default()
        })
    }

    /// Wrap a study with the version and system details from the options.
    pub fn wrap(&self, study: Study) -> Wrapper {
        Wrapper {
            study,
            usdm_version: self.options.usdm_version.clone(),
            system_name: Some(self.options.system_name.clone()),
            system_version: Some(self.options.system_version.clone()),
        }
    }
}
