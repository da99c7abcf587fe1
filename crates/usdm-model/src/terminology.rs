//! Code systems and CDISC concept codes the builders refer to by value.

pub const CDISC_CODE_SYSTEM: &str = "http://www.cdisc.org";
pub const CDISC_CODE_SYSTEM_VERSION: &str = "2023-12-15";

pub const ISO_639_CODE_SYSTEM: &str = "ISO 639-1";
pub const ISO_639_CODE_SYSTEM_VERSION: &str = "2007";

pub const ISO_3166_CODE_SYSTEM: &str = "ISO 3166 1 alpha3";
pub const ISO_3166_CODE_SYSTEM_VERSION: &str = "2020-08";

/// Organization type "Clinical Study Sponsor".
pub const SPONSOR_ORGANIZATION: &str = "C70793";
/// Study type "Interventional Study".
pub const INTERVENTIONAL_STUDY: &str = "C98388";
/// Title type "Official Study Title".
pub const OFFICIAL_STUDY_TITLE: &str = "C207616";
/// Document type "Protocol".
pub const PROTOCOL_DOCUMENT: &str = "C70817";
/// Document status "Approved".
pub const APPROVED_STATUS: &str = "C25425";
/// Geographic scope "Global".
pub const GLOBAL_SCOPE: &str = "C68846";
/// Geographic scope "Region".
pub const REGION_SCOPE: &str = "C41129";
/// Amendment reason "Other".
pub const OTHER_REASON: &str = "C17649";
