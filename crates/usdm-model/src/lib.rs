#![deny(unsafe_code)]

pub mod amendment;
pub mod code;
pub mod design;
pub mod document;
pub mod error;
pub mod governance;
pub mod object;
pub mod organization;
pub mod study;
pub mod terminology;

pub use amendment::{Quantity, StudyAmendment, StudyAmendmentReason, SubjectEnrollment};
pub use code::{AliasCode, Code};
pub use design::{StudyArm, StudyCell, StudyDesign, StudyDesignPopulation, StudyEpoch};
pub use document::{StudyDefinitionDocument, StudyDefinitionDocumentVersion};
pub use error::{ModelError, Result};
pub use governance::{GeographicScope, GovernanceDate};
pub use object::ApiObject;
pub use organization::{Address, Organization, StudyIdentifier};
pub use study::{Study, StudyTitle, StudyVersion, Wrapper};
