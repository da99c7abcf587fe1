//! Builders for USDM study definitions.
//!
//! Records are created through an [`ApiInstance`] (or the [`Factory`] that
//! wraps one), which checks required fields, stamps `instanceType`, and
//! assigns ids from a per-instance [`IdManager`].

#![deny(unsafe_code)]

pub mod error;
pub mod factory;
pub mod id_manager;
pub mod instance;
pub mod options;
pub mod sample;
pub mod wrapper;

pub use error::{ApiError, Result};
pub use factory::{Factory, parse_date};
pub use id_manager::{IdManager, IdStrategy};
pub use instance::ApiInstance;
pub use options::{BuildOptions, USDM_VERSION};
pub use sample::{sample_study, sample_wrapper};
pub use wrapper::{minimum, minimum_with_options};
