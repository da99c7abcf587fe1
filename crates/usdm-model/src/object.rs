//! The common surface of every identified USDM record.
//!
//! USDM objects all carry an `id` and an `instanceType` discriminator. The
//! [`ApiObject`] trait exposes both so that a single creation routine can
//! stamp them onto any record type, and gives each type a hook for its
//! required-field checks.

use crate::error::{ModelError, Result};

pub trait ApiObject {
    /// Value written to `instanceType`, identical to the USDM class name.
    const INSTANCE_TYPE: &'static str;

    /// Whether a creation routine should generate an id when none is set.
    const AUTO_ID: bool = true;

    /// Current id, empty when not yet assigned.
    fn id(&self) -> &str;

    fn assign_id(&mut self, id: String);

    /// Reset a present but empty id to its unset form.
    fn clear_blank_id(&mut self) {}

    fn stamp_instance_type(&mut self);

    /// Required-field checks for this record.
    fn check(&self) -> Result<()> {
        Ok(())
    }
}

/// Fails with [`ModelError::MissingField`] when `value` is blank.
pub fn require(instance_type: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::MissingField {
            instance_type,
            field,
        });
    }
    Ok(())
}

pub fn require_finite(instance_type: &'static str, field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ModelError::NotFinite {
            instance_type,
            field,
            value,
        });
    }
    Ok(())
}

/// Implements [`ApiObject`] for a record with `id: String` and
/// `instance_type: String` fields, optionally with a check body.
macro_rules! api_object {
    ($ty:ident) => {
        api_object!($ty, |_this| Ok(()));
    };
    ($ty:ident, |$this:ident| $check:expr) => {
        impl $crate::object::ApiObject for $ty {
            const INSTANCE_TYPE: &'static str = stringify!($ty);

            fn id(&self) -> &str {
                &self.id
            }

            fn assign_id(&mut self, id: String) {
                self.id = id;
            }

            fn stamp_instance_type(&mut self) {
                self.instance_type = Self::INSTANCE_TYPE.to_string();
            }

            fn check(&self) -> $crate::error::Result<()> {
                let $this = self;
                $check
            }
        }
    };
}

pub(crate) use api_object;
