//! Object creation against an id registry.

use tracing::{debug, error};
use usdm_model::ApiObject;

use crate::error::{ApiError, Result};
use crate::id_manager::{IdManager, IdStrategy};

/// Creates USDM records, stamping `instanceType` and an id on each one.
#[derive(Debug, Default)]
pub struct ApiInstance {
    ids: IdManager,
}

impl ApiInstance {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            ids: IdManager::new(strategy),
        }
    }

    /// Check, stamp and register `value`.
    ///
    /// A blank id is replaced with a generated one (for types that opt in
    /// via [`ApiObject::AUTO_ID`]); a supplied id is registered as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Invalid`] when a required field is missing and
    /// [`ApiError::DuplicateId`] when the supplied id is already taken.
    pub fn create<T: ApiObject>(&mut self, mut value: T) -> Result<T> {
        if let Err(source) = value.check() {
            error!(instance_type = T::INSTANCE_TYPE, %source, "rejected object");
            return Err(ApiError::Invalid {
                instance_type: T::INSTANCE_TYPE,
                source,
            });
        }
        value.stamp_instance_type();
        if value.id().is_empty() {
            if T::AUTO_ID {
                let id = self.ids.build_id(T::INSTANCE_TYPE);
                value.assign_id(id);
            } else {
                value.clear_blank_id();
            }
        } else if let Err(err) = self.ids.add_id(T::INSTANCE_TYPE, value.id()) {
            error!(instance_type = T::INSTANCE_TYPE, id = value.id(), "duplicate id");
            return Err(err);
        }
        debug!(instance_type = T::INSTANCE_TYPE, id = value.id(), "created");
        Ok(value)
    }

    pub fn ids(&self) -> &IdManager {
        &self.ids
    }

    /// Start a fresh id space.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
