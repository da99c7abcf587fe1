//! Identifier registry.
//!
//! Every id handed out or accepted by an [`IdManager`] is remembered, so an
//! id is never issued twice within one registry. Sequential ids take the form
//! `{InstanceType}_{n}` with `n` counted per instance type from 1.

use std::collections::{BTreeMap, BTreeSet};

use uuid::Uuid;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `Code_1`, `Code_2`, `StudyTitle_1`, ...
    #[default]
    Sequential,
    /// Random v4 UUIDs.
    Uuid,
}

#[derive(Debug, Default)]
pub struct IdManager {
    strategy: IdStrategy,
    counters: BTreeMap<String, u64>,
    issued: BTreeSet<String>,
}

impl IdManager {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Issue a fresh id for `instance_type` and register it.
    ///
    /// Sequential numbering skips over any id a caller already registered
    /// with [`IdManager::add_id`].
    pub fn build_id(&mut self, instance_type: &str) -> String {
        loop {
            let candidate = match self.strategy {
                IdStrategy::Sequential => {
                    let counter = self.counters.entry(instance_type.to_string()).or_insert(0);
                    *counter += 1;
                    format!("{instance_type}_{counter}")
                }
                IdStrategy::Uuid => Uuid::new_v4().to_string(),
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Register an id chosen by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateId`] if the id is already registered.
    pub fn add_id(&mut self, instance_type: &str, id: &str) -> Result<()> {
        if !self.issued.insert(id.to_string()) {
            return Err(ApiError::DuplicateId {
                instance_type: instance_type.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    /// Forget every id and restart all counters.
    pub fn clear(&mut self) {
        self.counters.clear();
        self.issued.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_per_instance_type() {
        let mut ids = IdManager::default();
        assert_eq!(ids.build_id("Code"), "Code_1");
        assert_eq!(ids.build_id("Code"), "Code_2");
        assert_eq!(ids.build_id("StudyTitle"), "StudyTitle_1");
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn generated_ids_skip_registered_ones() {
        let mut ids = IdManager::default();
        ids.add_id("Code", "Code_1").unwrap();
        assert_eq!(ids.build_id("Code"), "Code_2");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut ids = IdManager::default();
        let first = ids.build_id("Organization");
        let err = ids.add_id("Organization", &first).unwrap_err();
        assert!(matches!(err, ApiError::DuplicateId { ref id, .. } if id == "Organization_1"));
    }

    #[test]
    fn clear_restarts_numbering() {
        let mut ids = IdManager::default();
        ids.build_id("Code");
        ids.build_id("Code");
        ids.clear();
        assert!(ids.is_empty());
        assert_eq!(ids.build_id("Code"), "Code_1");
    }

    #[test]
    fn uuid_strategy_issues_uuids() {
        let mut ids = IdManager::new(IdStrategy::Uuid);
        assert_eq!(ids.strategy(), IdStrategy::Uuid);
        let id = ids.build_id("Code");
        assert!(Uuid::parse_str(&id).is_ok());
        assert!(ids.contains(&id));
    }
}
