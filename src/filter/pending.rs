use super::criteria::FilterCriteria;
use super::update::{CriteriaField, CriteriaUpdate};
use std::collections::BTreeMap;

/// Edits collected while a guest is still typing, applied later in one go.
///
/// Holds at most one value per field; staging a field again replaces the
/// earlier value. A staged reset drops everything staged before it.
#[derive(Debug, Clone, Default)]
pub struct PendingCriteria {
    reset: bool,
    staged: BTreeMap<CriteriaField, CriteriaUpdate>,
}

impl PendingCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&mut self, update: CriteriaUpdate) {
        self.staged.insert(update.field(), update);
    }

    pub fn stage_reset(&mut self) {
        self.staged.clear();
        self.reset = true;
    }

    pub fn is_empty(&self) -> bool {
        !self.reset && self.staged.is_empty()
    }

    /// Number of staged field edits, not counting a staged reset
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Write the staged edits into `criteria`, leaving the buffer empty.
    pub fn drain_into(&mut self, criteria: &mut FilterCriteria) {
        if std::mem::take(&mut self.reset) {
            *criteria = FilterCriteria::default();
        }
        for (_, update) in std::mem::take(&mut self.staged) {
            update.apply_to(criteria);
        }
    }
}
