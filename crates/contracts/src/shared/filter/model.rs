use super::query::{to_query_descriptor, QueryDescriptor};
use super::state::{FilterKey, FilterPatch, FilterState, FilterValue};

/// Owner of the live [`FilterState`].
///
/// Every mutation is applied as a whole before returning, so readers never
/// see a half-merged patch. `revision` grows by one per effective change and
/// lets consumers tell whether the derived query must be refetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterModel {
    state: FilterState,
    revision: u64,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn query(&self) -> QueryDescriptor {
        to_query_descriptor(&self.state)
    }

    /// Sets a single field. A value of the wrong kind for `key` is dropped.
    pub fn update_filter(&mut self, key: FilterKey, value: impl Into<FilterValue>) -> bool {
        match self.state.set(key, value.into()) {
            Ok(changed) => self.bump(changed),
            Err(e) => {
                log::warn!("Ignoring filter update: {}", e);
                false
            }
        }
    }

    /// Merges several fields as one update
    pub fn update_filters(&mut self, patch: FilterPatch) -> bool {
        let changed = self.state.merge(patch);
        self.bump(changed)
    }

    pub fn reset_filters(&mut self) -> bool {
        let changed = !self.state.is_default();
        self.state = FilterState::default();
        self.bump(changed)
    }

    fn bump(&mut self, changed: bool) -> bool {
        if changed {
            self.revision += 1;
            log::debug!(
                "Filters changed (rev {}): {} active",
                self.revision,
                self.state.active_filters_count()
            );
        }
        changed
    }
}
