//! Copyable handles around the filter model and the saved-jobs cache.
//!
//! Both are created once in `App` and handed to pages as props; nothing is
//! looked up from ambient context.

use contracts::domain::a001_job::{Job, JobId};
use contracts::shared::filter::{
    FilterKey, FilterModel, FilterPatch, FilterState, FilterValue, QueryDescriptor,
};
use contracts::shared::saved_jobs::{SavedJobsCache, ToggleOutcome};
use leptos::prelude::*;

use super::storage::LocalStorage;

#[derive(Clone, Copy)]
pub struct FilterHandle {
    model: RwSignal<FilterModel>,
}

impl FilterHandle {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(FilterModel::new()),
        }
    }

    /// Current criteria (tracked)
    pub fn state(&self) -> FilterState {
        self.model.with(|m| m.state().clone())
    }

    pub fn state_untracked(&self) -> FilterState {
        self.model.with_untracked(|m| m.state().clone())
    }

    /// Query for the current criteria (tracked)
    pub fn query(&self) -> QueryDescriptor {
        self.model.with(|m| m.query())
    }

    pub fn active_count(&self) -> usize {
        self.model.with(|m| m.state().active_filters_count())
    }

    pub fn update_filter(&self, key: FilterKey, value: impl Into<FilterValue>) {
        self.model.maybe_update(|m| m.update_filter(key, value));
    }

    pub fn update_filters(&self, patch: FilterPatch) {
        self.model.maybe_update(|m| m.update_filters(patch));
    }

    pub fn reset_filters(&self) {
        self.model.maybe_update(|m| m.reset_filters());
    }

    /// Runs `f` against the model; subscribers are notified only if it returns true
    pub fn mutate(&self, f: impl FnOnce(&mut FilterModel) -> bool) {
        self.model.maybe_update(f);
    }
}

impl Default for FilterHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct SavedJobsHandle {
    cache: RwSignal<SavedJobsCache<LocalStorage>>,
}

impl SavedJobsHandle {
    /// Reads the saved set from localStorage
    pub fn load() -> Self {
        Self {
            cache: RwSignal::new(SavedJobsCache::load(LocalStorage)),
        }
    }

    pub fn is_saved(&self, job_id: &JobId) -> bool {
        self.cache.with(|c| c.is_saved(job_id))
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.cache.with(|c| c.jobs().to_vec())
    }

    pub fn count(&self) -> usize {
        self.cache.with(|c| c.len())
    }

    /// The only mutation offered to views
    pub fn toggle(&self, job: &Job) -> Result<ToggleOutcome, String> {
        let mut result = Err("Saved jobs are unavailable".to_string());
        self.cache.maybe_update(|c| {
            result = c.toggle(job).map_err(|e| e.to_string());
            result.is_ok()
        });
        result
    }
}
