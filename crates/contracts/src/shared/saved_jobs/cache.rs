use super::error::StorageError;
use super::store::KeyValueStore;
use crate::domain::a001_job::{Job, JobId};
use crate::shared::constants::SAVED_JOBS_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Version tag written with every persisted set
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct PersistedRef<'a> {
    version: u32,
    jobs: &'a [Job],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Persisted {
    Versioned { version: u32, jobs: Vec<Job> },
    /// Bare array written by earlier releases
    Legacy(Vec<Job>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Saved,
    Unsaved,
}

/// Set of saved job snapshots keyed by job id.
///
/// The whole set is rewritten to the store on every mutation, and memory is
/// only updated after that write succeeded: a failed persist leaves the
/// cache exactly as it was.
#[derive(Debug)]
pub struct SavedJobsCache<S> {
    store: S,
    key: String,
    /// Insertion order, for display only
    jobs: Vec<Job>,
    ids: HashSet<JobId>,
}

impl<S: KeyValueStore> SavedJobsCache<S> {
    /// Loads the set stored under the default key
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, SAVED_JOBS_STORAGE_KEY)
    }

    /// Loads the set stored under `key`. Missing, unreadable or corrupt data
    /// yields an empty cache; the problem is logged, never returned.
    pub fn load_with_key(store: S, key: &str) -> Self {
        let jobs = match store.get(key) {
            Ok(Some(raw)) => decode(&raw).unwrap_or_else(|reason| {
                log::warn!("Discarding saved jobs under {}: {}", key, reason);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read saved jobs: {}", e);
                Vec::new()
            }
        };

        let mut cache = Self {
            store,
            key: key.to_string(),
            jobs: Vec::with_capacity(jobs.len()),
            ids: HashSet::with_capacity(jobs.len()),
        };
        for job in jobs {
            // keep the first snapshot if the stored data repeats an id
            if cache.ids.insert(job.id.clone()) {
                cache.jobs.push(job);
            }
        }
        log::debug!("Loaded {} saved jobs", cache.jobs.len());
        cache
    }

    pub fn is_saved(&self, job_id: &JobId) -> bool {
        self.ids.contains(job_id)
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds `job` unless its id is already saved (the stored snapshot is not
    /// refreshed). `Ok(true)` when newly saved, `Ok(false)` when already present.
    pub fn save(&mut self, job: Job) -> Result<bool, StorageError> {
        if self.is_saved(&job.id) {
            return Ok(false);
        }

        let mut next = self.jobs.clone();
        next.push(job);
        self.persist(&next)?;

        if let Some(job) = next.last() {
            self.ids.insert(job.id.clone());
        }
        self.jobs = next;
        Ok(true)
    }

    /// Removes the job with `job_id`. `Ok(false)` when it was not saved.
    pub fn unsave(&mut self, job_id: &JobId) -> Result<bool, StorageError> {
        if !self.is_saved(job_id) {
            return Ok(false);
        }

        let next: Vec<Job> = self
            .jobs
            .iter()
            .filter(|j| &j.id != job_id)
            .cloned()
            .collect();
        self.persist(&next)?;

        self.ids.remove(job_id);
        self.jobs = next;
        Ok(true)
    }

    /// Saves the job if absent, removes it otherwise
    pub fn toggle(&mut self, job: &Job) -> Result<ToggleOutcome, StorageError> {
        if self.is_saved(&job.id) {
            self.unsave(&job.id)?;
            Ok(ToggleOutcome::Unsaved)
        } else {
            self.save(job.clone())?;
            Ok(ToggleOutcome::Saved)
        }
    }

    fn persist(&self, jobs: &[Job]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&PersistedRef {
            version: FORMAT_VERSION,
            jobs,
        })
        .map_err(|e| {
            log::error!("Failed to serialize saved jobs: {}", e);
            StorageError::from(e)
        })?;

        self.store.set(&self.key, &raw).map_err(|e| {
            log::error!("Failed to persist saved jobs: {}", e);
            e
        })
    }
}

fn decode(raw: &str) -> Result<Vec<Job>, String> {
    match serde_json::from_str::<Persisted>(raw) {
        Ok(Persisted::Versioned { version, jobs }) if version <= FORMAT_VERSION => Ok(jobs),
        Ok(Persisted::Versioned { version, .. }) => {
            Err(format!("unsupported format version {}", version))
        }
        Ok(Persisted::Legacy(jobs)) => Ok(jobs),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::saved_jobs::MemoryStore;
    use std::rc::Rc;

    fn job(id: &str) -> Job {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Job {}", id),
            "company_name": "Acme",
            "location": "Pune",
            "work_mode": "Hybrid",
            "job_type": "Full-time",
            "salary_min_lpa": 8,
            "salary_max_lpa": 14,
            "posted_date": "2024-06-01"
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let cache = SavedJobsCache::load(MemoryStore::new());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let store = MemoryStore::new();
        store.insert_raw(SAVED_JOBS_STORAGE_KEY, "{not json");
        let cache = SavedJobsCache::load(store);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_read_loads_empty() {
        let store = Rc::new(MemoryStore::unreadable());
        let stored = serde_json::to_string(&vec![job("1")]).unwrap();
        store.insert_raw(SAVED_JOBS_STORAGE_KEY, &stored);

        let cache = SavedJobsCache::load(Rc::clone(&store));
        assert!(cache.is_empty());
        assert!(!cache.is_saved(&JobId::new("1")));
        // loading never writes
        assert_eq!(store.raw(SAVED_JOBS_STORAGE_KEY), Some(stored));
    }

    #[test]
    fn test_future_version_loads_empty() {
        let store = MemoryStore::new();
        store.insert_raw(SAVED_JOBS_STORAGE_KEY, r#"{"version": 99, "jobs": []}"#);
        assert!(SavedJobsCache::load(store).is_empty());
    }

    #[test]
    fn test_legacy_array_is_accepted() {
        let store = MemoryStore::new();
        let legacy = serde_json::to_string(&vec![job("1"), job("2")]).unwrap();
        store.insert_raw(SAVED_JOBS_STORAGE_KEY, &legacy);
        let cache = SavedJobsCache::load(store);
        assert_eq!(cache.len(), 2);
        assert!(cache.is_saved(&JobId::new("2")));
    }

    #[test]
    fn test_duplicate_ids_in_storage_keep_first() {
        let store = MemoryStore::new();
        let mut renamed = job("1");
        renamed.title = "Renamed".to_string();
        let raw = serde_json::to_string(&vec![job("1"), renamed]).unwrap();
        store.insert_raw(SAVED_JOBS_STORAGE_KEY, &raw);
        let cache = SavedJobsCache::load(store);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.jobs()[0].title, "Job 1");
    }

    #[test]
    fn test_save_writes_versioned_envelope() {
        let store = Rc::new(MemoryStore::new());
        let mut cache = SavedJobsCache::load(Rc::clone(&store));
        assert!(cache.save(job("5")).unwrap());

        let raw = store.raw(SAVED_JOBS_STORAGE_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["jobs"][0]["id"], "5");
    }

    #[test]
    fn test_resave_does_not_refresh_snapshot() {
        let mut cache = SavedJobsCache::load(MemoryStore::new());
        cache.save(job("1")).unwrap();
        let mut changed = job("1");
        changed.title = "Changed".to_string();
        assert!(!cache.save(changed).unwrap());
        assert_eq!(cache.jobs()[0].title, "Job 1");
    }

    #[test]
    fn test_unsave_absent_is_noop() {
        let mut cache = SavedJobsCache::load(MemoryStore::new());
        assert!(!cache.unsave(&JobId::new("404")).unwrap());
        assert!(cache.store().raw(SAVED_JOBS_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_failed_persist_leaves_memory_untouched() {
        let mut cache = SavedJobsCache::load(MemoryStore::with_quota(16));
        let result = cache.save(job("1"));
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert!(!cache.is_saved(&JobId::new("1")));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failed_unsave_keeps_job() {
        let mut cache = SavedJobsCache::load(MemoryStore::new());
        cache.save(job("1")).unwrap();
        cache.save(job("2")).unwrap();

        cache.store.set_quota(Some(0));
        assert!(cache.unsave(&JobId::new("1")).is_err());
        assert!(cache.is_saved(&JobId::new("1")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_toggle_reports_direction() {
        let mut cache = SavedJobsCache::load(MemoryStore::new());
        assert_eq!(cache.toggle(&job("3")).unwrap(), ToggleOutcome::Saved);
        assert_eq!(cache.toggle(&job("3")).unwrap(), ToggleOutcome::Unsaved);
        assert!(cache.is_empty());
    }
}
