//! Saved-jobs cache against an in-memory store.

use contracts::domain::a001_job::{Job, JobId};
use contracts::shared::constants::SAVED_JOBS_STORAGE_KEY;
use contracts::shared::saved_jobs::{KeyValueStore, MemoryStore, SavedJobsCache, ToggleOutcome};
use std::collections::HashSet;
use std::rc::Rc;

fn job(id: u32) -> Job {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Role {}", id),
        "company_name": "HireCo",
        "location": "Chennai",
        "work_mode": "On-site",
        "job_type": "Contract",
        "salary_min_lpa": 5,
        "salary_max_lpa": 9,
        "experience_yrs": "2-4 years",
        "posted_date": "2024-04-10",
        "companies": {"id": 1, "name": "HireCo", "logo_url": null}
    }))
    .unwrap()
}

fn id_set<S: KeyValueStore>(cache: &SavedJobsCache<S>) -> HashSet<JobId> {
    cache.jobs().iter().map(|j| j.id.clone()).collect()
}

#[test]
fn test_save_twice_equals_save_once() {
    let store = Rc::new(MemoryStore::new());
    let mut once = SavedJobsCache::load(MemoryStore::new());
    once.save(job(1)).unwrap();

    let mut twice = SavedJobsCache::load(Rc::clone(&store));
    assert!(twice.save(job(1)).unwrap());
    let raw_after_first = store.raw(SAVED_JOBS_STORAGE_KEY);
    assert!(!twice.save(job(1)).unwrap());

    assert_eq!(once.jobs(), twice.jobs());
    assert_eq!(store.raw(SAVED_JOBS_STORAGE_KEY), raw_after_first);
}

#[test]
fn test_double_toggle_is_noop() {
    let mut cache = SavedJobsCache::load(MemoryStore::new());
    cache.save(job(7)).unwrap();
    let before = id_set(&cache);

    assert_eq!(cache.toggle(&job(8)).unwrap(), ToggleOutcome::Saved);
    assert_eq!(cache.toggle(&job(8)).unwrap(), ToggleOutcome::Unsaved);
    assert_eq!(id_set(&cache), before);
}

#[test]
fn test_reload_reconstructs_the_set() {
    let store = Rc::new(MemoryStore::new());
    let mut cache = SavedJobsCache::load(Rc::clone(&store));
    for id in [3, 1, 4, 5, 9] {
        cache.save(job(id)).unwrap();
    }
    cache.unsave(&JobId::new("4")).unwrap();

    let reloaded = SavedJobsCache::load(Rc::clone(&store));
    assert_eq!(id_set(&reloaded), id_set(&cache));
    assert_eq!(reloaded.jobs(), cache.jobs());
    assert_eq!(reloaded.jobs()[0].experience_yrs.as_deref(), Some("2-4 years"));
    assert_eq!(reloaded.jobs()[0].display_company(), "HireCo");
}

#[test]
fn test_quota_failure_reports_and_preserves_state() {
    let store = Rc::new(MemoryStore::new());
    let mut cache = SavedJobsCache::load(Rc::clone(&store));
    cache.save(job(1)).unwrap();
    let persisted = store.raw(SAVED_JOBS_STORAGE_KEY);

    store.set_quota(Some(0));
    assert!(cache.toggle(&job(2)).is_err());
    assert!(cache.toggle(&job(1)).is_err());
    assert!(!cache.is_saved(&JobId::new("2")));
    assert!(cache.is_saved(&JobId::new("1")));
    assert_eq!(store.raw(SAVED_JOBS_STORAGE_KEY), persisted);

    store.set_quota(None);
    assert_eq!(cache.toggle(&job(1)).unwrap(), ToggleOutcome::Unsaved);
    assert!(cache.is_empty());
}

#[test]
fn test_stored_snapshot_matches_backend_row() {
    let row = serde_json::json!({
        "id": 12,
        "title": "Platform Engineer",
        "company_name": "HireCo",
        "posted_date": "2024-04-10",
        "apply_url": "https://hireco.example/apply/12"
    });
    let store = Rc::new(MemoryStore::new());
    let mut cache = SavedJobsCache::load(Rc::clone(&store));
    cache.save(serde_json::from_value(row.clone()).unwrap()).unwrap();

    let raw = store.raw(SAVED_JOBS_STORAGE_KEY).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["jobs"][0]["id"], row["id"]);
    assert_eq!(stored["jobs"][0]["apply_url"], row["apply_url"]);

    let reloaded = SavedJobsCache::load(Rc::clone(&store));
    assert!(reloaded.is_saved(&JobId::new("12")));
}
