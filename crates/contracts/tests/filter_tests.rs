//! Filter model, query derivation and salary debounce working together.

use contracts::domain::a001_job::Job;
use contracts::shared::debounce::SalaryStage;
use contracts::shared::filter::{
    to_query_descriptor, Clause, Column, FilterKey, FilterModel, FilterPatch, FilterState,
};
use contracts::shared::rest::to_query_params;

fn job(id: &str, title: &str, company: &str, location: &str, salary: (i64, i64), posted: &str) -> Job {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "company_name": company,
        "location": location,
        "work_mode": "Remote",
        "job_type": "Full-time",
        "salary_min_lpa": salary.0,
        "salary_max_lpa": salary.1,
        "posted_date": posted
    }))
    .unwrap()
}

fn catalogue() -> Vec<Job> {
    vec![
        job("1", "Backend Engineer", "Acme", "Bangalore, KA", (10, 18), "2024-06-01"),
        job("2", "Data Analyst", "Engineers Inc", "Pune", (4, 8), "2024-06-03"),
        job("3", "Frontend Developer", "Zeta", "bangalore", (20, 35), "2024-06-03"),
        job("4", "QA Intern", "Acme", "Mumbai", (1, 3), "2024-05-20"),
    ]
}

fn ids(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.id.as_str()).collect()
}

#[test]
fn test_defaults_return_everything_newest_first() {
    let query = to_query_descriptor(&FilterState::default());
    assert!(query.clauses.is_empty());
    // "2" and "3" share a posting date: id ascending breaks the tie
    assert_eq!(ids(&query.apply(&catalogue())), vec!["2", "3", "1", "4"]);
}

#[test]
fn test_same_day_ties_order_ids_numerically() {
    let same_day = |id| job(id, "Engineer", "Acme", "Pune", (5, 10), "2024-06-01");
    let jobs = vec![same_day("10"), same_day("9"), same_day("2")];

    let query = to_query_descriptor(&FilterState::default());
    assert_eq!(ids(&query.apply(&jobs)), vec!["2", "9", "10"]);
}

#[test]
fn test_location_is_case_insensitive_substring() {
    let mut model = FilterModel::new();
    model.update_filter(FilterKey::Location, "Bangalore");
    assert_eq!(ids(&model.query().apply(&catalogue())), vec!["3", "1"]);
}

#[test]
fn test_salary_range_accepts_partial_overlap() {
    let mut model = FilterModel::new();
    model.update_filters(FilterPatch::default().with_salary(10, 20));
    let query = model.query();
    assert_eq!(
        query.clauses,
        vec![
            Clause::Gte {
                column: Column::SalaryMaxLpa,
                value: 10
            },
            Clause::Lte {
                column: Column::SalaryMinLpa,
                value: 20
            },
        ]
    );
    // 10-18 and 20-35 both overlap [10, 20]
    assert_eq!(ids(&query.apply(&catalogue())), vec!["3", "1"]);
}

#[test]
fn test_search_matches_title_or_company() {
    let mut model = FilterModel::new();
    model.update_filter(FilterKey::SearchQuery, "engineer");
    assert_eq!(ids(&model.query().apply(&catalogue())), vec!["2", "1"]);
}

#[test]
fn test_inverted_salary_passes_through_model() {
    let mut state = FilterState::default();
    state.merge(FilterPatch::default().with_salary(40, 10));
    let query = to_query_descriptor(&state);
    let params = to_query_params(&query);
    assert!(params.contains(&("salary_max_lpa".to_string(), "gte.40".to_string())));
    assert!(params.contains(&("salary_min_lpa".to_string(), "lte.10".to_string())));
    assert!(query.apply(&catalogue()).is_empty());
    assert!(state.salary_range_error().is_some());
}

#[test]
fn test_update_filters_is_atomic_for_observers() {
    // an observer sampling after every mutation sees either none or all of the patch
    let mut model = FilterModel::new();
    let mut observed = vec![model.state().clone()];
    model.update_filters(
        FilterPatch::default()
            .with_location("Pune")
            .with_work_mode("Hybrid"),
    );
    observed.push(model.state().clone());

    for state in &observed {
        let location_set = state.location == "Pune";
        let mode_set = state.work_mode == "Hybrid";
        assert_eq!(location_set, mode_set);
    }
    assert_eq!(model.revision(), 1);
}

#[test]
fn test_salary_edits_coalesce_into_one_update() {
    let mut model = FilterModel::new();
    let mut stage = SalaryStage::new(model.state());

    let tickets: Vec<_> = (1..=12).map(|v| stage.set_min(v)).collect();
    let last_max = stage.set_max(30);

    // timers fire in order; every one but the last is stale
    let applied: usize = tickets
        .into_iter()
        .chain(std::iter::once(last_max))
        .map(|t| stage.commit(t, &mut model) as usize)
        .sum();

    assert_eq!(applied, 1);
    assert_eq!(model.revision(), 1);
    assert_eq!((model.state().salary_min, model.state().salary_max), (12, 30));
}

#[test]
fn test_teardown_discards_pending_salary_edit() {
    let mut model = FilterModel::new();
    let mut stage = SalaryStage::new(model.state());
    let ticket = stage.set_max(20);
    stage.cancel();
    assert!(!stage.commit(ticket, &mut model));
    assert!(model.state().is_default());
}
