use crate::shared::constants::{
    ALL_LOCATIONS, ALL_MODES, ALL_TYPES, SALARY_MAX, SALARY_MIN,
};
use thiserror::Error;

/// Errors surfaced by filter inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Text given for a numeric field or vice versa
    #[error("Filter {key} expects a {expected} value")]
    WrongValueKind {
        key: &'static str,
        expected: &'static str,
    },

    /// Lower salary bound above the upper one
    #[error("Minimum salary {min} LPA is above maximum {max} LPA")]
    InvertedSalaryRange { min: i64, max: i64 },
}

/// Names of the individual filter fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Location,
    WorkMode,
    JobType,
    SalaryMin,
    SalaryMax,
    SearchQuery,
}

impl FilterKey {
    pub fn name(&self) -> &'static str {
        match self {
            FilterKey::Location => "location",
            FilterKey::WorkMode => "workMode",
            FilterKey::JobType => "jobType",
            FilterKey::SalaryMin => "salaryMin",
            FilterKey::SalaryMax => "salaryMax",
            FilterKey::SearchQuery => "searchQuery",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "location" => Some(FilterKey::Location),
            "workMode" => Some(FilterKey::WorkMode),
            "jobType" => Some(FilterKey::JobType),
            "salaryMin" => Some(FilterKey::SalaryMin),
            "salaryMax" => Some(FilterKey::SalaryMax),
            "searchQuery" => Some(FilterKey::SearchQuery),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, FilterKey::SalaryMin | FilterKey::SalaryMax)
    }
}

/// Value of a single filter field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Number(i64),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

/// Partial update merged by [`FilterState::merge`]; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub location: Option<String>,
    pub work_mode: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub search_query: Option<String>,
}

impl FilterPatch {
    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }

    pub fn with_work_mode(self, work_mode: impl Into<String>) -> Self {
        Self {
            work_mode: Some(work_mode.into()),
            ..self
        }
    }

    pub fn with_job_type(self, job_type: impl Into<String>) -> Self {
        Self {
            job_type: Some(job_type.into()),
            ..self
        }
    }

    pub fn with_salary(self, min: i64, max: i64) -> Self {
        Self {
            salary_min: Some(min),
            salary_max: Some(max),
            ..self
        }
    }

    pub fn with_search_query(self, query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Current search criteria. One live instance per session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub location: String,
    pub work_mode: String,
    pub job_type: String,
    /// LPA, nominally in [0, 50]; not range-checked here
    pub salary_min: i64,
    pub salary_max: i64,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location: ALL_LOCATIONS.to_string(),
            work_mode: ALL_MODES.to_string(),
            job_type: ALL_TYPES.to_string(),
            salary_min: SALARY_MIN,
            salary_max: SALARY_MAX,
            search_query: String::new(),
        }
    }
}

impl FilterState {
    pub fn get(&self, key: FilterKey) -> FilterValue {
        match key {
            FilterKey::Location => FilterValue::Text(self.location.clone()),
            FilterKey::WorkMode => FilterValue::Text(self.work_mode.clone()),
            FilterKey::JobType => FilterValue::Text(self.job_type.clone()),
            FilterKey::SalaryMin => FilterValue::Number(self.salary_min),
            FilterKey::SalaryMax => FilterValue::Number(self.salary_max),
            FilterKey::SearchQuery => FilterValue::Text(self.search_query.clone()),
        }
    }

    /// Sets one field. Returns whether the state changed.
    pub fn set(&mut self, key: FilterKey, value: FilterValue) -> Result<bool, FilterError> {
        let changed = match (key, value) {
            (FilterKey::Location, FilterValue::Text(v)) => replace(&mut self.location, v),
            (FilterKey::WorkMode, FilterValue::Text(v)) => replace(&mut self.work_mode, v),
            (FilterKey::JobType, FilterValue::Text(v)) => replace(&mut self.job_type, v),
            (FilterKey::SearchQuery, FilterValue::Text(v)) => replace(&mut self.search_query, v),
            (FilterKey::SalaryMin, FilterValue::Number(v)) => replace(&mut self.salary_min, v),
            (FilterKey::SalaryMax, FilterValue::Number(v)) => replace(&mut self.salary_max, v),
            (key, _) => {
                return Err(FilterError::WrongValueKind {
                    key: key.name(),
                    expected: if key.is_numeric() { "numeric" } else { "text" },
                })
            }
        };
        Ok(changed)
    }

    /// Merges every present field of `patch`. Returns whether the state changed.
    pub fn merge(&mut self, patch: FilterPatch) -> bool {
        let mut changed = false;
        if let Some(v) = patch.location {
            changed |= replace(&mut self.location, v);
        }
        if let Some(v) = patch.work_mode {
            changed |= replace(&mut self.work_mode, v);
        }
        if let Some(v) = patch.job_type {
            changed |= replace(&mut self.job_type, v);
        }
        if let Some(v) = patch.salary_min {
            changed |= replace(&mut self.salary_min, v);
        }
        if let Some(v) = patch.salary_max {
            changed |= replace(&mut self.salary_max, v);
        }
        if let Some(v) = patch.search_query {
            changed |= replace(&mut self.search_query, v);
        }
        changed
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn salary_pair(&self) -> (i64, i64) {
        (self.salary_min, self.salary_max)
    }

    /// Number of fields that produce a query clause (badge in the filter panel)
    pub fn active_filters_count(&self) -> usize {
        [
            self.location != ALL_LOCATIONS,
            self.work_mode != ALL_MODES,
            self.job_type != ALL_TYPES,
            self.salary_min > SALARY_MIN,
            self.salary_max < SALARY_MAX,
            !self.search_query.trim().is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Inverted salary bounds are accepted by the model; this reports them for display
    pub fn salary_range_error(&self) -> Option<FilterError> {
        (self.salary_min > self.salary_max).then_some(FilterError::InvertedSalaryRange {
            min: self.salary_min,
            max: self.salary_max,
        })
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.location, "All Locations");
        assert_eq!(state.work_mode, "All Modes");
        assert_eq!(state.job_type, "All Types");
        assert_eq!((state.salary_min, state.salary_max), (0, 50));
        assert!(state.search_query.is_empty());
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut state = FilterState::default();
        let err = state
            .set(FilterKey::SalaryMin, FilterValue::from("ten"))
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::WrongValueKind {
                key: "salaryMin",
                expected: "numeric"
            }
        );
        assert!(state.is_default());
    }

    #[test]
    fn test_set_accepts_unlisted_text() {
        // no enumeration check: any string is stored as given
        let mut state = FilterState::default();
        assert_eq!(
            state.set(FilterKey::Location, FilterValue::from("Atlantis")),
            Ok(true)
        );
        assert_eq!(state.location, "Atlantis");
        assert_eq!(
            state.set(FilterKey::Location, FilterValue::from("Atlantis")),
            Ok(false)
        );
    }

    #[test]
    fn test_merge_reports_change() {
        let mut state = FilterState::default();
        assert!(!state.merge(FilterPatch::default().with_salary(0, 50)));
        assert!(state.merge(FilterPatch::default().with_salary(5, 50)));
        assert_eq!(state.active_filters_count(), 1);
    }

    #[test]
    fn test_inverted_salary_is_reported_not_fixed() {
        let mut state = FilterState::default();
        state.merge(FilterPatch::default().with_salary(40, 10));
        assert_eq!((state.salary_min, state.salary_max), (40, 10));
        assert_eq!(
            state.salary_range_error(),
            Some(FilterError::InvertedSalaryRange { min: 40, max: 10 })
        );
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in [
            FilterKey::Location,
            FilterKey::WorkMode,
            FilterKey::JobType,
            FilterKey::SalaryMin,
            FilterKey::SalaryMax,
            FilterKey::SearchQuery,
        ] {
            assert_eq!(FilterKey::from_name(key.name()), Some(key));
        }
        assert_eq!(FilterKey::from_name("salary"), None);
    }
}
