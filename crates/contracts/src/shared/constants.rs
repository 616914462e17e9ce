//! Domain constants shared by the filter model, the saved-jobs cache and the UI

use crate::enums::{JobType, WorkMode};

/// Sentinel meaning "no location filter"
pub const ALL_LOCATIONS: &str = "All Locations";
/// Sentinel meaning "no work mode filter"
pub const ALL_MODES: &str = "All Modes";
/// Sentinel meaning "no job type filter"
pub const ALL_TYPES: &str = "All Types";

/// Location options, sentinel first
pub const LOCATIONS: &[&str] = &[
    ALL_LOCATIONS,
    "Bangalore",
    "Hyderabad",
    "Pune",
    "Gurgaon",
    "Noida",
    "Mumbai",
    "Delhi",
    "Chennai",
    "Kolkata",
    "Remote",
];

/// Salary bounds in lakhs per annum (LPA)
pub const SALARY_MIN: i64 = 0;
pub const SALARY_MAX: i64 = 50;
pub const SALARY_STEP: i64 = 1;

/// Quiet period before staged salary edits reach the filter model
pub const SALARY_DEBOUNCE_MS: u32 = 500;

/// localStorage key of the saved-jobs set
pub const SAVED_JOBS_STORAGE_KEY: &str = "hiresync_saved_jobs";

/// Work mode options for the select, sentinel first
pub fn work_mode_options() -> Vec<&'static str> {
    std::iter::once(ALL_MODES)
        .chain(WorkMode::all().iter().map(|m| m.code()))
        .collect()
}

/// Job type options for the select, sentinel first
pub fn job_type_options() -> Vec<&'static str> {
    std::iter::once(ALL_TYPES)
        .chain(JobType::all().iter().map(|t| t.code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_lists() {
        assert_eq!(
            work_mode_options(),
            vec!["All Modes", "Remote", "On-site", "Hybrid"]
        );
        assert_eq!(
            job_type_options(),
            vec!["All Types", "Full-time", "Contract", "Internship", "Part-time"]
        );
        assert_eq!(LOCATIONS[0], ALL_LOCATIONS);
    }
}
