use serde::{Deserialize, Serialize};

/// Статус отклика на вакансию
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "Applied")]
    Applied,
    #[serde(rename = "Shortlisted")]
    Shortlisted,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl ApplicationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Short label for stat cards
    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::InterviewScheduled => "Interviews",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<ApplicationStatus> {
        vec![
            ApplicationStatus::Applied,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::InterviewScheduled,
            ApplicationStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Applied" => Some(ApplicationStatus::Applied),
            "Shortlisted" => Some(ApplicationStatus::Shortlisted),
            "Interview Scheduled" => Some(ApplicationStatus::InterviewScheduled),
            "Rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        let json = serde_json::to_string(&ApplicationStatus::InterviewScheduled).unwrap();
        assert_eq!(json, "\"Interview Scheduled\"");
        for status in ApplicationStatus::all() {
            assert_eq!(ApplicationStatus::from_code(status.code()), Some(status));
        }
    }
}
