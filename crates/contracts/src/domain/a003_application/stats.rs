use super::aggregate::Application;
use crate::enums::ApplicationStatus;

/// Counters for the dashboard stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: usize,
    pub applied: usize,
    pub shortlisted: usize,
    pub interview_scheduled: usize,
    pub rejected: usize,
}

impl ApplicationStats {
    pub fn from_applications(applications: &[Application]) -> Self {
        applications
            .iter()
            .fold(Self::default(), |mut stats, app| {
                stats.total += 1;
                match app.status {
                    ApplicationStatus::Applied => stats.applied += 1,
                    ApplicationStatus::Shortlisted => stats.shortlisted += 1,
                    ApplicationStatus::InterviewScheduled => stats.interview_scheduled += 1,
                    ApplicationStatus::Rejected => stats.rejected += 1,
                }
                stats
            })
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Applied => self.applied,
            ApplicationStatus::Shortlisted => self.shortlisted,
            ApplicationStatus::InterviewScheduled => self.interview_scheduled,
            ApplicationStatus::Rejected => self.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RowId;

    fn app(id: &str, status: ApplicationStatus) -> Application {
        Application {
            id: RowId::new(id),
            job_id: RowId::new("1"),
            user_id: "u".to_string(),
            status,
            applied_at: String::new(),
            jobs: None,
        }
    }

    #[test]
    fn test_counts_per_status() {
        let apps = vec![
            app("1", ApplicationStatus::Applied),
            app("2", ApplicationStatus::Applied),
            app("3", ApplicationStatus::InterviewScheduled),
            app("4", ApplicationStatus::Rejected),
        ];
        let stats = ApplicationStats::from_applications(&apps);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(ApplicationStatus::Applied), 2);
        assert_eq!(stats.count(ApplicationStatus::Shortlisted), 0);
        assert_eq!(stats.count(ApplicationStatus::InterviewScheduled), 1);
        assert_eq!(stats.rejected, 1);
    }
}
