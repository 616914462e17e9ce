use crate::domain::a001_job::JobId;
use crate::domain::common::RowId;
use crate::enums::ApplicationStatus;
use serde::{Deserialize, Serialize};

/// Company name nested inside the dashboard join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCompany {
    pub name: String,
}

/// Job summary nested inside the dashboard join:
/// `jobs(id,title,company_id,companies(name))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationJob {
    pub id: RowId,
    pub title: String,
    #[serde(default)]
    pub company_id: Option<RowId>,
    #[serde(default)]
    pub companies: Option<ApplicationCompany>,
}

/// Row of the `applications` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: RowId,
    pub job_id: JobId,
    pub user_id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: String,
    #[serde(default)]
    pub jobs: Option<ApplicationJob>,
}

impl Application {
    pub fn job_title(&self) -> &str {
        self.jobs.as_ref().map(|j| j.title.as_str()).unwrap_or("Unknown job")
    }

    pub fn company_name(&self) -> &str {
        self.jobs
            .as_ref()
            .and_then(|j| j.companies.as_ref())
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown company")
    }
}

/// Insert payload for `POST /applications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    pub job_id: JobId,
    pub user_id: String,
    pub status: ApplicationStatus,
}

impl NewApplication {
    pub fn new(job_id: JobId, user_id: impl Into<String>) -> Self {
        Self {
            job_id,
            user_id: user_id.into(),
            status: ApplicationStatus::Applied,
        }
    }
}
