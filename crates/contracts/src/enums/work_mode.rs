use serde::{Deserialize, Serialize};

/// Work arrangement advertised by a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    #[serde(rename = "Remote")]
    Remote,
    #[serde(rename = "On-site")]
    OnSite,
    #[serde(rename = "Hybrid")]
    Hybrid,
}

impl WorkMode {
    /// Value stored in the `work_mode` column
    pub fn code(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::OnSite => "On-site",
            WorkMode::Hybrid => "Hybrid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::OnSite => "On-site",
            WorkMode::Hybrid => "Hybrid",
        }
    }

    pub fn all() -> Vec<WorkMode> {
        vec![WorkMode::Remote, WorkMode::OnSite, WorkMode::Hybrid]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Remote" => Some(WorkMode::Remote),
            "On-site" => Some(WorkMode::OnSite),
            "Hybrid" => Some(WorkMode::Hybrid),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
