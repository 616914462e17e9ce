use serde::{Deserialize, Serialize};

/// Employment type of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Internship")]
    Internship,
    #[serde(rename = "Part-time")]
    PartTime,
}

impl JobType {
    /// Value stored in the `job_type` column
    pub fn code(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::PartTime => "Part-time",
        }
    }

    pub fn all() -> Vec<JobType> {
        vec![
            JobType::FullTime,
            JobType::Contract,
            JobType::Internship,
            JobType::PartTime,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Full-time" => Some(JobType::FullTime),
            "Contract" => Some(JobType::Contract),
            "Internship" => Some(JobType::Internship),
            "Part-time" => Some(JobType::PartTime),
            _ => None,
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
