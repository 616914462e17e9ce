use crate::domain::a002_company::Company;
use crate::domain::common::RowId;
use crate::enums::{JobType, WorkMode};
use serde::{Deserialize, Serialize};

pub type JobId = RowId;

// ============================================================================
// Record
// ============================================================================

/// Job posting record from the `jobs` table.
///
/// Saved jobs keep a full copy of this record so they render without a
/// re-fetch. Columns the client does not model are carried in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub company_id: Option<RowId>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub work_mode: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub salary_min_lpa: i64,
    #[serde(default)]
    pub salary_max_lpa: i64,
    #[serde(default)]
    pub experience_yrs: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date or timestamp
    #[serde(default)]
    pub posted_date: String,
    /// Embedded company row (`select=*,companies(*)`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companies: Option<Company>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    /// Salary badge text, e.g. "₹6-12L"
    pub fn salary_label(&self) -> String {
        format!("₹{}-{}L", self.salary_min_lpa, self.salary_max_lpa)
    }

    pub fn work_mode_kind(&self) -> Option<WorkMode> {
        WorkMode::from_code(&self.work_mode)
    }

    pub fn job_type_kind(&self) -> Option<JobType> {
        JobType::from_code(&self.job_type)
    }

    /// Company name from the embedded row, falling back to the denormalized column
    pub fn display_company(&self) -> &str {
        self.companies
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.company_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_and_text_ids() {
        let numeric: Job =
            serde_json::from_str(r#"{"id": 42, "title": "Rust Engineer", "extra": true}"#)
                .unwrap();
        assert_eq!(numeric.id, JobId::new("42"));
        assert_eq!(numeric.extra.get("extra"), Some(&serde_json::Value::Bool(true)));

        let text: Job = serde_json::from_str(
            r#"{"id": "8c1f", "title": "SRE", "salary_min_lpa": 10, "salary_max_lpa": 20}"#,
        )
        .unwrap();
        assert_eq!(text.id.as_str(), "8c1f");
        assert_eq!(text.salary_label(), "₹10-20L");
    }

    #[test]
    fn test_rejects_structured_id() {
        let result = serde_json::from_str::<Job>(r#"{"id": {"x": 1}, "title": "SRE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_company_prefers_embedded_row() {
        let job: Job = serde_json::from_str(
            r#"{"id": 1, "title": "QA", "company_name": "Old Name",
                "companies": {"id": 7, "name": "Acme"}}"#,
        )
        .unwrap();
        assert_eq!(job.display_company(), "Acme");
        assert_eq!(job.work_mode_kind(), None);
    }

    #[test]
    fn test_snapshot_keeps_unknown_columns_and_id_form() {
        let raw = serde_json::json!({
            "id": 42,
            "title": "Rust Engineer",
            "apply_url": "https://jobs.example/42",
            "tags": ["rust", "wasm"],
            "companies": {"id": 7, "name": "Acme", "employees": 120}
        });
        let job: Job = serde_json::from_value(raw.clone()).unwrap();
        let written = serde_json::to_value(&job).unwrap();

        assert_eq!(written["id"], raw["id"]);
        assert_eq!(written["apply_url"], raw["apply_url"]);
        assert_eq!(written["tags"], raw["tags"]);
        assert_eq!(written["companies"]["id"], serde_json::json!(7));
        assert_eq!(written["companies"]["employees"], serde_json::json!(120));
    }
}
