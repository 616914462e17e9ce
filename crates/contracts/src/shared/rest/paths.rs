use super::config::RestConfig;
use super::encode::{to_query_params, to_query_string};
use crate::domain::common::RowId;
use crate::shared::filter::QueryDescriptor;

impl RestConfig {
    /// Job listing for the current filters
    pub fn jobs_url(&self, query: &QueryDescriptor) -> String {
        format!(
            "{}/jobs?{}",
            self.rest_endpoint(),
            to_query_string(&to_query_params(query))
        )
    }

    /// Single job with its company embedded
    pub fn job_details_url(&self, job_id: &RowId) -> String {
        format!(
            "{}/jobs?id=eq.{}&select=*,companies(*)",
            self.rest_endpoint(),
            urlencoding::encode(job_id.as_str())
        )
    }

    pub fn company_url(&self, company_id: &RowId) -> String {
        format!(
            "{}/companies?id=eq.{}",
            self.rest_endpoint(),
            urlencoding::encode(company_id.as_str())
        )
    }

    pub fn company_jobs_url(&self, company_id: &RowId) -> String {
        format!(
            "{}/jobs?company_id=eq.{}&order=posted_date.desc",
            self.rest_endpoint(),
            urlencoding::encode(company_id.as_str())
        )
    }

    /// Dashboard listing: applications of one user with job and company names
    pub fn user_applications_url(&self, user_id: &str) -> String {
        format!(
            "{}/applications?user_id=eq.{}&select=*,jobs(id,title,company_id,companies(name))&order=applied_at.desc",
            self.rest_endpoint(),
            urlencoding::encode(user_id)
        )
    }

    /// Existing application of `user_id` for `job_id`, if any
    pub fn application_lookup_url(&self, job_id: &RowId, user_id: &str) -> String {
        format!(
            "{}/applications?job_id=eq.{}&user_id=eq.{}",
            self.rest_endpoint(),
            urlencoding::encode(job_id.as_str()),
            urlencoding::encode(user_id)
        )
    }

    /// Insert target for new applications
    pub fn applications_url(&self) -> String {
        format!("{}/applications", self.rest_endpoint())
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}/token?grant_type=password", self.auth_endpoint())
    }

    pub fn refresh_url(&self) -> String {
        format!("{}/token?grant_type=refresh_token", self.auth_endpoint())
    }

    /// Sign-up; the confirmation mail links back to `redirect_to`
    pub fn sign_up_url(&self, redirect_to: &str) -> String {
        format!(
            "{}/signup?redirect_to={}",
            self.auth_endpoint(),
            urlencoding::encode(redirect_to)
        )
    }

    pub fn resend_url(&self) -> String {
        format!("{}/resend", self.auth_endpoint())
    }

    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.auth_endpoint())
    }

    pub fn user_url(&self) -> String {
        format!("{}/user", self.auth_endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{to_query_descriptor, FilterState};

    fn config() -> RestConfig {
        RestConfig::new("https://demo.supabase.co", "anon")
    }

    #[test]
    fn test_jobs_url_for_defaults() {
        let url = config().jobs_url(&to_query_descriptor(&FilterState::default()));
        assert_eq!(
            url,
            "https://demo.supabase.co/rest/v1/jobs?select=%2A&order=posted_date.desc%2Cid.asc"
        );
    }

    #[test]
    fn test_detail_and_dashboard_urls() {
        let c = config();
        assert_eq!(
            c.job_details_url(&RowId::new("7")),
            "https://demo.supabase.co/rest/v1/jobs?id=eq.7&select=*,companies(*)"
        );
        assert_eq!(
            c.application_lookup_url(&RowId::new("7"), "u-1"),
            "https://demo.supabase.co/rest/v1/applications?job_id=eq.7&user_id=eq.u-1"
        );
        assert!(c
            .user_applications_url("u-1")
            .ends_with("applications?user_id=eq.u-1&select=*,jobs(id,title,company_id,companies(name))&order=applied_at.desc"));
    }

    #[test]
    fn test_auth_urls() {
        let c = config();
        assert_eq!(
            c.sign_in_url(),
            "https://demo.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            c.sign_up_url("http://localhost:8080/?page=login"),
            "https://demo.supabase.co/auth/v1/signup?redirect_to=http%3A%2F%2Flocalhost%3A8080%2F%3Fpage%3Dlogin"
        );
    }
}
