//! Calls to the hosted REST backend
//!
//! Every function takes the connection settings and the optional session
//! token explicitly; nothing here retries or caches.

use contracts::domain::a001_job::{Job, JobId};
use contracts::domain::a002_company::Company;
use contracts::domain::common::RowId;
use contracts::domain::a003_application::{Application, NewApplication};
use contracts::shared::filter::QueryDescriptor;
use contracts::shared::rest::{Prefer, RestConfig};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;

pub(crate) fn with_headers(
    mut builder: RequestBuilder,
    config: &RestConfig,
    access_token: Option<&str>,
    prefer: Prefer,
) -> RequestBuilder {
    for (name, value) in config.headers(access_token, prefer) {
        builder = builder.header(name, &value);
    }
    builder
}

/// Turns a non-2xx response into the backend's message when it has one
pub(crate) async fn error_message(response: Response, context: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) => format!("{}: {}", context, message),
        _ => format!("{}: {}", context, status),
    }
}

async fn get_json<T>(url: &str, config: &RestConfig, access_token: Option<&str>, context: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = with_headers(Request::get(url), config, access_token, Prefer::ReturnRepresentation)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, context).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Jobs matching the descriptor, newest first
pub async fn fetch_jobs(config: &RestConfig, query: &QueryDescriptor) -> Result<Vec<Job>, String> {
    get_json(&config.jobs_url(query), config, None, "Failed to fetch jobs").await
}

/// Single job with its company, `Ok(None)` when it does not exist
pub async fn fetch_job(config: &RestConfig, job_id: &JobId) -> Result<Option<Job>, String> {
    let jobs: Vec<Job> = get_json(
        &config.job_details_url(job_id),
        config,
        None,
        "Failed to fetch job details",
    )
    .await?;
    Ok(jobs.into_iter().next())
}

pub async fn fetch_company(config: &RestConfig, company_id: &RowId) -> Result<Option<Company>, String> {
    let companies: Vec<Company> = get_json(
        &config.company_url(company_id),
        config,
        None,
        "Failed to fetch company",
    )
    .await?;
    Ok(companies.into_iter().next())
}

pub async fn fetch_company_jobs(config: &RestConfig, company_id: &RowId) -> Result<Vec<Job>, String> {
    get_json(
        &config.company_jobs_url(company_id),
        config,
        None,
        "Failed to fetch company jobs",
    )
    .await
}

/// Applications of the signed-in user for the dashboard
pub async fn fetch_applications(
    config: &RestConfig,
    user_id: &str,
    access_token: &str,
) -> Result<Vec<Application>, String> {
    get_json(
        &config.user_applications_url(user_id),
        config,
        Some(access_token),
        "Failed to fetch applications",
    )
    .await
}

pub async fn has_applied(
    config: &RestConfig,
    job_id: &JobId,
    user_id: &str,
    access_token: &str,
) -> Result<bool, String> {
    let rows: Vec<serde_json::Value> = get_json(
        &config.application_lookup_url(job_id, user_id),
        config,
        Some(access_token),
        "Failed to check application",
    )
    .await?;
    Ok(!rows.is_empty())
}

pub async fn submit_application(
    config: &RestConfig,
    application: &NewApplication,
    access_token: &str,
) -> Result<(), String> {
    let response = with_headers(
        Request::post(&config.applications_url()),
        config,
        Some(access_token),
        Prefer::ReturnMinimal,
    )
    .json(application)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Failed to submit application").await);
    }

    Ok(())
}
