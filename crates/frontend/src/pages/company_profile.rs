use contracts::domain::a001_job::Job;
use contracts::domain::a002_company::Company;
use contracts::domain::common::RowId;
use contracts::shared::rest::RestConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::shared::api;
use crate::shared::components::JobCard;
use crate::shared::handles::SavedJobsHandle;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthHandle;

#[component]
pub fn CompanyProfilePage(
    config: RestConfig,
    company_id: RowId,
    saved: SavedJobsHandle,
    auth: AuthHandle,
    nav: Navigator,
    toasts: ToastService,
) -> impl IntoView {
    let company = RwSignal::new(Option::<Company>::None);
    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        let result = match api::fetch_company(&config, &company_id).await {
            Ok(Some(found)) => {
                let jobs = api::fetch_company_jobs(&config, &company_id).await;
                jobs.map(|jobs| (found, jobs))
            }
            Ok(None) => Err("Company not found".to_string()),
            Err(e) => Err(e),
        };

        match result {
            Ok((found, list)) => {
                let _ = company.try_set(Some(found));
                let _ = set_jobs.try_set(list);
            }
            Err(e) => {
                log::error!("Error fetching company: {}", e);
                let _ = set_error.try_set(Some(e));
            }
        }
        let _ = set_loading.try_set(false);
    });

    move || {
        if loading.get() {
            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
        }

        let Some(current) = company.get() else {
            return view! {
                <div class="not-found">
                    <h2>"Company not found"</h2>
                    <p>{error.get().unwrap_or_default()}</p>
                    <a class="back-link" on:click=move |_| nav.go(Page::Home)>
                        "← Back to jobs"
                    </a>
                </div>
            }
            .into_any();
        };

        let logo = match current.logo_url.clone() {
            Some(url) => view! { <img class="company__logo-img" src=url alt=current.name.clone() /> }.into_any(),
            None => view! { <span class="company__logo-initial">{current.initial()}</span> }.into_any(),
        };

        view! {
            <div class="company">
                <div class="company__header card">
                    <div class="company__logo">{logo}</div>
                    <div class="company__info">
                        <h1>{current.name.clone()}</h1>
                        <div class="company__meta">
                            {current.location.clone().map(|l| view! { <span class="tag">{l}</span> })}
                            {current.website_url.clone().map(|url| view! {
                                <a href=url target="_blank" rel="noopener noreferrer">"Visit website"</a>
                            })}
                        </div>
                        {current.about_text.clone().map(|about| view! {
                            <div class="company__about">
                                <h2>"About"</h2>
                                <p>{about}</p>
                            </div>
                        })}
                    </div>
                </div>

                <section>
                    <h2>{move || format!("Open positions ({})", jobs.with(|j| j.len()))}</h2>
                    <Show
                        when=move || jobs.with(|j| !j.is_empty())
                        fallback=|| view! {
                            <div class="card job-list__empty">
                                <p>"No active job openings at the moment"</p>
                            </div>
                        }
                    >
                        <div class="job-list__grid">
                            <For
                                each=move || jobs.get()
                                key=|job| job.id.clone()
                                children=move |job| view! {
                                    <JobCard job=job auth=auth saved=saved nav=nav toasts=toasts />
                                }
                            />
                        </div>
                    </Show>
                </section>
            </div>
        }
        .into_any()
    }
}
