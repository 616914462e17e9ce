use contracts::domain::a001_job::Job;
use contracts::shared::filter::FilterKey;
use contracts::shared::rest::RestConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::Navigator;
use crate::shared::api;
use crate::shared::components::{JobCard, JobFilterPanel};
use crate::shared::handles::{FilterHandle, SavedJobsHandle};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthHandle;

/// Landing page: search box, filter sidebar and the matching jobs.
///
/// The list is refetched whenever the filter model changes. Responses are
/// numbered and only the latest one is shown, so a slow reply to an older
/// query cannot overwrite a newer result.
#[component]
pub fn HomePage(
    config: RestConfig,
    filters: FilterHandle,
    saved: SavedJobsHandle,
    auth: AuthHandle,
    nav: Navigator,
    toasts: ToastService,
) -> impl IntoView {
    let (jobs, set_jobs) = signal(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let query = filters.query();
        let config = config.clone();
        let Some(request_id) = request_seq.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_jobs(&config, &query).await;
            if request_seq.try_get_value() != Some(request_id) {
                log::debug!("Dropping stale job list response #{}", request_id);
                return;
            }
            match result {
                Ok(list) => {
                    log::debug!("Loaded {} jobs", list.len());
                    let _ = set_jobs.try_set(list);
                }
                Err(e) => {
                    log::error!("Error fetching jobs: {}", e);
                    let _ = set_jobs.try_set(Vec::new());
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">"Find your next role"</h1>
                <p class="hero__subtitle">"Discover opportunities at top companies"</p>
                <div class="search-bar">
                    {icon("search")}
                    <input
                        type="text"
                        class="search-bar__input"
                        placeholder="Search by job title or company..."
                        prop:value=move || filters.state().search_query
                        on:input=move |ev| {
                            filters.update_filter(FilterKey::SearchQuery, event_target_value(&ev))
                        }
                    />
                    <Show when=move || !filters.state().search_query.is_empty()>
                        <button
                            class="search-bar__clear"
                            aria-label="Clear search"
                            on:click=move |_| filters.update_filter(FilterKey::SearchQuery, "")
                        >
                            {icon("x")}
                        </button>
                    </Show>
                </div>
            </section>

            <div class="home__content">
                <JobFilterPanel filters=filters />

                <section class="job-list">
                    {move || {
                        if loading.get() {
                            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
                        }
                        if let Some(e) = error.get() {
                            return view! {
                                <div class="job-list__error">
                                    <p>"Error loading jobs"</p>
                                    <p class="job-list__error-detail">{e}</p>
                                </div>
                            }
                            .into_any();
                        }
                        let count = jobs.with(|j| j.len());
                        if count == 0 {
                            return view! {
                                <div class="job-list__empty">
                                    <h3>"No jobs found"</h3>
                                    <p>"Try adjusting your filters"</p>
                                </div>
                            }
                            .into_any();
                        }
                        view! {
                            <p class="job-list__count">
                                {format!("{} {}", count, if count == 1 { "job" } else { "jobs" })}
                            </p>
                            <div class="job-list__grid">
                                <For
                                    each=move || jobs.get()
                                    key=|job| job.id.clone()
                                    children=move |job| view! {
                                        <JobCard job=job auth=auth saved=saved nav=nav toasts=toasts />
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }}
                </section>
            </div>
        </div>
    }
}
