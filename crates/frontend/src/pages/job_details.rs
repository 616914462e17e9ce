use contracts::domain::a001_job::{Job, JobId};
use contracts::domain::a003_application::NewApplication;
use contracts::shared::rest::RestConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::shared::api;
use crate::shared::components::job_card::toggle_saved;
use crate::shared::date_utils::format_long;
use crate::shared::handles::SavedJobsHandle;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthHandle;

const DEFAULT_DESCRIPTION: &str = "Join our team and make an impact. This role offers an exciting \
    opportunity to work with cutting-edge technologies and contribute to meaningful projects.";

#[component]
pub fn JobDetailsPage(
    config: RestConfig,
    job_id: JobId,
    saved: SavedJobsHandle,
    auth: AuthHandle,
    nav: Navigator,
    toasts: ToastService,
) -> impl IntoView {
    let job = RwSignal::new(Option::<Job>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (has_applied, set_has_applied) = signal(false);
    let (applying, set_applying) = signal(false);
    let config = StoredValue::new(config);
    let job_id = StoredValue::new(job_id);

    // Reruns when the session changes so the applied flag follows the user
    Effect::new(move |_| {
        let user = auth.user();
        let token = auth.access_token_untracked();
        let config = config.get_value();
        let id = job_id.get_value();

        spawn_local(async move {
            let _ = set_loading.try_set(true);
            let _ = set_error.try_set(None);
            match api::fetch_job(&config, &id).await {
                Ok(Some(found)) => {
                    let _ = job.try_set(Some(found));
                    if let (Some(user), Some(token)) = (user, token) {
                        match api::has_applied(&config, &id, &user.id, &token).await {
                            Ok(applied) => {
                                let _ = set_has_applied.try_set(applied);
                            }
                            Err(e) => log::warn!("Could not check application status: {}", e),
                        }
                    }
                }
                Ok(None) => {
                    let _ = set_error.try_set(Some("Job not found".to_string()));
                }
                Err(e) => {
                    log::error!("Error fetching job: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let is_saved = move || saved.is_saved(&job_id.get_value());

    let on_save_click = move |_| {
        if let Some(current) = job.get_untracked() {
            toggle_saved(&current, auth, saved, nav, toasts);
        }
    };

    let on_apply = move |_| {
        let Some(user) = auth.user_untracked() else {
            nav.require_login(Page::Job(job_id.get_value()));
            return;
        };
        let Some(token) = auth.access_token_untracked() else {
            nav.require_login(Page::Job(job_id.get_value()));
            return;
        };
        if has_applied.get_untracked() || applying.get_untracked() {
            return;
        }

        set_applying.set(true);
        let config = config.get_value();
        let application = NewApplication::new(job_id.get_value(), user.id);

        spawn_local(async move {
            match api::submit_application(&config, &application, &token).await {
                Ok(()) => {
                    let _ = set_has_applied.try_set(true);
                    toasts.success("Application submitted successfully!");
                }
                Err(e) => {
                    log::error!("Error applying: {}", e);
                    toasts.error("Failed to submit application. Please try again.");
                }
            }
            let _ = set_applying.try_set(false);
        });
    };

    let apply_class = move || {
        if has_applied.get() {
            "apply-button apply-button--done"
        } else if applying.get() {
            "apply-button apply-button--busy"
        } else {
            "apply-button"
        }
    };

    let apply_label = move || {
        if has_applied.get() {
            "✓ Applied"
        } else if applying.get() {
            "Applying..."
        } else {
            "Apply now"
        }
    };

    move || {
        if loading.get() {
            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
        }

        let Some(current) = job.get() else {
            return view! {
                <div class="not-found">
                    <h2>"Job Not Found"</h2>
                    <p>{error.get().unwrap_or_default()}</p>
                    <button class="button button--primary" on:click=move |_| nav.go(Page::Home)>
                        "Back to Jobs"
                    </button>
                </div>
            }
            .into_any();
        };

        let company_id = current.company_id.clone();
        view! {
            <div class="job-details">
                <button class="back-link" on:click=move |_| nav.go(Page::Home)>
                    "← Back"
                </button>

                <div class="job-details__header card">
                    <div class="job-details__heading">
                        <div>
                            <h1>{current.title.clone()}</h1>
                            <a
                                class="job-details__company"
                                on:click=move |_| {
                                    if let Some(id) = company_id.clone() {
                                        nav.go(Page::Company(id));
                                    }
                                }
                            >
                                {current.display_company().to_string()}
                            </a>
                            <div class="job-details__tags">
                                <span class="tag">{current.location.clone()}</span>
                                <span class="tag">{current.work_mode.clone()}</span>
                                <span class="tag">{current.job_type.clone()}</span>
                            </div>
                        </div>
                        <button
                            class="job-details__save"
                            aria-label=move || if is_saved() { "Unsave job" } else { "Save job" }
                            on:click=on_save_click
                        >
                            {move || if is_saved() { icon("bookmark-solid") } else { icon("bookmark") }}
                        </button>
                    </div>

                    <div class="job-details__salary">
                        <p class="job-details__label">"Annual Salary"</p>
                        <p class="job-details__salary-value">
                            {format!("₹{} - {} LPA", current.salary_min_lpa, current.salary_max_lpa)}
                        </p>
                    </div>

                    <button
                        class=apply_class
                        disabled=move || has_applied.get() || applying.get()
                        on:click=on_apply
                    >
                        {apply_label}
                    </button>

                    <div class="job-details__facts">
                        {current.experience_yrs.clone().map(|exp| view! {
                            <div>
                                <p class="job-details__label">"Experience"</p>
                                <p class="job-details__fact">{exp}</p>
                            </div>
                        })}
                        <div>
                            <p class="job-details__label">"Posted"</p>
                            <p class="job-details__fact">{format_long(&current.posted_date)}</p>
                        </div>
                    </div>
                </div>

                <div class="job-details__description card">
                    <h2>"Description"</h2>
                    <p>{current.description.clone().unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())}</p>
                </div>
            </div>
        }
        .into_any()
    }
}
