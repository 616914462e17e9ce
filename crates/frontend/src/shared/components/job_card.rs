use contracts::domain::a001_job::Job;
use contracts::shared::saved_jobs::ToggleOutcome;
use leptos::prelude::*;

use crate::routes::{Navigator, Page};
use crate::shared::date_utils::format_relative;
use crate::shared::handles::SavedJobsHandle;
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthHandle;

/// Save or unsave a job from any listing. Signed-out users are sent to login.
pub fn toggle_saved(
    job: &Job,
    auth: AuthHandle,
    saved: SavedJobsHandle,
    nav: Navigator,
    toasts: ToastService,
) {
    if !auth.is_authenticated() {
        nav.require_login(nav.current_untracked());
        return;
    }

    match saved.toggle(job) {
        Ok(ToggleOutcome::Saved) => toasts.success("Job saved successfully"),
        Ok(ToggleOutcome::Unsaved) => {}
        Err(e) => toasts.error(format!("Could not update saved jobs: {}", e)),
    }
}

#[component]
pub fn JobCard(
    job: Job,
    auth: AuthHandle,
    saved: SavedJobsHandle,
    nav: Navigator,
    toasts: ToastService,
) -> impl IntoView {
    let job = StoredValue::new(job);
    let (job_id, company_id) = job.with_value(|j| (j.id.clone(), j.company_id.clone()));
    let is_saved = {
        let job_id = job_id.clone();
        move || saved.is_saved(&job_id)
    };
    let is_saved_label = is_saved.clone();

    let open_job = move |_| nav.go(Page::Job(job_id.clone()));

    let open_company = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(id) = company_id.clone() {
            nav.go(Page::Company(id));
        }
    };

    let on_save_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        job.with_value(|j| toggle_saved(j, auth, saved, nav, toasts));
    };

    job.with_value(|j| {
        view! {
            <div class="job-card" on:click=open_job>
                <div class="job-card__main">
                    <div class="job-card__heading">
                        <h3 class="job-card__title">{j.title.clone()}</h3>
                        <span class="job-card__salary">{j.salary_label()}</span>
                    </div>
                    <a class="job-card__company" on:click=open_company>
                        {j.display_company().to_string()}
                    </a>
                    {j.description.clone().map(|d| view! { <p class="job-card__description">{d}</p> })}
                    <div class="job-card__meta">
                        <span>{icon("map-pin")}{j.location.clone()}</span>
                        <span>"•"</span>
                        <span>{j.work_mode.clone()}</span>
                        <span>"•"</span>
                        <span>{icon("briefcase")}{j.job_type.clone()}</span>
                        {j.experience_yrs.clone().map(|exp| view! {
                            <span>"•"</span>
                            <span>{exp}</span>
                        })}
                    </div>
                </div>
                <div class="job-card__side">
                    <button
                        class="job-card__save"
                        aria-label=move || if is_saved_label() { "Unsave job" } else { "Save job" }
                        on:click=on_save_click
                    >
                        {move || if is_saved() { icon("bookmark-solid") } else { icon("bookmark") }}
                    </button>
                    <span class="job-card__date">{format_relative(&j.posted_date)}</span>
                </div>
            </div>
        }
    })
}
