use contracts::domain::a003_application::{Application, ApplicationStats};
use contracts::enums::ApplicationStatus;
use contracts::shared::rest::RestConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::shared::api;
use crate::shared::date_utils::format_short;
use crate::system::auth::guard::RequireAuth;
use crate::system::auth::AuthHandle;

fn status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "status-badge status-badge--applied",
        ApplicationStatus::Shortlisted => "status-badge status-badge--shortlisted",
        ApplicationStatus::InterviewScheduled => "status-badge status-badge--interview",
        ApplicationStatus::Rejected => "status-badge status-badge--rejected",
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}

/// Applications of the signed-in user with per-status counts
#[component]
pub fn DashboardPage(config: RestConfig, auth: AuthHandle, nav: Navigator) -> impl IntoView {
    let (applications, set_applications) = signal(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if auth.is_restoring() {
            return;
        }
        let (Some(user), Some(token)) = (auth.user(), auth.access_token_untracked()) else {
            nav.require_login(Page::Dashboard);
            return;
        };
        let config = config.clone();

        spawn_local(async move {
            let _ = set_loading.try_set(true);
            match api::fetch_applications(&config, &user.id, &token).await {
                Ok(list) => {
                    let _ = set_applications.try_set(list);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    log::error!("Error fetching applications: {}", e);
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let stats = Memo::new(move |_| applications.with(|a| ApplicationStats::from_applications(a)));
    let welcome = move || {
        auth.user()
            .map(|u| u.display_name())
            .unwrap_or_else(|| "User".to_string())
    };

    let content = move || {
        if loading.get() {
            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <div class="card error-message">{e}</div> }.into_any();
        }

        view! {
            <div class="stats-grid">
                <StatCard label="Total Applications" value=Signal::derive(move || stats.get().total) />
                <StatCard
                    label=ApplicationStatus::Applied.display_name()
                    value=Signal::derive(move || stats.get().count(ApplicationStatus::Applied))
                />
                <StatCard
                    label=ApplicationStatus::Shortlisted.display_name()
                    value=Signal::derive(move || stats.get().count(ApplicationStatus::Shortlisted))
                />
                <StatCard
                    label=ApplicationStatus::InterviewScheduled.display_name()
                    value=Signal::derive(move || stats.get().count(ApplicationStatus::InterviewScheduled))
                />
            </div>

            <div class="applications card">
                <h2 class="applications__title">"My Applications"</h2>
                <Show
                    when=move || applications.with(|a| !a.is_empty())
                    fallback=move || view! {
                        <div class="applications__empty">
                            <p>"You haven't applied to any jobs yet"</p>
                            <button class="button button--primary" on:click=move |_| nav.go(Page::Home)>
                                "Browse jobs"
                            </button>
                        </div>
                    }
                >
                    <table class="applications__table">
                        <thead>
                            <tr>
                                <th>"Job Title"</th>
                                <th>"Company"</th>
                                <th>"Applied On"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || applications.get()
                                key=|app| app.id.clone()
                                children=move |app| {
                                    let job_id = app.job_id.clone();
                                    view! {
                                        <tr>
                                            <td>{app.job_title().to_string()}</td>
                                            <td>{app.company_name().to_string()}</td>
                                            <td>{format_short(&app.applied_at)}</td>
                                            <td>
                                                <span class=status_class(app.status)>{app.status.code()}</span>
                                            </td>
                                            <td>
                                                <a on:click=move |_| nav.go(Page::Job(job_id.clone()))>"View Job"</a>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <RequireAuth auth=auth fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
            <div class="dashboard">
                <div class="page-heading">
                    <h1>{move || format!("Welcome back, {}!", welcome())}</h1>
                    <p>"Track your job applications"</p>
                </div>
                {content}
            </div>
        </RequireAuth>
    }
}
