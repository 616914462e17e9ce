use leptos::prelude::*;

use crate::routes::{Navigator, Page};
use crate::shared::components::JobCard;
use crate::shared::handles::SavedJobsHandle;
use crate::shared::toast::ToastService;
use crate::system::auth::guard::RequireAuth;
use crate::system::auth::AuthHandle;

/// Jobs bookmarked on this device. Signed-out visitors are sent to login.
#[component]
pub fn SavedJobsPage(
    saved: SavedJobsHandle,
    auth: AuthHandle,
    nav: Navigator,
    toasts: ToastService,
) -> impl IntoView {
    Effect::new(move |_| {
        if !auth.is_restoring() && !auth.is_authenticated() {
            nav.require_login(Page::Saved);
        }
    });

    view! {
        <RequireAuth auth=auth fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
            <div class="saved-jobs">
                <div class="page-heading">
                    <h1>"Saved Jobs"</h1>
                    <p>"Jobs you've bookmarked"</p>
                </div>

                <Show
                    when=move || (saved.count() > 0)
                    fallback=move || view! {
                        <div class="job-list__empty">
                            <h3>"No saved jobs yet"</h3>
                            <p>"Start saving jobs you're interested in"</p>
                            <button class="button button--primary" on:click=move |_| nav.go(Page::Home)>
                                "Browse jobs"
                            </button>
                        </div>
                    }
                >
                    <p class="job-list__count">
                        {move || {
                            let count = saved.count();
                            format!("{} {}", count, if count == 1 { "job" } else { "jobs" })
                        }}
                    </p>
                    <div class="job-list__grid">
                        <For
                            each=move || saved.jobs()
                            key=|job| job.id.clone()
                            children=move |job| view! {
                                <JobCard job=job auth=auth saved=saved nav=nav toasts=toasts />
                            }
                        />
                    </div>
                </Show>
            </div>
        </RequireAuth>
    }
}
