use crate::layout::Shell;
use crate::pages::company_profile::CompanyProfilePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::job_details::JobDetailsPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::saved_jobs::SavedJobsPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::routes::{Navigator, Page};
use crate::shared::config::rest_config;
use crate::shared::handles::{FilterHandle, SavedJobsHandle};
use crate::shared::toast::{ToastService, ToastStack};
use crate::system::auth::AuthHandle;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Every service is created here once and passed down explicitly
    let config = rest_config();
    let auth = AuthHandle::new(config.clone());
    let filters = FilterHandle::new();
    let saved = SavedJobsHandle::load();
    let toasts = ToastService::new();
    let nav = Navigator::new();

    nav.init_url_sync();

    let content = move || {
        let config = config.clone();
        match nav.current() {
            Page::Home => view! {
                <HomePage config=config filters=filters saved=saved auth=auth nav=nav toasts=toasts />
            }
            .into_any(),
            Page::Job(id) => view! {
                <JobDetailsPage config=config job_id=id saved=saved auth=auth nav=nav toasts=toasts />
            }
            .into_any(),
            Page::Company(id) => view! {
                <CompanyProfilePage config=config company_id=id saved=saved auth=auth nav=nav toasts=toasts />
            }
            .into_any(),
            Page::Saved => view! {
                <SavedJobsPage saved=saved auth=auth nav=nav toasts=toasts />
            }
            .into_any(),
            Page::Dashboard => view! { <DashboardPage config=config auth=auth nav=nav /> }.into_any(),
            Page::Login => view! { <LoginPage auth=auth nav=nav /> }.into_any(),
            Page::Register => view! { <RegisterPage auth=auth nav=nav toasts=toasts /> }.into_any(),
            Page::VerifyEmail => view! { <VerifyEmailPage auth=auth nav=nav /> }.into_any(),
        }
    };

    view! {
        <Shell auth=auth nav=nav toasts=toasts content=content />
        <ToastStack toasts=toasts />
    }
}
