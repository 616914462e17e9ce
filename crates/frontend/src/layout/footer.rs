use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer data-zone="footer" class="app-footer">
            <p class="app-footer__brand">"HireSync"</p>
            <p class="app-footer__copy">{format!("© {} HireSync. All rights reserved.", year)}</p>
        </footer>
    }
}
