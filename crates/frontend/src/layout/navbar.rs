//! Top navigation bar: brand, page links, signed-in user and sign-out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::shared::toast::ToastService;
use crate::system::auth::AuthHandle;

#[component]
pub fn Navbar(auth: AuthHandle, nav: Navigator, toasts: ToastService) -> impl IntoView {
    let (logging_out, set_logging_out) = signal(false);

    let logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        set_logging_out.set(true);

        spawn_local(async move {
            match auth.do_logout().await {
                Ok(()) => {
                    nav.go(Page::Home);
                    toasts.success("Signed out successfully");
                }
                Err(e) => {
                    log::error!("Logout error: {}", e);
                    toasts.error("Failed to sign out. Please try again.");
                }
            }
            set_logging_out.set(false);
        });
    };

    let link_class = move |page: Page| {
        move || {
            if nav.current() == page {
                "navbar__link navbar__link--active"
            } else {
                "navbar__link"
            }
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" on:click=move |_| nav.go(Page::Home)>
                "HireSync"
            </a>

            <div class="navbar__links">
                <a class=link_class(Page::Home) on:click=move |_| nav.go(Page::Home)>
                    "Jobs"
                </a>
                <a class=link_class(Page::Saved) on:click=move |_| nav.go(Page::Saved)>
                    "Saved"
                </a>

                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || view! {
                        <a class="navbar__signin" on:click=move |_| nav.go(Page::Login)>
                            "Sign in"
                        </a>
                    }
                >
                    <a class=link_class(Page::Dashboard) on:click=move |_| nav.go(Page::Dashboard)>
                        "Dashboard"
                    </a>
                    <div class="navbar__user">
                        <span class="navbar__user-name">
                            {move || auth.user().map(|u| u.display_name()).unwrap_or_default()}
                        </span>
                        <button
                            class="navbar__signout"
                            on:click=logout
                            disabled=move || logging_out.get()
                        >
                            {move || if logging_out.get() { "Signing out..." } else { "Sign out" }}
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
