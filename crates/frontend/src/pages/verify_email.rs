use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::system::auth::AuthHandle;

#[component]
pub fn VerifyEmailPage(auth: AuthHandle, nav: Navigator) -> impl IntoView {
    let (email, set_email) = signal(
        auth.user_untracked()
            .and_then(|u| u.email)
            .unwrap_or_default(),
    );
    let (sending, set_sending) = signal(false);
    let (message, set_message) = signal(Option::<(bool, String)>::None);

    let on_resend = move |_| {
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() {
            return;
        }
        set_sending.set(true);
        set_message.set(None);

        spawn_local(async move {
            let outcome = match auth.resend_verification(address).await {
                Ok(()) => (true, "Verification email sent! Please check your inbox.".to_string()),
                Err(e) => (false, e),
            };
            let _ = set_message.try_set(Some(outcome));
            let _ = set_sending.try_set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h2>"Verify your email"</h2>
                <p>"We've sent a verification link to your inbox."</p>
                <p class="auth-box__hint">"Check your inbox and click the link to verify your account."</p>

                {move || message.get().map(|(sent, text)| {
                    let class = if sent { "notice notice--success" } else { "notice" };
                    view! { <div class=class>{text}</div> }
                })}

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <button class="btn-primary" on:click=on_resend disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Resend verification email" }}
                </button>
                <a class="back-link" on:click=move |_| nav.go(Page::Login)>"Back to login"</a>
            </div>
        </div>
    }
}
