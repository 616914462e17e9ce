use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::system::auth::AuthHandle;

/// Friendlier text for the identity provider's sign-in errors
fn login_error_message(raw: &str) -> String {
    if raw.contains("Invalid login credentials") {
        "Invalid email or password. Please try again.".to_string()
    } else if raw.contains("Email not confirmed") {
        "Please verify your email before signing in.".to_string()
    } else if raw.is_empty() {
        "Failed to login".to_string()
    } else {
        raw.to_string()
    }
}

#[component]
pub fn LoginPage(auth: AuthHandle, nav: Navigator) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match auth.do_login(email_val, password_val).await {
                Ok(user) if !user.is_email_confirmed() => {
                    let _ = auth.do_logout().await;
                    let _ = set_error_message.try_set(Some(
                        "Please verify your email before signing in. Check your inbox for the verification link."
                            .to_string(),
                    ));
                }
                Ok(_) => nav.after_login(),
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    let _ = set_error_message.try_set(Some(login_error_message(&e)));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h2>"Sign in"</h2>
                <p class="auth-box__switch">
                    "or "
                    <a on:click=move |_| nav.go(Page::Register)>"create account"</a>
                </p>

                <form on:submit=on_submit>
                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message("Login failed: Invalid login credentials"),
            "Invalid email or password. Please try again."
        );
        assert_eq!(
            login_error_message("Login failed: Email not confirmed"),
            "Please verify your email before signing in."
        );
        assert_eq!(login_error_message("Failed to send request: offline"), "Failed to send request: offline");
        assert_eq!(login_error_message(""), "Failed to login");
    }
}
