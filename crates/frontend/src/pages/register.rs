use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{Navigator, Page};
use crate::shared::config::app_origin;
use crate::shared::toast::ToastService;
use crate::system::auth::{AuthHandle, RegisterOutcome};

const MIN_PASSWORD_LEN: usize = 6;

/// Checks done before anything is sent
fn validate_registration(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    if password != confirm_password {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

#[component]
pub fn RegisterPage(auth: AuthHandle, nav: Navigator, toasts: ToastService) -> impl IntoView {
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let password_val = password.get_untracked();
        if let Err(e) = validate_registration(&password_val, &confirm_password.get_untracked()) {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        let full_name_val = full_name.get_untracked();
        let email_val = email.get_untracked();
        let redirect_to = format!("{}/?page=login", app_origin());

        spawn_local(async move {
            match auth
                .do_register(full_name_val, email_val, password_val, redirect_to)
                .await
            {
                Ok(RegisterOutcome::AlreadyRegistered) => {
                    let _ = set_error_message.try_set(Some(
                        "This email is already registered. Please login instead.".to_string(),
                    ));
                }
                Ok(RegisterOutcome::PendingConfirmation) => {
                    toasts.success("Registration successful! Check your email to verify your account.");
                    nav.go(Page::VerifyEmail);
                }
                Ok(RegisterOutcome::SignedIn) => {
                    toasts.success("Registration successful!");
                    nav.go(Page::Home);
                }
                Err(e) => {
                    log::warn!("Sign up failed: {}", e);
                    let _ = set_error_message.try_set(Some(e));
                }
            }
            let _ = set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h2>"Create account"</h2>
                <p class="auth-box__switch">
                    "Already have an account? "
                    <a on:click=move |_| nav.go(Page::Login)>"Sign in"</a>
                </p>

                <form on:submit=on_submit>
                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="fullName">"Full Name"</label>
                        <input
                            type="text"
                            id="fullName"
                            placeholder="John Doe"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            required
                        />
                    </div>

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
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="new-password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="confirmPassword">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirmPassword"
                            autocomplete="new-password"
                            placeholder="••••••••"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Creating account..." } else { "Create account" }}
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
    fn test_validate_registration() {
        assert_eq!(validate_registration("secret1", "secret2"), Err("Passwords do not match"));
        assert_eq!(
            validate_registration("abc", "abc"),
            Err("Password must be at least 6 characters")
        );
        assert_eq!(validate_registration("abcdef", "abcdef"), Ok(()));
    }
}
