use contracts::shared::rest::{Prefer, RestConfig};
use contracts::system::auth::{
    AuthErrorBody, AuthUser, RefreshRequest, ResendRequest, Session, SignInRequest,
    SignUpOutcome, SignUpRequest, UserMetadata,
};
use gloo_net::http::{Request, Response};

use crate::shared::api::with_headers;

async fn auth_error(response: Response, context: &str) -> String {
    let status = response.status();
    match response.json::<AuthErrorBody>().await.ok().and_then(|b| b.text()) {
        Some(text) => format!("{}: {}", context, text),
        None => format!("{}: {}", context, status),
    }
}

/// Sign in with email and password
pub async fn sign_in(config: &RestConfig, email: String, password: String) -> Result<Session, String> {
    let request = SignInRequest { email, password };

    let response = with_headers(Request::post(&config.sign_in_url()), config, None, Prefer::ReturnRepresentation)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response, "Login failed").await);
    }

    response
        .json::<Session>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new account; the confirmation mail links back to `redirect_to`
pub async fn sign_up(
    config: &RestConfig,
    email: String,
    password: String,
    full_name: String,
    redirect_to: &str,
) -> Result<SignUpOutcome, String> {
    let request = SignUpRequest {
        email,
        password,
        data: UserMetadata {
            full_name: Some(full_name),
        },
    };

    let response = with_headers(
        Request::post(&config.sign_up_url(redirect_to)),
        config,
        None,
        Prefer::ReturnRepresentation,
    )
    .json(&request)
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response, "Sign up failed").await);
    }

    response
        .json::<SignUpOutcome>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Resend the sign-up confirmation mail
pub async fn resend_verification(config: &RestConfig, email: String) -> Result<(), String> {
    let response = with_headers(Request::post(&config.resend_url()), config, None, Prefer::ReturnMinimal)
        .json(&ResendRequest::signup(email))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response, "Failed to send verification email").await);
    }

    Ok(())
}

/// Refresh the session using the refresh token
pub async fn refresh(config: &RestConfig, refresh_token: String) -> Result<Session, String> {
    let request = RefreshRequest { refresh_token };

    let response = with_headers(Request::post(&config.refresh_url()), config, None, Prefer::ReturnRepresentation)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response, "Refresh failed").await);
    }

    response
        .json::<Session>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the session on the identity provider
pub async fn sign_out(config: &RestConfig, access_token: &str) -> Result<(), String> {
    let response = with_headers(Request::post(&config.logout_url()), config, Some(access_token), Prefer::ReturnMinimal)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response, "Logout failed").await);
    }

    Ok(())
}

/// Get the user behind an access token
pub async fn get_current_user(config: &RestConfig, access_token: &str) -> Result<AuthUser, String> {
    let response = with_headers(Request::get(&config.user_url()), config, Some(access_token), Prefer::ReturnRepresentation)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(auth_error(response, "Get current user failed").await);
    }

    response
        .json::<AuthUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
