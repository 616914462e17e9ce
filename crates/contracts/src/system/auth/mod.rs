use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
    /// Linked sign-in identities; an empty list on sign-up means the email is taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identities: Option<Vec<serde_json::Value>>,
}

impl AuthUser {
    /// Greeting name: full name, then the local part of the email, then "User"
    pub fn display_name(&self) -> String {
        self.user_metadata
            .full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                self.email
                    .as_deref()
                    .and_then(|e| e.split('@').next())
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "User".to_string())
    }

    pub fn is_email_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }

    /// Sign-up echoed back an existing account instead of creating one
    pub fn is_already_registered(&self) -> bool {
        matches!(&self.identities, Some(ids) if ids.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: UserMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Body of `POST /resend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
}

impl ResendRequest {
    pub fn signup(email: impl Into<String>) -> Self {
        Self {
            kind: "signup".to_string(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

/// Sign-up either signs the user in directly or waits for email confirmation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignUpOutcome {
    Session(Session),
    PendingConfirmation(AuthUser),
}

/// Error payload of the identity provider; the field name varies by endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthErrorBody {
    pub fn text(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_outcomes() {
        let pending: SignUpOutcome =
            serde_json::from_str(r#"{"id": "u-1", "email": "a@b.in"}"#).unwrap();
        assert!(matches!(pending, SignUpOutcome::PendingConfirmation(_)));

        let session: SignUpOutcome = serde_json::from_str(
            r#"{"access_token": "t", "refresh_token": "r", "expires_in": 3600,
                "user": {"id": "u-1", "email_confirmed_at": "2024-01-01T00:00:00Z"}}"#,
        )
        .unwrap();
        match session {
            SignUpOutcome::Session(s) => assert!(s.user.is_email_confirmed()),
            other => panic!("expected session, got {:?}", other),
        }
    }

    #[test]
    fn test_already_registered_sign_up() {
        let taken: AuthUser =
            serde_json::from_str(r#"{"id": "u-1", "email": "a@b.in", "identities": []}"#).unwrap();
        assert!(taken.is_already_registered());

        let fresh: AuthUser = serde_json::from_str(
            r#"{"id": "u-2", "identities": [{"provider": "email"}]}"#,
        )
        .unwrap();
        assert!(!fresh.is_already_registered());

        let unknown: AuthUser = serde_json::from_str(r#"{"id": "u-3"}"#).unwrap();
        assert!(!unknown.is_already_registered());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut user: AuthUser = serde_json::from_str(r#"{"id": "u-1"}"#).unwrap();
        assert_eq!(user.display_name(), "User");
        user.email = Some("a@b.in".to_string());
        assert_eq!(user.display_name(), "a");
        user.user_metadata.full_name = Some("Asha Rao".to_string());
        assert_eq!(user.display_name(), "Asha Rao");
    }

    #[test]
    fn test_resend_body() {
        let body = serde_json::to_value(ResendRequest::signup("a@b.in")).unwrap();
        assert_eq!(body, serde_json::json!({"type": "signup", "email": "a@b.in"}));
    }
}
