/// Connection settings of the hosted backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Project URL, e.g. "https://xyz.supabase.co"
    pub url: String,
    /// Public (anon) API key
    pub anon_key: String,
}

/// Value of the `Prefer` header on write requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefer {
    ReturnRepresentation,
    ReturnMinimal,
}

impl Prefer {
    pub fn header_value(&self) -> &'static str {
        match self {
            Prefer::ReturnRepresentation => "return=representation",
            Prefer::ReturnMinimal => "return=minimal",
        }
    }
}

impl RestConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    pub fn rest_endpoint(&self) -> String {
        format!("{}/rest/v1", self.url)
    }

    pub fn auth_endpoint(&self) -> String {
        format!("{}/auth/v1", self.url)
    }

    /// Headers for every request. The user's access token is sent as the
    /// bearer when signed in, the anon key otherwise.
    pub fn headers(&self, access_token: Option<&str>, prefer: Prefer) -> Vec<(&'static str, String)> {
        let bearer = access_token.unwrap_or(&self.anon_key);
        vec![
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", bearer)),
            ("Content-Type", "application/json".to_string()),
            ("Prefer", prefer.header_value().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_strip_trailing_slash() {
        let config = RestConfig::new("https://demo.supabase.co/", "anon");
        assert_eq!(config.rest_endpoint(), "https://demo.supabase.co/rest/v1");
        assert_eq!(config.auth_endpoint(), "https://demo.supabase.co/auth/v1");
        assert!(config.is_configured());
        assert!(!RestConfig::new("", "").is_configured());
    }

    #[test]
    fn test_headers_use_session_token() {
        let config = RestConfig::new("https://demo.supabase.co", "anon");
        let anon = config.headers(None, Prefer::ReturnRepresentation);
        assert!(anon.contains(&("Authorization", "Bearer anon".to_string())));

        let user = config.headers(Some("jwt"), Prefer::ReturnMinimal);
        assert!(user.contains(&("apikey", "anon".to_string())));
        assert!(user.contains(&("Authorization", "Bearer jwt".to_string())));
        assert!(user.contains(&("Prefer", "return=minimal".to_string())));
    }
}
