use crate::errors::ServerError;
use serde::Deserialize;
use url::Url;

/// Provider endpoints plus our client registration. Defaults target
/// Google; any OpenID-style provider with the same three endpoints fits.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://openidconnect.googleapis.com/v1/userinfo".to_string(),
        }
    }
}

/// What we learn about the signer-in. Email is the guest key; the rest
/// is display material.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

pub struct OAuthClient {
    cfg: OAuthConfig,
}

impl OAuthClient {
    pub fn new(cfg: OAuthConfig) -> Self {
        Self { cfg }
    }

    /// The provider redirect that starts the sign-in dance. `state` is
    /// our single-use CSRF token, echoed back on the callback.
    pub fn authorize_url(&self, state: &str) -> Result<String, ServerError> {
        let mut url = Url::parse(&self.cfg.auth_url)
            .map_err(|e| ServerError::AuthError(format!("bad auth url: {e}")))?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.cfg.client_id)
            .append_pair("redirect_uri", &self.cfg.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid email profile")
            .append_pair("state", state);

        Ok(url.to_string())
    }

    /// Trade the callback `code` for an identity assertion: POST the
    /// token endpoint, then GET userinfo with the bearer token.
    pub fn exchange_code(&self, code: &str) -> Result<UserProfile, ServerError> {
        let client = reqwest::blocking::Client::new();

        let resp = client
            .post(&self.cfg.token_url)
            .form(&[
                ("client_id", self.cfg.client_id.as_str()),
                ("client_secret", self.cfg.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.cfg.redirect_uri.as_str()),
            ])
            .send()
            .map_err(|e| ServerError::AuthError(format!("token exchange failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            eprintln!("token endpoint returned {status}: {text}");
            return Err(ServerError::AuthError("Sign-in could not be completed".into()));
        }

        let token: TokenResponse = resp
            .json()
            .map_err(|e| ServerError::AuthError(format!("bad token response: {e}")))?;

        let resp = client
            .get(&self.cfg.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .map_err(|e| ServerError::AuthError(format!("userinfo fetch failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ServerError::AuthError("Sign-in could not be completed".into()));
        }

        let profile: UserProfile = resp
            .json()
            .map_err(|e| ServerError::AuthError(format!("bad userinfo response: {e}")))?;

        if profile.email.trim().is_empty() {
            return Err(ServerError::AuthError("provider returned no email".into()));
        }

        Ok(profile)
    }
}
