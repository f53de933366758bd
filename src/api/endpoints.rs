/// Redirect target registered for the OAuth client. Google shows the
/// authorization code in the address bar after consent.
pub const REDIRECT_URI: &str = "https://www.google.com";

/// Scope granting read/write access to Device Access projects.
pub const SDM_SCOPE: &str = "https://www.googleapis.com/auth/sdm.service";

/// Base URLs of the Google services the CLI talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Partner connections consent page; `{project_id}/auth` is appended.
    pub partner_connections: String,
    /// Token endpoint used for the refresh-token grant.
    pub refresh_token_url: String,
    /// Token endpoint used for the authorization-code grant.
    pub authorization_code_url: String,
    /// SDM API root; `/enterprises/{project_id}/devices` is appended.
    pub sdm_api: String,
}

impl Endpoints {
    pub fn google() -> Self {
        Self {
            partner_connections: "https://nestservices.google.com/partnerconnections".into(),
            refresh_token_url: "https://www.googleapis.com/oauth2/v4/token".into(),
            authorization_code_url: "https://oauth2.googleapis.com/token".into(),
            sdm_api: "https://smartdevicemanagement.googleapis.com/v1".into(),
        }
    }

    /// Point every endpoint at one host, keeping the Google path layout.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            partner_connections: format!("{}/partnerconnections", base),
            refresh_token_url: format!("{}/oauth2/v4/token", base),
            authorization_code_url: format!("{}/token", base),
            sdm_api: format!("{}/v1", base),
        }
    }

    pub fn authorization_page(&self, project_id: &str) -> String {
        format!("{}/{}/auth", self.partner_connections, project_id)
    }

    pub fn devices(&self, project_id: &str) -> String {
        format!("{}/enterprises/{}/devices", self.sdm_api, project_id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::google()
    }
}
