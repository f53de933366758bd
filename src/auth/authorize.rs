use reqwest::Url;

use crate::api::endpoints::{Endpoints, REDIRECT_URI, SDM_SCOPE};
use crate::auth::credentials::ClientConfig;
use crate::auth::token::TokenSet;
use crate::error::AppError;

/// Build the partner-connections consent URL the operator opens in a browser.
///
/// `access_type=offline` together with `prompt=consent` makes Google issue a
/// refresh token even when the account already granted access before.
pub fn authorization_url(config: &ClientConfig, endpoints: &Endpoints) -> Result<Url, AppError> {
    let page = endpoints.authorization_page(&config.project_id);
    Url::parse_with_params(
        &page,
        &[
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", REDIRECT_URI),
            ("response_type", "code"),
            ("scope", SDM_SCOPE),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .map_err(|e| AppError::Config(format!("Invalid authorization URL {}: {}", page, e)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    /// The exchange produced a refresh token the reporter can use.
    Complete { refresh_token: String },
    /// Google answered without a refresh token; consent has to be granted again.
    MissingRefreshToken,
}

impl AuthorizationOutcome {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        match tokens.refresh_token.as_deref() {
            Some(rt) if !rt.is_empty() => AuthorizationOutcome::Complete {
                refresh_token: rt.to_string(),
            },
            _ => AuthorizationOutcome::MissingRefreshToken,
        }
    }
}
