use std::time::Duration;

use serde::Deserialize;

use super::endpoints::{Endpoints, REDIRECT_URI};
use crate::auth::credentials::ClientConfig;
use crate::auth::token::{AccessToken, TokenSet};
use crate::error::AppError;
use crate::models::device::Device;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct DeviceListResponse {
    #[serde(default)]
    devices: Vec<serde_json::Value>,
}

/// Client for the Google OAuth token endpoints and the SDM device API.
pub struct SdmApi {
    client: reqwest::Client,
    config: ClientConfig,
    endpoints: Endpoints,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

impl SdmApi {
    pub fn new(config: ClientConfig, endpoints: Endpoints) -> Result<Self, AppError> {
        Ok(Self {
            client: build_http_client()?,
            config,
            endpoints,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// POST a form to a token endpoint and decode the token response.
    async fn request_token(&self, url: &str, form: &[(&str, &str)]) -> Result<TokenSet, AppError> {
        let grant_type = form
            .iter()
            .find(|(k, _)| *k == "grant_type")
            .map(|(_, v)| *v)
            .unwrap_or_default();
        tracing::debug!(%url, grant_type, "POST token request");

        let response = self.client.post(url).form(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), %body, "token request rejected");
            return Err(AppError::Auth {
                message: format!("{} returned {}", url, status),
                status: Some(status.as_u16()),
                body: Some(body),
            });
        }

        let body = response.text().await?;
        let tokens: TokenSet = serde_json::from_str(&body)?;
        tracing::debug!(?tokens, "token request succeeded");
        Ok(tokens)
    }

    /// Exchange the long-lived refresh token for a fresh access token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<AccessToken, AppError> {
        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];
        let tokens = self
            .request_token(&self.endpoints.refresh_token_url, &form)
            .await?;

        if tokens.access_token.is_empty() {
            return Err(AppError::Api {
                message: "Token response did not contain an access_token".into(),
                status: None,
                body: None,
            });
        }
        Ok(AccessToken::new(tokens.access_token))
    }

    /// Exchange an authorization code pasted by the operator for a token set.
    pub async fn exchange_authorization_code(&self, code: &str) -> Result<TokenSet, AppError> {
        if code.is_empty() {
            return Err(AppError::InvalidInput("Authorization code is required".into()));
        }
        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", REDIRECT_URI),
        ];
        self.request_token(&self.endpoints.authorization_code_url, &form)
            .await
    }

    /// List every device the project can see. Records that fail to decode are skipped.
    pub async fn list_devices(&self, token: &AccessToken) -> Result<Vec<Device>, AppError> {
        let url = self.endpoints.devices(&self.config.project_id);
        tracing::debug!(%url, "GET device list");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.as_str())
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                message: format!("{}: {}", status, body),
                status: Some(status.as_u16()),
                body: Some(body),
            });
        }

        let list: DeviceListResponse = response.json().await?;
        tracing::debug!(count = list.devices.len(), "received device list");

        let devices = list
            .devices
            .iter()
            .filter_map(|value| {
                let device = Device::from_json(value);
                if device.is_none() {
                    tracing::warn!(record = %value, "skipping malformed device record");
                }
                device
            })
            .collect();
        Ok(devices)
    }
}
