use std::env;
use std::fmt;

use crate::error::AppError;

pub const ENV_PROJECT_ID: &str = "PROJECT_ID";
pub const ENV_CLIENT_ID: &str = "OAUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "OAUTH_CLIENT_SECRET";
pub const ENV_REFRESH_TOKEN: &str = "OAUTH_REFRESH_TOKEN";

/// OAuth client registration and Device Access project shared by both flows.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub project_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Everything the reporter needs to mint an access token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client: ClientConfig,
    pub refresh_token: String,
}

fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::Config(format!("{} is not set", key))),
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            project_id: required(&lookup, ENV_PROJECT_ID)?,
            client_id: required(&lookup, ENV_CLIENT_ID)?,
            client_secret: required(&lookup, ENV_CLIENT_SECRET)?,
        })
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = ClientConfig::from_lookup(&lookup)?;
        let refresh_token = required(&lookup, ENV_REFRESH_TOKEN)?;
        Ok(Self {
            client,
            refresh_token,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("project_id", &self.project_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client", &self.client)
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}
