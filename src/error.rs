#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication failed: {message}")]
    Auth {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Auth { .. } => 3,
            _ => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Auth { .. } => "auth",
            AppError::Api { .. } => "api",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Http(_) => "http",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }

    /// Raw response body returned by the server, if the failure came from one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            AppError::Auth { body, .. } | AppError::Api { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::json!({
            "error": self.error_type(),
            "message": self.to_string(),
        });
        if let Some(status) = self.http_status() {
            obj["status"] = serde_json::json!(status);
        }
        if let Some(body) = self.response_body() {
            obj["response"] = serde_json::json!(body);
        }
        obj
    }

    fn http_status(&self) -> Option<u16> {
        match self {
            AppError::Auth { status, .. } | AppError::Api { status, .. } => *status,
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::Config("PROJECT_ID is not set".into()).exit_code(), 2);
        let auth = AppError::Auth {
            message: "401 Unauthorized".into(),
            status: Some(401),
            body: None,
        };
        assert_eq!(auth.exit_code(), 3);
        assert_eq!(AppError::InvalidInput("bad".into()).exit_code(), 1);
    }

    #[test]
    fn test_to_json_includes_status_and_body() {
        let err = AppError::Auth {
            message: "400 Bad Request".into(),
            status: Some(400),
            body: Some(r#"{"error":"invalid_grant"}"#.into()),
        };
        let json = err.to_json();
        assert_eq!(json["error"], "auth");
        assert_eq!(json["status"], 400);
        assert_eq!(json["response"], r#"{"error":"invalid_grant"}"#);
        assert_eq!(json["message"], "Authentication failed: 400 Bad Request");
    }

    #[test]
    fn test_to_json_without_response() {
        let json = AppError::Config("OAUTH_CLIENT_ID is not set".into()).to_json();
        assert_eq!(json["error"], "config");
        assert!(json.get("status").is_none());
        assert!(json.get("response").is_none());
    }
}
