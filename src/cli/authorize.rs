use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use reqwest::Url;

use crate::api::client::SdmApi;
use crate::auth::authorize::{authorization_url, AuthorizationOutcome};
use crate::auth::credentials::ENV_REFRESH_TOKEN;
use crate::error::AppError;

const RULE: &str = "------------------------------------------------------------";
pub const NO_REFRESH_TOKEN_WARNING: &str =
    "WARNING: No refresh_token returned. Did you click 'Allow' on the consent screen?";

pub fn write_instructions<W: Write>(out: &mut W, url: &Url) -> Result<(), AppError> {
    writeln!(out, "--- Google OAuth2 Setup ---")?;
    writeln!(out)?;
    writeln!(out, "1. Go to the following URL in your browser:")?;
    writeln!(
        out,
        "   (You may see a warning about the app not being verified - proceed anyway if it's your app)"
    )?;
    writeln!(out)?;
    writeln!(out, "{}", url)?;
    writeln!(out)?;
    writeln!(out, "2. Log in with your Google account.")?;
    writeln!(
        out,
        "3. You will be redirected to google.com with a ?code=... in the URL."
    )?;
    writeln!(
        out,
        "4. Copy the entire 'code' value from the URL (everything after code= and before any other & symbol)."
    )?;
    out.flush()?;
    Ok(())
}

/// Ask the operator for the pasted code. Falls back to a plain line read when
/// stdin is not a terminal.
pub fn read_code() -> Result<String, AppError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let code: String = Input::new()
            .with_prompt("Enter the authorization code here")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;
        return Ok(code.trim().to_string());
    }

    eprint!("Enter the authorization code here: ");
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Exchange the code and print the resulting tokens.
///
/// Returns `None` when no code was entered.
pub async fn complete<W: Write>(
    api: &SdmApi,
    code: &str,
    out: &mut W,
) -> Result<Option<AuthorizationOutcome>, AppError> {
    let code = code.trim();
    if code.is_empty() {
        writeln!(out, "No code entered. Exiting.")?;
        return Ok(None);
    }

    writeln!(out)?;
    writeln!(out, "Exchanging code for tokens...")?;

    let tokens = match api.exchange_authorization_code(code).await {
        Ok(tokens) => tokens,
        Err(err) => {
            writeln!(out)?;
            writeln!(out, "ERROR: Failed to retrieve tokens.")?;
            return Err(err);
        }
    };

    writeln!(out)?;
    writeln!(out, "SUCCESS! Here are your tokens:")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&tokens)?)?;
    writeln!(out, "{}", RULE)?;

    let outcome = AuthorizationOutcome::from_tokens(&tokens);
    match &outcome {
        AuthorizationOutcome::Complete { refresh_token } => {
            writeln!(out)?;
            writeln!(
                out,
                "IMPORTANT: Copy the 'refresh_token' above and store it as {} in your .env file:",
                ENV_REFRESH_TOKEN
            )?;
            writeln!(out, "{}=\"{}\"", ENV_REFRESH_TOKEN, refresh_token)?;
        }
        AuthorizationOutcome::MissingRefreshToken => {
            tracing::warn!("token response did not include a refresh_token");
            writeln!(out)?;
            writeln!(out, "{}", NO_REFRESH_TOKEN_WARNING)?;
            writeln!(
                out,
                "Note: Refresh tokens are only returned on the first authorization or if access_type=offline and prompt=consent."
            )?;
        }
    }

    Ok(Some(outcome))
}

/// Interactive setup: show the consent URL, read the code, exchange it.
pub async fn run<W: Write>(
    api: &SdmApi,
    out: &mut W,
) -> Result<Option<AuthorizationOutcome>, AppError> {
    let url = authorization_url(api.config(), api.endpoints())?;
    write_instructions(out, &url)?;

    let code = read_code()?;
    complete(api, &code, out).await
}
