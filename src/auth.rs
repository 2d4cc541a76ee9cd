use crate::constants::{BLOCK_HEADER, CLIENT_ID_KEY, CLIENT_SECRET_KEY, PREVIEW_CHARS};
use crate::error::{Error, Result};
use oauth2::{ClientId, ClientSecret};
use std::io::{BufRead, Write};

/// A Google OAuth2 client id/secret pair as entered by the user.
///
/// Both halves are trimmed and non-empty. The secret is kept in an
/// `oauth2::ClientSecret`, so `Debug` output never shows it.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: ClientId,
    client_secret: ClientSecret,
}

impl Credentials {
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        let client_id = client_id.trim();
        let client_secret = client_secret.trim();

        if client_id.is_empty() {
            return Err(Error::MissingCredential("Client ID"));
        }
        if client_secret.is_empty() {
            return Err(Error::MissingCredential("Client Secret"));
        }

        Ok(Self {
            client_id: ClientId::new(client_id.to_string()),
            client_secret: ClientSecret::new(client_secret.to_string()),
        })
    }

    pub fn client_id(&self) -> &str {
        self.client_id.as_str()
    }

    /// The text appended to the `.env` file. Starts with a blank line so the
    /// block is separated from whatever precedes it.
    pub fn env_block(&self) -> String {
        format!(
            "\n{BLOCK_HEADER}\n{CLIENT_ID_KEY}={}\n{CLIENT_SECRET_KEY}={}\n",
            self.client_id.as_str(),
            self.client_secret.secret()
        )
    }
}

/// Print `label`, read one line and return it trimmed.
///
/// End of input reads as an empty answer.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}").map_err(Error::Console)?;
    output.flush().map_err(Error::Console)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(Error::Console)?;
    Ok(answer.trim().to_string())
}

/// Ask for both halves of the pair. Validation happens in `Credentials::new`
/// after both answers are in, so the user is always asked twice.
pub fn prompt_credentials<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Credentials> {
    let client_id = prompt(input, output, "Enter your Google Client ID: ")?;
    let client_secret = prompt(input, output, "Enter your Google Client Secret: ")?;
    Credentials::new(&client_id, &client_secret)
}

/// First ten characters, `...`, then the last ten when the value is longer
/// than twenty characters. Cosmetic only.
pub fn redacted_preview(value: &str) -> String {
    let len = value.chars().count();
    let head: String = value.chars().take(PREVIEW_CHARS).collect();
    let tail: String = if len > PREVIEW_CHARS * 2 {
        value.chars().skip(len - PREVIEW_CHARS).collect()
    } else {
        String::new()
    };
    format!("{head}...{tail}")
}
