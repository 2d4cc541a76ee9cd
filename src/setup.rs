//! Adds the Google OAuth2 credentials to the backend's `.env` file.
//!
//! The run is a straight line of checks, each of which can stop it before
//! anything is written:
//!
//! 1. the file must exist,
//! 2. it must not already mention `GOOGLE_CLIENT_ID`,
//! 3. both prompted values must be non-empty after trimming.
//!
//! Only then is the block appended, in one write.

use crate::auth::prompt_credentials;
use crate::constants::{CONSOLE_URL, RESTART_COMMAND};
use crate::env_file::{contains_marker, credential_lines, EnvFile};
use crate::error::{Error, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Block appended.
    Appended,
    /// Nothing to do; holds the credential lines already in the file.
    AlreadyConfigured(Vec<String>),
    /// The `.env` file does not exist; it is not created.
    EnvFileMissing,
    /// Client id or secret was blank.
    MissingCredentials,
}

impl SetupOutcome {
    pub fn wrote(&self) -> bool {
        matches!(self, SetupOutcome::Appended)
    }
}

/// Run the setup flow against `env`, prompting on `input` and reporting on
/// `output`.
///
/// Missing file, existing credentials and blank answers are normal outcomes,
/// not errors. `Err` is only returned for I/O failures.
pub fn run<R: BufRead, W: Write>(env: &EnvFile, input: &mut R, output: &mut W) -> Result<SetupOutcome> {
    let path = env.path().display();

    if !env.exists() {
        log::debug!("{path} does not exist");
        writeln!(output, "❌ .env file not found at: {path}").map_err(Error::Console)?;
        writeln!(output, "Please create the .env file first.").map_err(Error::Console)?;
        return Ok(SetupOutcome::EnvFileMissing);
    }
    writeln!(output, "✅ Found .env file at: {path}").map_err(Error::Console)?;

    let content = match env.read() {
        Ok(content) => content,
        // Removed between the check and the read
        Err(Error::EnvFileNotFound(_)) => {
            writeln!(output, "❌ .env file not found at: {path}").map_err(Error::Console)?;
            return Ok(SetupOutcome::EnvFileMissing);
        }
        Err(err) => return Err(err),
    };

    if contains_marker(&content) {
        let existing: Vec<String> = credential_lines(&content)
            .into_iter()
            .map(str::to_string)
            .collect();
        log::info!("{path} already holds Google OAuth2 credentials, leaving it untouched");

        writeln!(output, "⚠️  Google OAuth2 variables already exist in .env file").map_err(Error::Console)?;
        writeln!(output, "Current values:").map_err(Error::Console)?;
        for line in &existing {
            writeln!(output, "  {line}").map_err(Error::Console)?;
        }
        return Ok(SetupOutcome::AlreadyConfigured(existing));
    }

    writeln!(output, "\n📝 Please enter your Google OAuth2 credentials:").map_err(Error::Console)?;
    writeln!(output, "(You can get these from Google Cloud Console: {CONSOLE_URL})").map_err(Error::Console)?;
    writeln!(output).map_err(Error::Console)?;

    let credentials = match prompt_credentials(input, output) {
        Ok(credentials) => credentials,
        Err(Error::MissingCredential(field)) => {
            log::debug!("{field} left blank");
            writeln!(output, "❌ Both Client ID and Client Secret are required!").map_err(Error::Console)?;
            return Ok(SetupOutcome::MissingCredentials);
        }
        Err(err) => return Err(err),
    };
    log::debug!("appending credentials for client {}", credentials.client_id());

    env.append(&credentials.env_block())?;

    writeln!(output, "\n✅ Google OAuth2 environment variables added successfully!").map_err(Error::Console)?;
    writeln!(output, "📁 Updated file: {path}").map_err(Error::Console)?;
    writeln!(output, "\n🔄 Please restart your backend server for changes to take effect.").map_err(Error::Console)?;
    writeln!(output, "   Run: cd {} && {RESTART_COMMAND}", env.dir().display()).map_err(Error::Console)?;

    Ok(SetupOutcome::Appended)
}
