//! Read-only report on where the Google OAuth2 credentials stand.
//!
//! Two independent findings: what the process environment holds, and what
//! the `.env` file holds. Neither is treated as a failure.

use crate::auth::redacted_preview;
use crate::constants::{CLIENT_ID_KEY, CLIENT_SECRET_KEY, MANUAL_SETUP_GUIDE};
use crate::env_file::{contains_marker, EnvFile, KeyCounts};
use crate::error::Error;
use secrecy::{ExposeSecret, SecretString};
use std::io::{self, Write};
use std::path::PathBuf;

/// The two credential variables as seen by this process. Empty values are
/// treated as unset.
#[derive(Debug, Default)]
pub struct EnvironmentSnapshot {
    pub client_id: Option<SecretString>,
    pub client_secret: Option<SecretString>,
}

impl EnvironmentSnapshot {
    pub fn from_env() -> Self {
        Self {
            client_id: read_var(CLIENT_ID_KEY),
            client_secret: read_var(CLIENT_SECRET_KEY),
        }
    }

    pub fn from_values(client_id: Option<&str>, client_secret: Option<&str>) -> Self {
        Self {
            client_id: non_empty(client_id.map(str::to_string)),
            client_secret: non_empty(client_secret.map(str::to_string)),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

fn read_var(name: &str) -> Option<SecretString> {
    let value = std::env::var_os(name).map(|value| value.to_string_lossy().into_owned());
    non_empty(value)
}

fn non_empty(value: Option<String>) -> Option<SecretString> {
    value.filter(|v| !v.is_empty()).map(SecretString::from)
}

#[derive(Debug)]
pub enum EnvFileStatus {
    Missing,
    Present {
        has_marker: bool,
        /// Assignments per key, or why they could not be counted.
        keys: Result<KeyCounts, String>,
    },
    Unreadable(String),
}

impl EnvFileStatus {
    pub fn check(env: &EnvFile) -> Self {
        if !env.exists() {
            return EnvFileStatus::Missing;
        }

        let content = match env.read() {
            Ok(content) => content,
            Err(Error::EnvFileNotFound(_)) => return EnvFileStatus::Missing,
            Err(err) => {
                log::warn!("{err}");
                return EnvFileStatus::Unreadable(err.to_string());
            }
        };

        let keys = env.credential_key_counts().map_err(|err| {
            log::warn!("{err}");
            err.to_string()
        });

        EnvFileStatus::Present {
            has_marker: contains_marker(&content),
            keys,
        }
    }
}

#[derive(Debug)]
pub struct Report {
    pub current_dir: Option<PathBuf>,
    pub env_file: EnvFile,
    pub environment: EnvironmentSnapshot,
    pub file_status: EnvFileStatus,
}

impl Report {
    /// Snapshot the process environment and check `env`.
    pub fn collect(env: &EnvFile) -> Self {
        Self::with_environment(env, EnvironmentSnapshot::from_env())
    }

    pub fn with_environment(env: &EnvFile, environment: EnvironmentSnapshot) -> Self {
        Self {
            current_dir: std::env::current_dir().ok(),
            env_file: env.clone(),
            environment,
            file_status: EnvFileStatus::check(env),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(dir) = &self.current_dir {
            writeln!(out, "Current directory: {}", dir.display())?;
        }

        writeln!(out, "\n📋 Environment Variables Status:")?;
        writeln!(out, "{CLIENT_ID_KEY}: {}", set_label(&self.environment.client_id))?;
        writeln!(out, "{CLIENT_SECRET_KEY}: {}", set_label(&self.environment.client_secret))?;

        if let Some(value) = &self.environment.client_id {
            writeln!(out, "Client ID: {}", redacted_preview(value.expose_secret()))?;
        }
        if let Some(value) = &self.environment.client_secret {
            writeln!(out, "Client Secret: {}", redacted_preview(value.expose_secret()))?;
        }

        let path = self.env_file.path().display();
        match &self.file_status {
            EnvFileStatus::Missing => {
                writeln!(out, "\n❌ .env file NOT found at: {path}")?;
            }
            EnvFileStatus::Unreadable(reason) => {
                writeln!(out, "\n📁 .env file found at: {path}")?;
                writeln!(out, "⚠️  Could not read .env file: {reason}")?;
            }
            EnvFileStatus::Present { has_marker, keys } => {
                writeln!(out, "\n📁 .env file found at: {path}")?;
                if *has_marker {
                    writeln!(out, "✅ Google OAuth2 variables found in .env file")?;
                } else {
                    writeln!(out, "❌ Google OAuth2 variables NOT found in .env file")?;
                }

                match keys {
                    Ok(counts) => {
                        for (key, count) in counts.iter() {
                            match count {
                                0 => writeln!(out, "   {key}: not defined")?,
                                1 => writeln!(out, "   {key}: defined")?,
                                n => writeln!(out, "⚠️  {key}: defined {n} times")?,
                            }
                        }
                        if counts.malformed > 0 {
                            writeln!(
                                out,
                                "⚠️  {} line(s) in .env file are not KEY=VALUE assignments",
                                counts.malformed
                            )?;
                        }
                    }
                    Err(reason) => writeln!(out, "⚠️  Could not count .env keys: {reason}")?,
                }
            }
        }

        writeln!(
            out,
            "\n💡 If variables are not set, follow the setup guide in {MANUAL_SETUP_GUIDE}"
        )?;
        Ok(())
    }
}

fn set_label(value: &Option<SecretString>) -> &'static str {
    if value.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}
