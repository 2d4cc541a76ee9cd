use crate::constants::{CLIENT_ID_KEY, CLIENT_SECRET_KEY, MARKER};
use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// The backend's `.env` file. This tool only ever reads it or appends to
/// it; it is never created or rewritten in place.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
}

impl EnvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the file, i.e. where the backend server is started.
    pub fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn read(&self) -> Result<String> {
        log::debug!("reading {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|source| self.io_error(source))
    }

    /// Append `text` with a single write. The file must already exist.
    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        file.write_all(text.as_bytes())
            .map_err(|source| self.io_error(source))?;
        log::info!("appended {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    /// Load the file's variables into the current process environment.
    /// Variables that are already set keep their value.
    ///
    /// dotenv stops at the first line it cannot parse. When that happens the
    /// credential keys are still picked up line by line, and the parse error
    /// is returned so the caller can report it.
    pub fn load_into_env(&self) -> Result<()> {
        if !self.exists() {
            return Err(Error::EnvFileNotFound(self.path.clone()));
        }

        match dotenv::from_path(&self.path) {
            Ok(()) => Ok(()),
            Err(dotenv::Error::Io(source)) => Err(self.io_error(source)),
            Err(source) => {
                log::warn!("dotenv rejected {}: {source}", self.path.display());
                for (key, value) in assignments(&self.read()?) {
                    if (key == CLIENT_ID_KEY || key == CLIENT_SECRET_KEY) && std::env::var_os(key).is_none() {
                        log::debug!("loading {key} line by line");
                        std::env::set_var(key, value);
                    }
                }
                Err(Error::Parse {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }

    /// How many assignments of each credential key the file holds, and how
    /// many non-blank, non-comment lines are not `KEY=VALUE` at all.
    pub fn credential_key_counts(&self) -> Result<KeyCounts> {
        let content = self.read()?;

        let mut counts = KeyCounts::default();
        for line in content.lines() {
            match parse_line(line) {
                Line::Assignment(CLIENT_ID_KEY, _) => counts.client_id += 1,
                Line::Assignment(CLIENT_SECRET_KEY, _) => counts.client_secret += 1,
                Line::Assignment(..) | Line::Blank => {}
                Line::Malformed => counts.malformed += 1,
            }
        }
        Ok(counts)
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        if source.kind() == ErrorKind::NotFound {
            Error::EnvFileNotFound(self.path.clone())
        } else {
            Error::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyCounts {
    pub client_id: usize,
    pub client_secret: usize,
    pub malformed: usize,
}

impl KeyCounts {
    /// `(key, count)` for both credential keys, id first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> {
        [
            (CLIENT_ID_KEY, self.client_id),
            (CLIENT_SECRET_KEY, self.client_secret),
        ]
        .into_iter()
    }
}

enum Line<'a> {
    Blank,
    Assignment(&'a str, &'a str),
    Malformed,
}

/// Lenient `KEY=VALUE` reading: accepts `export ` prefixes, spaces around
/// `=`, unquoted values with spaces, and strips one pair of matching quotes.
fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Blank;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let Some((key, value)) = line.split_once('=') else {
        return Line::Malformed;
    };

    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Line::Malformed;
    }

    let value = value.trim();
    let value = ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value);
    Line::Assignment(key, value)
}

fn assignments(content: &str) -> impl Iterator<Item = (&str, &str)> {
    content.lines().filter_map(|line| match parse_line(line) {
        Line::Assignment(key, value) => Some((key, value)),
        _ => None,
    })
}

/// Substring guard used to decide whether credentials are already present.
/// Comments and other keys containing the marker count as a match.
pub fn contains_marker(content: &str) -> bool {
    content.contains(MARKER)
}

/// Lines starting with either credential key, in file order.
pub fn credential_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.starts_with(CLIENT_ID_KEY) || line.starts_with(CLIENT_SECRET_KEY))
        .collect()
}
