//! # google_oauth_env
//!
//! Sets and verifies the Google OAuth2 client credentials stored in a
//! backend's `.env` file.
//!
//! `setup` appends `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` once, after
//! prompting for them. `inspect` reports what the process environment and
//! the file currently hold.

pub mod auth;
pub mod constants;
pub mod env_file;
pub mod error;
pub mod inspect;
pub mod setup;
