//! setup-google-oauth: add Google OAuth2 credentials to the backend's `.env`.

use anyhow::Result;
use clap::Parser;
use google_oauth_env::constants::ENV_FILE_PATH;
use google_oauth_env::env_file::EnvFile;
use google_oauth_env::setup;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "setup-google-oauth", version, about = "Add Google OAuth2 credentials to the backend .env file")]
struct Cli {
    /// Path to the backend's .env file
    #[arg(long, default_value = ENV_FILE_PATH)]
    env_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("🔧 Google OAuth2 Environment Setup for TutorFlow");
    println!("{}", "=".repeat(50));

    let env = EnvFile::new(cli.env_file);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Every outcome, failures included, ends the process normally
    match setup::run(&env, &mut input, &mut output) {
        Ok(outcome) if outcome.wrote() => log::info!("credentials written to {}", env.path().display()),
        Ok(outcome) => log::info!("{} left unchanged: {outcome:?}", env.path().display()),
        Err(err) => {
            log::error!("setup failed: {err:?}");
            println!("❌ {err}");
        }
    }

    Ok(())
}
