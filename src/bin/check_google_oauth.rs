//! check-google-oauth: report whether the Google OAuth2 credentials are set.

use anyhow::Result;
use clap::Parser;
use google_oauth_env::constants::ENV_FILE_PATH;
use google_oauth_env::env_file::EnvFile;
use google_oauth_env::inspect::Report;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "check-google-oauth", version, about = "Check the Google OAuth2 environment variables")]
struct Cli {
    /// Path to the backend's .env file
    #[arg(long, default_value = ENV_FILE_PATH)]
    env_file: PathBuf,

    /// Load the .env file into this process before checking the environment
    #[arg(long)]
    load_env_file: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("🔍 Testing Google OAuth2 Environment Variables");
    println!("{}", "=".repeat(50));

    let env = EnvFile::new(cli.env_file);
    if cli.load_env_file {
        if let Err(err) = env.load_into_env() {
            log::warn!("could not load {}: {err}", env.path().display());
            println!("⚠️  {err}");
        }
    }

    let report = Report::collect(&env);
    log::info!(
        "both credential variables set: {}",
        report.environment.is_complete()
    );
    if let Err(err) = report.render(&mut io::stdout()) {
        log::error!("failed to write report: {err}");
    }

    Ok(())
}
