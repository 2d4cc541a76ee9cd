use google_oauth_env::env_file::EnvFile;
use google_oauth_env::setup::{self, SetupOutcome};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn run_with_answers(env: &EnvFile, answers: &str) -> (SetupOutcome, String) {
    let mut input = Cursor::new(answers.to_string());
    let mut output = Vec::new();
    let outcome = setup::run(env, &mut input, &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn missing_file_is_reported_and_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("App").join(".env");
    let env = EnvFile::new(&path);

    let (outcome, output) = run_with_answers(&env, "abc123\nsecretXYZ\n");

    assert_eq!(outcome, SetupOutcome::EnvFileMissing);
    assert!(!outcome.wrote());
    assert!(output.contains(".env file not found at:"));
    assert!(output.contains(&path.display().to_string()));
    assert!(!path.exists());
    assert!(!output.contains("Enter your Google Client ID"));
}

#[test]
fn appends_block_after_existing_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "FOO=bar").unwrap();
    let env = EnvFile::new(&path);

    let (outcome, output) = run_with_answers(&env, "abc123\nsecretXYZ\n");

    assert_eq!(outcome, SetupOutcome::Appended);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "FOO=bar\n\n# Google OAuth2 Configuration\nGOOGLE_CLIENT_ID=abc123\nGOOGLE_CLIENT_SECRET=secretXYZ\n"
    );
    assert!(output.contains("Enter your Google Client ID: "));
    assert!(output.contains("Enter your Google Client Secret: "));
    assert!(output.contains("added successfully"));
    assert!(output.contains("restart your backend server"));
    assert!(output.contains("python manage.py runserver"));
}

#[test]
fn answers_are_trimmed_and_prior_content_is_a_prefix() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    let before = "# backend settings\nDEBUG=True\nSECRET_KEY=abc\n";
    fs::write(&path, before).unwrap();
    let env = EnvFile::new(&path);

    let (outcome, _) = run_with_answers(&env, "   my-id.apps.googleusercontent.com  \n\tGOCSPX-secret \n");

    assert_eq!(outcome, SetupOutcome::Appended);
    let after = fs::read_to_string(&path).unwrap();
    assert!(after.starts_with(before));
    assert!(after.contains("GOOGLE_CLIENT_ID=my-id.apps.googleusercontent.com\n"));
    assert!(after.contains("GOOGLE_CLIENT_SECRET=GOCSPX-secret\n"));
}

#[test]
fn existing_credentials_are_echoed_and_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    let before = "FOO=bar\nGOOGLE_CLIENT_ID=old\nGOOGLE_CLIENT_SECRET=oldsecret\n";
    fs::write(&path, before).unwrap();
    let env = EnvFile::new(&path);

    let (outcome, output) = run_with_answers(&env, "new-id\nnew-secret\n");

    assert_eq!(
        outcome,
        SetupOutcome::AlreadyConfigured(vec![
            "GOOGLE_CLIENT_ID=old".to_string(),
            "GOOGLE_CLIENT_SECRET=oldsecret".to_string(),
        ])
    );
    assert!(output.contains("already exist"));
    assert!(output.contains("  GOOGLE_CLIENT_ID=old\n"));
    assert!(!output.contains("Enter your Google Client ID"));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn marker_in_comment_counts_as_configured() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    let before = "# fill in GOOGLE_CLIENT_ID\nFOO=bar\n";
    fs::write(&path, before).unwrap();

    let (outcome, _) = run_with_answers(&EnvFile::new(&path), "id\nsecret\n");

    assert_eq!(outcome, SetupOutcome::AlreadyConfigured(Vec::new()));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn blank_answers_write_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "FOO=bar\n").unwrap();
    let env = EnvFile::new(&path);

    for answers in ["\nsecret\n", "id\n   \n", "  \n\t\n", "", "id-only\n"] {
        let (outcome, output) = run_with_answers(&env, answers);
        assert_eq!(outcome, SetupOutcome::MissingCredentials, "answers: {answers:?}");
        assert!(output.contains("Both Client ID and Client Secret are required!"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "FOO=bar\n");
    }
}

#[test]
fn second_run_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "FOO=bar\n").unwrap();
    let env = EnvFile::new(&path);

    let (first, _) = run_with_answers(&env, "abc123\nsecretXYZ\n");
    assert_eq!(first, SetupOutcome::Appended);
    let after_first = fs::read_to_string(&path).unwrap();

    let (second, _) = run_with_answers(&env, "other\nvalues\n");
    assert!(matches!(second, SetupOutcome::AlreadyConfigured(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
}

#[test]
fn secret_only_file_passes_the_guard() {
    // Only the client id key is checked, so a lone secret gets duplicated.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "GOOGLE_CLIENT_SECRET=stale\n").unwrap();

    let (outcome, _) = run_with_answers(&EnvFile::new(&path), "abc123\nfresh\n");

    assert_eq!(outcome, SetupOutcome::Appended);
    let after = fs::read_to_string(&path).unwrap();
    assert_eq!(after.matches("GOOGLE_CLIENT_SECRET=").count(), 2);
}
