pub const ENV_FILE_PATH: &str = "../backend/Educational-platform/BackEnd/App/.env";

pub const CLIENT_ID_KEY: &str = "GOOGLE_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "GOOGLE_CLIENT_SECRET";

/// Presence of this substring anywhere in the file means "already configured".
pub const MARKER: &str = CLIENT_ID_KEY;

pub const BLOCK_HEADER: &str = "# Google OAuth2 Configuration";

pub const CONSOLE_URL: &str = "https://console.cloud.google.com/apis/credentials";
pub const MANUAL_SETUP_GUIDE: &str = "MANUAL_GOOGLE_SETUP.md";
pub const RESTART_COMMAND: &str = "python manage.py runserver";

// Characters shown on each side of a redacted preview
pub const PREVIEW_CHARS: usize = 10;
