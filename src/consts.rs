pub const APP_DIR_NAME: &str = "dryness";
pub const CONFIG_FILE_NAME: &str = "config.json";

// --- Environment ---

pub const API_URL_ENV: &str = "DRYNESS_API_URL";
/// Name used by the web front-end; still honoured so existing `.env` files work.
pub const LEGACY_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";
pub const LOG_ENV: &str = "DRYNESS_LOG";

// --- Upload limits ---

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const UPLOAD_FIELD_NAME: &str = "image";

// --- History ---

pub const HISTORY_PREVIEW_LEN: usize = 3;
pub const UPLOADS_PATH: &str = "uploads";
