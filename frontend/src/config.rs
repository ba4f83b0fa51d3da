use shared::photo::{DEFAULT_CONTESTANTS_TABLE, DEFAULT_PHOTO_BUCKET};

const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";

/// Build-time settings. Values come from the environment Trunk is run in
/// (`SUPABASE_URL`, `SUPABASE_ANON_KEY`, `PHOTO_BUCKET`, `CONTESTANTS_TABLE`)
/// and fall back to a local Supabase stack.
pub struct Config;

impl Config {
    pub fn supabase_url() -> String {
        option_env!("SUPABASE_URL")
            .unwrap_or(DEFAULT_SUPABASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Public anon key; it only grants what the row-level policies allow
    pub fn supabase_anon_key() -> String {
        option_env!("SUPABASE_ANON_KEY").unwrap_or_default().to_string()
    }

    pub fn photo_bucket() -> String {
        option_env!("PHOTO_BUCKET")
            .unwrap_or(DEFAULT_PHOTO_BUCKET)
            .to_string()
    }

    pub fn contestants_table() -> String {
        option_env!("CONTESTANTS_TABLE")
            .unwrap_or(DEFAULT_CONTESTANTS_TABLE)
            .to_string()
    }
}
