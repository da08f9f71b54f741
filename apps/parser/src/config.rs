use anyhow::Result;

/// CLI configuration loaded from environment variables, with sensible
/// defaults for every value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default output path when no second CLI argument is given.
    pub output_path: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_path: std::env::var("RESUME_OUTPUT")
                .unwrap_or_else(|_| "parsed_resume.json".to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
