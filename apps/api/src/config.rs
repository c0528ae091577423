use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Longest accepted document, in chars.
    pub max_document_chars: usize,
    /// Overrides the builtin skill vocabulary when set (comma-separated terms).
    pub skill_vocabulary: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_document_chars: std::env::var("MAX_DOCUMENT_CHARS")
                .unwrap_or_else(|_| "200000".to_string())
                .parse::<usize>()
                .context("MAX_DOCUMENT_CHARS must be a positive integer")?,
            skill_vocabulary: std::env::var("SKILL_VOCABULARY")
                .ok()
                .and_then(|raw| parse_term_list(&raw)),
        })
    }
}

/// Splits a comma-separated list, dropping blank items. `None` when nothing is left.
fn parse_term_list(raw: &str) -> Option<Vec<String>> {
    let terms: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    (!terms.is_empty()).then_some(terms)
}
