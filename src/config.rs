use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Model used when none is given
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Keys read from the process environment and `.env` files
pub const KNOWN_KEYS: [&str; 2] = ["OPENAI_API_KEY", "OPENAI_BASE_URL"];

/// Resolved configuration values
///
/// Values from the process environment take precedence over a `.env` file.
/// Empty values count as absent.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, String>,
}

impl Environment {
    /// Read a `.env` file (if it exists) and overlay the process environment
    pub fn load(dotenv_path: &Path) -> Result<Self> {
        let mut env = Self::default();

        if dotenv_path.is_file() {
            let content = std::fs::read_to_string(dotenv_path)
                .with_context(|| format!("Failed to read env file: {:?}", dotenv_path))?;
            env.values = parse_env_file(&content);
            debug!("Loaded {} values from {:?}", env.values.len(), dotenv_path);
        }

        env.overlay_process();
        Ok(env)
    }

    /// Build from explicit pairs, ignoring the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn overlay_process(&mut self) {
        for key in KNOWN_KEYS {
            if let Ok(value) = std::env::var(key) {
                if !value.trim().is_empty() {
                    self.values.insert(key.to_string(), value);
                }
            }
        }
    }
}

/// Parse `KEY=VALUE` lines; blank lines and `#` comments are skipped
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            (key.to_string(), unquote(value.trim()).to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_env_file() {
        let content = r#"
# credentials
OPENAI_API_KEY=sk-123
export OPENAI_BASE_URL = "http://localhost:8080/v1"
MALFORMED LINE
EMPTY=
QUOTED='a=b'
"#;
        let values = parse_env_file(content);
        assert_eq!(values.get("OPENAI_API_KEY").map(String::as_str), Some("sk-123"));
        assert_eq!(
            values.get("OPENAI_BASE_URL").map(String::as_str),
            Some("http://localhost:8080/v1")
        );
        assert_eq!(values.get("QUOTED").map(String::as_str), Some("a=b"));
        assert_eq!(values.get("EMPTY").map(String::as_str), Some(""));
        assert!(!values.contains_key("MALFORMED LINE"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let env = Environment::from_vars([("OPENAI_API_KEY", "  ")]);
        assert_eq!(env.get("OPENAI_API_KEY"), None);
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "SOME_OTHER_KEY=value").unwrap();

        let env = Environment::load(file.path()).unwrap();
        assert_eq!(env.get("SOME_OTHER_KEY").as_deref(), Some("value"));
    }

    #[test]
    fn test_load_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::load(&dir.path().join(".env")).unwrap();
        assert_eq!(env.get("SOME_OTHER_KEY"), None);
    }
}
