use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());
    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .context("workspace manifest has no parent directory")
}

/// Reads a TOML file relative to the workspace root into `T`.
pub fn load_config<T: DeserializeOwned>(
    config_name: &str,
) -> anyhow::Result<T> {
    let path = workspace_dir()?.join(config_name);
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_config(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_config<T: DeserializeOwned>(config: &str) -> anyhow::Result<T> {
    Ok(toml::from_str::<T>(config)?)
}

/// Looks up a secret in the process environment, then in `Secrets.dev.toml`.
///
/// A missing secrets file is not an error.
pub fn load_secret(name: &str) -> Option<String> {
    if let Ok(value) = std::env::var(name) {
        return Some(value);
    }

    let secrets = workspace_dir()
        .and_then(|dir| {
            Ok(std::fs::read_to_string(dir.join("Secrets.dev.toml"))?)
        })
        .ok()?;

    secret_from_str(&secrets, name)
}

fn secret_from_str(secrets: &str, name: &str) -> Option<String> {
    let secrets = toml::from_str::<Map<String, Value>>(secrets).ok()?;
    secrets.get(name)?.as_str().map(str::to_string)
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(serde::Deserialize)]
    struct Sample {
        server: Server,
    }

    #[derive(serde::Deserialize)]
    struct Server {
        port: u16,
    }

    #[test]
    fn test_parse_config() {
        let sample: Sample = parse_config("[server]\nport = 8000\n").unwrap();

        assert_eq!(sample.server.port, 8000);
    }

    #[test]
    fn test_secret_from_str() {
        let secrets = "GEMINI_API_KEY = \"abc\"\nCOUNT = 3\n";

        assert_eq!(
            secret_from_str(secrets, "GEMINI_API_KEY").as_deref(),
            Some("abc")
        );
        assert_eq!(secret_from_str(secrets, "COUNT"), None);
        assert_eq!(secret_from_str(secrets, "MISSING"), None);
    }

    #[test]
    fn test_workspace_dir_contains_manifest() {
        let dir = workspace_dir().unwrap();

        assert!(dir.join("Cargo.toml").exists());
    }
}
