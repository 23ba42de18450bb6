//! File-based configuration loading

use super::section_config::PromptConfig;
use crate::error::{PromptError, PromptResult};
use std::fs;
use std::path::Path;

/// Load a prompt configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
pub fn load_from_file(path: &Path) -> PromptResult<PromptConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        PromptError::io_with_path(
            format!("Failed to read prompt config: {}", e),
            path.display().to_string(),
        )
    })?;

    let config: PromptConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            PromptError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            PromptError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            PromptError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompt.toml");
        fs::write(
            &path,
            r#"
max_tokens = 200

[[sections]]
template = "You are {{$bot.name}}."

[[sections]]
template = "{{$temp.input}}"
role = "user"
tokens = 50.0
required = false
"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.max_tokens, 200);
        assert_eq!(config.sections.len(), 2);
        assert_eq!(config.sections[0].role, "system");
        assert_eq!(config.sections[1].role, "user");
        assert_eq!(config.sections[1].tokens, 50.0);
        assert!(!config.sections[1].required);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompt.yaml");
        fs::write(
            &path,
            "sections:\n  - template: \"Hello {{$name}}\"\n    role: user\n",
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.max_tokens, crate::config::DEFAULT_MAX_TOKENS);
        assert_eq!(config.sections[0].template, "Hello {{$name}}");
    }

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompt.json");
        fs::write(
            &path,
            r#"{"max_tokens": 64, "sections": [{"template": "hi", "text_prefix": "> "}]}"#,
        )
        .unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.max_tokens, 64);
        assert_eq!(config.sections[0].text_prefix, "> ");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_from_file(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, PromptError::Io { path: Some(_), .. }));
    }

    #[test]
    fn test_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "max_tokens = [").unwrap();
        let err = load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
    }
}
