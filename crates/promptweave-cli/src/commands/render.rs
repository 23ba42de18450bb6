//! `promptweave render`

use anyhow::{Context, anyhow};
use colored::Colorize;
use promptweave_core::config::load_from_file;
use promptweave_core::{CharTokenizer, FunctionRegistry, Memory, MemoryMap, RenderContext};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct RenderArgs {
    pub config: PathBuf,
    pub memory: Option<PathBuf>,
    pub values: Vec<String>,
    pub max_tokens: Option<usize>,
    pub text: bool,
}

pub async fn execute(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_from_file(&args.config)?;
    let layout = config.build_layout()?;
    let max_tokens = args.max_tokens.unwrap_or(config.max_tokens);
    tracing::debug!(
        sections = config.sections.len(),
        max_tokens,
        "loaded prompt config"
    );

    let memory = load_memory(args.memory.as_ref())?;
    for entry in &args.values {
        let (key, value) = parse_assignment(entry)?;
        memory.set(&key, value);
    }

    let cancel_token = CancellationToken::new();
    let ctrl_c_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    let ctx = RenderContext::new(
        Arc::new(memory),
        Arc::new(FunctionRegistry::with_builtins()?),
        Arc::new(CharTokenizer::new()),
    )
    .with_cancel_token(cancel_token);

    let length = if args.text {
        let rendered = layout.render_as_text(&ctx, max_tokens).await?;
        println!("{}", rendered.output);
        rendered.length
    } else {
        let rendered = layout.render_as_messages(&ctx, max_tokens).await?;
        println!("{}", serde_json::to_string_pretty(&rendered.output)?);
        rendered.length
    };

    eprintln!(
        "{} {} / {} tokens",
        "rendered".green().bold(),
        length,
        max_tokens
    );
    Ok(())
}

fn load_memory(path: Option<&PathBuf>) -> anyhow::Result<MemoryMap> {
    let Some(path) = path else {
        return Ok(MemoryMap::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read memory file '{}'", path.display()))?;
    MemoryMap::from_json_str(&content)
        .with_context(|| format!("Failed to load memory file '{}'", path.display()))
}

/// Parse `KEY=VALUE`; VALUE is JSON when it parses as JSON, text otherwise
fn parse_assignment(entry: &str) -> anyhow::Result<(String, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{}'", entry))?;
    if key.is_empty() {
        return Err(anyhow!("empty key in '{}'", entry));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("temp.input=hello world").unwrap(),
            ("temp.input".to_string(), json!("hello world"))
        );
        assert_eq!(
            parse_assignment("count=3").unwrap(),
            ("count".to_string(), json!(3))
        );
        assert_eq!(
            parse_assignment("tags=[\"a\",\"b\"]").unwrap(),
            ("tags".to_string(), json!(["a", "b"]))
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_load_memory_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("memory.json");
        std::fs::write(&path, r#"{"name": "Ada"}"#).unwrap();

        let memory = load_memory(Some(&path)).unwrap();
        assert_eq!(memory.get("name"), Some(json!("Ada")));
        assert!(load_memory(None).unwrap().is_empty());
    }
}
