//! `promptweave compile`

use anyhow::{Context, bail};
use promptweave_core::CompiledTemplate;
use std::path::PathBuf;

pub fn execute(template: Option<String>, file: Option<PathBuf>) -> anyhow::Result<()> {
    let source = match (template, file) {
        (Some(template), _) => template,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read template '{}'", path.display()))?,
        (None, None) => bail!("either --template or --file is required"),
    };

    let compiled = CompiledTemplate::compile(source)?;
    println!("{}", serde_json::to_string_pretty(compiled.directives())?);
    Ok(())
}
