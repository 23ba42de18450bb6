//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default prompt configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "prompt.toml";

#[derive(Parser)]
#[command(name = "promptweave")]
#[command(about = "Compile and render token-budgeted prompt templates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a prompt configuration into messages or text
    Render {
        /// Path to the prompt configuration (JSON, TOML or YAML)
        #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// JSON file whose top-level object seeds memory
        #[arg(long, short)]
        memory: Option<PathBuf>,

        /// Set a memory value: KEY=VALUE (VALUE is parsed as JSON, else taken as text)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        values: Vec<String>,

        /// Override the configured token budget
        #[arg(long, env = "PROMPTWEAVE_MAX_TOKENS")]
        max_tokens: Option<usize>,

        /// Render as a single block of text instead of JSON messages
        #[arg(long)]
        text: bool,
    },

    /// Compile a template and print its directives as JSON
    Compile {
        /// Template text
        #[arg(long, short, conflicts_with = "file", required_unless_present = "file")]
        template: Option<String>,

        /// File containing the template text
        #[arg(long, short)]
        file: Option<PathBuf>,
    },

    /// List the builtin template functions
    Functions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "promptweave",
            "render",
            "--config",
            "p.yaml",
            "--set",
            "name=Ada",
            "--set",
            "count=3",
            "--text",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                config,
                values,
                text,
                ..
            } => {
                assert_eq!(config, PathBuf::from("p.yaml"));
                assert_eq!(values, vec!["name=Ada", "count=3"]);
                assert!(text);
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_compile_requires_input() {
        assert!(Cli::try_parse_from(["promptweave", "compile"]).is_err());
        assert!(Cli::try_parse_from(["promptweave", "compile", "-t", "{{$x}}"]).is_ok());
    }
}
