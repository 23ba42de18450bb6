//! Command implementations

mod compile;
mod render;

use crate::args::{Cli, Commands};
use promptweave_core::BuiltinFunctions;

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Render {
            config,
            memory,
            values,
            max_tokens,
            text,
        } => {
            render::execute(render::RenderArgs {
                config,
                memory,
                values,
                max_tokens,
                text,
            })
            .await
        }
        Commands::Compile { template, file } => compile::execute(template, file),
        Commands::Functions => {
            for name in BuiltinFunctions::NAMES {
                println!("{}", name);
            }
            Ok(())
        }
    }
}
