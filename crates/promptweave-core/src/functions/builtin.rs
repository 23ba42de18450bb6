//! Built-in template functions
//!
//! Provides a small standard library for templates. Arguments arrive as the
//! raw strings of the directive and are never substituted: in
//! `{{str.uppercase $name}}` the argument is the literal text `$name`. Use
//! `memory.get` or the `arr.*` functions to reach memory.
//! - `date.now`, `date.year`, `date.format PATTERN`
//! - `str.uppercase S`, `str.lowercase S`, `str.capitalize S`, `str.trim S`,
//!   `str.length S`, `str.replace S FROM TO`, `str.contains S NEEDLE`,
//!   `str.startsWith S PREFIX`, `str.endsWith S SUFFIX`
//! - `arr.join KEY [SEP]`, `arr.length KEY` (array stored in memory)
//! - `default VALUE FALLBACK`, `coalesce A B ...`
//! - `memory.get KEY`

use super::registry::FunctionRegistry;
use crate::context::RenderContext;
use crate::error::{PromptError, PromptResult};
use serde_json::Value;

/// Built-in function pack
pub struct BuiltinFunctions;

impl BuiltinFunctions {
    /// Names of every builtin function
    pub const NAMES: &'static [&'static str] = &[
        "date.now",
        "date.year",
        "date.format",
        "str.uppercase",
        "str.lowercase",
        "str.capitalize",
        "str.trim",
        "str.length",
        "str.replace",
        "str.contains",
        "str.startsWith",
        "str.endsWith",
        "arr.join",
        "arr.length",
        "default",
        "coalesce",
        "memory.get",
    ];

    /// Register every builtin into a registry
    pub fn register_all(registry: &mut FunctionRegistry) -> PromptResult<()> {
        for &name in Self::NAMES {
            registry.add_fn(name, move |ctx, args| Self::execute(name, ctx, args))?;
        }
        Ok(())
    }

    /// Execute a built-in function
    pub fn execute(name: &str, ctx: &RenderContext, args: &[String]) -> PromptResult<Value> {
        match name {
            // Date functions
            "date.now" => Ok(Self::date_now()),
            "date.year" => Ok(Self::date_year()),
            "date.format" => Self::date_format(name, args),

            // String functions
            "str.uppercase" => Ok(arg(name, args, 0)?.to_uppercase().into()),
            "str.lowercase" => Ok(arg(name, args, 0)?.to_lowercase().into()),
            "str.capitalize" => Self::str_capitalize(name, args),
            "str.trim" => Ok(arg(name, args, 0)?.trim().into()),
            "str.length" => Ok(arg(name, args, 0)?.chars().count().into()),
            "str.replace" => {
                let s = arg(name, args, 0)?;
                let from = arg(name, args, 1)?;
                let to = arg(name, args, 2)?;
                Ok(s.replace(from, to).into())
            }
            "str.contains" => Ok(arg(name, args, 0)?.contains(arg(name, args, 1)?).into()),
            "str.startsWith" => Ok(arg(name, args, 0)?.starts_with(arg(name, args, 1)?).into()),
            "str.endsWith" => Ok(arg(name, args, 0)?.ends_with(arg(name, args, 1)?).into()),

            // Array functions (these read arrays from memory)
            "arr.join" => Self::arr_join(name, ctx, args),
            "arr.length" => {
                let items = Self::memory_array(name, ctx, arg(name, args, 0)?)?;
                Ok(items.len().into())
            }

            // Fallback functions
            "default" => Self::default_fn(name, args),
            "coalesce" => Ok(args
                .iter()
                .find(|a| !a.is_empty())
                .map(|a| Value::String(a.clone()))
                .unwrap_or(Value::Null)),

            "memory.get" => Ok(ctx.memory().get(arg(name, args, 0)?).unwrap_or(Value::Null)),

            _ => Err(PromptError::unknown_function(name)),
        }
    }

    // Date functions

    fn date_now() -> Value {
        Value::String(chrono::Local::now().format("%Y-%m-%d").to_string())
    }

    fn date_year() -> Value {
        Value::String(chrono::Local::now().format("%Y").to_string())
    }

    fn date_format(name: &str, args: &[String]) -> PromptResult<Value> {
        let pattern = arg(name, args, 0)?;
        let now = chrono::Local::now();

        // Simple pattern replacement
        let result = pattern
            .replace("YYYY", &now.format("%Y").to_string())
            .replace("MM", &now.format("%m").to_string())
            .replace("DD", &now.format("%d").to_string())
            .replace("HH", &now.format("%H").to_string())
            .replace("mm", &now.format("%M").to_string())
            .replace("ss", &now.format("%S").to_string());

        Ok(Value::String(result))
    }

    // String functions

    fn str_capitalize(name: &str, args: &[String]) -> PromptResult<Value> {
        let s = arg(name, args, 0)?;
        let mut chars = s.chars();
        let result = match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        };
        Ok(Value::String(result))
    }

    // Array functions

    fn arr_join(name: &str, ctx: &RenderContext, args: &[String]) -> PromptResult<Value> {
        let items = Self::memory_array(name, ctx, arg(name, args, 0)?)?;
        let separator = args.get(1).map(String::as_str).unwrap_or(", ");

        let items: Vec<String> = items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect();
        Ok(Value::String(items.join(separator)))
    }

    fn memory_array(name: &str, ctx: &RenderContext, key: &str) -> PromptResult<Vec<Value>> {
        match ctx.memory().get(key) {
            Some(Value::Array(items)) => Ok(items),
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(_) => Err(PromptError::function(
                name,
                format!("memory key '{}' does not hold an array", key),
            )),
        }
    }

    // Fallback functions

    fn default_fn(name: &str, args: &[String]) -> PromptResult<Value> {
        let value = arg(name, args, 0)?;
        if !value.is_empty() {
            Ok(value.into())
        } else {
            Ok(args.get(1).map(|f| Value::String(f.clone())).unwrap_or(Value::Null))
        }
    }
}

/// Fetch a required positional argument
fn arg<'a>(name: &str, args: &'a [String], index: usize) -> PromptResult<&'a str> {
    args.get(index).map(String::as_str).ok_or_else(|| {
        PromptError::function(
            name,
            format!("expected at least {} argument(s), got {}", index + 1, args.len()),
        )
    })
}
