//! Compiled template types

use super::lexer::is_quote;
use crate::error::PromptResult;
use serde::Serialize;

/// One compiled unit of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    /// Literal text, emitted unchanged
    Text(String),
    /// Memory lookup: `{{$key}}`
    Variable(String),
    /// Function call: `{{name arg ...}}`
    FunctionCall { name: String, args: Vec<String> },
}

impl Directive {
    /// Build a function call directive
    pub fn function_call(name: impl Into<String>, args: Vec<String>) -> Self {
        Directive::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Whether evaluating this directive may suspend
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, Directive::Text(_))
    }

    /// Template source that compiles back to exactly this directive.
    ///
    /// `None` when no source can: text containing `{{`, an empty argument,
    /// a token using all three quote characters, or a variable key the
    /// lexer would cut short.
    pub fn to_template(&self) -> Option<String> {
        match self {
            Directive::Text(text) => {
                (!text.is_empty() && !text.contains("{{")).then(|| text.clone())
            }
            Directive::Variable(key) => {
                let cut_short =
                    key.contains(is_quote) || key.contains("}}") || key.ends_with('}');
                (!cut_short).then(|| format!("{{{{${}}}}}", key))
            }
            Directive::FunctionCall { name, args } if name.is_empty() => {
                args.is_empty().then(|| "{{ }}".to_string())
            }
            Directive::FunctionCall { name, args } => {
                let mut body = quote_token(name, true)?;
                for arg in args {
                    body.push(' ');
                    body.push_str(&quote_token(arg, false)?);
                }
                Some(format!("{{{{{}}}}}", body))
            }
        }
    }
}

/// Write a name or argument so the argument sub-lexer reads it back whole
fn quote_token(token: &str, is_name: bool) -> Option<String> {
    if token.is_empty() {
        return None;
    }
    let bare = !token.contains(|c: char| c == ' ' || c == '}' || is_quote(c))
        && !(is_name && token.starts_with('$'));
    if bare {
        return Some(token.to_string());
    }
    ['\'', '"', '`']
        .into_iter()
        .find(|q| !token.contains(*q))
        .map(|quote| format!("{quote}{token}{quote}"))
}

/// A template compiled into directives
///
/// Immutable once built; share it freely across concurrent renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    source: String,
    directives: Vec<Directive>,
}

impl CompiledTemplate {
    /// Compile a template string
    pub fn compile(source: impl Into<String>) -> PromptResult<Self> {
        let source = source.into();
        let directives = super::lexer::compile(&source)?;
        Ok(Self { source, directives })
    }

    /// The original template text
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Whether rendering needs memory or functions at all
    pub fn is_static(&self) -> bool {
        !self.directives.iter().any(Directive::is_dynamic)
    }
}
