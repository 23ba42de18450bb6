//! Template lexer
//!
//! Single forward scan over the template, one character of lookahead to spot
//! the two-character `{{` and `}}` markers. Three states:
//! - literal text (the default)
//! - inside a directive body
//! - inside a quoted string within a directive body
//!
//! Quotes are `'`, `"` and backtick. A quoted string ends only at the same
//! quote character that opened it; there are no escapes.

use super::arguments::parse_function_body;
use super::types::Directive;
use crate::error::{OpenConstruct, PromptError, PromptResult};
use tracing::debug;

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Text,
    Directive,
    Quoted(char),
}

pub(super) fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Compile a template string into directives.
///
/// Fails with `MalformedTemplate` if a directive or quoted string is still
/// open when the input ends.
pub fn compile(template: &str) -> PromptResult<Vec<Directive>> {
    let chars: Vec<(usize, char)> = template.char_indices().collect();
    let mut directives = Vec::new();
    let mut state = LexState::Text;
    let mut buffer = String::new();
    let mut directive_start = 0;
    let mut quote_start = 0;
    let mut pos = 0;

    while pos < chars.len() {
        let (offset, c) = chars[pos];
        let next = chars.get(pos + 1).map(|&(_, n)| n);

        match state {
            LexState::Text => {
                if c == '{' && next == Some('{') {
                    if !buffer.is_empty() {
                        directives.push(Directive::Text(std::mem::take(&mut buffer)));
                    }
                    state = LexState::Directive;
                    directive_start = offset;
                    pos += 2;
                    continue;
                }
                buffer.push(c);
            }
            LexState::Directive => {
                if c == '}' && next == Some('}') {
                    // `{{}}` produces nothing
                    if !buffer.is_empty() {
                        directives.push(directive_from_body(&std::mem::take(&mut buffer)));
                    }
                    state = LexState::Text;
                    pos += 2;
                    continue;
                }
                if is_quote(c) {
                    state = LexState::Quoted(c);
                    quote_start = offset;
                }
                buffer.push(c);
            }
            LexState::Quoted(quote) => {
                buffer.push(c);
                if c == quote {
                    state = LexState::Directive;
                }
            }
        }
        pos += 1;
    }

    match state {
        LexState::Text => {
            if !buffer.is_empty() {
                directives.push(Directive::Text(buffer));
            }
        }
        LexState::Directive => {
            return Err(PromptError::malformed(
                OpenConstruct::Directive,
                directive_start,
            ));
        }
        LexState::Quoted(_) => {
            return Err(PromptError::malformed(
                OpenConstruct::QuotedString,
                quote_start,
            ));
        }
    }

    debug!(
        directives = directives.len(),
        bytes = template.len(),
        "compiled template"
    );
    Ok(directives)
}

/// Turn a closed, non-empty directive body into a directive
fn directive_from_body(body: &str) -> Directive {
    match body.strip_prefix('$') {
        Some(key) => Directive::Variable(key.to_string()),
        None => {
            let (name, args) = parse_function_body(body);
            Directive::FunctionCall { name, args }
        }
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod lexer_tests;
