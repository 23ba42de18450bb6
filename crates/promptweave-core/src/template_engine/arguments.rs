//! Function body argument parsing
//!
//! Splits `name arg 'quoted arg'` on spaces, keeping quoted runs together.
//! Quote delimiters are consumed; empty fragments are dropped.

use super::lexer::is_quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgState {
    Token,
    Quoted(char),
}

/// Parse a function directive body into its name and arguments
pub fn parse_function_body(body: &str) -> (String, Vec<String>) {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut state = ArgState::Token;

    for c in body.chars() {
        match state {
            ArgState::Token => {
                if is_quote(c) {
                    flush(&mut tokens, &mut current);
                    state = ArgState::Quoted(c);
                } else if c == ' ' {
                    flush(&mut tokens, &mut current);
                } else {
                    current.push(c);
                }
            }
            ArgState::Quoted(quote) => {
                if c == quote {
                    flush(&mut tokens, &mut current);
                    state = ArgState::Token;
                } else {
                    current.push(c);
                }
            }
        }
    }
    flush(&mut tokens, &mut current);

    let mut tokens = tokens.into_iter();
    let name = tokens.next().unwrap_or_default();
    (name, tokens.collect())
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
