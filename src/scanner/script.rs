//! Extension registrations in page bootstrap scripts
//!
//! A page registers extensions with `app.use('mediator', 'router')`. Every such
//! call contributes, in source order. Calls whose arguments are not all string
//! literals cannot be resolved at build time and are skipped.

use log::warn;

use super::lexer::{Lexer, Token};

/// A registration call found in a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCall {
    /// Byte offset of the `app` identifier
    pub offset: usize,
    /// Literal arguments, or `None` if any argument was not a string literal
    pub ids: Option<Vec<String>>,
}

/// Parse the argument list of a call, starting just after the opening paren.
///
/// Returns the string arguments (or `None` if a non-literal appears or the
/// call is never closed) and the index of the closing paren.
fn literal_arguments(tokens: &[Token<'_>], mut i: usize) -> (Option<Vec<String>>, usize) {
    let mut ids = Some(Vec::new());
    let mut depth = 0usize;

    while let Some(token) = tokens.get(i) {
        if depth == 0 && token.is_punct(')') {
            return (ids, i);
        }
        if token.is_punct('(') || token.is_punct('[') || token.is_punct('{') {
            depth += 1;
        } else if token.is_punct(')') || token.is_punct(']') || token.is_punct('}') {
            depth = depth.saturating_sub(1);
        }

        match (depth, token.as_str()) {
            (0, Some(value)) => {
                if let Some(list) = ids.as_mut() {
                    list.push(value.to_string());
                }
            }
            (0, None) if token.is_punct(',') => {}
            _ => ids = None,
        }
        i += 1;
    }

    // Never closed: a malformed registration declares nothing
    (None, tokens.len())
}

/// Whether the token at `i` starts a standalone `app.use(` call
fn is_use_call(tokens: &[Token<'_>], i: usize) -> bool {
    let standalone = i == 0 || !tokens[i - 1].is_punct('.');
    standalone
        && tokens[i].is_ident("app")
        && tokens.get(i + 1).is_some_and(|t| t.is_punct('.'))
        && tokens.get(i + 2).is_some_and(|t| t.is_ident("use"))
        && tokens.get(i + 3).is_some_and(|t| t.is_punct('('))
}

/// Find every `app.use(...)` call in a script
pub fn use_calls(script: &str) -> Vec<UseCall> {
    let tokens = Lexer::tokenize(script);
    let mut calls = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if is_use_call(&tokens, i) {
            let (ids, close) = literal_arguments(&tokens, i + 4);
            calls.push(UseCall {
                offset: tokens[i].start,
                ids,
            });
            i = close + 1;
        } else {
            i += 1;
        }
    }

    calls
}

/// Extension identifiers registered by a script, across all calls, in order
pub fn extension_ids(script: &str) -> Vec<String> {
    use_calls(script)
        .into_iter()
        .filter_map(|call| {
            if call.ids.is_none() {
                warn!(
                    "Ignoring app.use() call at byte {}: arguments must be a closed list of string literals",
                    call.offset
                );
            }
            call.ids
        })
        .flatten()
        .filter(|id| !id.trim().is_empty())
        .collect()
}
