//! Locating and regenerating the entry `require([...])` call of an emitted unit

use std::ops::Range;

use crate::domain::module::is_component_path;
use crate::scanner::lexer::{Lexer, Token};

/// Parameter names available to the synthesized callback
const PARAM_NAMES: &str = "abcdefghijklmnopqrstuvwxyz";

/// Entry call found in an emitted unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCall {
    /// Byte range of the whole call, including a trailing `;` when present
    pub span: Range<usize>,
    /// Byte range of the bracketed module list, brackets included
    pub list: Range<usize>,
    /// Module ids in list order
    pub modules: Vec<String>,
}

impl LoadCall {
    /// Position of the first component module; `.init()` is called from here on
    pub fn first_component(&self) -> Option<usize> {
        self.modules.iter().position(|m| is_component_path(m))
    }
}

/// Parse `[ 'a', "b", ]` starting at the `[`. Returns the module ids and the
/// index of the closing `]`.
fn string_list(tokens: &[Token<'_>], open: usize) -> Option<(Vec<String>, usize)> {
    let mut modules = Vec::new();
    let mut i = open + 1;
    loop {
        let token = tokens.get(i)?;
        if token.is_punct(']') && !modules.is_empty() {
            return Some((modules, i));
        }
        modules.push(token.as_str()?.to_string());

        let next = tokens.get(i + 1)?;
        if next.is_punct(']') {
            return Some((modules, i + 1));
        }
        if !next.is_punct(',') {
            return None;
        }
        i += 2;
    }
}

/// Skip a `function (params) { body }` expression starting at `i`. Returns the
/// index just past the closing brace.
fn skip_function(tokens: &[Token<'_>], mut i: usize) -> Option<usize> {
    if !tokens.get(i)?.is_ident("function") {
        return None;
    }
    i += 1;
    if !tokens.get(i)?.is_punct('(') {
        return None;
    }
    while !tokens.get(i)?.is_punct(')') {
        i += 1;
    }
    i += 1;
    if !tokens.get(i)?.is_punct('{') {
        return None;
    }

    let mut depth = 0usize;
    loop {
        let token = tokens.get(i)?;
        if token.is_punct('{') {
            depth += 1;
        } else if token.is_punct('}') {
            depth -= 1;
            if depth == 0 {
                return Some(i + 1);
            }
        }
        i += 1;
    }
}

/// Try to read a load call whose `require` identifier is at `i`. Returns the
/// call and the index of the first token after it.
fn parse_at(tokens: &[Token<'_>], i: usize) -> Option<(LoadCall, usize)> {
    if i > 0 && tokens[i - 1].is_punct('.') {
        return None;
    }
    if !tokens[i].is_ident("require") || !tokens.get(i + 1)?.is_punct('(') {
        return None;
    }
    let open = i + 2;
    if !tokens.get(open)?.is_punct('[') {
        return None;
    }
    let (modules, close) = string_list(tokens, open)?;

    let mut j = close + 1;
    if tokens.get(j)?.is_punct(',') {
        j = skip_function(tokens, j + 1)?;
    }
    if !tokens.get(j)?.is_punct(')') {
        return None;
    }
    let mut last = j;
    if tokens.get(j + 1).is_some_and(|t| t.is_punct(';')) {
        last = j + 1;
    }

    let call = LoadCall {
        span: tokens[i].start..tokens[last].end,
        list: tokens[open].start..tokens[close].end,
        modules,
    };
    Some((call, last + 1))
}

/// The last load call in a unit whose module list is all string literals.
///
/// Calls are read front to back and each one found is skipped whole, so a
/// `require` inside the callback of an entry call never replaces it.
pub fn find_load_call(source: &str) -> Option<LoadCall> {
    let tokens = Lexer::tokenize(source);
    let mut found = None;
    let mut i = 0;
    while i < tokens.len() {
        match parse_at(&tokens, i) {
            Some((call, next)) => {
                found = Some(call);
                i = next;
            }
            None => i += 1,
        }
    }
    found
}

/// One single-letter parameter per module, or `None` past 26 modules
pub fn param_names(count: usize) -> Option<Vec<char>> {
    (count <= PARAM_NAMES.len()).then(|| PARAM_NAMES.chars().take(count).collect())
}

/// Leading whitespace of the line the call starts on, when the call is the
/// first thing on that line
fn line_indent(source: &str, at: usize) -> &str {
    let line_start = source[..at].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &source[line_start..at];
    if prefix.chars().all(char::is_whitespace) {
        prefix
    } else {
        ""
    }
}

/// Regenerate the call so every module from the first component onward gets
/// `.init()`. The module list text is kept verbatim.
///
/// Returns `None` if the call loads more modules than there are parameter
/// names.
pub fn synthesize(source: &str, call: &LoadCall) -> Option<String> {
    let params = param_names(call.modules.len())?;
    let indent = line_indent(source, call.span.start);
    let list = &source[call.list.clone()];

    let signature = params
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("require({list}, function({signature}) {{\n");
    if let Some(first) = call.first_component() {
        for param in &params[first..] {
            out.push_str(&format!("{indent}    {param}.init();\n"));
        }
    }
    out.push_str(indent);
    out.push_str("});");

    Some(out)
}
