//! Macro token parser
//!
//! Finds `$IDENT$` and `$IDENT.MODIFIER$` tokens in template text and applies
//! replacement maps to it. A `$` directly preceded by a backslash never opens
//! a token, and every `\$` pair is written out as a bare `$`.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::MacroRequest;
use crate::templates::resolver::ReplacementMap;

/// A macro token found in template text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroToken<'a> {
    /// Full token text including both `$` delimiters
    pub text: &'a str,
    /// Identifier before the first `.`
    pub identifier: &'a str,
    /// Everything after the first `.`, if present
    pub modifier: Option<&'a str>,
    /// Byte offset of the opening `$`
    pub start: usize,
    /// Byte offset just past the closing `$`
    pub end: usize,
}

impl<'a> MacroToken<'a> {
    fn new(content: &'a str, start: usize, end: usize) -> Self {
        let text = &content[start..end];
        let inner = &text[1..text.len() - 1];
        let (identifier, modifier) = match inner.split_once('.') {
            Some((identifier, modifier)) => (identifier, Some(modifier)),
            None => (inner, None),
        };
        Self {
            text,
            identifier,
            modifier,
            start,
            end,
        }
    }
}

/// Stateless parser for macro tokens
pub struct TemplateParser;

impl TemplateParser {
    /// Find every unescaped token in `content`, in order of appearance
    pub fn tokens(content: &str) -> Vec<MacroToken<'_>> {
        let regex = token_regex();
        let mut tokens = Vec::new();
        let mut position = 0;

        while let Some(found) = regex.find_at(content, position) {
            if is_escaped(content, found.start()) {
                // Same as a failed look-behind: retry right after the `$`
                position = found.start() + 1;
                continue;
            }
            tokens.push(MacroToken::new(content, found.start(), found.end()));
            position = found.end();
        }

        tokens
    }

    /// Collect the identifiers and modifiers requested by `content`
    pub fn extract_request(content: &str) -> MacroRequest {
        let mut request = MacroRequest::new();
        for token in Self::tokens(content) {
            request.insert(token.identifier, token.modifier);
        }
        request
    }

    /// Collect requests across several templates
    pub fn extract_request_all<'a, I>(contents: I) -> MacroRequest
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut request = MacroRequest::new();
        for content in contents {
            request.merge(Self::extract_request(content));
        }
        request
    }

    /// Replace every token found in `replacements`, leaving the others as-is
    ///
    /// Runs in a single pass, so substituted values are never re-scanned.
    pub fn substitute(content: &str, replacements: &ReplacementMap) -> String {
        let mut output = String::with_capacity(content.len());
        let mut last = 0;

        for token in Self::tokens(content) {
            push_unescaped(&mut output, &content[last..token.start]);
            match replacements.get(token.text) {
                Some(value) => output.push_str(value),
                None => output.push_str(token.text),
            }
            last = token.end;
        }
        push_unescaped(&mut output, &content[last..]);

        output
    }

    /// Strip escape backslashes without substituting anything
    pub fn unescape(content: &str) -> String {
        let mut output = String::with_capacity(content.len());
        push_unescaped(&mut output, content);
        output
    }
}

fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // $MAC_RO$ or $MAC_RO.CASE$; the identifier may not start with a dot
        Regex::new(r"\$[A-Z_]+[A-Z_.]*\$").expect("Invalid macro token regex")
    })
}

fn is_escaped(content: &str, dollar: usize) -> bool {
    content[..dollar].ends_with('\\')
}

fn push_unescaped(output: &mut String, text: &str) {
    let mut rest = text;
    while let Some(pos) = rest.find("\\$") {
        output.push_str(&rest[..pos]);
        output.push('$');
        rest = &rest[pos + 2..];
    }
    output.push_str(rest);
}
