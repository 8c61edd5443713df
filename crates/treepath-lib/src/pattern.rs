//! Pattern compiler for names and parameter values.
//!
//! A pattern is matched against the whole string. Syntax:
//!
//! - `*` matches any run of characters, including none
//! - `^x` takes `x` literally
//! - `{#min..max}` matches an integer within the inclusive bounds (either bound may be omitted)
//! - `{...}` with any other body is inserted verbatim as a regex group, e.g. `{OK|Cancel}`
//! - `&`, `|` (and `=` when scanning a parameter name) end the pattern
//!
//! Everything else is literal.

use std::fmt;

use regex_automata::meta::{BuildError, Regex};

use crate::{Error, Result};

/// Characters that [`quote`] escapes.
const SPECIAL: [char; 6] = ['*', '&', '|', '{', '}', '^'];

/// Integer sub-match of a `{#min..max}` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericRange {
    min: i64,
    max: i64,
}

impl NumericRange {
    /// Parse the body after `#`. Inverted bounds are kept as-is and never match.
    fn parse(body: &str) -> Option<Self> {
        let (min, max) = body.split_once("..")?;
        let bound = |text: &str, open: i64| {
            if text.is_empty() {
                Some(open)
            } else {
                text.parse().ok()
            }
        };
        Some(Self {
            min: bound(min, i64::MIN)?,
            max: bound(max, i64::MAX)?,
        })
    }

    fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Compiled, fully anchored matcher.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    ranges: Vec<NumericRange>,
}

/// Output of [`compile`].
#[derive(Debug, Clone)]
pub struct Compiled {
    pub pattern: Pattern,
    /// Offset of the terminator (`&`, `|`, `=`) or the text length.
    pub rest: usize,
    /// Source text the pattern was compiled from.
    pub text: String,
}

impl Pattern {
    /// Compile a standalone pattern. Unescaped terminators are rejected.
    pub fn new(text: &str) -> Result<Self> {
        let compiled = compile(text, 0, false)?;
        if compiled.rest != text.len() {
            let found = &text[compiled.rest..=compiled.rest];
            return Err(Error::syntax(
                text,
                compiled.rest,
                format!("unexpected `{found}` in pattern"),
            ));
        }
        Ok(compiled.pattern)
    }

    pub fn is_match(&self, text: &str) -> bool {
        if self.ranges.is_empty() {
            return self.regex.is_match(text);
        }

        let mut caps = self.regex.create_captures();
        self.regex.captures(text, &mut caps);
        if !caps.is_match() {
            return false;
        }

        self.ranges.iter().enumerate().all(|(index, range)| {
            caps.get_group_by_name(&range_group(index))
                .and_then(|span| text[span.range()].parse::<i64>().ok())
                .is_some_and(|value| range.contains(value))
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compile the pattern starting at `start` in `text`.
///
/// Scanning stops before the first unescaped `&` or `|` outside braces, and
/// before `=` when `stop_at_equals` is set. The terminator is not consumed.
pub fn compile(text: &str, start: usize, stop_at_equals: bool) -> Result<Compiled> {
    let mut regex = String::from(r"\A(?:");
    let mut ranges = Vec::new();
    let mut rest = text.len();
    let mut chars = text[start..]
        .char_indices()
        .map(|(i, c)| (start + i, c));

    while let Some((offset, c)) = chars.next() {
        match c {
            '&' | '|' => {
                rest = offset;
                break;
            }
            '=' if stop_at_equals => {
                rest = offset;
                break;
            }
            '*' => regex.push_str("(?s:.*)"),
            '^' => match chars.next() {
                Some((_, escaped)) => push_literal(&mut regex, escaped),
                None => return Err(Error::syntax(text, offset, "trailing escape character `^`")),
            },
            '{' => {
                let body = brace_body(text, offset, &mut chars)?;
                match body.strip_prefix('#') {
                    Some(bounds) => {
                        let range = NumericRange::parse(bounds).ok_or_else(|| {
                            Error::syntax(text, offset, format!("malformed numeric range `{{{body}}}`"))
                        })?;
                        regex.push_str(&format!("(?P<{}>-?[0-9]+)", range_group(ranges.len())));
                        ranges.push(range);
                    }
                    None => {
                        regex.push_str("(?:");
                        regex.push_str(&body);
                        regex.push(')');
                    }
                }
            }
            '}' => return Err(Error::syntax(text, offset, "unbalanced braces")),
            c => push_literal(&mut regex, c),
        }
    }
    regex.push_str(r")\z");

    let source = text[start..rest].to_string();
    let regex = Regex::new(&regex).map_err(|err| Error::PatternCompile {
        pattern: source.clone(),
        message: engine_message(&err),
    })?;

    Ok(Compiled {
        pattern: Pattern {
            source: source.clone(),
            regex,
            ranges,
        },
        rest,
        text: source,
    })
}

/// Collect a brace group's body up to its matching `}`.
///
/// Nested braces are kept verbatim; `^x` is turned into an escaped literal and
/// never counts toward nesting.
fn brace_body(
    text: &str,
    open: usize,
    chars: &mut impl Iterator<Item = (usize, char)>,
) -> Result<String> {
    let mut body = String::new();
    let mut depth = 1usize;

    loop {
        match chars.next() {
            None => return Err(Error::syntax(text, open, "unbalanced braces")),
            Some((_, '{')) => {
                depth += 1;
                body.push('{');
            }
            Some((_, '}')) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(body);
                }
                body.push('}');
            }
            Some((offset, '^')) => match chars.next() {
                Some((_, escaped)) => push_literal(&mut body, escaped),
                None => return Err(Error::syntax(text, offset, "trailing escape character `^`")),
            },
            Some((_, c)) => body.push(c),
        }
    }
}

fn push_literal(regex: &mut String, c: char) {
    let mut buf = [0u8; 4];
    regex.push_str(&regex_syntax::escape(c.encode_utf8(&mut buf)));
}

fn range_group(index: usize) -> String {
    format!("__range{index}")
}

/// The engine's own description of a rejected regex, without the echoed pattern.
fn engine_message(err: &BuildError) -> String {
    match err.syntax_error() {
        Some(regex_syntax::Error::Parse(e)) => e.kind().to_string(),
        Some(regex_syntax::Error::Translate(e)) => e.kind().to_string(),
        _ => err.to_string(),
    }
}

/// Pattern text that matches `value` literally.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    for c in value.chars() {
        if SPECIAL.contains(&c) {
            quoted.push('^');
        }
        quoted.push(c);
    }
    quoted
}

/// Remove `^` escapes, turning pattern text back into the literal it spells.
pub fn unquote(text: &str) -> String {
    let mut literal = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '^' => literal.extend(chars.next()),
            c => literal.push(c),
        }
    }
    literal
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod pattern_tests;
