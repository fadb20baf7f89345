//! Parsing of `@` header directives.
//!
//! A directive line carries one command and its arguments, e.g.
//! `@ title "Potential Energy"` or `@ s0 legend "Pressure (bar)"`.
//! Arguments may be bare words or quoted strings; quoting keeps internal
//! whitespace inside a single token.

use crate::error::{Result, XvgError};

// ---------------------------------------------------------------------------
// Directive – the effect of one header line
// ---------------------------------------------------------------------------

/// The interpreted effect of one header line on the dataset metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Directive {
    Title(String),
    XLabel(String),
    YLabel(String),
    /// Register a legend name for the given data column.
    Legend { column: usize, name: String },
    /// Recognized as a directive line but carrying no metadata we track.
    Ignored,
}

// ---------------------------------------------------------------------------
// Tokenizing
// ---------------------------------------------------------------------------

/// Split a directive body on whitespace, keeping `"..."` / `'...'` runs
/// inside a single token. Quote characters are preserved here; [`unquote`]
/// strips them afterwards.
///
/// A quote with no closing mate cannot join any token and splits the run it
/// appears in.
fn tokenize(body: &str) -> Vec<String> {
    let chars: Vec<char> = body.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            i += 1;
        } else if c == '"' || c == '\'' {
            match chars[i + 1..].iter().position(|&d| d == c) {
                Some(offset) => {
                    // Quoted run, quotes included.
                    current.extend(&chars[i..=i + 1 + offset]);
                    i += offset + 2;
                }
                None => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                    i += 1;
                }
            }
        } else {
            current.push(c);
            i += 1;
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Strip one layer of quotes when the first and last characters are the same
/// quote character. Mismatched or absent quotes pass through unchanged.
fn unquote(token: &str) -> &str {
    let mut chars = token.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && (first == '"' || first == '\'') => {
            &token[1..token.len() - 1]
        }
        _ => token,
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Interpret the body of a header line (the text after the leading `@`,
/// already trimmed by the caller).
///
/// Unknown commands are reported as [`Directive::Ignored`]; a recognized
/// command with a missing argument is an error.
pub(crate) fn parse_directive(body: &str) -> Result<Directive> {
    let tokens: Vec<String> = tokenize(body)
        .iter()
        .map(|token| unquote(token).to_string())
        .collect();

    let (command, args) = match tokens.split_first() {
        Some((command, args)) => (command.as_str(), args),
        None => return Err(XvgError::EmptyDirective),
    };

    match command {
        "title" => Ok(Directive::Title(take_arg(command, args)?)),
        "xaxis" => Ok(Directive::XLabel(take_arg(command, args)?)),
        "yaxis" => Ok(Directive::YLabel(take_arg(command, args)?)),
        _ => match legend_column(command) {
            Some(column) => parse_legend(command, column, args),
            None => Ok(Directive::Ignored),
        },
    }
}

fn take_arg(command: &str, args: &[String]) -> Result<String> {
    args.first().cloned().ok_or_else(|| XvgError::MissingArgument {
        directive: command.to_string(),
    })
}

/// Map an `sN` dataset command to its data-column index.
///
/// Legend index N names data column N + 1; column 0 is the independent
/// variable and never carries a legend.
fn legend_column(command: &str) -> Option<usize> {
    let digits = command.strip_prefix('s')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()?.checked_add(1)
}

/// `sN legend <name>` registers a column name; `sN` with any other first
/// argument (color, line style, ...) carries nothing we track.
fn parse_legend(command: &str, column: usize, args: &[String]) -> Result<Directive> {
    let first = args.first().ok_or_else(|| XvgError::MissingArgument {
        directive: command.to_string(),
    })?;
    if first != "legend" {
        return Ok(Directive::Ignored);
    }
    // The name is the last remaining token.
    match args[1..].last() {
        Some(name) => Ok(Directive::Legend {
            column,
            name: name.clone(),
        }),
        None => Err(XvgError::MissingArgument {
            directive: command.to_string(),
        }),
    }
}
