use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use crate::errors::FlutterPathError;

/// A malformed line in a properties file.
#[derive(Debug, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// An in-memory, read-only view of a `local.properties` store.
///
/// `local.properties` is written by developers and IDE tooling in the
/// `java.util.Properties` text format. This parser covers the subset those
/// files actually use: `#`/`!` comments, `=` or `:` separators, backslash
/// line continuations, and the standard escape sequences (including
/// `\uXXXX`). Later duplicate keys win, matching `Properties.load`.
#[derive(Debug, Clone, Default)]
pub struct LocalProperties {
    entries: BTreeMap<String, String>,
}

impl LocalProperties {
    /// Load and parse a properties file.
    ///
    /// Distinguishes a missing file from an unreadable or malformed one so
    /// callers can surface the right guidance.
    pub fn load(path: &Path) -> Result<Self, FlutterPathError> {
        if !path.is_file() {
            return Err(FlutterPathError::StoreNotFound {
                path: path.to_path_buf(),
            });
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| FlutterPathError::StoreUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::parse(&content).map_err(|e| FlutterPathError::StoreUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse properties text.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let mut entries = BTreeMap::new();
        for (line_no, logical) in logical_lines(content) {
            let (raw_key, raw_value) = split_entry(&logical);
            let key = unescape(raw_key.trim_end(), line_no)?;
            let value = unescape(raw_value.trim_start(), line_no)?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }

    /// Look up a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate over all keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Join physical lines into logical entries, honoring backslash continuations.
///
/// Comment and blank lines are dropped before continuation handling, the same
/// order `Properties.load` uses. `str::lines` already strips a trailing `\r`,
/// so CRLF files parse identically.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut lines = content.lines().enumerate();
    while let Some((idx, raw)) = lines.next() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let mut logical = line.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }
        out.push((idx + 1, logical));
    }
    out
}

/// A line continues onto the next one when it ends in an unescaped backslash.
fn ends_with_odd_backslashes(s: &str) -> bool {
    s.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=` or `:`.
///
/// A line with no separator is a key with an empty value, as in
/// `Properties.load`.
fn split_entry(logical: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in logical.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&logical[..i], &logical[i + c.len_utf8()..]),
            _ => {}
        }
    }
    (logical, "")
}

/// Decode backslash escapes in a key or value segment.
fn unescape(s: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // A lone backslash at end of input is dropped, as Properties does.
            None => {}
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() < 4 {
                    return Err(ParseError {
                        line,
                        message: format!("truncated \\u escape \"\\u{hex}\""),
                    });
                }
                let code = u32::from_str_radix(&hex, 16).map_err(|_| ParseError {
                    line,
                    message: format!("invalid \\u escape \"\\u{hex}\""),
                })?;
                let ch = char::from_u32(code).ok_or_else(|| ParseError {
                    line,
                    message: format!("\\u{hex} is not a valid character"),
                })?;
                out.push(ch);
            }
            // Any other escaped character stands for itself (\\, \=, \:, \#, \!).
            Some(other) => out.push(other),
        }
    }
    Ok(out)
}
