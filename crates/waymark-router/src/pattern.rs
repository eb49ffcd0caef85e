//! Route pattern compilation.
//!
//! A pattern is a literal path in which `:name` segments (a colon followed
//! by one or more ASCII alphanumerics) stand for parameters. Compilation
//! replaces each token with a `([^/]+)` capture and escapes everything
//! else, producing a regex anchored at both ends.

use regex::Regex;

/// A pattern compiled to an anchored regex plus its parameter names.
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    regex: Regex,
    names: Vec<String>,
}

impl CompiledPattern {
    /// Matches `path` against the full pattern, returning the captured
    /// parameter values in left-to-right order.
    pub(crate) fn capture(&self, path: &str) -> Option<Vec<(String, String)>> {
        let captures = self.regex.captures(path)?;
        let params = self
            .names
            .iter()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, group)| {
                group.map(|m| (name.clone(), m.as_str().to_string()))
            })
            .collect();
        Some(params)
    }

    /// Number of parameter tokens in the pattern.
    pub(crate) fn param_count(&self) -> usize {
        self.names.len()
    }
}

/// Compiles a route pattern.
///
/// Token names are ASCII alphanumeric only: `:user_id` parses as a `user`
/// token followed by the literal `_id`. A bare `:` with no name is literal.
pub(crate) fn compile(pattern: &str) -> CompiledPattern {
    let bytes = pattern.as_bytes();
    let mut source = String::with_capacity(pattern.len() + 16);
    source.push('^');
    let mut names = Vec::new();

    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b':' {
            let name_start = i + 1;
            let mut name_end = name_start;
            while name_end < bytes.len() && bytes[name_end].is_ascii_alphanumeric() {
                name_end += 1;
            }
            if name_end > name_start {
                source.push_str(&regex::escape(&pattern[literal_start..i]));
                source.push_str("([^/]+)");
                names.push(pattern[name_start..name_end].to_string());
                i = name_end;
                literal_start = name_end;
                continue;
            }
        }
        i += 1;
    }
    source.push_str(&regex::escape(&pattern[literal_start..]));
    source.push('$');

    // Every literal byte is escaped and the inserted syntax is fixed, so
    // the source is valid by construction.
    let regex = Regex::new(&source).expect("escaped pattern compiles");
    CompiledPattern { regex, names }
}
