//! Per-line normalization applied before any token scanning.

/// Typographic characters replaced with plain-text equivalents.
const SUBSTITUTIONS: [(char, &str); 12] = [
    ('\u{2212}', "-"),     // minus sign
    ('\u{2013}', "--"),    // en dash
    ('\u{2014}', "---"),   // em dash
    ('\u{2026}', "..."),   // ellipsis
    ('\u{201C}', "\""),    // left double quote
    ('\u{201D}', "\""),    // right double quote
    ('\u{2018}', "'"),     // left single quote
    ('\u{2019}', "'"),     // right single quote
    ('\u{2009}', " "),     // thin space
    ('\u{0127}', "h-bar"), // ħ
    ('\u{03B1}', "alpha"), // α
    ('\u{03BC}', "mu"),    // μ
];

/// Line normalizer.
///
/// Expands literal `\n` escapes into real line breaks that keep the
/// original indentation, and replaces the characters in the fixed
/// substitution table.
#[derive(Debug, Clone)]
pub struct Normalizer {
    expand_escaped_newlines: bool,
}

impl Normalizer {
    /// Create a normalizer.
    pub fn new(expand_escaped_newlines: bool) -> Self {
        Self {
            expand_escaped_newlines,
        }
    }

    /// Normalize one physical line (without its line terminator).
    pub fn process(&self, line: &str) -> String {
        let mut result = if self.expand_escaped_newlines && line.contains("\\n") {
            let indent = line.chars().take_while(|c| c.is_whitespace()).count();
            let replacement = format!("\n{}", " ".repeat(indent));
            line.replace("\\n", &replacement)
        } else {
            line.to_string()
        };

        if result.chars().any(|c| !c.is_ascii()) {
            result = substitute(&result);
        }

        result
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn substitute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}
