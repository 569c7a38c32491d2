//! Line-level reStructuredText fragments.

use crate::model::HeadingLevel;

/// Indentation added per list nesting level.
const LIST_INDENT: &str = "   ";

/// Heading text, underline of equal length and a blank line.
pub fn heading(text: &str, level: HeadingLevel) -> [String; 3] {
    let underline = level.underline().to_string().repeat(text.chars().count());
    [text.to_string(), underline, String::new()]
}

/// Document banner: the title framed by `#` rules, then a blank line.
pub fn banner(title: &str) -> [String; 4] {
    let rule = "#".repeat(title.chars().count());
    [rule.clone(), title.to_string(), rule, String::new()]
}

/// Bullet prefix for a list item at `depth`.
pub fn list_prefix(depth: usize) -> String {
    format!("{}- ", LIST_INDENT.repeat(depth))
}

/// Image directive block, surrounded by blank lines.
pub fn image(prefix: &str, path: &str, width: &str, alt: &str) -> [String; 5] {
    [
        String::new(),
        format!(".. image:: {}{}", prefix, path),
        format!("   :width: {}", width),
        format!("   :alt: {}", alt),
        String::new(),
    ]
}

/// Build-script entry rendering `source` into `rendered`.
pub fn build_command(command: &str, source: &str, rendered: &str) -> String {
    format!("{} {} > {}", command, source, rendered)
}

/// Strip a trailing continuation backslash and balance emphasis markers.
///
/// A single trailing `\` that is not itself escaped is removed. If the
/// segment holds an odd number of unescaped `*`, the last one is dropped so
/// emphasis markers stay paired. Heuristic only; emphasis is not parsed.
pub fn finish_line(segment: &str) -> String {
    let mut line = segment.to_string();
    if line.ends_with('\\') && !line.ends_with("\\\\") {
        line.pop();
    }

    let stars = unescaped_stars(&line);
    if stars.len() % 2 == 1 {
        if let Some(&last) = stars.last() {
            line.remove(last);
        }
    }
    line
}

/// Byte offsets of `*` characters not preceded by a backslash.
fn unescaped_stars(line: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut prev = None;
    for (i, c) in line.char_indices() {
        if c == '*' && prev != Some('\\') {
            positions.push(i);
        }
        prev = Some(c);
    }
    positions
}
