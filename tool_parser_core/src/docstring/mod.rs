//! Documentation string normalization.

const TAB_SIZE: usize = 8;

/// Clean up a documentation string.
///
/// Tabs are expanded, leading whitespace is removed from the first line and
/// the common indentation of the remaining lines is removed. Blank lines at
/// the start and end are dropped. Returns `None` when nothing is left.
///
/// ```
/// use tool_parser_core::clean_doc;
///
/// let doc = "
///     Adds two numbers.
///
///     Returns the sum.
/// ";
/// assert_eq!(clean_doc(doc).as_deref(), Some("Adds two numbers.\n\nReturns the sum."));
/// ```
pub fn clean_doc(raw: &str) -> Option<String> {
    let expanded: Vec<String> = raw.lines().map(expand_tabs).collect();

    let margin = expanded
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent(line.as_str()))
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = Vec::with_capacity(expanded.len());
    for (index, line) in expanded.iter().enumerate() {
        if index == 0 {
            lines.push(line.trim_start());
        } else if line.trim().is_empty() {
            lines.push("");
        } else {
            lines.push(strip_chars(line, margin));
        }
    }

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    let first = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());

    let cleaned = lines[first..].join("\n");
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Leading whitespace, in chars.
fn indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// `line` without its first `count` chars.
fn strip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        match ch {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            }
            '\r' => {}
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
