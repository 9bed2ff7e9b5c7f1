//! Indentation re-basing for embedded sub-content
//!
//! Block text captured inside structured data loses the ambient column
//! context it had in real source: what was "indented relative to the
//! directive" arrives as text whose margin means nothing to the block
//! grammar. Before such text can be re-parsed it must be re-based to column
//! 0: tabs expanded, the first line left-stripped, the common leading margin
//! of the remaining non-blank lines removed, leading blank lines dropped,
//! and exactly one trailing blank line kept as a separator.

const TAB_STOP: usize = 8;

/// Re-base embedded block text to column 0 for recursive parsing.
pub fn rebase_indentation(text: &str) -> String {
    let mut lines: Vec<String> = text.split('\n').map(expand_tabs).collect();

    // Margin over non-blank lines after the first; the first line's own
    // indentation is independent of the block's.
    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line[margin.min(line.len())..].to_string();
        }
    }

    while lines.first().is_some_and(|line| line.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }

    lines.join("\n")
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - (column % TAB_STOP);
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
