//! Stateless helpers that turn raw text into page-sized line lists.
//!
//! The assembler only ever consumes pre-wrapped lines; it never calls into
//! this module. Callers that start from paragraphs wrap and paginate here
//! and feed the result to [`DocumentBuilder::add_page`].
//!
//! [`DocumentBuilder::add_page`]: crate::DocumentBuilder::add_page

/// Default column width, in characters.
pub const DEFAULT_WIDTH: usize = 86;
/// Default number of lines per page.
pub const DEFAULT_PAGE_LINES: usize = 42;

/// Greedy word wrap of `text` to at most `width` characters per line.
///
/// Runs of whitespace collapse to single spaces. Empty or whitespace-only
/// text yields one empty line, so blank paragraphs keep their vertical
/// space.
pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wrap `text` as a `- ` bullet item with a hanging indent.
///
/// The first line carries the marker after `indent` spaces; continuation
/// lines align under the first character after the marker.
pub fn wrap_bullet(text: &str, width: usize, indent: usize) -> Vec<String> {
    let wrapped = wrap_paragraph(text, width.saturating_sub(indent).max(1));
    let marker = format!("{}- ", " ".repeat(indent));
    let follow = " ".repeat(indent + 2);

    let mut lines = Vec::with_capacity(wrapped.len());
    let mut segments = wrapped.into_iter();
    if let Some(first) = segments.next() {
        lines.push(format!("{}{}", marker, first));
    }
    for segment in segments {
        lines.push(format!("{}{}", follow, segment));
    }
    lines
}

/// Split `lines` into pages of at most `max_lines` each, preserving order.
pub fn paginate(lines: &[String], max_lines: usize) -> Vec<Vec<String>> {
    lines
        .chunks(max_lines.max(1))
        .map(<[String]>::to_vec)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_paragraph("alpha beta gamma delta epsilon", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta", "epsilon"]);
        assert!(lines.iter().all(|line| line.len() <= 11));
    }

    #[test]
    fn test_wrap_empty_text_keeps_blank_line() {
        assert_eq!(wrap_paragraph("", 40), vec![String::new()]);
        assert_eq!(wrap_paragraph("   ", 40), vec![String::new()]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_paragraph("a  \t b\n c", 40), vec!["a b c"]);
    }

    #[test]
    fn test_bullet_hanging_indent() {
        let lines = wrap_bullet("one two three four", 13, 4);
        assert_eq!(lines, vec!["    - one two", "      three", "      four"]);
    }

    #[test]
    fn test_paginate_chunk_sizes() {
        let lines: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let pages = paginate(&lines, 4);
        assert_eq!(
            pages.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![4, 4, 2]
        );
        assert_eq!(pages[2], vec!["8".to_owned(), "9".to_owned()]);
    }

    #[test]
    fn test_paginate_empty_input() {
        assert!(paginate(&[], 42).is_empty());
    }
}
