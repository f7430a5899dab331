#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: usize, text: &'a str },
    /// A line starting with `- `.
    UnorderedItem(&'a str),
    /// A line starting with `* `.
    ///
    /// Conventional markdown treats `*` as an unordered bullet. This converter
    /// has always rendered it as `<ol>`, and documents relying on that keep
    /// working.
    OrderedItem(&'a str),
    Blank,
    Text(&'a str),
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some((level, text)) = detect_heading(line) {
        return LineKind::Heading { level, text };
    }

    if let Some(item) = line.strip_prefix("- ") {
        return LineKind::UnorderedItem(item.trim());
    }

    if let Some(item) = line.strip_prefix("* ") {
        return LineKind::OrderedItem(item.trim());
    }

    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Text(trimmed)
}

fn detect_heading(line: &str) -> Option<(usize, &str)> {
    let pound_count = line.chars().take_while(|&ch| ch == '#').count();
    if pound_count == 0 {
        return None;
    }

    // '#' is one byte, so the count doubles as a byte offset.
    let text = line[pound_count..].strip_prefix(' ')?;
    if text.trim().is_empty() {
        return None;
    }

    Some((pound_count, text))
}
