//! Comment layout and final output cleanup.

/// Wrap `text` greedily so no line exceeds `limit` characters.
///
/// Existing line breaks are kept. A single word longer than the limit stays
/// on its own line.
pub fn wrap(text: &str, limit: usize) -> String {
    let limit = limit.max(1);
    let mut out = String::with_capacity(text.len());
    for (i, paragraph) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut width = 0;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if width > 0 && width + 1 + len > limit {
                out.push('\n');
                width = 0;
            } else if width > 0 {
                out.push(' ');
                width += 1;
            }
            out.push_str(word);
            width += len;
        }
    }
    out
}

/// Put `prefix` at the start of `text` and after every newline except a final one.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let body = text.strip_suffix('\n');
    let (inner, trailing) = match body {
        Some(inner) => (inner, "\n"),
        None => (text, ""),
    };
    let mut out = String::with_capacity(text.len() + prefix.len() * 4);
    out.push_str(prefix);
    out.push_str(&inner.replace('\n', &format!("\n{prefix}")));
    out.push_str(trailing);
    out
}

/// A node comment as a block of `// ` lines, each ending in a newline.
pub fn comment_block(comment: &str, wrap_width: usize) -> String {
    let wrapped = wrap(comment, wrap_width.saturating_sub(3));
    if wrapped.is_empty() {
        return String::new();
    }
    let mut block = prefix_lines(&wrapped, "// ");
    block.push('\n');
    block
}

/// Final cleanup of a generated file.
///
/// Drops leading blank lines, collapses trailing whitespace that spans a line
/// break into one newline, and strips spaces and tabs before every newline.
pub fn tidy(code: &str) -> String {
    let lead_len = code.len() - code.trim_start().len();
    let start = code[..lead_len].rfind('\n').map_or(0, |i| i + 1);
    let code = &code[start..];

    let trimmed = code.trim_end();
    let body = if code[trimmed.len()..].contains('\n') {
        format!("{trimmed}\n")
    } else {
        code.to_string()
    };

    let mut out = String::with_capacity(body.len());
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.trim_end_matches([' ', '\t']));
    }
    out
}
