//! Text helpers for terminal output.

/// Splits a comma-separated tag list, trimming each tag and dropping
/// empty entries.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Greedy word wrap. Every output line starts with `indent` and holds at
/// most `width` characters of text, except for single words longer than
/// `width`, which are kept whole on their own line.
pub fn wrap(text: &str, width: usize, indent: &str) -> String {
    let mut out = String::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            push_line(&mut out, indent, &line);
            line.clear();
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if line_len > 0 {
        push_line(&mut out, indent, &line);
    }
    out
}

fn push_line(out: &mut String, indent: &str, line: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str(line);
}
