//! Label wrapping for panel drawings.

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// Lines break after the last space, dot or hyphen inside the window when
/// that point lies past 40% of it; otherwise the line is cut hard. Lines
/// are trimmed. A `max_chars` of zero returns the text unchanged.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if max_chars == 0 || chars.len() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut remaining: &[char] = &chars;

    while !remaining.is_empty() {
        if remaining.len() <= max_chars {
            lines.push(remaining.iter().collect());
            break;
        }

        let window = &remaining[..max_chars];
        let after = |c: char| window.iter().rposition(|&w| w == c).map_or(0, |i| i + 1);
        let last_space = window.iter().rposition(|&w| w == ' ').unwrap_or(0);
        let best_break = last_space.max(after('.')).max(after('-'));

        let break_point = if best_break as f64 > max_chars as f64 * 0.4 {
            best_break
        } else {
            max_chars
        };

        lines.push(trim(&remaining[..break_point]).iter().collect());
        remaining = trim(&remaining[break_point..]);
    }

    lines
}

fn trim(chars: &[char]) -> &[char] {
    let start = chars.iter().position(|c| !c.is_whitespace()).unwrap_or(chars.len());
    let end = chars.iter().rposition(|c| !c.is_whitespace()).map_or(start, |i| i + 1);
    &chars[start..end.max(start)]
}
