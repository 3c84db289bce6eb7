/// Discord's limit on the length of a single embed field value.
pub const EMBED_FIELD_LIMIT: usize = 1024;

/// Truncates `value` to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes so multi-byte text is never
/// split in the middle of a character.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

/// Returns `value`, or `"N/A"` when it is empty or only whitespace.
///
/// Discord rejects embed fields with empty values.
pub fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Joins `lines` with newlines, keeping only whole lines that fit in
/// `max_chars` characters.
///
/// Stops at the first line that would overflow, so the result is always a
/// prefix of the full text that ends on a line boundary.
pub fn join_lines_within<I>(lines: I, max_chars: usize) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    let mut used = 0;

    for line in lines {
        let line = line.as_ref();
        let separator = usize::from(!joined.is_empty());
        let needed = separator + line.chars().count();

        if used + needed > max_chars {
            break;
        }

        if separator == 1 {
            joined.push('\n');
        }
        joined.push_str(line);
        used += needed;
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_short_text_untouched() {
        assert_eq!(truncate_chars("Mod Menu", 1024), "Mod Menu");
    }

    #[test]
    fn truncates_on_character_boundaries() {
        let text = "é".repeat(1030);
        let truncated = truncate_chars(&text, EMBED_FIELD_LIMIT);

        assert_eq!(truncated.chars().count(), EMBED_FIELD_LIMIT);
    }

    #[test]
    fn substitutes_placeholder_for_blank_values() {
        assert_eq!(or_placeholder("  "), "N/A");
        assert_eq!(or_placeholder("1.02"), "1.02");
    }

    #[test]
    fn keeps_whole_lines_within_limit() {
        let lines = ["[a (1)](u1)", "[b (2)](u2)", "[c (3)](u3)"];

        assert_eq!(join_lines_within(lines, 23), "[a (1)](u1)\n[b (2)](u2)");
        assert_eq!(join_lines_within(lines, 22), "[a (1)](u1)");
        assert_eq!(join_lines_within(lines, 1024), lines.join("\n"));
    }
}
