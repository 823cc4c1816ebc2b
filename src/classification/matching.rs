/// A word character is a Unicode alphanumeric or `_`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn boundary_before(text: &str, start: usize) -> bool {
    text[..start].chars().next_back().map_or(true, |c| !is_word_char(c))
}

fn boundary_after(text: &str, end: usize) -> bool {
    text[end..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// Count non-overlapping whole-word occurrences of `keyword` in `text`.
///
/// Both arguments are expected to be lowercased already. A candidate counts
/// only when it is not preceded or followed by a word character, so `cat`
/// does not match inside `concatenate`. Phrases such as `data structure`
/// match as one contiguous run with the same rule at both ends.
pub fn count_whole_word(text: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find(keyword) {
        let start = pos + offset;
        let end = start + keyword.len();

        if boundary_before(text, start) && boundary_after(text, end) {
            count += 1;
            pos = end;
        } else {
            // Rejected candidate: retry from the next char, not past the match.
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            pos = start + step;
        }

        if pos >= text.len() {
            break;
        }
    }

    count
}
