//! Greedy line breaking shared by measurers that have no native paragraph
//! layout.

/// Breaks `text` into lines no wider than `wrap_width` where possible.
///
/// Hard breaks (`'\n'`) are kept. Soft breaks happen only after a run of
/// whitespace, and every line is a slice of the input, so spacing inside a
/// line is measured exactly as it renders. Whitespace hanging at a soft break
/// is dropped; leading whitespace and whitespace at the end of a hard line are
/// kept. `line_width` reports the width of a candidate line and may fail, in
/// which case wrapping stops with that error.
pub fn wrap_lines<E, F>(text: &str, wrap_width: f32, mut line_width: F) -> Result<Vec<&str>, E>
where
    F: FnMut(&str) -> Result<f32, E>,
{
    let mut lines = Vec::new();
    for hard_line in text.split('\n') {
        let mut start = 0;
        let mut end = 0;
        for chunk_end in break_opportunities(hard_line) {
            if start == end {
                end = chunk_end;
                continue;
            }
            let candidate = &hard_line[start..chunk_end];
            let candidate = if chunk_end == hard_line.len() {
                candidate
            } else {
                candidate.trim_end()
            };
            if line_width(candidate)? <= wrap_width {
                end = chunk_end;
            } else {
                lines.push(hard_line[start..end].trim_end());
                start = end;
                end = chunk_end;
            }
        }
        lines.push(&hard_line[start..end]);
    }
    Ok(lines)
}

/// Byte offsets where a line may end: before each word that follows
/// whitespace, plus the end of the line. Leading whitespace stays attached to
/// the first word.
fn break_opportunities(line: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut seen_word = false;
    let mut after_space = false;
    for (index, ch) in line.char_indices() {
        let space = ch.is_whitespace();
        if !space {
            if after_space && seen_word {
                ends.push(index);
            }
            seen_word = true;
        }
        after_space = space;
    }
    ends.push(line.len());
    ends
}

#[cfg(test)]
#[path = "tests/wrap_tests.rs"]
mod tests;
