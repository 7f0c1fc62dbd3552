//! Inline bold formatting.

use crate::model::TextRun;

/// Delimiter that opens and closes a bold span.
pub const BOLD_DELIMITER: &str = "**";

/// Split a line into alternating plain and bold runs.
///
/// Bold spans are the leftmost, shortest `**...**` matches; the
/// delimiters are dropped. Text outside matched spans is plain, so an
/// unmatched `**` stays in the output as literal text. Empty segments
/// produce no run.
pub fn format_inline(text: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD_DELIMITER) {
        let inner = &rest[open + BOLD_DELIMITER.len()..];
        let Some(close) = inner.find(BOLD_DELIMITER) else {
            break;
        };
        push_run(&mut runs, &rest[..open], false);
        push_run(&mut runs, &inner[..close], true);
        rest = &inner[close + BOLD_DELIMITER.len()..];
    }
    push_run(&mut runs, rest, false);

    runs
}

/// Remove every bold delimiter without interpreting it.
pub fn strip_bold_markers(text: &str) -> String {
    text.replace(BOLD_DELIMITER, "")
}

fn push_run(runs: &mut Vec<TextRun>, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }
    runs.push(TextRun {
        text: text.to_string(),
        bold,
    });
}
