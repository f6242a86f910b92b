use super::differ::Verdict;
use check_diff_cache::Preview;
use check_diff_core::{CheckOutcome, Invocation, DIFF_BODY_LIMIT_CHARS, ELLIPSIS, FENCE};
use check_diff_task::strip_diff_header;

/// Map a comparison verdict to the reported check outcome
pub fn classify(verdict: Verdict, invocation: &Invocation) -> CheckOutcome {
    match verdict {
        Verdict::FirstRun => CheckOutcome::ok(first_run_message(invocation)),
        Verdict::Identical(preview) => CheckOutcome::ok(no_difference_message(&preview)),
        Verdict::Differs(raw) => CheckOutcome::critical(found_difference_message(&raw)),
        Verdict::ToolError(message) => CheckOutcome::critical(message),
    }
}

pub fn first_run_message(invocation: &Invocation) -> String {
    format!(
        "first time execution command: '{}'",
        invocation.command_line()
    )
}

/// `no difference: ```<head>```` with `...` before the closing fence when
/// the output is longer than the preview
pub fn no_difference_message(preview: &Preview) -> String {
    let head = String::from_utf8_lossy(&preview.head);
    let head = strip_line_terminator(&head);
    let ellipsis = if preview.is_truncated() {
        ELLIPSIS
    } else {
        ""
    };
    format!("no difference: {FENCE}{head}{ellipsis}{FENCE}")
}

/// `found difference: ```<hunks>```` with the diff header removed and the
/// body capped at a fixed number of characters
pub fn found_difference_message(raw: &str) -> String {
    let body = strip_diff_header(raw);
    let body = strip_line_terminator(&body);
    let (body, ellipsis) = truncate_chars(body, DIFF_BODY_LIMIT_CHARS);
    let ellipsis = if ellipsis { ELLIPSIS } else { "" };
    format!("found difference: {FENCE}{body}{ellipsis}{FENCE}")
}

/// Remove exactly one trailing `\r\n`, `\r` or `\n`
pub fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

/// First `limit` characters of `text`, and whether anything was cut
fn truncate_chars(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((end, _)) => (&text[..end], true),
        None => (text, false),
    }
}
