/// What: Strip a trailing inline comment from a config value.
///
/// Inputs:
/// - `s`: Raw value text after `=`
///
/// Output:
/// - Trimmed value without ` // ...` or ` # ...` suffix.
///
/// Details:
/// - A marker only starts a comment when preceded by whitespace, so URLs
///   (`https://`) and values starting with `#` survive.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = s.len();
    for (i, _) in s.match_indices(['#', '/']) {
        let is_marker = s[i..].starts_with("//") || s[i..].starts_with('#');
        let preceded_by_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
        if is_marker && (preceded_by_space || (i == 0 && s.starts_with("//"))) {
            end = i;
            break;
        }
    }
    s[..end].trim()
}

/// What: Split one config line into a normalized key and its value.
///
/// Inputs:
/// - `line`: Raw line from a `.conf` file
///
/// Output:
/// - `Some((key, value))` for `key = value` lines; `None` for blanks, comments and lines without `=`.
///
/// Details:
/// - Keys are lowercased and `.`, `-` and spaces become `_`.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, val_raw) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, strip_inline_comment(val_raw.trim())))
}
