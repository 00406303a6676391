const MAX_VISIBLE_CHARS: usize = 80;

/// Condenses free text (report instructions, questions) for log fields.
///
/// Whitespace runs collapse to one space, output is cut at a char boundary
/// and credential-looking tokens are redacted.
pub fn sanitize_for_log(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = collapsed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = collapsed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total} chars total)")
    } else {
        collapsed
    };

    redact_credentials(&visible)
}

fn redact_credentials(text: &str) -> String {
    const MARKERS: [&str; 4] = ["Bearer ", "api_key=", "token=", "password="];

    let mut result = text.to_string();
    for marker in MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let value_start = search_from + found + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }
    result
}
