use wasm_bindgen::JsValue;

pub(crate) fn now_ms() -> i64 {
    // Browser wall clock.
    js_sys::Date::now().round() as i64
}

/// Mint an opaque note id: creation time in base36 plus random bits, so ids
/// stay unique across sessions without coordinating anything.
pub(crate) fn mint_note_id() -> String {
    let mut bytes = [0u8; 8];
    let _ = getrandom::getrandom(&mut bytes);
    let random = u64::from_le_bytes(bytes);
    format!("{}{}", to_base36(now_ms().max(0) as u64), to_base36(random))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

pub(crate) const PREVIEW_MAX_CHARS: usize = 30;

/// Sidebar preview: the first 30 characters of the body, `...` when longer.
/// Char-aware so multibyte content never splits mid-codepoint.
pub(crate) fn truncate_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_MAX_CHARS) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

/// Locale-formatted timestamp for the detail footer.
pub(crate) fn format_timestamp(ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms as f64));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_previews_unmodified() {
        let twenty = "a".repeat(20);
        assert_eq!(truncate_preview(&twenty), twenty);
        assert_eq!(truncate_preview(""), "");
    }

    #[test]
    fn exactly_thirty_chars_previews_unmodified() {
        let thirty = "b".repeat(30);
        assert_eq!(truncate_preview(&thirty), thirty);
    }

    #[test]
    fn long_content_previews_first_thirty_plus_ellipsis() {
        let thirty_five = "c".repeat(35);
        let preview = truncate_preview(&thirty_five);
        assert_eq!(preview, format!("{}...", "c".repeat(30)));
        assert_eq!(preview.chars().count(), 33);
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        let heavy = "ありがとうございました、またね".repeat(3); // 45 chars
        let preview = truncate_preview(&heavy);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 33);
    }

    #[test]
    fn base36_encodes_like_js_to_string() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        // (1700000000000).toString(36) in a browser console
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }
}
