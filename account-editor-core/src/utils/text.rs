//! Text measurement helpers for form input
//!
//! Form values come from a browser, so trimming and length follow the
//! ECMAScript string rules rather than Rust's.

/// Byte order mark, whitespace in ECMAScript but not in Unicode
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Next line, Unicode whitespace but not ECMAScript whitespace
const NEXT_LINE: char = '\u{85}';

/// ECMAScript `WhiteSpace` or `LineTerminator`
pub fn is_form_whitespace(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// Trim both ends like `String.prototype.trim`
pub fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Length in UTF-16 code units, as a browser reports it
pub fn form_length(value: &str) -> usize {
    value.encode_utf16().count()
}
