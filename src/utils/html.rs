//! HTML fragment helpers for the profile sections.
//!
//! `about` and `skills` are authored as HTML and inserted with `inner_html`,
//! so everything goes through `ammonia` first.

/// Sanitize an authored HTML fragment.
pub fn sanitize_fragment(html: &str) -> String {
    ammonia::clean(html)
}

/// Turn line breaks into `<br>` and sanitize the result.
pub fn text_with_line_breaks(text: &str) -> String {
    sanitize_fragment(&text.trim_end().replace('\n', "<br>"))
}
