//! Legacy blog index extraction.
//!
//! Before the contents API was used, the blog root published an `index.html`
//! with the post list embedded as JSON inside an element (`#blog-list`).
//! This module finds that element and decodes its text content the way a
//! browser's `textContent` would: nested markup is dropped and character
//! references are expanded, except inside `<script>` where the text is raw.

use regex::Regex;

use super::error::ResolveError;
use crate::config::LEGACY_LIST_ELEMENT_ID;
use crate::models::LegacyPost;

const WHAT: &str = "legacy index";

/// Parse the posts out of a legacy index document.
pub fn parse_legacy_index(html: &str) -> Result<Vec<LegacyPost>, ResolveError> {
    let text = element_text(html, LEGACY_LIST_ELEMENT_ID)?.ok_or_else(|| {
        ResolveError::parse(
            WHAT,
            format!("element #{} not found", LEGACY_LIST_ELEMENT_ID),
        )
    })?;
    serde_json::from_str(text.trim()).map_err(|e| ResolveError::parse(WHAT, e))
}

/// Text content of the first element whose `id` attribute equals `id`.
///
/// Returns `Ok(None)` when no such element exists or it is never closed.
pub fn element_text(html: &str, id: &str) -> Result<Option<String>, ResolveError> {
    let id = regex::escape(id);
    let pattern = format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)[^>]*?[ \t\r\n]id[ \t\r\n]*=[ \t\r\n]*(?:"{id}"|'{id}'|{id})(?:[ \t\r\n/][^>]*)?>"#
    );
    let open_tag = Regex::new(&pattern).map_err(|e| ResolveError::parse(WHAT, e))?;

    let Some(caps) = open_tag.captures(html) else {
        return Ok(None);
    };
    let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
        return Ok(None);
    };
    let tag = tag.as_str().to_ascii_lowercase();
    let start = whole.end();

    let Some(end) = closing_tag_offset(html, &tag, start) else {
        return Ok(None);
    };
    let inner = &html[start..end];

    if tag == "script" {
        return Ok(Some(inner.to_string()));
    }
    Ok(Some(decode_entities(&strip_tags(inner))))
}

/// Byte offset of the `</tag` that closes an element opened before `start`.
///
/// Counts nested elements of the same name.
fn closing_tag_offset(html: &str, tag: &str, start: usize) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let mut depth = 1usize;
    let mut pos = start;

    while let Some(offset) = lower[pos..].find('<') {
        let at = pos + offset;
        let rest = &lower[at + 1..];
        if let Some(after) = rest.strip_prefix('/').and_then(|r| r.strip_prefix(tag)) {
            if ends_tag_name(after) {
                depth -= 1;
                if depth == 0 {
                    return Some(at);
                }
            }
        } else if let Some(after) = rest.strip_prefix(tag)
            && ends_tag_name(after)
        {
            depth += 1;
        }
        pos = at + 1;
    }
    None
}

fn ends_tag_name(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-'))
}

/// Drop markup, keeping text nodes.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Expand the character references that show up in hand-written HTML.
///
/// Unknown references are left as written.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&semi| semi <= 10) {
            Some(semi) => match decode_reference(&tail[1..semi]) {
                Some(c) => {
                    out.push(c);
                    rest = &tail[semi + 1..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            },
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
