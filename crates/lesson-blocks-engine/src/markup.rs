//! Sanitizing markup rendering for `text` blocks.
//!
//! `markdown` and `html` formatted text is host-authored data, not trusted
//! code, so everything that reaches `dangerous_inner_html` goes through
//! [`sanitize_html`] first. The sanitizer escapes by default: only an
//! allow-list of structural tags survives, and all attributes are dropped
//! except safe-scheme links/images and pattern-checked `class` values.

use pulldown_cmark::{Event, Options, Parser, html};
use regex::Regex;
use std::sync::OnceLock;

/// Structural tags that may pass through [`sanitize_html`] unescaped.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "hr", "strong", "em", "b", "i", "u", "s", "code", "pre", "blockquote", "ul", "ol",
    "li", "h1", "h2", "h3", "h4", "h5", "h6", "a", "img", "span", "table", "thead", "tbody", "tr",
    "th", "td",
];

fn tag_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^<\s*(/?)\s*([a-zA-Z][a-zA-Z0-9]*)").unwrap())
}

fn attr_re(name: &'static str, cell: &'static OnceLock<Regex>) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(&format!(
            r#"(?i)\b{name}\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>"']+))"#
        ))
        .unwrap()
    })
}

fn href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    attr_re("href", &RE)
}

fn src_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    attr_re("src", &RE)
}

fn alt_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    attr_re("alt", &RE)
}

fn class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    attr_re("class", &RE)
}

fn class_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[-_a-zA-Z0-9 ]*$").unwrap())
}

/// Render markdown to sanitized HTML.
///
/// Raw HTML embedded in the markdown is demoted to literal text before
/// rendering, and the rendered output still passes through [`sanitize_html`]
/// so link schemes get the same treatment as `html` formatted blocks.
pub fn markdown_to_html(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut rendered = String::with_capacity(text.len() * 2);
    html::push_html(&mut rendered, parser);
    sanitize_html(&rendered)
}

/// Reduce arbitrary HTML to the allow-listed subset.
///
/// Anything that is not a recognized tag (unknown elements, comments,
/// doctypes, an unterminated `<`) is escaped and shows up as literal text,
/// so `<script>`-class markup can never survive. Text between tags passes
/// through untouched, which keeps pre-encoded entities like `&amp;` intact.
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match find_tag_end(tail) {
            Some(end) => {
                let tag = &tail[..=end];
                match rewrite_tag(tag) {
                    Some(safe) => out.push_str(&safe),
                    None => out.push_str(&html_escape::encode_text(tag)),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(&html_escape::encode_text(tail));
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Byte offset of the `>` closing the tag that starts at byte 0, skipping
/// quoted attribute values.
fn find_tag_end(tag_start: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (idx, byte) in tag_start.bytes().enumerate().skip(1) {
        match quote {
            Some(open) if byte == open => quote = None,
            Some(_) => {}
            None => match byte {
                b'"' | b'\'' => quote = Some(byte),
                b'>' => return Some(idx),
                _ => {}
            },
        }
    }
    None
}

/// Rebuild a tag from scratch if it is allowed; `None` means "escape it".
fn rewrite_tag(tag: &str) -> Option<String> {
    let captures = tag_name_re().captures(tag)?;
    let closing = !captures[1].is_empty();
    let name = captures[2].to_ascii_lowercase();

    if !ALLOWED_TAGS.contains(&name.as_str()) {
        return None;
    }
    if closing {
        return Some(format!("</{name}>"));
    }

    match name.as_str() {
        "a" => Some(rewrite_link(tag)),
        "img" => rewrite_image(tag),
        _ => {
            let mut rebuilt = format!("<{name}");
            if let Some(class) = attr_value(class_re(), tag)
                && class_value_re().is_match(&class)
            {
                rebuilt.push_str(&format!(" class=\"{class}\""));
            }
            rebuilt.push('>');
            Some(rebuilt)
        }
    }
}

fn rewrite_link(tag: &str) -> String {
    match attr_value(href_re(), tag).filter(|href| is_safe_url(href)) {
        Some(href) => format!(
            "<a href=\"{}\" rel=\"noopener noreferrer\">",
            html_escape::encode_double_quoted_attribute(&href)
        ),
        // Unsafe or missing target: keep the anchor text, lose the link.
        None => "<a>".to_string(),
    }
}

fn rewrite_image(tag: &str) -> Option<String> {
    let src = attr_value(src_re(), tag).filter(|src| is_safe_url(src))?;
    let alt = attr_value(alt_re(), tag).unwrap_or_default();
    Some(format!(
        "<img src=\"{}\" alt=\"{}\">",
        html_escape::encode_double_quoted_attribute(&src),
        html_escape::encode_double_quoted_attribute(&alt)
    ))
}

fn attr_value(re: &Regex, tag: &str) -> Option<String> {
    let captures = re.captures(tag)?;
    let value = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?;
    Some(value.as_str().to_string())
}

/// Relative targets and http/https/mailto are linkable; every other scheme
/// (javascript:, data:, vbscript:, ...) is not.
fn is_safe_url(url: &str) -> bool {
    let trimmed = url.trim();
    match trimmed.find([':', '/', '?', '#']) {
        Some(idx) if trimmed.as_bytes()[idx] == b':' => {
            let scheme = trimmed[..idx].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}
