//! Small HTML building helpers shared by the section renderers.

use crate::content::Icon;

/// `rel` value for every link that opens a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Opening tag of an anchor to an external site, opened in a new tab.
pub fn external_link_open(href: &str, class: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"{}\" target=\"_blank\" rel=\"{}\">",
        escape_html(href),
        class,
        EXTERNAL_REL
    )
}

/// Decorative icon glyph.
pub fn icon(icon: Icon) -> String {
    format!("<span class=\"icon icon-{}\" aria-hidden=\"true\"></span>", icon.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_and_unicode() {
        assert_eq!(escape_html("Everwin"), "Everwin");
        assert_eq!(escape_html("مجمع إيفروين الصناعي"), "مجمع إيفروين الصناعي");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_external_link_open() {
        let tag = external_link_open("https://example.com/?a=1&b=2", "card");
        assert_eq!(
            tag,
            "<a href=\"https://example.com/?a=1&amp;b=2\" class=\"card\" target=\"_blank\" rel=\"noopener noreferrer\">"
        );
    }

    #[test]
    fn test_icon_markup() {
        assert_eq!(
            icon(Icon::MapPin),
            "<span class=\"icon icon-map-pin\" aria-hidden=\"true\"></span>"
        );
    }
}
