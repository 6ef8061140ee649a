/// Escape text for use in HTML content and double-quoted attributes.
pub(super) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<button>` styled like the shared button component.
pub(super) fn button(label: &str, class: &str) -> String {
    format!(
        r#"<button type="button" class="inline-flex items-center justify-center rounded-md text-sm font-medium px-4 py-2 {}">{}</button>"#,
        escape(class),
        escape(label)
    )
}

/// `<a>` with escaped href and label.
pub(super) fn link(label: &str, href: &str, class: &str) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        escape(href),
        escape(class),
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_khmer_untouched() {
        assert_eq!(escape("សៀវភៅគ្រួសារ"), "សៀវភៅគ្រួសារ");
    }

    #[test]
    fn test_link_escapes_all_parts() {
        assert_eq!(
            link("Q&A", "/faq?a=1&b=2", "nav"),
            r#"<a href="/faq?a=1&amp;b=2" class="nav">Q&amp;A</a>"#
        );
    }
}
