//! Page chrome: document shell, header, footer.

use crate::content::{FOOTER_GROUPS, NAV_LINKS, SITE};

use super::html::{button, escape, link};

pub(super) fn document(main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
</head>
<body class="font-sans">
{header}
{main}
{footer}
</body>
</html>
"#,
        title = escape(SITE.title),
        description = escape(SITE.description),
        header = header(),
        footer = footer(),
    )
}

fn header() -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|l| link(l.label, l.href, "text-blue-900 hover:text-blue-700 font-medium"))
        .collect();

    format!(
        r#"<header class="sticky top-0 z-50 w-full border-b bg-white/95 backdrop-blur"><div class="container mx-auto px-4 h-16 flex items-center justify-between"><div class="flex items-center"><div class="text-2xl font-bold text-blue-900 mr-10">{brand}</div><nav class="hidden md:flex space-x-8">{nav}</nav></div><div class="flex items-center space-x-4">{login}{register}</div></div></header>"#,
        brand = escape(SITE.short_khmer_title),
        login = button("Login", "border border-blue-900 text-blue-900"),
        register = button("Register", "bg-blue-900 hover:bg-blue-800 text-white"),
    )
}

fn footer() -> String {
    let columns: String = FOOTER_GROUPS
        .iter()
        .map(|group| {
            let items: String = group
                .links
                .iter()
                .map(|l| format!("<li>{}</li>", link(l.label, l.href, "hover:text-gold")))
                .collect();
            format!(
                r#"<div><h3 class="text-lg font-semibold mb-4">{}</h3><ul class="space-y-2">{items}</ul></div>"#,
                escape(group.title)
            )
        })
        .collect();

    format!(
        r#"<footer class="bg-blue-900 text-white py-12"><div class="container mx-auto px-4"><div class="grid grid-cols-1 md:grid-cols-3 gap-8">{columns}</div><div class="border-t border-white/20 mt-8 pt-8 text-center"><p>{copyright}</p></div></div></footer>"#,
        copyright = escape(SITE.copyright),
    )
}
