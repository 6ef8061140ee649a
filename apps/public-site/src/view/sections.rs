//! Landing page sections.

use crate::content::{ABOUT_PARAGRAPHS, CONTACT_CHANNELS, NEWS_ITEMS, SERVICES, SITE};

use super::html::{button, escape};

pub(super) fn hero() -> String {
    format!(
        r#"<section id="hero" class="relative w-full h-[80vh] min-h-[500px] flex items-center justify-center bg-gradient-to-r from-blue-900 to-blue-700 text-white"><div class="relative z-10 text-center max-w-4xl px-4"><h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6">{khmer}</h1><h2 class="text-2xl md:text-3xl lg:text-4xl font-semibold mb-8">{title}</h2><p class="text-xl mb-10 max-w-2xl mx-auto">{tagline}</p><div class="flex flex-col sm:flex-row gap-4 justify-center">{register}{learn}</div></div></section>"#,
        khmer = escape(SITE.khmer_title),
        title = escape(SITE.title),
        tagline = escape(SITE.tagline),
        register = button("Register Now", "bg-gold hover:bg-gold-dark text-blue-900 font-bold"),
        learn = button("Learn More", "border border-white text-white hover:bg-white/10"),
    )
}

pub(super) fn quick_access_tiles() -> String {
    let tiles: String = SERVICES
        .iter()
        .map(|s| {
            format!(
                r#"<div class="rounded-lg border bg-white hover:shadow-lg transition-shadow duration-300 h-full"><div class="p-6 flex flex-col items-center text-center h-full"><div class="text-4xl mb-4">{icon}</div><h3 class="font-bold text-lg text-blue-900 mb-2">{khmer}</h3><h4 class="font-semibold text-md mb-3">{title}</h4><p class="text-gray-600 mb-4 flex-grow">{description}</p>{more}</div></div>"#,
                icon = escape(s.icon),
                khmer = escape(s.khmer_title),
                title = escape(s.title),
                description = escape(s.description),
                more = button("Learn More", "border w-full"),
            )
        })
        .collect();

    format!(
        r#"<section id="services" class="py-16 bg-gray-50"><div class="container mx-auto px-4"><h2 class="text-3xl font-bold text-center mb-12 text-blue-900">Quick Access Services</h2><div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">{tiles}</div></div></section>"#
    )
}

pub(super) fn about() -> String {
    let paragraphs: String = ABOUT_PARAGRAPHS
        .iter()
        .map(|p| format!(r#"<p class="text-gray-700 mb-4">{}</p>"#, escape(p)))
        .collect();

    format!(
        r#"<section id="about" class="py-16 bg-white"><div class="container mx-auto px-4"><div class="flex flex-col lg:flex-row items-center gap-12"><div class="lg:w-1/2"><h2 class="text-3xl font-bold text-blue-900 mb-6">About the Platform</h2>{paragraphs}{more}</div><div class="lg:w-1/2"><div class="bg-gray-100 rounded-lg p-6 h-80 flex items-center justify-center"><div class="text-center"><div class="text-6xl mb-4">📊</div><p class="text-gray-600">Platform Infographic</p><p class="text-sm text-gray-500">Visual representation of services and impact</p></div></div></div></div></div></section>"#,
        more = button("Read More About Us", "bg-blue-900 hover:bg-blue-800 text-white"),
    )
}

pub(super) fn news() -> String {
    let cards: String = NEWS_ITEMS
        .iter()
        .map(|n| {
            format!(
                r#"<article class="rounded-lg border bg-white hover:shadow-lg transition-shadow duration-300 h-full"><div class="p-6"><time datetime="{published}" class="text-sm text-gray-500 mb-2">{date}</time><h3 class="font-bold text-lg text-blue-900 mb-3">{title}</h3><p class="text-gray-600">{excerpt}</p></div><div class="p-6 pt-0">{more}</div></article>"#,
                published = escape(n.published),
                date = escape(&n.display_date()),
                title = escape(n.title),
                excerpt = escape(n.excerpt),
                more = button("Read More →", "p-0 text-blue-900 underline-offset-4 hover:underline"),
            )
        })
        .collect();

    format!(
        r#"<section id="news" class="py-16 bg-gray-50"><div class="container mx-auto px-4"><h2 class="text-3xl font-bold text-center mb-4 text-blue-900">{heading}</h2><p class="text-gray-600 text-center mb-12 max-w-2xl mx-auto">Stay updated with the latest news and important announcements from the Population Management System</p><div class="grid grid-cols-1 md:grid-cols-3 gap-6">{cards}</div><div class="text-center mt-10">{all}</div></div></section>"#,
        heading = escape("News & Announcements"),
        all = button("View All News", "border border-blue-900 text-blue-900"),
    )
}

pub(super) fn contact() -> String {
    let channels: String = CONTACT_CHANNELS
        .iter()
        .map(|c| {
            format!(
                r#"<div class="p-4 border rounded-lg"><h3 class="font-semibold text-blue-900 mb-2">{title}</h3><p class="text-gray-600">{value}</p><p class="text-sm text-gray-500">{note}</p></div>"#,
                title = escape(c.title),
                value = escape(c.value),
                note = escape(c.note),
            )
        })
        .collect();

    let input = |kind: &str, name: &str, placeholder: &str| {
        format!(
            r#"<div><input type="{kind}" name="{name}" placeholder="{placeholder}" class="w-full rounded-md border p-6"></div>"#
        )
    };

    format!(
        r#"<section id="contact" class="py-16 bg-white"><div class="container mx-auto px-4"><h2 class="text-3xl font-bold text-center mb-4 text-blue-900">{heading}</h2><p class="text-gray-600 text-center mb-12 max-w-2xl mx-auto">Get in touch with our support team for assistance with any population management services</p><div class="flex flex-col lg:flex-row gap-12"><div class="lg:w-1/2"><div class="bg-gray-100 rounded-lg p-6 h-80 flex items-center justify-center mb-6"><div class="text-center"><div class="text-6xl mb-4">🗺️</div><p class="text-gray-600">Interactive Map</p><p class="text-sm text-gray-500">Find your nearest registration office</p></div></div><div class="grid grid-cols-1 md:grid-cols-2 gap-4">{channels}</div></div><div class="lg:w-1/2"><form class="space-y-4">{name}{email}{subject}<div><textarea name="message" placeholder="Your Message" rows="5" class="w-full rounded-md border p-6"></textarea></div><button type="submit" class="inline-flex items-center justify-center rounded-md text-sm font-medium w-full bg-blue-900 hover:bg-blue-800 text-white p-6">Send Message</button></form></div></div></div></section>"#,
        heading = escape("Contact & Support"),
        name = input("text", "name", "Full Name"),
        email = input("email", "email", "Email Address"),
        subject = input("text", "subject", "Subject"),
    )
}
