use super::{ContactChannel, Link, LinkGroup, NewsItem, ServiceTile, SiteInfo};

pub const SITE: SiteInfo = SiteInfo {
    title: "Cambodia Population Management System",
    khmer_title: "ប្រព័ន្ធគ្រប់គ្រងប្រជាជនកម្ពុជា",
    short_khmer_title: "ប្រព័ន្ធគ្រប់គ្រងប្រជាជន",
    description: "Official platform for population management services in Cambodia",
    tagline: "A modern, secure platform for citizen services and population management",
    copyright: "© 2023 Cambodia Population Management System. All rights reserved.",
};

pub const NAV_LINKS: &[Link] = &[
    Link { label: "Home", href: "#" },
    Link { label: "Services", href: "#services" },
    Link { label: "About", href: "#about" },
    Link { label: "News", href: "#news" },
    Link { label: "Contact", href: "#contact" },
];

pub const SERVICES: &[ServiceTile] = &[
    ServiceTile {
        title: "Birth Registration",
        khmer_title: "ការចុះឈ្មោះកំណើត",
        description: "Register newborn citizens with our streamlined process",
        icon: "👶",
    },
    ServiceTile {
        title: "Family Book",
        khmer_title: "សៀវភៅគ្រួសារ",
        description: "Manage family records and documentation",
        icon: "📘",
    },
    ServiceTile {
        title: "ID Services",
        khmer_title: "សេវាអត្តសញ្ញាណ",
        description: "Apply for or renew identification documents",
        icon: "🪪",
    },
    ServiceTile {
        title: "Address Changes",
        khmer_title: "ការផ្លាស់ប្តូរអាសយដ្ឋាន",
        description: "Update your residential information",
        icon: "🏠",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "The Cambodia Population Management System is a government-initiated platform \
     designed to streamline citizen services and improve administrative efficiency \
     across the nation.",
    "Our mission is to provide accessible, secure, and efficient population \
     management services to all Cambodian citizens while maintaining the highest \
     standards of data protection and privacy.",
    "Developed in collaboration with the Ministry of Interior and NCDD Cambodia, \
     this platform represents a significant step forward in digital governance.",
];

pub const NEWS_ITEMS: &[NewsItem] = &[
    NewsItem {
        title: "New Online Registration System Launch",
        published: "2023-11-15",
        excerpt: "The Ministry has launched a new online registration portal to serve citizens more efficiently.",
    },
    NewsItem {
        title: "Mobile Registration Units Visiting Rural Areas",
        published: "2023-10-28",
        excerpt: "Mobile registration teams will be visiting remote provinces throughout December.",
    },
    NewsItem {
        title: "Updated Family Book Regulations",
        published: "2023-09-05",
        excerpt: "Important changes to family book application process now in effect.",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Phone Support",
        value: "+855 23 123 4567",
        note: "Mon-Fri, 8AM-5PM",
    },
    ContactChannel {
        title: "Email",
        value: "support@popmanagement.gov.kh",
        note: "Response within 24 hours",
    },
];

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Quick Links",
        links: &[
            Link { label: "Services", href: "#services" },
            Link { label: "About", href: "#about" },
            Link { label: "News", href: "#news" },
            Link { label: "Contact", href: "#contact" },
            Link { label: "How to Use", href: "#" },
            Link { label: "FAQs", href: "#" },
        ],
    },
    LinkGroup {
        title: "Legal & Policy",
        links: &[
            Link { label: "Privacy Policy", href: "#" },
            Link { label: "Terms of Service", href: "#" },
            Link { label: "Accessibility Statement", href: "#" },
        ],
    },
    LinkGroup {
        title: "Government References",
        links: &[
            Link { label: "NCDD Cambodia", href: "#" },
            Link { label: "Ministry of Interior", href: "#" },
        ],
    },
];
