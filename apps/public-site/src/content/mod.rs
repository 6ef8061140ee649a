//! Literal page content - the data every section renders.

mod data;

use chrono::NaiveDate;
use serde::Serialize;

pub use data::{
    ABOUT_PARAGRAPHS, CONTACT_CHANNELS, FOOTER_GROUPS, NAV_LINKS, NEWS_ITEMS, SERVICES, SITE,
};

/// Site-wide titles and metadata.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteInfo {
    pub title: &'static str,
    pub khmer_title: &'static str,
    pub short_khmer_title: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub copyright: &'static str,
}

/// One quick-access service tile.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTile {
    pub title: &'static str,
    pub khmer_title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// One news announcement. `published` is an ISO date.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub published: &'static str,
    pub excerpt: &'static str,
}

impl NewsItem {
    /// Long-form date, e.g. "November 15, 2023".
    pub fn display_date(&self) -> String {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d")
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.published.to_string())
    }
}

/// A labelled link.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// A titled group of footer links.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [Link],
}

/// A support channel card in the contact section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}
