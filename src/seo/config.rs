//! Page SEO configuration.

use serde::{Deserialize, Serialize};

/// SEO attributes of a single page view.
///
/// A value object: each render passes a complete config which replaces the
/// previous one wholesale. Equality is by value and decides whether the
/// head needs re-syncing (see [`SeoSync`](super::SeoSync)).
///
/// # Example
///
/// ```toml
/// [page]
/// title = "Cloud PBX Plans | VOIP CAT"
/// description = "Scalable phone systems for every size organization."
/// canonical = "https://voipcat.com/plans"
/// og_image = "https://voipcat.com/images/og-plans.png"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, alias = "ogImage", skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, alias = "ogType", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(default, alias = "twitterCard", skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, alias = "publishedDate", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    #[serde(default, alias = "modifiedDate", skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SeoConfig {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Treat empty strings like absent values, the way page templates do.
pub(super) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
