//! Head metadata synchronizer.
//!
//! Brings the managed `<head>` tags in line with an [`SeoConfig`]. Every
//! step is find-or-create, so re-running with the same config leaves the
//! head unchanged. Tags that a later config no longer mentions are left in
//! place, and the `hreflang` alternates are only ever created, never
//! updated.

use super::config::{SeoConfig, present};
use super::og;
use crate::debug;
use crate::head::{ElementId, Head, HeadKey, Location, Placement};

/// Create-or-update every managed head element from `config`.
///
/// `location` is read each time the current URL is needed.
pub fn synchronize<H, L>(head: &mut H, location: &L, config: &SeoConfig)
where
    H: Head + ?Sized,
    L: Location + ?Sized,
{
    head.set_title(&config.title);

    // Standard meta
    upsert_meta(head, HeadKey::Name("description"), &config.description);
    if let Some(keywords) = present(&config.keywords) {
        upsert_meta(head, HeadKey::Name("keywords"), keywords);
    }
    let language = present(&config.language).unwrap_or(og::LANGUAGE);
    upsert_meta(head, HeadKey::Name("language"), language);
    let robots = present(&config.robots).unwrap_or(og::ROBOTS);
    upsert_meta(head, HeadKey::Name("robots"), robots);
    upsert_meta(head, HeadKey::Name("viewport"), og::VIEWPORT);

    // Charset must precede everything else; an existing one is left alone
    if head.find(&HeadKey::Charset).is_none() {
        let id = head.create("meta", Placement::First);
        head.set_attr(id, "charset", og::CHARSET);
    }

    if let Some(author) = present(&config.author) {
        upsert_meta(head, HeadKey::Name("author"), author);
    }
    if let Some(date) = present(&config.published_date) {
        upsert_meta(head, HeadKey::Property("article:published_time"), date);
    }
    if let Some(date) = present(&config.modified_date) {
        upsert_meta(head, HeadKey::Property("article:modified_time"), date);
    }

    // OpenGraph
    let image = present(&config.og_image);
    upsert_meta(head, HeadKey::Property("og:title"), &config.title);
    upsert_meta(head, HeadKey::Property("og:description"), &config.description);
    let og_type = present(&config.og_type).unwrap_or(og::OG_TYPE);
    upsert_meta(head, HeadKey::Property("og:type"), og_type);
    upsert_meta(head, HeadKey::Property("og:url"), &location.href());
    if let Some(image) = image {
        upsert_meta(head, HeadKey::Property("og:image"), image);
        upsert_meta(head, HeadKey::Property("og:image:width"), og::OG_IMAGE.width);
        upsert_meta(head, HeadKey::Property("og:image:height"), og::OG_IMAGE.height);
        upsert_meta(head, HeadKey::Property("og:image:type"), og::OG_IMAGE.mime);
    }

    // Twitter
    upsert_meta(head, HeadKey::Property("twitter:title"), &config.title);
    upsert_meta(head, HeadKey::Property("twitter:description"), &config.description);
    let card = present(&config.twitter_card).unwrap_or(og::TWITTER_CARD);
    upsert_meta(head, HeadKey::Property("twitter:card"), card);
    if let Some(image) = image {
        upsert_meta(head, HeadKey::Property("twitter:image"), image);
    }
    upsert_meta(head, HeadKey::Property("twitter:site"), og::TWITTER_HANDLE);
    upsert_meta(head, HeadKey::Property("twitter:creator"), og::TWITTER_HANDLE);

    // Links
    let canonical = present(&config.canonical);
    if let Some(canonical) = canonical {
        let key = HeadKey::Link {
            rel: "canonical",
            hreflang: None,
        };
        let id = find_or_create(head, &key);
        head.set_attr(id, "href", canonical);
    }
    for lang in ["en", "x-default"] {
        let key = HeadKey::Link {
            rel: "alternate",
            hreflang: Some(lang),
        };
        if head.find(&key).is_none() {
            let href = canonical.map_or_else(|| location.href(), str::to_owned);
            let id = find_or_create(head, &key);
            head.set_attr(id, "href", &href);
        }
    }
}

/// Set `content` on the meta element for `key`, creating it first if absent.
fn upsert_meta<H: Head + ?Sized>(head: &mut H, key: HeadKey<'_>, content: &str) {
    let id = find_or_create(head, &key);
    head.set_attr(id, "content", content);
}

/// Find the element for `key`, or append a new one carrying the key attributes.
fn find_or_create<H: Head + ?Sized>(head: &mut H, key: &HeadKey<'_>) -> ElementId {
    if let Some(id) = head.find(key) {
        return id;
    }
    let id = head.create(key.tag(), Placement::Append);
    match *key {
        HeadKey::Name(name) => head.set_attr(id, "name", name),
        HeadKey::Property(name) => head.set_attr(id, "property", name),
        HeadKey::Charset => head.set_attr(id, "charset", og::CHARSET),
        HeadKey::Link { rel, hreflang } => {
            head.set_attr(id, "rel", rel);
            if let Some(lang) = hreflang {
                head.set_attr(id, "hreflang", lang);
            }
        }
    }
    id
}

// ============================================================================
// Apply-if-changed gate
// ============================================================================

/// Re-runs [`synchronize`] only when the page config changes.
///
/// The first [`apply`](Self::apply) always synchronizes (mount); later calls
/// compare the whole config by value against the last applied one.
#[derive(Debug, Default)]
pub struct SeoSync {
    last: Option<SeoConfig>,
}

impl SeoSync {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Synchronize `head` if `config` differs from the last applied config.
    ///
    /// Returns `true` when the head was synchronized.
    pub fn apply<H, L>(&mut self, head: &mut H, location: &L, config: &SeoConfig) -> bool
    where
        H: Head + ?Sized,
        L: Location + ?Sized,
    {
        if self.last.as_ref() == Some(config) {
            debug!("seo"; "config unchanged, skipping sync");
            return false;
        }
        debug!("seo"; "syncing head for \"{}\"", config.title);
        synchronize(head, location, config);
        self.last = Some(config.clone());
        true
    }

    /// Config applied by the most recent sync.
    #[cfg(test)]
    pub const fn last(&self) -> Option<&SeoConfig> {
        self.last.as_ref()
    }
}
