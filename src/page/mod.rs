//! Page-level composition of head metadata and structured data.
//!
//! A [`Page`] pairs an [`SeoConfig`] with the JSON-LD records it publishes.
//! Rendering syncs the head through [`SeoSync`] every time and injects the
//! records on the first render only.

mod home;

use serde::Serialize;
use serde_json::Value;

use crate::head::{Head, Location};
use crate::seo::{SeoConfig, SeoSync, schema};

/// What a single [`Page::render`] did to the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOutcome {
    /// Head tags were (re)synchronized.
    pub synced: bool,
    /// Number of JSON-LD scripts appended.
    pub injected: usize,
}

/// A renderable page.
///
/// Records are usually JSON values; any serializable type works.
#[derive(Debug)]
pub struct Page<R = Value> {
    config: SeoConfig,
    records: Vec<R>,
    seo: SeoSync,
    mounted: bool,
}

impl<R: Serialize> Page<R> {
    pub fn new(config: SeoConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            seo: SeoSync::new(),
            mounted: false,
        }
    }

    /// Add a record injected on mount.
    pub fn with_record(mut self, record: R) -> Self {
        self.records.push(record);
        self
    }

    #[cfg(test)]
    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    /// Replace the config; the next render re-syncs if it differs.
    #[cfg(test)]
    pub fn set_config(&mut self, config: SeoConfig) {
        self.config = config;
    }

    #[cfg(test)]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Sync head metadata, then inject structured data if not yet mounted.
    ///
    /// A page counts as mounted once injection starts: if a record fails to
    /// serialize, later renders do not retry and never duplicate the records
    /// already appended.
    pub fn render<H, L>(&mut self, head: &mut H, location: &L) -> serde_json::Result<RenderOutcome>
    where
        H: Head + ?Sized,
        L: Location + ?Sized,
    {
        let synced = self.seo.apply(head, location, &self.config);

        let mut injected = 0;
        if !self.mounted {
            self.mounted = true;
            injected = schema::inject_all(head, &self.records)?;
        }

        Ok(RenderOutcome { synced, injected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::{HeadKey, MemoryHead};
    use serde_json::json;
    use std::collections::BTreeMap;

    const URL: &str = "https://voipcat.com/faq";

    fn faq_page() -> Page {
        Page::new(SeoConfig::new("FAQ | VOIP CAT", "Common questions"))
            .with_record(json!({ "@type": "FAQPage" }))
            .with_record(json!({ "@type": "BreadcrumbList" }))
    }

    #[test]
    fn test_first_render_mounts() {
        let mut head = MemoryHead::new();
        let mut page = faq_page();

        let outcome = page.render(&mut head, URL).unwrap();
        assert_eq!(outcome, RenderOutcome { synced: true, injected: 2 });
        assert_eq!(head.title(), Some("FAQ | VOIP CAT"));
        assert_eq!(head.scripts().count(), 2);
    }

    #[test]
    fn test_rerender_does_not_reinject() {
        let mut head = MemoryHead::new();
        let mut page = faq_page();
        page.render(&mut head, URL).unwrap();

        let outcome = page.render(&mut head, URL).unwrap();
        assert_eq!(outcome, RenderOutcome::default());
        assert_eq!(head.scripts().count(), 2);
    }

    #[test]
    fn test_config_change_resyncs_only() {
        let mut head = MemoryHead::new();
        let mut page = faq_page();
        page.render(&mut head, URL).unwrap();

        page.set_config(SeoConfig::new("FAQ", "Updated"));
        let outcome = page.render(&mut head, URL).unwrap();

        assert_eq!(outcome, RenderOutcome { synced: true, injected: 0 });
        assert_eq!(head.content(&HeadKey::Name("description")), Some("Updated"));
        assert_eq!(head.scripts().count(), 2);
    }

    #[test]
    fn test_failed_mount_is_not_retried() {
        // JSON object keys must be strings, so a non-empty map fails
        let broken = BTreeMap::from([((1u8, 2u8), "pair")]);
        let mut page = Page::new(SeoConfig::new("T", "D"))
            .with_record(BTreeMap::new())
            .with_record(broken)
            .with_record(BTreeMap::new());

        let mut head = MemoryHead::new();
        assert!(page.render(&mut head, URL).is_err());
        assert_eq!(head.scripts().collect::<Vec<_>>(), ["{}"]);
        // Head tags were synced before injection started
        assert_eq!(head.title(), Some("T"));

        let outcome = page.render(&mut head, URL).unwrap();
        assert_eq!(outcome, RenderOutcome::default());
        assert_eq!(head.scripts().count(), 1);
    }
}
