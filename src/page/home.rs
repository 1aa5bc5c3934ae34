//! Landing page.

use super::Page;
use crate::seo::{SeoConfig, schema};

const TITLE: &str = "Enterprise VoIP & Business Communication Solutions | VOIP CAT";
const DESCRIPTION: &str = "Transform your business communications worldwide with VOIP Cat's enterprise-grade VoIP solutions. Crystal-clear voice quality, cloud PBX, hosted PBX, business phone systems, unified communications, and call management. Global VoIP provider with 99.9% uptime guarantee and 190+ nodes.";
const KEYWORDS: &str = "enterprise VoIP, business phone systems, cloud PBX, unified communications, VoIP security, hosted PBX, business communication, digital transformation, global VoIP provider, SIP trunking, cloud telephony";

impl Page {
    /// The home page: site-wide head tags plus every site-level JSON-LD record.
    ///
    /// Records are injected in this order: organization, website, local
    /// business, aggregate rating, then each service.
    pub fn home() -> Self {
        let config = SeoConfig {
            keywords: Some(KEYWORDS.into()),
            canonical: Some("https://voipcat.com".into()),
            og_image: Some("https://voipcat.com/images/og-image.png".into()),
            og_type: Some("website".into()),
            author: Some("VOIP CAT".into()),
            robots: Some(
                "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1"
                    .into(),
            ),
            ..SeoConfig::new(TITLE, DESCRIPTION)
        };

        let page = Page::new(config)
            .with_record(schema::organization().clone())
            .with_record(schema::website().clone())
            .with_record(schema::local_business().clone())
            .with_record(schema::aggregate_rating().clone());

        schema::services()
            .iter()
            .cloned()
            .fold(page, Page::with_record)
    }
}
