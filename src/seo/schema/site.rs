//! Site-wide JSON-LD records.
//!
//! Built once on first use and shared; injecting them serializes the same
//! value every time.

use std::sync::LazyLock;

use serde_json::{Value, json};

use super::{CONTEXT, LOGO, SITE_NAME, SITE_URL};

const DESCRIPTION: &str = "Enterprise-grade VoIP, business communication solutions, and global networking services for businesses worldwide. Crystal-clear voice quality with 99.9% uptime guarantee.";
const TELEPHONE: &str = "+201557649136";
const EMAIL: &str = "sales.voipcat@gmail.com";
const SAME_AS: [&str; 3] = [
    "https://www.linkedin.com/company/voipcat",
    "https://twitter.com/voipcat",
    "https://www.facebook.com/voipcat",
];

fn postal_address() -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": "251 Mercer St",
        "addressLocality": "New York",
        "addressRegion": "NY",
        "postalCode": "10012",
        "addressCountry": "US",
    })
}

fn provider() -> Value {
    json!({
        "@type": "Organization",
        "name": SITE_NAME,
        "url": SITE_URL,
    })
}

fn worldwide() -> Value {
    json!([{ "@type": "Country", "name": "Worldwide" }])
}

static ORGANIZATION: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "@id": SITE_URL,
        "name": SITE_NAME,
        "url": SITE_URL,
        "logo": super::logo(),
        "image": LOGO,
        "description": DESCRIPTION,
        "sameAs": SAME_AS,
        "contactPoint": [
            {
                "@type": "ContactPoint",
                "contactType": "Customer Support",
                "telephone": TELEPHONE,
                "email": EMAIL,
                "areaServed": "Worldwide",
                "availableLanguage": "en",
            },
            {
                "@type": "ContactPoint",
                "contactType": "Sales",
                "telephone": TELEPHONE,
                "email": EMAIL,
                "areaServed": "Worldwide",
            },
        ],
        "address": postal_address(),
        "founder": { "@type": "Person", "name": "VOIP CAT Team" },
        "foundingDate": "2015",
        "areaServed": worldwide(),
        "knowsAbout": [
            "VoIP Solutions",
            "Business Communication",
            "Cloud PBX",
            "Enterprise Telephony",
            "Unified Communications",
            "Global Networking",
        ],
    })
});

static WEBSITE: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "@id": SITE_URL,
        "name": SITE_NAME,
        "url": SITE_URL,
        "description": "Enterprise VoIP & Business Communication Solutions - Global VoIP provider with 190+ nodes and 99.9% uptime.",
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{SITE_URL}/articles?search={{search_term_string}}"),
            },
            "query-input": "required name=search_term_string",
        },
        "inLanguage": "en",
    })
});

static LOCAL_BUSINESS: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "@context": CONTEXT,
        "@type": "LocalBusiness",
        "@id": SITE_URL,
        "name": SITE_NAME,
        "image": LOGO,
        "description": "Enterprise VoIP & Business Communication Solutions",
        "url": SITE_URL,
        "telephone": TELEPHONE,
        "email": EMAIL,
        "address": postal_address(),
        "priceRange": "$75-$199",
        "areaServed": "Worldwide",
        "sameAs": SAME_AS,
    })
});

static AGGREGATE_RATING: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "@context": CONTEXT,
        "@type": "AggregateRating",
        "ratingValue": "4.8",
        "bestRating": "5",
        "worstRating": "1",
        "ratingCount": "150",
        "itemReviewed": provider(),
    })
});

/// Cloud PBX tier offered in the service catalogue.
struct Plan {
    name: &'static str,
    calls: u32,
    price: &'static str,
}

const PLANS: [Plan; 3] = [
    Plan { name: "Golden Node", calls: 8, price: "75" },
    Plan { name: "Diamond Core", calls: 40, price: "119" },
    Plan { name: "Platinum Link", calls: 80, price: "199" },
];

fn service(slug: &str, name: &str, description: &str, service_type: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Service",
        "@id": format!("{SITE_URL}/services/{slug}"),
        "name": name,
        "description": description,
        "provider": provider(),
        "areaServed": worldwide(),
        "availableLanguage": "en",
        "serviceType": service_type,
    })
}

static SERVICES: LazyLock<[Value; 3]> = LazyLock::new(|| {
    let mut voip = service(
        "voip",
        "Enterprise VoIP Solutions",
        "Crystal-clear, enterprise-grade VoIP services with 99.9% uptime guarantee. Global coverage to 190+ countries with advanced security features.",
        "Telecommunications",
    );
    voip["offers"] = json!({
        "@type": "AggregateOffer",
        "priceCurrency": "USD",
        "lowPrice": PLANS[0].price,
        "highPrice": PLANS[2].price,
        "offerCount": PLANS.len().to_string(),
    });

    let mut pbx = service(
        "cloud-pbx",
        "Cloud PBX Solutions",
        "Scalable neural phone systems for every size organization. From SOHO to enterprise-level call volumes with up to 80 concurrent calls.",
        "Business Services",
    );
    pbx["offers"] = PLANS
        .iter()
        .map(|plan| {
            json!({
                "@type": "Offer",
                "name": plan.name,
                "description": format!("Up to {} concurrent calls", plan.calls),
                "price": plan.price,
                "priceCurrency": "USD",
                "priceValidUntil": "2026-12-31",
            })
        })
        .collect();

    let communication = service(
        "business-communication",
        "Business Communication Services",
        "Unified communications platform with HD voice quality, advanced security, and 24/7 neural support for global enterprises.",
        "Telecommunications",
    );

    [voip, pbx, communication]
});

/// `Organization` record for the site owner.
pub fn organization() -> &'static Value {
    &ORGANIZATION
}

/// `WebSite` record with the article search action.
pub fn website() -> &'static Value {
    &WEBSITE
}

/// `LocalBusiness` record.
pub fn local_business() -> &'static Value {
    &LOCAL_BUSINESS
}

/// `AggregateRating` for the organization.
pub fn aggregate_rating() -> &'static Value {
    &AGGREGATE_RATING
}

/// One `Service` record per product line.
pub fn services() -> &'static [Value] {
    SERVICES.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_share_context() {
        let records = [organization(), website(), local_business(), aggregate_rating()];
        for record in records.into_iter().chain(services()) {
            assert_eq!(record["@context"], "https://schema.org");
            assert!(record["@type"].is_string());
        }
    }

    #[test]
    fn test_organization_field_order() {
        let keys: Vec<_> = organization()
            .as_object()
            .unwrap()
            .keys()
            .take(5)
            .cloned()
            .collect();
        assert_eq!(keys, ["@context", "@type", "@id", "name", "url"]);
    }

    #[test]
    fn test_services_offers() {
        let [voip, pbx, communication] = services() else {
            panic!("expected three services");
        };
        assert_eq!(voip["@id"], "https://voipcat.com/services/voip");
        assert_eq!(voip["offers"]["lowPrice"], "75");
        assert_eq!(voip["offers"]["highPrice"], "199");
        assert_eq!(voip["offers"]["offerCount"], "3");

        let offers = pbx["offers"].as_array().unwrap();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[1]["name"], "Diamond Core");
        assert_eq!(offers[1]["description"], "Up to 40 concurrent calls");
        assert_eq!(offers[2]["price"], "199");

        assert!(communication.get("offers").is_none());
        // `offers` is appended after the common fields
        let last = pbx.as_object().unwrap().keys().last().cloned();
        assert_eq!(last.as_deref(), Some("offers"));
    }

    #[test]
    fn test_website_search_template() {
        assert_eq!(
            website()["potentialAction"]["target"]["urlTemplate"],
            "https://voipcat.com/articles?search={search_term_string}"
        );
    }

    #[test]
    fn test_rating_reviews_organization() {
        assert_eq!(aggregate_rating()["itemReviewed"]["name"], "VOIP CAT");
        assert_eq!(aggregate_rating()["ratingValue"], "4.8");
    }
}
