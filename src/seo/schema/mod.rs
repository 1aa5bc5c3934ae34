//! Schema.org structured data (JSON-LD).
//!
//! Builders turn plain input records into JSON objects; [`inject`] appends
//! one `<script type="application/ld+json">` per record to the head.
//! Records are opaque JSON to everything downstream: field order is the
//! construction order and nothing is validated beyond serialization.

mod site;

pub use site::{aggregate_rating, local_business, organization, services, website};

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::head::{Head, Placement};

const CONTEXT: &str = "https://schema.org";
const SITE_NAME: &str = "VOIP CAT";
const SITE_URL: &str = "https://voipcat.com";
const LOGO: &str = "https://voipcat.com/logo-fox.jpg";
const ARTICLE_IMAGE: &str = "https://voipcat.com/images/og-articles.png";
const ARTICLE_KEYWORDS: &str = "VoIP, Business Communication";

/// MIME type of injected script elements.
pub const JSON_LD: &str = "application/ld+json";

fn logo() -> Value {
    json!({
        "@type": "ImageObject",
        "url": LOGO,
        "width": 250,
        "height": 250,
    })
}

// ============================================================================
// Inputs
// ============================================================================

/// One question/answer pair of an FAQ page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub name: String,
    pub url: String,
}

/// Fields of a published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub date: String,
    #[serde(default, alias = "modifiedDate")]
    pub modified_date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

// ============================================================================
// Builders
// ============================================================================

/// `FAQPage` with one `Question` per entry, in input order.
pub fn faq(entries: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// `BreadcrumbList` whose items are numbered from 1 in input order.
pub fn breadcrumb(entries: &[BreadcrumbEntry]) -> Value {
    let items: Vec<Value> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": entry.name,
                "item": entry.url,
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// `Article` record with its `@id` derived from the title.
pub fn article(input: &ArticleInput) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Article",
        "@id": format!("{SITE_URL}/articles/{}", article_slug(&input.title)),
        "headline": input.title,
        "description": input.description,
        "image": non_empty(&input.image).unwrap_or(ARTICLE_IMAGE),
        "author": {
            "@type": "Organization",
            "name": input.author,
            "url": SITE_URL,
        },
        "publisher": {
            "@type": "Organization",
            "name": SITE_NAME,
            "logo": logo(),
        },
        "datePublished": input.date,
        "dateModified": non_empty(&input.modified_date).unwrap_or(&input.date),
        "articleBody": input.content,
        "keywords": non_empty(&input.category).unwrap_or(ARTICLE_KEYWORDS),
        "inLanguage": "en",
    })
}

/// Lowercase the title and turn each whitespace run into a single `-`.
///
/// U+FEFF counts as whitespace, as it does for JavaScript string trimming.
///
/// Punctuation and other characters pass through untouched.
pub fn article_slug(title: &str) -> String {
    static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\u{FEFF}]+").unwrap());
    RE_WHITESPACE
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ============================================================================
// Injection
// ============================================================================

/// Serialize `record` and append it to `head` as a JSON-LD script.
///
/// Every call appends a new element. A record that cannot be serialized
/// is a caller bug; the error is returned and nothing is appended.
pub fn inject<H, T>(head: &mut H, record: &T) -> serde_json::Result<()>
where
    H: Head + ?Sized,
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string(record)?;
    let id = head.create("script", Placement::Append);
    head.set_attr(id, "type", JSON_LD);
    head.set_text(id, &text);
    Ok(())
}

/// Inject each record in order, stopping at the first failure.
///
/// Records appended before the failing one stay in the head.
pub fn inject_all<H, I>(head: &mut H, records: I) -> serde_json::Result<usize>
where
    H: Head + ?Sized,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut count = 0;
    for record in records {
        inject(head, &record)?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::MemoryHead;
    use std::collections::BTreeMap;

    fn entry(name: &str, url: &str) -> BreadcrumbEntry {
        BreadcrumbEntry {
            name: name.into(),
            url: url.into(),
        }
    }

    fn hello_world() -> ArticleInput {
        ArticleInput {
            title: "Hello World".into(),
            description: "First post".into(),
            content: "Body".into(),
            author: "VOIP CAT Team".into(),
            date: "2025-03-01".into(),
            modified_date: None,
            image: None,
            category: None,
        }
    }

    #[test]
    fn test_breadcrumb_positions() {
        let list = breadcrumb(&[entry("Home", "/"), entry("Plans", "/plans")]);
        let items = list["itemListElement"].as_array().unwrap();

        assert_eq!(list["@type"], "BreadcrumbList");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[0]["item"], "/");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Plans");
        assert_eq!(items[1]["item"], "/plans");
    }

    #[test]
    fn test_breadcrumb_empty() {
        let list = breadcrumb(&[]);
        assert_eq!(list["itemListElement"], json!([]));
    }

    #[test]
    fn test_faq_keeps_order_and_duplicates() {
        let q = |question: &str, answer: &str| FaqEntry {
            question: question.into(),
            answer: answer.into(),
        };
        let page = faq(&[q("Uptime?", "99.9%"), q("Nodes?", "190+"), q("Uptime?", "99.9%")]);
        let questions = page["mainEntity"].as_array().unwrap();

        assert_eq!(page["@type"], "FAQPage");
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0]["@type"], "Question");
        assert_eq!(questions[1]["name"], "Nodes?");
        assert_eq!(questions[1]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(questions[1]["acceptedAnswer"]["text"], "190+");
        assert_eq!(questions[0], questions[2]);
    }

    #[test]
    fn test_article_defaults() {
        let record = article(&hello_world());

        assert!(record["@id"].as_str().unwrap().ends_with("/hello-world"));
        assert_eq!(record["@id"], "https://voipcat.com/articles/hello-world");
        assert_eq!(record["headline"], "Hello World");
        assert_eq!(record["dateModified"], "2025-03-01");
        assert_eq!(record["image"], "https://voipcat.com/images/og-articles.png");
        assert_eq!(record["keywords"], "VoIP, Business Communication");
        assert_eq!(record["publisher"]["logo"]["width"], 250);
    }

    #[test]
    fn test_article_overrides() {
        let input = ArticleInput {
            modified_date: Some("2025-04-01".into()),
            image: Some("/cover.png".into()),
            category: Some("SIP".into()),
            ..hello_world()
        };
        let record = article(&input);

        assert_eq!(record["dateModified"], "2025-04-01");
        assert_eq!(record["image"], "/cover.png");
        assert_eq!(record["keywords"], "SIP");
    }

    #[test]
    fn test_article_slug_passes_punctuation_through() {
        assert_eq!(article_slug("Hello World"), "hello-world");
        assert_eq!(article_slug("VoIP  vs.\tPSTN: 2025!"), "voip-vs.-pstn:-2025!");
        assert_eq!(article_slug(" Edge "), "-edge-");
    }

    #[test]
    fn test_article_slug_byte_order_mark_is_whitespace() {
        assert_eq!(article_slug("Hello\u{FEFF}World"), "hello-world");
        assert_eq!(article_slug("\u{FEFF}SIP \u{FEFF} Trunks"), "-sip-trunks");
    }

    #[test]
    fn test_inject_round_trip() {
        let mut head = MemoryHead::new();
        inject(&mut head, &json!({ "a": 1 })).unwrap();

        let scripts: Vec<_> = head.scripts().collect();
        assert_eq!(scripts.len(), 1);
        let parsed: Value = serde_json::from_str(scripts[0]).unwrap();
        assert_eq!(parsed, json!({ "a": 1 }));
    }

    #[test]
    fn test_inject_accumulates() {
        let mut head = MemoryHead::new();
        inject(&mut head, organization()).unwrap();
        inject(&mut head, organization()).unwrap();

        let scripts: Vec<_> = head.scripts().collect();
        assert_eq!(scripts.len(), 2);
        assert_eq!(scripts[0], scripts[1]);
    }

    #[test]
    fn test_inject_compact_in_construction_order() {
        let mut head = MemoryHead::new();
        inject(&mut head, &json!({ "z": 1, "a": [true, null] })).unwrap();
        assert_eq!(head.scripts().next(), Some(r#"{"z":1,"a":[true,null]}"#));
    }

    #[test]
    fn test_inject_error_propagates() {
        // JSON object keys must be strings
        let mut record = BTreeMap::new();
        record.insert((1, 2), "pair");

        let mut head = MemoryHead::new();
        assert!(inject(&mut head, &record).is_err());
        assert!(head.elements().is_empty());
    }

    #[test]
    fn test_inject_all_stops_at_first_failure() {
        let broken = BTreeMap::from([((1u8, 2u8), "pair")]);
        let records = [BTreeMap::new(), broken, BTreeMap::new()];

        let mut head = MemoryHead::new();
        assert!(inject_all(&mut head, &records).is_err());
        assert_eq!(head.scripts().collect::<Vec<_>>(), ["{}"]);
    }

    #[test]
    fn test_inject_all_in_order() {
        let mut head = MemoryHead::new();
        let count = inject_all(&mut head, services()).unwrap();

        assert_eq!(count, 3);
        let ids: Vec<Value> = head
            .scripts()
            .map(|s| serde_json::from_str::<Value>(s).unwrap()["@id"].clone())
            .collect();
        assert_eq!(
            ids,
            [
                "https://voipcat.com/services/voip",
                "https://voipcat.com/services/cloud-pbx",
                "https://voipcat.com/services/business-communication",
            ]
        );
    }
}
