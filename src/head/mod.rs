//! Document `<head>` abstraction.
//!
//! The synchronizer and the JSON-LD injector only need a handful of
//! operations on the head: look an element up by its semantic key, create
//! one, and set attributes or text on it. [`Head`] captures exactly that,
//! so the same logic runs against a browser-like document or the
//! in-memory [`MemoryHead`].
//!
//! ```text
//! HeadKey::Name("robots")                    → meta[name="robots"]
//! HeadKey::Property("og:title")              → meta[property="og:title"]
//! HeadKey::Charset                           → meta[charset]
//! HeadKey::Link { rel: "canonical", .. }     → link[rel="canonical"]
//! HeadKey::Link { rel: "alternate",
//!                 hreflang: Some("en") }     → link[rel="alternate"][hreflang="en"]
//! ```

mod memory;

pub use memory::MemoryHead;

/// Stable handle to an element inside a [`Head`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Where a newly created element goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// After the last child.
    Append,
    /// Before the current first child.
    First,
}

/// Semantic identity of a managed head element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadKey<'a> {
    /// `meta[name="…"]`
    Name(&'a str),
    /// `meta[property="…"]` (OpenGraph, Twitter, article tags)
    Property(&'a str),
    /// `meta[charset]`
    Charset,
    /// `link[rel="…"]`, narrowed by `hreflang` when given.
    Link {
        rel: &'a str,
        hreflang: Option<&'a str>,
    },
}

impl<'a> HeadKey<'a> {
    /// Tag name of elements carrying this key.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Name(_) | Self::Property(_) | Self::Charset => "meta",
            Self::Link { .. } => "link",
        }
    }

    /// Whether an element with `tag` and attribute lookup `attr` carries this key.
    pub fn matches<'e>(&self, tag: &str, attr: impl Fn(&str) -> Option<&'e str>) -> bool {
        if tag != self.tag() {
            return false;
        }
        match *self {
            Self::Name(name) => attr("name") == Some(name),
            Self::Property(name) => attr("property") == Some(name),
            Self::Charset => attr("charset").is_some(),
            Self::Link { rel, hreflang } => {
                attr("rel") == Some(rel) && hreflang.is_none_or(|lang| attr("hreflang") == Some(lang))
            }
        }
    }
}

/// Mutable document head.
///
/// Implementations must keep element ids stable across insertions.
pub trait Head {
    /// Set the document title, creating the `<title>` element if needed.
    fn set_title(&mut self, title: &str);

    /// First element carrying `key`, in document order.
    fn find(&self, key: &HeadKey<'_>) -> Option<ElementId>;

    /// Create an empty element and insert it at `placement`.
    fn create(&mut self, tag: &str, placement: Placement) -> ElementId;

    /// Set (or overwrite) an attribute.
    fn set_attr(&mut self, id: ElementId, name: &str, value: &str);

    /// Replace the text content of an element.
    fn set_text(&mut self, id: ElementId, text: &str);
}

/// Accessor for the current page address.
///
/// Callers read it every time they need it instead of caching it, so a
/// location that changes between calls is always reflected.
pub trait Location {
    fn href(&self) -> String;
}

impl Location for url::Url {
    fn href(&self) -> String {
        self.as_str().to_owned()
    }
}

impl Location for str {
    fn href(&self) -> String {
        self.to_owned()
    }
}

impl Location for String {
    fn href(&self) -> String {
        self.clone()
    }
}
