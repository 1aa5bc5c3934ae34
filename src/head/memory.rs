//! In-memory document head.

use std::fmt::Write;

use super::{ElementId, Head, HeadKey, Placement};
use crate::utils::html::{escape, escape_attr, escape_script, is_raw_text_element, is_void_element};

/// A head child element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
}

impl Element {
    fn new(id: ElementId, tag: &str) -> Self {
        Self {
            id,
            tag: tag.to_owned(),
            attrs: Vec::new(),
            text: None,
        }
    }

    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.attrs.push((name.to_owned(), value.to_owned())),
        }
    }

    fn has_key(&self, key: &HeadKey<'_>) -> bool {
        key.matches(&self.tag, |name| self.attr(name))
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if is_void_element(&self.tag) {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            if is_raw_text_element(&self.tag) {
                out.push_str(&escape_script(text));
            } else {
                out.push_str(&escape(text));
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Ordered list of head children.
///
/// Ids come from a monotonic counter, so inserting at the front never
/// invalidates handles held by callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryHead {
    elements: Vec<Element>,
    next_id: u32,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Children in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[cfg(test)]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// First element carrying `key`.
    pub fn query(&self, key: &HeadKey<'_>) -> Option<&Element> {
        self.elements.iter().find(|e| e.has_key(key))
    }

    /// `content` of the meta element carrying `key`.
    #[cfg(test)]
    pub fn content(&self, key: &HeadKey<'_>) -> Option<&str> {
        self.query(key).and_then(|e| e.attr("content"))
    }

    /// Number of elements carrying `key`.
    #[cfg(test)]
    pub fn count(&self, key: &HeadKey<'_>) -> usize {
        self.elements.iter().filter(|e| e.has_key(key)).count()
    }

    /// Text of the `<title>` element.
    pub fn title(&self) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.tag == "title")
            .and_then(|e| e.text.as_deref())
    }

    /// JSON-LD script bodies in document order.
    pub fn scripts(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|e| e.tag == "script" && e.attr("type") == Some("application/ld+json"))
            .filter_map(|e| e.text.as_deref())
    }

    /// Serialize as a `<head>` element, one child per line.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<head>\n");
        for element in &self.elements {
            out.push_str("  ");
            element.write_html(&mut out);
            out.push('\n');
        }
        out.push_str("</head>\n");
        out
    }
}

impl Head for MemoryHead {
    fn set_title(&mut self, title: &str) {
        let existing = self.elements.iter().find(|e| e.tag == "title").map(Element::id);
        let id = match existing {
            Some(id) => id,
            None => self.create("title", Placement::Append),
        };
        self.set_text(id, title);
    }

    fn find(&self, key: &HeadKey<'_>) -> Option<ElementId> {
        self.query(key).map(Element::id)
    }

    fn create(&mut self, tag: &str, placement: Placement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let element = Element::new(id, tag);
        match placement {
            Placement::Append => self.elements.push(element),
            Placement::First => self.elements.insert(0, element),
        }
        id
    }

    fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.set_attr(name, value);
        }
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.get_mut(id) {
            element.text = Some(text.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_survive_front_insertion() {
        let mut head = MemoryHead::new();
        let a = head.create("meta", Placement::Append);
        let b = head.create("meta", Placement::First);
        head.set_attr(a, "name", "a");
        head.set_attr(b, "name", "b");

        let names: Vec<_> = head.elements().iter().map(|e| e.attr("name")).collect();
        assert_eq!(names, [Some("b"), Some("a")]);
    }

    #[test]
    fn test_set_attr_overwrites_in_place() {
        let mut head = MemoryHead::new();
        let id = head.create("meta", Placement::Append);
        head.set_attr(id, "name", "robots");
        head.set_attr(id, "content", "noindex");
        head.set_attr(id, "content", "index");

        let element = head.get(id).unwrap();
        assert_eq!(element.attrs.len(), 2);
        assert_eq!(head.content(&HeadKey::Name("robots")), Some("index"));
    }

    #[test]
    fn test_single_title_element() {
        let mut head = MemoryHead::new();
        head.set_title("One");
        head.set_title("Two");
        assert_eq!(head.title(), Some("Two"));
        assert_eq!(head.elements().iter().filter(|e| e.tag == "title").count(), 1);
    }

    #[test]
    fn test_to_html() {
        let mut head = MemoryHead::new();
        head.set_title("Plans & Pricing");
        let meta = head.create("meta", Placement::Append);
        head.set_attr(meta, "name", "description");
        head.set_attr(meta, "content", "\"Fast\" VoIP");
        let script = head.create("script", Placement::Append);
        head.set_attr(script, "type", "application/ld+json");
        head.set_text(script, r#"{"a":"</script>"}"#);

        assert_eq!(
            head.to_html(),
            concat!(
                "<head>\n",
                "  <title>Plans &amp; Pricing</title>\n",
                "  <meta name=\"description\" content=\"&quot;Fast&quot; VoIP\"/>\n",
                "  <script type=\"application/ld+json\">{\"a\":\"<\\/script>\"}</script>\n",
                "</head>\n",
            )
        );
    }
}
