//! In-memory XML element tree.

use chrono::{DateTime, Utc};

use super::node::{AttributeValue, OutputNode};
use crate::config::NEVER_UPDATED;

/// An XML element with ordered attributes and child elements.
///
/// Booleans are written as `true`/`false`, timestamps as Unix epoch seconds,
/// and an absent timestamp as `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the encoded value of an attribute, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    fn set_raw(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Renders the element as a complete document with an XML declaration.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&escape(&self.name));
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(&escape(name));
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        out.push_str(">\n");
        for child in &self.children {
            child.write_into(out, depth + 1);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&escape(&self.name));
        out.push_str(">\n");
    }
}

impl OutputNode for XmlElement {
    fn set_attribute(&mut self, name: &str, value: impl Into<AttributeValue>) {
        self.set_raw(name, value.into().to_string());
    }

    fn set_bool_attribute(&mut self, name: &str, value: bool) {
        self.set_raw(name, value.to_string());
    }

    fn set_time_attribute(&mut self, name: &str, value: Option<DateTime<Utc>>) {
        let encoded = value.map_or(NEVER_UPDATED, |t| t.timestamp());
        self.set_raw(name, encoded.to_string());
    }

    fn append_child(&mut self, name: &str) -> &mut Self {
        self.children.push(XmlElement::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}

/// Escapes the five XML special characters.
///
/// Tab, newline and carriage return become character references so they
/// survive attribute-value normalization on re-read. Other control characters
/// cannot appear in XML 1.0 at all and are replaced with U+FFFD.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            c if is_forbidden_control(c) => escaped.push(char::REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Characters outside the XML 1.0 `Char` production.
fn is_forbidden_control(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_attribute_encodings() {
        let mut el = XmlElement::new("Node");
        el.set_attribute("count", 42u64);
        el.set_attribute("delta", -3i64);
        el.set_attribute("label", "abc");
        el.set_bool_attribute("ok", true);
        el.set_bool_attribute("failed", false);

        assert_eq!(el.attribute("count"), Some("42"));
        assert_eq!(el.attribute("delta"), Some("-3"));
        assert_eq!(el.attribute("label"), Some("abc"));
        assert_eq!(el.attribute("ok"), Some("true"));
        assert_eq!(el.attribute("failed"), Some("false"));
        assert_eq!(el.attribute("missing"), None);
    }

    #[test]
    fn test_time_attribute_uses_epoch_seconds_and_sentinel() {
        let mut el = XmlElement::new("Node");
        let t = Utc.with_ymd_and_hms(2008, 6, 1, 12, 0, 0).unwrap();
        el.set_time_attribute("at", Some(t));
        el.set_time_attribute("never", None);

        assert_eq!(el.attribute("at"), Some("1212321600"));
        assert_eq!(el.attribute("never"), Some("-1"));
    }

    #[test]
    fn test_setting_attribute_twice_overwrites_in_place() {
        let mut el = XmlElement::new("Node");
        el.set_attribute("a", 1u64);
        el.set_attribute("b", 2u64);
        el.set_attribute("a", 3u64);

        assert_eq!(el.attributes().len(), 2);
        assert_eq!(el.attributes()[0], ("a".to_string(), "3".to_string()));
    }

    #[test]
    fn test_append_child_returns_attached_child() {
        let mut root = XmlElement::new("Root");
        root.append_child("First").set_attribute("n", 1u64);
        root.append_child("Second");

        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].name(), "First");
        assert_eq!(root.children()[0].attribute("n"), Some("1"));
        assert_eq!(root.children()[1].name(), "Second");
    }

    #[test]
    fn test_to_xml_string_renders_nested_document() {
        let mut root = XmlElement::new("Root");
        root.set_attribute("id", "a&b");
        root.append_child("Leaf").set_attribute("v", "\"<x>\"");

        let xml = root.to_xml_string();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Root id=\"a&amp;b\">\n  \
             <Leaf v=\"&quot;&lt;x&gt;&quot;\"/>\n\
             </Root>\n"
        );
    }

    #[test]
    fn test_whitespace_and_control_characters_are_encoded() {
        let mut root = XmlElement::new("SiteInfo");
        root.set_attribute("site_id", "a\u{1}b\nc\td\re");

        let xml = root.to_xml_string();

        assert!(xml.contains("site_id=\"a\u{fffd}b&#10;c&#9;d&#13;e\""));
        assert!(!xml.contains('\u{1}'));
        // Only the line breaks between elements remain as raw newlines.
        assert_eq!(xml.matches('\n').count(), 2);
    }

    #[test]
    fn test_empty_element_is_self_closing() {
        let el = XmlElement::new("Empty");
        assert!(el.to_xml_string().ends_with("<Empty/>\n"));
    }
}
