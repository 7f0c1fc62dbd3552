//! Thin event writer over quick-xml.

use crate::error::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Writes one XML part into memory.
pub(crate) struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Start a part with the standalone UTF-8 declaration OOXML expects.
    pub fn with_declaration() -> Result<Self> {
        let mut w = Self {
            inner: Writer::new(Vec::new()),
        };
        w.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(w)
    }

    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.event(Event::Start(element(name, attrs)))
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        self.event(Event::Empty(element(name, attrs)))
    }

    /// Write escaped text, dropping characters XML 1.0 cannot carry.
    pub fn text(&mut self, text: &str) -> Result<()> {
        let clean: String = text.chars().filter(|c| is_xml_char(*c)).collect();
        self.event(Event::Text(BytesText::new(&clean)))
    }

    /// Write `<name>text</name>`.
    pub fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.inner
            .write_event(event)
            .map_err(|e| Error::Xml(e.to_string()))
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for &(key, value) in attrs {
        start.push_attribute((key, value));
    }
    start
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut XmlWriter) -> Result<()>) -> String {
        let mut w = XmlWriter::with_declaration().unwrap();
        f(&mut w).unwrap();
        String::from_utf8(w.into_bytes()).unwrap()
    }

    #[test]
    fn test_declaration() {
        let xml = written(|_| Ok(()));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    }

    #[test]
    fn test_escaping() {
        let xml = written(|w| w.text_element("w:t", &[("xml:space", "preserve")], "a < b & \"c\""));
        assert!(xml.contains("<w:t xml:space=\"preserve\">"));
        assert!(xml.contains("a &lt; b &amp;"));
        assert!(!xml.contains("a < b"));
    }

    #[test]
    fn test_control_chars_dropped() {
        let xml = written(|w| w.text_element("t", &[], "a\u{0}b\u{7}c\td"));
        assert!(xml.contains("<t>abc\td</t>"));
    }

    #[test]
    fn test_empty_element() {
        let xml = written(|w| w.empty("w:b", &[]));
        assert!(xml.ends_with("<w:b/>"));
    }
}
