// crates/feed-parser/src/document.rs
//! Byte-level document decoding
//!
//! Raw feed bytes are transcoded to UTF-8 (byte-order mark first, then the
//! XML declaration's `encoding` label) and read into a small [`Element`]
//! tree that the format adapters walk.

use crate::error::{FeedError, FeedResult};
use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::reader::{NsReader, Reader};
use std::borrow::Cow;

/// One XML element with its character data and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local name, without any prefix
    pub name: String,
    /// Resolved namespace URI (the raw prefix if it was never declared)
    pub namespace: Option<String>,
    /// Unprefixed attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Text and CDATA content, unescaped and trimmed
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: String, namespace: Option<String>) -> Self {
        Self {
            name,
            namespace,
            ..Default::default()
        }
    }

    /// True if the element has the given local name and namespace
    pub fn is(&self, name: &str, namespace: Option<&str>) -> bool {
        self.name == name && self.namespace.as_deref() == namespace
    }

    /// Children with the given local name in this element's own namespace
    ///
    /// Extension elements (`media:title`, `dc:creator`, ...) live in other
    /// namespaces and are never returned.
    pub fn children<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Element> + 'n
    where
        'a: 'n,
    {
        self.children
            .iter()
            .filter(move |c| c.name == name && c.namespace == self.namespace)
    }

    /// First child with the given local name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.name == name && c.namespace == self.namespace)
    }

    /// Text of the first child with the given name, if it is non-empty
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name)
            .map(|c| c.text.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Value of an unprefixed attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Transcodes a raw document into UTF-8
pub fn decode(bytes: &[u8]) -> FeedResult<Cow<'_, str>> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return transcode(encoding, &bytes[bom_len..]);
    }

    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            FeedError::malformed(format!("unsupported encoding {label:?}"))
        })?,
        None => UTF_8,
    };

    transcode(encoding, bytes)
}

fn transcode<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> FeedResult<Cow<'a, str>> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(FeedError::malformed(format!(
            "invalid {} byte sequence",
            encoding.name()
        )));
    }
    Ok(text)
}

/// Reads the `encoding` label from a leading XML declaration
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    match reader.read_event_into(&mut buf) {
        Ok(Event::Decl(decl)) => {
            let label = decl.encoding()?.ok()?;
            Some(String::from_utf8_lossy(&label).into_owned())
        }
        _ => None,
    }
}

/// Decodes raw bytes and reads the element tree
pub fn read_document(bytes: &[u8]) -> FeedResult<Element> {
    let text = decode(bytes)?;
    read_str(&text)
}

/// Reads the element tree of an already decoded document
pub fn read_str(text: &str) -> FeedResult<Element> {
    let mut reader = NsReader::from_str(text);
    let config = reader.config_mut();
    config.trim_text(true);
    config.expand_empty_elements = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(e) => {
                if root.is_some() && stack.is_empty() {
                    return Err(FeedError::malformed("multiple root elements"));
                }

                let name = utf8(e.local_name().as_ref())?.to_string();
                let namespace = match resolved {
                    ResolveResult::Bound(ns) => Some(utf8(ns.as_ref())?.to_string()),
                    ResolveResult::Unknown(prefix) => Some(utf8(&prefix)?.to_string()),
                    ResolveResult::Unbound => None,
                };

                let mut element = Element::new(name, namespace);
                for attr in e.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    if attr.key.prefix().is_some() || attr.key.as_namespace_binding().is_some() {
                        continue;
                    }
                    let key = utf8(attr.key.local_name().as_ref())?.to_string();
                    let value = attr.unescape_value()?.into_owned();
                    element.attributes.push((key, value));
                }
                stack.push(element);
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| FeedError::malformed("unexpected closing tag"))?;
                let trimmed = element.text.trim();
                if trimmed.len() != element.text.len() {
                    element.text = trimmed.to_string();
                }

                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(e) => {
                let content = e.unescape()?;
                append_text(&mut stack, &content)?;
            }
            Event::CData(e) => {
                let content = utf8(&e)?;
                append_text(&mut stack, content)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(FeedError::malformed(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| FeedError::malformed("no root element"))
}

fn append_text(stack: &mut [Element], content: &str) -> FeedResult<()> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(content);
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(FeedError::malformed("text outside the root element")),
    }
}

fn utf8(bytes: &[u8]) -> FeedResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| FeedError::malformed(e.to_string()))
}
