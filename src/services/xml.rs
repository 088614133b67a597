// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Namespace-normalized XML element tree.
//!
//! Elements are stored under their local name only, so `gpxtpx:hr` and
//! `{http://www.topografix.com/GPX/1/1}trk` become `hr` and `trk`. Consumers
//! never deal with prefixes or namespace URIs. Namespace declarations
//! (`xmlns`, `xmlns:*`) are dropped from the attribute list.
//!
//! Text is kept exactly as written (entities unescaped, whitespace intact);
//! callers decide whether to trim.

use crate::error::{DecodeError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// An XML element with its attributes, direct text and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    /// Local name (namespace stripped)
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// All direct text of this element concatenated, including text that
    /// follows a child element (`<a>x<b/>y</a>` gives `"xy"`). Not trimmed.
    pub text: String,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Value of the attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All children with the given local name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First child with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First child element regardless of name.
    pub fn first_child(&self) -> Option<&XmlElement> {
        self.children.first()
    }
}

// Children are released through a work list so that dropping a deeply
// nested tree does not recurse once per level.
impl Drop for XmlElement {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut element) = pending.pop() {
            pending.append(&mut element.children);
        }
    }
}

/// Parse a whole document into a tree, returning the root element.
pub fn parse<R: BufRead>(source: R) -> Result<XmlElement> {
    let mut reader = Reader::from_reader(source);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(DecodeError::Malformed(
                        "multiple root elements".to_string(),
                    ));
                }
                stack.push(element_from_start(&e)?);
            }
            Event::Empty(e) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    DecodeError::Malformed("closing tag without matching opening tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                match stack.last_mut() {
                    Some(current) => current.text.push_str(&text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(DecodeError::Malformed(
                            "text outside of the root element".to_string(),
                        ))
                    }
                }
            }
            Event::CData(c) => {
                let text = utf8(&c, "CDATA section")?.to_string();
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::Malformed(format!(
            "unexpected end of document inside <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| DecodeError::Malformed("document has no root element".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement> {
    let local = start.local_name();
    let name = utf8(local.as_ref(), "element name")?.to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            DecodeError::Malformed(format!("invalid attribute on <{name}>: {e}"))
        })?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = utf8(attr.key.as_ref(), "attribute name")?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(DecodeError::Malformed(
                "multiple root elements".to_string(),
            ))
        }
    }
    Ok(())
}

fn utf8<'a>(bytes: &'a [u8], what: &str) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|e| DecodeError::Malformed(format!("invalid UTF-8 in {what}: {e}")))
}
