//! A single XML element

use std::fmt;

use indexmap::IndexMap;

use super::{Child, ElementHolder, SoapComponent, write_children};
use crate::escape::{escape_attr, escape_text};
use crate::writer::XmlWriter;

/// One XML element.
///
/// Its effective content is the first present of: CDATA literal, raw XML
/// block, children, text. An element without effective content is omitted
/// when optional, rendered as `<name xsi:nil="true"/>` when nillable, and
/// self-closed otherwise.
///
/// ```
/// use soapml::{Element, ElementHolder, SoapComponent};
///
/// let mut user = Element::new("ns:User");
/// user.attribute("id", 123);
/// user.element("name", |e| e.content("John Doe"));
/// user.optional("nickname", |_| {});
/// user.nillable("middleName", |_| {});
///
/// assert_eq!(
///     user.to_compact_string(),
///     r#"<ns:User id="123"><name>John Doe</name><middleName xsi:nil="true"/></ns:User>"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    name: String,
    optional: bool,
    nillable: bool,
    content: Option<String>,
    cdata: Option<String>,
    raw_xml: Option<String>,
    attributes: IndexMap<String, String>,
    children: Vec<Child>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element omitted from the output when it has no content
    pub fn new_optional(name: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::new(name)
        }
    }

    /// Element rendered with `xsi:nil="true"` when it has no content
    pub fn new_nillable(name: impl Into<String>) -> Self {
        Self {
            nillable: true,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    pub const fn is_nillable(&self) -> bool {
        self.nillable
    }

    /// Sets the text content; the value's `Display` output is escaped at
    /// render time
    pub fn content(&mut self, value: impl fmt::Display) {
        self.content = Some(value.to_string());
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Sets a literal block wrapped in `<![CDATA[...]]>`, written without
    /// escaping. The text must not contain `]]>`.
    pub fn cdata(&mut self, text: impl Into<String>) {
        self.cdata = Some(text.into());
    }

    /// Sets pre-rendered markup written verbatim.
    ///
    /// Pretty output puts the block on its own lines at column 0, between the
    /// indented open and close tags, so its bytes are never altered.
    pub fn raw_xml(&mut self, xml: impl Into<String>) {
        self.raw_xml = Some(xml.into());
    }

    /// Sets an attribute, replacing any previous value for `name`
    pub fn attribute(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.attributes.insert(name.into(), value.to_string());
    }

    /// Sets the attribute `namespace:name`
    pub fn attribute_ns(&mut self, namespace: &str, name: &str, value: impl fmt::Display) {
        self.attribute(format!("{namespace}:{name}"), value);
    }

    pub fn attributes<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_content(&self) -> bool {
        self.content.is_some()
            || self.cdata.is_some()
            || self.raw_xml.is_some()
            || !self.children.is_empty()
    }

    pub(crate) fn write(&self, w: &mut XmlWriter<'_>, depth: usize) {
        let has_content = self.has_content();

        if self.optional && !has_content {
            return;
        }

        if self.nillable && !has_content {
            w.pad(depth);
            w.push_char('<');
            w.push(&self.name);
            w.push(" xsi:nil=\"true\"/>");
            w.newline();
            return;
        }

        w.pad(depth);
        w.push_char('<');
        w.push(&self.name);
        for (key, value) in &self.attributes {
            w.push_char(' ');
            w.push(key);
            w.push("=\"");
            w.push(&escape_attr(value));
            w.push_char('"');
        }

        if !has_content {
            w.push("/>");
            w.newline();
            return;
        }

        w.push_char('>');
        if let Some(cdata) = &self.cdata {
            w.push("<![CDATA[");
            w.push(cdata);
            w.push("]]>");
        } else if let Some(raw) = &self.raw_xml {
            w.newline();
            w.push(raw);
            w.newline();
            w.pad(depth);
        } else if !self.children.is_empty() {
            w.newline();
            write_children(&self.children, w, depth + 1);
            w.pad(depth);
        } else if let Some(text) = &self.content {
            w.push(&escape_text(text));
        }
        w.push("</");
        w.push(&self.name);
        w.push_char('>');
        w.newline();
    }
}

impl ElementHolder for Element {
    fn children(&self) -> &[Child] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }
}

impl SoapComponent for Element {
    fn write_to(&self, w: &mut XmlWriter<'_>, depth: usize) {
        self.write(w, depth);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_string())
    }
}
