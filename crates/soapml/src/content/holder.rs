//! The construction surface shared by every container-like node

use super::{Child, Element, ElementList, write_children};
use crate::writer::XmlWriter;

/// Ordered child accumulation.
///
/// Every method appends exactly one child and configures it through the
/// closure before it is stored. Names are not validated; a name containing
/// characters that are illegal in XML produces undefined output.
pub trait ElementHolder {
    fn children(&self) -> &[Child];

    fn children_mut(&mut self) -> &mut Vec<Child>;

    /// Adds a child element
    fn element(&mut self, name: impl Into<String>, block: impl FnOnce(&mut Element)) {
        let mut element = Element::new(name);
        block(&mut element);
        self.children_mut().push(Child::Element(element));
    }

    /// Adds a child element named `namespace:name`
    fn element_ns(&mut self, namespace: &str, name: &str, block: impl FnOnce(&mut Element)) {
        self.element(format!("{namespace}:{name}"), block);
    }

    /// Adds a child element that is omitted when it ends up without content
    fn optional(&mut self, name: impl Into<String>, block: impl FnOnce(&mut Element)) {
        let mut element = Element::new_optional(name);
        block(&mut element);
        self.children_mut().push(Child::Element(element));
    }

    fn optional_ns(&mut self, namespace: &str, name: &str, block: impl FnOnce(&mut Element)) {
        self.optional(format!("{namespace}:{name}"), block);
    }

    /// Adds a child element rendered as `<name xsi:nil="true"/>` when it ends
    /// up without content
    fn nillable(&mut self, name: impl Into<String>, block: impl FnOnce(&mut Element)) {
        let mut element = Element::new_nillable(name);
        block(&mut element);
        self.children_mut().push(Child::Element(element));
    }

    fn nillable_ns(&mut self, namespace: &str, name: &str, block: impl FnOnce(&mut Element)) {
        self.nillable(format!("{namespace}:{name}"), block);
    }

    /// Adds a list container for repeated children
    fn list(&mut self, name: impl Into<String>, block: impl FnOnce(&mut ElementList)) {
        let mut list = ElementList::new(name);
        block(&mut list);
        self.children_mut().push(Child::List(list));
    }

    fn list_ns(&mut self, namespace: &str, name: &str, block: impl FnOnce(&mut ElementList)) {
        self.list(format!("{namespace}:{name}"), block);
    }
}

/// A nameless run of children, used for the header, the body content and
/// fault details. Only the enclosing wrapper knows which tag surrounds it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Section {
    children: Vec<Child>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn write_content(&self, w: &mut XmlWriter<'_>, depth: usize) {
        write_children(&self.children, w, depth);
    }

    /// Renders `<tag>`, the children one level deeper, then `</tag>`
    pub(crate) fn write_wrapped(&self, w: &mut XmlWriter<'_>, tag: &str, depth: usize) {
        w.open(depth, tag);
        self.write_content(w, depth + 1);
        w.close(depth, tag);
    }
}

impl ElementHolder for Section {
    fn children(&self) -> &[Child] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }
}
