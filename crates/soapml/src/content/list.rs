//! List containers for repeated children

use std::fmt;

use super::{Child, ElementHolder, SoapComponent, write_children};
use crate::writer::XmlWriter;

/// Wrapper element around zero or more repeated children.
///
/// Lists carry neither attributes nor text. An empty list renders as a
/// self-closing tag.
///
/// ```
/// use soapml::{ElementHolder, ElementList, SoapComponent};
///
/// let mut users = ElementList::new("users");
/// users.element("user", |e| e.content("Alice"));
/// users.element("user", |e| e.content("Bob"));
///
/// assert_eq!(
///     users.to_pretty_string("  "),
///     "<users>\n  <user>Alice</user>\n  <user>Bob</user>\n</users>\n"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementList {
    name: String,
    children: Vec<Child>,
}

impl ElementList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn write(&self, w: &mut XmlWriter<'_>, depth: usize) {
        if self.children.is_empty() {
            w.pad(depth);
            w.push_char('<');
            w.push(&self.name);
            w.push("/>");
            w.newline();
            return;
        }

        w.open(depth, &self.name);
        write_children(&self.children, w, depth + 1);
        w.close(depth, &self.name);
    }
}

impl ElementHolder for ElementList {
    fn children(&self) -> &[Child] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }
}

impl SoapComponent for ElementList {
    fn write_to(&self, w: &mut XmlWriter<'_>, depth: usize) {
        self.write(w, depth);
    }
}

impl fmt::Display for ElementList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_compact_string())
    }
}
