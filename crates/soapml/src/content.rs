//! Element tree model: elements, list containers and the shared holder surface

pub mod element;
pub mod holder;
pub mod list;

pub use element::Element;
pub use holder::{ElementHolder, Section};
pub use list::ElementList;

use crate::writer::{FormatConfig, XmlWriter};

/// A child node of an element, list, header, body or detail.
///
/// Children render in insertion order regardless of variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Element(Element),
    List(ElementList),
}

impl Child {
    pub fn name(&self) -> &str {
        match self {
            Self::Element(element) => element.name(),
            Self::List(list) => list.name(),
        }
    }

    pub(crate) fn write(&self, w: &mut XmlWriter<'_>, depth: usize) {
        match self {
            Self::Element(element) => element.write(w, depth),
            Self::List(list) => list.write(w, depth),
        }
    }
}

/// Writes each child at `depth`, in order
pub(crate) fn write_children(children: &[Child], w: &mut XmlWriter<'_>, depth: usize) {
    for child in children {
        child.write(w, depth);
    }
}

/// A node that can be rendered on its own, outside an envelope
pub trait SoapComponent {
    fn write_to(&self, w: &mut XmlWriter<'_>, depth: usize);

    /// Renders with the given configuration
    fn render(&self, config: &FormatConfig) -> String {
        let mut w = XmlWriter::new(config);
        self.write_to(&mut w, 0);
        w.finish()
    }

    /// Single-line XML
    fn to_compact_string(&self) -> String {
        self.render(&FormatConfig::compact())
    }

    /// Indented XML using `indent` once per nesting level
    fn to_pretty_string(&self, indent: &str) -> String {
        self.render(&FormatConfig::pretty().with_indent(indent))
    }
}
