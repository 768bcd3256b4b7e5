//! Extra namespace declarations on the envelope element

use indexmap::IndexMap;

/// Namespace attributes written on `<prefix:Envelope>` in declaration order.
///
/// Keys are full attribute names (`xmlns:ns`); URIs are passed through
/// literally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Namespaces {
    entries: IndexMap<String, String>,
}

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `attribute="uri"`, replacing an earlier declaration of the
    /// same attribute in place
    pub fn ns(&mut self, attribute: impl Into<String>, uri: impl Into<String>) {
        self.entries.insert(attribute.into(), uri.into());
    }

    /// Declares `xmlns:prefix="uri"`
    pub fn prefix(&mut self, prefix: &str, uri: impl Into<String>) {
        self.ns(format!("xmlns:{prefix}"), uri);
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.entries.get(attribute).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Namespaces
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut namespaces = Self::new();
        for (attribute, uri) in iter {
            namespaces.ns(attribute, uri);
        }
        namespaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order_is_kept() {
        let mut ns = Namespaces::new();
        ns.ns("xmlns:ns", "http://org.khorum-oss.com/ghost-book");
        ns.prefix("common", "http://org.khorum-oss.com/common");
        ns.ns("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance");
        let keys: Vec<&str> = ns.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["xmlns:ns", "xmlns:common", "xmlns:xsi"]);
    }

    #[test]
    fn test_redeclaration_overwrites() {
        let ns: Namespaces = [("xmlns:a", "one"), ("xmlns:b", "two"), ("xmlns:a", "three")]
            .into_iter()
            .collect();
        assert_eq!(ns.len(), 2);
        assert_eq!(ns.get("xmlns:a"), Some("three"));
    }
}
