// crates/xtce-rs/src/ancillary.rs

//! Free-form descriptive metadata shared by systems, entities and data types.

use std::collections::BTreeMap;

/// Alternative names of an entity, keyed by namespace.
pub type Aliases = BTreeMap<String, String>;

/// One `<AncillaryData>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncillaryDataItem {
    pub name: String,
    pub value: String,
    /// Rendered as `@href`.
    pub url: Option<String>,
    /// Rendered as `@mimeType`.
    pub mimetype: Option<String>,
}

impl AncillaryDataItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            url: None,
            mimetype: None,
        }
    }
}

/// Ordered list of ancillary data items.
///
/// Names are not required to be unique: some consumers read repeated entries
/// with the same name as a list of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncillaryData {
    items: Vec<AncillaryDataItem>,
}

impl AncillaryData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain name/value item.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.items.push(AncillaryDataItem::new(name, value));
    }

    pub fn push(&mut self, item: AncillaryDataItem) {
        self.items.push(item);
    }

    /// Value of the first item with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AncillaryDataItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AncillaryData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| AncillaryDataItem::new(k, v))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AncillaryData {
    type Item = &'a AncillaryDataItem;
    type IntoIter = core::slice::Iter<'a, AncillaryDataItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
