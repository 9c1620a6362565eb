use crate::domain::model::Element;
use crate::domain::ports::DisplaySink;
use std::collections::BTreeMap;

/// In-memory display: keeps the last text, image and fill per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDisplay {
    texts: BTreeMap<Element, String>,
    images: BTreeMap<Element, String>,
    fills: BTreeMap<Element, String>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, element: Element) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    pub fn image(&self, element: Element) -> Option<&str> {
        self.images.get(&element).map(String::as_str)
    }

    pub fn fill(&self, element: Element) -> Option<&str> {
        self.fills.get(&element).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len() + self.images.len() + self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One `id.kind = value` line per written property, in element order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.len());
        for (kind, map) in [("text", &self.texts), ("image", &self.images), ("fill", &self.fills)] {
            for (element, value) in map {
                lines.push(format!("{}.{} = {}", element.id(), kind, value));
            }
        }
        lines
    }
}

impl DisplaySink for MemoryDisplay {
    fn set_text(&mut self, element: Element, text: &str) {
        self.texts.insert(element, text.to_string());
    }

    fn set_image(&mut self, element: Element, image: &str) {
        self.images.insert(element, image.to_string());
    }

    fn set_fill(&mut self, element: Element, color: &str) {
        self.fills.insert(element, color.to_string());
    }
}
