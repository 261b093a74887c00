use serde::{Deserialize, Serialize};

/// One element of a page's UI hierarchy: a name plus ordered attribute pairs
/// and ordered children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiElement {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<UiElement>,
}

/// Rooted UI-element tree of one page, as extracted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiTree {
    pub root: UiElement,
}

impl UiTree {
    /// Flatten the tree into one line per element, pre-order: the element
    /// itself first, then its children in order. Attribute pairs are joined
    /// as `[key@@value]`.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        let mut lines = Vec::new();
        flatten_into(&self.root, &mut lines);
        lines
    }
}

fn flatten_into(element: &UiElement, lines: &mut Vec<String>) {
    let mut attrs = String::new();
    for (key, value) in &element.attributes {
        attrs.push_str(&format!("[{key}@@{value}] "));
    }
    lines.push(format!("key={}, attr= {attrs}", element.name));
    for child in &element.children {
        flatten_into(child, lines);
    }
}
