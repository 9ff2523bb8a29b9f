//! DOM-facing value types.
//!
//! Components communicate state to the stylesheet through class names and
//! inline style properties only. This module holds the small value types
//! used to build those, plus the ancestor walk used by delegated event
//! handlers.
//!
//! ## Ancestor walk
//!
//! ```text
//! click on <span> inside .pp-modal
//!
//!   NodePath[0]  span             (target)
//!   NodePath[1]  .pp-modal
//!   NodePath[2]  .pp-modal-overlay
//!
//! closest(.pp-modal-overlay) = 2  -> not the target, modal stays open
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of CSS class names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated `class` attribute value.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for name in value.split_whitespace() {
            list.add(name);
        }
        list
    }

    /// Add a class. Returns `true` if it was not present before.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    /// Remove a class. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != name);
        before != self.0.len()
    }

    /// Toggle a class and return whether it is now present.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.add(name)
        }
    }

    /// Force a class on or off.
    pub fn set(&mut self, name: &str, present: bool) {
        if present {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    pub fn contains_all(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.contains(n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for name in iter {
            list.add(name);
        }
        list
    }
}

/// Inline `style` attribute, keeping property insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle(Vec<(String, String)>);

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (regular or `--custom`), replacing any earlier value.
    pub fn set(&mut self, property: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property.to_string(), value)),
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.0.iter().position(|(p, _)| p == property)?;
        Some(self.0.remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (p, v) in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", p, v)?;
            first = false;
        }
        Ok(())
    }
}

/// Identity and attributes of one element taking part in event routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: Option<String>,
    pub classes: ClassList,
    /// `data-*` attributes, keyed without the `data-` prefix
    pub data: BTreeMap<String, String>,
}

impl NodeInfo {
    /// Node carrying the given space separated classes.
    pub fn with_classes(classes: &str) -> Self {
        Self {
            classes: ClassList::parse(classes),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn data_attr(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }
}

/// Event target followed by its ancestors, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath(Vec<NodeInfo>);

impl NodePath {
    pub fn new(nodes: Vec<NodeInfo>) -> Self {
        Self(nodes)
    }

    pub fn target(&self) -> Option<&NodeInfo> {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nearest node (target included) matching `pred`, with its depth.
    ///
    /// Depth 0 is the event target itself.
    pub fn closest<P>(&self, pred: P) -> Option<(usize, &NodeInfo)>
    where
        P: Fn(&NodeInfo) -> bool,
    {
        self.0.iter().enumerate().find(|(_, node)| pred(node))
    }

    /// Nearest node carrying `class`.
    pub fn closest_class(&self, class: &str) -> Option<(usize, &NodeInfo)> {
        self.closest(|n| n.has_class(class))
    }
}

/// Accumulates a [`NodePath`] while a click bubbles.
///
/// Each participating element pushes itself from its own handler; the
/// document-level handler runs last and takes the finished path.
#[derive(Debug, Default)]
pub struct ClickTrail {
    nodes: Vec<NodeInfo>,
}

impl ClickTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeInfo) {
        self.nodes.push(node);
    }

    /// Path recorded so far, without consuming it.
    pub fn peek(&self) -> NodePath {
        NodePath(self.nodes.clone())
    }

    /// Finish the current click and reset for the next one.
    pub fn take(&mut self) -> NodePath {
        NodePath(std::mem::take(&mut self.nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_dedups_and_keeps_order() {
        let mut list = ClassList::parse("reveal  stagger reveal");
        assert_eq!(list.to_string(), "reveal stagger");
        assert!(list.add("visible"));
        assert!(!list.add("visible"));
        assert_eq!(list.to_string(), "reveal stagger visible");
    }

    #[test]
    fn class_list_toggle() {
        let mut list = ClassList::new();
        assert!(list.toggle("open"));
        assert!(list.contains("open"));
        assert!(!list.toggle("open"));
        assert!(list.is_empty());
    }

    #[test]
    fn class_list_contains_all() {
        let list: ClassList = ["pp-hero-card", "reveal", "visible"].into_iter().collect();
        assert!(list.contains_all(&["reveal", "visible"]));
        assert!(!list.contains_all(&["reveal", "float-card"]));
    }

    #[test]
    fn inline_style_replaces_and_renders() {
        let mut style = InlineStyle::new();
        style.set("width", "400px").set("--pp-hero-scale", "0.800");
        style.set("width", "500px");
        assert_eq!(style.get("width"), Some("500px"));
        assert_eq!(style.to_string(), "width: 500px; --pp-hero-scale: 0.800;");
        assert_eq!(style.remove("width").as_deref(), Some("500px"));
        assert_eq!(style.to_string(), "--pp-hero-scale: 0.800;");
    }

    #[test]
    fn closest_reports_depth() {
        let path = NodePath::new(vec![
            NodeInfo::with_classes("pp-modal-body"),
            NodeInfo::with_classes("pp-modal"),
            NodeInfo::with_classes("pp-modal-overlay").id("signupModal"),
        ]);
        let (depth, node) = path.closest_class("pp-modal-overlay").unwrap();
        assert_eq!(depth, 2);
        assert_eq!(node.id.as_deref(), Some("signupModal"));
        assert!(path.closest_class("pp-modal-close").is_none());
    }

    #[test]
    fn click_trail_take_resets() {
        let mut trail = ClickTrail::new();
        trail.push(NodeInfo::with_classes("pp-join-btn"));
        assert_eq!(trail.peek().len(), 1);
        let path = trail.take();
        assert_eq!(path.len(), 1);
        assert!(trail.take().is_empty());
    }
}
