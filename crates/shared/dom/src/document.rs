use parking_lot::Mutex;
use std::sync::Arc;

use crate::node::{Element, NodeId};

/// Element tree shared between the host page and engine timers
pub type SharedDocument = Arc<Mutex<Document>>;

/// Arena of elements rooted at a `body` element
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
        }
    }

    /// Wrap this document for sharing with engines
    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.element(node).children
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().copied()
    }

    // -- attributes ---------------------------------------------------------

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.element_mut(node).id = Some(id.to_string());
    }

    /// Replace the class list with the whitespace-separated `class_name`
    pub fn set_class_name(&mut self, node: NodeId, class_name: &str) {
        self.element_mut(node).classes = class_name.split_whitespace().map(String::from).collect();
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.element(node).has_class(class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).has_class(class)
    }

    pub fn set_data(&mut self, node: NodeId, key: &str, value: &str) {
        self.element_mut(node)
            .dataset
            .insert(key.to_string(), value.to_string());
    }

    pub fn data(&self, node: NodeId, key: &str) -> Option<&str> {
        self.element(node).data(key)
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.element_mut(node).text = Some(text.to_string());
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).text()
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.element_mut(node)
            .style
            .insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).style(property)
    }

    // -- structure ----------------------------------------------------------

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.element_mut(parent).children.push(child);
        self.element_mut(child).parent = Some(parent);
    }

    /// Insert `child` before the current first child of `parent`
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.element_mut(parent).children.insert(0, child);
        self.element_mut(child).parent = Some(parent);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.element_mut(child).parent.take() {
            self.element_mut(old_parent).children.retain(|c| *c != child);
        }
    }

    /// True if `node` is reachable from `body`
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == self.body {
                return true;
            }
            current = self.element(n).parent;
        }
        false
    }

    // -- queries ------------------------------------------------------------

    /// First connected element carrying `id`, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|n| self.element(*n).id() == Some(id))
    }

    /// First descendant of `root` (excluding `root`) with `class`
    pub fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|n| self.has_class(*n, class))
    }

    /// All descendants of `root` (excluding `root`) with `class`, in document order
    pub fn query_all_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|n| self.has_class(*n, class))
            .collect()
    }

    /// Pre-order walk below `root`
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        doc.set_id(outer, "outer");
        let a = doc.create_element("span");
        doc.set_class_name(a, "item first");
        let b = doc.create_element("span");
        doc.add_class(b, "item");
        doc.append_child(outer, a);
        doc.append_child(outer, b);
        let body = doc.body();
        doc.append_child(body, outer);
        (doc, outer, a, b)
    }

    #[test]
    fn test_query_in_document_order() {
        let (doc, outer, a, b) = tree();
        assert_eq!(doc.query_class(outer, "item"), Some(a));
        assert_eq!(doc.query_all_class(outer, "item"), vec![a, b]);
        assert_eq!(doc.query_class(outer, "missing"), None);
    }

    #[test]
    fn test_query_excludes_root() {
        let (doc, _outer, a, _b) = tree();
        assert_eq!(doc.query_class(a, "item"), None);
    }

    #[test]
    fn test_prepend_and_append() {
        let (mut doc, outer, a, b) = tree();
        let c = doc.create_element("span");
        doc.prepend_child(outer, c);
        assert_eq!(doc.children(outer), &[c, a, b]);

        // Re-appending moves instead of duplicating
        doc.append_child(outer, c);
        assert_eq!(doc.children(outer), &[a, b, c]);
    }

    #[test]
    fn test_get_element_by_id_requires_connection() {
        let (mut doc, outer, _a, _b) = tree();
        assert_eq!(doc.get_element_by_id("outer"), Some(outer));

        let loose = doc.create_element("div");
        doc.set_id(loose, "loose");
        assert!(!doc.is_connected(loose));
        assert_eq!(doc.get_element_by_id("loose"), None);

        doc.append_child(outer, loose);
        assert_eq!(doc.get_element_by_id("loose"), Some(loose));
    }

    #[test]
    fn test_set_class_name_replaces_list() {
        let (mut doc, _outer, a, _b) = tree();
        doc.set_class_name(a, "  one   two ");
        assert_eq!(doc.element(a).classes(), &["one".to_string(), "two".to_string()]);
        doc.add_class(a, "two");
        assert_eq!(doc.element(a).classes().len(), 2);
    }

    #[test]
    fn test_text_data_and_style() {
        let (mut doc, _outer, a, _b) = tree();
        doc.set_text(a, "--");
        doc.set_data(a, "timezone", "Asia/Tokyo");
        doc.set_style(a, "transform", "rotate(90deg)");
        assert_eq!(doc.text(a), Some("--"));
        assert_eq!(doc.data(a, "timezone"), Some("Asia/Tokyo"));
        assert_eq!(doc.style(a, "transform"), Some("rotate(90deg)"));
        assert_eq!(doc.element(a).parent(), doc.get_element_by_id("outer"));
    }
}
