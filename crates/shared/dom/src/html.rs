use std::fmt::Write;

use crate::document::Document;
use crate::node::NodeId;

/// Escape text for use in HTML content or a quoted attribute value
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Document {
    /// Serialize `node` and its subtree
    ///
    /// Attributes are written as id, class, `data-*` (sorted by key), style.
    /// Text content precedes child elements.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    /// Serialize the children of `node` only
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.text(node) {
            out.push_str(&escape_html(text));
        }
        for child in self.children(node) {
            self.write_html(*child, &mut out);
        }
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let el = self.element(node);
        let _ = write!(out, "<{}", el.tag());
        if let Some(id) = &el.id {
            let _ = write!(out, " id=\"{}\"", escape_html(id));
        }
        if !el.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&el.classes.join(" ")));
        }
        for (key, value) in &el.dataset {
            let _ = write!(out, " data-{}=\"{}\"", key, escape_html(value));
        }
        if !el.style.is_empty() {
            let style = el
                .style
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_html(&style));
        }
        out.push('>');
        out.push_str(&self.inner_html(node));
        let _ = write!(out, "</{}>", el.tag());
    }
}
