use arbor_core::{Element, Node, Value};

// Elements with no closing tag; their children have no HTML image.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Serialize a node description to HTML.
///
/// Attributes render in map order; `Bool(true)` values render as bare
/// attributes. Classes join into one `class` attribute, style entries
/// into one `style` attribute, dataset entries into `data-*` attributes.
/// Properties, handlers and hooks have no HTML image and are skipped.
///
/// ```rust
/// use arbor_core::prelude::*;
/// use arbor_html::to_html;
///
/// assert_eq!(
///     to_html(&element("span#faq.right", ())),
///     r#"<span id="faq" class="right"></span>"#
/// );
/// ```
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        match value {
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            // Assembly drops falsy attrs; guard hand-built trees anyway.
            Value::Bool(false) => {}
            value => {
                out.push_str(&format!(" {}=\"{}\"", name, escape_attr(&value.to_string())));
            }
        }
    }
    if !el.classes.is_empty() {
        let joined = el
            .classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(" class=\"{}\"", escape_attr(&joined)));
    }
    if !el.style.is_empty() {
        let css = el
            .style
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!(" style=\"{}\"", escape_attr(&css)));
    }
    for (name, value) in &el.dataset {
        out.push_str(&format!(" data-{}=\"{}\"", name, escape_attr(value)));
    }
    out.push('>');
    if VOID.contains(&el.tag.as_str()) {
        return;
    }
    for child in &el.children {
        write_node(out, child);
    }
    out.push_str(&format!("</{}>", el.tag));
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
