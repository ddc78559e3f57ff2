use indexmap::{IndexMap, IndexSet};

use crate::content::Content;
use crate::node::{Element, Handler, HookFn, HookKind, Key, Node, Value};
use crate::tagspec;

/// Build a node description from a tag spec and content.
///
/// The spec names the element and may carry `.class` and `#id` sugar;
/// content is any nesting of children, text, numbers and descriptors
/// (see [`Content`]). Folding is strictly left to right over the
/// flattened list, so for every map-shaped aspect the later write wins
/// per key. Descriptors synthesized from the spec fold first and can be
/// overridden by explicit ones.
///
/// ```rust
/// use arbor_core::prelude::*;
///
/// let node = element("span#faq.right", "hello");
/// let el = node.as_element().unwrap();
/// assert_eq!(el.tag, "span");
/// assert!(el.classes.contains("right"));
/// assert_eq!(el.attrs.get("id"), Some(&Value::Str("faq".into())));
/// ```
pub fn element(spec: &str, content: impl Into<Content>) -> Node {
    let parsed = tagspec::parse(spec);
    let mut builder = Builder::new(parsed.name);
    for seeded in parsed.seed {
        builder.fold(seeded);
    }
    builder.fold(content.into());
    builder.finish()
}

/// Fold state for one `element` call. Lives only for the duration of the
/// call; nothing observes it mid-fold.
struct Builder {
    tag: String,
    key: Option<Key>,
    attrs: IndexMap<String, Value>,
    props: IndexMap<String, Value>,
    classes: IndexMap<String, bool>,
    style: IndexMap<String, String>,
    dataset: IndexMap<String, String>,
    on: IndexMap<String, Handler>,
    hooks: IndexMap<HookKind, HookFn>,
    children: Vec<Node>,
}

impl Builder {
    fn new(tag: String) -> Self {
        Builder {
            tag,
            key: None,
            attrs: IndexMap::new(),
            props: IndexMap::new(),
            classes: IndexMap::new(),
            style: IndexMap::new(),
            dataset: IndexMap::new(),
            on: IndexMap::new(),
            hooks: IndexMap::new(),
            children: Vec::new(),
        }
    }

    fn fold(&mut self, content: Content) {
        match content {
            Content::Nothing => {}
            Content::Text(text) => self.children.push(Node::Text(text)),
            Content::Child(node) => self.children.push(node),
            Content::Many(items) => {
                for item in items {
                    self.fold(item);
                }
            }
            Content::Key(key) => self.set_key(key),
            Content::Attrs(entries) => self.attrs.extend(entries),
            Content::Props(entries) => self.props.extend(entries),
            Content::Classes(entries) => self.classes.extend(entries),
            Content::Style(entries) => self.style.extend(entries),
            Content::Dataset(entries) => self.dataset.extend(entries),
            Content::On(entries) => self.on.extend(entries),
            Content::Hook(entries) => self.hooks.extend(entries),
        }
    }

    // The key is the one aspect where the first write wins; a different
    // later value is ignored with a diagnostic.
    fn set_key(&mut self, key: Key) {
        match &self.key {
            Some(first) if *first != key => {
                log::warn!(
                    "key set twice on <{}>: keeping {first}, ignoring {key}",
                    self.tag
                );
            }
            _ => self.key = Some(key),
        }
    }

    // Falsy classes and attrs fold through (so they can suppress earlier
    // writes) but never reach the assembled maps.
    fn finish(self) -> Node {
        let classes: IndexSet<String> = self
            .classes
            .into_iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect();
        let attrs: IndexMap<String, Value> = self
            .attrs
            .into_iter()
            .filter(|(_, value)| value.truthy())
            .collect();
        Node::Element(Element {
            tag: self.tag,
            key: self.key,
            attrs,
            props: self.props,
            classes,
            style: self.style,
            dataset: self.dataset,
            on: self.on,
            hooks: self.hooks,
            children: self.children,
        })
    }
}
