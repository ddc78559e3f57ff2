use std::rc::Rc;

use crate::node::{Event, EventKind, Handler, HookFn, HookKind, Key, Node, Value};

/// Everything an element can be told: children, text, and the tagged
/// descriptors that each set one aspect of the node description.
///
/// The normalizer dispatches on this exhaustively, so adding a kind is a
/// compile error until every fold site handles it.
#[derive(Clone)]
pub enum Content {
    /// A text child.
    Text(String),
    /// A nested child node.
    Child(Node),
    /// A list, flattened in order to any depth.
    Many(Vec<Content>),
    /// Dropped without effect; what booleans, `None` and `()` fold to.
    Nothing,
    /// Identity key for the diffing engine.
    Key(Key),
    Attrs(Vec<(String, Value)>),
    Props(Vec<(String, Value)>),
    Classes(Vec<(String, bool)>),
    Style(Vec<(String, String)>),
    Dataset(Vec<(String, String)>),
    On(Vec<(String, Handler)>),
    Hook(Vec<(HookKind, HookFn)>),
}

/// Set the identity key, used by diffing engines to match elements for
/// reordering and animations. The first key set on an element wins; a
/// conflicting later key is ignored with a diagnostic.
pub fn key(key: impl Into<Key>) -> Content {
    Content::Key(key.into())
}

/// Set the id attribute.
pub fn id(id: impl Into<String>) -> Content {
    Content::Attrs(vec![("id".to_string(), Value::Str(id.into()))])
}

/// Set attributes. Per name, the last write in content order wins.
pub fn attrs<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Content
where
    K: Into<String>,
    V: Into<Value>,
{
    Content::Attrs(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// Set properties (engine-side state attached to the rendered node).
pub fn props<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Content
where
    K: Into<String>,
    V: Into<Value>,
{
    Content::Props(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// Set class memberships. A `false` entry suppresses the class even if an
/// earlier descriptor turned it on.
pub fn classes<K>(entries: impl IntoIterator<Item = (K, bool)>) -> Content
where
    K: Into<String>,
{
    Content::Classes(
        entries
            .into_iter()
            .map(|(k, on)| (k.into(), on))
            .collect(),
    )
}

/// Set one or more classes from a whitespace-separated list.
pub fn classed(names: &str) -> Content {
    Content::Classes(
        names
            .split_whitespace()
            .map(|name| (name.to_string(), true))
            .collect(),
    )
}

/// Set style properties, written as CSS property names.
pub fn styles<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Content
where
    K: Into<String>,
    V: Into<String>,
{
    Content::Style(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// Set a single style property.
pub fn style(name: impl Into<String>, value: impl Into<String>) -> Content {
    Content::Style(vec![(name.into(), value.into())])
}

/// Set data-* entries.
pub fn dataset<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Content
where
    K: Into<String>,
    V: Into<String>,
{
    Content::Dataset(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// Register a handler for a common event.
pub fn on(kind: EventKind, handler: impl Fn(&Event) + 'static) -> Content {
    Content::On(vec![(kind.as_str().to_string(), Rc::new(handler))])
}

/// Register a handler under an arbitrary event name.
pub fn on_named(name: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Content {
    Content::On(vec![(name.into(), Rc::new(handler))])
}

/// Register a single lifecycle hook.
pub fn hook(kind: HookKind, hook: impl Fn(&Node) + 'static) -> Content {
    Content::Hook(vec![(kind, Rc::new(hook))])
}

/// Register several lifecycle hooks at once.
pub fn hooks(entries: impl IntoIterator<Item = (HookKind, HookFn)>) -> Content {
    Content::Hook(entries.into_iter().collect())
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Child(node)
    }
}

// Booleans fold to nothing, which is what makes `cond.then(|| ...)` and
// short-circuit child expressions composable.
impl From<bool> for Content {
    fn from(_: bool) -> Self {
        Content::Nothing
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::Nothing
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Content::Nothing,
        }
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(items: Vec<T>) -> Self {
        Content::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
    fn from(items: [T; N]) -> Self {
        Content::Many(items.into_iter().map(Into::into).collect())
    }
}

// Numbers coerce to text children.
macro_rules! content_from_number {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Content {
            fn from(n: $ty) -> Self {
                Content::Text(n.to_string())
            }
        })+
    };
}

content_from_number!(i64, i32, u32, u64, usize, f64, f32);

// Tuples stand in for the variadic content list; each component converts
// independently, so text, children and descriptors mix freely.
macro_rules! content_from_tuple {
    ($(($T:ident, $v:ident)),+) => {
        impl<$($T: Into<Content>),+> From<($($T,)+)> for Content {
            fn from(($($v,)+): ($($T,)+)) -> Self {
                Content::Many(vec![$($v.into()),+])
            }
        }
    };
}

content_from_tuple!((A, a));
content_from_tuple!((A, a), (B, b));
content_from_tuple!((A, a), (B, b), (C, c));
content_from_tuple!((A, a), (B, b), (C, c), (D, d));
content_from_tuple!((A, a), (B, b), (C, c), (D, d), (E, e));
content_from_tuple!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f));
content_from_tuple!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g));
content_from_tuple!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g), (H, h));
content_from_tuple!(
    (A, a),
    (B, b),
    (C, c),
    (D, d),
    (E, e),
    (F, f),
    (G, g),
    (H, h),
    (I, i)
);
content_from_tuple!(
    (A, a),
    (B, b),
    (C, c),
    (D, d),
    (E, e),
    (F, f),
    (G, g),
    (H, h),
    (I, i),
    (J, j)
);
content_from_tuple!(
    (A, a),
    (B, b),
    (C, c),
    (D, d),
    (E, e),
    (F, f),
    (G, g),
    (H, h),
    (I, i),
    (J, j),
    (K, k)
);
content_from_tuple!(
    (A, a),
    (B, b),
    (C, c),
    (D, d),
    (E, e),
    (F, f),
    (G, g),
    (H, h),
    (I, i),
    (J, j),
    (K, k),
    (L, l)
);
