use std::fmt;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

/// Event handler stored in a node description, invoked by the embedding
/// engine when the named event fires.
pub type Handler = Rc<dyn Fn(&Event)>;

/// Lifecycle hook stored in a node description, invoked by the patcher
/// around insertion/update/removal of the element.
pub type HookFn = Rc<dyn Fn(&Node)>;

/// Payload delivered to event handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// Current value of the target control, when the backend has one.
    pub value: Option<String>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            name: kind.as_str().to_string(),
            value: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Common UI event names. Arbitrary names remain possible through
/// [`crate::content::on_named`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DblClick,
    MouseDown,
    MouseUp,
    MouseEnter,
    MouseLeave,
    KeyDown,
    KeyUp,
    Input,
    Change,
    Submit,
    Focus,
    Blur,
    Scroll,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::DblClick => "dblclick",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseUp => "mouseup",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::Submit => "submit",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
            EventKind::Scroll => "scroll",
        }
    }
}

/// Lifecycle hooks a patcher may invoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookKind {
    Insert,
    Update,
    Remove,
}

impl HookKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::Insert => "insert",
            HookKind::Update => "update",
            HookKind::Remove => "remove",
        }
    }
}

/// Identity key used by diffing engines to match elements across passes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => write!(f, "{s}"),
            Key::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

macro_rules! key_from_int {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Key {
            fn from(n: $ty) -> Self {
                Key::Int(n as i64)
            }
        })+
    };
}

key_from_int!(i64, i32, u32, usize);

/// Attribute or property value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// `Bool(false)` is the one falsy value; such entries are excluded
    /// from the assembled attribute map.
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Bool(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value {
            fn from(n: $ty) -> Self {
                Value::Int(n as i64)
            }
        })+
    };
}

value_from_int!(i64, i32, u32, usize);

/// One node of a UI tree, handed to the external patcher. Immutable once
/// assembled; cloning is cheap (handlers and hooks are `Rc`).
#[derive(Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Node {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn key(&self) -> Option<&Key> {
        self.as_element().and_then(|el| el.key.as_ref())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => fmt::Debug::fmt(el, f),
            Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

/// The element record: tag name, identity key, the aspect maps, and the
/// ordered child sequence.
#[derive(Clone)]
pub struct Element {
    pub tag: String,
    pub key: Option<Key>,
    pub attrs: IndexMap<String, Value>,
    pub props: IndexMap<String, Value>,
    /// Presence means the class is on; falsy entries are dropped at assembly.
    pub classes: IndexSet<String>,
    pub style: IndexMap<String, String>,
    pub dataset: IndexMap<String, String>,
    pub on: IndexMap<String, Handler>,
    pub hooks: IndexMap<HookKind, HookFn>,
    pub children: Vec<Node>,
}

impl PartialEq for Element {
    // Handlers and hooks are closures; they compare by registered name only.
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.key == other.key
            && self.attrs == other.attrs
            && self.props == other.props
            && self.classes == other.classes
            && self.style == other.style
            && self.dataset == other.dataset
            && self.on.len() == other.on.len()
            && self.on.keys().all(|k| other.on.contains_key(k))
            && self.hooks.len() == other.hooks.len()
            && self.hooks.keys().all(|k| other.hooks.contains_key(k))
            && self.children == other.children
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("key", &self.key)
            .field("attrs", &self.attrs)
            .field("props", &self.props)
            .field("classes", &self.classes)
            .field("style", &self.style)
            .field("dataset", &self.dataset)
            .field("on", &self.on.keys().collect::<Vec<_>>())
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .field("children", &self.children)
            .finish()
    }
}
