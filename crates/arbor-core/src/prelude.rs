pub use crate::content::{
    Content, attrs, classed, classes, dataset, hook, hooks, id, key, on, on_named, props, style,
    styles,
};
pub use crate::element::element;
pub use crate::lifecycle::{Patch, Session, attach};
pub use crate::node::{
    Element, Event, EventKind, Handler, HookFn, HookKind, Key, Node, Value,
};
pub use crate::store::{Store, Subscription};
