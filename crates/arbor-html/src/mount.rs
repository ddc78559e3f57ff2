use std::cell::RefCell;
use std::rc::Rc;

use arbor_core::{Element, Event, HookKind, Node, Patch, Session, Store, Value};
use thiserror::Error;

use crate::render::to_html;

/// Synthetic event dispatch failures on a headless [`Mount`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("nothing is mounted")]
    NothingMounted,

    #[error("no element with id '{id}'")]
    NoSuchElement { id: String },

    #[error("element '{id}' has no handler for '{event}'")]
    NoHandler { id: String, event: String },
}

/// A headless render target: each patch serializes the tree to HTML into
/// a shared buffer, and events can be fired at the mounted tree by
/// element id.
///
/// Clones share the buffer, so one handle goes to [`attach`] while
/// another drives and inspects the session from tests or a host shell.
#[derive(Clone, Default)]
pub struct Mount {
    inner: Rc<RefCell<Mounted>>,
}

#[derive(Default)]
struct Mounted {
    html: String,
    tree: Option<Node>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current serialized output.
    pub fn html(&self) -> String {
        self.inner.borrow().html.clone()
    }

    /// Current mounted tree, if any.
    pub fn node(&self) -> Option<Node> {
        self.inner.borrow().tree.clone()
    }

    /// Fire `event` at the element whose `id` attribute equals `id`.
    ///
    /// The handler is cloned out before it runs, so handlers are free to
    /// mutate state and re-render this very mount.
    pub fn fire(&self, id: &str, event: &Event) -> Result<(), DispatchError> {
        let handler = {
            let mounted = self.inner.borrow();
            let tree = mounted.tree.as_ref().ok_or(DispatchError::NothingMounted)?;
            let el = find_by_id(tree, id).ok_or_else(|| DispatchError::NoSuchElement {
                id: id.to_string(),
            })?;
            el.on
                .get(&event.name)
                .cloned()
                .ok_or_else(|| DispatchError::NoHandler {
                    id: id.to_string(),
                    event: event.name.clone(),
                })?
        };
        handler(event);
        Ok(())
    }
}

impl Patch for Mount {
    fn clear(&mut self) {
        let outgoing = {
            let mut mounted = self.inner.borrow_mut();
            mounted.html.clear();
            mounted.tree.take()
        };
        if let Some(tree) = outgoing {
            log::debug!("clearing mounted tree");
            run_hooks(&tree, HookKind::Remove);
        }
    }

    fn patch(&mut self, prev: Option<Node>, next: Node) -> Node {
        let kind = if prev.is_none() {
            HookKind::Insert
        } else {
            HookKind::Update
        };
        {
            let mut mounted = self.inner.borrow_mut();
            mounted.html = to_html(&next);
            mounted.tree = Some(next.clone());
        }
        // After the buffer update, so hooks observe the new output.
        run_hooks(&next, kind);
        next
    }
}

/// Attach with this crate's mount as the patcher, the pre-wired default
/// for embeddings that do not bring their own engine.
pub fn attach<S, F, V>(mount: &Mount, initial: S, view_factory: F) -> Session<S>
where
    S: Clone + 'static,
    F: FnOnce(Store<S>) -> V,
    V: Fn() -> Node + 'static,
{
    arbor_core::attach(mount.clone(), initial, view_factory)
}

fn find_by_id<'a>(node: &'a Node, id: &str) -> Option<&'a Element> {
    let el = node.as_element()?;
    if let Some(value) = el.attrs.get("id") {
        let matches = match value {
            Value::Str(s) => s == id,
            other => other.to_string() == id,
        };
        if matches {
            return Some(el);
        }
    }
    el.children.iter().find_map(|child| find_by_id(child, id))
}

fn run_hooks(node: &Node, kind: HookKind) {
    let Some(el) = node.as_element() else {
        return;
    };
    if let Some(hook) = el.hooks.get(&kind) {
        hook(node);
    }
    for child in &el.children {
        run_hooks(child, kind);
    }
}
