use std::cell::RefCell;
use std::rc::Rc;

use crate::node::Node;
use crate::store::{Store, Subscription};

/// External diff-and-apply capability, bound to a mount point.
///
/// Implemented for any `FnMut(Option<Node>, Node) -> Node` closure, so a
/// patcher is always an explicit parameter and independent sessions can
/// use distinct patch configurations.
pub trait Patch {
    /// Remove whatever was mounted before this session. Idempotent;
    /// called once by [`attach`].
    fn clear(&mut self) {}

    /// Diff `next` against `prev` and apply the difference. `prev` is
    /// `None` on the first paint after a clear. The return value must be
    /// fed back as `prev` on the next pass.
    fn patch(&mut self, prev: Option<Node>, next: Node) -> Node;
}

impl<F> Patch for F
where
    F: FnMut(Option<Node>, Node) -> Node,
{
    fn patch(&mut self, prev: Option<Node>, next: Node) -> Node {
        self(prev, next)
    }
}

struct Target {
    patcher: Box<dyn Patch>,
    prev: Option<Node>,
}

/// An attached render session: one live subscription binding a state
/// container to a view function and a patcher.
///
/// The session exclusively owns the mount's previous-node handle. There
/// is no way to operate on a detached session: [`Session::detach`]
/// consumes it.
pub struct Session<S: Clone + 'static> {
    store: Store<S>,
    target: Rc<RefCell<Target>>,
    sub: Option<Subscription<S>>,
}

/// Bind `initial` state to a view and paint once.
///
/// `view_factory` is invoked exactly once with the live store handle and
/// must return the zero-argument render closure: wiring belongs in the
/// factory, rendering in the closure. After the factory runs, the render
/// closure is subscribed to the store and invoked once for the initial
/// paint. A panicking factory or render closure propagates to the caller;
/// no state is rolled back.
pub fn attach<S, P, F, V>(patcher: P, initial: S, view_factory: F) -> Session<S>
where
    S: Clone + 'static,
    P: Patch + 'static,
    F: FnOnce(Store<S>) -> V,
    V: Fn() -> Node + 'static,
{
    let mut patcher: Box<dyn Patch> = Box::new(patcher);
    patcher.clear();
    let target = Rc::new(RefCell::new(Target {
        patcher,
        prev: None,
    }));
    let store = Store::new(initial);
    let sub = wire(&store, &target, view_factory);
    log::debug!("session attached");
    Session {
        store,
        target,
        sub: Some(sub),
    }
}

impl<S: Clone + 'static> Session<S> {
    /// Handle to the live state container.
    pub fn store(&self) -> Store<S> {
        self.store.clone()
    }

    /// Hot-swap the view function, preserving state.
    ///
    /// The old subscription is cancelled before anything else happens, so
    /// no notification is ever observed by both the old and the new render
    /// callback. The replacement container is seeded with the outgoing
    /// container's current value, and the previous-node handle survives
    /// the swap: the new view's first paint diffs against the old tree.
    /// Synchronous throughout.
    pub fn reattach<F, V>(&mut self, view_factory: F)
    where
        F: FnOnce(Store<S>) -> V,
        V: Fn() -> Node + 'static,
    {
        if let Some(sub) = self.sub.take() {
            sub.cancel();
        }
        let store = Store::new(self.store.get());
        let sub = wire(&store, &self.target, view_factory);
        self.store = store;
        self.sub = Some(sub);
        log::debug!("session reattached");
    }

    /// Tear the session down: the subscription is cancelled and no
    /// further renders occur.
    pub fn detach(mut self) {
        if let Some(sub) = self.sub.take() {
            sub.cancel();
        }
        log::debug!("session detached");
    }
}

fn wire<S, F, V>(
    store: &Store<S>,
    target: &Rc<RefCell<Target>>,
    view_factory: F,
) -> Subscription<S>
where
    S: Clone + 'static,
    F: FnOnce(Store<S>) -> V,
    V: Fn() -> Node + 'static,
{
    let view: Rc<dyn Fn() -> Node> = Rc::new(view_factory(store.clone()));
    let sub = store.on({
        let store = store.clone();
        let target = target.clone();
        let view = view.clone();
        move |_| render_pass(&store, &view, &target)
    });
    // Initial paint, after subscribing.
    render_pass(store, &view, target);
    sub
}

// One serialized render. The transaction is the re-entrancy guard: any
// mutation the view performs lands in a single follow-up dispatch instead
// of recursing into another render mid-pass.
fn render_pass<S: Clone + 'static>(
    store: &Store<S>,
    view: &Rc<dyn Fn() -> Node>,
    target: &Rc<RefCell<Target>>,
) {
    store.transaction(|| {
        let next = view();
        let mut target = target.borrow_mut();
        let prev = target.prev.take();
        let rendered = target.patcher.patch(prev, next);
        target.prev = Some(rendered);
    });
}
