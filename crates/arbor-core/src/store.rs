use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle for one registered listener.
    pub struct SubId;
}

type Listener<S> = Rc<dyn Fn(&S)>;

/// Observable state container driving re-render.
///
/// Cloning the handle shares the underlying container. Notification is
/// synchronous and immediate on mutation; inside a [`Store::transaction`]
/// mutations are coalesced into a single dispatch when the outermost
/// transaction ends. Single-threaded by construction.
pub struct Store<S: Clone + 'static> {
    inner: Rc<dyn Container<S>>,
}

impl<S: Clone + 'static> Clone for Store<S> {
    fn clone(&self) -> Self {
        Store {
            inner: self.inner.clone(),
        }
    }
}

/// Handle for one registered listener. Dropping it does not unsubscribe;
/// cancellation is explicit.
pub struct Subscription<S: Clone + 'static> {
    store: Store<S>,
    id: SubId,
}

impl<S: Clone + 'static> Subscription<S> {
    /// Remove the listener. It will not be invoked again, not even by a
    /// dispatch already in progress.
    pub fn cancel(self) {
        self.store.inner.unsubscribe(self.id);
    }
}

trait Container<S: Clone + 'static> {
    fn get(&self) -> S;
    fn set(&self, value: S);
    fn update(&self, mutate: &mut dyn FnMut(&mut S));
    fn subscribe(&self, listener: Listener<S>) -> SubId;
    fn unsubscribe(&self, id: SubId);
    fn transaction(&self, body: &mut dyn FnMut());
}

impl<S: Clone + 'static> Store<S> {
    /// A fresh root container holding `value`.
    pub fn new(value: S) -> Self {
        Store {
            inner: Rc::new(Root {
                state: RefCell::new(RootState {
                    value,
                    subs: SlotMap::with_key(),
                    depth: 0,
                    dirty: false,
                }),
            }),
        }
    }

    /// Current value.
    pub fn get(&self) -> S {
        self.inner.get()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: S) {
        self.inner.set(value);
    }

    /// Mutate the value in place; notification as for [`Store::set`].
    pub fn update(&self, mutate: impl FnOnce(&mut S)) {
        let mut mutate = Some(mutate);
        self.inner.update(&mut |value| {
            if let Some(mutate) = mutate.take() {
                mutate(value);
            }
        });
    }

    /// Register a change listener; it stays live until
    /// [`Subscription::cancel`].
    pub fn on(&self, listener: impl Fn(&S) + 'static) -> Subscription<S> {
        let id = self.inner.subscribe(Rc::new(listener));
        Subscription {
            store: self.clone(),
            id,
        }
    }

    /// Run `body` with notifications coalesced: however many mutations it
    /// performs, at most one dispatch fires, when the outermost
    /// transaction ends.
    pub fn transaction<R>(&self, body: impl FnOnce() -> R) -> R {
        let mut body = Some(body);
        let mut out = None;
        self.inner.transaction(&mut || {
            if let Some(body) = body.take() {
                out = Some(body());
            }
        });
        out.expect("transaction body runs exactly once")
    }

    /// Project a sub-container through a read/write lens. Reads, writes
    /// and subscriptions route through the root container, so a projected
    /// write notifies root subscribers exactly once.
    pub fn at<T: Clone + 'static>(
        &self,
        read: impl Fn(&S) -> T + 'static,
        write: impl Fn(&mut S, T) + 'static,
    ) -> Store<T> {
        Store {
            inner: Rc::new(Lens {
                parent: self.clone(),
                read: Rc::new(read),
                write: Rc::new(write),
            }),
        }
    }
}

struct Root<S: Clone + 'static> {
    state: RefCell<RootState<S>>,
}

struct RootState<S: 'static> {
    value: S,
    subs: SlotMap<SubId, Listener<S>>,
    depth: u32,
    dirty: bool,
}

impl<S: Clone + 'static> Root<S> {
    // Snapshot the keys, then re-check each before the call, so a listener
    // cancelled mid-dispatch never fires. No borrow is held across a
    // listener invocation.
    fn dispatch(&self) {
        let ids: Vec<SubId> = self.state.borrow().subs.keys().collect();
        for id in ids {
            let listener = self.state.borrow().subs.get(id).cloned();
            if let Some(listener) = listener {
                let value = self.state.borrow().value.clone();
                listener(&value);
            }
        }
    }

    fn changed(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.depth > 0 {
            state.dirty = true;
            false
        } else {
            true
        }
    }
}

impl<S: Clone + 'static> Container<S> for Root<S> {
    fn get(&self) -> S {
        self.state.borrow().value.clone()
    }

    fn set(&self, value: S) {
        self.state.borrow_mut().value = value;
        if self.changed() {
            self.dispatch();
        }
    }

    fn update(&self, mutate: &mut dyn FnMut(&mut S)) {
        mutate(&mut self.state.borrow_mut().value);
        if self.changed() {
            self.dispatch();
        }
    }

    fn subscribe(&self, listener: Listener<S>) -> SubId {
        self.state.borrow_mut().subs.insert(listener)
    }

    fn unsubscribe(&self, id: SubId) {
        self.state.borrow_mut().subs.remove(id);
    }

    fn transaction(&self, body: &mut dyn FnMut()) {
        self.state.borrow_mut().depth += 1;
        body();
        let fire = {
            let mut state = self.state.borrow_mut();
            state.depth -= 1;
            let fire = state.depth == 0 && state.dirty;
            if fire {
                state.dirty = false;
            }
            fire
        };
        if fire {
            self.dispatch();
        }
    }
}

struct Lens<P: Clone + 'static, T: 'static> {
    parent: Store<P>,
    read: Rc<dyn Fn(&P) -> T>,
    write: Rc<dyn Fn(&mut P, T)>,
}

impl<P: Clone + 'static, T: Clone + 'static> Container<T> for Lens<P, T> {
    fn get(&self) -> T {
        (self.read)(&self.parent.get())
    }

    fn set(&self, value: T) {
        let mut value = Some(value);
        let write = self.write.clone();
        self.parent.inner.update(&mut |parent| {
            if let Some(value) = value.take() {
                write(parent, value);
            }
        });
    }

    fn update(&self, mutate: &mut dyn FnMut(&mut T)) {
        let read = self.read.clone();
        let write = self.write.clone();
        self.parent.inner.update(&mut |parent| {
            let mut part = read(parent);
            mutate(&mut part);
            write(parent, part);
        });
    }

    fn subscribe(&self, listener: Listener<T>) -> SubId {
        let read = self.read.clone();
        self.parent
            .inner
            .subscribe(Rc::new(move |parent: &P| listener(&read(parent))))
    }

    fn unsubscribe(&self, id: SubId) {
        self.parent.inner.unsubscribe(id);
    }

    fn transaction(&self, body: &mut dyn FnMut()) {
        self.parent.inner.transaction(body);
    }
}
